//! Activities Page
//!
//! Activity log with a type filter and calorie/distance totals.

use leptos::prelude::*;
use octofit_domain::format::{date_or_na, fixed2, plain, thousands};
use octofit_domain::views::activities::{activity_types, empty_message, filter_activities, totals};
use octofit_domain::views::ChoiceFilter;
use octofit_domain::{Activity, Entity};
use reactive_stores::Store;

use crate::components::{CollectionView, SummaryCard};
use crate::fetch::use_collection;
use crate::store::{ActivitiesView, ActivitiesViewStoreFields};

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let state = use_collection::<Activity>();
    let store = Store::new(ActivitiesView::default());

    view! {
        <CollectionView
            state=state
            noun="activities"
            populated={move |activities: Vec<Activity>| view! { <ActivitiesTable activities=activities store=store /> }.into_any()}
        />
    }
}

#[component]
fn ActivitiesTable(activities: Vec<Activity>, store: Store<ActivitiesView>) -> impl IntoView {
    let total = activities.len();
    let types = activity_types(&activities);
    let activities = StoredValue::new(activities);

    let filter = Memo::new(move |_| ChoiceFilter::from_choice(&store.type_choice().get()));
    let filtered = Memo::new(move |_| {
        let filter = filter.get();
        activities.with_value(|all| filter_activities(all, &filter).into_iter().cloned().collect::<Vec<_>>())
    });
    let sums = Memo::new(move |_| filtered.with(|shown| totals(&shown.iter().collect::<Vec<_>>())));

    view! {
        <div class="container mt-4">
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h2>"🏃 Activities"</h2>
                <span class="badge bg-primary">{format!("{} Total Activities", total)}</span>
            </div>

            <div class="row mb-4">
                <SummaryCard
                    label="Total Calories Burned"
                    tone="text-danger"
                    value=Signal::derive(move || thousands(sums.get().calories))
                />
                <SummaryCard
                    label="Total Distance"
                    tone="text-success"
                    value=Signal::derive(move || format!("{} km", fixed2(sums.get().distance)))
                />
                <SummaryCard
                    label="Filtered Activities"
                    tone="text-info"
                    value=Signal::derive(move || sums.get().count.to_string())
                />
            </div>

            <div class="card mb-4">
                <div class="card-body">
                    <div class="row">
                        <div class="col-md-4">
                            <label for="filterSelect" class="form-label">"Filter by Activity Type"</label>
                            <select
                                class="form-select"
                                id="filterSelect"
                                prop:value=move || store.type_choice().get()
                                on:change=move |ev| *store.type_choice().write() = event_target_value(&ev)
                            >
                                <option value="all">"All Activities"</option>
                                {types.into_iter().map(|kind| view! {
                                    <option value=kind.clone()>{kind.clone()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>
                </div>
            </div>

            <div class="table-responsive">
                <table class="table table-striped table-hover">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"User"</th>
                            <th>"Type"</th>
                            <th>"Duration (min)"</th>
                            <th>"Distance (km)"</th>
                            <th>"Calories"</th>
                            <th>"Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !filtered.read().is_empty()
                            fallback=move || view! {
                                <tr>
                                    <td colspan="7" class="text-center text-muted">
                                        {move || empty_message(&filter.get())}
                                    </td>
                                </tr>
                            }
                        >
                            <For
                                each=move || filtered.get().into_iter().enumerate()
                                key=|(i, activity)| (*i, activity.key())
                                children=move |(_, activity)| view! { <ActivityRow activity=activity /> }
                            />
                        </Show>
                    </tbody>
                </table>
            </div>

            <Show when=move || !filtered.read().is_empty()>
                <div class="mt-3 text-muted text-end">
                    {move || format!("Showing {} of {} activities", filtered.read().len(), total)}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ActivityRow(activity: Activity) -> impl IntoView {
    view! {
        <tr>
            <td><span class="badge bg-secondary">{activity.id().unwrap_or_default()}</span></td>
            <td><strong>{activity.user().unwrap_or_else(|| "Unknown".to_string())}</strong></td>
            <td><span class="badge bg-primary">{activity.activity_type().unwrap_or("N/A").to_string()}</span></td>
            <td>{activity.duration().unwrap_or_else(|| "0".to_string())}</td>
            <td>{plain(activity.distance())}</td>
            <td><span class="badge bg-danger">{plain(activity.calories())}</span></td>
            <td>{date_or_na(activity.date())}</td>
        </tr>
    }
}
