//! Workouts Page
//!
//! Workout suggestions filterable by difficulty, with an exercise detail
//! overlay.

use leptos::prelude::*;
use octofit_domain::views::workouts::{difficulties, difficulty_badge_class, filter_workouts};
use octofit_domain::views::ChoiceFilter;
use octofit_domain::{Entity, Exercise, Workout};
use reactive_stores::Store;

use crate::components::{CollectionView, DetailModal};
use crate::fetch::use_collection;
use crate::store::{WorkoutsView, WorkoutsViewStoreFields};

#[component]
pub fn WorkoutsPage() -> impl IntoView {
    let state = use_collection::<Workout>();
    let store = Store::new(WorkoutsView::default());

    view! {
        <CollectionView
            state=state
            noun="workouts"
            populated={move |workouts: Vec<Workout>| view! { <WorkoutsCatalog workouts=workouts store=store /> }.into_any()}
        />
    }
}

#[component]
fn WorkoutsCatalog(workouts: Vec<Workout>, store: Store<WorkoutsView>) -> impl IntoView {
    let total = workouts.len();
    let levels = difficulties(&workouts);
    let workouts = StoredValue::new(workouts);

    let filtered = Memo::new(move |_| {
        let filter = ChoiceFilter::from_choice(&store.difficulty_choice().get());
        workouts.with_value(|all| filter_workouts(all, &filter).into_iter().cloned().collect::<Vec<_>>())
    });
    let open_workout = move |workout: Workout| store.detail().write().open(workout);

    view! {
        <div class="container mt-4">
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h2>"💪 Workout Suggestions"</h2>
                <span class="badge bg-primary">{format!("{} Workouts Available", total)}</span>
            </div>

            <div class="card mb-4">
                <div class="card-body">
                    <div class="row">
                        <div class="col-md-4">
                            <label for="difficultyFilter" class="form-label">"Filter by Difficulty"</label>
                            <select
                                class="form-select"
                                id="difficultyFilter"
                                prop:value=move || store.difficulty_choice().get()
                                on:change=move |ev| *store.difficulty_choice().write() = event_target_value(&ev)
                            >
                                <option value="all">"All Difficulties"</option>
                                {levels.into_iter().map(|level| view! {
                                    <option value=level.clone()>{level.clone()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>
                </div>
            </div>

            <div class="row mb-4">
                <For
                    each=move || filtered.get().into_iter().enumerate()
                    key=|(i, workout)| (*i, workout.key())
                    children=move |(_, workout)| view! { <WorkoutCard workout=workout on_open=open_workout /> }
                />
            </div>

            <Show when=move || filtered.read().is_empty()>
                <div class="alert alert-info" role="alert">
                    "No workouts found for the selected filter."
                </div>
            </Show>

            <div class="card mt-4">
                <div class="card-header">
                    <h5>"All Workouts"</h5>
                </div>
                <div class="card-body">
                    <div class="table-responsive">
                        <table class="table table-striped table-hover mb-0">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Type"</th>
                                    <th>"Difficulty"</th>
                                    <th>"Duration (min)"</th>
                                    <th>"Exercises"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show
                                    when=move || !filtered.read().is_empty()
                                    fallback=|| view! {
                                        <tr>
                                            <td colspan="6" class="text-center text-muted">"No workouts found"</td>
                                        </tr>
                                    }
                                >
                                    <For
                                        each=move || filtered.get().into_iter().enumerate()
                                        key=|(i, workout)| (*i, workout.key())
                                        children=move |(_, workout)| view! { <WorkoutRow workout=workout on_open=open_workout /> }
                                    />
                                </Show>
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>

            {move || store.detail().read().selected().cloned().map(|workout| view! {
                <WorkoutDetail workout=workout on_close=move |_: ()| store.detail().write().close() />
            })}

            <Show when=move || !filtered.read().is_empty()>
                <div class="mt-3 text-muted text-end">
                    {move || format!("Showing {} of {} workouts", filtered.read().len(), total)}
                </div>
            </Show>
        </div>
    }
}

/// Difficulty badge with its color class
#[component]
fn DifficultyBadge(label: Option<String>, #[prop(optional)] extra_class: &'static str) -> impl IntoView {
    let class = format!("badge {} {}", difficulty_badge_class(label.as_deref()), extra_class);
    view! { <span class=class.trim_end().to_string()>{label.unwrap_or_default()}</span> }
}

#[component]
fn WorkoutCard(workout: Workout, on_open: impl Fn(Workout) + Copy + Send + Sync + 'static) -> impl IntoView {
    let name = workout.name().unwrap_or_default().to_string();
    let difficulty = workout.difficulty().map(str::to_string);
    let description = workout.description().unwrap_or_default().to_string();
    let kind = workout.kind().unwrap_or_default().to_string();
    let duration = workout.duration().unwrap_or_default();
    let exercises = workout.exercise_count();

    view! {
        <div class="col-md-6 col-lg-4 mb-3">
            <div class="card h-100">
                <div class="card-header">
                    <div class="d-flex justify-content-between align-items-center">
                        <h5 class="card-title mb-0">{name}</h5>
                        <DifficultyBadge label=difficulty />
                    </div>
                </div>
                <div class="card-body">
                    <p class="card-text">{description}</p>
                    <div class="d-flex justify-content-between align-items-center mb-2">
                        <span class="badge bg-info">{kind}</span>
                        <span class="text-muted small">{format!("⏱️ {} min", duration)}</span>
                    </div>
                    <p class="text-muted small mb-0">{format!("📝 {} exercises", exercises)}</p>
                </div>
                <div class="card-footer bg-transparent">
                    <button class="btn btn-sm btn-primary w-100" on:click=move |_| on_open(workout.clone())>
                        "View Details"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn WorkoutRow(workout: Workout, on_open: impl Fn(Workout) + Copy + Send + Sync + 'static) -> impl IntoView {
    view! {
        <tr>
            <td><strong>{workout.name().unwrap_or_default().to_string()}</strong></td>
            <td><span class="badge bg-info">{workout.kind().unwrap_or_default().to_string()}</span></td>
            <td><DifficultyBadge label=workout.difficulty().map(str::to_string) /></td>
            <td>{workout.duration().unwrap_or_default()}</td>
            <td><span class="badge bg-secondary">{workout.exercise_count()}</span></td>
            <td>
                <button class="btn btn-sm btn-primary" on:click={
                    let workout = workout.clone();
                    move |_| on_open(workout.clone())
                }>
                    "Details"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn WorkoutDetail(workout: Workout, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let exercises = workout.exercises();
    let exercise_list = if exercises.is_empty() {
        view! { <p class="text-muted">"No exercises listed"</p> }.into_any()
    } else {
        view! {
            <div class="list-group">
                {exercises.into_iter().map(|exercise| view! { <ExerciseItem exercise=exercise /> }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <DetailModal
            title=workout.name().unwrap_or_default().to_string()
            on_close=on_close
            large=true
            primary_action="Start Workout"
        >
            <div class="mb-3">
                <DifficultyBadge label=workout.difficulty().map(str::to_string) extra_class="me-2" />
                <span class="badge bg-info me-2">{workout.kind().unwrap_or_default().to_string()}</span>
                <span class="badge bg-secondary">
                    {format!("⏱️ {} minutes", workout.duration().unwrap_or_default())}
                </span>
            </div>
            <h6>"Description"</h6>
            <p>{workout.description().unwrap_or_default().to_string()}</p>
            <hr />
            <h6>"Exercises"</h6>
            {exercise_list}
        </DetailModal>
    }
}

#[component]
fn ExerciseItem(exercise: Exercise) -> impl IntoView {
    let sets_and_reps = exercise.sets_and_reps();

    view! {
        <div class="list-group-item">
            <div class="d-flex w-100 justify-content-between">
                <h6 class="mb-1">{exercise.name}</h6>
                {sets_and_reps.map(|text| view! { <small>{text}</small> })}
            </div>
            {exercise.description.map(|text| view! { <p class="mb-1 small text-muted">{text}</p> })}
            {exercise.duration.map(|text| view! { <small class="text-muted">{format!("Duration: {}", text)}</small> })}
        </div>
    }
}
