//! Users Page
//!
//! Searchable user table.

use leptos::prelude::*;
use octofit_domain::views::users::{empty_message, search_users};
use octofit_domain::{Entity, User};
use reactive_stores::Store;

use crate::components::CollectionView;
use crate::fetch::use_collection;
use crate::store::{UsersView, UsersViewStoreFields};

#[component]
pub fn UsersPage() -> impl IntoView {
    let state = use_collection::<User>();
    let store = Store::new(UsersView::default());

    view! {
        <CollectionView
            state=state
            noun="users"
            populated={move |users: Vec<User>| view! { <UsersTable users=users store=store /> }.into_any()}
        />
    }
}

#[component]
fn UsersTable(users: Vec<User>, store: Store<UsersView>) -> impl IntoView {
    let total = users.len();
    let users = StoredValue::new(users);

    let filtered = Memo::new(move |_| {
        let term = store.search().get();
        users.with_value(|all| search_users(all, &term).into_iter().cloned().collect::<Vec<_>>())
    });

    view! {
        <div class="container mt-4">
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h2>"👥 Users"</h2>
                <span class="badge bg-primary">{format!("{} Total Users", total)}</span>
            </div>

            <div class="card mb-4">
                <div class="card-body">
                    <div class="row">
                        <div class="col-md-6">
                            <div class="mb-3">
                                <label for="searchInput" class="form-label">"Search Users"</label>
                                <input
                                    type="text"
                                    class="form-control"
                                    id="searchInput"
                                    placeholder="Search by username, name, or email..."
                                    prop:value=move || store.search().get()
                                    on:input=move |ev| *store.search().write() = event_target_value(&ev)
                                />
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="table-responsive">
                <table class="table table-striped table-hover">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Username"</th>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Fitness Goal"</th>
                            <th>"Team"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !filtered.read().is_empty()
                            fallback=move || view! {
                                <tr>
                                    <td colspan="6" class="text-center text-muted">
                                        {move || empty_message(&store.search().get())}
                                    </td>
                                </tr>
                            }
                        >
                            <For
                                each=move || filtered.get().into_iter().enumerate()
                                key=|(i, user)| (*i, user.key())
                                children=move |(_, user)| view! { <UserRow user=user /> }
                            />
                        </Show>
                    </tbody>
                </table>
            </div>

            <Show when=move || !filtered.read().is_empty()>
                <div class="mt-3 text-muted text-end">
                    {move || format!("Showing {} of {} users", filtered.read().len(), total)}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn UserRow(user: User) -> impl IntoView {
    let team = match user.team() {
        Some(team) => view! { <span class="badge bg-success">{team}</span> }.into_any(),
        None => view! { <span class="text-muted">"No Team"</span> }.into_any(),
    };

    view! {
        <tr>
            <td><span class="badge bg-secondary">{user.id().unwrap_or_default()}</span></td>
            <td><strong>{user.username().unwrap_or_default().to_string()}</strong></td>
            <td>{user.name().unwrap_or("N/A").to_string()}</td>
            <td>{user.email().unwrap_or_default().to_string()}</td>
            <td><span class="badge bg-info">{user.fitness_goal().unwrap_or("Not Set").to_string()}</span></td>
            <td>{team}</td>
        </tr>
    }
}
