//! OctoFit Frontend App
//!
//! Navigation shell: brand bar plus client-side routes to the landing page
//! and the five collection pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::NavBar;
use crate::config;
use crate::context::AppContext;
use crate::pages::{ActivitiesPage, HomePage, LeaderboardPage, NotFound, TeamsPage, UsersPage, WorkoutsPage};

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new(config::load_api_config()));

    view! {
        <Router>
            <div class="App">
                <NavBar />
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/users") view=UsersPage />
                    <Route path=path!("/activities") view=ActivitiesPage />
                    <Route path=path!("/teams") view=TeamsPage />
                    <Route path=path!("/leaderboard") view=LeaderboardPage />
                    <Route path=path!("/workouts") view=WorkoutsPage />
                </Routes>
            </div>
        </Router>
    }
}
