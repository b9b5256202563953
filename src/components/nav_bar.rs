//! Navigation Bar
//!
//! Brand link plus one link per collection page.

use leptos::prelude::*;
use leptos_router::components::A;
use octofit_domain::Collection;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
            <div class="container-fluid">
                <A href="/" attr:class="navbar-brand">
                    <img src="/octofitapp-small.png" alt="OctoFit Logo" class="navbar-logo" />
                    "OctoFit Tracker"
                </A>
                <ul class="navbar-nav">
                    {Collection::ALL.iter().map(|collection| view! {
                        <li class="nav-item">
                            <A href=collection.route() attr:class="nav-link">{collection.label()}</A>
                        </li>
                    }).collect_view()}
                </ul>
            </div>
        </nav>
    }
}
