//! Landing Page

use leptos::prelude::*;
use leptos_router::components::A;
use octofit_domain::Collection;

/// Feature cards on the landing page: (title, blurb, target, button class)
const FEATURES: &[(&str, &str, Collection, &str)] = &[
    ("📊 Track Activities", "Log your workouts and monitor your progress", Collection::Activities, "btn btn-primary"),
    ("🏆 Leaderboard", "Compete with others and climb the ranks", Collection::Leaderboard, "btn btn-success"),
    ("💪 Workouts", "Get personalized workout suggestions", Collection::Workouts, "btn btn-info"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="container mt-4">
            <div class="welcome-section">
                <h1>"🏋️ Welcome to OctoFit Tracker"</h1>
                <p class="lead">"Track your fitness journey, compete with your team, and achieve your goals!"</p>
                <div class="row mt-5">
                    {FEATURES.iter().map(|(title, blurb, target, button_class)| view! {
                        <div class="col-md-4 mb-3">
                            <div class="card">
                                <div class="card-body">
                                    <h5 class="card-title">{*title}</h5>
                                    <p class="card-text">{*blurb}</p>
                                    <A href=target.route() attr:class=*button_class>
                                        {format!("View {}", target.label())}
                                    </A>
                                </div>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="container mt-4 text-center">
            <h1 class="display-4">"🔍"</h1>
            <h2>"Page Not Found"</h2>
            <p class="text-muted">"The page you're looking for doesn't exist."</p>
            <A href="/" attr:class="btn btn-primary">"Back to OctoFit"</A>
        </div>
    }
}
