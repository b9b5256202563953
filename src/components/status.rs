//! Status Components
//!
//! Loading spinner and error alert shared by every collection page.

use leptos::prelude::*;

/// Full-width loading spinner, e.g. "Loading teams..."
#[component]
pub fn Loading(noun: &'static str) -> impl IntoView {
    view! {
        <div class="container mt-4">
            <div class="loading-spinner">
                <div class="spinner-border text-primary" role="status">
                    <span class="visually-hidden">"Loading..."</span>
                </div>
                <p class="mt-3">{format!("Loading {}...", noun)}</p>
            </div>
        </div>
    }
}

/// Inline alert holding a fetch failure message
#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="container mt-4">
            <div class="alert alert-danger" role="alert">
                <h4 class="alert-heading">"Error!"</h4>
                <p>{message}</p>
            </div>
        </div>
    }
}
