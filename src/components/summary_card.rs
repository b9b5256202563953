//! Summary Card
//!
//! Small centered statistic card.

use leptos::prelude::*;

#[component]
pub fn SummaryCard(
    label: &'static str,
    /// Text color class for the value
    tone: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="col-md-4 mb-3">
            <div class="card">
                <div class="card-body text-center">
                    <h6 class="text-muted">{label}</h6>
                    <h3 class=tone>{move || value.get()}</h3>
                </div>
            </div>
        </div>
    }
}
