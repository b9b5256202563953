//! Detail Modal
//!
//! Overlay with backdrop showing one selected record.

use leptos::prelude::*;

#[component]
pub fn DetailModal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    /// Wider dialog for long content
    #[prop(optional)] large: bool,
    /// Label of an extra primary button in the footer
    #[prop(optional, into)] primary_action: Option<String>,
    children: Children,
) -> impl IntoView {
    let dialog_class = if large {
        "modal-dialog modal-lg modal-dialog-centered modal-dialog-scrollable"
    } else {
        "modal-dialog modal-dialog-centered"
    };

    view! {
        <div class="modal show d-block" tabindex="-1" role="dialog">
            <div class=dialog_class role="document">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{title}</h5>
                        <button
                            type="button"
                            class="btn-close"
                            aria-label="Close"
                            on:click=move |_| on_close.run(())
                        ></button>
                    </div>
                    <div class="modal-body">{children()}</div>
                    <div class="modal-footer">
                        {primary_action.map(|label| view! {
                            <button type="button" class="btn btn-success">{label}</button>
                        })}
                        <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </div>
        <div class="modal-backdrop show"></div>
    }
}
