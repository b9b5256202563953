//! Collection View
//!
//! Renders one of loading, error or the populated page for a fetched
//! collection.

use leptos::prelude::*;
use octofit_domain::FetchState;

use super::{ErrorAlert, Loading};

#[component]
pub fn CollectionView<T, F>(
    state: ReadSignal<FetchState<T>>,
    /// Plural noun for the loading text
    noun: &'static str,
    /// Page body for the populated collection
    populated: F,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(Vec<T>) -> AnyView + Send + Sync + 'static,
{
    move || match state.get() {
        FetchState::Loading => view! { <Loading noun=noun /> }.into_any(),
        FetchState::Failed(message) => view! { <ErrorAlert message=message /> }.into_any(),
        FetchState::Populated(items) => populated(items),
    }
}
