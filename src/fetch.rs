//! Collection Fetch Hook
//!
//! Each page owns its own fetch. The request is tied to the page's lifetime:
//! it is aborted when the endpoint changes or the page is disposed, and a late
//! result never touches state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use octofit_domain::{Entity, FetchState};
use web_sys::AbortController;

use crate::api;
use crate::context::use_app_context;

/// Fetch `T`'s collection on mount and whenever its endpoint changes
pub fn use_collection<T>() -> ReadSignal<FetchState<T>>
where
    T: Entity,
{
    let ctx = use_app_context();
    let url = Memo::new(move |_| ctx.endpoint(T::COLLECTION));
    let (state, set_state) = signal(FetchState::<T>::Loading);
    let in_flight = StoredValue::new_local(None::<AbortController>);

    Effect::new(move |_| {
        let url = url.get();
        in_flight.update_value(|current| {
            if let Some(previous) = current.take() {
                previous.abort();
            }
        });
        set_state.update(FetchState::restart);

        let controller = AbortController::new().ok();
        let abort = controller.as_ref().map(AbortController::signal);
        in_flight.set_value(controller);

        spawn_local(async move {
            let result = api::fetch_collection::<T>(&url, abort.as_ref()).await;
            if abort.as_ref().is_some_and(|s| s.aborted()) {
                tracing::debug!(%url, "dropping result of aborted request");
                return;
            }
            if let Err(e) = &result {
                tracing::error!(%url, error = %e, "fetch failed");
            }
            if set_state.try_update(|s| s.resolve(result)).is_none() {
                tracing::debug!(%url, "view disposed before fetch resolved");
            }
        });
    });

    on_cleanup(move || {
        in_flight.try_update_value(|current| {
            if let Some(controller) = current.take() {
                controller.abort();
            }
        });
    });

    state
}
