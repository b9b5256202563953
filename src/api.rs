//! REST API Bindings
//!
//! One GET per collection endpoint. The body may be a bare array or an
//! envelope with `results`; see [`octofit_domain::normalize`].

use gloo_net::http::Request;
use octofit_domain::{normalize_as, Entity, FetchError};
use serde_json::Value;
use web_sys::AbortSignal;

/// Fetch and normalize one collection
pub async fn fetch_collection<T: Entity>(url: &str, abort: Option<&AbortSignal>) -> Result<Vec<T>, FetchError> {
    tracing::debug!(%url, collection = %T::COLLECTION, "fetching collection");

    let response = Request::get(url)
        .abort_signal(abort)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    tracing::debug!(status = response.status(), collection = %T::COLLECTION, "response received");
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))?;

    let items = normalize_as::<T>(body);
    tracing::debug!(count = items.len(), collection = %T::COLLECTION, "collection normalized");
    Ok(items)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use octofit_domain::Team;
    use wasm_bindgen_test::*;
    use web_sys::AbortController;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_error_status_maps_to_status_error() {
        let result = fetch_collection::<Team>("/octofit-missing/api/teams/", None).await;
        match result {
            Err(e @ FetchError::Status(status)) => {
                assert!(status >= 400);
                assert_eq!(e.to_string(), format!("HTTP error! status: {}", status));
            }
            other => panic!("expected a status error, got {:?}", other),
        }
    }

    #[wasm_bindgen_test]
    async fn test_aborted_request_is_network_error() {
        let controller = AbortController::new().unwrap();
        controller.abort();
        let result = fetch_collection::<Team>("/api/teams/", Some(&controller.signal())).await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }
}
