//! Runtime Configuration
//!
//! API base resolution for the browser build: a `localStorage` override,
//! then build-time environment, then the local default.

use octofit_domain::ApiConfig;

/// `localStorage` key holding an API base override
pub const API_BASE_STORAGE_KEY: &str = "octofit_api_base";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Stored API base override, if any
pub fn stored_api_base() -> Option<String> {
    local_storage()?.get_item(API_BASE_STORAGE_KEY).ok().flatten()
}

/// Resolve the API configuration for this session
pub fn load_api_config() -> ApiConfig {
    let stored = stored_api_base();
    let config = ApiConfig::resolve(
        stored.as_deref(),
        option_env!("OCTOFIT_API_BASE"),
        option_env!("CODESPACE_NAME"),
    );
    tracing::info!(base_url = %config.base_url, "API configuration resolved");
    config
}

/// Log level from build-time `OCTOFIT_LOG`
pub fn log_level() -> tracing::Level {
    rolling_logger::parse_level(option_env!("OCTOFIT_LOG"))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_stored_override_wins() {
        let storage = local_storage().expect("localStorage available");
        storage.set_item(API_BASE_STORAGE_KEY, "http://override.test:9000/").unwrap();

        let config = load_api_config();
        assert_eq!(config.base_url, "http://override.test:9000");
        assert_eq!(
            config.endpoint(octofit_domain::Collection::Workouts),
            "http://override.test:9000/api/workouts/"
        );

        storage.remove_item(API_BASE_STORAGE_KEY).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_missing_override_reads_none() {
        let storage = local_storage().expect("localStorage available");
        storage.remove_item(API_BASE_STORAGE_KEY).unwrap();
        assert_eq!(stored_api_base(), None);
    }
}
