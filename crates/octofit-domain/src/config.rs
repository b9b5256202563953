//! API Configuration
//!
//! Resolves the API base URL from, in order: a runtime override, an explicit
//! build-time base, a Codespace name, and finally a local development default.

use crate::endpoint::Collection;

/// Base used when nothing else is configured (Django dev server)
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Codespaces expose the API on port 8000 under the codespace name
    pub fn from_codespace(name: &str) -> Self {
        Self::new(&format!("https://{}-8000.app.github.dev", name.trim()))
    }

    pub fn resolve(
        runtime_override: Option<&str>,
        explicit_base: Option<&str>,
        codespace: Option<&str>,
    ) -> Self {
        fn non_blank(v: Option<&str>) -> Option<&str> {
            v.filter(|s| !s.trim().is_empty())
        }

        if let Some(base) = non_blank(runtime_override) {
            return Self::new(base);
        }
        if let Some(base) = non_blank(explicit_base) {
            return Self::new(base);
        }
        if let Some(name) = non_blank(codespace) {
            return Self::from_codespace(name);
        }
        Self::default()
    }

    pub fn endpoint(&self, collection: Collection) -> String {
        collection.url(&self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence() {
        let cfg = ApiConfig::resolve(Some("http://override:9000/"), Some("http://base"), Some("cs"));
        assert_eq!(cfg.base_url, "http://override:9000");

        let cfg = ApiConfig::resolve(None, Some("http://base/"), Some("cs"));
        assert_eq!(cfg.base_url, "http://base");

        let cfg = ApiConfig::resolve(Some("  "), None, Some("fuzzy-space"));
        assert_eq!(cfg.base_url, "https://fuzzy-space-8000.app.github.dev");

        assert_eq!(ApiConfig::resolve(None, Some(""), None), ApiConfig::default());
    }

    #[test]
    fn test_blank_values_fall_through() {
        let cfg = ApiConfig::resolve(Some(""), Some(" \t"), Some("  "));
        assert_eq!(cfg, ApiConfig::default());
        let cfg = ApiConfig::resolve(Some("\n"), Some("http://base:8000"), None);
        assert_eq!(cfg.base_url, "http://base:8000");
    }

    #[test]
    fn test_endpoint() {
        let cfg = ApiConfig::from_codespace("fuzzy-space");
        assert_eq!(
            cfg.endpoint(Collection::Users),
            "https://fuzzy-space-8000.app.github.dev/api/users/"
        );
    }
}
