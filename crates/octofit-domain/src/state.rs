//! Fetch State Machine
//!
//! `Loading` -> `Populated` | `Failed`. Resolved states are terminal until the
//! view restarts the fetch.

use crate::error::FetchError;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Populated(Vec<T>),
    Failed(String),
}

impl<T> FetchState<T> {
    /// Apply a fetch outcome. Ignored unless still loading.
    pub fn resolve(&mut self, result: Result<Vec<T>, FetchError>) {
        if !self.is_loading() {
            tracing::debug!("ignoring fetch result for an already resolved view");
            return;
        }
        *self = match result {
            Ok(items) => FetchState::Populated(items),
            Err(e) => FetchState::Failed(e.to_string()),
        };
    }

    /// Back to loading for a fresh fetch
    pub fn restart(&mut self) {
        *self = FetchState::Loading;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Held collection, empty unless populated
    pub fn items(&self) -> &[T] {
        match self {
            FetchState::Populated(items) => items,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
