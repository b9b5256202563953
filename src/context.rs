//! Application Context
//!
//! Shared configuration provided via Leptos Context API.

use leptos::prelude::*;
use octofit_domain::{ApiConfig, Collection};

/// App-wide values provided via context
#[derive(Clone, Debug)]
pub struct AppContext {
    /// Resolved API base
    pub api: ApiConfig,
}

impl AppContext {
    pub fn new(api: ApiConfig) -> Self {
        Self { api }
    }

    /// Full endpoint URL for a collection
    pub fn endpoint(&self, collection: Collection) -> String {
        self.api.endpoint(collection)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
