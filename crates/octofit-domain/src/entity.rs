//! Core Entity Trait
//!
//! Every collection element is a typed view over an opaque [`Record`].

use crate::endpoint::Collection;
use crate::record::Record;

/// Core trait for all dashboard entities
pub trait Entity: From<Record> + Clone + Send + Sync + 'static {
    /// The collection endpoint this entity is fetched from
    const COLLECTION: Collection;

    /// Identifier used for display and list keys, if the record carries one
    fn key(&self) -> Option<String>;
}
