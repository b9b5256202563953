//! UI Components
//!
//! Reusable Leptos components.

mod status;
mod collection_view;
mod detail_modal;
mod nav_bar;
mod summary_card;

pub use status::{ErrorAlert, Loading};
pub use collection_view::CollectionView;
pub use detail_modal::DetailModal;
pub use nav_bar::NavBar;
pub use summary_card::SummaryCard;
