//! Category selection state and reducer
//!
//! This crate provides:
//! - The category tree data model (`Category`, `CategoryState`,
//!   `UneatenState`)
//! - The action set and pure reducer (`reduce`)
//! - The grouping projection consumed by the differencing engine
//!   (`project`, `CategoryGroup`)
//! - The persistence service contract and an in-memory mock
//! - An ordered, effect-running `Store` around the reducer

pub mod action;
pub mod error;
pub mod projection;
pub mod reducer;
pub mod service;
pub mod state;
pub mod store;

// Re-exports
pub use action::{Action, Effect};
pub use error::StateError;
pub use projection::{project, CategoryGroup, STANDALONE_GROUP_ID};
pub use reducer::reduce;
pub use service::{CategoriesService, MockCategoriesService, ServiceError};
pub use state::{Category, CategoryState, UneatenState};
pub use store::Store;
