//! Deterministic example listing data generation for manual testing.
//!
//! This crate produces believable, reproducible item listings that can be
//! inserted into the listings store. It is deliberately independent of the
//! backend domain types so the backend can depend on it without cycles.
//!
//! # Overview
//!
//! - Named RNG seeds make generation reproducible: the same seed and count
//!   always yield identical items.
//! - Every generated item carries a unique UUID and non-empty values for all
//!   mandatory listing fields.
//!
//! # Example
//!
//! ```
//! use example_items::generate_example_items;
//!
//! let items = generate_example_items(42, 3).expect("generation succeeds");
//! assert_eq!(items.len(), 3);
//!
//! let again = generate_example_items(42, 3).expect("generation succeeds");
//! assert_eq!(items, again);
//! ```

mod catalog;
mod error;
mod generator;
mod seed;

pub use error::GenerationError;
pub use generator::{DEFAULT_ITEM_COUNT, MAX_ITEM_COUNT, generate_example_items, random_seed};
pub use seed::ExampleItemSeed;
