//! `storefront-core` — shared building blocks for the store crates.
//!
//! Pure domain primitives only: the error taxonomy, identity traits and
//! typed identifiers. No IO, no locking.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{StoreError, StoreResult};
pub use id::OrderId;
pub use value_object::ValueObject;
