//! Warehouse module.
//!
//! Physically present stock behind a single lock, plus the narrow
//! `DeliverOutOnly` capability that carts reserve against. Deliveries go in
//! through [`Warehouse::deliver`]; units only leave through an
//! [`OutTransaction`], which holds the lock for its whole lifetime.

pub mod transaction;
pub mod warehouse;

pub use transaction::{DeliverOutOnly, OutTransaction};
pub use warehouse::Warehouse;
