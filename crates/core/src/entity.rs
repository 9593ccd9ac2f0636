//! Entity trait: objects that keep an identity independent of their contents.
//!
//! Two orders holding the same goods are still two distinct receipts, which is
//! what separates an order from a plain ledger snapshot.

/// Something addressable by a stable, typed identifier.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;
}
