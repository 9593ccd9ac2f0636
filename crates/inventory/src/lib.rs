//! Stock ledger module.
//!
//! The quantity-tracking container every other store crate builds on: named
//! goods, per-good slots, and a read-only view for queries and display.
//! Pure in-memory logic (no IO, no locking).

pub mod good;
pub mod ledger;
pub mod view;

pub use good::Good;
pub use ledger::{Ledger, Slot};
pub use view::{StockLine, StockView};
