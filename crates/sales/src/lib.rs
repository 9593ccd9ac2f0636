//! Sales module.
//!
//! Carts reserve stock against a warehouse (directly or through a [`Shop`]),
//! and orders turn a cart's reservation into a permanent withdrawal, or roll
//! the whole attempt back on shortfall.

pub mod cart;
pub mod order;
pub mod pay_link;
pub mod shop;

pub use cart::Cart;
pub use order::{Order, OrderReceipt};
pub use pay_link::{PayLink, PayLinkGenerator, SequentialPayLinks, UuidPayLinks};
pub use shop::Shop;
