//! Transfer-out capability.
//!
//! A cart must be able to check availability and, when converted to an order,
//! pull units out (putting them back on shortfall). It must never be able to
//! deliver new stock. `DeliverOutOnly` is exactly that subset.

use storefront_core::StoreResult;
use storefront_inventory::{Good, Ledger, StockView};

/// Mutable access to warehouse stock for the duration of one critical section.
///
/// Only obtainable through [`DeliverOutOnly::out_transaction`]; the warehouse
/// lock is held until the closure returns, so availability checks, withdrawals
/// and rollbacks inside it observe one consistent snapshot.
#[derive(Debug)]
pub struct OutTransaction<'a> {
    stock: &'a mut Ledger,
}

impl<'a> OutTransaction<'a> {
    pub(crate) fn new(stock: &'a mut Ledger) -> Self {
        Self { stock }
    }

    pub fn count(&self, name: &str) -> u64 {
        self.stock.count(name)
    }

    /// Take one unit out, or `None` if the good is not in stock.
    pub fn try_withdraw_out(&mut self, name: &str) -> Option<Good> {
        let unit = self.stock.try_withdraw_one(name);
        if unit.is_none() {
            tracing::debug!(good = name, "withdrawal found no stock");
        }
        unit
    }

    /// Return one previously withdrawn unit.
    pub fn deliver_one(&mut self, good: Good) -> StoreResult<()> {
        self.stock.take(good)
    }
}

/// Query + reserve-out access to a stock holder.
pub trait DeliverOutOnly: StockView {
    /// Run `f` with exclusive access to the stock.
    fn out_transaction<R>(&self, f: impl FnOnce(&mut OutTransaction<'_>) -> R) -> R;
}
