use std::sync::{Mutex, MutexGuard, PoisonError};

use storefront_core::{StoreError, StoreResult};
use storefront_inventory::{Good, Ledger, StockLine, StockView};

use crate::transaction::{DeliverOutOnly, OutTransaction};

/// Physically present stock.
///
/// All operations take `&self`; the ledger sits behind one mutex per
/// warehouse, so a warehouse can be shared by reference between any number of
/// carts (and threads).
#[derive(Debug, Default)]
pub struct Warehouse {
    stock: Mutex<Ledger>,
}

impl Warehouse {
    /// An empty warehouse.
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive `count` units of `good`.
    ///
    /// Negative counts are rejected; zero is a no-op. A delivery that would
    /// push the warehouse total past `u64::MAX` is rejected and stores nothing.
    pub fn deliver(&self, good: &Good, count: i64) -> StoreResult<()> {
        if count < 0 {
            return Err(StoreError::invalid_argument(format!(
                "delivery count cannot be negative (got {count})"
            )));
        }
        if count == 0 {
            return Ok(());
        }

        self.stock().take_many(good.clone(), count as u64)?;
        tracing::debug!(good = %good, count, "stock delivered");
        Ok(())
    }

    /// Receive a single unit.
    pub fn deliver_one(&self, good: Good) -> StoreResult<()> {
        self.stock().take(good)
    }

    /// Take one unit out, or `None` if the good is not in stock.
    pub fn try_withdraw_out(&self, name: &str) -> Option<Good> {
        self.out_transaction(|txn| txn.try_withdraw_out(name))
    }

    /// Point-in-time copy of the stock ledger.
    pub fn snapshot(&self) -> Ledger {
        self.stock().clone()
    }

    // Every ledger step is a single counter update, so a panic elsewhere while
    // the lock was held cannot leave the ledger half-mutated.
    fn stock(&self) -> MutexGuard<'_, Ledger> {
        self.stock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StockView for Warehouse {
    fn count(&self, name: &str) -> u64 {
        self.stock().count(name)
    }

    fn list(&self) -> Vec<StockLine> {
        self.stock().list()
    }

    fn total_units(&self) -> u64 {
        self.stock().total_units()
    }
}

impl DeliverOutOnly for Warehouse {
    fn out_transaction<R>(&self, f: impl FnOnce(&mut OutTransaction<'_>) -> R) -> R {
        let mut stock = self.stock();
        let mut txn = OutTransaction::new(&mut stock);
        f(&mut txn)
    }
}
