use storefront_inventory::{StockLine, StockView};
use storefront_warehouse::{DeliverOutOnly, OutTransaction, Warehouse};

use crate::cart::Cart;

/// Customer-facing façade over a warehouse.
///
/// Exposes availability queries and hands out carts. Carts obtained here
/// reserve against the shop, which forwards to the warehouse; neither the
/// shop nor its carts can deliver stock.
#[derive(Debug, Clone, Copy)]
pub struct Shop<'w> {
    warehouse: &'w Warehouse,
}

impl<'w> Shop<'w> {
    pub fn new(warehouse: &'w Warehouse) -> Self {
        Self { warehouse }
    }

    /// A fresh, empty cart bound to this shop.
    pub fn cart(&self) -> Cart<'_, Self> {
        Cart::new(self)
    }
}

impl StockView for Shop<'_> {
    fn count(&self, name: &str) -> u64 {
        self.warehouse.count(name)
    }

    fn list(&self) -> Vec<StockLine> {
        self.warehouse.list()
    }

    fn total_units(&self) -> u64 {
        self.warehouse.total_units()
    }
}

impl DeliverOutOnly for Shop<'_> {
    fn out_transaction<R>(&self, f: impl FnOnce(&mut OutTransaction<'_>) -> R) -> R {
        self.warehouse.out_transaction(f)
    }
}
