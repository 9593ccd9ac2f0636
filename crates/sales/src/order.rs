use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{Entity, OrderId, StoreError, StoreResult};
use storefront_inventory::{Good, Ledger, StockLine, StockView};
use storefront_warehouse::DeliverOutOnly;

use crate::cart::Cart;
use crate::pay_link::{PayLink, PayLinkGenerator};

/// A completed, receipted transfer out of the warehouse.
///
/// Built once by [`Order::place`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    pay_link: PayLink,
    placed_at: DateTime<Utc>,
    items: Ledger,
}

/// Serializable snapshot of an order for display or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: OrderId,
    pub pay_link: PayLink,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<StockLine>,
}

impl Order {
    fn fulfilled(pay_link: PayLink, goods: Vec<Good>) -> StoreResult<Self> {
        Ok(Self {
            id: OrderId::new(),
            pay_link,
            placed_at: Utc::now(),
            items: Ledger::from_goods(goods)?,
        })
    }

    /// Convert a cart's reservation into an order, all or nothing.
    ///
    /// Runs as one critical section on the cart's source:
    /// 1. draw a pay link,
    /// 2. drain the cart (the reservation is consumed whatever happens next),
    /// 3. withdraw one warehouse unit per drained unit, continuing past
    ///    shortfalls so the whole cart is processed,
    /// 4. on full success, return the order holding every withdrawn unit,
    /// 5. otherwise put every withdrawn unit back and fail with `OrderFailed`.
    ///
    /// After a failure the warehouse holds exactly what it held before the
    /// call and the cart is empty; callers re-`add` to retry.
    pub fn place<W: DeliverOutOnly>(
        cart: &mut Cart<'_, W>,
        pay_links: &mut impl PayLinkGenerator,
    ) -> StoreResult<Order> {
        let pay_link = pay_links.next_pay_link();
        let source = cart.source();

        source.out_transaction(|txn| {
            let reserved = cart.drain_all();
            let mut withdrawn = Vec::with_capacity(reserved.len());
            let mut missing = Vec::new();

            for unit in &reserved {
                match txn.try_withdraw_out(unit.name()) {
                    Some(good) => withdrawn.push(good),
                    None => missing.push(unit.name().to_string()),
                }
            }

            if !missing.is_empty() {
                let returned = withdrawn.len();
                for good in withdrawn {
                    txn.deliver_one(good)?;
                }
                tracing::warn!(
                    pay_link = %pay_link,
                    ?missing,
                    returned,
                    "order rolled back on stock shortfall"
                );
                return Err(StoreError::order_failed(missing));
            }

            let order = Order::fulfilled(pay_link, withdrawn)?;
            tracing::info!(
                order_id = %order.id,
                pay_link = %order.pay_link,
                units = order.items.total_units(),
                "order fulfilled"
            );
            Ok(order)
        })
    }

    pub fn pay_link(&self) -> &PayLink {
        &self.pay_link
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    pub fn receipt(&self) -> OrderReceipt {
        OrderReceipt {
            order_id: self.id,
            pay_link: self.pay_link.clone(),
            placed_at: self.placed_at,
            items: self.items.list(),
        }
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl StockView for Order {
    fn count(&self, name: &str) -> u64 {
        self.items.count(name)
    }

    fn list(&self) -> Vec<StockLine> {
        self.items.list()
    }

    fn total_units(&self) -> u64 {
        self.items.total_units()
    }
}
