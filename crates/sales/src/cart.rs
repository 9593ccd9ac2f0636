use storefront_core::{StoreError, StoreResult};
use storefront_inventory::{Good, Ledger, StockLine, StockView};
use storefront_warehouse::DeliverOutOnly;

use crate::order::Order;
use crate::pay_link::PayLinkGenerator;

/// Tentative reservation against a warehouse.
///
/// The cart's ledger is a claim on the source's stock, not separate stock:
/// nothing leaves the warehouse until the cart is converted into an
/// [`Order`]. For every good the reserved count never exceeds what the source
/// held at the time of the last successful `add`.
#[derive(Debug)]
pub struct Cart<'w, W: DeliverOutOnly> {
    reserved: Ledger,
    source: &'w W,
}

impl<'w, W: DeliverOutOnly> Cart<'w, W> {
    /// An empty cart bound to `source` for its whole life.
    pub fn new(source: &'w W) -> Self {
        Self {
            reserved: Ledger::new(),
            source,
        }
    }

    pub fn source(&self) -> &'w W {
        self.source
    }

    pub fn is_empty(&self) -> bool {
        self.reserved.is_empty()
    }

    /// Reserve `count` more units of `good`.
    ///
    /// Fails with `InvalidArgument` for a non-positive count and with
    /// `InsufficientStock` when the source cannot cover the existing
    /// reservation plus `count`. A reservation that no longer fits in a `u64`
    /// is an `InvalidArgument`. The cart is untouched on every failure.
    pub fn add(&mut self, good: &Good, count: i64) -> StoreResult<()> {
        if count <= 0 {
            return Err(StoreError::invalid_argument(format!(
                "cart quantity must be positive (got {count})"
            )));
        }
        let units = count as u64;

        let available = self.source.count(good.name());
        let reserved = self.reserved.count(good.name());
        let Some(requested) = reserved.checked_add(units) else {
            return Err(StoreError::invalid_argument(format!(
                "cannot reserve {units} more x {good}: {reserved} already reserved"
            )));
        };
        if available < requested {
            return Err(StoreError::insufficient_stock(good.name(), requested, available));
        }

        self.reserved.take_many(good.clone(), units)?;
        tracing::debug!(good = %good, units, reserved = requested, "reserved in cart");
        Ok(())
    }

    /// Like [`Cart::add`], but a stock shortfall is reported instead of raised.
    ///
    /// Returns `Ok(false)` (after logging a warning) when the source cannot
    /// cover the request; the cart is left unchanged. Invalid counts are
    /// still errors.
    pub fn add_or_skip(&mut self, good: &Good, count: i64) -> StoreResult<bool> {
        match self.add(good, count) {
            Ok(()) => Ok(true),
            Err(StoreError::InsufficientStock {
                good: name,
                requested,
                available,
            }) => {
                tracing::warn!(
                    good = %name,
                    requested,
                    available,
                    "not enough stock to add to cart; skipped"
                );
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Empty the cart, returning one `Good` per reserved unit.
    ///
    /// The warehouse is not touched: this drops the reservation.
    pub fn drain_all(&mut self) -> Vec<Good> {
        self.reserved.drain_all()
    }

    /// Convert the reservation into an order. See [`Order::place`].
    pub fn order(&mut self, pay_links: &mut impl PayLinkGenerator) -> StoreResult<Order> {
        Order::place(self, pay_links)
    }
}

impl<W: DeliverOutOnly> StockView for Cart<'_, W> {
    fn count(&self, name: &str) -> u64 {
        self.reserved.count(name)
    }

    fn list(&self) -> Vec<StockLine> {
        self.reserved.list()
    }

    fn total_units(&self) -> u64 {
        self.reserved.total_units()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use storefront_warehouse::Warehouse;

    fn good(name: &str) -> Good {
        Good::new(name).unwrap()
    }

    fn stocked(items: &[(&str, i64)]) -> Warehouse {
        let warehouse = Warehouse::new();
        for (name, count) in items {
            warehouse.deliver(&good(name), *count).unwrap();
        }
        warehouse
    }

    #[test]
    fn add_reserves_without_touching_the_warehouse() {
        let warehouse = stocked(&[("IPhone 12", 10)]);
        let mut cart = Cart::new(&warehouse);

        cart.add(&good("IPhone 12"), 4).unwrap();

        assert_eq!(cart.has_good("IPhone 12"), (true, 4));
        assert_eq!(warehouse.count("IPhone 12"), 10);
    }

    #[test]
    fn non_positive_count_is_an_invalid_argument() {
        let warehouse = stocked(&[("IPhone 12", 10)]);
        let mut cart = Cart::new(&warehouse);

        for count in [0, -3] {
            let err = cart.add(&good("IPhone 12"), count).unwrap_err();
            assert!(matches!(err, StoreError::InvalidArgument(_)));
            let err = cart.add_or_skip(&good("IPhone 12"), count).unwrap_err();
            assert!(matches!(err, StoreError::InvalidArgument(_)));
        }
        assert!(cart.list().is_empty());
    }

    #[test]
    fn add_beyond_available_stock_is_rejected() {
        let warehouse = stocked(&[("IPhone 11", 1)]);
        let mut cart = Cart::new(&warehouse);

        let err = cart.add(&good("IPhone 11"), 3).unwrap_err();

        assert_eq!(err, StoreError::insufficient_stock("IPhone 11", 3, 1));
        assert_eq!(cart.has_good("IPhone 11"), (false, 0));
    }

    #[test]
    fn existing_reservation_counts_against_availability() {
        let warehouse = stocked(&[("IPhone 12", 5)]);
        let mut cart = Cart::new(&warehouse);

        cart.add(&good("IPhone 12"), 3).unwrap();
        let err = cart.add(&good("IPhone 12"), 3).unwrap_err();

        assert_eq!(err, StoreError::insufficient_stock("IPhone 12", 6, 5));
        assert_eq!(cart.count("IPhone 12"), 3);
        cart.add(&good("IPhone 12"), 2).unwrap();
        assert_eq!(cart.count("IPhone 12"), 5);
    }

    #[test]
    fn reservation_past_u64_capacity_is_an_invalid_argument() {
        let warehouse = stocked(&[("IPhone 12", i64::MAX), ("IPhone 12", i64::MAX)]);
        let mut cart = Cart::new(&warehouse);
        cart.add(&good("IPhone 12"), i64::MAX).unwrap();
        cart.add(&good("IPhone 12"), i64::MAX).unwrap();

        let err = cart.add(&good("IPhone 12"), i64::MAX).unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));
        assert!(!cart.add_or_skip(&good("IPhone 12"), 1).unwrap());
        assert_eq!(cart.count("IPhone 12"), (i64::MAX as u64) * 2);
    }

    #[test]
    fn unknown_good_cannot_be_reserved() {
        let warehouse = Warehouse::new();
        let mut cart = Cart::new(&warehouse);
        let err = cart.add(&good("Pixel"), 1).unwrap_err();
        assert_eq!(err, StoreError::insufficient_stock("Pixel", 1, 0));
    }

    #[test]
    fn add_or_skip_reports_shortfall_and_leaves_cart_unchanged() {
        let warehouse = stocked(&[("IPhone 11", 1)]);
        let mut cart = Cart::new(&warehouse);

        assert!(!cart.add_or_skip(&good("IPhone 11"), 3).unwrap());
        assert_eq!(cart.count("IPhone 11"), 0);
        assert!(cart.add_or_skip(&good("IPhone 11"), 1).unwrap());
        assert_eq!(cart.count("IPhone 11"), 1);
    }

    #[test]
    fn drain_all_drops_the_reservation_only() {
        let warehouse = stocked(&[("IPhone 12", 10)]);
        let mut cart = Cart::new(&warehouse);
        cart.add(&good("IPhone 12"), 2).unwrap();

        let drained = cart.drain_all();

        assert_eq!(drained, vec![good("IPhone 12"), good("IPhone 12")]);
        assert!(cart.is_empty());
        assert_eq!(warehouse.count("IPhone 12"), 10);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: no sequence of adds reserves more than the warehouse holds.
        #[test]
        fn cart_never_exceeds_warehouse_stock(
            stock in prop::collection::vec(("[a-c]", 0i64..8), 0..6),
            adds in prop::collection::vec(("[a-d]", -2i64..6), 0..20)
        ) {
            let warehouse = Warehouse::new();
            for (name, count) in &stock {
                warehouse.deliver(&good(name), *count).unwrap();
            }

            let mut cart = Cart::new(&warehouse);
            for (name, count) in &adds {
                let before = cart.count(name);
                if cart.add(&good(name), *count).is_err() {
                    prop_assert_eq!(cart.count(name), before);
                }
            }

            for name in ["a", "b", "c", "d"] {
                prop_assert!(cart.count(name) <= warehouse.count(name));
            }
        }
    }
}
