use storefront_core::{StoreError, StoreResult};

use crate::good::Good;
use crate::view::{StockLine, StockView};

/// One ledger entry: a representative good and how many units are held.
///
/// A slot is created on the first `take` for its name and is kept even after
/// it drains to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    good: Good,
    count: u64,
}

impl Slot {
    fn empty(good: Good) -> Self {
        Self { good, count: 0 }
    }

    pub fn good(&self) -> &Good {
        &self.good
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    // Callers bound `count + units` by the ledger total, which never overflows.
    fn take(&mut self, units: u64) {
        self.count += units;
    }

    /// Remove one unit, handing back a new value with the slot's name.
    fn give(&mut self) -> Option<Good> {
        if self.count == 0 {
            return None;
        }
        self.count -= 1;
        Some(self.good.clone())
    }
}

/// Quantity-tracking container shared by warehouse, cart and order.
///
/// Slots are kept in first-seen order. Names are unique within a ledger since
/// `take` always reuses the existing slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    slots: Vec<Slot>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.count == 0)
    }

    /// Add one unit of `good`, opening a slot on first occurrence.
    pub fn take(&mut self, good: Good) -> StoreResult<()> {
        self.take_many(good, 1)
    }

    /// Add `units` of `good` in one step. Adding zero units still opens the slot.
    ///
    /// Fails with `InvalidArgument`, leaving the ledger untouched, when the
    /// ledger total would no longer fit in a `u64`.
    pub fn take_many(&mut self, good: Good, units: u64) -> StoreResult<()> {
        let held = self.total_units();
        if held.checked_add(units).is_none() {
            return Err(StoreError::invalid_argument(format!(
                "adding {units} x {good} would overflow the ledger ({held} units held)"
            )));
        }

        match self.slot_mut(good.name()) {
            Some(slot) => slot.take(units),
            None => {
                let mut slot = Slot::empty(good);
                slot.take(units);
                self.slots.push(slot);
            }
        }
        Ok(())
    }

    /// A ledger holding one unit per good yielded by `goods`.
    pub fn from_goods(goods: impl IntoIterator<Item = Good>) -> StoreResult<Self> {
        let mut ledger = Ledger::new();
        for good in goods {
            ledger.take(good)?;
        }
        Ok(ledger)
    }

    /// Remove one unit of `name`, failing with `OutOfStock` when none is held.
    pub fn withdraw_one(&mut self, name: &str) -> StoreResult<Good> {
        self.try_withdraw_one(name)
            .ok_or_else(|| StoreError::out_of_stock(name))
    }

    /// Non-failing form of [`Ledger::withdraw_one`].
    pub fn try_withdraw_one(&mut self, name: &str) -> Option<Good> {
        self.slot_mut(name).and_then(Slot::give)
    }

    /// Withdraw every unit, one `Good` per unit, grouped by slot in ledger order.
    ///
    /// Slots stay behind at zero.
    pub fn drain_all(&mut self) -> Vec<Good> {
        let mut goods = Vec::with_capacity(self.total_units() as usize);
        for slot in &mut self.slots {
            while let Some(good) = slot.give() {
                goods.push(good);
            }
        }
        goods
    }

    fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.good.name() == name)
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|slot| slot.good.name() == name)
    }
}

impl StockView for Ledger {
    fn count(&self, name: &str) -> u64 {
        self.slot(name).map_or(0, Slot::count)
    }

    fn list(&self) -> Vec<StockLine> {
        self.slots
            .iter()
            .map(|slot| StockLine {
                name: slot.good.name().to_string(),
                count: slot.count,
            })
            .collect()
    }

    // `take_many` keeps the total within `u64`, so the fold never saturates.
    fn total_units(&self) -> u64 {
        self.slots
            .iter()
            .map(Slot::count)
            .fold(0, u64::saturating_add)
    }
}
