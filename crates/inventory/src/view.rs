//! Read-only stock capability.
//!
//! Warehouses, carts and orders all hand out this view instead of their
//! ledger so callers can query and display stock but never mutate it.

use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

/// One display row: a good name and the quantity held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLine {
    pub name: String,
    pub count: u64,
}

impl ValueObject for StockLine {}

impl core::fmt::Display for StockLine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {}", self.name, self.count)
    }
}

/// Query-only access to a stock ledger.
pub trait StockView {
    /// Units held for `name`; zero when the good was never seen.
    fn count(&self, name: &str) -> u64;

    /// Per-good rows in insertion order, including goods drained to zero.
    fn list(&self) -> Vec<StockLine>;

    /// Whether at least one unit is held, together with the count.
    ///
    /// "No slot" and "slot at zero" are indistinguishable here.
    fn has_good(&self, name: &str) -> (bool, u64) {
        let count = self.count(name);
        (count > 0, count)
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    fn total_units(&self) -> u64 {
        self.list()
            .iter()
            .map(|line| line.count)
            .fold(0, u64::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_line_renders_as_name_dash_count() {
        let line = StockLine {
            name: "IPhone 12".to_string(),
            count: 10,
        };
        assert_eq!(line.to_string(), "IPhone 12 - 10");
    }
}
