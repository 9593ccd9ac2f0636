//! Order reference tokens.
//!
//! A pay link is an opaque string attached to every placed order. It is not
//! a payment: nothing in the store interprets it. Generation is injected so
//! order placement stays deterministic under test.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_core::ValueObject;

/// Opaque token identifying a completed order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayLink(String);

impl PayLink {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for PayLink {}

impl core::fmt::Display for PayLink {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of pay links for order placement.
///
/// Uniqueness is best-effort; collisions are the caller's concern.
pub trait PayLinkGenerator {
    fn next_pay_link(&mut self) -> PayLink;
}

impl<F> PayLinkGenerator for F
where
    F: FnMut() -> PayLink,
{
    fn next_pay_link(&mut self) -> PayLink {
        self()
    }
}

/// Production generator: UUIDv7 in simple (hyphen-less) form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidPayLinks;

impl PayLinkGenerator for UuidPayLinks {
    fn next_pay_link(&mut self) -> PayLink {
        PayLink(Uuid::now_v7().simple().to_string())
    }
}

/// Deterministic generator: `<prefix>1`, `<prefix>2`, ...
#[derive(Debug, Clone)]
pub struct SequentialPayLinks {
    prefix: String,
    next: u64,
}

impl SequentialPayLinks {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialPayLinks {
    fn default() -> Self {
        Self::new("pay-")
    }
}

impl PayLinkGenerator for SequentialPayLinks {
    fn next_pay_link(&mut self) -> PayLink {
        let link = PayLink(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        link
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_links_count_up_from_one() {
        let mut links = SequentialPayLinks::new("order-");
        assert_eq!(links.next_pay_link().as_str(), "order-1");
        assert_eq!(links.next_pay_link().as_str(), "order-2");
    }

    #[test]
    fn uuid_links_are_distinct_and_hyphen_free() {
        let mut links = UuidPayLinks;
        let a = links.next_pay_link();
        let b = links.next_pay_link();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
        assert!(!a.as_str().contains('-'));
    }

    #[test]
    fn closures_act_as_generators() {
        let mut calls = 0;
        let mut links = || {
            calls += 1;
            PayLink::new(format!("fixed-{calls}"))
        };
        assert_eq!(links.next_pay_link().as_str(), "fixed-1");
    }
}
