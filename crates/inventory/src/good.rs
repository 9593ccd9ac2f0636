use serde::{Deserialize, Serialize};

use storefront_core::{StoreError, StoreResult, ValueObject};

/// A named kind of merchandise.
///
/// Identity is the name and nothing else: two `Good`s with equal names are
/// interchangeable units. Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Good {
    name: String,
}

impl Good {
    pub fn new(name: impl Into<String>) -> StoreResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StoreError::invalid_argument("good name cannot be empty"));
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ValueObject for Good {}

impl core::fmt::Display for Good {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<String> for Good {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Good {
    type Error = StoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Good> for String {
    fn from(value: Good) -> Self {
        value.name
    }
}
