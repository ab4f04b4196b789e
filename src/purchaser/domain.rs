//! Core purchaser domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The purchaser that stands for the whole household.
///
/// It is always available for selection and can never be deleted.
pub const SHARED_PURCHASER: &str = "家族全員";

/// A validated, non-empty identifier for the person who buys an item, e.g. '父'.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct PurchaserId(String);

impl PurchaserId {
    /// Create a purchaser ID.
    ///
    /// Leading and trailing whitespace is removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyPurchaserName] if `name` is empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyPurchaserName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a purchaser ID without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }

    /// The purchaser shared by the whole household.
    pub fn shared() -> Self {
        Self::new_unchecked(SHARED_PURCHASER)
    }

    /// Whether this is the [SHARED_PURCHASER].
    pub fn is_shared(&self) -> bool {
        self.0 == SHARED_PURCHASER
    }
}

impl Default for PurchaserId {
    fn default() -> Self {
        Self::shared()
    }
}

impl AsRef<str> for PurchaserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PurchaserId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PurchaserId::new(s)
    }
}

impl TryFrom<String> for PurchaserId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PurchaserId::new(&value)
    }
}

impl From<PurchaserId> for String {
    fn from(value: PurchaserId) -> Self {
        value.0
    }
}

impl Display for PurchaserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Form data for registering a new purchaser.
#[derive(Debug, Serialize, Deserialize)]
pub struct PurchaserFormData {
    /// The name of the new purchaser. Surrounding whitespace is ignored.
    pub name: String,
}
