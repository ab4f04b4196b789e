//! Core category domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The categories that always exist and can never be deleted.
pub const DEFAULT_CATEGORIES: [&str; 5] = [
    "食品",
    "キッチン用品",
    "洗剤・掃除用品",
    "衛生用品",
    "文房具",
];

/// The category given to a record when none is specified.
pub const FALLBACK_CATEGORY: &str = DEFAULT_CATEGORIES[0];

/// A validated, non-empty category name, e.g. '食品' or 'ペット用品'.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// Leading and trailing whitespace is removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }

    /// The category used when a record is created without one.
    pub fn fallback() -> Self {
        Self::new_unchecked(FALLBACK_CATEGORY)
    }

    /// Whether this is one of the built-in [DEFAULT_CATEGORIES].
    pub fn is_default(&self) -> bool {
        DEFAULT_CATEGORIES.contains(&self.0.as_str())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl TryFrom<String> for CategoryName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CategoryName::new(&value)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Form data for registering a new category.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryFormData {
    /// The name of the new category. Surrounding whitespace is ignored.
    pub name: String,
}
