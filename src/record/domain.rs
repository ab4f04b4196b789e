//! Defines the purchase record and the payload used to create one.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{category::CategoryName, error::RecordInputError, purchaser::PurchaserId};

/// Identifier for a record, unique for the lifetime of the registry.
pub type RecordId = i64;

/// A household item that was bought, and when it should be bought again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The ID of the record.
    pub id: RecordId,
    /// What was bought, e.g. "トイレットペーパー".
    pub name: String,
    /// The category the item belongs to.
    pub category: CategoryName,
    /// How many units were bought. Always at least one.
    pub quantity: u32,
    /// The total price in the smallest currency unit, e.g. yen.
    pub price: u64,
    /// Where the item was bought. May be empty.
    pub store: String,
    /// When the item was bought.
    pub purchase_date: Date,
    /// When the item is expected to run out, if known.
    pub next_purchase_date: Option<Date>,
    /// Who buys the item.
    pub purchaser: PurchaserId,
}

impl AsRef<Record> for Record {
    fn as_ref(&self) -> &Record {
        self
    }
}

/// The payload for creating a [Record].
///
/// Every field except `name` and `price` is optional and falls back to the
/// same defaults as the entry form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    /// What was bought. Must not be blank.
    pub name: String,
    /// Defaults to the fallback category when blank or missing.
    #[serde(default)]
    pub category: Option<String>,
    /// Defaults to one when missing or not positive.
    #[serde(default)]
    pub quantity: Option<i64>,
    /// The total price. Must be positive.
    pub price: i64,
    /// Defaults to an empty store.
    #[serde(default)]
    pub store: Option<String>,
    /// Defaults to today.
    #[serde(default)]
    pub purchase_date: Option<Date>,
    /// When the item is expected to run out, if known.
    #[serde(default)]
    pub next_purchase_date: Option<Date>,
    /// Defaults to the shared purchaser when blank or missing.
    #[serde(default)]
    pub purchaser: Option<String>,
}

impl NewRecord {
    /// Start a payload with the two required fields.
    pub fn build(name: &str, price: i64) -> Self {
        Self {
            name: name.to_owned(),
            price,
            ..Default::default()
        }
    }

    /// Set the category.
    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_owned());
        self
    }

    /// Set the quantity.
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the store.
    pub fn store(mut self, store: &str) -> Self {
        self.store = Some(store.to_owned());
        self
    }

    /// Set the purchase date.
    pub fn purchase_date(mut self, date: Date) -> Self {
        self.purchase_date = Some(date);
        self
    }

    /// Set the next purchase date.
    pub fn next_purchase_date(mut self, date: Option<Date>) -> Self {
        self.next_purchase_date = date;
        self
    }

    /// Set the purchaser.
    pub fn purchaser(mut self, purchaser: &str) -> Self {
        self.purchaser = Some(purchaser.to_owned());
        self
    }

    /// Validate the payload and fill in defaults.
    ///
    /// `today` is used when no purchase date was given.
    ///
    /// # Errors
    /// Returns a [RecordInputError] if the name is empty, the price is not
    /// positive, or the quantity does not fit in a `u32`.
    pub(crate) fn validate(self, today: Date) -> Result<ValidatedRecord, RecordInputError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(RecordInputError::EmptyName);
        }

        if self.price <= 0 {
            return Err(RecordInputError::NonPositivePrice(self.price));
        }
        let price = self.price as u64;

        let quantity = match self.quantity {
            Some(quantity) if quantity > 0 => u32::try_from(quantity)
                .map_err(|_| RecordInputError::QuantityTooLarge(quantity))?,
            _ => 1,
        };

        let category = self
            .category
            .and_then(|category| CategoryName::new(&category).ok())
            .unwrap_or_else(CategoryName::fallback);

        let purchaser = self
            .purchaser
            .and_then(|purchaser| PurchaserId::new(&purchaser).ok())
            .unwrap_or_default();

        Ok(ValidatedRecord {
            name: name.to_owned(),
            category,
            quantity,
            price,
            store: self.store.unwrap_or_default(),
            purchase_date: self.purchase_date.unwrap_or(today),
            next_purchase_date: self.next_purchase_date,
            purchaser,
        })
    }
}

/// A [NewRecord] that passed validation and only lacks an ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidatedRecord {
    pub name: String,
    pub category: CategoryName,
    pub quantity: u32,
    pub price: u64,
    pub store: String,
    pub purchase_date: Date,
    pub next_purchase_date: Option<Date>,
    pub purchaser: PurchaserId,
}

impl ValidatedRecord {
    pub(crate) fn into_record(self, id: RecordId) -> Record {
        Record {
            id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            price: self.price,
            store: self.store,
            purchase_date: self.purchase_date,
            next_purchase_date: self.next_purchase_date,
            purchaser: self.purchaser,
        }
    }
}
