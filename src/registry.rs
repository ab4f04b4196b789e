//! The in-memory registry of purchase records and custom categories and purchasers.

use time::Date;

use crate::{
    Error,
    category::{CategoryName, DEFAULT_CATEGORIES},
    purchaser::PurchaserId,
    record::{NewRecord, Record, RecordId},
};

/// Owns every record along with the categories and purchasers registered by the user.
///
/// Custom categories never contain a default category, custom purchasers
/// never contain the shared purchaser, and both keep insertion order without
/// duplicates.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    records: Vec<Record>,
    custom_categories: Vec<CategoryName>,
    custom_purchasers: Vec<PurchaserId>,
    last_id: RecordId,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record from `new_record` and return it with its generated ID.
    ///
    /// A category or purchaser that has not been seen before is registered as
    /// a side effect. `today` is used as the purchase date when none is given.
    ///
    /// # Errors
    /// Returns [Error::InvalidRecordInput] if the name is empty or the price is not positive.
    pub fn add_record(&mut self, new_record: NewRecord, today: Date) -> Result<Record, Error> {
        let validated = new_record.validate(today)?;

        self.last_id += 1;
        let record = validated.into_record(self.last_id);

        self.register_category(record.category.clone());
        self.register_purchaser(record.purchaser.clone());
        self.records.push(record.clone());

        tracing::debug!("created record {} \"{}\"", record.id, record.name);

        Ok(record)
    }

    /// Remove the record with `id` and return it.
    ///
    /// The categories and purchasers the record used stay registered.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingRecord] if no record has that ID.
    pub fn remove_record(&mut self, id: RecordId) -> Result<Record, Error> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(Error::DeleteMissingRecord)?;

        let record = self.records.remove(index);
        tracing::debug!("deleted record {id}");

        Ok(record)
    }

    /// All records in the order they were created.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Retrieve a single record by ID.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no record has that ID.
    pub fn get_record(&self, id: RecordId) -> Result<&Record, Error> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .ok_or(Error::NotFound)
    }

    /// Add `category` to the custom categories.
    ///
    /// Returns `false` without changing anything if `category` is a default
    /// category or is already registered.
    pub fn register_category(&mut self, category: CategoryName) -> bool {
        if category.is_default() || self.custom_categories.contains(&category) {
            return false;
        }

        tracing::debug!("registered category \"{category}\"");
        self.custom_categories.push(category);

        true
    }

    /// Add `purchaser` to the custom purchasers.
    ///
    /// Returns `false` without changing anything if `purchaser` is the shared
    /// purchaser or is already registered.
    pub fn register_purchaser(&mut self, purchaser: PurchaserId) -> bool {
        if purchaser.is_shared() || self.custom_purchasers.contains(&purchaser) {
            return false;
        }

        tracing::debug!("registered purchaser \"{purchaser}\"");
        self.custom_purchasers.push(purchaser);

        true
    }

    /// The custom categories in the order they were registered.
    pub fn list_custom_categories(&self) -> &[CategoryName] {
        &self.custom_categories
    }

    /// The custom purchasers, plus any purchaser referenced by a record.
    ///
    /// Registered purchasers come first in registration order, followed by
    /// purchasers found on records in record order. The shared purchaser is
    /// never included.
    pub fn list_custom_purchasers(&self) -> Vec<PurchaserId> {
        let mut purchasers: Vec<PurchaserId> = Vec::with_capacity(self.custom_purchasers.len());

        let candidates = self
            .custom_purchasers
            .iter()
            .chain(self.records.iter().map(|record| &record.purchaser));

        for purchaser in candidates {
            if !purchaser.is_shared() && !purchasers.contains(purchaser) {
                purchasers.push(purchaser.clone());
            }
        }

        purchasers
    }

    /// Every selectable category: the defaults followed by the custom categories.
    pub fn list_categories(&self) -> Vec<CategoryName> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|name| CategoryName::new_unchecked(name))
            .chain(self.custom_categories.iter().cloned())
            .collect()
    }

    /// Every selectable purchaser: the shared purchaser followed by the custom purchasers.
    pub fn list_purchasers(&self) -> Vec<PurchaserId> {
        let mut purchasers = vec![PurchaserId::shared()];
        purchasers.extend(self.list_custom_purchasers());
        purchasers
    }

    pub(crate) fn has_custom_category(&self, category: &str) -> bool {
        self.custom_categories
            .iter()
            .any(|custom| custom.as_ref() == category)
    }

    pub(crate) fn has_custom_purchaser(&self, purchaser: &str) -> bool {
        self.custom_purchasers
            .iter()
            .any(|custom| custom.as_ref() == purchaser)
    }

    pub(crate) fn unregister_category(&mut self, category: &str) {
        self.custom_categories
            .retain(|custom| custom.as_ref() != category);
    }

    pub(crate) fn unregister_purchaser(&mut self, purchaser: &str) {
        self.custom_purchasers
            .retain(|custom| custom.as_ref() != purchaser);
    }
}
