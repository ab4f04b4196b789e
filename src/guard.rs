//! Guards the deletion of categories and purchasers that are still in use.
//!
//! Deleting a registry entry is a two step process: [request_delete] checks
//! that nothing refers to the entry and hands back a [PendingDeletion], which
//! the caller confirms once the user agrees. Records are never reassigned, so
//! an entry can only be deleted once no record uses it.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Error, category::CategoryName, purchaser::PurchaserId, registry::Registry};

/// The kinds of registry entries that can be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryKind {
    /// A custom category.
    Category,
    /// A custom purchaser.
    Purchaser,
}

impl Display for RegistryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryKind::Category => write!(f, "category"),
            RegistryKind::Purchaser => write!(f, "purchaser"),
        }
    }
}

/// Whether `value` could be removed from the registry right now.
///
/// Returns `false` if any record uses `value` as its category (or purchaser).
/// The shared purchaser can never be deleted.
pub fn can_delete(registry: &Registry, kind: RegistryKind, value: &str) -> bool {
    match kind {
        RegistryKind::Category => !registry
            .records()
            .iter()
            .any(|record| record.category.as_ref() == value),
        RegistryKind::Purchaser => {
            !PurchaserId::new_unchecked(value).is_shared()
                && !registry
                    .records()
                    .iter()
                    .any(|record| record.purchaser.as_ref() == value)
        }
    }
}

/// A deletion that passed the guard and is waiting for the user to confirm it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingDeletion {
    kind: RegistryKind,
    value: String,
}

impl PendingDeletion {
    /// The kind of entry that will be deleted.
    pub fn kind(&self) -> RegistryKind {
        self.kind
    }

    /// The category or purchaser that will be deleted.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Remove the entry from the registry.
    ///
    /// The guard is checked again since records may have been added after the
    /// deletion was requested.
    ///
    /// # Errors
    /// Returns the same errors as [request_delete].
    pub fn confirm(self, registry: &mut Registry) -> Result<(), Error> {
        let pending = request_delete(registry, self.kind, &self.value)?;

        match pending.kind {
            RegistryKind::Category => registry.unregister_category(&pending.value),
            RegistryKind::Purchaser => registry.unregister_purchaser(&pending.value),
        }

        tracing::info!("deleted {} \"{}\"", pending.kind, pending.value);

        Ok(())
    }
}

/// Check whether `value` may be deleted and, if so, return the deletion for the caller to confirm.
///
/// # Errors
/// This function will return a:
/// - [Error::SharedPurchaser] if `value` is the shared purchaser,
/// - or [Error::DefaultCategory] if `value` is a built-in category,
/// - or [Error::InUse] if a record still uses `value`,
/// - or [Error::DeleteMissingCategory]/[Error::DeleteMissingPurchaser] if `value` is not registered.
pub fn request_delete(
    registry: &Registry,
    kind: RegistryKind,
    value: &str,
) -> Result<PendingDeletion, Error> {
    match kind {
        RegistryKind::Purchaser if PurchaserId::new_unchecked(value).is_shared() => {
            return Err(Error::SharedPurchaser);
        }
        RegistryKind::Category if CategoryName::new_unchecked(value).is_default() => {
            return Err(Error::DefaultCategory(value.to_owned()));
        }
        _ => {}
    }

    if !can_delete(registry, kind, value) {
        tracing::info!("refused to delete {kind} \"{value}\" because it is in use");
        return Err(Error::InUse {
            kind,
            value: value.to_owned(),
        });
    }

    let is_registered = match kind {
        RegistryKind::Category => registry.has_custom_category(value),
        RegistryKind::Purchaser => registry.has_custom_purchaser(value),
    };

    if !is_registered {
        return Err(match kind {
            RegistryKind::Category => Error::DeleteMissingCategory(value.to_owned()),
            RegistryKind::Purchaser => Error::DeleteMissingPurchaser(value.to_owned()),
        });
    }

    Ok(PendingDeletion {
        kind,
        value: value.to_owned(),
    })
}
