//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, registry::Registry, timezone::get_local_offset};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Asia/Tokyo".
    ///
    /// Used to work out which day it is when classifying records.
    pub local_timezone: String,

    /// The records, categories and purchasers shared by every request.
    pub registry: Arc<Mutex<Registry>>,
}

impl AppState {
    /// Create a new [AppState] with an empty registry.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Asia/Tokyo".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(local_timezone: &str) -> Result<Self, Error> {
        Self::with_registry(local_timezone, Registry::new())
    }

    /// Create a new [AppState] that starts from an existing `registry`.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn with_registry(local_timezone: &str, registry: Registry) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            registry: Arc::new(Mutex::new(registry)),
        })
    }
}

/// Acquire the registry lock.
///
/// The lock should be held for the whole of a check-then-modify operation so
/// that no other request can change the registry in between.
///
/// # Errors
/// Returns [Error::StateLockError] if the lock is poisoned.
pub(crate) fn lock_registry(registry: &Mutex<Registry>) -> Result<MutexGuard<'_, Registry>, Error> {
    registry.lock().map_err(|error| {
        tracing::error!("could not acquire registry lock: {error}");
        Error::StateLockError
    })
}
