//! Shared handling for the category and purchaser endpoints.

use std::sync::{Arc, Mutex};

use axum::{Json, extract::FromRef, http::StatusCode};
use serde::Serialize;

use crate::{
    AppState, Error,
    app_state::lock_registry,
    guard::{PendingDeletion, RegistryKind, request_delete},
    registry::Registry,
};

/// The state needed by the category and purchaser endpoints.
#[derive(Debug, Clone)]
pub struct RegistryEntryState {
    /// The registry shared with the rest of the app.
    pub registry: Arc<Mutex<Registry>>,
}

impl FromRef<AppState> for RegistryEntryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            registry: state.registry.clone(),
        }
    }
}

/// The response to registering a category or purchaser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registered {
    /// The name after trimming whitespace.
    pub name: String,
    /// `false` if the name was already available, e.g. a default category.
    pub created: bool,
}

impl Registered {
    pub(crate) fn with_status(self) -> (StatusCode, Json<Self>) {
        let status = if self.created {
            StatusCode::CREATED
        } else {
            StatusCode::OK
        };

        (status, Json(self))
    }
}

/// Check whether an entry can be deleted without deleting it.
///
/// Responds with the pending deletion the client should ask the user to
/// confirm, or the reason the entry cannot be deleted.
pub(crate) fn check_deletion(
    state: &RegistryEntryState,
    kind: RegistryKind,
    value: &str,
) -> Result<Json<PendingDeletion>, Error> {
    let registry = lock_registry(&state.registry)?;

    request_delete(&registry, kind, value).map(Json)
}

/// Check and delete an entry while holding the registry lock.
pub(crate) fn confirm_deletion(
    state: &RegistryEntryState,
    kind: RegistryKind,
    value: &str,
) -> Result<StatusCode, Error> {
    let mut registry = lock_registry(&state.registry)?;

    request_delete(&registry, kind, value)?.confirm(&mut registry)?;

    Ok(StatusCode::NO_CONTENT)
}
