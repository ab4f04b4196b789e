//! Endpoints for listing, registering and deleting categories.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::{
    Error,
    app_state::lock_registry,
    category::{CategoryFormData, CategoryName},
    guard::{PendingDeletion, RegistryKind},
    registry_entry::{Registered, RegistryEntryState, check_deletion, confirm_deletion},
};

/// Every selectable category, and the subset the user can delete.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryList {
    /// Every categories that can be picked for a record, the default ones first.
    pub all: Vec<CategoryName>,
    /// The categories the user registered or used on a record.
    pub custom: Vec<CategoryName>,
}

/// List the default and custom categories.
pub async fn get_categories_endpoint(
    State(state): State<RegistryEntryState>,
) -> Result<Json<CategoryList>, Error> {
    let registry = lock_registry(&state.registry)?;

    Ok(Json(CategoryList {
        all: registry.list_categories(),
        custom: registry.list_custom_categories().to_vec(),
    }))
}

/// Register a new category.
///
/// Responds with `201 Created` when the category was added, or `200 OK` if it
/// already existed.
pub async fn create_category_endpoint(
    State(state): State<RegistryEntryState>,
    Json(form): Json<CategoryFormData>,
) -> Result<(StatusCode, Json<Registered>), Error> {
    let name = CategoryName::new(&form.name)?;
    let mut registry = lock_registry(&state.registry)?;

    let created = registry.register_category(name.clone());

    Ok(Registered {
        name: name.into(),
        created,
    }
    .with_status())
}

/// Check whether a category can be deleted.
pub async fn check_category_deletion_endpoint(
    Path(name): Path<String>,
    State(state): State<RegistryEntryState>,
) -> Result<Json<PendingDeletion>, Error> {
    check_deletion(&state, RegistryKind::Category, &name)
}

/// Delete a category that no record uses.
pub async fn delete_category_endpoint(
    Path(name): Path<String>,
    State(state): State<RegistryEntryState>,
) -> Result<StatusCode, Error> {
    confirm_deletion(&state, RegistryKind::Category, &name)
}
