//! Endpoints for listing, registering and deleting purchasers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::{
    Error,
    app_state::lock_registry,
    guard::{PendingDeletion, RegistryKind},
    purchaser::{PurchaserFormData, PurchaserId},
    registry_entry::{Registered, RegistryEntryState, check_deletion, confirm_deletion},
};

/// Every selectable purchaser, and the subset the user can delete.
#[derive(Debug, Clone, Serialize)]
pub struct PurchaserList {
    /// Every purchasers that can be picked for a record, the shared purchaser first.
    pub all: Vec<PurchaserId>,
    /// The purchasers the user registered or used on a record.
    pub custom: Vec<PurchaserId>,
}

/// List the shared purchaser followed by the custom purchasers.
///
/// Purchasers that only appear on records are included too.
pub async fn get_purchasers_endpoint(
    State(state): State<RegistryEntryState>,
) -> Result<Json<PurchaserList>, Error> {
    let registry = lock_registry(&state.registry)?;

    Ok(Json(PurchaserList {
        all: registry.list_purchasers(),
        custom: registry.list_custom_purchasers(),
    }))
}

/// Register a new purchaser.
pub async fn create_purchaser_endpoint(
    State(state): State<RegistryEntryState>,
    Json(form): Json<PurchaserFormData>,
) -> Result<(StatusCode, Json<Registered>), Error> {
    let purchaser = PurchaserId::new(&form.name)?;
    let mut registry = lock_registry(&state.registry)?;

    let created = registry.register_purchaser(purchaser.clone());

    Ok(Registered {
        name: purchaser.into(),
        created,
    }
    .with_status())
}

/// Check whether a purchaser can be deleted.
pub async fn check_purchaser_deletion_endpoint(
    Path(name): Path<String>,
    State(state): State<RegistryEntryState>,
) -> Result<Json<PendingDeletion>, Error> {
    check_deletion(&state, RegistryKind::Purchaser, &name)
}

/// Delete a purchaser that no record uses.
pub async fn delete_purchaser_endpoint(
    Path(name): Path<String>,
    State(state): State<RegistryEntryState>,
) -> Result<StatusCode, Error> {
    confirm_deletion(&state, RegistryKind::Purchaser, &name)
}

#[cfg(test)]
mod purchaser_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json,
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use time::macros::date;

    use crate::{
        purchaser::{
            PurchaserFormData, PurchaserId, check_purchaser_deletion_endpoint,
            create_purchaser_endpoint, delete_purchaser_endpoint, get_purchasers_endpoint,
        },
        record::NewRecord,
        registry::Registry,
        registry_entry::RegistryEntryState,
        test_utils::parse_json,
    };

    fn get_state() -> RegistryEntryState {
        RegistryEntryState {
            registry: Arc::new(Mutex::new(Registry::new())),
        }
    }

    #[tokio::test]
    async fn can_create_purchaser() {
        let state = get_state();

        let (status, Json(registered)) = create_purchaser_endpoint(
            State(state.clone()),
            Json(PurchaserFormData {
                name: "母".to_owned(),
            }),
        )
        .await
        .expect("Could not create purchaser");

        assert_eq!(status, StatusCode::CREATED);
        assert!(registered.created);
        let Json(list) = get_purchasers_endpoint(State(state)).await.unwrap();
        assert_eq!(
            list.all,
            vec![PurchaserId::shared(), PurchaserId::new_unchecked("母")]
        );
        assert_eq!(list.custom, vec![PurchaserId::new_unchecked("母")]);
    }

    #[tokio::test]
    async fn shared_purchaser_cannot_be_deleted() {
        let response = delete_purchaser_endpoint(Path("家族全員".to_owned()), State(get_state()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = parse_json(response).await;
        assert_eq!(body["error"], "the shared purchaser cannot be deleted");
    }

    #[tokio::test]
    async fn purchaser_can_be_deleted_once_unused() {
        let state = get_state();
        let record = state
            .registry
            .lock()
            .unwrap()
            .add_record(
                NewRecord::build("Beer", 1500).purchaser("父"),
                date!(2025 - 03 - 01),
            )
            .unwrap();

        let refused = check_purchaser_deletion_endpoint(Path("父".to_owned()), State(state.clone()))
            .await
            .into_response();
        assert_eq!(refused.status(), StatusCode::CONFLICT);
        let body = parse_json(refused).await;
        assert_eq!(
            body["error"],
            "the purchaser \"父\" is in use and cannot be deleted"
        );

        state.registry.lock().unwrap().remove_record(record.id).unwrap();

        let status = delete_purchaser_endpoint(Path("父".to_owned()), State(state.clone()))
            .await
            .expect("Could not delete purchaser");
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(state.registry.lock().unwrap().list_custom_purchasers().is_empty());
    }
}
