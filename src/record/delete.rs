//! Record deletion endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    app_state::lock_registry,
    record::{Record, RecordEndpointState, RecordId},
};

/// Delete a record and respond with the deleted record.
///
/// Categories and purchasers the record used stay registered.
pub async fn delete_record_endpoint(
    Path(record_id): Path<RecordId>,
    State(state): State<RecordEndpointState>,
) -> Result<Json<Record>, Error> {
    let mut registry = lock_registry(&state.registry)?;

    registry.remove_record(record_id).map(Json)
}
