//! Record creation endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    Error,
    app_state::lock_registry,
    record::{NewRecord, Record, RecordEndpointState},
    timezone::get_local_date,
};

/// Handle a new purchase.
///
/// Responds with `201 Created` and the stored record. Unknown categories and
/// purchasers are registered as a side effect.
pub async fn create_record_endpoint(
    State(state): State<RecordEndpointState>,
    Json(new_record): Json<NewRecord>,
) -> Result<(StatusCode, Json<Record>), Error> {
    let today = get_local_date(&state.local_timezone)?;
    let mut registry = lock_registry(&state.registry)?;

    let record = registry.add_record(new_record, today).inspect_err(|error| {
        tracing::debug!("rejected new record: {error}");
    })?;

    Ok((StatusCode::CREATED, Json(record)))
}
