//! Purchase records: the domain type and the endpoints for creating, listing and deleting them.

mod create;
mod delete;
mod domain;
mod list;

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;

use crate::{AppState, registry::Registry};

pub use create::create_record_endpoint;
pub use delete::delete_record_endpoint;
pub use domain::{NewRecord, Record, RecordId};
pub use list::{ALL, RecordQuery, RecordsResponse, get_records_endpoint};

/// The state needed by the record endpoints.
#[derive(Debug, Clone)]
pub struct RecordEndpointState {
    /// The registry shared with the rest of the app.
    pub registry: Arc<Mutex<Registry>>,
    /// The timezone used to work out today's date.
    pub local_timezone: String,
}

impl FromRef<AppState> for RecordEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            registry: state.registry.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}
