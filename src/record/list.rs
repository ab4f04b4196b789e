//! The endpoint for listing records with filtering and sorting.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    app_state::lock_registry,
    category::CategoryName,
    derivation::{FilterOptions, RecordView, SortOrder, StatusFilter, derive_view},
    purchaser::PurchaserId,
    record::RecordEndpointState,
    timezone::get_local_date,
};

/// The value of the `category` and `purchaser` parameters that disables the filter.
pub const ALL: &str = "all";

/// The query string accepted by [get_records_endpoint].
///
/// Every parameter is optional. `category` and `purchaser` accept [ALL] to
/// mean the same as leaving them out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordQuery {
    /// The category to show, or [ALL].
    #[serde(default)]
    pub category: Option<String>,
    /// The purchaser to show, or [ALL].
    #[serde(default)]
    pub purchaser: Option<String>,
    /// The status to show.
    #[serde(default)]
    pub status: StatusFilter,
    /// Text the record name must contain.
    #[serde(default)]
    pub search: Option<String>,
    /// The order of the records.
    #[serde(default)]
    pub sort: SortOrder,
}

impl RecordQuery {
    /// Convert the query parameters into [FilterOptions].
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            category: self
                .category
                .as_deref()
                .filter(|category| *category != ALL)
                .and_then(|category| CategoryName::new(category).ok()),
            purchaser: self
                .purchaser
                .as_deref()
                .filter(|purchaser| *purchaser != ALL)
                .and_then(|purchaser| PurchaserId::new(purchaser).ok()),
            status: self.status,
            search_text: self.search.clone().unwrap_or_default(),
        }
    }
}

/// The records to show and the day their status was computed for.
#[derive(Debug, Clone, Serialize)]
pub struct RecordsResponse {
    /// The local date used to classify the records.
    pub today: Date,
    /// The matching records in display order.
    pub records: Vec<RecordView>,
}

/// List the records matching the query, sorted and annotated with their status.
pub async fn get_records_endpoint(
    State(state): State<RecordEndpointState>,
    Query(query): Query<RecordQuery>,
) -> Result<Json<RecordsResponse>, Error> {
    let today = get_local_date(&state.local_timezone)?;
    let registry = lock_registry(&state.registry)?;

    let records = derive_view(
        registry.records(),
        &query.filter_options(),
        query.sort,
        today,
    );

    Ok(Json(RecordsResponse { today, records }))
}
