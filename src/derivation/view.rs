//! Builds the filtered, sorted and status annotated list of records.

use serde::Serialize;
use time::Date;

use crate::{
    derivation::{
        filter::FilterOptions,
        sort::{SortOrder, sort_records},
        status::{Classification, classify},
    },
    record::Record,
};

/// A record together with its status as of the day the view was derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordView {
    /// The stored record.
    #[serde(flatten)]
    pub record: Record,
    /// The record's status relative to the day of the view.
    pub status: Classification,
}

impl AsRef<Record> for RecordView {
    fn as_ref(&self) -> &Record {
        &self.record
    }
}

/// Derive the list of records to show from `records`.
///
/// The records are filtered with `filter`, ordered by `sort_order` and
/// classified relative to `today`. The input is never modified, so the view
/// can be recomputed on every read.
pub fn derive_view<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    filter: &FilterOptions,
    sort_order: SortOrder,
    today: Date,
) -> Vec<RecordView> {
    let mut view: Vec<RecordView> = records
        .into_iter()
        .filter(|record| filter.matches(record, today))
        .map(|record| RecordView {
            record: record.clone(),
            status: classify(record.next_purchase_date, today),
        })
        .collect();

    sort_records(&mut view, sort_order);

    view
}
