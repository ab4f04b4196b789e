//! Orders records for display.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// The order to show records in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Soonest next purchase date first, records without one last.
    #[default]
    NextPurchaseDate,
    /// Most recent purchase first.
    PurchaseDate,
    /// Most expensive first.
    Price,
    /// Alphabetical by name, using Japanese collation.
    Name,
}

/// Sort `records` in place by `order`.
///
/// The sort is stable, so records that compare equal keep their relative order.
pub fn sort_records<R: AsRef<Record>>(records: &mut [R], order: SortOrder) {
    match order {
        SortOrder::NextPurchaseDate => {
            records.sort_by(|a, b| compare_next_purchase_date(a.as_ref(), b.as_ref()))
        }
        SortOrder::PurchaseDate => {
            records.sort_by(|a, b| b.as_ref().purchase_date.cmp(&a.as_ref().purchase_date))
        }
        SortOrder::Price => records.sort_by(|a, b| b.as_ref().price.cmp(&a.as_ref().price)),
        SortOrder::Name => {
            let collator = Collator::try_new(&locale!("ja").into(), CollatorOptions::new());

            match collator {
                Ok(collator) => {
                    records.sort_by(|a, b| collator.compare(&a.as_ref().name, &b.as_ref().name))
                }
                Err(error) => {
                    tracing::warn!(
                        "could not load the Japanese collator, sorting by code point: {error:?}"
                    );
                    records.sort_by(|a, b| a.as_ref().name.cmp(&b.as_ref().name))
                }
            }
        }
    }
}

fn compare_next_purchase_date(a: &Record, b: &Record) -> Ordering {
    match (a.next_purchase_date, b.next_purchase_date) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod sort_tests {
    use time::{Date, macros::date};

    use crate::{
        category::CategoryName,
        derivation::sort::{SortOrder, sort_records},
        purchaser::PurchaserId,
        record::{Record, RecordId},
    };

    fn record(id: RecordId, name: &str, price: u64, purchased: Date, next: Option<Date>) -> Record {
        Record {
            id,
            name: name.to_owned(),
            category: CategoryName::fallback(),
            quantity: 1,
            price,
            store: String::new(),
            purchase_date: purchased,
            next_purchase_date: next,
            purchaser: PurchaserId::shared(),
        }
    }

    fn ids(records: &[Record]) -> Vec<RecordId> {
        records.iter().map(|record| record.id).collect()
    }

    #[test]
    fn undated_records_sort_last_and_keep_their_order() {
        let purchased = date!(2025 - 01 - 01);
        let mut records = vec![
            record(1, "a", 1, purchased, None),
            record(2, "b", 1, purchased, Some(date!(2025 - 03 - 10))),
            record(3, "c", 1, purchased, None),
            record(4, "d", 1, purchased, Some(date!(2025 - 03 - 01))),
            record(5, "e", 1, purchased, Some(date!(2025 - 03 - 10))),
            record(6, "f", 1, purchased, None),
        ];

        sort_records(&mut records, SortOrder::NextPurchaseDate);

        assert_eq!(ids(&records), vec![4, 2, 5, 1, 3, 6]);
    }

    #[test]
    fn purchase_date_is_most_recent_first() {
        let mut records = vec![
            record(1, "a", 1, date!(2025 - 01 - 01), None),
            record(2, "b", 1, date!(2025 - 02 - 01), None),
            record(3, "c", 1, date!(2024 - 12 - 01), None),
        ];

        sort_records(&mut records, SortOrder::PurchaseDate);

        assert_eq!(ids(&records), vec![2, 1, 3]);
    }

    #[test]
    fn price_is_most_expensive_first() {
        let purchased = date!(2025 - 01 - 01);
        let mut records = vec![
            record(1, "Soap", 300, purchased, None),
            record(2, "Rice", 2000, purchased, None),
            record(3, "Pen", 300, purchased, None),
        ];

        sort_records(&mut records, SortOrder::Price);

        assert_eq!(ids(&records), vec![2, 1, 3]);
    }

    #[test]
    fn name_uses_japanese_collation() {
        let purchased = date!(2025 - 01 - 01);
        // Code point order would put katakana "カ" (U+30AB) after hiragana "さ" (U+3055).
        let mut records = vec![
            record(1, "さとう", 1, purchased, None),
            record(2, "カレー", 1, purchased, None),
            record(3, "あぶら", 1, purchased, None),
        ];

        sort_records(&mut records, SortOrder::Name);

        assert_eq!(ids(&records), vec![3, 2, 1]);
    }

    #[test]
    fn name_ignores_case_for_latin_text() {
        let purchased = date!(2025 - 01 - 01);
        let mut records = vec![
            record(1, "Soap", 1, purchased, None),
            record(2, "rice", 1, purchased, None),
        ];

        sort_records(&mut records, SortOrder::Name);

        assert_eq!(ids(&records), vec![2, 1]);
    }
}
