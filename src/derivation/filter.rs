//! The predicate used to narrow down the list of records.

use time::Date;

use crate::{
    category::CategoryName,
    derivation::status::{StatusFilter, classify},
    purchaser::PurchaserId,
    record::Record,
};

/// The criteria a record must meet to be shown.
///
/// `None` and an empty search text mean "do not filter on this".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Only keep records in this category.
    pub category: Option<CategoryName>,
    /// Only keep records bought by this purchaser.
    pub purchaser: Option<PurchaserId>,
    /// Only keep records with a matching status.
    pub status: StatusFilter,
    /// Only keep records whose name contains this text, ignoring case.
    pub search_text: String,
}

impl FilterOptions {
    /// Whether `record` meets every criterion, classifying its status relative to `today`.
    pub fn matches(&self, record: &Record, today: Date) -> bool {
        if self
            .category
            .as_ref()
            .is_some_and(|category| *category != record.category)
        {
            return false;
        }

        if self
            .purchaser
            .as_ref()
            .is_some_and(|purchaser| *purchaser != record.purchaser)
        {
            return false;
        }

        if !self.search_text.is_empty()
            && !record
                .name
                .to_lowercase()
                .contains(&self.search_text.to_lowercase())
        {
            return false;
        }

        self.status
            .matches(classify(record.next_purchase_date, today))
    }
}

#[cfg(test)]
mod filter_tests {
    use time::{Duration, macros::date};

    use crate::{
        category::CategoryName,
        derivation::{filter::FilterOptions, status::StatusFilter},
        purchaser::PurchaserId,
        record::Record,
    };

    const TODAY: time::Date = date!(2025 - 03 - 01);

    fn record(name: &str, category: &str, purchaser: &str, next_in_days: Option<i64>) -> Record {
        Record {
            id: 1,
            name: name.to_owned(),
            category: CategoryName::new_unchecked(category),
            quantity: 1,
            price: 100,
            store: String::new(),
            purchase_date: TODAY,
            next_purchase_date: next_in_days.map(|days| TODAY + Duration::days(days)),
            purchaser: PurchaserId::new_unchecked(purchaser),
        }
    }

    #[test]
    fn default_filter_matches_everything() {
        let filter = FilterOptions::default();

        assert!(filter.matches(&record("Soap", "食品", "父", None), TODAY));
        assert!(filter.matches(&record("Rice", "文房具", "母", Some(-3)), TODAY));
    }

    #[test]
    fn category_must_match_exactly() {
        let filter = FilterOptions {
            category: Some(CategoryName::new_unchecked("食品")),
            ..Default::default()
        };

        assert!(filter.matches(&record("Rice", "食品", "父", None), TODAY));
        assert!(!filter.matches(&record("Pen", "文房具", "父", None), TODAY));
    }

    #[test]
    fn purchaser_must_match_exactly() {
        let filter = FilterOptions {
            purchaser: Some(PurchaserId::new_unchecked("母")),
            ..Default::default()
        };

        assert!(filter.matches(&record("Rice", "食品", "母", None), TODAY));
        assert!(!filter.matches(&record("Rice", "食品", "家族全員", None), TODAY));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let filter = FilterOptions {
            search_text: "SOAP".to_owned(),
            ..Default::default()
        };

        assert!(filter.matches(&record("Hand soap", "衛生用品", "父", None), TODAY));
        assert!(!filter.matches(&record("Rice", "食品", "父", None), TODAY));
    }

    #[test]
    fn search_matches_japanese_names() {
        let filter = FilterOptions {
            search_text: "洗剤".to_owned(),
            ..Default::default()
        };

        assert!(filter.matches(&record("食器用洗剤", "洗剤・掃除用品", "母", None), TODAY));
    }

    #[test]
    fn status_is_computed_relative_to_today() {
        let filter = FilterOptions {
            status: StatusFilter::Overdue,
            ..Default::default()
        };
        let rice = record("Rice", "食品", "父", Some(2));

        assert!(!filter.matches(&rice, TODAY));
        assert!(filter.matches(&rice, TODAY + Duration::days(3)));
    }

    #[test]
    fn no_date_status_selects_undated_records() {
        let filter = FilterOptions {
            status: StatusFilter::NoDate,
            ..Default::default()
        };

        assert!(filter.matches(&record("Pen", "文房具", "父", None), TODAY));
        assert!(!filter.matches(&record("Rice", "食品", "父", Some(3)), TODAY));
    }

    #[test]
    fn upcoming_status_selects_records_due_within_a_week() {
        let filter = FilterOptions {
            status: StatusFilter::Upcoming,
            ..Default::default()
        };

        assert!(filter.matches(&record("Soap", "衛生用品", "母", Some(0)), TODAY));
        assert!(filter.matches(&record("Soap", "衛生用品", "母", Some(7)), TODAY));
        assert!(!filter.matches(&record("Soap", "衛生用品", "母", Some(8)), TODAY));
        assert!(!filter.matches(&record("Soap", "衛生用品", "母", Some(-1)), TODAY));
    }

    #[test]
    fn all_criteria_must_match() {
        let filter = FilterOptions {
            category: Some(CategoryName::new_unchecked("食品")),
            purchaser: Some(PurchaserId::new_unchecked("父")),
            status: StatusFilter::Due,
            search_text: "ri".to_owned(),
        };

        assert!(filter.matches(&record("Rice", "食品", "父", Some(1)), TODAY));
        assert!(!filter.matches(&record("Rice", "食品", "父", Some(30)), TODAY));
        assert!(!filter.matches(&record("Rice", "食品", "母", Some(1)), TODAY));
    }
}
