//! Classifies records by how soon they need to be bought again.

use serde::{Deserialize, Serialize};
use time::Date;

/// Records due within this many days are [Classification::Upcoming].
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// How a record's next purchase date relates to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// There is no next purchase date.
    NoDate,
    /// The next purchase date has passed.
    Overdue,
    /// The next purchase date is today or within the next week.
    Upcoming,
    /// The next purchase date is more than a week away.
    OnTrack,
}

impl Classification {
    /// Whether the item should be bought soon, i.e. it is overdue or upcoming.
    pub fn is_due(self) -> bool {
        matches!(self, Classification::Overdue | Classification::Upcoming)
    }
}

/// Classify `next_purchase_date` relative to `today`.
pub fn classify(next_purchase_date: Option<Date>, today: Date) -> Classification {
    let Some(next_purchase_date) = next_purchase_date else {
        return Classification::NoDate;
    };

    let diff_days = (next_purchase_date - today).whole_days();

    if diff_days < 0 {
        Classification::Overdue
    } else if diff_days <= UPCOMING_WINDOW_DAYS {
        Classification::Upcoming
    } else {
        Classification::OnTrack
    }
}

/// The status a user can filter records by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Do not filter on status.
    #[default]
    All,
    /// Records without a next purchase date.
    NoDate,
    /// Records whose next purchase date has passed.
    Overdue,
    /// Records due within the upcoming window.
    Upcoming,
    /// Either overdue or upcoming.
    Due,
}

impl StatusFilter {
    /// Whether a record with `classification` passes this filter.
    pub fn matches(self, classification: Classification) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::NoDate => classification == Classification::NoDate,
            StatusFilter::Overdue => classification == Classification::Overdue,
            StatusFilter::Upcoming => classification == Classification::Upcoming,
            StatusFilter::Due => classification.is_due(),
        }
    }
}

#[cfg(test)]
mod classify_tests {
    use time::{Duration, macros::date};

    use super::{Classification, StatusFilter, classify};

    const TODAY: time::Date = date!(2025 - 03 - 01);

    #[test]
    fn missing_date_is_no_date() {
        assert_eq!(classify(None, TODAY), Classification::NoDate);
    }

    #[test]
    fn day_boundaries() {
        let cases = [
            (-30, Classification::Overdue),
            (-1, Classification::Overdue),
            (0, Classification::Upcoming),
            (1, Classification::Upcoming),
            (7, Classification::Upcoming),
            (8, Classification::OnTrack),
            (365, Classification::OnTrack),
        ];

        for (offset, want) in cases {
            let next = TODAY + Duration::days(offset);

            assert_eq!(classify(Some(next), TODAY), want, "offset {offset} days");
        }
    }

    #[test]
    fn boundaries_hold_across_month_and_year_ends() {
        for today in [date!(2024 - 02 - 29), date!(2024 - 12 - 31), date!(2025 - 01 - 01)] {
            assert_eq!(
                classify(today.previous_day(), today),
                Classification::Overdue
            );
            assert_eq!(classify(Some(today), today), Classification::Upcoming);
            assert_eq!(
                classify(Some(today + Duration::days(7)), today),
                Classification::Upcoming
            );
            assert_eq!(
                classify(Some(today + Duration::days(8)), today),
                Classification::OnTrack
            );
        }
    }

    #[test]
    fn due_is_overdue_or_upcoming() {
        let all = [
            Classification::NoDate,
            Classification::Overdue,
            Classification::Upcoming,
            Classification::OnTrack,
        ];

        for classification in all {
            assert_eq!(
                StatusFilter::Due.matches(classification),
                StatusFilter::Overdue.matches(classification)
                    || StatusFilter::Upcoming.matches(classification),
                "{classification:?}"
            );
        }
    }

    #[test]
    fn all_matches_everything() {
        assert!(StatusFilter::All.matches(Classification::NoDate));
        assert!(StatusFilter::All.matches(Classification::OnTrack));
    }

    #[test]
    fn on_track_matches_no_specific_status() {
        assert!(!StatusFilter::Overdue.matches(Classification::OnTrack));
        assert!(!StatusFilter::Upcoming.matches(Classification::OnTrack));
        assert!(!StatusFilter::Due.matches(Classification::OnTrack));
        assert!(!StatusFilter::NoDate.matches(Classification::OnTrack));
    }
}
