//! Immutable in-memory dataset

use std::collections::HashSet;
use std::sync::Arc;
use ytboard_types::{DateRange, VideoRecord};

/// Longest plausible stay on the trending list, in days
pub const MAX_TREND_DURATION: u32 = 366;

/// The full record set, never mutated after load.
///
/// Cloning is cheap: records live behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[VideoRecord]>,
}

impl Dataset {
    pub fn new(records: Vec<VideoRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[VideoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First to last valid trending date; `None` if no row has one
    pub fn trending_extent(&self) -> Option<DateRange> {
        let mut dates = self.records.iter().filter_map(|r| r.trending_date);
        let first = dates.next()?;
        let (min, max) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some(DateRange::from_dates(min, max))
    }

    /// Distinct categories in first-appearance order
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.category.as_str()))
            .map(|r| r.category.clone())
            .collect()
    }

    /// Longest trending duration (0 for an empty dataset)
    pub fn max_trend_duration(&self) -> u32 {
        self.records
            .iter()
            .map(|r| r.trend_duration)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(category: &str, date: Option<(i32, u32, u32)>, duration: u32) -> VideoRecord {
        VideoRecord {
            category: category.to_string(),
            trending_date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            trend_duration: duration,
            ..VideoRecord::default()
        }
    }

    #[test]
    fn test_extent_skips_invalid_dates() {
        let dataset = Dataset::new(vec![
            record("Music", Some((2018, 3, 1)), 1),
            record("Music", None, 1),
            record("Gaming", Some((2017, 11, 14)), 2),
        ]);
        let extent = dataset.trending_extent().unwrap();

        assert!(extent.contains(NaiveDate::from_ymd_opt(2017, 11, 14).unwrap()));
        assert!(extent.contains(NaiveDate::from_ymd_opt(2018, 3, 1).unwrap()));
        assert!(!extent.contains(NaiveDate::from_ymd_opt(2018, 3, 2).unwrap()));
    }

    #[test]
    fn test_extent_none_without_dates() {
        let dataset = Dataset::new(vec![record("Music", None, 1)]);
        assert!(dataset.trending_extent().is_none());
        assert!(Dataset::new(Vec::new()).trending_extent().is_none());
    }

    #[test]
    fn test_categories_first_appearance() {
        let dataset = Dataset::new(vec![
            record("Music", None, 3),
            record("", None, 1),
            record("Gaming", None, 7),
            record("Music", None, 2),
        ]);

        assert_eq!(dataset.categories(), vec!["Music", "", "Gaming"]);
        assert_eq!(dataset.max_trend_duration(), 7);
    }
}
