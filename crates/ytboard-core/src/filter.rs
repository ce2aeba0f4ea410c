//! Shared filter state: time window plus category selection
//!
//! Mutated only through the setters below, which the interaction coordinator
//! calls in response to UI messages.

use crate::dataset::Dataset;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;
use ytboard_types::{CategoryPolicy, DateRange, VideoRecord};

/// Outcome of toggling a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// Category added; `first` when the selection was empty before
    Added { first: bool },
    /// Category removed; `cleared` when the selection is now empty
    Removed { cleared: bool },
}

/// Current time range and category selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    /// `None` when the dataset has no valid trending date; matches nothing
    date_range: Option<DateRange>,
    /// Empty means "no filter"
    selected_categories: BTreeSet<String>,
}

impl FilterState {
    pub fn new(date_range: Option<DateRange>) -> Self {
        Self {
            date_range,
            selected_categories: BTreeSet::new(),
        }
    }

    /// Full data extent, nothing selected
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self::new(dataset.trending_extent())
    }

    pub fn date_range(&self) -> Option<DateRange> {
        self.date_range
    }

    pub fn selected_categories(&self) -> &BTreeSet<String> {
        &self.selected_categories
    }

    pub fn has_selection(&self) -> bool {
        !self.selected_categories.is_empty()
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.date_range = Some(range);
    }

    /// Add the category if absent, remove it otherwise
    pub fn toggle_category(&mut self, category: &str) -> SelectionChange {
        let change = if self.selected_categories.remove(category) {
            SelectionChange::Removed {
                cleared: self.selected_categories.is_empty(),
            }
        } else {
            let first = self.selected_categories.is_empty();
            self.selected_categories.insert(category.to_string());
            SelectionChange::Added { first }
        };
        debug!(category, ?change, selected = ?self.selected_categories, "Category toggled");
        change
    }

    pub fn clear_selection(&mut self) {
        self.selected_categories.clear();
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected_categories.contains(category)
    }

    /// Shown de-emphasized: something is selected, but not this
    pub fn is_dimmed(&self, category: &str) -> bool {
        self.has_selection() && !self.is_selected(category)
    }

    /// Record trending inside the current range. Invalid dates never pass.
    pub fn passes_time(&self, record: &VideoRecord) -> bool {
        match (self.date_range, record.trending_date) {
            (Some(range), Some(date)) => range.contains(date),
            _ => false,
        }
    }

    /// Category selected, or no selection at all
    pub fn passes_category(&self, category: &str) -> bool {
        !self.has_selection() || self.is_selected(category)
    }

    /// Combined predicate: time AND category
    pub fn passes(&self, record: &VideoRecord) -> bool {
        self.passes_time(record) && self.passes_category(&record.category)
    }

    /// Rows a panel aggregates over.
    ///
    /// The time filter always applies; the category filter only under
    /// `CategoryPolicy::Exclude`.
    pub fn rows_for<'a>(
        &self,
        records: &'a [VideoRecord],
        policy: CategoryPolicy,
    ) -> Vec<&'a VideoRecord> {
        records
            .iter()
            .filter(|r| match policy {
                CategoryPolicy::Exclude => self.passes(r),
                CategoryPolicy::Dim => self.passes_time(r),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 1, d).unwrap()
    }

    fn record(category: &str, d: Option<u32>) -> VideoRecord {
        VideoRecord {
            category: category.to_string(),
            trending_date: d.map(day),
            ..VideoRecord::default()
        }
    }

    #[test]
    fn test_toggle_on_then_off_restores() {
        let mut state = FilterState::new(Some(DateRange::from_dates(day(1), day(31))));
        let before = state.clone();

        assert_eq!(
            state.toggle_category("Music"),
            SelectionChange::Added { first: true }
        );
        assert_eq!(
            state.toggle_category("Gaming"),
            SelectionChange::Added { first: false }
        );
        assert_eq!(
            state.toggle_category("Gaming"),
            SelectionChange::Removed { cleared: false }
        );
        assert_eq!(
            state.toggle_category("Music"),
            SelectionChange::Removed { cleared: true }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_dimming_follows_selection() {
        let mut state = FilterState::new(None);
        assert!(!state.is_dimmed("Music"));

        state.toggle_category("Music");
        assert!(!state.is_dimmed("Music"));
        assert!(state.is_dimmed("Gaming"));

        state.clear_selection();
        assert!(!state.is_dimmed("Gaming"));
    }

    #[test]
    fn test_combined_predicate() {
        let mut state = FilterState::new(Some(DateRange::from_dates(day(5), day(10))));
        state.toggle_category("Music");

        assert!(state.passes(&record("Music", Some(5))));
        assert!(!state.passes(&record("Gaming", Some(5))));
        assert!(!state.passes(&record("Music", Some(11))));
        assert!(!state.passes(&record("Music", None)));
    }

    #[test]
    fn test_no_range_matches_nothing() {
        let state = FilterState::new(None);
        assert!(!state.passes_time(&record("Music", Some(1))));
    }

    #[test]
    fn test_rows_for_policy() {
        let records = vec![
            record("Music", Some(2)),
            record("Gaming", Some(2)),
            record("Music", Some(20)),
        ];
        let mut state = FilterState::new(Some(DateRange::from_dates(day(1), day(10))));
        state.toggle_category("Music");

        assert_eq!(state.rows_for(&records, CategoryPolicy::Exclude).len(), 1);
        assert_eq!(state.rows_for(&records, CategoryPolicy::Dim).len(), 2);
    }
}
