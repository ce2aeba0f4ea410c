use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Inclusive time window over trending dates.
///
/// Bounds are date-times because the range slider inverts to fractional days:
/// a record dated at midnight before `start` is excluded even when it falls on
/// the same calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Build a range, swapping the bounds if they are reversed
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Range covering whole calendar days `first..=last` at midnight
    pub fn from_dates(first: NaiveDate, last: NaiveDate) -> Self {
        Self::new(first.and_time(NaiveTime::MIN), last.and_time(NaiveTime::MIN))
    }

    /// Whether a trending date (taken at midnight) falls inside the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        let at = date.and_time(NaiveTime::MIN);
        at >= self.start && at <= self.end
    }
}

/// Dashboard panels that consume aggregation output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    BubbleChart,
    TimeGraph,
    Heatmap,
    Leaderboard,
    WordCloud,
}

impl Panel {
    /// Panels that aggregate over time-filtered rows
    pub const TIME_FILTERED: [Panel; 4] = [
        Panel::TimeGraph,
        Panel::Heatmap,
        Panel::BubbleChart,
        Panel::Leaderboard,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Panel::BubbleChart => "bubble_chart",
            Panel::TimeGraph => "time_graph",
            Panel::Heatmap => "heatmap",
            Panel::Leaderboard => "leaderboard",
            Panel::WordCloud => "word_cloud",
        }
    }
}

/// How a panel treats the category selection.
///
/// `Exclude` removes unselected categories from the aggregation set.
/// `Dim` aggregates every category and only flags unselected ones for
/// de-emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryPolicy {
    Exclude,
    Dim,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = DateRange::from_dates(day(2018, 1, 1), day(2018, 1, 31));
        assert!(range.contains(day(2018, 1, 1)));
        assert!(range.contains(day(2018, 1, 31)));
        assert!(!range.contains(day(2018, 2, 1)));
    }

    #[test]
    fn test_fractional_start_excludes_same_day() {
        let start = day(2018, 1, 1).and_hms_opt(13, 0, 0).unwrap();
        let end = day(2018, 1, 5).and_hms_opt(13, 0, 0).unwrap();
        let range = DateRange::new(start, end);

        assert!(!range.contains(day(2018, 1, 1)));
        assert!(range.contains(day(2018, 1, 5)));
    }

    #[test]
    fn test_reversed_bounds_are_swapped() {
        let range = DateRange::from_dates(day(2018, 3, 1), day(2018, 1, 1));
        assert!(range.start < range.end);
        assert!(range.contains(day(2018, 2, 1)));
    }

    #[test]
    fn test_panel_serializes_snake_case() {
        let json = serde_json::to_string(&Panel::BubbleChart).unwrap();
        assert_eq!(json, "\"bubble_chart\"");
    }
}
