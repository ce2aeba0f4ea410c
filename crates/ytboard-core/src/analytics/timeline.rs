//! Per-category video counts over time for the time graph

use super::group_by;
use chrono::{Datelike, Duration, Months, NaiveDate};
use std::collections::HashMap;
use ytboard_types::{CategoryTimeline, TimeBin, TimeGranularity, VideoRecord};

/// Binned series for every category present in the rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timelines {
    /// `None` when no row has a valid trending date
    pub granularity: Option<TimeGranularity>,
    pub lines: Vec<CategoryTimeline>,
    /// Largest bin count across all lines
    pub max_count: usize,
}

/// Bin width for a span: days under 2 months, weeks under 5, months beyond.
///
/// A month counts as 31 days.
pub fn granularity_for_span(first: NaiveDate, last: NaiveDate) -> TimeGranularity {
    let months = (last - first).num_days() / 31;
    if months < 2 {
        TimeGranularity::Day
    } else if months < 5 {
        TimeGranularity::Week
    } else {
        TimeGranularity::Month
    }
}

/// Start of the bin containing `date` (weeks start on Sunday)
fn floor(date: NaiveDate, granularity: TimeGranularity) -> NaiveDate {
    match granularity {
        TimeGranularity::Day => date,
        TimeGranularity::Week => {
            date - Duration::days(date.weekday().num_days_from_sunday() as i64)
        }
        TimeGranularity::Month => date.with_day(1).unwrap_or(date),
    }
}

fn next(start: NaiveDate, granularity: TimeGranularity) -> Option<NaiveDate> {
    match granularity {
        TimeGranularity::Day => start.succ_opt(),
        TimeGranularity::Week => start.checked_add_signed(Duration::days(7)),
        TimeGranularity::Month => start.checked_add_months(Months::new(1)),
    }
}

/// Histogram of trending dates per category.
///
/// Bins span the first to last valid trending date of `rows`; every line has
/// one entry per bin (zero-filled) so lines can share an x axis.
pub fn category_timelines<'a, I>(rows: I) -> Timelines
where
    I: IntoIterator<Item = &'a VideoRecord>,
{
    let dated: Vec<&VideoRecord> = rows
        .into_iter()
        .filter(|r| r.has_trending_date())
        .collect();

    let mut dates = dated.iter().filter_map(|r| r.trending_date);
    let Some(first_date) = dates.next() else {
        return Timelines {
            granularity: None,
            lines: Vec::new(),
            max_count: 0,
        };
    };
    let (first, last) = dates.fold((first_date, first_date), |(lo, hi), d| (lo.min(d), hi.max(d)));
    let granularity = granularity_for_span(first, last);

    let mut starts = Vec::new();
    let mut cursor = Some(floor(first, granularity));
    while let Some(start) = cursor.filter(|s| *s <= last) {
        starts.push(start);
        cursor = next(start, granularity);
    }
    let slot: HashMap<NaiveDate, usize> = starts.iter().enumerate().map(|(i, s)| (*s, i)).collect();

    let mut max_count = 0;
    let lines = group_by(dated, |r| r.category.clone())
        .into_iter()
        .map(|(category, leaves)| {
            let mut counts = vec![0usize; starts.len()];
            for date in leaves.iter().filter_map(|r| r.trending_date) {
                if let Some(&idx) = slot.get(&floor(date, granularity)) {
                    counts[idx] += 1;
                }
            }
            max_count = max_count.max(counts.iter().copied().max().unwrap_or(0));
            CategoryTimeline {
                category,
                bins: starts
                    .iter()
                    .zip(counts)
                    .map(|(start, count)| TimeBin {
                        start: *start,
                        count,
                    })
                    .collect(),
            }
        })
        .collect();

    Timelines {
        granularity: Some(granularity),
        lines,
        max_count,
    }
}
