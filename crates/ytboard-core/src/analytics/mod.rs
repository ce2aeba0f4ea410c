//! Aggregation functions behind every dashboard panel
//!
//! All functions are pure reductions over an already-filtered row set and are
//! re-run on every relevant filter change. Nothing is cached between calls.
//! Groups come out in first-appearance order, so the same input always gives
//! the same output sequence.

use std::collections::HashMap;
use std::hash::Hash;
use ytboard_types::VideoRecord;

pub mod categories;
pub mod heatmap;
pub mod leaderboard;
pub mod tags;
pub mod timeline;


pub use categories::summarize_categories;
pub use heatmap::{color_domain, compute_trend_metrics, HeatmapAxes};
pub use leaderboard::rank_channels;
pub use tags::tag_frequencies;
pub use timeline::{category_timelines, granularity_for_span, Timelines};

/// Group rows by `key`, keeping groups in first-appearance order
pub(crate) fn group_by<'a, K, I, F>(rows: I, key: F) -> Vec<(K, Vec<&'a VideoRecord>)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = &'a VideoRecord>,
    F: Fn(&VideoRecord) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a VideoRecord>)> = Vec::new();

    for row in rows {
        let k = key(row);
        match index.get(&k) {
            Some(&idx) => groups[idx].1.push(row),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![row]));
            }
        }
    }
    groups
}

/// Sum of one numeric field over a group
pub(crate) fn sum_of(rows: &[&VideoRecord], field: impl Fn(&VideoRecord) -> u64) -> u64 {
    rows.iter().map(|r| field(r)).sum()
}
