//! Per-category summaries for the bubble chart

use super::{group_by, sum_of};
use ytboard_types::{CategorySummary, VideoRecord};

/// Count and totals per category.
///
/// `like_ratio` is the raw `likes / dislikes`: `NaN` when both are zero and
/// `inf` when only dislikes are zero.
pub fn summarize_categories<'a, I>(rows: I) -> Vec<CategorySummary>
where
    I: IntoIterator<Item = &'a VideoRecord>,
{
    group_by(rows, |r| r.category.clone())
        .into_iter()
        .map(|(category, leaves)| {
            let total_likes = sum_of(&leaves, |r| r.likes);
            let total_dislikes = sum_of(&leaves, |r| r.dislikes);
            CategorySummary {
                category,
                video_count: leaves.len(),
                total_views: sum_of(&leaves, |r| r.views),
                total_likes,
                total_dislikes,
                like_ratio: total_likes as f64 / total_dislikes as f64,
            }
        })
        .collect()
}
