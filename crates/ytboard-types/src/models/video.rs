use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One trending-video observation from the cleaned dataset.
///
/// A video that stays on the trending list for several days appears once per
/// trending day. Numeric fields that failed to parse are `0`; dates that failed
/// to parse are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Category name, `""` when missing (its own bucket)
    pub category: String,
    pub category_id: u64,
    pub channel_title: String,
    pub comment_count: u64,
    pub description: String,
    pub dislikes: u64,
    pub likes: u64,
    pub publish_date: Option<NaiveDate>,
    pub publish_time: Option<NaiveTime>,
    /// Unique tags in first-occurrence order
    pub tags: Vec<String>,
    pub thumbnail_link: String,
    pub title: String,
    pub trending_date: Option<NaiveDate>,
    pub views: u64,
    /// Number of days the video stayed on the trending list
    pub trend_duration: u32,
    /// Days between publication and first trending day
    pub publish_to_trend: i64,
    /// Days between publication and last trending day
    pub publish_to_trend_last: i64,
}

impl VideoRecord {
    /// Channel name as shown on the leaderboard
    pub fn channel(&self) -> &str {
        &self.channel_title
    }

    /// True when the trending date parsed successfully
    pub fn has_trending_date(&self) -> bool {
        self.trending_date.is_some()
    }
}
