//! Channel leaderboard

use super::group_by;
use ytboard_types::{ChannelRanking, LeaderboardMetric, VideoRecord};

/// Top `limit` channels by the summed `metric`, descending.
///
/// The sort is stable: channels with equal sums keep first-appearance order.
pub fn rank_channels<'a, I>(rows: I, metric: LeaderboardMetric, limit: usize) -> Vec<ChannelRanking>
where
    I: IntoIterator<Item = &'a VideoRecord>,
{
    let mut ranking: Vec<ChannelRanking> = group_by(rows, |r| r.channel().to_string())
        .into_iter()
        .map(|(channel, leaves)| ChannelRanking {
            channel,
            value: leaves.iter().map(|r| metric.value(r)).sum(),
        })
        .collect();

    ranking.sort_by(|a, b| b.value.cmp(&a.value));
    ranking.truncate(limit);
    ranking
}
