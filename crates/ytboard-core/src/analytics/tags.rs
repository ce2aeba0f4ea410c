//! Tag frequencies for the word cloud

use std::collections::{HashMap, HashSet};
use ytboard_types::{TagFrequency, VideoRecord};

/// Most frequent tags across `records`, top `limit`.
///
/// A video that trends on several days repeats the same tag list on each row,
/// so every distinct tag list is counted once. Ties keep first-seen order.
pub fn tag_frequencies<'a, I>(records: I, limit: usize) -> Vec<TagFrequency>
where
    I: IntoIterator<Item = &'a VideoRecord>,
{
    let mut seen_lists: HashSet<&'a [String]> = HashSet::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut frequencies: Vec<TagFrequency> = Vec::new();

    for record in records {
        if !seen_lists.insert(record.tags.as_slice()) {
            continue;
        }
        for tag in &record.tags {
            match index.get(tag.as_str()) {
                Some(&idx) => frequencies[idx].count += 1,
                None => {
                    index.insert(tag.as_str(), frequencies.len());
                    frequencies.push(TagFrequency {
                        tag: tag.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    frequencies.sort_by(|a, b| b.count.cmp(&a.count));
    frequencies.truncate(limit);
    frequencies
}
