//! Dataset loader for the cleaned trending-videos CSV
//!
//! Field-level problems never abort a load: bad numbers become `0`, bad dates
//! become `None`, short rows are padded with empty fields. Only an unreadable
//! file or header is a hard error.

use crate::dataset::{Dataset, MAX_TREND_DURATION};
use crate::error::{CoreError, LoadError, LoadReport};
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};
use ytboard_types::VideoRecord;

/// Columns expected in the cleaned file
pub const COLUMNS: [&str; 17] = [
    "category",
    "category_id",
    "channel_title",
    "comment_count",
    "description",
    "dislikes",
    "likes",
    "publish_date",
    "publish_time",
    "tags",
    "thumbnail_link",
    "title",
    "trending_date",
    "views",
    "trend_duration",
    "publish_to_trend",
    "publish_to_trend_last",
];

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Parsed dataset together with what went wrong while parsing it
#[derive(Debug)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub report: LoadReport,
}

/// Loader for the trending-videos CSV
pub struct DatasetLoader {
    /// Per-row report entries kept before only counting
    max_row_errors: usize,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self { max_row_errors: 50 }
    }
}

impl DatasetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_row_errors(mut self, max_row_errors: usize) -> Self {
        self.max_row_errors = max_row_errors;
        self
    }

    /// Read and parse the file at `path`
    pub async fn load(&self, path: &Path) -> Result<LoadedDataset, CoreError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CoreError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CoreError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        debug!(path = %path.display(), bytes = bytes.len(), "Dataset file read");
        self.parse_reader(bytes.as_slice())
    }

    pub fn parse_str(&self, text: &str) -> Result<LoadedDataset, CoreError> {
        self.parse_reader(text.as_bytes())
    }

    /// Parse CSV from any reader
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<LoadedDataset, CoreError> {
        let mut report = LoadReport::new();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr
            .byte_headers()
            .map_err(|e| CoreError::CsvHeader {
                message: e.to_string(),
                source: e,
            })?
            .clone();

        let columns: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (String::from_utf8_lossy(name).trim().to_string(), idx))
            .collect();

        for name in COLUMNS {
            if !columns.contains_key(name) {
                report.missing_columns.push(name.to_string());
            }
        }
        if !report.missing_columns.is_empty() {
            let missing = report.missing_columns.join(", ");
            warn!(missing = %missing, "Dataset header is missing columns");
            report.add_error(
                LoadError::warning("header", format!("Missing columns: {}", missing))
                    .with_suggestion("Missing columns load as zero / empty for every row"),
            );
        }

        let mut records = Vec::new();
        for (idx, result) in rdr.byte_records().enumerate() {
            // Line 1 is the header
            let line = idx + 2;
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    report.rows_skipped += 1;
                    if report.errors.len() < self.max_row_errors {
                        report.add_error(LoadError::error(format!("line {}", line), e.to_string()));
                    }
                    continue;
                }
            };

            if row.len() != headers.len() {
                report.rows_malformed += 1;
                if report.errors.len() < self.max_row_errors {
                    report.add_warning(
                        format!("line {}", line),
                        format!("expected {} fields, found {}", headers.len(), row.len()),
                    );
                }
            }

            let fields = RowFields {
                columns: &columns,
                row: &row,
            };
            records.push(parse_record(&fields, &mut report));
        }

        report.rows_loaded = records.len();
        info!(
            rows = report.rows_loaded,
            malformed = report.rows_malformed,
            skipped = report.rows_skipped,
            invalid_dates = report.invalid_dates,
            invalid_durations = report.invalid_durations,
            "loaded {} rows",
            report.rows_loaded
        );
        if report.mismatch_count() > 0 {
            warn!(
                mismatched = report.mismatch_count(),
                "Row count mismatch: some rows were padded or skipped"
            );
        }
        if let (Some(first), Some(last)) = (records.first(), records.last()) {
            debug!(?first, "First row");
            debug!(?last, "Last row");
        }

        Ok(LoadedDataset {
            dataset: Dataset::new(records),
            report,
        })
    }
}

/// Header-indexed view over one CSV row
struct RowFields<'a> {
    columns: &'a HashMap<String, usize>,
    row: &'a csv::ByteRecord,
}

impl RowFields<'_> {
    fn get(&self, name: &str) -> String {
        self.columns
            .get(name)
            .and_then(|idx| self.row.get(*idx))
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default()
    }
}

fn parse_record(fields: &RowFields<'_>, report: &mut LoadReport) -> VideoRecord {
    let mut date = |name: &str| {
        let parsed = parse_date(&fields.get(name));
        if parsed.is_none() {
            report.invalid_dates += 1;
        }
        parsed
    };
    let publish_date = date("publish_date");
    let trending_date = date("trending_date");

    VideoRecord {
        category: fields.get("category"),
        category_id: parse_count(&fields.get("category_id")),
        channel_title: fields.get("channel_title"),
        comment_count: parse_count(&fields.get("comment_count")),
        description: fields.get("description"),
        dislikes: parse_count(&fields.get("dislikes")),
        likes: parse_count(&fields.get("likes")),
        publish_date,
        publish_time: parse_time(&fields.get("publish_time")),
        tags: parse_tags(&fields.get("tags")),
        thumbnail_link: fields.get("thumbnail_link"),
        title: fields.get("title"),
        trending_date,
        views: parse_count(&fields.get("views")),
        trend_duration: parse_duration(&fields.get("trend_duration"), report),
        publish_to_trend: parse_signed(&fields.get("publish_to_trend")),
        publish_to_trend_last: parse_signed(&fields.get("publish_to_trend_last")),
    }
}

/// Trending days; values past `MAX_TREND_DURATION` are corrupt and load as `0`
fn parse_duration(raw: &str, report: &mut LoadReport) -> u32 {
    match u32::try_from(parse_count(raw)) {
        Ok(days) if days <= MAX_TREND_DURATION => days,
        _ => {
            report.invalid_durations += 1;
            0
        }
    }
}

/// Parse the stringified list `['a', 'b']` into unique tags.
///
/// Strips two wrapper characters on each side, splits on `', '` and keeps the
/// first occurrence of each tag. Empty input and `[]` give no tags.
///
/// # Examples
///
/// ```
/// use ytboard_core::loader::parse_tags;
///
/// assert_eq!(parse_tags("['funny', 'cat', 'funny']"), vec!["funny", "cat"]);
/// assert!(parse_tags("").is_empty());
/// ```
pub fn parse_tags(raw: &str) -> Vec<String> {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() <= 4 {
        return Vec::new();
    }
    let inner: String = chars[2..chars.len() - 2].iter().collect();

    let mut tags: Vec<String> = Vec::new();
    for tag in inner.split("', '") {
        // "[]" splits into one empty fragment; it is not a tag
        if tag.is_empty() || tags.iter().any(|t| t == tag) {
            continue;
        }
        tags.push(tag.to_string());
    }
    tags
}

/// Non-negative count; anything unparsable is `0`, fractions truncate
pub fn parse_count(raw: &str) -> u64 {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<u64>() {
        return value;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value as u64,
        _ => 0,
    }
}

/// Signed day offset; anything unparsable is `0`
pub fn parse_signed(raw: &str) -> i64 {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return value;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value as i64,
        _ => 0,
    }
}

/// `%Y-%m-%d`, `None` when invalid
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// `%H:%M:%S`, `None` when invalid
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT).ok()
}
