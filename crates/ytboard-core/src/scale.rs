//! Linear mapping between range-slider positions and trending dates

use chrono::{Duration, NaiveDateTime};
use ytboard_types::DateRange;

/// Maps slider positions `[0, resolution]` onto the dataset extent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderScale {
    extent: DateRange,
    resolution: u32,
}

impl SliderScale {
    /// `resolution` of 0 is treated as 1
    pub fn new(extent: DateRange, resolution: u32) -> Self {
        Self {
            extent,
            resolution: resolution.max(1),
        }
    }

    pub fn extent(&self) -> DateRange {
        self.extent
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Date-time at a slider position (clamped to the slider)
    pub fn invert(&self, position: f64) -> NaiveDateTime {
        let max = self.resolution as f64;
        let position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, max)
        };
        let span_ms = (self.extent.end - self.extent.start).num_milliseconds() as f64;
        let offset = Duration::milliseconds((span_ms * position / max).round() as i64);
        self.extent.start + offset
    }

    /// Slider position of a date-time (inverse of `invert`)
    pub fn position(&self, at: NaiveDateTime) -> f64 {
        let span_ms = (self.extent.end - self.extent.start).num_milliseconds() as f64;
        if span_ms == 0.0 {
            return 0.0;
        }
        let offset_ms = (at - self.extent.start).num_milliseconds() as f64;
        (offset_ms / span_ms * self.resolution as f64).clamp(0.0, self.resolution as f64)
    }

    /// Date range selected by the two slider handles
    pub fn range(&self, begin: f64, end: f64) -> DateRange {
        DateRange::new(self.invert(begin), self.invert(end))
    }
}

/// Label shown next to the slider, e.g. `01/05/18 - 03/30/18`
pub fn format_range_label(range: &DateRange) -> String {
    format!(
        "{} - {}",
        range.start.format("%m/%d/%y"),
        range.end.format("%m/%d/%y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn scale() -> SliderScale {
        let extent = DateRange::from_dates(
            NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2018, 1, 11).unwrap(),
        );
        SliderScale::new(extent, 1000)
    }

    #[test]
    fn test_invert_endpoints_and_midpoint() {
        let scale = scale();
        assert_eq!(scale.invert(0.0), scale.extent().start);
        assert_eq!(scale.invert(1000.0), scale.extent().end);
        assert_eq!(
            scale.invert(500.0),
            NaiveDate::from_ymd_opt(2018, 1, 6)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_invert_clamps() {
        let scale = scale();
        assert_eq!(scale.invert(-20.0), scale.extent().start);
        assert_eq!(scale.invert(5000.0), scale.extent().end);
        assert_eq!(scale.invert(f64::NAN), scale.extent().start);
    }

    #[test]
    fn test_position_round_trip() {
        let scale = scale();
        let at = scale.invert(250.0);
        assert!((scale.position(at) - 250.0).abs() < 1e-6);
    }

    #[test]
    fn test_range_orders_handles() {
        let scale = scale();
        let range = scale.range(800.0, 200.0);
        assert!(range.start < range.end);
        assert_eq!(format_range_label(&range), "01/03/18 - 01/09/18");
    }

    #[test]
    fn test_degenerate_extent() {
        let day = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        let scale = SliderScale::new(DateRange::from_dates(day, day), 0);
        assert_eq!(scale.resolution(), 1);
        assert_eq!(scale.invert(1.0), scale.extent().start);
        assert_eq!(scale.position(scale.extent().start), 0.0);
    }
}
