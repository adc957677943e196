//! Presentation values derived from timer state: the clock label and the
//! clamped stroke fraction handed to the render sink.

/// Formats whole seconds as zero-padded `MM:SS`.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Portion of the ring drawn as progress. Always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct StrokeFraction(f64);

impl StrokeFraction {
    pub const EMPTY: Self = Self(0.0);
    pub const FULL: Self = Self(1.0);

    /// Clamps out-of-range input instead of rejecting it. NaN maps to empty.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::EMPTY;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn ratio(done: u64, total: u64) -> Self {
        if total == 0 {
            return Self::EMPTY;
        }
        Self::new(done as f64 / total as f64)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(5), "00:05");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(125), "02:05");
        assert_eq!(format_clock(99 * 60 + 59), "99:59");
    }

    #[test]
    fn test_remaining_label_from_elapsed() {
        let active = 125;
        assert_eq!(format_clock(active - 65), "01:00");
        assert_eq!(format_clock(active), "02:05");
    }

    #[test]
    fn test_fraction_clamps() {
        assert_eq!(StrokeFraction::new(1.3).get(), 1.0);
        assert_eq!(StrokeFraction::new(-0.2).get(), 0.0);
        assert_eq!(StrokeFraction::new(f64::NAN).get(), 0.0);
        assert_eq!(StrokeFraction::new(0.25).get(), 0.25);
    }

    #[test]
    fn test_fraction_ratio() {
        assert_eq!(StrokeFraction::ratio(5, 10).get(), 0.5);
        assert_eq!(StrokeFraction::ratio(12, 10), StrokeFraction::FULL);
        assert_eq!(StrokeFraction::ratio(3, 0), StrokeFraction::EMPTY);
    }
}
