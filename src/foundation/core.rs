use std::time::Duration;

use crate::foundation::error::{BcrError, BcrResult};
use crate::foundation::number::parse_int;

/// Playback speed in frames per second, limited to `[Fps::MIN, Fps::MAX]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Fps(u32);

impl Fps {
    /// Slowest accepted rate.
    pub const MIN: u32 = 1;
    /// Fastest accepted rate.
    pub const MAX: u32 = 24;
    /// Rate used when none (or an invalid one) is given.
    pub const DEFAULT: u32 = 24;

    /// Validate `fps` against the accepted range.
    pub fn new(fps: u32) -> BcrResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&fps) {
            return Err(BcrError::validation(format!(
                "fps must be in [{}, {}], got {fps}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(fps))
    }

    /// Read a command-line value, substituting the default (with a warning) when it is unusable.
    pub fn from_arg(raw: &str) -> Self {
        match parse_int(raw) {
            Ok(v) if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&v) => Self(v as u32),
            Ok(v) => {
                tracing::warn!(
                    value = v,
                    "fps must be in [{}, {}]; using {} instead",
                    Self::MIN,
                    Self::MAX,
                    Self::DEFAULT
                );
                Self::default()
            }
            Err(e) => {
                tracing::warn!(value = raw, "invalid fps ({e}); using {} instead", Self::DEFAULT);
                Self::default()
            }
        }
    }

    /// Raw frames-per-second value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Minimum pause between two frames (`1000 / fps` milliseconds).
    pub fn frame_interval(self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.0))
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Upper bound on how many bars a single chart shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BarLimit(usize);

impl BarLimit {
    /// Smallest accepted limit.
    pub const MIN: usize = 1;
    /// Largest accepted limit.
    pub const MAX: usize = 15;
    /// Limit used when none (or an invalid one) is given.
    pub const DEFAULT: usize = 5;

    /// Validate `n` against the accepted range.
    pub fn new(n: usize) -> BcrResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&n) {
            return Err(BcrError::validation(format!(
                "bar limit must be in [{}, {}], got {n}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(n))
    }

    /// Read a command-line value, substituting the default (with a warning) when it is unusable.
    pub fn from_arg(raw: &str) -> Self {
        match parse_int(raw) {
            Ok(v) if (Self::MIN as i64..=Self::MAX as i64).contains(&v) => Self(v as usize),
            Ok(v) => {
                tracing::warn!(
                    value = v,
                    "number of bars must be in [{}, {}]; using {} instead",
                    Self::MIN,
                    Self::MAX,
                    Self::DEFAULT
                );
                Self::default()
            }
            Err(e) => {
                tracing::warn!(
                    value = raw,
                    "invalid number of bars ({e}); using {} instead",
                    Self::DEFAULT
                );
                Self::default()
            }
        }
    }

    /// Raw limit value.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BarLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Character geometry of a rendered chart.
///
/// Bar lengths and the x-axis share one scale: column `c` on the axis stands for
/// `c * max_value / axis_length`, and the longest bar spans `bar_length_max` columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ChartLayout {
    /// Length in characters of the bar holding the frame's maximum value.
    pub bar_length_max: usize,
    /// Number of columns of the x-axis line (excluding the `>` tip).
    pub axis_length: usize,
    /// Requested number of tick intervals on the x-axis.
    pub n_ticks: usize,
}

impl ChartLayout {
    /// Reject geometries the axis and bar scaling cannot work with.
    pub fn validate(&self) -> BcrResult<()> {
        if self.bar_length_max == 0 || self.axis_length == 0 || self.n_ticks == 0 {
            return Err(BcrError::validation(
                "chart layout values must all be non-zero",
            ));
        }
        if self.bar_length_max > self.axis_length {
            return Err(BcrError::validation(format!(
                "bar_length_max ({}) must not exceed axis_length ({})",
                self.bar_length_max, self.axis_length
            )));
        }
        Ok(())
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            bar_length_max: 60,
            axis_length: 60,
            n_ticks: 5,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
