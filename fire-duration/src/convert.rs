use crate::{ConversionError, Duration};

use std::time::Duration as StdDuration;

use chrono::TimeDelta;

/// One nanosecond, the smallest difference between two durations.
///
/// Use it as tolerance when comparing durations which went through a
/// floating point number.
pub const TOLERANCE: Duration = Duration::NANOSECOND;

/// Converts a floating point number of seconds into a duration, truncating
/// any fractional nanosecond.
pub fn seconds_to_duration(secs: f64) -> Duration {
	Duration::from_nanos_f64(secs * 1e9)
}

/// Returns the duration as a floating point number of seconds.
pub fn duration_to_seconds(dur: Duration) -> f64 {
	dur.seconds()
}

impl TryFrom<StdDuration> for Duration {
	type Error = ConversionError;

	fn try_from(d: StdDuration) -> Result<Self, Self::Error> {
		i64::try_from(d.as_nanos())
			.map(Duration::from_nanos)
			.map_err(|_| ConversionError::Overflow)
	}
}

impl TryFrom<Duration> for StdDuration {
	type Error = ConversionError;

	fn try_from(d: Duration) -> Result<Self, Self::Error> {
		u64::try_from(d.as_nanos())
			.map(StdDuration::from_nanos)
			.map_err(|_| ConversionError::Negative)
	}
}

impl From<Duration> for TimeDelta {
	fn from(d: Duration) -> Self {
		TimeDelta::nanoseconds(d.as_nanos())
	}
}

impl TryFrom<TimeDelta> for Duration {
	type Error = ConversionError;

	fn try_from(d: TimeDelta) -> Result<Self, Self::Error> {
		d.num_nanoseconds()
			.map(Duration::from_nanos)
			.ok_or(ConversionError::Overflow)
	}
}
