mod format;

use std::fmt;
use std::ops::{Add, Neg, Sub};

const NANOS_PER_MICRO: i64 = 1_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_SEC: i64 = 1_000_000_000;
const NANOS_PER_MIN: i64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MIN;

/// A signed span of time stored as a count of nanoseconds.
///
/// Every unit type converts through this value. The largest representable
/// duration is roughly 292 years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(transparent)
)]
pub struct Duration(i64);

impl Duration {
	pub const ZERO: Self = Self(0);
	pub const NANOSECOND: Self = Self(1);
	pub const MICROSECOND: Self = Self(NANOS_PER_MICRO);
	pub const MILLISECOND: Self = Self(NANOS_PER_MILLI);
	pub const SECOND: Self = Self(NANOS_PER_SEC);
	pub const MINUTE: Self = Self(NANOS_PER_MIN);
	pub const HOUR: Self = Self(NANOS_PER_HOUR);
	pub const MIN: Self = Self(i64::MIN);
	pub const MAX: Self = Self(i64::MAX);

	pub const fn from_nanos(nanos: i64) -> Self {
		Self(nanos)
	}

	/// Truncates the fractional part of `nanos`.
	///
	/// Values which don't fit into an i64 saturate, NaN becomes zero.
	pub fn from_nanos_f64(nanos: f64) -> Self {
		// i64::MIN as f64 is exactly -2^63, i64::MAX as f64 rounds up to 2^63
		if nanos.is_nan() || nanos >= i64::MAX as f64 || nanos < i64::MIN as f64
		{
			tracing::debug!(
				nanos,
				"nanosecond count not representable, saturating"
			);
		}

		Self(nanos as i64)
	}

	pub const fn as_nanos(&self) -> i64 {
		self.0
	}

	pub const fn as_micros(&self) -> i64 {
		self.0 / NANOS_PER_MICRO
	}

	pub const fn as_millis(&self) -> i64 {
		self.0 / NANOS_PER_MILLI
	}

	/// Returns the duration as a floating point number of hours.
	pub fn hours(&self) -> f64 {
		split_f64(self.0, NANOS_PER_HOUR)
	}

	/// Returns the duration as a floating point number of minutes.
	pub fn minutes(&self) -> f64 {
		split_f64(self.0, NANOS_PER_MIN)
	}

	/// Returns the duration as a floating point number of seconds.
	pub fn seconds(&self) -> f64 {
		split_f64(self.0, NANOS_PER_SEC)
	}

	pub const fn is_zero(&self) -> bool {
		self.0 == 0
	}

	pub const fn is_negative(&self) -> bool {
		self.0 < 0
	}

	/// The absolute value, `Duration::MIN` saturates to `Duration::MAX`.
	pub const fn abs(&self) -> Self {
		Self(self.0.saturating_abs())
	}

	/// Rounds toward zero to a multiple of `m`.
	///
	/// If `m` is zero or negative the duration is returned unchanged.
	pub const fn truncate(&self, m: Self) -> Self {
		if m.0 <= 0 {
			return *self;
		}

		Self(self.0 - self.0 % m.0)
	}

	/// Rounds to the nearest multiple of `m`, halfway values round away from
	/// zero.
	///
	/// If `m` is zero or negative the duration is returned unchanged. A
	/// result which would overflow saturates to `MIN` or `MAX`.
	pub const fn round(&self, m: Self) -> Self {
		if m.0 <= 0 {
			return *self;
		}

		let d = self.0;
		let m = m.0;
		let r = d % m;

		if d < 0 {
			let r = -r;
			if less_than_half(r, m) {
				return Self(d + r);
			}

			return match d.checked_sub(m - r) {
				Some(v) => Self(v),
				None => Self::MIN,
			};
		}

		if less_than_half(r, m) {
			return Self(d - r);
		}

		match d.checked_add(m - r) {
			Some(v) => Self(v),
			None => Self::MAX,
		}
	}

	pub const fn checked_add(&self, rhs: Self) -> Option<Self> {
		match self.0.checked_add(rhs.0) {
			Some(n) => Some(Self(n)),
			None => None,
		}
	}

	pub const fn checked_sub(&self, rhs: Self) -> Option<Self> {
		match self.0.checked_sub(rhs.0) {
			Some(n) => Some(Self(n)),
			None => None,
		}
	}
}

// x and y are both non negative and x < y
const fn less_than_half(x: i64, y: i64) -> bool {
	(x as u64) + (x as u64) < y as u64
}

/// Divides into whole units and a remainder first so large counts keep
/// nanosecond precision in the fraction.
fn split_f64(nanos: i64, unit: i64) -> f64 {
	let whole = nanos / unit;
	let rest = nanos % unit;

	whole as f64 + rest as f64 / unit as f64
}

/// Wraps on overflow.
impl Add for Duration {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self(self.0.wrapping_add(rhs.0))
	}
}

/// Wraps on overflow.
impl Sub for Duration {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		Self(self.0.wrapping_sub(rhs.0))
	}
}

impl Neg for Duration {
	type Output = Self;

	fn neg(self) -> Self {
		Self(self.0.wrapping_neg())
	}
}

/// Formats the duration in the form "72h3m0.5s".
///
/// Leading zero units are omitted. Durations below one second use a smaller
/// unit (ms, µs or ns) so that the leading digit is non-zero. The zero
/// duration formats as `0`, without unit.
impl fmt::Display for Duration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut buf = [0u8; format::BUF_LEN];
		let w = format::format_nanos(self.0, &mut buf);
		let s = std::str::from_utf8(&buf[w..]).map_err(|_| fmt::Error)?;

		f.pad(s)
	}
}
