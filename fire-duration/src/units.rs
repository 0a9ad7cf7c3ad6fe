//! Spans of time stored in a fixed unit.
//!
//! Float based units truncate to whole nanoseconds whenever they convert
//! through [`Duration`](crate::Duration), reading a value in its own unit
//! returns the stored number unchanged.

use crate::Span;

/// Hours as a floating point number.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Span)]
#[span(unit = "hours", nanos = 3_600_000_000_000)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(transparent)
)]
pub struct Hour(pub f64);

/// Minutes as a floating point number.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Span)]
#[span(unit = "minutes", nanos = 60_000_000_000)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(transparent)
)]
pub struct Minute(pub f64);

/// Seconds as a floating point number.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Span)]
#[span(unit = "seconds", nanos = 1_000_000_000)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(transparent)
)]
pub struct Second(pub f64);

/// Nanoseconds as a 64-bit integer.
///
/// This is the only lossless unit, converting it never goes through a
/// floating point number.
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Span,
)]
#[span(unit = "nanoseconds", nanos = 1)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(transparent)
)]
pub struct Nanosecond(pub i64);

impl Hour {
	pub const fn new(hours: f64) -> Self {
		Self(hours)
	}

	pub const fn get(&self) -> f64 {
		self.0
	}
}

impl Minute {
	pub const fn new(minutes: f64) -> Self {
		Self(minutes)
	}

	pub const fn get(&self) -> f64 {
		self.0
	}
}

impl Second {
	pub const fn new(seconds: f64) -> Self {
		Self(seconds)
	}

	pub const fn get(&self) -> f64 {
		self.0
	}
}

impl Nanosecond {
	pub const fn new(nanos: i64) -> Self {
		Self(nanos)
	}

	pub const fn get(&self) -> i64 {
		self.0
	}
}
