use crate::Duration;

use std::fmt;

/// A span of time which can be read in any unit.
///
/// Implemented by [`Duration`] and by every unit type. The `Display`
/// implementation renders the span like "72h3m0.5s", see [`Duration`].
///
/// Unit types are expected to implement this with `#[derive(Span)]`.
pub trait Span: fmt::Display {
	/// Converts the span into a nanosecond duration, truncating any
	/// fractional nanosecond.
	fn to_duration(&self) -> Duration;

	/// Returns the span as a floating point number of hours.
	fn hours(&self) -> f64;

	/// Returns the span as a floating point number of minutes.
	fn minutes(&self) -> f64;

	/// Returns the span as a floating point number of seconds.
	fn seconds(&self) -> f64;

	/// Returns the span as an integer nanosecond count.
	fn nanoseconds(&self) -> i64;
}

pub use fire_duration_derive::Span;

impl Span for Duration {
	fn to_duration(&self) -> Duration {
		*self
	}

	fn hours(&self) -> f64 {
		Duration::hours(self)
	}

	fn minutes(&self) -> f64 {
		Duration::minutes(self)
	}

	fn seconds(&self) -> f64 {
		Duration::seconds(self)
	}

	fn nanoseconds(&self) -> i64 {
		self.as_nanos()
	}
}

impl<T: Span + ?Sized> Span for &T {
	fn to_duration(&self) -> Duration {
		(**self).to_duration()
	}

	fn hours(&self) -> f64 {
		(**self).hours()
	}

	fn minutes(&self) -> f64 {
		(**self).minutes()
	}

	fn seconds(&self) -> f64 {
		(**self).seconds()
	}

	fn nanoseconds(&self) -> i64 {
		(**self).nanoseconds()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Hour, Minute, Nanosecond, Second};

	fn seconds_of(span: &dyn Span) -> f64 {
		span.seconds()
	}

	#[test]
	fn dyn_spans() {
		let spans: [(Box<dyn Span>, f64); 7] = [
			(Box::new(Hour(1.0)), 3600.0),
			(Box::new(Second(1.0)), 1.0),
			(Box::new(Second(0.2)), 0.2),
			(Box::new(Minute(60.0)), 3600.0),
			(Box::new(Nanosecond(1_500_000_000)), 1.5),
			(Box::new(Duration::SECOND), 1.0),
			(Box::new(Duration::from_nanos(200_000_000)), 0.2),
		];

		for (span, expected) in spans.iter() {
			assert_eq!(seconds_of(span.as_ref()), *expected, "{span}");
		}
	}

	#[test]
	fn span_by_reference() {
		fn hours<S: Span>(s: S) -> f64 {
			s.hours()
		}

		let m = Minute(90.0);
		assert_eq!(hours(&m), 1.5);
		assert_eq!(hours(&&m), 1.5);
	}
}
