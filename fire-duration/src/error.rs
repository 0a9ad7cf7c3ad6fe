use thiserror::Error;

/// Returned when a [`Duration`](crate::Duration) can't be represented by
/// another duration type, or the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
	#[error("negative durations cannot be converted")]
	Negative,
	#[error("duration does not fit into 64-bit nanoseconds")]
	Overflow,
}
