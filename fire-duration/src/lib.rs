//! Hour, Minute, Second and Nanosecond values which convert into each other
//! through a signed nanosecond [`Duration`].
//!
//! ## Example
//! ```
//! use fire_duration::{Span, Minute, Nanosecond};
//!
//! let m = Minute(60.0);
//! assert_eq!(m.hours(), 1.0);
//! assert_eq!(m.seconds(), 3600.0);
//!
//! let day = Nanosecond(86_400_000_000_000);
//! assert_eq!(day.to_string(), "24h0m0s");
//! ```
#![allow(clippy::tabs_in_doc_comments)]

pub mod duration;
pub use duration::Duration;

pub mod span;
pub use span::Span;

pub mod units;
pub use units::{Hour, Minute, Nanosecond, Second};

pub mod convert;
pub use convert::{duration_to_seconds, seconds_to_duration, TOLERANCE};

pub mod error;
pub use error::ConversionError;
