//! Renders a nanosecond count right to left into a fixed buffer.

/// Enough for the longest output, `-2562047h47m16.854775808s`.
pub(super) const BUF_LEN: usize = 32;

const MICRO: u64 = 1_000;
const MILLI: u64 = 1_000_000;
const SECOND: u64 = 1_000_000_000;

/// Writes `nanos` into the end of `buf` and returns the index where the
/// output starts.
pub(super) fn format_nanos(nanos: i64, buf: &mut [u8; BUF_LEN]) -> usize {
	let mut w = buf.len();
	let neg = nanos < 0;
	let mut u = nanos.unsigned_abs();

	if u == 0 {
		w -= 1;
		buf[w] = b'0';
		return w;
	}

	if u < SECOND {
		// sub second values use a smaller unit so the leading digit is
		// non-zero
		w -= 1;
		buf[w] = b's';

		let prec = if u < MICRO {
			w -= 1;
			buf[w] = b'n';
			0
		} else if u < MILLI {
			let micro = "µ".as_bytes();
			w -= micro.len();
			buf[w..w + micro.len()].copy_from_slice(micro);
			3
		} else {
			w -= 1;
			buf[w] = b'm';
			6
		};

		(w, u) = format_frac(&mut buf[..w], u, prec);
		w = format_int(&mut buf[..w], u);
	} else {
		w -= 1;
		buf[w] = b's';

		(w, u) = format_frac(&mut buf[..w], u, 9);

		// u is now whole seconds
		w = format_int(&mut buf[..w], u % 60);
		u /= 60;

		if u > 0 {
			w -= 1;
			buf[w] = b'm';
			w = format_int(&mut buf[..w], u % 60);
			u /= 60;

			if u > 0 {
				w -= 1;
				buf[w] = b'h';
				w = format_int(&mut buf[..w], u);
			}
		}
	}

	if neg {
		w -= 1;
		buf[w] = b'-';
	}

	w
}

/// Writes the `prec` lowest digits of `v` as a fraction into the end of
/// `buf`, omitting trailing zeros, and the dot if the fraction is zero.
///
/// Returns the index where the output starts and `v` divided by 10^prec.
fn format_frac(buf: &mut [u8], mut v: u64, prec: usize) -> (usize, u64) {
	let mut w = buf.len();
	let mut print = false;

	for _ in 0..prec {
		let digit = (v % 10) as u8;
		print = print || digit != 0;
		if print {
			w -= 1;
			buf[w] = digit + b'0';
		}
		v /= 10;
	}

	if print {
		w -= 1;
		buf[w] = b'.';
	}

	(w, v)
}

/// Writes `v` into the end of `buf` and returns the index where the output
/// starts.
fn format_int(buf: &mut [u8], mut v: u64) -> usize {
	let mut w = buf.len();

	if v == 0 {
		w -= 1;
		buf[w] = b'0';
		return w;
	}

	while v > 0 {
		w -= 1;
		buf[w] = (v % 10) as u8 + b'0';
		v /= 10;
	}

	w
}

#[cfg(test)]
mod tests {
	use super::*;

	fn format(nanos: i64) -> String {
		let mut buf = [0u8; BUF_LEN];
		let w = format_nanos(nanos, &mut buf);
		String::from_utf8(buf[w..].to_vec()).unwrap()
	}

	#[test]
	fn zero_has_no_unit() {
		assert_eq!(format(0), "0");
	}

	#[test]
	fn sub_second() {
		assert_eq!(format(1), "1ns");
		assert_eq!(format(999), "999ns");
		assert_eq!(format(1_000), "1µs");
		assert_eq!(format(1_100), "1.1µs");
		assert_eq!(format(2_200_000), "2.2ms");
		assert_eq!(format(200_000_000), "200ms");
		assert_eq!(format(999_999_999), "999.999999ms");
	}

	#[test]
	fn above_second() {
		assert_eq!(format(1_000_000_000), "1s");
		assert_eq!(format(1_500_000_000), "1.5s");
		assert_eq!(format(60_000_000_000), "1m0s");
		assert_eq!(format(61_000_000_001), "1m1.000000001s");
		assert_eq!(format(3_600_000_000_000), "1h0m0s");
		assert_eq!(format(3_723_500_000_000), "1h2m3.5s");
		assert_eq!(format(86_400_000_000_000), "24h0m0s");
	}

	#[test]
	fn negative() {
		assert_eq!(format(-1), "-1ns");
		assert_eq!(format(-1_100), "-1.1µs");
		assert_eq!(format(-90_000_000_000), "-1m30s");
	}

	#[test]
	fn extremes() {
		assert_eq!(format(i64::MAX), "2562047h47m16.854775807s");
		assert_eq!(format(i64::MIN), "-2562047h47m16.854775808s");
	}
}
