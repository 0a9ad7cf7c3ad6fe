use fire_duration::{
	duration_to_seconds, seconds_to_duration, Duration, Hour, Minute,
	Nanosecond, Second, Span, TOLERANCE,
};

const DURATIONS: [i64; 8] = [
	0,
	1,
	999,
	200_000_000,
	1_234_567_890_123,
	-3_723_500_000_001,
	86_400_000_000_000,
	98_765_432_109_876,
];

const SECONDS: [f64; 7] = [0.0, 0.1, 0.2, 1.0, -2.75, 1234.567_890_123_4, 1e-9];

fn within(a: Duration, b: Duration) -> bool {
	(a - b).abs() <= TOLERANCE
}

#[test]
fn second_round_trip_is_exact() {
	for x in SECONDS.iter().copied().chain([1e-12, 1e300, f64::MIN_POSITIVE]) {
		assert_eq!(Second(x).seconds(), x);
	}
}

#[test]
fn units_agree_on_the_duration() {
	for nanos in DURATIONS {
		let d = Duration::from_nanos(nanos);

		let h = Hour(d.hours()).to_duration();
		let m = Minute(d.minutes()).to_duration();
		let s = Second(d.seconds()).to_duration();
		let ns = Nanosecond(d.as_nanos()).to_duration();

		assert!(within(h, m), "{d}: {h} != {m}");
		assert!(within(m, s), "{d}: {m} != {s}");
		assert!(within(s, d), "{d}: {s} != {d}");
		assert_eq!(ns, d);
	}
}

#[test]
fn duration_through_seconds() {
	for nanos in DURATIONS {
		let d = Duration::from_nanos(nanos);
		let back = seconds_to_duration(duration_to_seconds(d));
		assert!(within(back, d), "{d} came back as {back}");
	}
}

#[test]
fn seconds_through_duration() {
	for s in SECONDS {
		let back = duration_to_seconds(seconds_to_duration(s));
		assert!((back - s).abs() <= 1e-9, "{s} came back as {back}");
	}
}

#[test]
fn second_matches_free_function() {
	assert_eq!(Second(0.2).to_duration(), seconds_to_duration(0.2));
	assert_eq!(Second(0.2).to_duration(), Duration::from_nanos(200_000_000));
}

#[test]
fn day_in_every_unit() {
	let day = Nanosecond(86_400_000_000_000);
	assert_eq!(day.hours(), 24.0);
	assert_eq!(day.to_string(), "24h0m0s");

	assert_eq!(Hour(24.0).to_string(), "24h0m0s");
	assert_eq!(Minute(1440.0).to_string(), "24h0m0s");
	assert_eq!(Second(86400.0).to_string(), "24h0m0s");
}

#[test]
fn minute_in_other_units() {
	let m = Minute(60.0);
	assert_eq!(m.hours(), 1.0);
	assert_eq!(m.seconds(), 3600.0);
	assert_eq!(m.nanoseconds(), 3_600_000_000_000);
}

#[test]
fn rendering() {
	let cases: [(&dyn Span, &str); 8] = [
		(&Hour(0.0), "0"),
		(&Second(0.0), "0"),
		(&Second(0.2), "200ms"),
		(&Second(1.5), "1.5s"),
		(&Minute(1.5), "1m30s"),
		(&Hour(-1.25), "-1h15m0s"),
		(&Nanosecond(1_500), "1.5µs"),
		(&Duration::from_nanos(3_723_000_000_001), "1h2m3.000000001s"),
	];

	for (span, expected) in cases {
		assert_eq!(span.to_string(), expected);
	}
}
