//! Tests for `Interval` construction, shrinking and boundary checks

#[cfg(test)]
mod tests {
    use randsep::algorithm::interval::Interval;

    // Tests empty and inverted ranges are rejected
    // Verified by allowing zero-length intervals
    #[test]
    fn test_new_rejects_non_positive_length() {
        assert!(Interval::new(0.3, 0.3).is_none());
        assert!(Interval::new(0.4, 0.3).is_none());
        assert!(Interval::new(0.3, 0.4).is_some());
    }

    // Tests length is derived from the endpoints
    #[test]
    fn test_length_from_endpoints() {
        let interval = Interval::new(0.25, 0.75);

        assert_eq!(interval.map(|i| i.length()), Some(0.5));
    }

    // Tests shrinking keeps the untouched endpoint exactly
    // Verified by storing start and length instead of endpoints
    #[test]
    fn test_shrinking_start_keeps_end_at_one() {
        let shrunk = Interval::FULL.with_start(0.150_000_000_000_000_02);

        assert!(shrunk.is_some_and(|i| i.touches_one()));
        assert!(shrunk.is_some_and(|i| !i.touches_zero()));
    }

    // Tests shrinking past the opposite endpoint removes the interval
    #[test]
    fn test_shrinking_to_nothing_returns_none() {
        assert!(Interval::FULL.with_start(1.0).is_none());
        assert!(Interval::FULL.with_end(0.0).is_none());
        assert!(Interval::FULL.with_end(0.5).is_some_and(|i| i.touches_zero()));
    }

    // Tests interior points are interpolated across the interval
    #[test]
    fn test_point_at() {
        let interval = Interval::new(0.25, 0.75).unwrap_or(Interval::FULL);

        assert!((interval.point_at(0.0) - 0.25).abs() < f64::EPSILON);
        assert!((interval.point_at(0.5) - 0.5).abs() < f64::EPSILON);
    }

    // Tests a fraction just below 1 never lands on the excluded end
    // Verified by dropping the clamp below `end`
    #[test]
    fn test_point_at_stays_below_end() {
        let largest_fraction = f64::from_bits(1.0_f64.to_bits() - 1);
        for k in 0..2000_u32 {
            let start = f64::from(k) / 4000.0;
            let interval = Interval::new(start, 1.0).unwrap_or(Interval::FULL);

            let point = interval.point_at(largest_fraction);

            assert!(point < 1.0, "[{start}, 1) produced {point}");
            assert!(point >= start);
        }
    }

    // Tests display renders both endpoints
    #[test]
    fn test_display() {
        assert_eq!(Interval::FULL.to_string(), "(0.000, 1.000)");
    }
}
