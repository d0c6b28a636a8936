//! Tests for driver defaults

#[cfg(test)]
mod tests {
    use randsep::io::configuration::{
        DEFAULT_DRAW_COUNT, DEFAULT_RUNS, DEFAULT_SEED, DEFAULT_SEP, DISPLAY_PRECISION, MAX_SEP,
        MIN_RUNS_FOR_PROGRESS,
    };

    // Tests the default separation is valid for the driver
    // Verified by raising the default to the bound
    #[test]
    fn test_default_sep_within_bounds() {
        assert!((0.0..MAX_SEP).contains(&DEFAULT_SEP));
    }

    // Tests default counts
    #[test]
    fn test_default_counts() {
        assert_eq!(DEFAULT_DRAW_COUNT, 8);
        assert_eq!(DEFAULT_RUNS, 1);
        assert!(MIN_RUNS_FOR_PROGRESS > DEFAULT_RUNS);
    }

    // Tests default seed is fixed
    #[test]
    fn test_default_seed_is_reproducible() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests output precision
    #[test]
    fn test_display_precision() {
        assert_eq!(DISPLAY_PRECISION, 3);
    }
}
