//! Distances on the unit circle, where 0 and 1 are the same point

/// Shortest distance between two points of `[0, 1)` going either way round
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let direct = (a - b).abs();
    direct.min(1.0 - direct)
}

/// Smallest gap between neighbouring values once sorted round the circle
///
/// Includes the wraparound gap from the largest value back to the smallest.
/// Returns `None` with fewer than two values, where no gap exists.
pub fn min_circular_gap(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let (Some(&first), Some(&last)) = (sorted.first(), sorted.last()) else {
        return None;
    };
    let wrap_gap = first + 1.0 - last;

    let smallest = sorted
        .windows(2)
        .filter_map(|pair| match pair {
            [a, b] => Some(b - a),
            _ => None,
        })
        .fold(wrap_gap, f64::min);
    Some(smallest)
}
