use tracing::warn;

/// Number of gain levels: 95.00, 95.05, ..., 100.00.
pub const GAIN_LEVELS: usize = 101;
pub const GAIN_START: f64 = 95.0;
pub const GAIN_STEP: f64 = 0.05;

/// Iteration count recorded for a gain level the path never reaches.
pub const SENTINEL_ITERATIONS: usize = 1500;

/// First iteration index at which each gain level is reached.
pub type IterationCurve = [usize; GAIN_LEVELS];

/// Gain percentage of level `i`.
#[inline]
pub fn gain_level(i: usize) -> f64 {
    GAIN_START + GAIN_STEP * i as f64
}

/// x axis of every curve: the 101 gain percentages.
pub fn gain_axis() -> Vec<f64> {
    (0..GAIN_LEVELS).map(gain_level).collect()
}

/// Scans the normalised scores of one path once, level by level.
///
/// The cursor carries over from one level to the next. Once it runs past the
/// end of the path every remaining level gets [`SENTINEL_ITERATIONS`].
pub fn iterations_to_reach(normalized: &[f64]) -> IterationCurve {
    let mut curve = [SENTINEL_ITERATIONS; GAIN_LEVELS];
    let mut cursor = 0usize;
    for (i, slot) in curve.iter_mut().enumerate() {
        let level = gain_level(i);
        while cursor < normalized.len() && normalized[cursor] < level {
            cursor += 1;
        }
        if cursor == normalized.len() {
            warn!(
                gain = level,
                iterations = normalized.len(),
                "experiment is too short to reach gain level"
            );
            break;
        }
        *slot = cursor;
    }
    curve
}
