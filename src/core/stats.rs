use crate::core::gain::{GAIN_LEVELS, IterationCurve};

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// `q`-th percentile (0..=100) with linear interpolation between closest
/// ranks, i.e. rank `(n - 1) * q / 100` of the sorted values.
pub fn percentile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    percentile_sorted(&sorted, q)
}

fn percentile_sorted(sorted: &[f64], q: f64) -> f64 {
    let rank = (sorted.len() - 1) as f64 * q.clamp(0.0, 100.0) / 100.0;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

pub fn median(values: &[f64]) -> f64 {
    percentile(values, 50.0)
}

/// Column-wise summary of per-experiment curves. Row order on disk is
/// mean, q1, median, q3.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateCurves {
    pub mean: Vec<f64>,
    pub q1: Vec<f64>,
    pub median: Vec<f64>,
    pub q3: Vec<f64>,
}

impl AggregateCurves {
    pub const ROWS: usize = 4;

    pub fn from_curves(curves: &[IterationCurve]) -> Self {
        let mut out = Self {
            mean: Vec::with_capacity(GAIN_LEVELS),
            q1: Vec::with_capacity(GAIN_LEVELS),
            median: Vec::with_capacity(GAIN_LEVELS),
            q3: Vec::with_capacity(GAIN_LEVELS),
        };
        let mut column = Vec::with_capacity(curves.len());
        for level in 0..GAIN_LEVELS {
            column.clear();
            column.extend(curves.iter().map(|c| c[level] as f64));
            out.mean.push(mean(&column));
            column.sort_by(f64::total_cmp);
            if column.is_empty() {
                out.q1.push(f64::NAN);
                out.median.push(f64::NAN);
                out.q3.push(f64::NAN);
            } else {
                out.q1.push(percentile_sorted(&column, 25.0));
                out.median.push(percentile_sorted(&column, 50.0));
                out.q3.push(percentile_sorted(&column, 75.0));
            }
        }
        out
    }

    pub fn rows(&self) -> [&[f64]; Self::ROWS] {
        [&self.mean, &self.q1, &self.median, &self.q3]
    }

    /// Rebuilds from the four stored rows; `None` unless the shape is 4x101.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        if rows.len() != Self::ROWS || rows.iter().any(|r| r.len() != GAIN_LEVELS) {
            return None;
        }
        let mut it = rows.into_iter();
        Some(Self {
            mean: it.next()?,
            q1: it.next()?,
            median: it.next()?,
            q3: it.next()?,
        })
    }
}
