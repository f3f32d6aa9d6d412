//! Iterations needed to reach each gain level, aggregated over a range of
//! experiments and cached next to the experiment results.
use tracing::{debug, info};

use crate::core::cache;
use crate::core::gain::{self, IterationCurve};
use crate::core::layout::{ScoringKey, TestLayout};
use crate::core::matrix;
use crate::core::scoring::ScoringTable;
use crate::core::stats::AggregateCurves;
use crate::error::{Error, Result};

/// Returns the mean / q1 / median / q3 iterations needed for experiments
/// `first_exp..=last_exp`, reading the cache when it exists and writing it
/// otherwise.
pub fn iterations_needed(
    layout: &TestLayout,
    first_exp: u32,
    last_exp: u32,
    key: ScoringKey,
) -> Result<AggregateCurves> {
    let cache_path = layout.cache_path(first_exp, last_exp, key);
    if let Some(cached) = cache::load(&cache_path)? {
        return Ok(cached);
    }

    let curves = experiment_curves(layout, first_exp, last_exp, key)?;
    let agg = AggregateCurves::from_curves(&curves);
    cache::store(&cache_path, &agg)?;
    Ok(agg)
}

/// Per-experiment curves, computed from scratch.
pub fn experiment_curves(
    layout: &TestLayout,
    first_exp: u32,
    last_exp: u32,
    key: ScoringKey,
) -> Result<Vec<IterationCurve>> {
    if first_exp > last_exp {
        return Err(Error::EmptyRange {
            first: first_exp,
            last: last_exp,
        });
    }

    let table = ScoringTable::load(layout, key)?;
    info!(
        test = %layout.root().display(),
        entries = table.len(),
        min = table.min(),
        max = table.max(),
        "computing iterations needed for exp{first_exp}..=exp{last_exp}"
    );

    (first_exp..=last_exp)
        .map(|n_exp| experiment_curve(layout, &table, n_exp))
        .collect()
}

fn experiment_curve(layout: &TestLayout, table: &ScoringTable, n_exp: u32) -> Result<IterationCurve> {
    let path_file = layout.param_path(n_exp);
    let points = matrix::read_rows(&path_file)?;
    let normalized = table.normalized_path(&path_file, &points)?;
    let curve = gain::iterations_to_reach(&normalized);
    debug!(
        exp = n_exp,
        iterations = points.len(),
        at_95 = curve[0],
        at_100 = curve[gain::GAIN_LEVELS - 1],
        "experiment curve"
    );
    Ok(curve)
}
