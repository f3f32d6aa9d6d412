use std::fs;
use std::path::Path;

use tracing::info;

use crate::core::matrix;
use crate::core::stats::AggregateCurves;
use crate::error::{Error, Result};

/// Loads a cached aggregate if `path` exists. The file is trusted as is; it
/// is never compared against the inputs it was computed from.
pub fn load(path: &Path) -> Result<Option<AggregateCurves>> {
    if !path.exists() {
        return Ok(None);
    }
    let rows = matrix::read_rows(path)?;
    let shape = (rows.len(), rows.first().map_or(0, Vec::len));
    match AggregateCurves::from_rows(rows) {
        Some(agg) => {
            info!(path = %path.display(), "using cached iterations-needed table");
            Ok(Some(agg))
        }
        None => Err(Error::CacheShape {
            path: path.to_path_buf(),
            rows: shape.0,
            cols: shape.1,
        }),
    }
}

/// Writes the aggregate, creating the cache directory on demand.
pub fn store(path: &Path, agg: &AggregateCurves) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    matrix::write_rows(path, &agg.rows())?;
    info!(path = %path.display(), "wrote iterations-needed table");
    Ok(())
}
