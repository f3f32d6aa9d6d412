//! Scoring table: parameter vectors with their true scores, queried by
//! nearest neighbour because visited points need not sit exactly on the grid.
use std::path::Path;

use smartcore::algorithm::neighbour::linear_search::LinearKNNSearch;
use smartcore::metrics::distance::euclidian::Euclidian;
use tracing::debug;

use crate::core::layout::{ScoringKey, TestLayout};
use crate::core::matrix;
use crate::error::{Error, Result};

pub struct ScoringTable {
    index: LinearKNNSearch<Vec<f64>, Euclidian<f64>>,
    scores: Vec<f64>,
    dim: usize,
    min: f64,
    max: f64,
}

impl ScoringTable {
    /// Loads `params.csv` and the true-score file for `key`.
    pub fn load(layout: &TestLayout, key: ScoringKey) -> Result<Self> {
        let params_path = layout.params_path();
        let params = matrix::read_rows(&params_path)?;
        if params.is_empty() {
            return Err(Error::EmptyTable(params_path.display().to_string()));
        }
        let scores = matrix::read_values(&layout.scores_path(key))?;
        debug!(
            rows = params.len(),
            dim = params[0].len(),
            %key,
            "loaded scoring table"
        );
        Self::new(params, scores)
    }

    pub fn new(params: Vec<Vec<f64>>, scores: Vec<f64>) -> Result<Self> {
        if params.len() != scores.len() {
            return Err(Error::LengthMismatch {
                params: params.len(),
                scores: scores.len(),
            });
        }
        let dim = match params.first() {
            Some(row) => row.len(),
            None => return Err(Error::EmptyTable("no parameter vectors given".to_string())),
        };

        let (min, max) = scores
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
                (lo.min(s), hi.max(s))
            });
        if max <= min {
            return Err(Error::DegenerateScores(min));
        }

        let index = LinearKNNSearch::new(params, Euclidian::new())?;
        Ok(Self {
            index,
            scores,
            dim,
            min,
            max,
        })
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Row index of the closest parameter vector. Ties go to the lowest index.
    pub fn nearest(&self, point: &Vec<f64>) -> Result<usize> {
        let hits = self.index.find(point, 1)?;
        hits.first()
            .map(|(idx, _, _)| *idx)
            .ok_or_else(|| Error::EmptyTable("nearest-neighbour index".to_string()))
    }

    /// Min-max normalised score in [0, 100].
    pub fn normalize(&self, score: f64) -> f64 {
        100.0 * (score - self.min) / (self.max - self.min)
    }

    /// Normalised score of the nearest table entry for every point of a path.
    pub fn normalized_path(&self, path_file: &Path, points: &[Vec<f64>]) -> Result<Vec<f64>> {
        points
            .iter()
            .map(|p| {
                if p.len() != self.dim {
                    return Err(Error::DimensionMismatch {
                        path: path_file.to_path_buf(),
                        expected: self.dim,
                        found: p.len(),
                    });
                }
                let idx = self.nearest(p)?;
                Ok(self.normalize(self.scores[idx]))
            })
            .collect()
    }
}
