#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use hpo_gain::core::layout::{ScoringKey, TestLayout};

pub fn unique_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!(
        "hpo_gain_it_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&p).unwrap();
    p
}

fn write_csv(path: &Path, rows: &[Vec<f64>]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let text: String = rows
        .iter()
        .map(|r| {
            let fields: Vec<String> = r.iter().map(|v| v.to_string()).collect();
            fields.join(",") + "\n"
        })
        .collect();
    fs::write(path, text).unwrap();
}

/// Experiment set on disk under a fresh temp directory.
pub struct Fixture {
    pub data_root: PathBuf,
    pub layout: TestLayout,
    pub key: ScoringKey,
}

impl Fixture {
    pub fn new(name: &str) -> Self {
        let data_root = unique_dir(name);
        let layout = TestLayout::new(&data_root, "TOY");
        Self {
            data_root,
            layout,
            key: ScoringKey::new(0.5, 0.5),
        }
    }

    /// Scores go to a single-column file, as numpy writes a 1-D array.
    pub fn write_scoring(&self, params: &[Vec<f64>], scores: &[f64]) {
        write_csv(&self.layout.params_path(), params);
        let col: Vec<Vec<f64>> = scores.iter().map(|&s| vec![s]).collect();
        write_csv(&self.layout.scores_path(self.key), &col);
    }

    pub fn write_path(&self, exp: u32, points: &[Vec<f64>]) {
        write_csv(&self.layout.param_path(exp), points);
    }

    pub fn cache_path(&self, first: u32, last: u32) -> PathBuf {
        self.layout.cache_path(first, last, self.key)
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.data_root);
    }
}

/// One-dimensional table where parameter `x` scores `x`, over 0..=100.
pub fn identity_table(fx: &Fixture, xs: &[f64]) {
    let params: Vec<Vec<f64>> = xs.iter().map(|&x| vec![x]).collect();
    fx.write_scoring(&params, xs);
}

pub fn points(xs: &[f64]) -> Vec<Vec<f64>> {
    xs.iter().map(|&x| vec![x]).collect()
}
