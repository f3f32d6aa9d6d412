use std::fmt;
use std::path::{Path, PathBuf};

/// `(threshold, alpha)` pair selecting one true-score file.
///
/// `threshold` is the Welch t-test significance threshold and `alpha` the
/// trade-off in `score = mean - alpha * std` the table was built with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringKey {
    pub threshold: f64,
    pub alpha: f64,
}

impl ScoringKey {
    pub fn new(threshold: f64, alpha: f64) -> Self {
        Self { threshold, alpha }
    }
}

impl fmt::Display for ScoringKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t_{}_a_{}",
            python_float_str(self.threshold),
            python_float_str(self.alpha)
        )
    }
}

/// Renders a float the way Python's `str(float)` does, so file names match
/// the ones produced by the tooling that generated the data.
pub fn python_float_str(x: f64) -> String {
    if !x.is_finite() {
        return if x.is_nan() {
            "nan".to_string()
        } else if x > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // Shortest round-trip digits, e.g. "1.5e-5".
    let sci = format!("{x:e}");
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if !(-4..16).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exp.abs());
    }

    let mut s = format!("{x}");
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// Directory layout of one experiment set (`<data_root>/<test_name>`).
#[derive(Debug, Clone)]
pub struct TestLayout {
    root: PathBuf,
}

impl TestLayout {
    pub fn new(data_root: impl AsRef<Path>, test_name: &str) -> Self {
        Self {
            root: data_root.as_ref().join(test_name),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn params_path(&self) -> PathBuf {
        self.root.join("scoring_function").join("params.csv")
    }

    pub fn scores_path(&self, key: ScoringKey) -> PathBuf {
        self.root
            .join("scoring_function")
            .join(format!("true_score_{key}.csv"))
    }

    pub fn param_path(&self, exp: u32) -> PathBuf {
        self.root
            .join("exp_results")
            .join(format!("exp{exp}"))
            .join("param_path_0.csv")
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.root.join("exp_results").join("iterations_needed")
    }

    pub fn cache_path(&self, first_exp: u32, last_exp: u32, key: ScoringKey) -> PathBuf {
        self.cache_dir()
            .join(format!("exp{first_exp}_{last_exp}_{key}.csv"))
    }

    /// Default location of the rendered figure, next to the cache file.
    pub fn plot_path(&self, first_exp: u32, last_exp: u32, key: ScoringKey) -> PathBuf {
        self.cache_path(first_exp, last_exp, key).with_extension("png")
    }
}
