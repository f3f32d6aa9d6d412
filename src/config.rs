use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::layout::{ScoringKey, TestLayout};
use crate::plot::PlotSettings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Directory holding one folder per experiment set.
    #[serde(default = "ExperimentConfig::default_data_root")]
    pub data_root: String,
    #[serde(default = "ExperimentConfig::default_test_name")]
    pub test_name: String,
    #[serde(default = "ExperimentConfig::default_first_exp")]
    pub first_exp: u32,
    #[serde(default = "ExperimentConfig::default_last_exp")]
    pub last_exp: u32,
    #[serde(default = "ExperimentConfig::default_threshold")]
    pub threshold: f64,
    #[serde(default = "ExperimentConfig::default_alpha")]
    pub alpha: f64,
}

impl ExperimentConfig {
    fn default_data_root() -> String {
        ".".to_string()
    }
    fn default_test_name() -> String {
        "MNIST".to_string()
    }
    fn default_first_exp() -> u32 {
        1
    }
    fn default_last_exp() -> u32 {
        10
    }
    fn default_threshold() -> f64 {
        0.5
    }
    fn default_alpha() -> f64 {
        0.5
    }

    pub fn layout(&self) -> TestLayout {
        TestLayout::new(&self.data_root, &self.test_name)
    }

    pub fn key(&self) -> ScoringKey {
        ScoringKey::new(self.threshold, self.alpha)
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            data_root: Self::default_data_root(),
            test_name: Self::default_test_name(),
            first_exp: Self::default_first_exp(),
            last_exp: Self::default_last_exp(),
            threshold: Self::default_threshold(),
            alpha: Self::default_alpha(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "PlotConfig::default_enabled")]
    pub enabled: bool,
    /// PNG path; next to the cache file when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default = "PlotConfig::default_width")]
    pub width: u32,
    #[serde(default = "PlotConfig::default_height")]
    pub height: u32,
    #[serde(default = "PlotConfig::default_q3_clip")]
    pub q3_clip: f64,
}

impl PlotConfig {
    fn default_enabled() -> bool {
        true
    }
    fn default_width() -> u32 {
        1500
    }
    fn default_height() -> u32 {
        700
    }
    fn default_q3_clip() -> f64 {
        1000.0
    }

    pub fn settings(&self) -> PlotSettings {
        PlotSettings {
            width: self.width,
            height: self.height,
            q3_clip: self.q3_clip,
        }
    }

    pub fn output_path(&self, exp: &ExperimentConfig) -> PathBuf {
        match &self.output {
            Some(p) => PathBuf::from(p),
            None => exp.layout().plot_path(exp.first_exp, exp.last_exp, exp.key()),
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            output: None,
            width: Self::default_width(),
            height: Self::default_height(),
            q3_clip: Self::default_q3_clip(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub experiment: ExperimentConfig,
    #[serde(default)]
    pub plot: PlotConfig,
}

impl AppConfig {
    /// Reads `path`, or writes a commented-out default file there and returns
    /// the defaults. Unreadable or invalid files fall back to defaults.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        warn!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    warn!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path_obj, comment_out(&text)) {
                    warn!("Failed to write default config to {path}: {err}");
                }
            }
            Err(err) => warn!("Failed to serialize default config: {err}"),
        }
        default_cfg
    }
}

/// Keeps section headers, prefixes every key with `# `.
fn comment_out(text: &str) -> String {
    let mut commented = String::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            commented.push('\n');
        } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
            commented.push_str(line);
            commented.push('\n');
        } else {
            commented.push_str("# ");
            commented.push_str(line);
            commented.push('\n');
        }
    }
    commented
}
