use clap::Parser;

use crate::config::AppConfig;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Directory holding the experiment sets (overrides config)
    #[arg(long)]
    pub data_root: Option<String>,

    /// Experiment set name, e.g. MNIST (overrides config)
    #[arg(long)]
    pub test_name: Option<String>,

    /// First experiment index, inclusive (overrides config)
    #[arg(long)]
    pub first_exp: Option<u32>,

    /// Last experiment index, inclusive (overrides config)
    #[arg(long)]
    pub last_exp: Option<u32>,

    /// Welch t-test threshold of the scoring function (overrides config)
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Score trade-off alpha, score = mean - alpha * std (overrides config)
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Where to write the PNG (overrides config)
    #[arg(long)]
    pub plot_output: Option<String>,

    /// Skip the figure
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Command-line values win over the file.
    pub fn apply(&self, cfg: &mut AppConfig) {
        let exp = &mut cfg.experiment;
        if let Some(v) = &self.data_root {
            exp.data_root = v.clone();
        }
        if let Some(v) = &self.test_name {
            exp.test_name = v.clone();
        }
        if let Some(v) = self.first_exp {
            exp.first_exp = v;
        }
        if let Some(v) = self.last_exp {
            exp.last_exp = v;
        }
        if let Some(v) = self.threshold {
            exp.threshold = v;
        }
        if let Some(v) = self.alpha {
            exp.alpha = v;
        }
        if let Some(v) = &self.plot_output {
            cfg.plot.output = Some(v.clone());
        }
        if self.no_plot {
            cfg.plot.enabled = false;
        }
    }
}
