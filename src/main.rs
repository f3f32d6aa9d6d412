// Entry point: computes (or loads) the iterations-needed table and draws it.
use std::error::Error;
use std::fs::create_dir_all;
use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hpo_gain::cli::Args;
use hpo_gain::config::AppConfig;
use hpo_gain::core::gain::{GAIN_LEVELS, gain_level};
use hpo_gain::core::iterations::iterations_needed;
use hpo_gain::plot::render_iterations_needed;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();

    let mut cfg = AppConfig::load_or_default(&args.config);
    args.apply(&mut cfg);
    let exp = &cfg.experiment;

    let agg = iterations_needed(&exp.layout(), exp.first_exp, exp.last_exp, exp.key())?;

    println!(
        "{} exp{}..=exp{} ({})",
        exp.test_name,
        exp.first_exp,
        exp.last_exp,
        exp.key()
    );
    for level in [0, 80, GAIN_LEVELS - 1] {
        println!(
            "  gain {:>6.2}%  median {:>7.1}  q1 {:>7.1}  q3 {:>7.1}  mean {:>7.1}",
            gain_level(level),
            agg.median[level],
            agg.q1[level],
            agg.q3[level],
            agg.mean[level]
        );
    }

    if cfg.plot.enabled {
        let out_path = cfg.plot.output_path(exp);
        if let Some(dir) = out_path.parent() {
            if !dir.as_os_str().is_empty() {
                create_dir_all(dir)?;
            }
        }
        render_iterations_needed(&out_path, &agg, &cfg.plot.settings())?;
        info!("Saved plot to {}", out_path.display());
    }

    Ok(())
}
