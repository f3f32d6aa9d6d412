use std::path::Path;

use plotters::prelude::*;

use crate::core::gain::{GAIN_LEVELS, GAIN_START, GAIN_STEP, gain_axis};
use crate::core::stats::AggregateCurves;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct PlotSettings {
    pub width: u32,
    pub height: u32,
    /// q3 points at or above this value are left out of the figure.
    pub q3_clip: f64,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 700,
            q3_clip: 1000.0,
        }
    }
}

/// Median (solid) and quartile (dash-dot) curves against the gain axis.
pub fn render_iterations_needed(
    out_path: &Path,
    agg: &AggregateCurves,
    settings: &PlotSettings,
) -> Result<()> {
    draw(out_path, agg, settings).map_err(|e| Error::Plot(e.to_string()))
}

fn draw(
    out_path: &Path,
    agg: &AggregateCurves,
    settings: &PlotSettings,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let axis = gain_axis();
    let median_points: Vec<(f64, f64)> =
        axis.iter().copied().zip(agg.median.iter().copied()).collect();
    let q1_points: Vec<(f64, f64)> = axis.iter().copied().zip(agg.q1.iter().copied()).collect();
    let q3_points = clipped_q3(&axis, &agg.q3, settings.q3_clip);

    let y_max = median_points
        .iter()
        .chain(&q1_points)
        .chain(&q3_points)
        .map(|(_, y)| *y)
        .filter(|y| y.is_finite())
        .fold(0.0f64, f64::max)
        .max(1.0)
        * 1.1;
    let x_min = GAIN_START;
    let x_max = GAIN_START + GAIN_STEP * (GAIN_LEVELS - 1) as f64;

    let root = BitMapBackend::new(out_path, (settings.width, settings.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Iterations needed", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Percentage of maximum gain")
        .y_desc("Number of tested parameters")
        .draw()?;

    chart
        .draw_series(LineSeries::new(median_points, &CYAN))?
        .label("median")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CYAN));

    chart
        .draw_series(DashedLineSeries::new(q1_points, 6, 3, CYAN.into()))?
        .label("first / third quartile")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CYAN.mix(0.6)));

    chart.draw_series(DashedLineSeries::new(q3_points, 6, 3, CYAN.into()))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// q3 points strictly below `clip`.
fn clipped_q3(axis: &[f64], q3: &[f64], clip: f64) -> Vec<(f64, f64)> {
    axis.iter()
        .copied()
        .zip(q3.iter().copied())
        .filter(|&(_, y)| y < clip)
        .collect()
}
