//! Timing distribution figure: box plots and overlaid density histograms of
//! the three synthetic timing scenarios.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::dist::{self, SAMPLE_SEED};
use crate::figures::{GROUP_COLORS, draw_box, padded_range};
use crate::stats::{BoxStats, density_histogram};

pub const FILE_NAME: &str = "timing_analysis.png";
pub const SIZE_IN: (u32, u32) = (12, 5);

pub const SCENARIOS: [&str; 3] = ["Scenario A", "Scenario B", "Scenario C"];
const HIST_BINS: usize = 20;

pub fn render(out_path: &Path, size_px: (u32, u32)) -> Result<(), Box<dyn Error>> {
    let scenarios = dist::timing_scenarios(SAMPLE_SEED)?;

    let root = BitMapBackend::new(out_path, size_px).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    draw_box_panel(&panels[0], &scenarios)?;
    draw_histogram_panel(&panels[1], &scenarios)?;

    root.present()?;
    Ok(())
}

fn draw_box_panel(
    area: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    scenarios: &[Vec<f64>; 3],
) -> Result<(), Box<dyn Error>> {
    let refs: Vec<&[f64]> = scenarios.iter().map(|s| s.as_slice()).collect();
    let (y_lo, y_hi) = padded_range(&refs, 0.05);

    let mut chart = ChartBuilder::on(area)
        .caption("Execution Time Distribution", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0.5f64..3.5f64, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .y_desc("Time (seconds)")
        .x_labels(3)
        .x_label_formatter(&|x| {
            let i = x.round();
            if (x - i).abs() < 0.01 && (1.0..=3.0).contains(&i) {
                SCENARIOS[i as usize - 1].to_string()
            } else {
                String::new()
            }
        })
        .draw()?;

    for (i, samples) in scenarios.iter().enumerate() {
        if let Some(stats) = BoxStats::from_samples(samples) {
            draw_box(&mut chart, (i + 1) as f64, &stats, GROUP_COLORS[i])?;
        }
    }
    Ok(())
}

fn draw_histogram_panel(
    area: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    scenarios: &[Vec<f64>; 3],
) -> Result<(), Box<dyn Error>> {
    let refs: Vec<&[f64]> = scenarios.iter().map(|s| s.as_slice()).collect();
    let (x_lo, x_hi) = padded_range(&refs, 0.0);
    let bin_width = (x_hi - x_lo) / HIST_BINS as f64;

    let histograms: Vec<Vec<(f64, f64)>> = scenarios
        .iter()
        .map(|s| density_histogram(s, x_lo, x_hi, HIST_BINS))
        .collect();
    let y_max = histograms
        .iter()
        .flatten()
        .map(|(_, h)| *h)
        .fold(0.0f64, f64::max)
        .max(1e-9);

    let mut chart = ChartBuilder::on(area)
        .caption("Execution Time Histogram", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_lo..x_hi, 0.0f64..(y_max * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("Time (seconds)")
        .y_desc("Density")
        .draw()?;

    for (i, hist) in histograms.iter().enumerate() {
        let color = GROUP_COLORS[i];
        chart
            .draw_series(hist.iter().map(|&(start, height)| {
                Rectangle::new(
                    [(start, 0.0), (start + bin_width, height)],
                    color.mix(0.7).filled(),
                )
            }))?
            .label(SCENARIOS[i])
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}
