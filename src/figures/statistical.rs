//! Four-panel statistical summary of the three sampled groups: box plots,
//! density histograms, a normal Q-Q plot of group 1, and a group 1 vs.
//! group 2 scatter annotated with the Pearson correlation.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::dist::{self, SAMPLE_SEED};
use crate::figures::{GROUP_COLORS, draw_box, padded_range};
use crate::stats::{BoxStats, density_histogram, linear_fit, normal_order_quantiles, pearson};

pub const FILE_NAME: &str = "statistical_analysis.png";
pub const SIZE_IN: (u32, u32) = (12, 10);

pub const GROUPS: [&str; 3] = ["Group 1", "Group 2", "Group 3"];
const HIST_BINS: usize = 15;

type Panel<'a> = DrawingArea<BitMapBackend<'a>, plotters::coord::Shift>;

pub fn render(out_path: &Path, size_px: (u32, u32)) -> Result<(), Box<dyn Error>> {
    let groups = dist::summary_groups(SAMPLE_SEED)?;

    let root = BitMapBackend::new(out_path, size_px).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 2));

    draw_box_panel(&panels[0], &groups)?;
    draw_histogram_panel(&panels[1], &groups)?;
    draw_qq_panel(&panels[2], &groups[0])?;
    draw_scatter_panel(&panels[3], &groups[0], &groups[1])?;

    root.present()?;
    Ok(())
}

fn draw_box_panel(area: &Panel<'_>, groups: &[Vec<f64>; 3]) -> Result<(), Box<dyn Error>> {
    let refs: Vec<&[f64]> = groups.iter().map(|g| g.as_slice()).collect();
    let (y_lo, y_hi) = padded_range(&refs, 0.05);

    let mut chart = ChartBuilder::on(area)
        .caption("Distribution Comparison", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0.5f64..3.5f64, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .y_desc("Values")
        .x_labels(3)
        .x_label_formatter(&|x| {
            let i = x.round();
            if (x - i).abs() < 0.01 && (1.0..=3.0).contains(&i) {
                GROUPS[i as usize - 1].to_string()
            } else {
                String::new()
            }
        })
        .draw()?;

    for (i, samples) in groups.iter().enumerate() {
        if let Some(stats) = BoxStats::from_samples(samples) {
            draw_box(&mut chart, (i + 1) as f64, &stats, GROUP_COLORS[i])?;
        }
    }
    Ok(())
}

fn draw_histogram_panel(area: &Panel<'_>, groups: &[Vec<f64>; 3]) -> Result<(), Box<dyn Error>> {
    let refs: Vec<&[f64]> = groups.iter().map(|g| g.as_slice()).collect();
    let (x_lo, x_hi) = padded_range(&refs, 0.0);
    let bin_width = (x_hi - x_lo) / HIST_BINS as f64;

    let histograms: Vec<Vec<(f64, f64)>> = groups
        .iter()
        .map(|g| density_histogram(g, x_lo, x_hi, HIST_BINS))
        .collect();
    let y_max = histograms
        .iter()
        .flatten()
        .map(|(_, h)| *h)
        .fold(0.0f64, f64::max)
        .max(1e-9);

    let mut chart = ChartBuilder::on(area)
        .caption("Histogram Comparison", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_lo..x_hi, 0.0f64..(y_max * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("Values")
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
            .label(GROUPS[i])
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

fn draw_qq_panel(area: &Panel<'_>, samples: &[f64]) -> Result<(), Box<dyn Error>> {
    let mut ordered = samples.to_vec();
    ordered.sort_by(|a, b| a.partial_cmp(b).expect("non-finite sample"));
    let theoretical = normal_order_quantiles(ordered.len());
    let (slope, intercept) = linear_fit(&theoretical, &ordered);

    let x_lo = theoretical.first().copied().unwrap_or(-3.0) - 0.3;
    let x_hi = theoretical.last().copied().unwrap_or(3.0) + 0.3;
    let (y_lo, y_hi) = padded_range(&[&ordered], 0.05);

    let mut chart = ChartBuilder::on(area)
        .caption("Q-Q Plot (Group 1)", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("Theoretical quantiles")
        .y_desc("Ordered values")
        .draw()?;

    // least-squares fit line, drawn under the points
    chart.draw_series(std::iter::once(PathElement::new(
        vec![
            (x_lo, slope * x_lo + intercept),
            (x_hi, slope * x_hi + intercept),
        ],
        RED.stroke_width(2),
    )))?;

    chart.draw_series(
        theoretical
            .iter()
            .zip(ordered.iter())
            .map(|(&q, &v)| Circle::new((q, v), 3, BLUE.mix(0.7).filled())),
    )?;
    Ok(())
}

fn draw_scatter_panel(area: &Panel<'_>, x: &[f64], y: &[f64]) -> Result<(), Box<dyn Error>> {
    let (x_lo, x_hi) = padded_range(&[x], 0.05);
    let (y_lo, y_hi) = padded_range(&[y], 0.05);
    let corr = pearson(x, y);

    let mut chart = ChartBuilder::on(area)
        .caption("Correlation Analysis", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("Group 1")
        .y_desc("Group 2")
        .draw()?;

    chart.draw_series(
        x.iter()
            .zip(y.iter())
            .map(|(&a, &b)| Circle::new((a, b), 4, BLUE.mix(0.6).filled())),
    )?;

    // correlation coefficient in the upper-left corner
    let style = TextStyle::from(("sans-serif", 16).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Top));
    chart.draw_series(std::iter::once(Text::new(
        format!("Correlation: {corr:.3}"),
        (
            x_lo + (x_hi - x_lo) * 0.05,
            y_hi - (y_hi - y_lo) * 0.05,
        ),
        style,
    )))?;
    Ok(())
}
