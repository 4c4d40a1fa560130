//! One render module per figure plus the driver that runs them in sequence.
//!
//! Every renderer is a terminal producer: fabricate or look up the data,
//! draw with plotters, write one PNG at a fixed name, return nothing.

pub mod handshake;
pub mod network;
pub mod performance;
pub mod statistical;
pub mod timing;

use std::error::Error;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use plotters::chart::ChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use tracing::info;

use crate::config::AppConfig;
use crate::stats::BoxStats;

pub const LIGHT_BLUE: RGBColor = RGBColor(173, 216, 230);
pub const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);
pub const LIGHT_CORAL: RGBColor = RGBColor(240, 128, 128);
pub const GRAY: RGBColor = RGBColor(128, 128, 128);

/// Fill colors used for grouped box plots and histograms, in group order.
pub const GROUP_COLORS: [RGBColor; 3] = [LIGHT_BLUE, LIGHT_GREEN, LIGHT_CORAL];

/// Keys accepted by the `--only` filter, in render order.
pub const FIGURE_KEYS: [&str; 4] = ["performance", "timing", "network", "statistical"];

/// Render the four analysis figures into the configured output directory and
/// return the paths written, in order. Stops at the first failure.
pub fn generate_all(cfg: &AppConfig) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    generate_selected(cfg, &[])
}

/// Like [`generate_all`], restricted to the figures named in `only` (all of
/// them when `only` is empty). Unknown keys error out before anything is
/// written.
pub fn generate_selected(cfg: &AppConfig, only: &[String]) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    for key in only {
        if !FIGURE_KEYS.contains(&key.as_str()) {
            return Err(format!("unknown figure {key:?}; expected one of {FIGURE_KEYS:?}").into());
        }
    }

    let out_dir = Path::new(&cfg.output.dir);
    create_dir_all(out_dir)?;

    let figures: [(&str, &str, (u32, u32), RenderFn); 4] = [
        (
            FIGURE_KEYS[0],
            performance::FILE_NAME,
            performance::SIZE_IN,
            performance::render,
        ),
        (FIGURE_KEYS[1], timing::FILE_NAME, timing::SIZE_IN, timing::render),
        (FIGURE_KEYS[2], network::FILE_NAME, network::SIZE_IN, network::render),
        (
            FIGURE_KEYS[3],
            statistical::FILE_NAME,
            statistical::SIZE_IN,
            statistical::render,
        ),
    ];

    let mut written = Vec::with_capacity(figures.len());
    for (key, name, size_in, render) in figures {
        if !only.is_empty() && !only.iter().any(|k| k == key) {
            continue;
        }
        let path = out_dir.join(name);
        info!(figure = name, "rendering");
        render(&path, cfg.raster.pixels(size_in))?;
        written.push(path);
    }
    Ok(written)
}

type RenderFn = fn(&Path, (u32, u32)) -> Result<(), Box<dyn Error>>;

const BOX_HALF_WIDTH: f64 = 0.2;
const CAP_HALF_WIDTH: f64 = 0.1;

/// Draw one vertical box-and-whisker glyph centered at `x`.
pub(crate) fn draw_box<DB>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    x: f64,
    stats: &BoxStats,
    fill: RGBColor,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    // whisker stems and caps
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(x, stats.whisker_lo), (x, stats.q1)],
        BLACK,
    )))?;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(x, stats.q3), (x, stats.whisker_hi)],
        BLACK,
    )))?;
    for w in [stats.whisker_lo, stats.whisker_hi] {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x - CAP_HALF_WIDTH, w), (x + CAP_HALF_WIDTH, w)],
            BLACK,
        )))?;
    }

    // filled box with outline
    chart.draw_series(std::iter::once(Rectangle::new(
        [
            (x - BOX_HALF_WIDTH, stats.q1),
            (x + BOX_HALF_WIDTH, stats.q3),
        ],
        fill.mix(0.9).filled(),
    )))?;
    chart.draw_series(std::iter::once(Rectangle::new(
        [
            (x - BOX_HALF_WIDTH, stats.q1),
            (x + BOX_HALF_WIDTH, stats.q3),
        ],
        BLACK,
    )))?;

    // median line
    chart.draw_series(std::iter::once(PathElement::new(
        vec![
            (x - BOX_HALF_WIDTH, stats.median),
            (x + BOX_HALF_WIDTH, stats.median),
        ],
        BLACK.stroke_width(2),
    )))?;
    Ok(())
}

/// Data range across several sample sets, with a proportional pad.
pub(crate) fn padded_range(groups: &[&[f64]], pad_frac: f64) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for group in groups {
        for &v in *group {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let span = (hi - lo).max(1e-9);
    (lo - span * pad_frac, hi + span * pad_frac)
}
