//! Network topology figure: the fixed 8-node weighted graph drawn with a
//! seeded spring layout. Edge stroke width scales with weight.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::figures::{GRAY, LIGHT_BLUE};
use crate::graph::{EDGES, LAYOUT_ITERATIONS, LAYOUT_K, LAYOUT_SEED, NODE_NAMES, spring_layout};

pub const FILE_NAME: &str = "network_topology.png";
pub const SIZE_IN: (u32, u32) = (10, 8);

const NODE_RADIUS_PX: i32 = 22;

pub fn render(out_path: &Path, size_px: (u32, u32)) -> Result<(), Box<dyn Error>> {
    let pos = spring_layout(
        NODE_NAMES.len(),
        &EDGES,
        LAYOUT_K,
        LAYOUT_ITERATIONS,
        LAYOUT_SEED,
    );

    let root = BitMapBackend::new(out_path, size_px).into_drawing_area();
    root.fill(&WHITE)?;

    // No mesh, no axes: the chart is only a coordinate frame for the drawing.
    let mut chart = ChartBuilder::on(&root)
        .caption("Network Topology with Edge Weights", ("sans-serif", 24))
        .margin(20)
        .build_cartesian_2d(-1.3f64..1.3f64, -1.3f64..1.3f64)?;

    // edges under nodes, stroke width proportional to weight
    for &(a, b, weight) in &EDGES {
        let width = ((weight * 3.0).round() as u32).max(1);
        chart.draw_series(std::iter::once(PathElement::new(
            vec![pos[a], pos[b]],
            GRAY.mix(0.6).stroke_width(width),
        )))?;
    }

    // edge weight labels at edge midpoints
    let weight_style = TextStyle::from(("sans-serif", 14).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    for &(a, b, weight) in &EDGES {
        let mid = ((pos[a].0 + pos[b].0) / 2.0, (pos[a].1 + pos[b].1) / 2.0);
        chart.draw_series(std::iter::once(Text::new(
            format!("{weight:.1}"),
            mid,
            weight_style.clone(),
        )))?;
    }

    for (i, &p) in pos.iter().enumerate() {
        chart.draw_series(std::iter::once(Circle::new(
            p,
            NODE_RADIUS_PX,
            LIGHT_BLUE.mix(0.8).filled(),
        )))?;
        chart.draw_series(std::iter::once(Circle::new(p, NODE_RADIUS_PX, BLACK)))?;
        let label_style = TextStyle::from(("sans-serif", 20).into_font())
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        chart.draw_series(std::iter::once(Text::new(
            NODE_NAMES[i].to_string(),
            p,
            label_style,
        )))?;
    }

    root.present()?;
    Ok(())
}
