//! Renderer for the handshake sequence diagram: two lifelines and the fixed
//! message script laid out by `seq::layout`.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::seq::{Actor, LIFELINE_X, PlacedShape, handshake_script, layout, lifeline_bottom};

pub const FILE_NAME: &str = "lsc.png";
pub const SIZE_IN: (u32, u32) = (10, 12);

/// Vertical distance between the lines of a multi-line label (data units).
const LINE_STEP: f64 = 0.45;
const ARROW_HEAD_DX: f64 = 0.12;
const ARROW_HEAD_DY: f64 = 0.2;

fn actor_color(actor: Actor) -> RGBColor {
    match actor {
        Actor::Central => BLACK,
        Actor::Peripheral => BLUE,
    }
}

pub fn render(out_path: &Path, size_px: (u32, u32)) -> Result<(), Box<dyn Error>> {
    let script = handshake_script();
    let placed = layout(&script);
    let bottom = lifeline_bottom(script.len());

    let root = BitMapBackend::new(out_path, size_px).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_2d(0.0f64..5.0f64, bottom..1.0f64)?;

    // lifelines with their participant headers
    for actor in [Actor::Central, Actor::Peripheral] {
        let x = LIFELINE_X[actor.index()];
        let color = actor_color(actor);
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x, 0.0), (x, bottom)],
            color.stroke_width(1),
        )))?;

        let title_font = FontDesc::new(FontFamily::SansSerif, 18.0, FontStyle::Bold);
        let title_style = TextStyle::from(title_font)
            .color(&color)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(std::iter::once(Text::new(
            actor.title().to_string(),
            (x, 0.5),
            title_style,
        )))?;

        let subtitle_style = TextStyle::from(("sans-serif", 11).into_font())
            .color(&color)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(std::iter::once(Text::new(
            actor.subtitle().to_string(),
            (x, 0.15),
            subtitle_style,
        )))?;
    }

    for msg in &placed {
        let color = actor_color(msg.from);
        let align = match msg.shape {
            PlacedShape::SelfNote { .. } => HPos::Left,
            _ => HPos::Center,
        };
        let label_style = TextStyle::from(("sans-serif", 12).into_font())
            .color(&color)
            .pos(Pos::new(align, VPos::Center));

        if let PlacedShape::Arrow { x_from, x_to } = msg.shape {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(x_from, msg.y), (x_to, msg.y)],
                color.stroke_width(2),
            )))?;

            // arrowhead at the receiving lifeline
            let dir = (x_to - x_from).signum();
            let back = x_to - dir * ARROW_HEAD_DX;
            chart.draw_series(std::iter::once(Polygon::new(
                vec![
                    (x_to, msg.y),
                    (back, msg.y + ARROW_HEAD_DY),
                    (back, msg.y - ARROW_HEAD_DY),
                ],
                color.filled(),
            )))?;
        }

        for (i, line) in msg.text.split('\n').enumerate() {
            let y = msg.label_y - LINE_STEP * i as f64;
            chart.draw_series(std::iter::once(Text::new(
                line.to_string(),
                (msg.label_x, y),
                label_style.clone(),
            )))?;
        }
    }

    root.present()?;
    Ok(())
}
