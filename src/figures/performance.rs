//! Grouped bar chart comparing accuracy, precision, and recall across the
//! four algorithms. All values are the literal figures quoted in the text.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

pub const FILE_NAME: &str = "performance_comparison.png";
pub const SIZE_IN: (u32, u32) = (10, 6);

pub const ALGORITHMS: [&str; 4] = ["Algorithm A", "Algorithm B", "Algorithm C", "Algorithm D"];
pub const ACCURACY: [f64; 4] = [0.85, 0.92, 0.78, 0.89];
pub const PRECISION: [f64; 4] = [0.82, 0.90, 0.75, 0.87];
pub const RECALL: [f64; 4] = [0.88, 0.94, 0.80, 0.91];

const BAR_WIDTH: f64 = 0.25;

pub fn render(out_path: &Path, size_px: (u32, u32)) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, size_px).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Performance Comparison of Different Algorithms",
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..3.5f64, 0.0f64..1.05f64)?;

    chart
        .configure_mesh()
        .x_desc("Algorithms")
        .y_desc("Score")
        .x_labels(4)
        .x_label_formatter(&|x| {
            let i = x.round();
            if (x - i).abs() < 0.01 && (0.0..4.0).contains(&i) {
                ALGORITHMS[i as usize].to_string()
            } else {
                String::new()
            }
        })
        .draw()?;

    let metrics: [(&str, &[f64; 4], RGBColor, f64); 3] = [
        ("Accuracy", &ACCURACY, BLUE, -BAR_WIDTH),
        ("Precision", &PRECISION, GREEN, 0.0),
        ("Recall", &RECALL, RED, BAR_WIDTH),
    ];

    let value_style = TextStyle::from(("sans-serif", 12).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    for (label, values, color, offset) in metrics {
        chart
            .draw_series(values.iter().enumerate().map(|(i, &v)| {
                let x = i as f64 + offset;
                Rectangle::new(
                    [(x - BAR_WIDTH / 2.0, 0.0), (x + BAR_WIDTH / 2.0, v)],
                    color.mix(0.8).filled(),
                )
            }))?
            .label(label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled()));

        // Numeric value label just above each bar
        chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
            Text::new(
                format!("{v:.2}"),
                (i as f64 + offset, v + 0.01),
                value_style.clone(),
            )
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
