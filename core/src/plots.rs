//! Chart rendering with the [`plotters`] crate.
//!
//! Charts are written as PNG files through the bitmap backend so the report
//! runs headless. Two shapes are supported: a line chart over numeric x values
//! and a bar chart over named categories.

use crate::render::format_compact_currency;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Title, axis labels and pixel size of one chart.
#[derive(Debug, Clone)]
pub struct ChartSpec<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub size: (u32, u32),
}

fn validate<'a>(values: impl Iterator<Item = &'a f64>) -> Result<()> {
    for v in values {
        if !v.is_finite() {
            return Err(PlotError::InvalidData(format!("non-finite value {v}")));
        }
    }
    Ok(())
}

/// Range covering `[min, max]` with 5% headroom. A flat range is widened.
fn padded_range(min: f64, max: f64) -> Range<f64> {
    if min >= max {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
        return (min - pad)..(max + pad);
    }
    let pad = (max - min) * 0.05;
    (min - pad)..(max + pad)
}

/// Line chart of (x, y) points, drawn in x order with point markers.
pub fn create_line_chart(points: &[(f64, f64)], spec: &ChartSpec, output_path: &Path) -> Result<()> {
    if points.is_empty() {
        return Err(PlotError::InvalidData("Data cannot be empty".to_string()));
    }
    validate(points.iter().flat_map(|(x, y)| [x, y]))?;

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let (x_min, x_max) = (sorted[0].0, sorted[sorted.len() - 1].0);
    let y_min = sorted.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let y_max = sorted.iter().map(|(_, y)| *y).fold(f64::NEG_INFINITY, f64::max);

    let root = BitMapBackend::new(output_path, spec.size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(100)
        .build_cartesian_2d(padded_range(x_min, x_max), padded_range(y_min, y_max))
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(spec.x_label)
        .y_desc(spec.y_label)
        .label_style(("sans-serif", 20))
        .x_label_formatter(&|x| format!("{:.0}", x.round()))
        .y_label_formatter(&|y| format_compact_currency(*y))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(sorted.iter().copied(), &BLUE))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    chart
        .draw_series(
            sorted
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

/// Pixel height reserved under the bars for rotated category labels and the
/// axis title.
const BAR_LABEL_AREA: u32 = 220;

/// Category axis for `count` bars. A segmented discrete range has one slot
/// per value in `start..=end`, so `count` bars need `0..count-1`.
fn bar_axis(count: usize) -> Range<u32> {
    0..(count.saturating_sub(1) as u32)
}

/// Bar chart of named categories. Category labels are drawn rotated below
/// the axis.
pub fn create_bar_chart(bars: &[(String, f64)], spec: &ChartSpec, output_path: &Path) -> Result<()> {
    if bars.is_empty() {
        return Err(PlotError::InvalidData("Data cannot be empty".to_string()));
    }
    validate(bars.iter().map(|(_, v)| v))?;

    let y_max = bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let y_min = bars.iter().map(|(_, v)| *v).fold(0.0, f64::min);
    let y_range = if y_max == y_min {
        y_min..(y_min + 1.0)
    } else {
        y_min..(y_max * 1.1)
    };
    let y_base = y_range.start;

    let root = BitMapBackend::new(output_path, spec.size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(BAR_LABEL_AREA)
        .y_label_area_size(100)
        .build_cartesian_2d(bar_axis(bars.len()).into_segmented(), y_range)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    // Category labels are drawn by hand below, so the mesh prints none.
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len())
        .x_label_formatter(&|_| String::new())
        .y_desc(spec.y_label)
        .label_style(("sans-serif", 20))
        .y_label_formatter(&|y| format_compact_currency(*y))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.7).filled())
                .margin(10)
                .data(bars.iter().enumerate().map(|(i, (_, v))| (i as u32, *v))),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Rotated text hangs down from its anchor, starting just under the axis.
    let (_, plot_rows) = chart.plotting_area().get_pixel_range();
    let label_top = plot_rows.end + 10;
    let label_style = TextStyle::from(
        ("sans-serif", 18)
            .into_font()
            .transform(FontTransform::Rotate90),
    )
    .pos(Pos::new(HPos::Left, VPos::Center));
    for (i, (label, _)) in bars.iter().enumerate() {
        let (x, _) = chart.backend_coord(&(SegmentValue::CenterOf(i as u32), y_base));
        root.draw(&Text::new(label.clone(), (x, label_top), label_style.clone()))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    let (width, height) = root.dim_in_pixel();
    let title_style = TextStyle::from(("sans-serif", 22).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    root.draw(&Text::new(
        spec.x_label.to_string(),
        ((width / 2) as i32, height as i32 - 10),
        title_style,
    ))
    .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}
