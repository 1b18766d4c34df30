//! Line chart rendering
//!
//! Each chart gets its own PNG drawing area which is flushed to disk before
//! `render_chart` returns. Nothing is shared between charts.

use crate::config::{ChartSpec, Marker};
use crate::table::MetricsTable;
use crate::types::{DataPoint, ReportError, Result};
use plotters::prelude::*;
use std::ops::Range;
use std::path::{Path, PathBuf};

const CAPTION_FONT: (&str, u32) = ("sans-serif", 22);
const LABEL_FONT: (&str, u32) = ("sans-serif", 15);
const LINE_WIDTH: u32 = 2;
const MARKER_SIZE: i32 = 4;

/// Fraction of the data span added on each side of an axis
const AXIS_MARGIN: f64 = 0.05;

/// Largest data magnitude an axis covers; the padded width stays below f64::MAX
const AXIS_LIMIT: f64 = f64::MAX / 4.0;

/// Render one chart from `table` and write it to `output_dir`
///
/// Fails with `MissingColumn` before touching the output file if either
/// column is absent.
pub fn render_chart(
    table: &MetricsTable,
    x_column: &str,
    spec: &ChartSpec,
    output_dir: &Path,
    size: (u32, u32),
) -> Result<PathBuf> {
    let points = table.series(x_column, &spec.column)?;
    let path = output_dir.join(&spec.output);

    log::debug!(
        "Rendering chart '{}' ({} points, {:?} marker) to {:?}",
        spec.name,
        points.len(),
        spec.marker,
        path
    );

    draw_line_chart(&path, spec, &points, size).map_err(|e| ReportError::Render {
        chart: spec.name.clone(),
        message: e.to_string(),
    })?;

    log::info!("Chart written: {:?}", path);
    Ok(path)
}

fn draw_line_chart(
    path: &Path,
    spec: &ChartSpec,
    points: &[DataPoint],
    size: (u32, u32),
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let visible: Vec<DataPoint> = points.iter().copied().filter(is_finite).collect();
    let x_range = axis_range(visible.iter().map(|p| p.0));
    let y_range = axis_range(visible.iter().map(|p| p.1));

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, CAPTION_FONT)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .axis_desc_style(LABEL_FONT)
        .draw()?;

    let (r, g, b) = spec.color.rgb();
    let color = RGBColor(r, g, b);

    // Missing values break the line instead of being bridged
    for segment in line_segments(points) {
        chart.draw_series(LineSeries::new(segment, color.stroke_width(LINE_WIDTH)))?;
    }

    match spec.marker {
        Marker::Circle => {
            chart.draw_series(
                visible
                    .iter()
                    .map(|&point| Circle::new(point, MARKER_SIZE, color.filled())),
            )?;
        }
        Marker::Cross => {
            chart.draw_series(
                visible
                    .iter()
                    .map(|&point| Cross::new(point, MARKER_SIZE, color.stroke_width(LINE_WIDTH))),
            )?;
        }
        Marker::Square => {
            chart.draw_series(visible.iter().map(|&point| {
                EmptyElement::at(point)
                    + Rectangle::new(
                        [(-MARKER_SIZE, -MARKER_SIZE), (MARKER_SIZE, MARKER_SIZE)],
                        color.filled(),
                    )
            }))?;
        }
    }

    root.present()?;
    Ok(())
}

fn is_finite(point: &DataPoint) -> bool {
    point.0.is_finite() && point.1.is_finite()
}

/// Split a series into runs of consecutive finite points
pub(crate) fn line_segments(points: &[DataPoint]) -> Vec<Vec<DataPoint>> {
    points
        .split(|point| !is_finite(point))
        .filter(|run| !run.is_empty())
        .map(|run| run.to_vec())
        .collect()
}

/// Axis range covering `values` with a small margin on both sides
pub(crate) fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return 0.0..1.0;
    }

    // Values beyond the limit fall outside the plotted area
    let min = min.clamp(-AXIS_LIMIT, AXIS_LIMIT);
    let max = max.clamp(-AXIS_LIMIT, AXIS_LIMIT);

    let span = max - min;
    let pad = if span > 0.0 {
        span * AXIS_MARGIN
    } else if min != 0.0 {
        min.abs() * AXIS_MARGIN
    } else {
        0.5
    };

    (min - pad)..(max + pad)
}
