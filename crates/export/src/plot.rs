//! PNG charts of the synthetic test record.

use std::path::Path;

use plotters::prelude::*;
use studio_session::ExperimentalSeries;

use crate::{ExportError, create_parent_dir};

/// Canvas and caption settings.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            title: "Hot-fire test record".to_string(),
        }
    }
}

/// Draw thrust (top) and chamber pressure (bottom) against time into a PNG at `path`.
pub fn render_series(
    path: &Path,
    series: &ExperimentalSeries,
    options: &PlotOptions,
) -> Result<(), ExportError> {
    if series.is_empty() {
        return Err(ExportError::EmptySeries);
    }
    create_parent_dir(path)?;

    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let root = root
        .titled(&options.title, caption_font)
        .map_err(plot_error)?;
    let (upper, lower) = root.split_vertically((root.dim_in_pixel().1 / 2) as i32);

    let thrust_kn: Vec<f64> = series.thrust_n.iter().map(|f| f / 1_000.0).collect();
    draw_trace(
        &upper,
        &series.time_s,
        &thrust_kn,
        "Thrust [kN]",
        RGBColor(200, 60, 30),
        &label_font,
    )?;
    draw_trace(
        &lower,
        &series.time_s,
        &series.chamber_pressure_bar,
        "Chamber pressure [bar]",
        RGBColor(30, 90, 200),
        &label_font,
    )?;

    root.present().map_err(plot_error)?;
    Ok(())
}

fn draw_trace<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    time_s: &[f64],
    values: &[f64],
    y_desc: &str,
    color: RGBColor,
    label_font: &FontDesc<'_>,
) -> Result<(), ExportError> {
    let t_end = time_s.last().copied().unwrap_or(1.0).max(f64::EPSILON);
    let (lo, hi) = value_range(values);

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..t_end, lo..hi)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("Time [s]")
        .y_desc(y_desc)
        .label_style(label_font.clone())
        .x_labels(8)
        .y_labels(6)
        .draw()
        .map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(
            time_s.iter().copied().zip(values.iter().copied()),
            ShapeStyle::from(&color).stroke_width(1),
        ))
        .map_err(plot_error)?;
    Ok(())
}

fn value_range(values: &[f64]) -> (f64, f64) {
    let (lo, hi) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((hi - lo) * 0.05).max(hi.abs() * 1e-3).max(1e-9);
    (lo - pad, hi + pad)
}

fn plot_error<E: std::fmt::Display>(err: E) -> ExportError {
    ExportError::Plot(err.to_string())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}
