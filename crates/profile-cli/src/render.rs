use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use rxnprofile::core::models::primitives::Primitive;
use rxnprofile::workflows::diagram::Diagram;
use std::path::Path;
use tracing::debug;

const X_MARGIN_FRACTION: f64 = 0.05;
const MARKER_STROKE_WIDTH: u32 = 3;
const LEGEND_STROKE_WIDTH: u32 = 2;
const DASH_LENGTH: i32 = 6;
const DASH_SPACING: i32 = 4;

/// Draws an assembled diagram to the configured output path, choosing the
/// plotting backend from the file extension.
pub fn render_diagram(diagram: &Diagram, config: &AppConfig) -> Result<()> {
    let size = (config.figure.width, config.figure.height);

    if is_svg_path(&config.output) {
        let root = SVGBackend::new(&config.output, size).into_drawing_area();
        draw_chart(&root, diagram, config)?;
        root.present().map_err(render_err)?;
    } else {
        let root = BitMapBackend::new(&config.output, size).into_drawing_area();
        draw_chart(&root, diagram, config)?;
        root.present().map_err(render_err)?;
    }

    debug!("Figure rendered to {:?}", config.output);
    Ok(())
}

fn is_svg_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

fn render_err(e: impl std::fmt::Display) -> CliError {
    CliError::Render(e.to_string())
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    diagram: &Diagram,
    config: &AppConfig,
) -> Result<()> {
    root.fill(&WHITE).map_err(render_err)?;

    let (x_min, x_max) = diagram
        .x_range()
        .ok_or_else(|| CliError::Render("diagram has no drawable content".to_string()))?;
    let x_margin = (x_max - x_min) * X_MARGIN_FRACTION;

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(50)
        .build_cartesian_2d(
            x_min - x_margin..x_max + x_margin,
            config.figure.y_min..config.figure.y_max,
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(config.figure.x_label.as_str())
        .y_desc(config.figure.y_label.as_str())
        .x_label_formatter(&|_| String::new())
        .draw()
        .map_err(render_err)?;

    for layer in &diagram.layers {
        let color = RGBColor(layer.color.r, layer.color.g, layer.color.b);

        for primitive in &layer.primitives {
            match primitive {
                Primitive::LevelMarker { start, end } => {
                    chart
                        .draw_series(LineSeries::new(
                            [(start.x, start.y), (end.x, end.y)],
                            color.stroke_width(MARKER_STROKE_WIDTH),
                        ))
                        .map_err(render_err)?;
                }
                Primitive::Connector { start, end } => {
                    chart
                        .draw_series(DashedLineSeries::new(
                            [(start.x, start.y), (end.x, end.y)],
                            DASH_LENGTH,
                            DASH_SPACING,
                            color.stroke_width(1),
                        ))
                        .map_err(render_err)?;
                }
                Primitive::TransitionCurve { points } => {
                    chart
                        .draw_series(LineSeries::new(
                            points.iter().map(|p| (p.x, p.y)),
                            &color,
                        ))
                        .map_err(render_err)?;
                }
                Primitive::TransitionMarker { at } => {
                    chart
                        .draw_series(std::iter::once(Circle::new(
                            (at.x, at.y),
                            0,
                            color.filled(),
                        )))
                        .map_err(render_err)?;
                }
            }
        }

        // The legend is built manually from labeled empty series so that the
        // many per-primitive series above stay out of it.
        chart
            .draw_series(LineSeries::new(
                std::iter::empty::<(f64, f64)>(),
                color.stroke_width(LEGEND_STROKE_WIDTH),
            ))
            .map_err(render_err)?
            .label(layer.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    color.stroke_width(LEGEND_STROKE_WIDTH),
                )
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(render_err)?;

    Ok(())
}
