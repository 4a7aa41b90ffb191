//! Vector output of a [`Figure`] through plotters.
//!
//! Subplots are stacked top to bottom in equal bands and all use the figure's
//! shared time range, so their x axes line up.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use crate::error::{PlotError, Result};
use crate::figure::context::RenderContext;
use crate::figure::layout::{finite_segments, Figure, Subplot};
use crate::figure::palette::MARKER_RGB;

fn render_err<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Render(e.to_string())
}

/// Render the figure into an SVG document.
pub fn render_svg_string(figure: &Figure, ctx: &RenderContext) -> Result<String> {
    let mut svg = String::new();
    {
        let backend = SVGBackend::with_string(&mut svg, ctx.canvas_size(figure.len()));
        draw_figure(backend.into_drawing_area(), figure, ctx)?;
    }
    Ok(svg)
}

/// Render the figure and write it to `path`, creating the parent directory if
/// needed. Returns the written document.
pub fn save_svg(path: &Path, figure: &Figure, ctx: &RenderContext) -> Result<String> {
    let svg = render_svg_string(figure, ctx)?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| PlotError::io(dir, e))?;
    }
    std::fs::write(path, &svg).map_err(|e| PlotError::io(path, e))?;
    debug!(path = %path.display(), subplots = figure.len(), "svg written");
    Ok(svg)
}

/// Draw all subplots of `figure` onto `root`.
pub fn draw_figure<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    figure: &Figure,
    ctx: &RenderContext,
) -> Result<()> {
    if figure.is_empty() {
        return Err(PlotError::NothingToPlot);
    }
    root.fill(&WHITE).map_err(render_err)?;
    let bands = root.split_evenly((figure.len(), 1));
    for (band, subplot) in bands.iter().zip(&figure.subplots) {
        draw_subplot(band, subplot, figure.x_range, ctx)?;
    }
    root.present().map_err(render_err)?;
    Ok(())
}

fn draw_subplot<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    subplot: &Subplot,
    x_range: (f64, f64),
    ctx: &RenderContext,
) -> Result<()> {
    let font = |size: u32| FontDesc::new(FontFamily::SansSerif, size as f64, FontStyle::Normal);
    let (y0, y1) = subplot.y_range();

    let mut chart = ChartBuilder::on(area)
        .caption(&subplot.title, font(ctx.font_size))
        .margin(ctx.margin())
        .set_label_area_size(LabelAreaPosition::Left, ctx.y_label_area())
        .set_label_area_size(
            LabelAreaPosition::Bottom,
            ctx.x_label_area(subplot.x_label.is_some()),
        )
        .build_cartesian_2d(x_range.0..x_range.1, y0..y1)
        .map_err(render_err)?;

    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh()
        .label_style(font(ctx.font_size * 3 / 4))
        .axis_desc_style(font(ctx.font_size));
    if let Some(x_label) = subplot.x_label {
        mesh.x_desc(x_label);
    }
    mesh.draw().map_err(render_err)?;
    draw_y_label(area, subplot.y_label, ctx)?;

    let line_style = ShapeStyle {
        color: subplot.color.to_plotters().to_rgba(),
        filled: false,
        stroke_width: ctx.line_width,
    };
    for segment in finite_segments(&subplot.trace) {
        chart
            .draw_series(LineSeries::new(
                segment.iter().map(|p| (p[0], p[1])),
                line_style,
            ))
            .map_err(render_err)?;
    }

    if let Some(spikes) = &subplot.spikes {
        let [r, g, b] = MARKER_RGB;
        let marker = RGBColor(r, g, b).filled();
        let inside = |p: &&[f64; 2]| {
            p[0] >= x_range.0 && p[0] <= x_range.1 && p[1] >= y0 && p[1] <= y1
        };
        chart
            .draw_series(
                spikes
                    .iter()
                    .filter(inside)
                    .map(|p| Circle::new((p[0], p[1]), ctx.marker_radius, marker)),
            )
            .map_err(render_err)?;
    }
    Ok(())
}

/// Draw the y label rotated in the left label area, one text run per line.
/// Mesh descriptions are single-line, so multi-line labels are placed by hand.
fn draw_y_label<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    label: &str,
    ctx: &RenderContext,
) -> Result<()> {
    let (_, height) = area.dim_in_pixel();
    let style = TextStyle::from(FontDesc::new(
        FontFamily::SansSerif,
        ctx.font_size as f64,
        FontStyle::Normal,
    ))
    .transform(FontTransform::Rotate270)
    .pos(Pos::new(HPos::Center, VPos::Center));
    let line_step = (ctx.font_size * 6 / 5) as i32;
    let x0 = ctx.margin() as i32 + line_step / 2;
    for (k, line) in label.lines().enumerate() {
        let at = (x0 + k as i32 * line_step, height as i32 / 2);
        area.draw(&Text::new(line, at, style.clone()))
            .map_err(render_err)?;
    }
    Ok(())
}
