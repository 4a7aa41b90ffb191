//! Interactive viewer for a laid-out [`Figure`].
//!
//! [`TraceViewerApp`] shows one egui_plot [`Plot`] per subplot, stacked
//! vertically. All plots share a link group so zooming or panning the time
//! axis of one moves the others, and the hover cursor is mirrored across them.

use eframe::egui;
use egui_plot::{Line, Plot, Points};

use crate::figure::layout::{finite_segments, Figure, Subplot};
use crate::figure::palette::MARKER_RGB;
use crate::figure::RenderContext;

/// Minimum on-screen height of one subplot; below this the stack scrolls.
const MIN_PLOT_HEIGHT: f32 = 120.0;

// ─────────────────────────────────────────────────────────────────────────────
// TraceViewerApp
// ─────────────────────────────────────────────────────────────────────────────

/// Standalone viewer implementing [`eframe::App`].
pub struct TraceViewerApp {
    figure: Figure,
    ctx: RenderContext,
    /// Headline shown above the stack (usually the input file).
    pub headline: Option<String>,
    /// Set by the "Reset View" button; consumed on the next frame.
    reset_view: bool,
    /// egui id shared by every plot so their x axes and cursors are linked.
    link_group: egui::Id,
}

impl TraceViewerApp {
    pub fn new(figure: Figure, ctx: RenderContext) -> Self {
        Self {
            figure,
            ctx,
            headline: None,
            reset_view: false,
            link_group: egui::Id::new("cpgplot_time_axis"),
        }
    }

    /// Render the stacked plots into `ui`.
    pub fn show_stack(&mut self, ui: &mut egui::Ui) {
        let n = self.figure.len().max(1);
        // Reserve room for each title row.
        let title_h = ui.text_style_height(&egui::TextStyle::Body) + ui.spacing().item_spacing.y;
        let plot_h = ((ui.available_height() / n as f32) - title_h).max(MIN_PLOT_HEIGHT);
        let reset = std::mem::take(&mut self.reset_view);

        egui::ScrollArea::vertical().show(ui, |ui| {
            for subplot in &self.figure.subplots {
                ui.vertical_centered(|ui| ui.strong(&subplot.title));
                self.show_subplot(ui, subplot, plot_h, reset);
            }
        });
    }

    fn show_subplot(&self, ui: &mut egui::Ui, subplot: &Subplot, height: f32, reset: bool) {
        let (x0, x1) = self.figure.x_range;
        let (y0, y1) = subplot.y_range();
        let mut plot = Plot::new(("cpgplot_subplot", subplot.column_index))
            .height(height)
            .link_axis(self.link_group, [true, false])
            .link_cursor(self.link_group, [true, false])
            .default_x_bounds(x0, x1)
            .default_y_bounds(y0, y1)
            .y_axis_label(subplot.y_label)
            .allow_scroll(false);
        if let Some(x_label) = subplot.x_label {
            plot = plot.x_axis_label(x_label);
        }
        if reset {
            plot = plot.reset();
        }

        let color = subplot.color.to_egui();
        let width = self.ctx.line_width as f32;
        let radius = self.ctx.marker_radius as f32;
        plot.show(ui, |plot_ui| {
            for segment in finite_segments(&subplot.trace) {
                plot_ui.line(
                    Line::new(subplot.title.as_str(), segment.to_vec())
                        .color(color)
                        .width(width),
                );
            }
            if let Some(spikes) = &subplot.spikes {
                let [r, g, b] = MARKER_RGB;
                plot_ui.points(
                    Points::new(format!("{} spikes", subplot.title), spikes.clone())
                        .radius(radius)
                        .color(egui::Color32::from_rgb(r, g, b)),
                );
            }
        });
    }
}

impl eframe::App for TraceViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("cpgplot_controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(h) = &self.headline {
                    ui.heading(h);
                }
                ui.label("Left drag: pan  |  Right drag: zoom box  |  Double click: fit");
                if ui.button("Reset View").clicked() {
                    self.reset_view = true;
                }
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| self.show_stack(ui));
    }
}
