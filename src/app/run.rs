//! Entry point for showing a figure in a native window.

use eframe::egui;

use crate::figure::{Figure, RenderContext};

use super::TraceViewerApp;

/// Open a native window showing `figure`.
///
/// The call blocks until the window is closed.
pub fn run_viewer(
    figure: Figure,
    ctx: RenderContext,
    title: &str,
    headline: Option<String>,
) -> eframe::Result<()> {
    let mut app = TraceViewerApp::new(figure, ctx);
    app.headline = headline;

    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(egui::vec2(1400.0, 900.0)),
        ..Default::default()
    };

    eframe::run_native(
        title,
        opts,
        Box::new(|cc| {
            // Match the white background of the saved figure.
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(app))
        }),
    )
}
