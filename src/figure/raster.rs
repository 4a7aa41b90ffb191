//! PNG preview rasterised from the rendered SVG.

use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::error::{PlotError, Result};

/// Rasterise an SVG document into an RGBA image.
pub fn rasterize(svg: &str) -> Result<RgbaImage> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| PlotError::Render(e.to_string()))?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return Err(PlotError::Render("SVG has zero size".to_string()));
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| PlotError::Render("cannot allocate pixmap".to_string()))?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    RgbaImage::from_raw(size.width(), size.height(), pixmap.take())
        .ok_or_else(|| PlotError::Render("pixmap size mismatch".to_string()))
}

/// Rasterise `svg` and save it as PNG at `path`.
pub fn save_png(path: &Path, svg: &str) -> Result<()> {
    let img = rasterize(svg)?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| PlotError::io(dir, e))?;
    }
    img.save(path).map_err(|e| PlotError::Render(e.to_string()))?;
    debug!(path = %path.display(), width = img.width(), height = img.height(), "png written");
    Ok(())
}
