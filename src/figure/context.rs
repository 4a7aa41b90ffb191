//! Pixel metrics shared by the SVG renderer and the viewer.

use crate::config::StyleConfig;

/// Drawing parameters for one run.
///
/// Built once from the configuration and handed to every drawing step; the
/// renderers keep no styling state of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    pub font_size: u32,
    pub width: u32,
    pub subplot_height: u32,
    pub line_width: u32,
    pub marker_radius: u32,
}

impl RenderContext {
    pub fn new(style: &StyleConfig) -> Self {
        Self {
            font_size: style.font_size.max(1),
            width: style.width_px.max(100),
            subplot_height: style.subplot_height_px.max(40),
            line_width: style.line_width.max(1),
            marker_radius: style.marker_radius.max(1),
        }
    }

    /// Total canvas size for `n` stacked subplots.
    pub fn canvas_size(&self, n: usize) -> (u32, u32) {
        (self.width, self.subplot_height * n.max(1) as u32)
    }

    /// Space reserved left of each plot for the (two-line) y label and tick labels.
    pub fn y_label_area(&self) -> u32 {
        self.font_size * 6
    }

    /// Space reserved below a plot for tick labels, plus the time label on the last one.
    pub fn x_label_area(&self, with_label: bool) -> u32 {
        if with_label {
            self.font_size * 3
        } else {
            self.font_size * 2
        }
    }

    pub fn margin(&self) -> u32 {
        self.font_size / 2 + 4
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(&StyleConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_style_values_are_clamped() {
        let style = StyleConfig {
            font_size: 0,
            width_px: 10,
            subplot_height_px: 5,
            line_width: 0,
            marker_radius: 0,
        };
        let ctx = RenderContext::new(&style);
        assert_eq!(ctx.font_size, 1);
        assert_eq!(ctx.canvas_size(2), (100, 80));
        assert_eq!(ctx.line_width, 1);
    }
}
