//! Fixed trace palette.
//!
//! Subplot `i` (1-based, counting value columns) always gets
//! `PALETTE[(i - 1) % PALETTE.len()]`, so a column position keeps its colour
//! from run to run regardless of the data.

/// A named CSS colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Teal,
    Brown,
    Blue,
    Green,
    Maroon,
}

impl NamedColor {
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            NamedColor::Teal => [0, 128, 128],
            NamedColor::Brown => [165, 42, 42],
            NamedColor::Blue => [0, 0, 255],
            NamedColor::Green => [0, 128, 0],
            NamedColor::Maroon => [128, 0, 0],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            NamedColor::Teal => "teal",
            NamedColor::Brown => "brown",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Maroon => "maroon",
        }
    }

    pub fn to_egui(self) -> egui::Color32 {
        let [r, g, b] = self.rgb();
        egui::Color32::from_rgb(r, g, b)
    }

    pub fn to_plotters(self) -> plotters::style::RGBColor {
        let [r, g, b] = self.rgb();
        plotters::style::RGBColor(r, g, b)
    }
}

pub const PALETTE: [NamedColor; 10] = [
    NamedColor::Teal,
    NamedColor::Brown,
    NamedColor::Blue,
    NamedColor::Green,
    NamedColor::Maroon,
    NamedColor::Teal,
    NamedColor::Brown,
    NamedColor::Blue,
    NamedColor::Green,
    NamedColor::Maroon,
];

/// Colour of the subplot for value column `column_index` (1-based; 0 is time).
pub fn color_for_column(column_index: usize) -> NamedColor {
    PALETTE[column_index.saturating_sub(1) % PALETTE.len()]
}

/// Colour used for spike markers; distinct from every trace colour.
pub const MARKER_RGB: [u8; 3] = [255, 127, 14];
