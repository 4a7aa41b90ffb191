//! Output side: layout, palette and the file renderers.

pub mod context;
pub mod layout;
pub mod palette;
pub mod raster;
pub mod svg;

pub use context::RenderContext;
pub use layout::{layout, Figure, Subplot};
pub use palette::{NamedColor, PALETTE};
