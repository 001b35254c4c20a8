//! scrollchrome_raster - CPU rasterization of scrollbar chrome
//!
//! Implements [`scrollchrome_ui::PaintSurface`] on a tiny-skia pixmap.
//! Icons are rendered with resvg and cached per size and color.

mod error;
pub mod icon;
mod surface;

pub use error::{RasterError, Result};
pub use icon::{rasterize_svg, IconCache};
pub use surface::PixmapSurface;
