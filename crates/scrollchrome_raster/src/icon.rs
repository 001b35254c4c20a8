//! Icon rasterization and caching.
//!
//! Icons are SVG documents using `currentColor`; the color is substituted
//! before parsing, so each (icon, size, color) triple is rasterized once.

use std::collections::HashMap;

use scrollchrome_ui::{Color, SvgIcon};
use tiny_skia::Pixmap;

use crate::error::{RasterError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct IconKey {
    name: String,
    width: u32,
    height: u32,
    rgb: [u8; 3],
}

/// A cache of rasterized icons.
///
/// Alpha is not part of the key; it is applied as paint opacity when the
/// icon is composited.
#[derive(Default)]
pub struct IconCache {
    cache: HashMap<IconKey, Pixmap>,
}

impl IconCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an icon from cache, or rasterize and cache it.
    pub fn get_or_rasterize(
        &mut self,
        icon: &SvgIcon,
        width: u32,
        height: u32,
        color: Color,
    ) -> Result<&Pixmap> {
        let [r, g, b, _] = color.to_rgba8();
        let key = IconKey {
            name: icon.name().to_string(),
            width,
            height,
            rgb: [r, g, b],
        };

        if !self.cache.contains_key(&key) {
            let pixmap = rasterize_svg(icon.data(), width, height, color)?;
            self.cache.insert(key.clone(), pixmap);
        }
        self.cache
            .get(&key)
            .ok_or(RasterError::PixmapCreation { width, height })
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl std::fmt::Debug for IconCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconCache")
            .field("entries", &self.cache.len())
            .finish()
    }
}

/// Rasterize an SVG into a `width` x `height` pixmap.
///
/// The image is scaled uniformly to fit and centered; `currentColor` is
/// replaced with the opaque RGB part of `color`.
pub fn rasterize_svg(svg_data: &[u8], width: u32, height: u32, color: Color) -> Result<Pixmap> {
    let svg_str =
        std::str::from_utf8(svg_data).map_err(|e| RasterError::SvgParse(e.to_string()))?;
    let svg_with_color = svg_str.replace("currentColor", &color.to_hex_rgb());

    log::debug!(
        "Rasterizing SVG: {} bytes, target size: {}x{}",
        svg_data.len(),
        width,
        height
    );

    let tree = resvg::usvg::Tree::from_str(&svg_with_color, &resvg::usvg::Options::default())
        .map_err(|e| RasterError::SvgParse(e.to_string()))?;

    let mut pixmap =
        Pixmap::new(width, height).ok_or(RasterError::PixmapCreation { width, height })?;

    let svg_size = tree.size();
    let scale = (width as f32 / svg_size.width()).min(height as f32 / svg_size.height());
    let dx = (width as f32 - svg_size.width() * scale) / 2.0;
    let dy = (height as f32 - svg_size.height() * scale) / 2.0;

    let transform = tiny_skia::Transform::from_scale(scale, scale).post_translate(dx, dy);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap)
}
