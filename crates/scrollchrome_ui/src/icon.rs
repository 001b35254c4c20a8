//! Vector icons used by the scrollbar arrows.
//!
//! Icons are kept as raw SVG bytes. Paint surfaces rasterize them at the
//! requested size and color, replacing `currentColor` in the document.

use std::fmt;
use std::sync::Arc;

/// Direction of a scrollbar arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowDirection {
    /// The built-in triangle icon for this direction.
    pub fn default_icon(self) -> SvgIcon {
        match self {
            ArrowDirection::Up => SvgIcon::from_static("triangle-arrow-up", icons::TRIANGLE_ARROW_UP),
            ArrowDirection::Down => {
                SvgIcon::from_static("triangle-arrow-down", icons::TRIANGLE_ARROW_DOWN)
            }
            ArrowDirection::Left => {
                SvgIcon::from_static("triangle-arrow-left", icons::TRIANGLE_ARROW_LEFT)
            }
            ArrowDirection::Right => {
                SvgIcon::from_static("triangle-arrow-right", icons::TRIANGLE_ARROW_RIGHT)
            }
        }
    }
}

/// A named SVG document.
///
/// The name is the cache key used by rasterizing surfaces, so two icons
/// with the same name are expected to carry the same document.
#[derive(Clone, PartialEq, Eq)]
pub struct SvgIcon {
    name: Arc<str>,
    data: Arc<[u8]>,
}

impl SvgIcon {
    pub fn new(name: &str, data: &[u8]) -> Self {
        Self {
            name: Arc::from(name),
            data: Arc::from(data),
        }
    }

    pub fn from_static(name: &'static str, data: &'static [u8]) -> Self {
        Self::new(name, data)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for SvgIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SvgIcon")
            .field("name", &self.name)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Built-in icons.
pub mod icons {
    pub const TRIANGLE_ARROW_UP: &[u8] = include_bytes!("../assets/icons/triangle-arrow-up.svg");
    pub const TRIANGLE_ARROW_DOWN: &[u8] =
        include_bytes!("../assets/icons/triangle-arrow-down.svg");
    pub const TRIANGLE_ARROW_LEFT: &[u8] =
        include_bytes!("../assets/icons/triangle-arrow-left.svg");
    pub const TRIANGLE_ARROW_RIGHT: &[u8] =
        include_bytes!("../assets/icons/triangle-arrow-right.svg");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_icons_use_current_color() {
        for dir in [
            ArrowDirection::Up,
            ArrowDirection::Down,
            ArrowDirection::Left,
            ArrowDirection::Right,
        ] {
            let icon = dir.default_icon();
            let text = std::str::from_utf8(icon.data()).unwrap();
            assert!(text.contains("currentColor"), "{} has no currentColor", icon.name());
        }
    }
}
