//! Numeric scrollbar metrics.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ARROW_SIZE, DEFAULT_SCROLLBAR_THICKNESS, MIN_THUMB_LENGTH};
use crate::geometry::Size;
use crate::scroll::Orientation;

/// Preferred sizes of a scrollbar, independent of colors.
///
/// One instance is usually shared (behind an `Arc`) by both scrollbars of an
/// interior. It is never mutated in place; replace it wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollBarMetrics {
    /// Width of a vertical scrollbar
    pub vertical_width: f32,
    /// Height of a horizontal scrollbar
    pub horizontal_height: f32,
    /// Arrow glyph size inside the buttons of a vertical scrollbar
    pub vertical_arrow: Size,
    /// Arrow glyph size inside the buttons of a horizontal scrollbar
    pub horizontal_arrow: Size,
    /// Smallest thumb length along the track
    pub min_thumb_length: f32,
}

impl Default for ScrollBarMetrics {
    fn default() -> Self {
        Self {
            vertical_width: DEFAULT_SCROLLBAR_THICKNESS,
            horizontal_height: DEFAULT_SCROLLBAR_THICKNESS,
            vertical_arrow: Size::splat(DEFAULT_ARROW_SIZE),
            horizontal_arrow: Size::splat(DEFAULT_ARROW_SIZE),
            min_thumb_length: MIN_THUMB_LENGTH,
        }
    }
}

/// Round a dip value to whole device pixels and back.
pub fn snap_to_pixels(dips: f32, scale_factor: f32) -> f32 {
    let scale = sanitize_scale(scale_factor);
    (dips * scale).round() / scale
}

/// Scale factors that are not finite and positive are treated as 1.
pub fn sanitize_scale(scale_factor: f32) -> f32 {
    if scale_factor.is_finite() && scale_factor > 0.0 {
        scale_factor
    } else {
        log::warn!("Invalid scale factor {}, using 1.0", scale_factor);
        1.0
    }
}

impl ScrollBarMetrics {
    /// Metrics with the same thickness on both orientations.
    pub fn with_thickness(thickness: f32) -> Self {
        Self {
            vertical_width: thickness,
            horizontal_height: thickness,
            ..Self::default()
        }
    }

    /// Thickness across the short axis, snapped to at least one device pixel.
    pub fn thickness(&self, orientation: Orientation, scale_factor: f32) -> f32 {
        let scale = sanitize_scale(scale_factor);
        let dips = match orientation {
            Orientation::Vertical => self.vertical_width,
            Orientation::Horizontal => self.horizontal_height,
        };
        (dips.max(0.0) * scale).round().max(1.0) / scale
    }

    /// Arrow glyph size for `orientation`, snapped to device pixels.
    pub fn arrow_bitmap_size(&self, orientation: Orientation, scale_factor: f32) -> Size {
        let size = match orientation {
            Orientation::Vertical => self.vertical_arrow,
            Orientation::Horizontal => self.horizontal_arrow,
        };
        Size::new(
            snap_to_pixels(size.width.max(0.0), scale_factor),
            snap_to_pixels(size.height.max(0.0), scale_factor),
        )
    }

    /// Preferred size of a scrollbar laid along `length` dips.
    pub fn preferred_size(&self, orientation: Orientation, length: f32, scale_factor: f32) -> Size {
        let thickness = self.thickness(orientation, scale_factor);
        let length = length.max(0.0);
        match orientation {
            Orientation::Vertical => Size::new(thickness, length),
            Orientation::Horizontal => Size::new(length, thickness),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thickness_snaps_to_pixels() {
        let metrics = ScrollBarMetrics::with_thickness(15.0);
        assert_eq!(metrics.thickness(Orientation::Vertical, 1.0), 15.0);
        // 15 * 1.25 = 18.75 -> 19px -> 15.2 dips
        let t = metrics.thickness(Orientation::Horizontal, 1.25);
        assert!((t - 15.2).abs() < 0.001);
    }

    #[test]
    fn test_thickness_at_least_one_pixel() {
        let metrics = ScrollBarMetrics::with_thickness(0.0);
        assert_eq!(metrics.thickness(Orientation::Vertical, 2.0), 0.5);
    }

    #[test]
    fn test_invalid_scale_uses_one() {
        let metrics = ScrollBarMetrics::default();
        assert_eq!(
            metrics.thickness(Orientation::Vertical, 0.0),
            metrics.vertical_width
        );
    }

    #[test]
    fn test_preferred_size() {
        let metrics = ScrollBarMetrics::with_thickness(15.0);
        assert_eq!(
            metrics.preferred_size(Orientation::Horizontal, 200.0, 1.0),
            Size::new(200.0, 15.0)
        );
    }
}
