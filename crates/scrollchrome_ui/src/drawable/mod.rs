//! Drawable primitives.
//!
//! A drawable owns its bounds and a visibility flag and knows how to paint
//! itself onto a [`PaintSurface`]. Primitives (rectangle, image, border) are
//! composed by the two region engines (scrollbar, interior).

mod border;
mod image;
mod interior;
mod rectangle;
mod scrollbar;

pub use border::{BorderDrawable, BorderEdge};
pub use image::{ImageDrawable, ImageSource};
pub use interior::{CompositeHitResult, InteriorDrawable, InteriorLayout, InteriorRegion};
pub use rectangle::{RectangleDrawable, StrokeStyle};
pub use scrollbar::{ScrollBarDrawable, ScrollBarLayout, ScrollBarRegion};

use crate::geometry::{Rect, Size};
use crate::host::ChromeHost;
use crate::metrics::sanitize_scale;
use crate::paint::PaintSurface;
use crate::scroll::{Orientation, ScrollPosition};
use crate::visual_state::VisualState;

/// Everything a drawable reads from its owning control during one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawContext {
    pub scale_factor: f32,
    pub visual_state: VisualState,
    pub vertical: ScrollPosition,
    pub horizontal: ScrollPosition,
}

impl Default for DrawContext {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            visual_state: VisualState::Normal,
            vertical: ScrollPosition::default(),
            horizontal: ScrollPosition::default(),
        }
    }
}

impl DrawContext {
    /// Snapshot the host's state.
    pub fn from_host(host: &dyn ChromeHost) -> Self {
        Self {
            scale_factor: sanitize_scale(host.scale_factor()),
            visual_state: host.visual_state(),
            vertical: host.scroll_position(Orientation::Vertical),
            horizontal: host.scroll_position(Orientation::Horizontal),
        }
    }

    pub fn with_visual_state(mut self, state: VisualState) -> Self {
        self.visual_state = state;
        self
    }

    pub fn position(&self, orientation: Orientation) -> ScrollPosition {
        match orientation {
            Orientation::Vertical => self.vertical,
            Orientation::Horizontal => self.horizontal,
        }
    }
}

/// Bounds and visibility shared by every drawable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawableBase {
    bounds: Rect,
    visible: bool,
}

impl Default for DrawableBase {
    fn default() -> Self {
        Self {
            bounds: Rect::ZERO,
            visible: true,
        }
    }
}

impl DrawableBase {
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Assign new bounds. Returns false (and does nothing) when unchanged.
    pub fn set_bounds(&mut self, bounds: Rect) -> bool {
        if self.bounds == bounds {
            return false;
        }
        self.bounds = bounds;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Common interface of all drawables.
pub trait Drawable {
    fn base(&self) -> &DrawableBase;

    fn base_mut(&mut self) -> &mut DrawableBase;

    fn bounds(&self) -> Rect {
        self.base().bounds()
    }

    /// Returns true when the bounds actually changed.
    fn set_bounds(&mut self, bounds: Rect) -> bool {
        self.base_mut().set_bounds(bounds)
    }

    fn is_visible(&self) -> bool {
        self.base().is_visible()
    }

    fn set_visible(&mut self, visible: bool) {
        self.base_mut().set_visible(visible);
    }

    /// Preferred size. Defaults to the current bounds.
    fn measure(&self, _ctx: &DrawContext) -> Size {
        self.bounds().size()
    }

    /// Paint at the current bounds.
    fn draw(&self, ctx: &DrawContext, surface: &mut dyn PaintSurface);
}
