//! scrollchrome_ui - Custom-drawn scrollbar and border chrome
//!
//! Computes the geometry of a scrollable control's border, client area,
//! scrollbars and corner, resolves pointer positions to regions of that
//! geometry, paints the regions with themed primitives and turns clicks on
//! scrollbar buttons into (auto-repeating) scroll commands.
//!
//! Painting goes through the [`PaintSurface`] trait; this crate never
//! touches pixels itself.

mod callback;
mod color;
pub mod constants;
pub mod drawable;
mod error;
mod event;
mod geometry;
pub mod icon;
mod image;
mod interaction;
mod metrics;
mod paint;
mod repeat;
mod scroll;
mod host;
pub mod theme;
mod visual_state;

pub use callback::EventHandlers;
pub use color::Color;
pub use drawable::{
    BorderDrawable, CompositeHitResult, DrawContext, Drawable, ImageDrawable, ImageSource,
    InteriorDrawable, InteriorLayout, InteriorRegion, RectangleDrawable, ScrollBarDrawable,
    ScrollBarLayout, ScrollBarRegion, StrokeStyle,
};
pub use error::{Result, ThemeError};
pub use event::{Event, MouseButton};
pub use geometry::{Coord, Point, Rect, Size, Thickness};
pub use host::{ChromeHost, HostState, ScrollCommand};
pub use icon::{ArrowDirection, SvgIcon};
pub use image::ImageHandle;
pub use interaction::{
    ActivityState, DeltaScroll, InteriorScrollActivity, ScrollActivityConfig, ScrollMethodKind,
    ScrollNotification, command_for, default_scroll_method, set_default_scroll_method,
};
pub use metrics::{ScrollBarMetrics, sanitize_scale, snap_to_pixels};
pub use paint::{DrawCommand, PaintSurface, RecordingSurface};
pub use repeat::{RepeatClock, SubscriptionId};
pub use scroll::{Orientation, ScrollEvent, ScrollEventType, ScrollPosition};
pub use theme::{KnownTheme, ThemeInitializeArgs, ThemeInitializeHook, ThemeMetrics};
pub use visual_state::{StateArray, VisualState};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::drawable::{
        CompositeHitResult, DrawContext, Drawable, InteriorDrawable, InteriorRegion,
        ScrollBarRegion,
    };
    pub use crate::event::{Event, MouseButton};
    pub use crate::geometry::{Point, Rect, Size, Thickness};
    pub use crate::host::{ChromeHost, HostState};
    pub use crate::interaction::InteriorScrollActivity;
    pub use crate::paint::PaintSurface;
    pub use crate::repeat::RepeatClock;
    pub use crate::scroll::{Orientation, ScrollPosition};
    pub use crate::theme::KnownTheme;
    pub use crate::visual_state::VisualState;
    pub use crate::Color;
}
