//! Scrollbar drawable: layout, hit testing and themed painting.
//!
//! A scrollbar is split along its long axis into a start button, the track
//! and an end button. Buttons are squares of the short-axis extent. When
//! there is something to scroll, the track is further split into the
//! before-thumb segment, the thumb and the after-thumb segment.

use std::sync::Arc;

use crate::geometry::{Point, Rect, Size};
use crate::icon::SvgIcon;
use crate::metrics::{ScrollBarMetrics, snap_to_pixels};
use crate::paint::PaintSurface;
use crate::scroll::{Orientation, ScrollPosition};
use crate::theme::{THEMED_STATES, ThemeMetrics};
use crate::visual_state::{StateArray, VisualState};

use super::{DrawContext, Drawable, DrawableBase, ImageDrawable, RectangleDrawable, StrokeStyle};

/// Sub-region of a scrollbar, in the scrollbar's own coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollBarRegion {
    #[default]
    None,
    Thumb,
    StartButton,
    EndButton,
    BeforeThumb,
    AfterThumb,
}

/// Rectangles of one scrollbar layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollBarLayout {
    pub background: Rect,
    pub start_button: Rect,
    pub end_button: Rect,
    pub thumb: Rect,
    pub before_thumb: Rect,
    pub after_thumb: Rect,
}

impl ScrollBarLayout {
    /// Hit-test order; the thumb wins over rounding slack at the track edges.
    pub const HIT_ORDER: [ScrollBarRegion; 5] = [
        ScrollBarRegion::Thumb,
        ScrollBarRegion::StartButton,
        ScrollBarRegion::EndButton,
        ScrollBarRegion::BeforeThumb,
        ScrollBarRegion::AfterThumb,
    ];

    /// Rectangle owned by `region`. `None` maps to the background.
    pub fn get(&self, region: ScrollBarRegion) -> Rect {
        match region {
            ScrollBarRegion::None => self.background,
            ScrollBarRegion::Thumb => self.thumb,
            ScrollBarRegion::StartButton => self.start_button,
            ScrollBarRegion::EndButton => self.end_button,
            ScrollBarRegion::BeforeThumb => self.before_thumb,
            ScrollBarRegion::AfterThumb => self.after_thumb,
        }
    }

    /// True when the layout has a thumb (range > page size).
    pub fn has_thumb(&self) -> bool {
        !self.thumb.is_empty()
    }

    /// Resolve `point` to a region. Points outside every sub-rectangle are
    /// `None`.
    pub fn hit_test(&self, point: Point) -> ScrollBarRegion {
        Self::HIT_ORDER
            .into_iter()
            .find(|region| self.get(*region).contains(point))
            .unwrap_or(ScrollBarRegion::None)
    }
}

/// Offset and length of the thumb along a track of `track` dips, or `None`
/// when there is nothing to scroll.
pub(crate) fn thumb_extent(
    track: f32,
    position: ScrollPosition,
    min_length: f32,
    scale_factor: f32,
) -> Option<(f32, f32)> {
    if !position.can_scroll() || track <= 0.0 {
        return None;
    }

    let ratio = (position.page_size.max(0) as f32 / position.range.max(1) as f32).min(1.0);
    let length = snap_to_pixels(track * ratio, scale_factor)
        .max(min_length.max(0.0).min(track))
        .min(track);

    let travel = track - length;
    let fraction =
        position.clamp(position.position) as f32 / position.max_position().max(1) as f32;
    let offset = snap_to_pixels(travel * fraction, scale_factor).clamp(0.0, travel);

    Some((offset, length))
}

fn axis_rect(bounds: Rect, orientation: Orientation, start: f32, length: f32) -> Rect {
    let length = length.max(0.0);
    match orientation {
        Orientation::Vertical => Rect::new(bounds.x, bounds.y + start, bounds.width, length),
        Orientation::Horizontal => Rect::new(bounds.x + start, bounds.y, length, bounds.height),
    }
}

/// A themed scrollbar.
#[derive(Debug, Clone)]
pub struct ScrollBarDrawable {
    base: DrawableBase,
    orientation: Orientation,
    metrics: Arc<ScrollBarMetrics>,

    pub background: StateArray<Option<RectangleDrawable>>,
    pub thumb: StateArray<Option<RectangleDrawable>>,
    pub up_arrow: StateArray<Option<ImageDrawable>>,
    pub down_arrow: StateArray<Option<ImageDrawable>>,
    pub left_arrow: StateArray<Option<ImageDrawable>>,
    pub right_arrow: StateArray<Option<ImageDrawable>>,
    pub start_button: StateArray<Option<RectangleDrawable>>,
    pub end_button: StateArray<Option<RectangleDrawable>>,

    pub arrow_margin: StateArray<f32>,
    pub thumb_margin: StateArray<f32>,
    pub use_arrow_size_for_thumb: StateArray<bool>,
    pub arrows_visible: StateArray<bool>,
    pub thumb_visible: StateArray<bool>,
    pub buttons_visible: StateArray<bool>,
}

impl ScrollBarDrawable {
    pub fn new(orientation: Orientation, metrics: Arc<ScrollBarMetrics>) -> Self {
        let defaults = ThemeMetrics::new();
        Self {
            base: DrawableBase::default(),
            orientation,
            metrics,
            background: StateArray::default(),
            thumb: StateArray::default(),
            up_arrow: StateArray::default(),
            down_arrow: StateArray::default(),
            left_arrow: StateArray::default(),
            right_arrow: StateArray::default(),
            start_button: StateArray::default(),
            end_button: StateArray::default(),
            arrow_margin: defaults.arrow_margin,
            thumb_margin: defaults.thumb_margin,
            use_arrow_size_for_thumb: defaults.use_arrow_size_for_thumb,
            arrows_visible: defaults.arrows_visible,
            thumb_visible: defaults.thumb_visible,
            buttons_visible: defaults.buttons_visible,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn metrics(&self) -> &Arc<ScrollBarMetrics> {
        &self.metrics
    }

    /// Replace the metrics wholesale.
    pub fn set_metrics(&mut self, metrics: Arc<ScrollBarMetrics>) {
        self.metrics = metrics;
    }

    /// Compute the layout of a scrollbar placed at `bounds`.
    pub fn layout_in(
        &self,
        bounds: Rect,
        position: ScrollPosition,
        scale_factor: f32,
    ) -> ScrollBarLayout {
        let bounds = bounds.normalized();
        let (long, short) = match self.orientation {
            Orientation::Vertical => (bounds.height, bounds.width),
            Orientation::Horizontal => (bounds.width, bounds.height),
        };

        let button = short.min(long / 2.0).max(0.0);
        let track = (long - 2.0 * button).max(0.0);
        let start_button = axis_rect(bounds, self.orientation, 0.0, button);
        let end_button = axis_rect(bounds, self.orientation, long - button, button);

        let (thumb, before_thumb, after_thumb) =
            match thumb_extent(track, position, self.metrics.min_thumb_length, scale_factor) {
                Some((offset, length)) => (
                    axis_rect(bounds, self.orientation, button + offset, length),
                    axis_rect(bounds, self.orientation, button, offset),
                    axis_rect(
                        bounds,
                        self.orientation,
                        button + offset + length,
                        track - offset - length,
                    ),
                ),
                None => {
                    let empty = axis_rect(bounds, self.orientation, button, 0.0);
                    (empty, empty, empty)
                }
            };

        let layout = ScrollBarLayout {
            background: bounds,
            start_button,
            end_button,
            thumb,
            before_thumb,
            after_thumb,
        };
        log::trace!("{:?} scrollbar layout: {:?}", self.orientation, layout);
        layout
    }

    /// Layout at the current bounds.
    pub fn layout(&self, ctx: &DrawContext) -> ScrollBarLayout {
        self.layout_in(
            self.bounds(),
            ctx.position(self.orientation),
            ctx.scale_factor,
        )
    }

    pub fn hit_test(&self, layout: &ScrollBarLayout, point: Point) -> ScrollBarRegion {
        layout.hit_test(point)
    }

    fn start_arrow(&self) -> &StateArray<Option<ImageDrawable>> {
        match self.orientation {
            Orientation::Vertical => &self.up_arrow,
            Orientation::Horizontal => &self.left_arrow,
        }
    }

    fn end_arrow(&self) -> &StateArray<Option<ImageDrawable>> {
        match self.orientation {
            Orientation::Vertical => &self.down_arrow,
            Orientation::Horizontal => &self.right_arrow,
        }
    }

    /// Arrow size inside `button`: the theme size, shrunk to fit the button
    /// minus the arrow margin on each axis.
    pub fn real_arrow_size(&self, button: Rect, state: VisualState, scale_factor: f32) -> Size {
        let margin = self.arrow_margin.get(state).max(0.0);
        let theme = self.metrics.arrow_bitmap_size(self.orientation, scale_factor);
        let available = Size::new(button.width - 2.0 * margin, button.height - 2.0 * margin);
        theme.min(available).non_negative()
    }

    /// Paint background, buttons and arrows. The thumb is not painted.
    pub fn draw_chrome(
        &self,
        ctx: &DrawContext,
        layout: &ScrollBarLayout,
        surface: &mut dyn PaintSurface,
    ) {
        if !self.is_visible() {
            return;
        }
        let state = ctx.visual_state;

        if let Some(background) = self.background.get_or_normal(state) {
            background.draw_in(layout.background, surface);
        }

        if *self.buttons_visible.get(state) {
            if let Some(button) = self.start_button.get_or_normal(state) {
                button.draw_in(layout.start_button, surface);
            }
            if let Some(button) = self.end_button.get_or_normal(state) {
                button.draw_in(layout.end_button, surface);
            }
        }

        if *self.arrows_visible.get(state) {
            let margin = self.arrow_margin.get(state).max(0.0);
            let arrows = [
                (self.start_arrow(), layout.start_button),
                (self.end_arrow(), layout.end_button),
            ];
            for (table, button) in arrows {
                let Some(arrow) = table.get_or_normal(state) else {
                    continue;
                };
                let size = self.real_arrow_size(button, state, ctx.scale_factor);
                arrow.draw_sized(button.with_padding(margin), size, surface);
            }
        }
    }

    /// Rectangle the thumb primitive paints into, derived from the layout's
    /// thumb rectangle and the thumb margin metrics.
    pub fn thumb_paint_rect(&self, thumb: Rect, state: VisualState, scale_factor: f32) -> Rect {
        let margin = self.thumb_margin.get(state).max(0.0);
        let (short, arrow_short) = match self.orientation {
            Orientation::Vertical => (
                thumb.width,
                self.metrics.arrow_bitmap_size(self.orientation, scale_factor).width,
            ),
            Orientation::Horizontal => (
                thumb.height,
                self.metrics.arrow_bitmap_size(self.orientation, scale_factor).height,
            ),
        };

        let mut extent = (short - 2.0 * margin).max(0.0);
        if *self.use_arrow_size_for_thumb.get(state) {
            extent = extent.min(arrow_short);
        }

        match self.orientation {
            Orientation::Vertical => Rect::new(
                thumb.x + (thumb.width - extent) / 2.0,
                thumb.y,
                extent,
                thumb.height,
            ),
            Orientation::Horizontal => Rect::new(
                thumb.x,
                thumb.y + (thumb.height - extent) / 2.0,
                thumb.width,
                extent,
            ),
        }
    }

    /// Paint the thumb primitive at the layout's thumb rectangle.
    pub fn draw_thumb(
        &self,
        ctx: &DrawContext,
        layout: &ScrollBarLayout,
        surface: &mut dyn PaintSurface,
    ) {
        let state = ctx.visual_state;
        if !self.is_visible() || !layout.has_thumb() || !*self.thumb_visible.get(state) {
            return;
        }
        if let Some(thumb) = self.thumb.get_or_normal(state) {
            thumb.draw_in(
                self.thumb_paint_rect(layout.thumb, state, ctx.scale_factor),
                surface,
            );
        }
    }

    /// Rebuild the per-state primitives from `theme` and fire its
    /// initialize hook with this scrollbar as the target.
    ///
    /// Primitives are created for the themed states only; other states fall
    /// back to `Normal` when painting. Margins and visibility flags are
    /// copied for every state.
    pub fn set_theme_metrics(&mut self, theme: &ThemeMetrics) {
        self.apply_theme(theme);
        theme.raise_initialize_scrollbar(self);
    }

    /// Populate primitives without firing the hook. The interior uses this
    /// for its own bars and raises the hook once for itself.
    pub(crate) fn apply_theme(&mut self, theme: &ThemeMetrics) {
        let themed = |state: VisualState| THEMED_STATES.contains(&state);

        self.background = theme.background.map(|state, color| {
            color
                .filter(|_| themed(state))
                .map(RectangleDrawable::filled)
        });

        self.thumb = theme.thumb_background.map(|state, fill| {
            let border = theme
                .thumb_border
                .get(state)
                .map(|color| StrokeStyle::new(color, 1.0));
            if !themed(state) || (fill.is_none() && border.is_none()) {
                None
            } else {
                Some(RectangleDrawable::new(*fill, border))
            }
        });

        let arrows = |icons: &StateArray<Option<SvgIcon>>| {
            icons.map(|state, icon| match (icon, *theme.arrow.get(state)) {
                (Some(icon), Some(color)) if themed(state) => {
                    Some(ImageDrawable::icon(icon.clone(), color))
                }
                _ => None,
            })
        };
        self.up_arrow = arrows(&theme.up_arrow);
        self.down_arrow = arrows(&theme.down_arrow);
        self.left_arrow = arrows(&theme.left_arrow);
        self.right_arrow = arrows(&theme.right_arrow);

        self.arrow_margin = theme.arrow_margin.clone();
        self.thumb_margin = theme.thumb_margin.clone();
        self.use_arrow_size_for_thumb = theme.use_arrow_size_for_thumb.clone();
        self.arrows_visible = theme.arrows_visible.clone();
        self.thumb_visible = theme.thumb_visible.clone();
        self.buttons_visible = theme.buttons_visible.clone();
    }
}

impl Drawable for ScrollBarDrawable {
    fn base(&self) -> &DrawableBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut DrawableBase {
        &mut self.base
    }

    fn measure(&self, ctx: &DrawContext) -> Size {
        let bounds = self.bounds();
        let length = match self.orientation {
            Orientation::Vertical => bounds.height,
            Orientation::Horizontal => bounds.width,
        };
        self.metrics
            .preferred_size(self.orientation, length, ctx.scale_factor)
    }

    fn draw(&self, ctx: &DrawContext, surface: &mut dyn PaintSurface) {
        let layout = self.layout(ctx);
        self.draw_chrome(ctx, &layout, surface);
        self.draw_thumb(ctx, &layout, surface);
    }
}
