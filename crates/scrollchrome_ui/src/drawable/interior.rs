//! Interior drawable: the chrome of a scrollable control.
//!
//! Splits the control bounds into border strips, the client rectangle, the
//! two scrollbars and the corner between them, resolves points to those
//! regions and paints them.

use std::sync::{Arc, PoisonError, RwLock};

use crate::color::Color;
use crate::constants::DEFAULT_BORDER_WIDTH;
use crate::geometry::{Point, Rect, Thickness};
use crate::host::ChromeHost;
use crate::metrics::ScrollBarMetrics;
use crate::paint::PaintSurface;
use crate::scroll::Orientation;
use crate::theme::{KnownTheme, THEMED_STATES, ThemeMetrics};
use crate::visual_state::StateArray;

use super::{
    BorderDrawable, BorderEdge, DrawContext, Drawable, DrawableBase, RectangleDrawable,
    ScrollBarDrawable, ScrollBarRegion,
};

/// Region of an interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteriorRegion {
    #[default]
    None,
    Corner,
    TopBorder,
    BottomBorder,
    LeftBorder,
    RightBorder,
    VertScrollBar,
    HorzScrollBar,
    ClientRect,
}

impl InteriorRegion {
    /// The scrollbar orientation of a scrollbar region.
    pub fn orientation(self) -> Option<Orientation> {
        match self {
            InteriorRegion::VertScrollBar => Some(Orientation::Vertical),
            InteriorRegion::HorzScrollBar => Some(Orientation::Horizontal),
            _ => None,
        }
    }
}

/// Result of [`InteriorDrawable::hit_tests`].
///
/// `scrollbar` is only meaningful when `interior` is a scrollbar region;
/// otherwise it is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompositeHitResult {
    pub interior: InteriorRegion,
    pub scrollbar: ScrollBarRegion,
}

impl CompositeHitResult {
    pub fn new(interior: InteriorRegion, scrollbar: ScrollBarRegion) -> Self {
        Self {
            interior,
            scrollbar,
        }
    }

    pub fn is_corner(&self) -> bool {
        self.interior == InteriorRegion::Corner
    }

    /// Orientation of the scrollbar that was hit, if any.
    pub fn orientation(&self) -> Option<Orientation> {
        self.interior.orientation()
    }
}

/// Rectangles of one interior layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteriorLayout {
    pub bounds: Rect,
    pub inside_border: Rect,
    pub client: Rect,
    pub top_border: Rect,
    pub bottom_border: Rect,
    pub left_border: Rect,
    pub right_border: Rect,
    pub vert_scrollbar: Rect,
    pub horz_scrollbar: Rect,
    pub corner: Rect,
}

impl InteriorLayout {
    /// Hit-test order. Corner and scrollbars win over the client rectangle
    /// where they touch.
    pub const HIT_ORDER: [InteriorRegion; 8] = [
        InteriorRegion::Corner,
        InteriorRegion::VertScrollBar,
        InteriorRegion::HorzScrollBar,
        InteriorRegion::ClientRect,
        InteriorRegion::TopBorder,
        InteriorRegion::BottomBorder,
        InteriorRegion::LeftBorder,
        InteriorRegion::RightBorder,
    ];

    pub fn get(&self, region: InteriorRegion) -> Rect {
        match region {
            InteriorRegion::None => Rect::ZERO,
            InteriorRegion::Corner => self.corner,
            InteriorRegion::TopBorder => self.top_border,
            InteriorRegion::BottomBorder => self.bottom_border,
            InteriorRegion::LeftBorder => self.left_border,
            InteriorRegion::RightBorder => self.right_border,
            InteriorRegion::VertScrollBar => self.vert_scrollbar,
            InteriorRegion::HorzScrollBar => self.horz_scrollbar,
            InteriorRegion::ClientRect => self.client,
        }
    }

    /// Non-empty regions with their rectangles, in hit-test order.
    pub fn regions(&self) -> Vec<(InteriorRegion, Rect)> {
        Self::HIT_ORDER
            .into_iter()
            .map(|region| (region, self.get(region)))
            .filter(|(_, rect)| !rect.is_empty())
            .collect()
    }

    pub fn hit_test(&self, point: Point) -> InteriorRegion {
        if !self.bounds.contains(point) {
            return InteriorRegion::None;
        }
        Self::HIT_ORDER
            .into_iter()
            .find(|region| self.get(*region).contains(point))
            .unwrap_or(InteriorRegion::None)
    }
}

/// Border, background, scrollbars and corner of a scrollable control.
#[derive(Debug, Clone)]
pub struct InteriorDrawable {
    base: DrawableBase,
    metrics: Arc<ScrollBarMetrics>,

    pub border: Option<BorderDrawable>,
    pub background: Option<RectangleDrawable>,
    pub corner: StateArray<Option<RectangleDrawable>>,
    /// Whether the corner is painted and hit-testable when both bars show.
    pub show_corner: bool,
    pub vertical: ScrollBarDrawable,
    pub horizontal: ScrollBarDrawable,
}

impl Default for InteriorDrawable {
    fn default() -> Self {
        Self::new(Arc::new(ScrollBarMetrics::default()))
    }
}

impl InteriorDrawable {
    /// An unthemed interior with both scrollbars visible.
    pub fn new(metrics: Arc<ScrollBarMetrics>) -> Self {
        Self {
            base: DrawableBase::default(),
            border: None,
            background: None,
            corner: StateArray::default(),
            show_corner: true,
            vertical: ScrollBarDrawable::new(Orientation::Vertical, metrics.clone()),
            horizontal: ScrollBarDrawable::new(Orientation::Horizontal, metrics.clone()),
            metrics,
        }
    }

    /// An interior populated from a built-in theme.
    pub fn themed(theme: KnownTheme, is_dark: bool) -> Self {
        let mut interior = Self::default();
        interior.set_theme_metrics(&ThemeMetrics::get(theme, is_dark), is_dark);
        interior
    }

    pub fn metrics(&self) -> &Arc<ScrollBarMetrics> {
        &self.metrics
    }

    /// Replace the metrics of the interior and both scrollbars.
    pub fn set_metrics(&mut self, metrics: Arc<ScrollBarMetrics>) {
        self.vertical.set_metrics(metrics.clone());
        self.horizontal.set_metrics(metrics.clone());
        self.metrics = metrics;
    }

    pub fn scrollbar(&self, orientation: Orientation) -> &ScrollBarDrawable {
        match orientation {
            Orientation::Vertical => &self.vertical,
            Orientation::Horizontal => &self.horizontal,
        }
    }

    pub fn scrollbar_mut(&mut self, orientation: Orientation) -> &mut ScrollBarDrawable {
        match orientation {
            Orientation::Vertical => &mut self.vertical,
            Orientation::Horizontal => &mut self.horizontal,
        }
    }

    pub fn set_scrollbar_visible(&mut self, orientation: Orientation, visible: bool) {
        self.scrollbar_mut(orientation).set_visible(visible);
    }

    /// True when a visible border with non-zero width is present.
    pub fn has_border(&self) -> bool {
        self.border.as_ref().is_some_and(BorderDrawable::has_border)
    }

    pub fn border_widths(&self) -> Thickness {
        match &self.border {
            Some(border) => border.effective_widths(),
            None => Thickness::ZERO,
        }
    }

    /// True when both scrollbars and the corner are visible.
    pub fn has_corner(&self) -> bool {
        self.show_corner && self.vertical.is_visible() && self.horizontal.is_visible()
    }

    /// Compute all region rectangles for the current bounds.
    pub fn layout(&self, scale_factor: f32) -> InteriorLayout {
        let bounds = self.bounds().normalized();
        let mut layout = InteriorLayout {
            bounds,
            ..InteriorLayout::default()
        };

        if let Some(border) = self.border.as_ref().filter(|b| b.has_border()) {
            layout.top_border = border.edge_rect(bounds, BorderEdge::Top);
            layout.bottom_border = border.edge_rect(bounds, BorderEdge::Bottom);
            layout.left_border = border.edge_rect(bounds, BorderEdge::Left);
            layout.right_border = border.edge_rect(bounds, BorderEdge::Right);
        }

        let inside = bounds.deflate(self.border_widths());
        layout.inside_border = inside;

        let vertical_visible = self.vertical.is_visible();
        let horizontal_visible = self.horizontal.is_visible();
        let vw = if vertical_visible {
            self.metrics
                .thickness(Orientation::Vertical, scale_factor)
                .min(inside.width)
        } else {
            0.0
        };
        let hh = if horizontal_visible {
            self.metrics
                .thickness(Orientation::Horizontal, scale_factor)
                .min(inside.height)
        } else {
            0.0
        };

        if vertical_visible {
            layout.vert_scrollbar = Rect::new(inside.right() - vw, inside.y, vw, inside.height);
        }
        if horizontal_visible {
            layout.horz_scrollbar = Rect::new(inside.x, inside.bottom() - hh, inside.width, hh);
        }

        if vertical_visible && horizontal_visible {
            layout.vert_scrollbar.height = (layout.vert_scrollbar.height - hh).max(0.0);
            layout.horz_scrollbar.width = (layout.horz_scrollbar.width - vw).max(0.0);
            if self.show_corner {
                layout.corner = Rect::new(inside.right() - vw, inside.bottom() - hh, vw, hh);
            }
        }

        layout.client = Rect::new(
            inside.x,
            inside.y,
            (inside.width - vw).max(0.0),
            (inside.height - hh).max(0.0),
        );

        log::trace!("Interior layout: {:?}", layout);
        layout
    }

    /// Layout using the host's scale factor.
    pub fn layout_for(&self, host: &dyn ChromeHost) -> InteriorLayout {
        self.layout(DrawContext::from_host(host).scale_factor)
    }

    pub fn hit_test(&self, layout: &InteriorLayout, point: Point) -> InteriorRegion {
        layout.hit_test(point)
    }

    /// Resolve `point` to an interior region and, for scrollbar regions, to a
    /// region of that scrollbar in its local coordinates.
    pub fn hit_tests(&self, ctx: &DrawContext, point: Point) -> CompositeHitResult {
        let layout = self.layout(ctx.scale_factor);
        let interior = layout.hit_test(point);

        let scrollbar = match interior.orientation() {
            Some(orientation) => {
                let rect = layout.get(interior);
                let bar = self.scrollbar(orientation);
                bar.layout_in(rect.at_origin(), ctx.position(orientation), ctx.scale_factor)
                    .hit_test(point.relative_to(&rect))
            }
            None => ScrollBarRegion::None,
        };

        let result = CompositeHitResult::new(interior, scrollbar);
        log::trace!("Hit test at ({}, {}): {:?}", point.x, point.y, result);
        result
    }

    pub fn hit_tests_for(&self, host: &dyn ChromeHost, point: Point) -> CompositeHitResult {
        self.hit_tests(&DrawContext::from_host(host), point)
    }

    /// Paint using the host's current state.
    pub fn paint(&self, host: &dyn ChromeHost, surface: &mut dyn PaintSurface) {
        self.draw(&DrawContext::from_host(host), surface);
    }

    /// Populate every primitive from `theme` and fire its initialize hook.
    pub fn set_theme_metrics(&mut self, theme: &ThemeMetrics, is_dark: bool) {
        self.border = Some(Self::default_border(is_dark));

        self.corner = theme.corner_background.map(|state, color| {
            color
                .filter(|_| THEMED_STATES.contains(&state))
                .map(RectangleDrawable::filled)
        });
        self.vertical.apply_theme(theme);
        self.horizontal.apply_theme(theme);

        theme.raise_initialize(self);
    }

    /// One-pixel border colored for dark or light surroundings.
    pub fn default_border(is_dark: bool) -> BorderDrawable {
        let color = if is_dark {
            Color::rgb8(67, 67, 70)
        } else {
            Color::rgb8(204, 206, 219)
        };
        BorderDrawable::uniform(DEFAULT_BORDER_WIDTH, color)
    }

    /// Process-wide dark interior, built on first access.
    pub fn default_dark() -> Arc<InteriorDrawable> {
        default_instance(&DEFAULT_DARK, true)
    }

    /// Process-wide light interior, built on first access.
    pub fn default_light() -> Arc<InteriorDrawable> {
        default_instance(&DEFAULT_LIGHT, false)
    }

    pub fn set_default_dark(interior: InteriorDrawable) {
        *DEFAULT_DARK.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(interior));
    }

    pub fn set_default_light(interior: InteriorDrawable) {
        *DEFAULT_LIGHT.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(interior));
    }
}

static DEFAULT_DARK: RwLock<Option<Arc<InteriorDrawable>>> = RwLock::new(None);
static DEFAULT_LIGHT: RwLock<Option<Arc<InteriorDrawable>>> = RwLock::new(None);

fn default_instance(
    slot: &RwLock<Option<Arc<InteriorDrawable>>>,
    is_dark: bool,
) -> Arc<InteriorDrawable> {
    if let Some(existing) = slot.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
        return existing.clone();
    }

    let built = InteriorDrawable::themed(KnownTheme::System, is_dark);
    let mut guard = slot.write().unwrap_or_else(PoisonError::into_inner);
    guard.get_or_insert_with(|| Arc::new(built)).clone()
}

impl Drawable for InteriorDrawable {
    fn base(&self) -> &DrawableBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut DrawableBase {
        &mut self.base
    }

    fn set_bounds(&mut self, bounds: Rect) -> bool {
        if bounds.width < 0.0 || bounds.height < 0.0 {
            log::warn!("Negative interior bounds {:?} clamped to empty", bounds);
        }
        self.base.set_bounds(bounds.normalized())
    }

    fn draw(&self, ctx: &DrawContext, surface: &mut dyn PaintSurface) {
        if !self.is_visible() {
            return;
        }
        let layout = self.layout(ctx.scale_factor);
        let state = ctx.visual_state;

        if let Some(background) = &self.background {
            background.draw_in(layout.bounds, surface);
        }

        if !layout.corner.is_empty() {
            if let Some(corner) = self.corner.get_or_normal(state) {
                corner.draw_in(layout.corner, surface);
            }
        }

        for (bar, rect) in [
            (&self.vertical, layout.vert_scrollbar),
            (&self.horizontal, layout.horz_scrollbar),
        ] {
            if !bar.is_visible() || rect.is_empty() {
                continue;
            }
            let bar_layout = bar.layout_in(rect, ctx.position(bar.orientation()), ctx.scale_factor);
            bar.draw_chrome(ctx, &bar_layout, surface);
            bar.draw_thumb(ctx, &bar_layout, surface);
        }

        if self.has_border() {
            if let Some(border) = &self.border {
                border.draw_in(layout.bounds, surface);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostState;
    use crate::paint::{DrawCommand, RecordingSurface};
    use crate::scroll::ScrollPosition;
    use crate::theme::ThemeInitializeHook;
    use crate::visual_state::VisualState;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn interior(vertical: bool, horizontal: bool) -> InteriorDrawable {
        let mut interior = InteriorDrawable::new(Arc::new(ScrollBarMetrics::with_thickness(15.0)));
        interior.set_bounds(Rect::new(0.0, 0.0, 200.0, 100.0));
        interior.set_scrollbar_visible(Orientation::Vertical, vertical);
        interior.set_scrollbar_visible(Orientation::Horizontal, horizontal);
        interior
    }

    #[test]
    fn test_vertical_only_layout() {
        let layout = interior(true, false).layout(1.0);
        assert_eq!(layout.client, Rect::new(0.0, 0.0, 185.0, 100.0));
        assert_eq!(layout.vert_scrollbar, Rect::new(185.0, 0.0, 15.0, 100.0));
        assert!(layout.horz_scrollbar.is_empty());
        assert!(layout.corner.is_empty());
    }

    #[test]
    fn test_both_bars_with_corner() {
        let layout = interior(true, true).layout(1.0);
        assert_eq!(layout.corner, Rect::new(185.0, 85.0, 15.0, 15.0));
        assert_eq!(layout.vert_scrollbar, Rect::new(185.0, 0.0, 15.0, 85.0));
        assert_eq!(layout.horz_scrollbar, Rect::new(0.0, 85.0, 185.0, 15.0));
        assert_eq!(layout.client, Rect::new(0.0, 0.0, 185.0, 85.0));
    }

    #[test]
    fn test_hidden_corner_primitive() {
        let mut interior = interior(true, true);
        interior.show_corner = false;
        let layout = interior.layout(1.0);
        assert!(layout.corner.is_empty());
        assert_eq!(layout.vert_scrollbar.height, 85.0);
        assert_eq!(
            layout.hit_test(Point::new(190.0, 90.0)),
            InteriorRegion::None
        );
    }

    #[test]
    fn test_client_width_for_all_visibility_combinations() {
        for (v, h) in [(false, false), (true, false), (false, true), (true, true)] {
            let mut interior = interior(v, h);
            interior.border = Some(BorderDrawable::uniform(2.0, Color::BLACK));
            let layout = interior.layout(1.0);
            let inside = layout.inside_border;
            assert_eq!(inside, Rect::new(2.0, 2.0, 196.0, 96.0));
            let expected_w = inside.width - if v { 15.0 } else { 0.0 };
            let expected_h = inside.height - if h { 15.0 } else { 0.0 };
            assert_eq!(layout.client.width, expected_w);
            assert_eq!(layout.client.height, expected_h);
        }
    }

    #[test]
    fn test_degenerate_bounds_clamp() {
        let mut interior = interior(true, true);
        interior.border = Some(BorderDrawable::uniform(4.0, Color::BLACK));
        interior.set_bounds(Rect::new(0.0, 0.0, 10.0, 6.0));
        let layout = interior.layout(1.0);
        assert!(layout.client.width >= 0.0 && layout.client.height >= 0.0);
        assert!(layout.client.is_empty());

        interior.set_bounds(Rect::new(0.0, 0.0, -5.0, 10.0));
        assert_eq!(interior.bounds().width, 0.0);
    }

    #[test]
    fn test_border_strips_and_hit_order() {
        let mut interior = interior(true, true);
        interior.border = Some(BorderDrawable::uniform(1.0, Color::BLACK));
        let layout = interior.layout(1.0);

        assert_eq!(layout.top_border, Rect::new(0.0, 0.0, 200.0, 1.0));
        assert_eq!(layout.corner, Rect::new(184.0, 84.0, 15.0, 15.0));

        assert_eq!(layout.hit_test(Point::new(-1.0, 50.0)), InteriorRegion::None);
        assert_eq!(layout.hit_test(Point::new(100.0, 0.5)), InteriorRegion::TopBorder);
        assert_eq!(layout.hit_test(Point::new(0.5, 50.0)), InteriorRegion::LeftBorder);
        assert_eq!(layout.hit_test(Point::new(50.0, 50.0)), InteriorRegion::ClientRect);
        // shared edge between corner and vertical bar
        assert_eq!(layout.hit_test(Point::new(190.0, 84.0)), InteriorRegion::Corner);
        // shared edge between client and vertical bar
        assert_eq!(layout.hit_test(Point::new(184.0, 40.0)), InteriorRegion::VertScrollBar);
        assert_eq!(layout.regions().len(), 8);
    }

    #[test]
    fn test_composite_hit_in_scrollbar_space() {
        let interior = interior(true, true);
        let ctx = DrawContext {
            vertical: ScrollPosition::new(100, 20, 0),
            ..DrawContext::default()
        };

        let hit = interior.hit_tests(&ctx, Point::new(190.0, 5.0));
        assert_eq!(
            hit,
            CompositeHitResult::new(InteriorRegion::VertScrollBar, ScrollBarRegion::StartButton)
        );

        let hit = interior.hit_tests(&ctx, Point::new(190.0, 80.0));
        assert_eq!(hit.scrollbar, ScrollBarRegion::EndButton);

        let hit = interior.hit_tests(&ctx, Point::new(100.0, 50.0));
        assert_eq!(hit.interior, InteriorRegion::ClientRect);
        assert_eq!(hit.scrollbar, ScrollBarRegion::None);

        assert!(interior.hit_tests(&ctx, Point::new(190.0, 90.0)).is_corner());
    }

    #[test]
    fn test_thumb_center_round_trip() {
        let interior = interior(true, true);
        let host = HostState::new(ScrollPosition::new(300, 50, 120), ScrollPosition::new(500, 100, 250));
        let ctx = DrawContext::from_host(&host);
        let layout = interior.layout(1.0);

        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            let rect = match orientation {
                Orientation::Vertical => layout.vert_scrollbar,
                Orientation::Horizontal => layout.horz_scrollbar,
            };
            let bar = interior.scrollbar(orientation);
            let thumb = bar.layout_in(rect, ctx.position(orientation), 1.0).thumb;
            let hit = interior.hit_tests_for(&host, thumb.center());
            assert_eq!(hit.scrollbar, ScrollBarRegion::Thumb);
            assert_eq!(hit.orientation(), Some(orientation));
        }
    }

    #[test]
    fn test_draw_order() {
        let mut interior = InteriorDrawable::themed(KnownTheme::WindowsDark, true);
        interior.set_metrics(Arc::new(ScrollBarMetrics::with_thickness(15.0)));
        interior.background = Some(RectangleDrawable::filled(Color::WHITE));
        interior.set_bounds(Rect::new(0.0, 0.0, 200.0, 100.0));

        let mut surface = RecordingSurface::new();
        interior.draw(&DrawContext::default(), &mut surface);
        let commands = surface.commands();

        // background first
        assert_eq!(
            commands[0],
            DrawCommand::FillRect {
                rect: Rect::new(0.0, 0.0, 200.0, 100.0),
                color: Color::WHITE
            }
        );
        // then the corner
        assert_eq!(
            commands[1],
            DrawCommand::FillRect {
                rect: Rect::new(184.0, 84.0, 15.0, 15.0),
                color: Color::rgb8(102, 102, 102)
            }
        );
        // border strips last
        let border_color = InteriorDrawable::default_border(true).color;
        let tail: Vec<_> = commands[commands.len() - 4..].to_vec();
        assert!(tail
            .iter()
            .all(|c| matches!(c, DrawCommand::FillRect { color, .. } if *color == border_color)));
    }

    #[test]
    fn test_theme_hook_fires_after_population() {
        let theme = ThemeMetrics::windows_light().with_initialize_hook(ThemeInitializeHook::new(
            |args| {
                assert!(args.scrollbar.is_none());
                if let Some(interior) = args.interior.as_deref_mut() {
                    assert!(interior.corner.get(VisualState::Normal).is_some());
                    interior.show_corner = false;
                }
            },
        ));

        let mut interior = InteriorDrawable::default();
        interior.set_theme_metrics(&theme, false);
        assert!(!interior.show_corner);
        assert!(interior.has_border());
    }

    #[test]
    fn test_theme_hook_fires_once_for_interior() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let theme = ThemeMetrics::windows_dark().with_initialize_hook(ThemeInitializeHook::new(
            move |args| {
                assert!(args.interior.is_some());
                counter.fetch_add(1, Ordering::SeqCst);
            },
        ));

        let mut interior = InteriorDrawable::default();
        interior.set_theme_metrics(&theme, true);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_default_instances_are_cached() {
        let a = InteriorDrawable::default_dark();
        let b = InteriorDrawable::default_dark();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &InteriorDrawable::default_light()));
    }
}
