//! A scrollable control wiring the chrome engine to pointer events.
//!
//! [`ScrollView`] owns the host state, the interior drawable, the click
//! controller and the repeat clock. The embedding event loop feeds it
//! [`Event`]s and calls [`ScrollView::tick`] periodically.

use scrollchrome_ui::{
    ChromeHost, CompositeHitResult, Drawable, Event, HostState, InteriorDrawable,
    InteriorScrollActivity, KnownTheme, Orientation, PaintSurface, Point, Rect, RepeatClock,
    Thickness, VisualState,
};
use web_time::Instant;

use crate::config::ChromeConfig;

#[derive(Debug)]
pub struct ScrollView {
    host: HostState,
    interior: InteriorDrawable,
    activity: InteriorScrollActivity,
    clock: RepeatClock,
    hovered: bool,
    pressed: bool,
    enabled: bool,
}

impl ScrollView {
    /// A themed view covering `bounds`, both axes unscrollable.
    pub fn new(theme: KnownTheme, is_dark: bool, bounds: Rect) -> Self {
        let mut interior = InteriorDrawable::themed(theme, is_dark);
        interior.set_bounds(bounds);
        Self {
            host: HostState::default(),
            interior,
            activity: InteriorScrollActivity::new(),
            clock: RepeatClock::new(),
            hovered: false,
            pressed: false,
            enabled: true,
        }
    }

    pub fn from_config(config: &ChromeConfig) -> Self {
        let bounds = Rect::new(0.0, 0.0, config.width, config.height);
        let mut view = Self::new(config.theme, config.dark, bounds);

        view.host.scale_factor = scrollchrome_ui::sanitize_scale(config.scale_factor);
        view.host.vertical = config.scroll.vertical;
        view.host.horizontal = config.scroll.horizontal;

        if let Some(border) = view.interior.border.as_mut() {
            border.widths = Thickness::uniform(config.border_width.max(0.0));
        }
        view.interior
            .set_scrollbar_visible(Orientation::Vertical, config.show_vertical);
        view.interior
            .set_scrollbar_visible(Orientation::Horizontal, config.show_horizontal);
        view.interior.show_corner = config.show_corner;

        view.clock = RepeatClock::with_interval(config.repeat_interval());
        view.activity = InteriorScrollActivity::with_config(config.activity_config());
        log::debug!(
            "ScrollView from config: theme {} ({}), {}x{} @ {}",
            config.theme,
            if config.dark { "dark" } else { "light" },
            config.width,
            config.height,
            view.host.scale_factor
        );
        view
    }

    pub fn host(&self) -> &HostState {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut HostState {
        &mut self.host
    }

    pub fn interior(&self) -> &InteriorDrawable {
        &self.interior
    }

    pub fn interior_mut(&mut self) -> &mut InteriorDrawable {
        &mut self.interior
    }

    /// The click controller; attach notification handlers here.
    pub fn activity_mut(&mut self) -> &mut InteriorScrollActivity {
        &mut self.activity
    }

    pub fn activity(&self) -> &InteriorScrollActivity {
        &self.activity
    }

    pub fn clock(&self) -> &RepeatClock {
        &self.clock
    }

    pub fn visual_state(&self) -> VisualState {
        self.host.visual_state()
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.interior.set_bounds(bounds);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pressed = false;
        }
        self.update_visual_state();
    }

    /// Region under `point`.
    pub fn hit_test(&self, point: Point) -> CompositeHitResult {
        self.interior.hit_tests_for(&self.host, point)
    }

    /// Route one input event. Disabled views ignore pointer input.
    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        match event {
            Event::MouseMoved { position } => {
                self.hovered = self.interior.bounds().contains(*position);
                self.activity.mouse_move(*position);
                self.update_visual_state();
            }
            Event::MousePressed { button, position } => {
                if !self.enabled {
                    return;
                }
                self.hovered = self.interior.bounds().contains(*position);
                self.pressed = self.hovered;
                self.update_visual_state();
                self.activity.mouse_down(
                    &mut self.host,
                    &self.interior,
                    &mut self.clock,
                    *button,
                    *position,
                    now,
                );
            }
            Event::MouseReleased { button, position } => {
                self.activity
                    .mouse_up(&mut self.clock, *button, *position);
                self.pressed = false;
                self.hovered = self.interior.bounds().contains(*position);
                self.update_visual_state();
            }
            Event::MouseLeft => {
                self.activity.mouse_leave(&mut self.clock);
                self.hovered = false;
                self.pressed = false;
                self.update_visual_state();
            }
            Event::FocusLost => {
                self.activity.focus_lost(&mut self.clock);
                self.pressed = false;
                self.update_visual_state();
            }
            Event::VisibilityChanged { visible } => {
                self.interior.set_visible(*visible);
                self.activity.visibility_changed(&mut self.clock);
                self.pressed = false;
                self.hovered = false;
                self.update_visual_state();
            }
        }
    }

    /// Poll the repeat clock. Returns true when a repeated command ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self.clock.poll(now);
        let Some(id) = self.activity.subscription() else {
            return false;
        };
        if !due.contains(&id) {
            return false;
        }
        self.activity
            .repeat_tick(&mut self.host, &self.interior, now)
    }

    pub fn paint(&self, surface: &mut dyn PaintSurface) {
        self.interior.paint(&self.host, surface);
    }

    fn update_visual_state(&mut self) {
        let state = if !self.enabled {
            VisualState::Disabled
        } else if self.pressed {
            VisualState::Pressed
        } else if self.hovered {
            VisualState::Hovered
        } else {
            VisualState::Normal
        };
        if state != self.host.visual_state {
            log::trace!("Visual state {} -> {}", self.host.visual_state, state);
            self.host.visual_state = state;
            self.activity.visual_state_changed(&mut self.clock, state);
        }
    }
}

impl Drop for ScrollView {
    fn drop(&mut self) {
        self.activity.dispose(&mut self.clock);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollchrome_ui::{
        DeltaScroll, InteriorRegion, MouseButton, RecordingSurface, ScrollBarRegion,
        ScrollMethodKind, ScrollPosition,
    };
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    fn view() -> ScrollView {
        let mut view = ScrollView::new(
            KnownTheme::WindowsDark,
            true,
            Rect::new(0.0, 0.0, 100.0, 100.0),
        );
        view.host_mut().vertical = ScrollPosition::new(100, 10, 0);
        view
    }

    // Bottom button of the vertical bar: bar spans y 1..82, buttons 17 tall.
    const DOWN_BUTTON: Point = Point { x: 90.0, y: 75.0 };

    fn press(view: &mut ScrollView, position: Point, now: Instant) {
        view.handle_event(
            &Event::MousePressed {
                button: MouseButton::Left,
                position,
            },
            now,
        );
    }

    fn release(view: &mut ScrollView, position: Point, now: Instant) {
        view.handle_event(
            &Event::MouseReleased {
                button: MouseButton::Left,
                position,
            },
            now,
        );
    }

    #[test]
    fn test_down_button_hit() {
        let view = view();
        let hit = view.hit_test(DOWN_BUTTON);
        assert_eq!(hit.interior, InteriorRegion::VertScrollBar);
        assert_eq!(hit.scrollbar, ScrollBarRegion::EndButton);
    }

    #[test]
    fn test_press_repeats_until_release() {
        let mut view = view();
        let t0 = Instant::now();

        press(&mut view, DOWN_BUTTON, t0);
        assert_eq!(view.host().vertical.position, 1);
        assert_eq!(view.visual_state(), VisualState::Pressed);

        assert!(!view.tick(t0 + Duration::from_millis(20)));
        assert!(view.tick(t0 + Duration::from_millis(50)));
        assert!(view.tick(t0 + Duration::from_millis(100)));
        assert_eq!(view.host().vertical.position, 3);

        release(&mut view, DOWN_BUTTON, t0 + Duration::from_millis(120));
        assert!(!view.clock().is_running());
        assert!(!view.tick(t0 + Duration::from_millis(200)));
        assert_eq!(view.host().vertical.position, 3);
        assert_eq!(view.host().history.len(), 3);
    }

    #[test]
    fn test_pointer_moved_to_client_stops_commands() {
        let mut view = view();
        let t0 = Instant::now();

        press(&mut view, DOWN_BUTTON, t0);
        view.handle_event(
            &Event::MouseMoved {
                position: Point::new(30.0, 30.0),
            },
            t0,
        );
        assert_eq!(view.visual_state(), VisualState::Pressed);
        assert!(!view.tick(t0 + Duration::from_millis(60)));
        assert!(view.activity().is_subscribed());
        assert_eq!(view.host().vertical.position, 1);

        release(&mut view, Point::new(30.0, 30.0), t0 + Duration::from_millis(70));
        assert!(!view.activity().is_subscribed());
    }

    #[test]
    fn test_leave_and_focus_loss_stop_repeating() {
        let mut view = view();
        let t0 = Instant::now();

        press(&mut view, DOWN_BUTTON, t0);
        view.handle_event(&Event::MouseLeft, t0);
        assert!(!view.activity().is_subscribed());
        assert_eq!(view.visual_state(), VisualState::Normal);

        press(&mut view, DOWN_BUTTON, t0);
        view.handle_event(&Event::FocusLost, t0);
        assert!(!view.activity().is_subscribed());
        assert_eq!(view.clock().subscriber_count(), 0);
    }

    #[test]
    fn test_hover_tracks_bounds() {
        let mut view = view();
        let t0 = Instant::now();

        view.handle_event(
            &Event::MouseMoved {
                position: Point::new(10.0, 10.0),
            },
            t0,
        );
        assert_eq!(view.visual_state(), VisualState::Hovered);

        view.handle_event(
            &Event::MouseMoved {
                position: Point::new(150.0, 10.0),
            },
            t0,
        );
        assert_eq!(view.visual_state(), VisualState::Normal);
    }

    #[test]
    fn test_disabled_ignores_presses() {
        let mut view = view();
        view.set_enabled(false);
        press(&mut view, DOWN_BUTTON, Instant::now());

        assert_eq!(view.visual_state(), VisualState::Disabled);
        assert_eq!(view.host().vertical.position, 0);
    }

    #[test]
    fn test_from_config_applies_visibility() {
        let config = ChromeConfig {
            theme: KnownTheme::VisualStudioDark,
            show_horizontal: false,
            border_width: 0.0,
            ..ChromeConfig::default()
        };
        let view = ScrollView::from_config(&config);
        let layout = view.interior().layout_for(view.host());

        assert!(layout.horz_scrollbar.is_empty());
        assert!(layout.corner.is_empty());
        assert_eq!(layout.client, Rect::new(0.0, 0.0, 183.0, 150.0));
    }

    #[test]
    fn test_delta_method_routes_moves() {
        let config = ChromeConfig {
            scroll_method: Some(ScrollMethodKind::DeltaWhilePressed),
            ..ChromeConfig::default()
        };
        let mut view = ScrollView::from_config(&config);
        let steps = Rc::new(RefCell::new(0));
        let sink = steps.clone();
        view.activity_mut()
            .on_delta_scroll
            .add(move |_: &DeltaScroll| *sink.borrow_mut() += 1);
        let t0 = Instant::now();

        press(&mut view, Point::new(50.0, 50.0), t0);
        let before = view.host().vertical.position;
        view.handle_event(
            &Event::MouseMoved {
                position: Point::new(50.0, 70.0),
            },
            t0,
        );
        assert_eq!(*steps.borrow(), 1);
        assert!(!view.tick(t0 + Duration::from_millis(100)));
        assert_eq!(view.host().vertical.position, before);
    }

    #[test]
    fn test_paint_records_commands() {
        let view = view();
        let mut surface = RecordingSurface::new();
        view.paint(&mut surface);
        assert!(!surface.is_empty());
    }
}
