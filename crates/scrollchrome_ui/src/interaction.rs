//! Click and auto-repeat handling for interior scrollbars.
//!
//! [`InteriorScrollActivity`] turns a press on a scrollbar button or track
//! segment into a scroll command, executes it once right away and then
//! again on every repeat-clock tick while the button stays down.
//!
//! The activity does not own the clock. The owning control subscribes
//! through it, polls the clock from its event loop and forwards a tick to
//! [`InteriorScrollActivity::repeat_tick`] whenever the returned
//! subscribers include [`InteriorScrollActivity::subscription`]. Every exit
//! path (release, leave, focus loss, visibility change, dispose) drops the
//! subscription.
//!
//! That is the [`ScrollMethodKind::RepeatWhilePressed`] method. Under
//! [`ScrollMethodKind::DeltaWhilePressed`] a press executes nothing and
//! pointer movement raises [`DeltaScroll`] notifications instead, and
//! [`ScrollMethodKind::None`] ignores presses altogether.

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::callback::EventHandlers;
use crate::constants::{DEFAULT_MIN_GESTURE_DISTANCE, DEFAULT_MIN_REPEAT_INTERVAL};
use crate::drawable::{CompositeHitResult, InteriorDrawable, InteriorRegion, ScrollBarRegion};
use crate::event::MouseButton;
use crate::geometry::Point;
use crate::host::{ChromeHost, ScrollCommand};
use crate::repeat::{RepeatClock, SubscriptionId};
use crate::scroll::{ScrollEvent, ScrollEventType};
use crate::visual_state::VisualState;

/// Interaction state of the activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityState {
    #[default]
    Idle,
    /// Button down on a region without a command.
    Pressed,
    /// Button down on a command region, subscribed to the repeat clock.
    PressedRepeating,
}

/// How a pressed left button scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollMethodKind {
    /// Presses are ignored.
    None,
    /// Execute the pressed region's command, then repeat it on clock ticks.
    #[default]
    RepeatWhilePressed,
    /// Raise [`DeltaScroll`] as the pointer moves with the button down.
    DeltaWhilePressed,
}

static DEFAULT_SCROLL_METHOD: RwLock<ScrollMethodKind> =
    RwLock::new(ScrollMethodKind::RepeatWhilePressed);

/// Method used by activities that do not pick one themselves.
pub fn default_scroll_method() -> ScrollMethodKind {
    *DEFAULT_SCROLL_METHOD
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

pub fn set_default_scroll_method(method: ScrollMethodKind) {
    *DEFAULT_SCROLL_METHOD
        .write()
        .unwrap_or_else(PoisonError::into_inner) = method;
    log::debug!("Default scroll method set to {:?}", method);
}

/// Settings of an [`InteriorScrollActivity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollActivityConfig {
    /// Ticks closer than this to the previous command are ignored.
    pub min_repeat_interval: Duration,
    /// Pointer travel that turns a press into a drag, and the step between
    /// two delta notifications.
    pub min_gesture_distance: f32,
    /// Apply commands to the host's scroll model.
    pub send_scroll_to_control: bool,
    /// `None` follows [`default_scroll_method`].
    pub scroll_method: Option<ScrollMethodKind>,
}

impl ScrollActivityConfig {
    pub fn effective_scroll_method(&self) -> ScrollMethodKind {
        self.scroll_method.unwrap_or_else(default_scroll_method)
    }
}

impl Default for ScrollActivityConfig {
    fn default() -> Self {
        Self {
            min_repeat_interval: DEFAULT_MIN_REPEAT_INTERVAL,
            min_gesture_distance: DEFAULT_MIN_GESTURE_DISTANCE,
            send_scroll_to_control: true,
            scroll_method: None,
        }
    }
}

/// Raised for every executed scroll command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollNotification {
    pub command: ScrollCommand,
    /// The position change, when the command was sent to the control and
    /// moved it.
    pub change: Option<ScrollEvent>,
}

/// Pointer travel while pressed under [`ScrollMethodKind::DeltaWhilePressed`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaScroll {
    /// What the press started on.
    pub hit: CompositeHitResult,
    /// Anchor of this step: the press location or the previous step's end.
    pub from: Point,
    pub to: Point,
}

impl DeltaScroll {
    pub fn dx(&self) -> f32 {
        self.to.x - self.from.x
    }

    pub fn dy(&self) -> f32 {
        self.to.y - self.from.y
    }
}

/// Scroll command for a hit, if the hit is on a scrollbar button or track
/// segment. Thumb dragging is left to the control.
pub fn command_for(hit: CompositeHitResult) -> Option<ScrollCommand> {
    let orientation = hit.orientation()?;
    let kind = match hit.scrollbar {
        ScrollBarRegion::StartButton => ScrollEventType::SmallDecrement,
        ScrollBarRegion::EndButton => ScrollEventType::SmallIncrement,
        ScrollBarRegion::BeforeThumb => ScrollEventType::LargeDecrement,
        ScrollBarRegion::AfterThumb => ScrollEventType::LargeIncrement,
        ScrollBarRegion::Thumb | ScrollBarRegion::None => return None,
    };
    Some(ScrollCommand::new(orientation, kind))
}

#[derive(Debug, Clone, Copy)]
struct Press {
    location: Point,
    hit: CompositeHitResult,
}

/// Press / repeat / release state machine for one scrollable control.
#[derive(Debug, Default)]
pub struct InteriorScrollActivity {
    config: ScrollActivityConfig,
    state: ActivityState,
    subscription: Option<SubscriptionId>,
    press: Option<Press>,
    dragged: bool,
    delta_anchor: Option<Point>,
    pointer: Point,
    last_command_at: Option<Instant>,

    pub on_scroll: EventHandlers<ScrollNotification>,
    pub on_delta_scroll: EventHandlers<DeltaScroll>,
    pub on_element_click: EventHandlers<CompositeHitResult>,
    pub on_corner_click: EventHandlers<()>,
}

impl InteriorScrollActivity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScrollActivityConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ScrollActivityConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ScrollActivityConfig {
        &mut self.config
    }

    pub fn state(&self) -> ActivityState {
        self.state
    }

    /// The repeat-clock subscription while repeating.
    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.subscription
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Last pointer location seen.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Pointer button pressed at `location`.
    ///
    /// Only the left button starts a press, and only when the scroll method
    /// is not [`ScrollMethodKind::None`]. When repeating, a command region
    /// executes its command immediately and starts repeating. In delta mode
    /// a press inside the control anchors the delta notifications.
    pub fn mouse_down(
        &mut self,
        host: &mut dyn ChromeHost,
        interior: &InteriorDrawable,
        clock: &mut RepeatClock,
        button: MouseButton,
        location: Point,
        now: Instant,
    ) {
        self.reset_dragging();
        self.pointer = location;
        if button != MouseButton::Left {
            return;
        }
        let method = self.config.effective_scroll_method();
        if method == ScrollMethodKind::None {
            return;
        }

        let hit = interior.hit_tests_for(&*host, location);
        self.press = Some(Press { location, hit });
        self.state = ActivityState::Pressed;

        match method {
            ScrollMethodKind::RepeatWhilePressed => {
                if let Some(command) = command_for(hit) {
                    self.execute(host, command, now);
                    self.subscribe(clock, now);
                    self.state = ActivityState::PressedRepeating;
                }
            }
            ScrollMethodKind::DeltaWhilePressed => {
                if hit.interior != InteriorRegion::None {
                    self.delta_anchor = Some(location);
                }
            }
            ScrollMethodKind::None => {}
        }
    }

    /// Repeat-clock tick. Re-resolves the hit at the current pointer
    /// location and executes its command again. Returns true when a command
    /// ran.
    pub fn repeat_tick(
        &mut self,
        host: &mut dyn ChromeHost,
        interior: &InteriorDrawable,
        now: Instant,
    ) -> bool {
        if self.state != ActivityState::PressedRepeating {
            return false;
        }
        if let Some(last) = self.last_command_at {
            if now.saturating_duration_since(last) < self.config.min_repeat_interval {
                log::trace!("Repeat tick debounced");
                return false;
            }
        }

        let hit = interior.hit_tests_for(&*host, self.pointer);
        match command_for(hit) {
            Some(command) => {
                self.execute(host, command, now);
                true
            }
            None => false,
        }
    }

    /// Pointer moved. In delta mode, every time the pointer is at least the
    /// gesture distance away from the anchor a [`DeltaScroll`] is raised and
    /// the anchor moves to `location`.
    pub fn mouse_move(&mut self, location: Point) {
        self.pointer = location;
        let Some(press) = self.press else {
            return;
        };
        let min_distance = self.config.min_gesture_distance;
        if press.location.distance(location) >= min_distance {
            self.dragged = true;
        }

        if let Some(from) = self.delta_anchor {
            if from.distance(location) >= min_distance {
                self.delta_anchor = Some(location);
                log::trace!("Delta scroll ({}, {}) -> ({}, {})", from.x, from.y, location.x, location.y);
                self.on_delta_scroll.emit(&DeltaScroll {
                    hit: press.hit,
                    from,
                    to: location,
                });
            }
        }
    }

    /// Pointer button released. A press released without dragging raises
    /// the click notifications.
    pub fn mouse_up(&mut self, clock: &mut RepeatClock, button: MouseButton, location: Point) {
        if button != MouseButton::Left {
            return;
        }
        self.delta_anchor = None;
        self.mouse_move(location);

        if let Some(press) = self.press.take() {
            if !self.dragged {
                self.on_element_click.emit(&press.hit);
                if press.hit.is_corner() {
                    self.on_corner_click.emit(&());
                }
            }
        }
        self.reset(clock);
    }

    pub fn mouse_leave(&mut self, clock: &mut RepeatClock) {
        self.reset(clock);
    }

    pub fn focus_lost(&mut self, clock: &mut RepeatClock) {
        self.reset(clock);
    }

    pub fn visibility_changed(&mut self, clock: &mut RepeatClock) {
        self.reset(clock);
    }

    /// The control's visual state changed. Anything but `Pressed` stops
    /// repeating.
    pub fn visual_state_changed(&mut self, clock: &mut RepeatClock, state: VisualState) {
        if state != VisualState::Pressed {
            self.reset(clock);
        }
    }

    /// Release the repeat-clock subscription before the activity goes away.
    pub fn dispose(&mut self, clock: &mut RepeatClock) {
        self.reset(clock);
    }

    fn execute(&mut self, host: &mut dyn ChromeHost, command: ScrollCommand, now: Instant) {
        let change = if self.config.send_scroll_to_control {
            host.raise_scroll(command)
        } else {
            None
        };
        self.last_command_at = Some(now);
        log::debug!("Scroll command {:?} {}", command.orientation, command.kind);
        self.on_scroll.emit(&ScrollNotification { command, change });
    }

    fn subscribe(&mut self, clock: &mut RepeatClock, now: Instant) {
        if self.subscription.is_none() {
            self.subscription = Some(clock.subscribe(now));
        }
    }

    fn unsubscribe(&mut self, clock: &mut RepeatClock) {
        if let Some(id) = self.subscription.take() {
            clock.unsubscribe(id);
        }
    }

    fn reset_dragging(&mut self) {
        self.press = None;
        self.dragged = false;
        self.delta_anchor = None;
    }

    fn reset(&mut self, clock: &mut RepeatClock) {
        self.reset_dragging();
        self.unsubscribe(clock);
        self.state = ActivityState::Idle;
    }
}
