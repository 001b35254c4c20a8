//! The owning-control side of the chrome engine.
//!
//! Drawables and the interaction controller never own scroll state. They
//! read it from, and send commands to, a [`ChromeHost`].

use crate::scroll::{Orientation, ScrollEvent, ScrollEventType, ScrollPosition};
use crate::visual_state::VisualState;

/// A scroll command addressed to one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollCommand {
    pub orientation: Orientation,
    pub kind: ScrollEventType,
}

impl ScrollCommand {
    pub fn new(orientation: Orientation, kind: ScrollEventType) -> Self {
        Self { orientation, kind }
    }
}

/// Services the owning control provides.
pub trait ChromeHost {
    /// Device pixels per device-independent unit.
    fn scale_factor(&self) -> f32;

    /// Current visual state of the control.
    fn visual_state(&self) -> VisualState;

    /// Scroll model of one axis.
    fn scroll_position(&self, orientation: Orientation) -> ScrollPosition;

    /// Apply a scroll command. Returns the resulting event when the position
    /// changed.
    fn raise_scroll(&mut self, command: ScrollCommand) -> Option<ScrollEvent>;
}

/// Plain host state: a scale factor, a visual state and two scroll models.
///
/// Controls embed this and forward the trait to it.
#[derive(Debug, Clone, PartialEq)]
pub struct HostState {
    pub scale_factor: f32,
    pub visual_state: VisualState,
    pub vertical: ScrollPosition,
    pub horizontal: ScrollPosition,
    /// Every position change, oldest first
    pub history: Vec<ScrollEvent>,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            visual_state: VisualState::Normal,
            vertical: ScrollPosition::default(),
            horizontal: ScrollPosition::default(),
            history: Vec::new(),
        }
    }
}

impl HostState {
    pub fn new(vertical: ScrollPosition, horizontal: ScrollPosition) -> Self {
        Self {
            vertical,
            horizontal,
            ..Self::default()
        }
    }

    pub fn position_mut(&mut self, orientation: Orientation) -> &mut ScrollPosition {
        match orientation {
            Orientation::Vertical => &mut self.vertical,
            Orientation::Horizontal => &mut self.horizontal,
        }
    }
}

impl ChromeHost for HostState {
    fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    fn visual_state(&self) -> VisualState {
        self.visual_state
    }

    fn scroll_position(&self, orientation: Orientation) -> ScrollPosition {
        match orientation {
            Orientation::Vertical => self.vertical,
            Orientation::Horizontal => self.horizontal,
        }
    }

    fn raise_scroll(&mut self, command: ScrollCommand) -> Option<ScrollEvent> {
        let event = self
            .position_mut(command.orientation)
            .apply(command.orientation, command.kind);
        if let Some(event) = event {
            log::trace!(
                "{:?} scroll {}: {} -> {}",
                event.orientation,
                event.kind,
                event.old_value,
                event.new_value
            );
            self.history.push(event);
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_scroll_records_changes_only() {
        let mut host = HostState::new(ScrollPosition::new(50, 10, 0), ScrollPosition::default());

        let none = host.raise_scroll(ScrollCommand::new(
            Orientation::Vertical,
            ScrollEventType::SmallDecrement,
        ));
        assert!(none.is_none());

        host.raise_scroll(ScrollCommand::new(
            Orientation::Vertical,
            ScrollEventType::LargeIncrement,
        ));
        assert_eq!(host.vertical.position, 10);
        assert_eq!(host.history.len(), 1);
    }
}
