//! Scroll-position model and scroll commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SMALL_CHANGE;

/// Orientation of a scrollbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn is_vertical(self) -> bool {
        self == Orientation::Vertical
    }
}

/// The kind of a scroll command or notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollEventType {
    SmallDecrement,
    SmallIncrement,
    LargeDecrement,
    LargeIncrement,
    ThumbPosition,
    ThumbTrack,
    First,
    Last,
    EndScroll,
}

impl fmt::Display for ScrollEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A scroll notification raised after the position changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEvent {
    pub orientation: Orientation,
    pub kind: ScrollEventType,
    pub old_value: i32,
    pub new_value: i32,
}

/// Range, page size and offset of one scroll axis.
///
/// `position` is kept inside `0..=max_position()` by every mutator here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub range: i32,
    pub page_size: i32,
    pub position: i32,
    #[serde(default = "default_small_change")]
    pub small_change: i32,
}

fn default_small_change() -> i32 {
    DEFAULT_SMALL_CHANGE
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self {
            range: 0,
            page_size: 0,
            position: 0,
            small_change: DEFAULT_SMALL_CHANGE,
        }
    }
}

impl ScrollPosition {
    pub fn new(range: i32, page_size: i32, position: i32) -> Self {
        Self {
            range,
            page_size,
            position,
            small_change: DEFAULT_SMALL_CHANGE,
        }
    }

    /// True when there is something to scroll.
    pub fn can_scroll(&self) -> bool {
        self.range > self.page_size.max(0)
    }

    /// Largest valid position. A negative page size counts as empty.
    pub fn max_position(&self) -> i32 {
        self.range.saturating_sub(self.page_size.max(0)).max(0)
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(0, self.max_position())
    }

    /// Position `kind` would move to, clamped. Thumb and end-scroll
    /// commands carry no delta and keep the current position.
    pub fn scrolled(&self, kind: ScrollEventType) -> i32 {
        let large = self.page_size.max(1);
        let target = match kind {
            ScrollEventType::SmallDecrement => self.position.saturating_sub(self.small_change),
            ScrollEventType::SmallIncrement => self.position.saturating_add(self.small_change),
            ScrollEventType::LargeDecrement => self.position.saturating_sub(large),
            ScrollEventType::LargeIncrement => self.position.saturating_add(large),
            ScrollEventType::First => 0,
            ScrollEventType::Last => self.max_position(),
            ScrollEventType::ThumbPosition
            | ScrollEventType::ThumbTrack
            | ScrollEventType::EndScroll => self.position,
        };
        self.clamp(target)
    }

    /// Apply `kind`. Returns the event when the position changed.
    pub fn apply(&mut self, orientation: Orientation, kind: ScrollEventType) -> Option<ScrollEvent> {
        let new_value = self.scrolled(kind);
        self.move_to(orientation, kind, new_value)
    }

    /// Move to an explicit position (thumb tracking). Returns the event when
    /// the position changed.
    pub fn move_to(
        &mut self,
        orientation: Orientation,
        kind: ScrollEventType,
        value: i32,
    ) -> Option<ScrollEvent> {
        let old_value = self.position;
        let new_value = self.clamp(value);
        if new_value == old_value {
            return None;
        }
        self.position = new_value;
        Some(ScrollEvent {
            orientation,
            kind,
            old_value,
            new_value,
        })
    }
}
