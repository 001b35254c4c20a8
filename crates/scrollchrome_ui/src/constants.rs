//! Centralized constants for scrollchrome_ui
//!
//! Default metrics and timings used when nothing more specific is
//! configured. All sizes are device-independent units.

use std::time::Duration;

// =============================================================================
// Scrollbar metrics
// =============================================================================

/// Preferred width of a vertical scrollbar
pub const DEFAULT_SCROLLBAR_THICKNESS: f32 = 17.0;

/// Side of the square arrow glyph drawn inside a scrollbar button
pub const DEFAULT_ARROW_SIZE: f32 = 9.0;

/// Thumb length never drops below this (unless the track itself is shorter)
pub const MIN_THUMB_LENGTH: f32 = 8.0;

/// Margin between a scrollbar button edge and its arrow
pub const DEFAULT_ARROW_MARGIN: f32 = 1.0;

/// Margin between the track edges and the thumb across the short axis
pub const DEFAULT_THUMB_MARGIN: f32 = 1.0;

/// Width of the default interior border
pub const DEFAULT_BORDER_WIDTH: f32 = 1.0;

// =============================================================================
// Interaction
// =============================================================================

/// Interval of the repeat clock while a scrollbar button is held
pub const DEFAULT_REPEAT_INTERVAL: Duration = Duration::from_millis(50);

/// Minimum time between two commands executed by click-repeat
pub const DEFAULT_MIN_REPEAT_INTERVAL: Duration = Duration::from_millis(50);

/// Pointer travel (dips) after which a press is a drag, not a click
pub const DEFAULT_MIN_GESTURE_DISTANCE: f32 = 4.0;

/// Default step for small increments/decrements
pub const DEFAULT_SMALL_CHANGE: i32 = 1;

// =============================================================================
// Numeric
// =============================================================================

/// Float comparison epsilon
pub const EPSILON: f32 = 0.001;
