//! The paint surface abstraction.
//!
//! Drawables never touch pixels. They call into a [`PaintSurface`] with
//! rectangles in device-independent units; the surface converts to device
//! pixels and rasterizes. [`RecordingSurface`] keeps the calls as a list of
//! [`DrawCommand`]s instead, which is what the tests inspect.

use crate::color::Color;
use crate::geometry::Rect;
use crate::icon::SvgIcon;
use crate::image::ImageHandle;

/// Anything drawables can paint on.
pub trait PaintSurface {
    /// Fill `rect` with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke the inside of `rect` with a line of `width`.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Draw a vector icon recolored with `color`, scaled to fill `rect`.
    fn draw_icon(&mut self, icon: &SvgIcon, color: Color, rect: Rect);

    /// Draw an RGBA image scaled to fill `rect`.
    fn draw_image(&mut self, image: &ImageHandle, rect: Rect);
}

/// A single recorded paint call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f32,
    },
    DrawIcon {
        icon: SvgIcon,
        color: Color,
        rect: Rect,
    },
    DrawImage {
        handle: ImageHandle,
        rect: Rect,
    },
}

impl DrawCommand {
    /// The target rectangle of the command.
    pub fn rect(&self) -> Rect {
        match self {
            DrawCommand::FillRect { rect, .. }
            | DrawCommand::StrokeRect { rect, .. }
            | DrawCommand::DrawIcon { rect, .. }
            | DrawCommand::DrawImage { rect, .. } => *rect,
        }
    }
}

/// Paint surface that records every call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the surface empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Rectangles of all `FillRect` commands with the given color.
    pub fn fills_with(&self, color: Color) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillRect { rect, color: c } if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Names of all icons drawn, in call order.
    pub fn icon_names(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::DrawIcon { icon, .. } => Some(icon.name().to_string()),
                _ => None,
            })
            .collect()
    }
}

impl PaintSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn draw_icon(&mut self, icon: &SvgIcon, color: Color, rect: Rect) {
        self.commands.push(DrawCommand::DrawIcon {
            icon: icon.clone(),
            color,
            rect,
        });
    }

    fn draw_image(&mut self, image: &ImageHandle, rect: Rect) {
        self.commands.push(DrawCommand::DrawImage {
            handle: image.clone(),
            rect,
        });
    }
}
