use crate::color::Color;
use crate::geometry::Rect;
use crate::paint::PaintSurface;

use super::{DrawContext, Drawable, DrawableBase};

/// Outline of a rectangle, drawn inside its bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

impl StrokeStyle {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// A filled and/or outlined rectangle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RectangleDrawable {
    base: DrawableBase,
    pub fill: Option<Color>,
    pub stroke: Option<StrokeStyle>,
}

impl RectangleDrawable {
    pub fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            ..Self::default()
        }
    }

    pub fn new(fill: Option<Color>, stroke: Option<StrokeStyle>) -> Self {
        Self {
            base: DrawableBase::default(),
            fill,
            stroke,
        }
    }

    /// True when there is nothing to paint.
    pub fn is_blank(&self) -> bool {
        self.fill.is_none() && self.stroke.is_none()
    }

    /// Paint into `rect` instead of the stored bounds.
    pub fn draw_in(&self, rect: Rect, surface: &mut dyn PaintSurface) {
        if !self.is_visible() || rect.is_empty() {
            return;
        }
        if let Some(color) = self.fill {
            surface.fill_rect(rect, color);
        }
        if let Some(stroke) = self.stroke {
            if stroke.width > 0.0 {
                surface.stroke_rect(rect, stroke.color, stroke.width);
            }
        }
    }
}

impl Drawable for RectangleDrawable {
    fn base(&self) -> &DrawableBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut DrawableBase {
        &mut self.base
    }

    fn draw(&self, _ctx: &DrawContext, surface: &mut dyn PaintSurface) {
        self.draw_in(self.bounds(), surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{DrawCommand, RecordingSurface};

    #[test]
    fn test_fill_then_stroke() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let drawable = RectangleDrawable::new(
            Some(Color::WHITE),
            Some(StrokeStyle::new(Color::BLACK, 1.0)),
        );
        let mut surface = RecordingSurface::new();
        drawable.draw_in(rect, &mut surface);

        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::FillRect {
                    rect,
                    color: Color::WHITE
                },
                DrawCommand::StrokeRect {
                    rect,
                    color: Color::BLACK,
                    width: 1.0
                },
            ]
        );
    }

    #[test]
    fn test_empty_rect_or_hidden_draws_nothing() {
        let mut drawable = RectangleDrawable::filled(Color::WHITE);
        let mut surface = RecordingSurface::new();

        drawable.draw_in(Rect::new(5.0, 5.0, 0.0, 10.0), &mut surface);
        assert!(surface.is_empty());

        drawable.set_visible(false);
        drawable.draw_in(Rect::new(0.0, 0.0, 10.0, 10.0), &mut surface);
        assert!(surface.is_empty());
    }
}
