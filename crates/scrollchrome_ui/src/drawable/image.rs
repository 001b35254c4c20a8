use crate::color::Color;
use crate::geometry::{Rect, Size};
use crate::icon::SvgIcon;
use crate::image::ImageHandle;
use crate::paint::PaintSurface;

use super::{DrawContext, Drawable, DrawableBase};

/// What an [`ImageDrawable`] paints.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// Vector icon recolored at paint time.
    Icon { icon: SvgIcon, color: Color },
    /// RGBA bitmap.
    Bitmap(ImageHandle),
}

/// An icon or bitmap placed inside a rectangle.
///
/// Non-stretched images keep their own size (clipped to the target) and are
/// optionally centered on each axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDrawable {
    base: DrawableBase,
    pub source: ImageSource,
    pub stretch: bool,
    pub center_horizontal: bool,
    pub center_vertical: bool,
}

impl ImageDrawable {
    pub fn new(source: ImageSource) -> Self {
        Self {
            base: DrawableBase::default(),
            source,
            stretch: false,
            center_horizontal: true,
            center_vertical: true,
        }
    }

    /// Non-stretched, centered icon.
    pub fn icon(icon: SvgIcon, color: Color) -> Self {
        Self::new(ImageSource::Icon { icon, color })
    }

    pub fn with_stretch(mut self, stretch: bool) -> Self {
        self.stretch = stretch;
        self
    }

    /// Natural size of a bitmap, in pixels. Icons have none.
    pub fn natural_size(&self) -> Option<Size> {
        match &self.source {
            ImageSource::Bitmap(handle) => {
                Some(Size::new(handle.width() as f32, handle.height() as f32))
            }
            ImageSource::Icon { .. } => None,
        }
    }

    /// Where an image of `size` lands inside `rect`.
    pub fn placement(&self, rect: Rect, size: Size) -> Rect {
        if self.stretch {
            return rect;
        }
        let size = size.min(rect.size()).non_negative();
        let x = if self.center_horizontal {
            rect.x + (rect.width - size.width) / 2.0
        } else {
            rect.x
        };
        let y = if self.center_vertical {
            rect.y + (rect.height - size.height) / 2.0
        } else {
            rect.y
        };
        Rect::new(x, y, size.width, size.height)
    }

    /// Paint at `size` inside `rect`.
    pub fn draw_sized(&self, rect: Rect, size: Size, surface: &mut dyn PaintSurface) {
        if !self.is_visible() {
            return;
        }
        let target = self.placement(rect, size);
        if target.is_empty() {
            return;
        }
        match &self.source {
            ImageSource::Icon { icon, color } => surface.draw_icon(icon, *color, target),
            ImageSource::Bitmap(handle) => surface.draw_image(handle, target),
        }
    }
}

impl Drawable for ImageDrawable {
    fn base(&self) -> &DrawableBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut DrawableBase {
        &mut self.base
    }

    fn measure(&self, ctx: &DrawContext) -> Size {
        match self.natural_size() {
            Some(px) => Size::new(px.width / ctx.scale_factor, px.height / ctx.scale_factor),
            None => self.bounds().size(),
        }
    }

    fn draw(&self, ctx: &DrawContext, surface: &mut dyn PaintSurface) {
        let bounds = self.bounds();
        let size = if self.stretch {
            bounds.size()
        } else {
            self.measure(ctx)
        };
        self.draw_sized(bounds, size, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::ArrowDirection;
    use crate::paint::{DrawCommand, RecordingSurface};

    #[test]
    fn test_centered_icon() {
        let drawable = ImageDrawable::icon(ArrowDirection::Up.default_icon(), Color::BLACK);
        let mut surface = RecordingSurface::new();
        drawable.draw_sized(Rect::new(0.0, 0.0, 17.0, 17.0), Size::splat(9.0), &mut surface);

        assert_eq!(surface.commands()[0].rect(), Rect::new(4.0, 4.0, 9.0, 9.0));
    }

    #[test]
    fn test_size_clipped_to_rect() {
        let drawable = ImageDrawable::icon(ArrowDirection::Left.default_icon(), Color::BLACK);
        let placed = drawable.placement(Rect::new(10.0, 10.0, 4.0, 20.0), Size::splat(9.0));
        assert_eq!(placed, Rect::new(10.0, 15.5, 4.0, 9.0));
    }

    #[test]
    fn test_stretched_bitmap_fills_bounds() {
        let handle = ImageHandle::from_rgba8(vec![255; 16], 2, 2).unwrap();
        let mut drawable = ImageDrawable::new(ImageSource::Bitmap(handle)).with_stretch(true);
        drawable.set_bounds(Rect::new(0.0, 0.0, 20.0, 10.0));

        let mut surface = RecordingSurface::new();
        drawable.draw(&DrawContext::default(), &mut surface);
        assert!(matches!(
            &surface.commands()[0],
            DrawCommand::DrawImage { rect, .. } if *rect == Rect::new(0.0, 0.0, 20.0, 10.0)
        ));
    }
}
