use scrollchrome_ui::{sanitize_scale, Color, ImageHandle, PaintSurface, Rect, Size, SvgIcon};
use tiny_skia::{FilterQuality, IntSize, Paint, Pixmap, PixmapPaint, Transform};

use crate::error::{RasterError, Result};
use crate::icon::IconCache;

/// A [`PaintSurface`] backed by a tiny-skia pixmap.
///
/// Drawing inputs are in device-independent units; they are multiplied by
/// the scale factor and snapped to whole pixels before rasterization.
#[derive(Debug)]
pub struct PixmapSurface {
    pixmap: Pixmap,
    scale_factor: f32,
    icons: IconCache,
}

/// Pixel-space rectangle with integer edges.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PixelRect {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

impl PixelRect {
    fn width(&self) -> f32 {
        self.right - self.left
    }

    fn height(&self) -> f32 {
        self.bottom - self.top
    }

    fn to_skia(self) -> Option<tiny_skia::Rect> {
        tiny_skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

impl PixmapSurface {
    /// Create a transparent surface of `width` x `height` pixels.
    pub fn new(width: u32, height: u32, scale_factor: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidSize { width, height });
        }
        let pixmap = Pixmap::new(width, height).ok_or(RasterError::PixmapCreation { width, height })?;
        log::debug!(
            "Created pixmap surface {}x{} at scale {}",
            width,
            height,
            scale_factor
        );
        Ok(Self {
            pixmap,
            scale_factor: sanitize_scale(scale_factor),
            icons: IconCache::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Surface size in device-independent units.
    pub fn size(&self) -> Size {
        Size::new(
            self.width() as f32 / self.scale_factor,
            self.height() as f32 / self.scale_factor,
        )
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn icon_cache(&self) -> &IconCache {
        &self.icons
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        let [r, g, b, a] = color.to_rgba8();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    /// Demultiplied RGBA of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Demultiplied RGBA bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    fn to_pixels(&self, rect: Rect) -> Option<PixelRect> {
        let rect = rect.normalized();
        let s = self.scale_factor;
        let px = PixelRect {
            left: (rect.x * s).round(),
            top: (rect.y * s).round(),
            right: (rect.right() * s).round(),
            bottom: (rect.bottom() * s).round(),
        };
        (px.width() > 0.0 && px.height() > 0.0).then_some(px)
    }

    fn fill_pixels(&mut self, rect: PixelRect, color: Color) {
        let Some(skia_rect) = rect.to_skia() else {
            return;
        };
        let [r, g, b, a] = color.to_rgba8();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = false;
        self.pixmap
            .fill_rect(skia_rect, &paint, Transform::identity(), None);
    }
}

impl PaintSurface for PixmapSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if color.is_transparent() {
            return;
        }
        if let Some(px) = self.to_pixels(rect) {
            self.fill_pixels(px, color);
        }
    }

    /// The stroke lies entirely inside `rect`.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        if color.is_transparent() || width <= 0.0 {
            return;
        }
        let Some(px) = self.to_pixels(rect) else {
            return;
        };
        let stroke = (width * self.scale_factor).round().max(1.0);

        if stroke * 2.0 >= px.width() || stroke * 2.0 >= px.height() {
            self.fill_pixels(px, color);
            return;
        }

        let edges = [
            PixelRect {
                bottom: px.top + stroke,
                ..px
            },
            PixelRect {
                top: px.bottom - stroke,
                ..px
            },
            PixelRect {
                top: px.top + stroke,
                bottom: px.bottom - stroke,
                right: px.left + stroke,
                ..px
            },
            PixelRect {
                top: px.top + stroke,
                bottom: px.bottom - stroke,
                left: px.right - stroke,
                ..px
            },
        ];
        for edge in edges {
            self.fill_pixels(edge, color);
        }
    }

    fn draw_icon(&mut self, icon: &SvgIcon, color: Color, rect: Rect) {
        if color.is_transparent() {
            return;
        }
        let Some(px) = self.to_pixels(rect) else {
            return;
        };
        let (width, height) = (px.width() as u32, px.height() as u32);

        let icon_pixmap = match self.icons.get_or_rasterize(icon, width, height, color) {
            Ok(pixmap) => pixmap,
            Err(e) => {
                log::error!("Failed to rasterize icon '{}': {}", icon.name(), e);
                return;
            }
        };

        let paint = PixmapPaint {
            opacity: color.a.clamp(0.0, 1.0),
            ..PixmapPaint::default()
        };
        self.pixmap.draw_pixmap(
            px.left as i32,
            px.top as i32,
            icon_pixmap.as_ref(),
            &paint,
            Transform::identity(),
            None,
        );
    }

    fn draw_image(&mut self, image: &ImageHandle, rect: Rect) {
        let Some(px) = self.to_pixels(rect) else {
            return;
        };
        let Some(source) = premultiplied_pixmap(image) else {
            log::warn!(
                "Skipping image {}x{}: cannot build pixmap",
                image.width(),
                image.height()
            );
            return;
        };

        let sx = px.width() / image.width() as f32;
        let sy = px.height() / image.height() as f32;
        let transform = Transform::from_scale(sx, sy).post_translate(px.left, px.top);
        let paint = PixmapPaint {
            quality: FilterQuality::Nearest,
            ..PixmapPaint::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);
    }
}

/// Straight-alpha RGBA8 to a premultiplied pixmap.
fn premultiplied_pixmap(image: &ImageHandle) -> Option<Pixmap> {
    let size = IntSize::from_wh(image.width(), image.height())?;
    let premultiply = |c: u8, a: u8| ((c as u16 * a as u16 + 127) / 255) as u8;
    let data = image
        .data()
        .chunks_exact(4)
        .flat_map(|p| {
            let a = p[3];
            [premultiply(p[0], a), premultiply(p[1], a), premultiply(p[2], a), a]
        })
        .collect();
    Pixmap::from_vec(data, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollchrome_ui::{ArrowDirection, Drawable, HostState, InteriorDrawable, KnownTheme};

    const RED: [u8; 4] = [255, 0, 0, 255];
    const CLEAR: [u8; 4] = [0, 0, 0, 0];

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            PixmapSurface::new(0, 10, 1.0),
            Err(RasterError::InvalidSize { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_fill_scaled_to_pixels() {
        let mut surface = PixmapSurface::new(8, 8, 2.0).unwrap();
        surface.fill_rect(Rect::new(1.0, 1.0, 2.0, 2.0), Color::rgb8(255, 0, 0));

        assert_eq!(surface.pixel(1, 1), Some(CLEAR));
        assert_eq!(surface.pixel(2, 2), Some(RED));
        assert_eq!(surface.pixel(5, 5), Some(RED));
        assert_eq!(surface.pixel(6, 6), Some(CLEAR));
        assert_eq!(surface.size(), Size::new(4.0, 4.0));
    }

    #[test]
    fn test_stroke_is_inside() {
        let mut surface = PixmapSurface::new(10, 10, 1.0).unwrap();
        surface.stroke_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::rgb8(255, 0, 0), 1.0);

        assert_eq!(surface.pixel(0, 0), Some(RED));
        assert_eq!(surface.pixel(9, 5), Some(RED));
        assert_eq!(surface.pixel(5, 9), Some(RED));
        assert_eq!(surface.pixel(1, 1), Some(CLEAR));
        assert_eq!(surface.pixel(5, 5), Some(CLEAR));
    }

    #[test]
    fn test_icon_drawn_and_cached() {
        let mut surface = PixmapSurface::new(16, 16, 1.0).unwrap();
        let icon = ArrowDirection::Down.default_icon();
        let rect = Rect::new(0.0, 0.0, 16.0, 16.0);

        surface.draw_icon(&icon, Color::rgb8(255, 0, 0), rect);
        surface.draw_icon(&icon, Color::rgb8(255, 0, 0), rect);

        assert_eq!(surface.pixel(8, 7), Some(RED));
        assert_eq!(surface.pixel(8, 2), Some(CLEAR));
        assert_eq!(surface.icon_cache().len(), 1);
    }

    #[test]
    fn test_image_scaled_nearest() {
        #[rustfmt::skip]
        let data = vec![
            255, 0, 0, 255,   0, 255, 0, 255,
            0, 0, 255, 255,   255, 255, 255, 255,
        ];
        let handle = ImageHandle::from_rgba8(data, 2, 2).unwrap();
        let mut surface = PixmapSurface::new(4, 4, 1.0).unwrap();
        surface.draw_image(&handle, Rect::new(0.0, 0.0, 4.0, 4.0));

        assert_eq!(surface.pixel(0, 0), Some(RED));
        assert_eq!(surface.pixel(3, 0), Some([0, 255, 0, 255]));
        assert_eq!(surface.pixel(0, 3), Some([0, 0, 255, 255]));
        assert_eq!(surface.pixel(3, 3), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_rgba_output_is_demultiplied() {
        let mut surface = PixmapSurface::new(2, 2, 1.0).unwrap();
        surface.clear(Color::rgba8(255, 0, 0, 128));

        let bytes = surface.to_rgba8();
        assert_eq!(bytes.len(), 16);
        assert_eq!(bytes[3], 128);
        assert!(bytes[0] >= 254);
    }

    #[test]
    fn test_paint_themed_interior() {
        let mut interior = InteriorDrawable::themed(KnownTheme::WindowsDark, true);
        interior.set_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));
        let host = HostState::default();

        let mut surface = PixmapSurface::new(100, 100, 1.0).unwrap();
        interior.paint(&host, &mut surface);

        assert_eq!(surface.pixel(0, 0), Some([67, 67, 70, 255]));
        assert_eq!(surface.pixel(90, 90), Some([102, 102, 102, 255]));
        // vertical scrollbar track
        assert_eq!(surface.pixel(90, 50), Some([46, 46, 46, 255]));
    }
}
