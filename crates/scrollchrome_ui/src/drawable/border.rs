use crate::color::Color;
use crate::geometry::{Rect, Thickness};
use crate::paint::PaintSurface;

use super::{DrawContext, Drawable, DrawableBase};

/// One side of a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderEdge {
    Top,
    Bottom,
    Left,
    Right,
}

/// A solid border with per-side widths.
///
/// Top and bottom strips span the full width; left and right strips sit
/// between them, so the four strips and the deflated inner rectangle tile
/// the bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderDrawable {
    base: DrawableBase,
    pub widths: Thickness,
    pub color: Color,
}

impl BorderDrawable {
    pub fn new(widths: Thickness, color: Color) -> Self {
        Self {
            base: DrawableBase::default(),
            widths,
            color,
        }
    }

    pub fn uniform(width: f32, color: Color) -> Self {
        Self::new(Thickness::uniform(width), color)
    }

    /// Widths that take part in layout: zero when hidden.
    pub fn effective_widths(&self) -> Thickness {
        if self.is_visible() {
            self.widths.non_negative()
        } else {
            Thickness::ZERO
        }
    }

    /// Whether the border occupies any space.
    pub fn has_border(&self) -> bool {
        !self.effective_widths().is_zero()
    }

    /// The strip of `edge` inside `bounds`, clamped to the bounds.
    pub fn edge_rect(&self, bounds: Rect, edge: BorderEdge) -> Rect {
        let w = self.effective_widths();
        let top = w.top.min(bounds.height);
        let bottom = w.bottom.min(bounds.height - top).max(0.0);
        let middle = (bounds.height - top - bottom).max(0.0);
        let left = w.left.min(bounds.width);
        let right = w.right.min(bounds.width - left).max(0.0);

        match edge {
            BorderEdge::Top => Rect::new(bounds.x, bounds.y, bounds.width, top),
            BorderEdge::Bottom => Rect::new(bounds.x, bounds.bottom() - bottom, bounds.width, bottom),
            BorderEdge::Left => Rect::new(bounds.x, bounds.y + top, left, middle),
            BorderEdge::Right => Rect::new(bounds.right() - right, bounds.y + top, right, middle),
        }
    }

    /// All four strips: top, bottom, left, right.
    pub fn edge_rects(&self, bounds: Rect) -> [(BorderEdge, Rect); 4] {
        [BorderEdge::Top, BorderEdge::Bottom, BorderEdge::Left, BorderEdge::Right]
            .map(|edge| (edge, self.edge_rect(bounds, edge)))
    }

    pub fn draw_in(&self, bounds: Rect, surface: &mut dyn PaintSurface) {
        if !self.has_border() {
            return;
        }
        for (_, rect) in self.edge_rects(bounds) {
            if !rect.is_empty() {
                surface.fill_rect(rect, self.color);
            }
        }
    }
}

impl Drawable for BorderDrawable {
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
    use crate::paint::RecordingSurface;

    #[test]
    fn test_strips_tile_bounds() {
        let bounds = Rect::new(10.0, 20.0, 100.0, 60.0);
        let border = BorderDrawable::new(Thickness::new(1.0, 2.0, 3.0, 4.0), Color::BLACK);
        let inner = bounds.deflate(border.effective_widths());

        let strips: f32 = border.edge_rects(bounds).iter().map(|(_, r)| r.area()).sum();
        assert!((strips + inner.area() - bounds.area()).abs() < 0.001);

        assert_eq!(border.edge_rect(bounds, BorderEdge::Top), Rect::new(10.0, 20.0, 100.0, 1.0));
        assert_eq!(border.edge_rect(bounds, BorderEdge::Bottom), Rect::new(10.0, 77.0, 100.0, 3.0));
        assert_eq!(border.edge_rect(bounds, BorderEdge::Left), Rect::new(10.0, 21.0, 4.0, 56.0));
        assert_eq!(border.edge_rect(bounds, BorderEdge::Right), Rect::new(108.0, 21.0, 2.0, 56.0));
    }

    const BOUNDS: [Rect; 4] = [
        Rect { x: 0.0, y: 0.0, width: 10.0, height: 10.0 },
        Rect { x: 5.0, y: -3.0, width: 40.0, height: 12.0 },
        Rect { x: 1.5, y: 2.5, width: 7.0, height: 30.0 },
        Rect { x: 0.0, y: 0.0, width: 2.0, height: 2.0 },
    ];

    const WIDTHS: [f32; 5] = [0.0, 0.5, 1.0, 3.0, 6.0];

    fn assert_disjoint(rects: &[Rect]) {
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(a.intersect(b).area() < 0.001, "{:?} overlaps {:?}", a, b);
            }
        }
    }

    fn assert_inside(rect: Rect, bounds: Rect) {
        if !rect.is_empty() {
            let eps = 0.001;
            assert!(
                rect.x >= bounds.x - eps
                    && rect.y >= bounds.y - eps
                    && rect.right() <= bounds.right() + eps
                    && rect.bottom() <= bounds.bottom() + eps,
                "{:?} leaves {:?}",
                rect,
                bounds
            );
        }
    }

    #[test]
    fn test_strips_tile_every_bounds_and_width() {
        for bounds in BOUNDS {
            for top in WIDTHS {
                for right in WIDTHS {
                    for bottom in WIDTHS {
                        for left in WIDTHS {
                            let widths = Thickness::new(top, right, bottom, left);
                            let half_w = bounds.width / 2.0;
                            let half_h = bounds.height / 2.0;
                            if left > half_w || right > half_w || top > half_h || bottom > half_h {
                                continue;
                            }
                            let border = BorderDrawable::new(widths, Color::BLACK);
                            let inner = bounds.deflate(widths);
                            let mut rects: Vec<Rect> =
                                border.edge_rects(bounds).iter().map(|(_, r)| *r).collect();
                            rects.push(inner);

                            assert_disjoint(&rects);
                            let total: f32 = rects.iter().map(Rect::area).sum();
                            assert!((total - bounds.area()).abs() < 0.001, "{:?} {:?}", bounds, widths);
                            for rect in rects {
                                assert_inside(rect, bounds);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_oversized_strips_clamp_to_bounds() {
        for bounds in BOUNDS {
            for widths in [
                Thickness::uniform(bounds.width.max(bounds.height)),
                Thickness::new(bounds.height, 0.0, 1.0, 0.0),
                Thickness::new(0.0, bounds.width * 0.75, 0.0, bounds.width * 0.75),
                Thickness::new(bounds.height * 0.6, 1.0, bounds.height * 0.6, 1.0),
            ] {
                let border = BorderDrawable::new(widths, Color::BLACK);
                let rects: Vec<Rect> = border.edge_rects(bounds).iter().map(|(_, r)| *r).collect();

                assert_disjoint(&rects);
                for rect in &rects {
                    assert!(rect.width >= 0.0 && rect.height >= 0.0);
                    assert_inside(*rect, bounds);
                }
                // one axis is fully consumed, so the strips alone cover the bounds
                let total: f32 = rects.iter().map(Rect::area).sum();
                assert!((total - bounds.area()).abs() < 0.001, "{:?} {:?}", bounds, widths);
                assert!(bounds.deflate(widths).is_empty());
            }
        }
    }

    #[test]
    fn test_hidden_border_has_zero_width() {
        let mut border = BorderDrawable::uniform(2.0, Color::BLACK);
        border.set_visible(false);
        assert!(!border.has_border());
        assert!(border.edge_rect(Rect::new(0.0, 0.0, 10.0, 10.0), BorderEdge::Top).is_empty());

        let mut surface = RecordingSurface::new();
        border.draw_in(Rect::new(0.0, 0.0, 10.0, 10.0), &mut surface);
        assert!(surface.is_empty());
    }
}
