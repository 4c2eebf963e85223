//! Rectangles, outlines and padding exchanged with the host surface.

use lyon::math::{point, Box2D};

/// An integer rectangle in device pixels, `right` and `bottom` exclusive.
///
/// # Examples
///
/// ```
/// use cardshadow::Bounds;
///
/// let bounds = Bounds::new(0, 0, 200, 100);
/// assert_eq!(bounds.width(), 200);
/// assert_eq!(bounds.inset(8.0, 12.0), Bounds::new(8, 12, 192, 88));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Saturates instead of overflowing, so inverted extreme rects stay negative.
    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Shrinks the rectangle by `dx` on the left and right and `dy` on the top and
    /// bottom. Each resulting edge is truncated toward zero.
    pub fn inset(&self, dx: f32, dy: f32) -> Bounds {
        Bounds {
            left: (self.left as f32 + dx) as i32,
            top: (self.top as f32 + dy) as i32,
            right: (self.right as f32 - dx) as i32,
            bottom: (self.bottom as f32 - dy) as i32,
        }
    }

    /// Float rectangle inset by `amount` on every side, without truncation.
    pub fn inset_f32(&self, amount: f32) -> Box2D {
        Box2D::new(
            point(self.left as f32 + amount, self.top as f32 + amount),
            point(self.right as f32 - amount, self.bottom as f32 - amount),
        )
    }

    pub fn to_box2d(&self) -> Box2D {
        self.inset_f32(0.0)
    }
}

impl core::fmt::Display for Bounds {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Bounds({}, {} - {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Rounded-rect geometry reported to the host for clipping and elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub rect: Box2D,
    pub radius: f32,
}

impl Outline {
    pub fn round_rect(rect: Box2D, radius: f32) -> Self {
        Self { rect, radius }
    }
}

/// Padding the host should apply around card content so it clears the shadow.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub horizontal: f32,
    pub vertical: f32,
}
