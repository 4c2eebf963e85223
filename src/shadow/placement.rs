use crate::Bounds;
use lyon::math::{point, Box2D, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    BottomRight,
    BottomLeft,
    TopRight,
}

/// Orientation of the straight shadow band a corner draws after its sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeAxis {
    Horizontal,
    Vertical,
}

/// Where and how one corner sector and its adjoining edge are drawn.
///
/// The canvas is translated to `anchor` and rotated by `rotation_degrees`; in that
/// frame the corner path is drawn as built and the edge band runs along +x from the
/// anchor for `edge_span` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerPlacement {
    pub corner: Corner,
    pub anchor: Point,
    pub rotation_degrees: f32,
    pub edge_axis: EdgeAxis,
    pub edge_span: f32,
    /// Local y of the edge band's inner side.
    pub edge_bottom: f32,
}

impl CornerPlacement {
    /// The edge band in the placement's local frame, or `None` when the corners leave
    /// no room for it.
    pub fn edge_rect(&self, edge_top: f32) -> Option<Box2D> {
        (self.edge_span > 0.0).then(|| {
            Box2D::new(point(0.0, edge_top), point(self.edge_span, self.edge_bottom))
        })
    }
}

/// The four corner placements in draw order: top-left, bottom-right, bottom-left,
/// top-right.
///
/// `inset` is the distance from each side of `content` to the arc centers. The
/// bottom-right corner draws the bottom edge, which reaches `shadow_size` under the
/// card to meet the downward shadow offset.
pub(crate) fn corner_placements(
    content: &Bounds,
    inset: f32,
    corner_radius: f32,
    shadow_size: f32,
) -> [CornerPlacement; 4] {
    let left = content.left as f32;
    let top = content.top as f32;
    let right = content.right as f32;
    let bottom = content.bottom as f32;
    let horizontal_span = (right - left) - 2.0 * inset;
    let vertical_span = (bottom - top) - 2.0 * inset;

    [
        CornerPlacement {
            corner: Corner::TopLeft,
            anchor: point(left + inset, top + inset),
            rotation_degrees: 0.0,
            edge_axis: EdgeAxis::Horizontal,
            edge_span: horizontal_span,
            edge_bottom: -corner_radius,
        },
        CornerPlacement {
            corner: Corner::BottomRight,
            anchor: point(right - inset, bottom - inset),
            rotation_degrees: 180.0,
            edge_axis: EdgeAxis::Horizontal,
            edge_span: horizontal_span,
            edge_bottom: -corner_radius + shadow_size,
        },
        CornerPlacement {
            corner: Corner::BottomLeft,
            anchor: point(left + inset, bottom - inset),
            rotation_degrees: 270.0,
            edge_axis: EdgeAxis::Vertical,
            edge_span: vertical_span,
            edge_bottom: -corner_radius,
        },
        CornerPlacement {
            corner: Corner::TopRight,
            anchor: point(right - inset, top + inset),
            rotation_degrees: 90.0,
            edge_axis: EdgeAxis::Vertical,
            edge_span: vertical_span,
            edge_bottom: -corner_radius,
        },
    ]
}
