use crate::paint::{fade_stops, LinearGradient, RadialGradient, Shader};
use crate::tessellation::{tessellate_fill, TessellatedFill};
use crate::{Color, ShadowError};
use lyon::geom::Arc;
use lyon::math::{point, vector, Angle, Point};
use lyon::path::{FillRule, Path};

/// The shadow around one rounded corner: an annular quarter ring between the corner
/// radius and the corner radius plus the shadow size, with its radial gradient.
///
/// The geometry lives in a local frame centered on the top-left corner's arc center.
/// The other three corners reuse it by rotating the canvas.
#[derive(Debug, Clone)]
pub struct CornerShadow {
    path: Path,
    gradient: RadialGradient,
    inner_radius: f32,
    outer_radius: f32,
}

impl CornerShadow {
    pub(crate) fn empty() -> Self {
        Self {
            path: Path::new(),
            gradient: RadialGradient {
                center: Point::origin(),
                radius: 0.0,
                stops: fade_stops(Color::TRANSPARENT, Color::TRANSPARENT, 0.0),
            },
            inner_radius: 0.0,
            outer_radius: 0.0,
        }
    }

    pub fn build(corner_radius: f32, shadow_size: f32, start: Color, end: Color) -> Self {
        let inner_radius = corner_radius.max(0.0);
        let outer_radius = inner_radius + shadow_size.max(0.0);

        let mut builder = Path::builder();
        builder.begin(point(-inner_radius, 0.0));
        builder.line_to(point(-outer_radius, 0.0));
        // outer arc
        for_each_arc_segment(outer_radius, 180.0, 90.0, &mut |ctrl, to| {
            builder.quadratic_bezier_to(ctrl, to);
        });
        builder.line_to(point(0.0, -inner_radius));
        // inner arc
        for_each_arc_segment(inner_radius, 270.0, -90.0, &mut |ctrl, to| {
            builder.quadratic_bezier_to(ctrl, to);
        });
        builder.close();

        let solid_until = if outer_radius > 0.0 {
            inner_radius / outer_radius
        } else {
            0.0
        };

        Self {
            path: builder.build(),
            gradient: RadialGradient {
                center: Point::origin(),
                radius: outer_radius,
                stops: fade_stops(start, end, solid_until),
            },
            inner_radius,
            outer_radius,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The ring is closed by two arcs of opposite direction, so it is filled even-odd.
    pub fn fill_rule(&self) -> FillRule {
        FillRule::EvenOdd
    }

    pub fn gradient(&self) -> &RadialGradient {
        &self.gradient
    }

    pub fn shader(&self) -> Shader {
        Shader::Radial(self.gradient.clone())
    }

    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> f32 {
        self.outer_radius
    }

    pub fn tessellate(&self, tolerance: f32) -> Result<TessellatedFill, ShadowError> {
        tessellate_fill(&self.path, self.fill_rule(), tolerance)
    }
}

/// Calls `segment(ctrl, to)` for the quadratic pieces of an arc around the origin.
/// A zero radius arc emits nothing, the surrounding lines already meet at the origin.
fn for_each_arc_segment(
    radius: f32,
    start_degrees: f32,
    sweep_degrees: f32,
    segment: &mut dyn FnMut(Point, Point),
) {
    if radius <= 0.0 {
        return;
    }

    let arc = Arc {
        center: Point::origin(),
        radii: vector(radius, radius),
        start_angle: Angle::degrees(start_degrees),
        sweep_angle: Angle::degrees(sweep_degrees),
        x_rotation: Angle::zero(),
    };
    arc.for_each_quadratic_bezier(&mut |quadratic| segment(quadratic.ctrl, quadratic.to));
}

/// Gradient for the straight shadow bands between corners. It spans twice the shadow
/// size: the outer half fades, the inner half stays solid and is only reached by the
/// bottom edge, which extends under the card to cover the downward shadow offset.
pub fn edge_gradient(corner_radius: f32, shadow_size: f32, start: Color, end: Color) -> LinearGradient {
    LinearGradient {
        start: point(0.0, -corner_radius + shadow_size),
        end: point(0.0, -corner_radius - shadow_size),
        stops: fade_stops(start, end, 0.5),
    }
}
