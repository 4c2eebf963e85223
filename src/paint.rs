//! Paints, gradient shaders and mask filters carried by draw commands.
//!
//! Every paint fills its shape. Gradients clamp to their end colors past the first and
//! last stop.

use crate::util::modulate_alpha;
use crate::Color;
use lyon::math::Point;
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Debug, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    #[inline]
    pub fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

pub type GradientStops = SmallVec<[GradientStop; 3]>;

/// Three stops: solid `start` up to `solid_until`, then fading to `end` at 1.
pub(crate) fn fade_stops(start: Color, end: Color, solid_until: f32) -> GradientStops {
    smallvec![
        GradientStop::new(0.0, start),
        GradientStop::new(solid_until, start),
        GradientStop::new(1.0, end),
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Point,
    pub radius: f32,
    pub stops: GradientStops,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: GradientStops,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shader {
    Radial(RadialGradient),
    Linear(LinearGradient),
}

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum BlurStyle {
    Normal,
    Solid,
    /// Only the blur outside the shape is drawn.
    Outer,
    Inner,
}

/// Transforms the paint color before it is painted.
///
/// # Examples
///
/// ```
/// use cardshadow::{Color, ColorFilter};
///
/// let tint = ColorFilter::Tint(Color::rgb(0, 120, 255));
/// assert_eq!(tint.apply(Color::rgba(255, 255, 255, 128)), Color::rgba(0, 120, 255, 128));
/// ```
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum ColorFilter {
    /// Replaces the color channels with the tint, keeping the coverage of the source
    /// (source-in blending). The tint alpha scales the result.
    Tint(Color),
    /// Scales each color channel by `multiply / 255` and adds `add`, saturating.
    /// Alpha is left untouched.
    Lighting { multiply: Color, add: Color },
}

impl ColorFilter {
    pub fn apply(&self, color: Color) -> Color {
        let [r, g, b, a] = color.0;
        match *self {
            ColorFilter::Tint(tint) => {
                let [tr, tg, tb, ta] = tint.0;
                Color([tr, tg, tb, modulate_alpha(ta, a)])
            }
            ColorFilter::Lighting { multiply, add } => {
                let channel = |value: u8, index: usize| {
                    modulate_alpha(value, multiply.0[index]).saturating_add(add.0[index])
                };
                Color([channel(r, 0), channel(g, 1), channel(b, 2), a])
            }
        }
    }
}

/// A soft mask applied to the coverage of a shape before it is painted.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct BlurMaskFilter {
    pub radius: f32,
    pub style: BlurStyle,
}

impl BlurMaskFilter {
    /// Returns `None` for a radius that would not blur anything.
    pub fn new(radius: f32, style: BlurStyle) -> Option<Self> {
        (radius > 0.0).then_some(Self { radius, style })
    }
}

/// Everything a rasterizer needs to know to paint one shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    pub color: Color,
    /// Alpha applied on top of the color and shader, 255 leaves them untouched.
    pub alpha: u8,
    pub anti_alias: bool,
    pub dither: bool,
    pub shader: Option<Shader>,
    pub color_filter: Option<ColorFilter>,
    pub mask_filter: Option<BlurMaskFilter>,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            alpha: 255,
            anti_alias: true,
            dither: true,
            shader: None,
            color_filter: None,
            mask_filter: None,
        }
    }
}

impl Paint {
    #[inline]
    pub fn new(color: impl Into<Color>) -> Self {
        Self {
            color: color.into(),
            ..Self::default()
        }
    }

    pub fn with_mask_filter(mut self, mask_filter: Option<BlurMaskFilter>) -> Self {
        self.mask_filter = mask_filter;
        self
    }

    /// Solid color after the color filter and the paint alpha.
    #[inline]
    pub fn effective_color(&self) -> Color {
        let color = match &self.color_filter {
            Some(filter) => filter.apply(self.color),
            None => self.color,
        };
        color.modulate(self.alpha)
    }

    /// True if painting would leave the destination untouched.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alpha == 0 || (self.shader.is_none() && self.color.alpha() == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::{fade_stops, BlurMaskFilter, BlurStyle, ColorFilter, Paint};
    use crate::Color;

    #[test]
    fn blur_needs_positive_radius() {
        assert!(BlurMaskFilter::new(0.0, BlurStyle::Outer).is_none());
        assert_eq!(
            BlurMaskFilter::new(4.0, BlurStyle::Outer).map(|filter| filter.radius),
            Some(4.0)
        );
    }

    #[test]
    fn fade_stops_hold_start_color_until_ratio() {
        let stops = fade_stops(Color::BLACK, Color::TRANSPARENT, 0.25);
        let offsets: Vec<f32> = stops.iter().map(|stop| stop.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.25, 1.0]);
        assert_eq!(stops[1].color, Color::BLACK);
        assert_eq!(stops[2].color, Color::TRANSPARENT);
    }

    #[test]
    fn transparent_paint_is_empty() {
        assert!(Paint::new(Color::TRANSPARENT).is_empty());
        let mut paint = Paint::new(Color::WHITE);
        assert!(!paint.is_empty());
        paint.alpha = 0;
        assert!(paint.is_empty());
    }

    #[test]
    fn lighting_filter_scales_and_offsets_channels() {
        let filter = ColorFilter::Lighting {
            multiply: Color::rgb(255, 128, 0),
            add: Color::rgba(0, 0, 40, 0),
        };
        assert_eq!(
            filter.apply(Color::rgba(200, 200, 200, 90)),
            Color::rgba(200, 100, 40, 90)
        );

        let saturating = ColorFilter::Lighting {
            multiply: Color::WHITE,
            add: Color::rgb(100, 0, 0),
        };
        assert_eq!(saturating.apply(Color::rgb(200, 0, 0)).to_array()[0], 255);
    }

    #[test]
    fn effective_color_filters_before_alpha() {
        let mut paint = Paint::new(Color::WHITE);
        assert_eq!(paint.effective_color(), Color::WHITE);

        paint.color_filter = Some(ColorFilter::Tint(Color::rgba(0, 0, 255, 255)));
        paint.alpha = 128;
        assert_eq!(paint.effective_color(), Color::rgba(0, 0, 255, 128));
    }
}
