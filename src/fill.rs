use crate::canvas::Canvas;
use crate::state::{ColorSource, StateSet};
use crate::{Bounds, Color, ColorFilter, Outline, Paint};

/// A rounded rectangle filled with a flat or state-dependent color.
///
/// The radius is expected to be non-negative; clamping it is up to the caller.
///
/// # Examples
///
/// ```
/// use cardshadow::{Bounds, Color, RecordingCanvas, RoundRectFill};
///
/// let mut fill = RoundRectFill::new(Some(Color::WHITE.into()), 12.0);
/// fill.set_bounds(Bounds::new(0, 0, 120, 80));
///
/// let mut canvas = RecordingCanvas::new();
/// fill.draw(&mut canvas);
/// assert_eq!(canvas.commands().len(), 1);
/// assert_eq!(fill.outline().radius, 12.0);
/// ```
#[derive(Debug, Clone)]
pub struct RoundRectFill {
    background: ColorSource,
    states: StateSet,
    paint: Paint,
    radius: f32,
    bounds: Bounds,
}

impl RoundRectFill {
    /// `None` fills with transparent.
    pub fn new(background: Option<ColorSource>, radius: f32) -> Self {
        let background = background.unwrap_or_default();
        let states = StateSet::EMPTY;
        let paint = Paint::new(background.resolve(&states));
        Self {
            background,
            states,
            paint,
            radius,
            bounds: Bounds::default(),
        }
    }

    /// Replaces the color source. Returns whether the painted color changed.
    pub fn set_color_source(&mut self, background: ColorSource) -> bool {
        let color = background.resolve(&self.states);
        self.background = background;
        self.apply_color(color)
    }

    /// Re-resolves the color for a new state set. Returns whether a redraw is needed.
    pub fn on_state_changed(&mut self, states: &StateSet) -> bool {
        self.states = *states;
        let color = self.background.resolve(&self.states);
        self.apply_color(color)
    }

    pub fn set_bounds(&mut self, bounds: Bounds) -> bool {
        if self.bounds == bounds {
            return false;
        }
        self.bounds = bounds;
        true
    }

    /// Returns whether a redraw is needed.
    pub fn set_alpha(&mut self, alpha: u8) -> bool {
        if self.paint.alpha == alpha {
            return false;
        }
        self.paint.alpha = alpha;
        true
    }

    /// Returns whether a redraw is needed.
    pub fn set_color_filter(&mut self, color_filter: Option<ColorFilter>) -> bool {
        if self.paint.color_filter == color_filter {
            return false;
        }
        self.paint.color_filter = color_filter;
        true
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.draw_round_rect(self.bounds.to_box2d(), self.radius, &self.paint);
    }

    pub fn compute_outline(bounds: &Bounds, radius: f32) -> Outline {
        Outline::round_rect(bounds.to_box2d(), radius)
    }

    pub fn outline(&self) -> Outline {
        Self::compute_outline(&self.bounds, self.radius)
    }

    pub fn color(&self) -> Color {
        self.paint.color
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_stateful(&self) -> bool {
        self.background.is_stateful()
    }

    fn apply_color(&mut self, color: Color) -> bool {
        if self.paint.color == color {
            return false;
        }
        self.paint.color = color;
        true
    }
}
