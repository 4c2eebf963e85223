//! The card shadow engine.
//!
//! [`ShadowGeometryEngine`] approximates a soft ambient shadow around a rounded
//! rectangle with nothing but analytic paths and gradients:
//!
//! - one corner sector (an even-odd filled quarter ring with a radial gradient) built
//!   once in a local frame and drawn four times by rotating the canvas,
//! - up to four edge bands (rects with a linear gradient) between the corners,
//! - an outer-blurred rounded rect for the ambient halo, and
//! - the card itself on top.
//!
//! Property setters only mark the engine dirty. Geometry is rebuilt once, on the next
//! [`draw`](ShadowGeometryEngine::draw) or
//! [`rebuild_if_dirty`](ShadowGeometryEngine::rebuild_if_dirty), so a burst of changes
//! costs a single rebuild.
//!
//! # Examples
//!
//! ```
//! use cardshadow::{Bounds, Color, RecordingCanvas, ShadowConfig, ShadowGeometryEngine};
//!
//! let mut engine = ShadowGeometryEngine::new(16.0, Color::GRAY, 8, ShadowConfig::default());
//! engine.set_background(Color::WHITE.into());
//! engine.set_bounds(Bounds::new(0, 0, 200, 100));
//!
//! let mut canvas = RecordingCanvas::new();
//! engine.draw(&mut canvas);
//!
//! assert_eq!(engine.content_bounds(), Bounds::new(8, 12, 192, 88));
//! assert_eq!(engine.shadow_size(), 13.0);
//! ```

mod corner;
mod placement;

pub use corner::{edge_gradient, CornerShadow};
pub use placement::{Corner, CornerPlacement, EdgeAxis};

use crate::canvas::{Canvas, SaveGuard};
use crate::paint::{BlurMaskFilter, BlurStyle, ColorFilter, LinearGradient, Paint, Shader};
use crate::state::{ColorSource, StateSet};
use crate::util::{to_even, COS_45};
use crate::{Bounds, Color, Outline, Padding, ShadowConfig, ShadowError};
use placement::corner_placements;
use tracing::{debug, trace, warn};

/// Paints one elevated card: its ambient shadow and the rounded-rect surface on top.
///
/// Each card owns its engine. Setters return whether the card needs to be redrawn.
/// Those that affect geometry also mark the engine dirty, and the geometry is rebuilt
/// lazily by the next [`draw`](Self::draw) or [`rebuild_if_dirty`](Self::rebuild_if_dirty).
pub struct ShadowGeometryEngine {
    config: ShadowConfig,
    /// Radius of the card as requested.
    radius: f32,
    /// `radius` rounded to whole pixels, used for the shadow geometry.
    corner_radius: f32,
    elevation: u32,
    /// Shadow size after even coercion and clamping.
    raw_shadow_size: f32,
    raw_max_shadow_size: f32,
    /// Blurred extent of the shadow beyond the corner radius.
    shadow_size: f32,
    background: ColorSource,
    states: StateSet,
    paint: Paint,
    blur_paint: Paint,
    corner_shadow_paint: Paint,
    edge_shadow_paint: Paint,
    corner_shadow: CornerShadow,
    bounds: Bounds,
    content_bounds: Bounds,
    dirty: bool,
    shadow_clip_warnings: u32,
    generation: u64,
}

impl ShadowGeometryEngine {
    /// Creates an engine for a card of `radius` raised by `elevation` pixels.
    ///
    /// The shadow size and its maximum both start at `elevation`, coerced to even. A
    /// negative radius is treated as 0. The card surface is transparent until
    /// [`set_background`](Self::set_background) is called.
    pub fn new(radius: f32, shadow_color: Color, elevation: u32, config: ShadowConfig) -> Self {
        let radius = radius.max(0.0);
        let mut engine = Self {
            config,
            radius,
            corner_radius: round_corner_radius(radius),
            elevation,
            raw_shadow_size: 0.0,
            raw_max_shadow_size: 0.0,
            shadow_size: 0.0,
            background: ColorSource::default(),
            states: StateSet::EMPTY,
            paint: Paint::new(Color::TRANSPARENT),
            blur_paint: Paint::new(shadow_color)
                .with_mask_filter(BlurMaskFilter::new(elevation as f32, BlurStyle::Outer)),
            corner_shadow_paint: Paint::default(),
            edge_shadow_paint: Paint {
                anti_alias: false,
                ..Paint::default()
            },
            corner_shadow: CornerShadow::empty(),
            bounds: Bounds::default(),
            content_bounds: Bounds::default(),
            dirty: true,
            shadow_clip_warnings: 0,
            generation: 0,
        };
        let size = to_even(elevation as f32) as f32;
        engine.apply_shadow_size(size, size);
        engine
    }

    /// Sets the shadow size and the maximum it may grow to, both in pixels.
    ///
    /// Both are coerced to even integers. A size above the maximum is clamped to it and
    /// a warning is logged the first time that happens. Returns whether anything changed;
    /// setting the same sizes again leaves the geometry clean.
    pub fn set_shadow_size(
        &mut self,
        shadow_size: f32,
        max_shadow_size: f32,
    ) -> Result<bool, ShadowError> {
        let shadow_size = ShadowError::require_non_negative("shadow size", shadow_size)?;
        let max_shadow_size =
            ShadowError::require_non_negative("max shadow size", max_shadow_size)?;

        let mut shadow_size = to_even(shadow_size) as f32;
        let max_shadow_size = to_even(max_shadow_size) as f32;
        if shadow_size > max_shadow_size {
            shadow_size = max_shadow_size;
            if self.shadow_clip_warnings == 0 {
                self.shadow_clip_warnings += 1;
                warn!(
                    shadow_size,
                    max_shadow_size, "shadow size is greater than max shadow size, clipping"
                );
            }
        }

        if self.raw_shadow_size == shadow_size && self.raw_max_shadow_size == max_shadow_size {
            return Ok(false);
        }
        self.apply_shadow_size(shadow_size, max_shadow_size);
        Ok(true)
    }

    /// Changes only the maximum, keeping the current shadow size. See
    /// [`set_shadow_size`](Self::set_shadow_size).
    pub fn set_max_shadow_size(&mut self, max_shadow_size: f32) -> Result<bool, ShadowError> {
        self.set_shadow_size(self.raw_shadow_size, max_shadow_size)
    }

    /// Changes the elevation: the blur radius, the card inset and both shadow sizes.
    /// Returns `false` and leaves the engine clean if the elevation is unchanged.
    pub fn set_elevation(&mut self, elevation: u32) -> bool {
        if self.elevation == elevation {
            return false;
        }
        self.elevation = elevation;
        self.blur_paint.mask_filter = BlurMaskFilter::new(elevation as f32, BlurStyle::Outer);
        let size = to_even(elevation as f32) as f32;
        self.apply_shadow_size(size, size);
        true
    }

    /// Changes the card radius. The shadow geometry uses it rounded to whole pixels.
    ///
    /// Returns [`ShadowError::InvalidArgument`] for a negative radius and `Ok(false)`
    /// when the radius is unchanged.
    pub fn set_corner_radius(&mut self, radius: f32) -> Result<bool, ShadowError> {
        let radius = ShadowError::require_non_negative("corner radius", radius)?;
        if self.radius == radius {
            return Ok(false);
        }
        self.radius = radius;
        self.corner_radius = round_corner_radius(radius);
        self.dirty = true;
        Ok(true)
    }

    /// Sets the colors the corner and edge gradients fade from and to. Returns whether
    /// either changed; a change marks the gradients for rebuild.
    pub fn set_shadow_colors(&mut self, start: Color, end: Color) -> bool {
        if self.config.shadow_start_color == start && self.config.shadow_end_color == end {
            return false;
        }
        self.config.shadow_start_color = start;
        self.config.shadow_end_color = end;
        self.dirty = true;
        true
    }

    /// Sets the card color source and resolves it against the current states.
    /// Returns whether the resolved color changed.
    pub fn set_background(&mut self, background: ColorSource) -> bool {
        let color = background.resolve(&self.states);
        self.background = background;
        self.apply_background_color(color)
    }

    /// Re-resolves the card color for a new state set. Returns whether a redraw is
    /// needed.
    pub fn on_state_changed(&mut self, states: &StateSet) -> bool {
        self.states = *states;
        let color = self.background.resolve(&self.states);
        self.apply_background_color(color)
    }

    /// Sets the area assigned to the card, shadow included. Returns whether it changed.
    pub fn set_bounds(&mut self, bounds: Bounds) -> bool {
        if self.bounds == bounds {
            return false;
        }
        trace!(%bounds, "shadow bounds changed");
        self.bounds = bounds;
        self.dirty = true;
        true
    }

    /// Modulates every paint of the card by `alpha`. Geometry is unaffected; returns
    /// whether a redraw is needed.
    pub fn set_alpha(&mut self, alpha: u8) -> bool {
        if self.paint.alpha == alpha {
            return false;
        }
        for paint in [
            &mut self.paint,
            &mut self.blur_paint,
            &mut self.corner_shadow_paint,
            &mut self.edge_shadow_paint,
        ] {
            paint.alpha = alpha;
        }
        true
    }

    /// Filters the color of the card surface. The shadow paints are not filtered.
    /// Returns whether a redraw is needed; geometry is unaffected.
    pub fn set_color_filter(&mut self, color_filter: Option<ColorFilter>) -> bool {
        if self.paint.color_filter == color_filter {
            return false;
        }
        self.paint.color_filter = color_filter;
        true
    }

    /// Rebuilds the cached geometry for `bounds` if anything changed since the last
    /// rebuild. Returns whether a rebuild happened.
    pub fn rebuild_if_dirty(&mut self, bounds: Bounds) -> bool {
        self.set_bounds(bounds);
        if !self.dirty {
            return false;
        }
        self.build_components();
        self.dirty = false;
        true
    }

    /// Draws the card, rebuilding stale geometry first. Draws are issued in three passes:
    ///
    /// 1. the ambient blur: the card rect blurred outward by the elevation, shifted down
    ///    by half the shadow size (skipped at elevation 0),
    /// 2. the four corner sectors, each followed by its edge band when there is room
    ///    for one, in a saved and rotated frame per corner,
    /// 3. the card surface, inset from the content rect by the elevation.
    ///
    /// The canvas is left with the save count and transform it had on entry.
    pub fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.rebuild_if_dirty(self.bounds);

        let card = self.content_bounds.inset_f32(self.elevation as f32);

        if self.blur_paint.mask_filter.is_some() {
            let mut scoped = SaveGuard::new(&mut *canvas);
            scoped.translate(0.0, self.raw_shadow_size / 2.0);
            scoped.draw_round_rect(card, self.radius, &self.blur_paint);
        }

        self.draw_shadow(canvas);

        canvas.draw_round_rect(card, self.radius, &self.paint);
    }

    /// Rounded-rect outline of the card for host clipping.
    pub fn outline(&self) -> Outline {
        let card = self
            .compute_content_bounds()
            .inset_f32(self.elevation as f32);
        Outline::round_rect(card, self.radius)
    }

    /// Padding that keeps content clear of the shadow and, if configured, of the
    /// rounded corners.
    pub fn padding(&self) -> Padding {
        let corner_padding = if self.config.add_padding_for_corners {
            (1.0 - COS_45) * self.corner_radius
        } else {
            0.0
        };
        Padding {
            horizontal: self.raw_max_shadow_size + corner_padding,
            vertical: self.raw_max_shadow_size * self.config.shadow_multiplier + corner_padding,
        }
    }

    /// Whether the background color depends on the view state.
    pub fn is_stateful(&self) -> bool {
        self.background.is_stateful()
    }

    /// Whether the next draw will rebuild the geometry.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Incremented by every rebuild.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// How many times the clip warning was emitted. Never more than one.
    pub fn shadow_clip_warnings(&self) -> u32 {
        self.shadow_clip_warnings
    }

    pub fn config(&self) -> &ShadowConfig {
        &self.config
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn elevation(&self) -> u32 {
        self.elevation
    }

    /// The shadow size as set, after even coercion and clamping.
    pub fn raw_shadow_size(&self) -> f32 {
        self.raw_shadow_size
    }

    pub fn raw_max_shadow_size(&self) -> f32 {
        self.raw_max_shadow_size
    }

    /// How far the corner and edge gradients reach beyond the corner radius.
    pub fn shadow_size(&self) -> f32 {
        self.shadow_size
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Bounds of the card and its content as of the last rebuild.
    pub fn content_bounds(&self) -> Bounds {
        self.content_bounds
    }

    /// The resolved card color, before any color filter.
    pub fn background_color(&self) -> Color {
        self.paint.color
    }

    /// The corner sector shared by all four corners, as of the last rebuild.
    pub fn corner_shadow(&self) -> &CornerShadow {
        &self.corner_shadow
    }

    /// The gradient of the edge bands, `None` before the first rebuild.
    pub fn edge_gradient(&self) -> Option<&LinearGradient> {
        match &self.edge_shadow_paint.shader {
            Some(Shader::Linear(gradient)) => Some(gradient),
            _ => None,
        }
    }

    /// Distance from each side of the content rect to the corner arc centers.
    pub fn corner_inset(&self) -> f32 {
        self.corner_radius + self.config.inset_shadow + self.raw_shadow_size / 2.0
    }

    /// Placements of the four corners for the current content rect.
    pub fn corner_placements(&self) -> [CornerPlacement; 4] {
        corner_placements(
            &self.content_bounds,
            self.corner_inset(),
            self.corner_radius,
            self.shadow_size,
        )
    }

    fn apply_shadow_size(&mut self, shadow_size: f32, max_shadow_size: f32) {
        self.raw_shadow_size = shadow_size;
        self.raw_max_shadow_size = max_shadow_size;
        self.shadow_size = (shadow_size * self.config.shadow_multiplier
            + self.config.inset_shadow
            + 0.5)
            .floor();
        self.dirty = true;
    }

    fn apply_background_color(&mut self, color: Color) -> bool {
        if self.paint.color == color {
            return false;
        }
        self.paint.color = color;
        self.dirty = true;
        true
    }

    fn compute_content_bounds(&self) -> Bounds {
        let (dx, dy) = self
            .config
            .inset_policy
            .insets(self.raw_max_shadow_size, self.config.shadow_multiplier);
        self.bounds.inset(dx, dy)
    }

    fn build_components(&mut self) {
        self.content_bounds = self.compute_content_bounds();
        self.build_shadow_corners();
        self.generation += 1;
        debug!(
            bounds = %self.bounds,
            content = %self.content_bounds,
            raw_shadow_size = self.raw_shadow_size,
            shadow_size = self.shadow_size,
            generation = self.generation,
            "rebuilt shadow geometry"
        );
    }

    fn build_shadow_corners(&mut self) {
        let start = self.config.shadow_start_color;
        let end = self.config.shadow_end_color;

        self.corner_shadow =
            CornerShadow::build(self.corner_radius, self.shadow_size, start, end);
        self.corner_shadow_paint.shader = Some(self.corner_shadow.shader());
        self.edge_shadow_paint.shader = Some(Shader::Linear(edge_gradient(
            self.corner_radius,
            self.shadow_size,
            start,
            end,
        )));
    }

    fn draw_shadow<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let edge_shadow_top = -self.corner_radius - self.shadow_size;

        for placement in self.corner_placements() {
            let mut scoped = SaveGuard::new(&mut *canvas);
            scoped.translate(placement.anchor.x, placement.anchor.y);
            scoped.rotate(placement.rotation_degrees);
            scoped.draw_path(
                self.corner_shadow.path(),
                self.corner_shadow.fill_rule(),
                &self.corner_shadow_paint,
            );
            if let Some(edge) = placement.edge_rect(edge_shadow_top) {
                scoped.draw_rect(edge, &self.edge_shadow_paint);
            }
        }
    }
}

fn round_corner_radius(radius: f32) -> f32 {
    (radius + 0.5) as i32 as f32
}

#[cfg(test)]
mod tests {
    use super::ShadowGeometryEngine;
    use crate::{
        Bounds, Canvas, Color, ColorFilter, ColorSource, ColorStateList, DrawCommand, InsetPolicy,
        RecordingCanvas, ShadowConfig, ShadowError, StateSet, StateSpec, ViewState,
    };
    use lyon::math::{point, Box2D};
    use lyon::path::PathEvent;

    fn engine(radius: f32, elevation: u32) -> ShadowGeometryEngine {
        ShadowGeometryEngine::new(radius, Color::GRAY, elevation, ShadowConfig::default())
    }

    fn draw(engine: &mut ShadowGeometryEngine) -> Vec<DrawCommand> {
        let mut canvas = RecordingCanvas::new();
        engine.draw(&mut canvas);
        assert_eq!(canvas.save_count(), 1, "draw leaked a canvas save");
        canvas.take_commands()
    }

    fn corner_events(engine: &ShadowGeometryEngine) -> Vec<PathEvent> {
        engine.corner_shadow().path().iter().collect()
    }

    #[test]
    fn new_engine_derives_sizes_from_elevation() {
        let engine = engine(16.0, 8);

        assert_eq!(engine.raw_shadow_size(), 8.0);
        assert_eq!(engine.raw_max_shadow_size(), 8.0);
        assert_eq!(engine.shadow_size(), 13.0);
        assert!(engine.is_dirty());
    }

    #[test]
    fn odd_elevation_rounds_down_to_even() {
        let engine = engine(16.0, 7);
        assert_eq!(engine.raw_shadow_size(), 6.0);
        assert_eq!(engine.shadow_size(), 10.0);
    }

    #[test]
    fn set_shadow_size_rejects_negative_values() {
        let mut engine = engine(16.0, 8);

        assert_eq!(
            engine.set_shadow_size(-1.0, 8.0),
            Err(ShadowError::InvalidArgument {
                what: "shadow size",
                value: -1.0
            })
        );
        assert!(matches!(
            engine.set_shadow_size(4.0, -0.5),
            Err(ShadowError::InvalidArgument {
                what: "max shadow size",
                ..
            })
        ));
        assert_eq!(engine.raw_shadow_size(), 8.0);
    }

    #[test]
    fn same_shadow_size_does_not_dirty() {
        let mut engine = engine(16.0, 8);
        engine.rebuild_if_dirty(Bounds::new(0, 0, 200, 100));

        assert_eq!(engine.set_shadow_size(8.0, 8.0), Ok(false));
        assert_eq!(engine.set_shadow_size(8.4, 9.0), Ok(false));
        assert!(!engine.is_dirty());

        assert_eq!(engine.set_shadow_size(4.0, 8.0), Ok(true));
        assert!(engine.is_dirty());
    }

    #[test]
    fn clipped_shadow_size_warns_once() {
        let mut engine = engine(16.0, 0);

        assert_eq!(engine.set_shadow_size(12.0, 6.0), Ok(true));
        assert_eq!(engine.raw_shadow_size(), 6.0);
        assert_eq!(engine.raw_max_shadow_size(), 6.0);
        for requested in [14.0, 20.0, 31.0] {
            engine.set_shadow_size(requested, 10.0).unwrap();
            assert_eq!(engine.raw_shadow_size(), engine.raw_max_shadow_size());
        }

        assert_eq!(engine.shadow_clip_warnings(), 1);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let mut engine = engine(16.0, 8);
        let bounds = Bounds::new(0, 0, 200, 100);

        assert!(engine.rebuild_if_dirty(bounds));
        let events = corner_events(&engine);
        let gradient = engine.corner_shadow().gradient().clone();
        let edge = engine.edge_gradient().cloned();

        assert!(!engine.rebuild_if_dirty(bounds));
        assert_eq!(engine.generation(), 1);
        assert_eq!(corner_events(&engine), events);
        assert_eq!(engine.corner_shadow().gradient(), &gradient);
        assert_eq!(engine.edge_gradient().cloned(), edge);
    }

    #[test]
    fn burst_of_changes_rebuilds_once() {
        let mut engine = engine(16.0, 8);
        engine.set_bounds(Bounds::new(0, 0, 200, 100));
        draw(&mut engine);

        engine.set_elevation(10);
        engine.set_corner_radius(12.0).unwrap();
        engine.set_bounds(Bounds::new(0, 0, 300, 150));
        assert_eq!(engine.generation(), 1);

        draw(&mut engine);
        assert_eq!(engine.generation(), 2);
        assert_eq!(engine.content_bounds(), Bounds::new(10, 15, 290, 135));
        assert_eq!(engine.corner_shadow().inner_radius(), 12.0);
    }

    #[test]
    fn draw_after_mutation_uses_new_geometry() {
        let mut engine = engine(16.0, 8);
        engine.set_bounds(Bounds::new(0, 0, 200, 100));
        draw(&mut engine);

        engine.set_bounds(Bounds::new(0, 0, 400, 100));
        let commands = draw(&mut engine);

        let card = commands.last().unwrap();
        match card {
            DrawCommand::RoundRect { rect, .. } => {
                assert_eq!(*rect, Box2D::new(point(16.0, 20.0), point(384.0, 80.0)))
            }
            other => panic!("expected the card fill last, got {other:?}"),
        }
    }

    #[test]
    fn background_change_marks_dirty_only_when_color_changes() {
        let mut engine = engine(16.0, 8);
        engine.rebuild_if_dirty(Bounds::new(0, 0, 200, 100));

        assert!(engine.set_background(Color::WHITE.into()));
        assert!(engine.is_dirty());
        engine.rebuild_if_dirty(Bounds::new(0, 0, 200, 100));

        assert!(!engine.set_background(ColorSource::Solid(Color::WHITE)));
        assert!(!engine.is_dirty());
    }

    #[test]
    fn state_change_re_resolves_background() {
        let mut engine = engine(16.0, 8);
        let pressed = Color::rgb(220, 220, 220);
        engine.set_background(
            ColorStateList::new(Color::WHITE)
                .with(StateSpec::all_of([ViewState::Pressed]), pressed)
                .into(),
        );
        engine.rebuild_if_dirty(Bounds::new(0, 0, 200, 100));
        assert!(engine.is_stateful());

        assert!(engine.on_state_changed(&StateSet::EMPTY.with(ViewState::Pressed)));
        assert_eq!(engine.background_color(), pressed);
        assert!(engine.is_dirty());

        engine.rebuild_if_dirty(Bounds::new(0, 0, 200, 100));
        assert!(!engine.on_state_changed(
            &StateSet::EMPTY
                .with(ViewState::Pressed)
                .with(ViewState::Focused)
        ));
        assert!(engine.on_state_changed(&StateSet::EMPTY));
        assert_eq!(engine.background_color(), Color::WHITE);
    }

    #[test]
    fn negative_corner_radius_is_rejected() {
        let mut engine = engine(16.0, 8);
        assert!(engine.set_corner_radius(-4.0).is_err());
        assert_eq!(engine.set_corner_radius(16.0), Ok(false));
        assert_eq!(engine.set_corner_radius(9.6), Ok(true));
        assert_eq!(engine.corner_radius(), 10.0);
        assert_eq!(engine.radius(), 9.6);
    }

    #[test]
    fn outline_is_card_inset_by_elevation() {
        let mut engine = engine(16.0, 8);
        engine.set_bounds(Bounds::new(0, 0, 200, 100));

        let outline = engine.outline();
        assert_eq!(
            outline.rect,
            Box2D::new(point(16.0, 20.0), point(184.0, 80.0))
        );
        assert_eq!(outline.radius, 16.0);
    }

    #[test]
    fn padding_reserves_corner_room_when_configured() {
        let engine = engine(16.0, 8);
        let padding = engine.padding();
        let corner = (1.0 - std::f32::consts::FRAC_1_SQRT_2) * 16.0;
        assert!((padding.horizontal - (8.0 + corner)).abs() < 1e-4);
        assert!((padding.vertical - (12.0 + corner)).abs() < 1e-4);

        let plain = ShadowGeometryEngine::new(
            16.0,
            Color::GRAY,
            8,
            ShadowConfig::default().with_padding_for_corners(false),
        );
        assert_eq!(plain.padding().horizontal, 8.0);
        assert_eq!(plain.padding().vertical, 12.0);
    }

    #[test]
    fn symmetric_policy_insets_evenly() {
        let mut engine = ShadowGeometryEngine::new(
            16.0,
            Color::GRAY,
            8,
            ShadowConfig::default().with_inset_policy(InsetPolicy::Symmetric),
        );
        engine.rebuild_if_dirty(Bounds::new(0, 0, 200, 100));
        assert_eq!(engine.content_bounds(), Bounds::new(8, 8, 192, 92));
    }

    #[test]
    fn alpha_reaches_every_paint() {
        let mut engine = engine(16.0, 8);
        engine.set_bounds(Bounds::new(0, 0, 200, 100));
        assert!(engine.set_alpha(128));
        assert!(!engine.set_alpha(128));

        let commands = draw(&mut engine);
        assert!(commands.iter().all(|command| command.paint().alpha == 128));
    }

    #[test]
    fn color_filter_reaches_only_the_card_surface() {
        let mut engine = engine(16.0, 8);
        engine.set_background(Color::WHITE.into());
        engine.rebuild_if_dirty(Bounds::new(0, 0, 200, 100));

        let filter = ColorFilter::Tint(Color::rgb(255, 0, 0));
        assert!(engine.set_color_filter(Some(filter)));
        assert!(!engine.set_color_filter(Some(filter)));
        assert!(!engine.is_dirty());

        let commands = draw(&mut engine);
        let (card, shadow) = commands.split_last().unwrap();
        assert_eq!(card.paint().color_filter, Some(filter));
        assert_eq!(card.paint().effective_color(), Color::rgb(255, 0, 0));
        assert!(shadow.iter().all(|command| command.paint().color_filter.is_none()));

        assert!(engine.set_color_filter(None));
        assert_eq!(draw(&mut engine).last().unwrap().paint().color_filter, None);
    }

    #[test]
    fn corners_are_drawn_in_their_own_saved_frames() {
        let mut engine = engine(16.0, 8);
        engine.set_bounds(Bounds::new(0, 0, 200, 100));
        let mut canvas = RecordingCanvas::new();
        canvas.translate(5.0, 7.0);

        engine.draw(&mut canvas);

        assert_eq!(canvas.save_count(), 1);
        assert_eq!(
            canvas.current_transform(),
            lyon::math::Transform::translation(5.0, 7.0)
        );
    }
}
