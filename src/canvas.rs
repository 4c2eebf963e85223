//! The drawing surface the card paints into.
//!
//! [`Canvas`] is the minimal contract the shadow engine needs from a 2D rasterizer:
//! a save/restore transform stack with translation and rotation, and filled paths,
//! rects and rounded rects. [`RecordingCanvas`] implements it by recording every
//! draw together with the transform that was current when it was issued, so a host
//! can replay a frame into its own rasterizer later.
//!
//! ```
//! use cardshadow::{Canvas, Color, Paint, RecordingCanvas, SaveGuard};
//! use lyon::math::{point, Box2D};
//!
//! let mut canvas = RecordingCanvas::new();
//! {
//!     let mut scoped = SaveGuard::new(&mut canvas);
//!     scoped.translate(10.0, 0.0);
//!     scoped.draw_rect(Box2D::new(point(0.0, 0.0), point(5.0, 5.0)), &Paint::new(Color::BLACK));
//! }
//! assert_eq!(canvas.save_count(), 1);
//! assert_eq!(canvas.commands().len(), 1);
//! ```

use crate::Paint;
use lyon::geom::{CubicBezierSegment, QuadraticBezierSegment};
use lyon::math::{Angle, Box2D, Point, Transform};
use lyon::path::{FillRule, Path, PathEvent};
use std::ops::{Deref, DerefMut};

pub trait Canvas {
    /// Pushes the current transform and returns the save count before the push.
    fn save(&mut self) -> usize;
    /// Pops saved transforms until the save count equals `count`.
    fn restore_to_count(&mut self, count: usize);
    fn translate(&mut self, dx: f32, dy: f32);
    /// Rotates clockwise (y axis pointing down) by `degrees`.
    fn rotate(&mut self, degrees: f32);
    fn draw_path(&mut self, path: &Path, fill_rule: FillRule, paint: &Paint);
    fn draw_rect(&mut self, rect: Box2D, paint: &Paint);
    fn draw_round_rect(&mut self, rect: Box2D, radius: f32, paint: &Paint);
}

/// Saves the canvas on creation and restores it when dropped.
pub struct SaveGuard<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
    restore_to: usize,
}

impl<'a, C: Canvas + ?Sized> SaveGuard<'a, C> {
    pub fn new(canvas: &'a mut C) -> Self {
        let restore_to = canvas.save();
        Self { canvas, restore_to }
    }
}

impl<C: Canvas + ?Sized> Deref for SaveGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for SaveGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for SaveGuard<'_, C> {
    fn drop(&mut self) {
        self.canvas.restore_to_count(self.restore_to);
    }
}

/// Rotation about the origin. Multiples of 90° produce exact matrices so that corner
/// geometry replayed through them stays bit-for-bit symmetric.
pub fn rotation(degrees: f32) -> Transform {
    let turns = degrees / 90.0;
    if turns.fract() != 0.0 {
        return Transform::rotation(Angle::degrees(degrees));
    }

    match (turns as i32).rem_euclid(4) {
        0 => Transform::identity(),
        1 => Transform::new(0.0, 1.0, -1.0, 0.0, 0.0, 0.0),
        2 => Transform::new(-1.0, 0.0, 0.0, -1.0, 0.0, 0.0),
        _ => Transform::new(0.0, -1.0, 1.0, 0.0, 0.0, 0.0),
    }
}

/// Number of clockwise quarter turns in the linear part of `transform`, if it is an
/// unscaled quarter-turn rotation.
pub fn quarter_turns(transform: &Transform) -> Option<u8> {
    match (transform.m11, transform.m12, transform.m21, transform.m22) {
        (a, b, c, d) if a == 1.0 && b == 0.0 && c == 0.0 && d == 1.0 => Some(0),
        (a, b, c, d) if a == 0.0 && b == 1.0 && c == -1.0 && d == 0.0 => Some(1),
        (a, b, c, d) if a == -1.0 && b == 0.0 && c == 0.0 && d == -1.0 => Some(2),
        (a, b, c, d) if a == 0.0 && b == -1.0 && c == 1.0 && d == 0.0 => Some(3),
        _ => None,
    }
}

/// Axis-aligned bounds of a path, including curve extrema.
pub fn path_bounds(path: &Path) -> Option<Box2D> {
    let mut bounds: Option<Box2D> = None;
    let mut include = |segment_bounds: Box2D| {
        bounds = Some(match bounds {
            Some(current) => current.union(&segment_bounds),
            None => segment_bounds,
        });
    };

    for event in path.iter() {
        match event {
            PathEvent::Begin { at } => include(Box2D::new(at, at)),
            PathEvent::Line { from, to } => include(Box2D::from_points([from, to])),
            PathEvent::Quadratic { from, ctrl, to } => {
                include(QuadraticBezierSegment { from, ctrl, to }.bounding_box())
            }
            PathEvent::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => include(
                CubicBezierSegment {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                }
                .bounding_box(),
            ),
            PathEvent::End { .. } => {}
        }
    }

    bounds
}

#[derive(Debug, Clone)]
pub enum DrawCommand {
    Path {
        path: Path,
        fill_rule: FillRule,
        paint: Paint,
        transform: Transform,
    },
    Rect {
        rect: Box2D,
        paint: Paint,
        transform: Transform,
    },
    RoundRect {
        rect: Box2D,
        radius: f32,
        paint: Paint,
        transform: Transform,
    },
}

impl DrawCommand {
    pub fn paint(&self) -> &Paint {
        match self {
            DrawCommand::Path { paint, .. }
            | DrawCommand::Rect { paint, .. }
            | DrawCommand::RoundRect { paint, .. } => paint,
        }
    }

    pub fn transform(&self) -> &Transform {
        match self {
            DrawCommand::Path { transform, .. }
            | DrawCommand::Rect { transform, .. }
            | DrawCommand::RoundRect { transform, .. } => transform,
        }
    }

    /// Device-space origin of the local frame the command was drawn in.
    pub fn origin(&self) -> Point {
        self.transform().transform_point(Point::origin())
    }

    pub fn quarter_turns(&self) -> Option<u8> {
        quarter_turns(self.transform())
    }

    /// Bounds of the drawn geometry in device space.
    pub fn device_bounds(&self) -> Option<Box2D> {
        match self {
            DrawCommand::Path {
                path, transform, ..
            } => path_bounds(&path.clone().transformed(transform)),
            DrawCommand::Rect {
                rect, transform, ..
            }
            | DrawCommand::RoundRect {
                rect, transform, ..
            } => Some(transform.outer_transformed_box(rect)),
        }
    }
}

/// A [`Canvas`] that records draws instead of rasterizing them.
#[derive(Debug)]
pub struct RecordingCanvas {
    current: Transform,
    saved: Vec<Transform>,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            current: Transform::identity(),
            saved: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Number of saved states plus one, matching the count `save` returns.
    pub fn save_count(&self) -> usize {
        self.saved.len() + 1
    }

    pub fn current_transform(&self) -> Transform {
        self.current
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) -> usize {
        let count = self.save_count();
        self.saved.push(self.current);
        count
    }

    fn restore_to_count(&mut self, count: usize) {
        let count = count.max(1);
        while self.save_count() > count {
            if let Some(transform) = self.saved.pop() {
                self.current = transform;
            }
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.current = Transform::translation(dx, dy).then(&self.current);
    }

    fn rotate(&mut self, degrees: f32) {
        self.current = rotation(degrees).then(&self.current);
    }

    fn draw_path(&mut self, path: &Path, fill_rule: FillRule, paint: &Paint) {
        self.commands.push(DrawCommand::Path {
            path: path.clone(),
            fill_rule,
            paint: paint.clone(),
            transform: self.current,
        });
    }

    fn draw_rect(&mut self, rect: Box2D, paint: &Paint) {
        self.commands.push(DrawCommand::Rect {
            rect,
            paint: paint.clone(),
            transform: self.current,
        });
    }

    fn draw_round_rect(&mut self, rect: Box2D, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::RoundRect {
            rect,
            radius,
            paint: paint.clone(),
            transform: self.current,
        });
    }
}
