pub use lyon;

mod canvas;
mod color;
mod config;
mod error;
mod fill;
mod geometry;
mod paint;
mod shadow;
mod state;
mod tessellation;
mod util;

pub use canvas::{path_bounds, quarter_turns, rotation, Canvas, DrawCommand, RecordingCanvas, SaveGuard};
pub use color::Color;
pub use config::{InsetPolicy, ShadowConfig, DEFAULT_SHADOW_END_COLOR, DEFAULT_SHADOW_START_COLOR};
pub use error::ShadowError;
pub use fill::RoundRectFill;
pub use geometry::{Bounds, Outline, Padding};
pub use paint::{
    BlurMaskFilter, BlurStyle, ColorFilter, GradientStop, GradientStops, LinearGradient, Paint,
    RadialGradient, Shader,
};
pub use shadow::{
    edge_gradient, Corner, CornerPlacement, CornerShadow, EdgeAxis, ShadowGeometryEngine,
};
pub use state::{ColorSource, ColorStateList, StateSet, StateSpec, ViewState};
pub use tessellation::{tessellate_fill, TessellatedFill};
pub use util::to_even;
