use thiserror::Error;

/// Errors returned by the shadow engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShadowError {
    /// A size or radius was negative (or NaN). Carries the offending parameter name
    /// and value.
    #[error("invalid {what} {value}, must be >= 0")]
    InvalidArgument { what: &'static str, value: f32 },
    /// lyon could not triangulate a shadow path.
    #[error("failed to tessellate shadow path: {0}")]
    Tessellation(String),
}

impl ShadowError {
    pub(crate) fn require_non_negative(what: &'static str, value: f32) -> Result<f32, Self> {
        if value >= 0.0 {
            Ok(value)
        } else {
            Err(ShadowError::InvalidArgument { what, value })
        }
    }
}
