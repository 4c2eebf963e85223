use crate::Color;

/// Default start color of the shadow gradients (`#37000000`).
pub const DEFAULT_SHADOW_START_COLOR: Color = Color::from_argb(0x3700_0000);
/// Default end color of the shadow gradients (`#03000000`).
pub const DEFAULT_SHADOW_END_COLOR: Color = Color::from_argb(0x0300_0000);

/// How the content rectangle is inset from the drawable bounds to make room for the
/// shadow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsetPolicy {
    /// `max_shadow_size` horizontally, `max_shadow_size * shadow_multiplier` vertically.
    /// Keeps content horizontally centered while leaving room for the downward bias of
    /// the shadow.
    #[default]
    AsymmetricVertical,
    /// `max_shadow_size` on every side.
    Symmetric,
    /// Content fills the bounds; the shadow is expected to be clipped by the host or
    /// painted outside of it.
    None,
}

impl InsetPolicy {
    /// Returns the `(horizontal, vertical)` inset for the given maximum shadow size.
    pub fn insets(&self, max_shadow_size: f32, shadow_multiplier: f32) -> (f32, f32) {
        match self {
            InsetPolicy::AsymmetricVertical => {
                (max_shadow_size, max_shadow_size * shadow_multiplier)
            }
            InsetPolicy::Symmetric => (max_shadow_size, max_shadow_size),
            InsetPolicy::None => (0.0, 0.0),
        }
    }
}

/// Constants of the shadow synthesis.
///
/// # Examples
///
/// ```
/// use cardshadow::{InsetPolicy, ShadowConfig};
///
/// let config = ShadowConfig::default()
///     .with_inset_shadow(2.0)
///     .with_inset_policy(InsetPolicy::Symmetric);
/// assert_eq!(config.shadow_multiplier, 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowConfig {
    /// Extra shadow, in pixels, that closes the gap between the card edge and the shadow.
    pub inset_shadow: f32,
    /// Factor applied to the raw shadow size to get the blurred extent.
    pub shadow_multiplier: f32,
    pub shadow_start_color: Color,
    pub shadow_end_color: Color,
    pub inset_policy: InsetPolicy,
    /// Whether [`Padding`](crate::Padding) also reserves room for the rounded corners.
    pub add_padding_for_corners: bool,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            inset_shadow: 1.0,
            shadow_multiplier: 1.5,
            shadow_start_color: DEFAULT_SHADOW_START_COLOR,
            shadow_end_color: DEFAULT_SHADOW_END_COLOR,
            inset_policy: InsetPolicy::default(),
            add_padding_for_corners: true,
        }
    }
}

impl ShadowConfig {
    pub fn with_inset_shadow(mut self, inset_shadow: f32) -> Self {
        self.inset_shadow = inset_shadow.max(0.0);
        self
    }

    pub fn with_shadow_multiplier(mut self, shadow_multiplier: f32) -> Self {
        self.shadow_multiplier = shadow_multiplier.max(0.0);
        self
    }

    pub fn with_shadow_colors(mut self, start: Color, end: Color) -> Self {
        self.shadow_start_color = start;
        self.shadow_end_color = end;
        self
    }

    pub fn with_inset_policy(mut self, inset_policy: InsetPolicy) -> Self {
        self.inset_policy = inset_policy;
        self
    }

    pub fn with_padding_for_corners(mut self, add_padding_for_corners: bool) -> Self {
        self.add_padding_for_corners = add_padding_for_corners;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{InsetPolicy, ShadowConfig};

    #[test]
    fn default_policy_biases_vertical_inset() {
        let config = ShadowConfig::default();
        assert_eq!(
            config.inset_policy.insets(8.0, config.shadow_multiplier),
            (8.0, 12.0)
        );
    }

    #[test]
    fn other_policies() {
        assert_eq!(InsetPolicy::Symmetric.insets(8.0, 1.5), (8.0, 8.0));
        assert_eq!(InsetPolicy::None.insets(8.0, 1.5), (0.0, 0.0));
    }

    #[test]
    fn builder_clamps_negative_constants() {
        let config = ShadowConfig::default()
            .with_inset_shadow(-3.0)
            .with_shadow_multiplier(-1.0);
        assert_eq!(config.inset_shadow, 0.0);
        assert_eq!(config.shadow_multiplier, 0.0);
    }
}
