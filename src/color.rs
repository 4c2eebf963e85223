use crate::util::modulate_alpha;

/// Represents a color in RGBA format.
///
/// Each channel is an 8-bit unsigned integer. Colors coming from packed `0xAARRGGBB`
/// integers (the usual format for shadow and background colors) can be converted with
/// [`Color::from_argb`].
///
/// # Examples
///
/// ```
/// use cardshadow::Color;
///
/// // Create a red color with full opacity
/// let red = Color::rgb(255, 0, 0);
///
/// // The default shadow start color, 0x37 alpha over black
/// let shadow = Color::from_argb(0x3700_0000);
/// assert_eq!(shadow, Color::rgba(0, 0, 0, 0x37));
/// assert_eq!(red.to_argb(), 0xFFFF_0000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// A transparent color.
    ///
    /// All color channels are set to zero, making the color fully transparent.
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);
    /// A black color.
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    /// A white color.
    pub const WHITE: Self = Self([255, 255, 255, 255]);
    /// Opaque mid gray, the default card shadow color.
    pub const GRAY: Self = Self([0x88, 0x88, 0x88, 255]);

    /// Creates a new color with the specified RGB values and full opacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardshadow::Color;
    ///
    /// let green = Color::rgb(0, 255, 0);
    /// assert_eq!(green, Color([0, 255, 0, 255]));
    /// ```
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// Creates a new color with the specified RGBA values.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Unpacks a `0xAARRGGBB` integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardshadow::Color;
    ///
    /// let color = Color::from_argb(0xFF42_4242);
    /// assert_eq!(color, Color::rgb(0x42, 0x42, 0x42));
    /// assert_eq!(color.to_argb(), 0xFF42_4242);
    /// ```
    pub const fn from_argb(argb: u32) -> Self {
        Self([
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        ])
    }

    /// Packs the color into a `0xAARRGGBB` integer.
    pub const fn to_argb(&self) -> u32 {
        ((self.0[3] as u32) << 24)
            | ((self.0[0] as u32) << 16)
            | ((self.0[1] as u32) << 8)
            | self.0[2] as u32
    }

    pub const fn alpha(&self) -> u8 {
        self.0[3]
    }

    /// Returns this color with its alpha scaled by `alpha / 255`.
    pub fn modulate(&self, alpha: u8) -> Self {
        let [r, g, b, a] = self.0;
        Self([r, g, b, modulate_alpha(a, alpha)])
    }

    /// Returns the color as an array of 4 `u8` values.
    pub fn to_array(&self) -> [u8; 4] {
        self.0
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color::from_argb(argb)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn argb_round_trips_through_packed_form() {
        let color = Color::from_argb(0x3712_3456);
        assert_eq!(color, Color::rgba(0x12, 0x34, 0x56, 0x37));
        assert_eq!(color.to_argb(), 0x3712_3456);
    }

    #[test]
    fn modulate_scales_only_alpha() {
        let color = Color::rgba(10, 20, 30, 200);
        assert_eq!(color.modulate(255), color);
        assert_eq!(color.modulate(0), Color::rgba(10, 20, 30, 0));
        assert_eq!(color.modulate(128).to_array()[..3], [10, 20, 30]);
        assert_eq!(color.modulate(128).alpha(), 100);
    }
}
