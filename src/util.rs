/// cos(45°), used to pad content away from the rounded corners.
pub(crate) const COS_45: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Scales an 8-bit alpha by another 8-bit alpha, rounding to nearest.
#[inline(always)]
pub(crate) fn modulate_alpha(alpha: u8, by: u8) -> u8 {
    ((alpha as u16 * by as u16 + 127) / 255) as u8
}

/// Casts the value to an even integer: rounds half up, then drops to the even value
/// below when the result is odd. Odd shadow sizes produce one pixel seams between the
/// corner sectors and the edge rectangles.
#[inline]
pub fn to_even(value: f32) -> i32 {
    let rounded = (value + 0.5) as i32;
    if rounded % 2 == 1 {
        rounded - 1
    } else {
        rounded
    }
}
