#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Arctangent of `y / x` in [0, 2pi).
///
/// Position angles and right ascensions never go negative, so the lower
/// half-plane is shifted up by a full turn.
#[inline]
pub fn atan2_pi(y: f64, x: f64) -> f64 {
    let a = libm::atan2(y, x);
    if a < 0.0 {
        a + crate::constants::TWOPI
    } else {
        a
    }
}
