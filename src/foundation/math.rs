/// Interpolate between `a` and `b`.
///
/// Written as `a*(1-t) + b*t` so that `t == 0` yields exactly `a` and `t == 1` exactly `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Clamp to `[0, 1]`, mapping NaN to 0.
pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// SplitMix64 finalizer.
pub(crate) fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Stateless hash of a (frame, salt) pair.
///
/// Frames are signed; pre-entrance frames hash like any other.
pub fn hash64(frame: i64, salt: u64) -> u64 {
    mix64(mix64(frame as u64) ^ salt.wrapping_mul(0xD6E8_FEB8_6659_FD93))
}

/// [`hash64`] mapped to `[0, 1)` with 53 bits of precision.
pub fn hash_unit(frame: i64, salt: u64) -> f64 {
    let v = hash64(frame, salt) >> 11;
    (v as f64) * (1.0 / ((1u64 << 53) as f64))
}

/// [`hash64`] mapped to `[-1, 1)`.
pub fn hash_signed(frame: i64, salt: u64) -> f64 {
    hash_unit(frame, salt) * 2.0 - 1.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
