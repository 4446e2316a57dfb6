//! Rounding helpers matching the two-decimal display conventions

/// Round half up (towards positive infinity) to the nearest integer.
/// Example: -2.5 -> -2, 2.5 -> 3
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to `places` decimal places, halves away from zero.
/// Example: round_to(1.005, 2) -> 1.01 (subject to binary representation)
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Greatest common divisor on non-negative integers
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
