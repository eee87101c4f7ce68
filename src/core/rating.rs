//! Derived ship rating

/// Year the rating is measured against; newer ships rate higher
pub const CURRENT_YEAR: i32 = 3019;

/// Round to two decimal places, halves away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rating of a ship from its speed, used flag and production year
///
/// `80 * speed * k / (CURRENT_YEAR - year + 1)` where `k` is 0.5 for used
/// ships and 1 otherwise. Callers pass a validated year (at most
/// `CURRENT_YEAR`), so the divisor is at least 1.
pub fn rating(speed: f64, is_used: bool, production_year: i32) -> f64 {
    let wear = if is_used { 0.5 } else { 1.0 };
    let age = f64::from(CURRENT_YEAR - production_year + 1);
    round2(80.0 * speed * wear / age)
}
