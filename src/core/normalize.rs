//! Closeness functions mapping raw attribute pairs onto [0, 1].
//!
//! Every function here is total: missing or nonsensical inputs (zero budget,
//! zero size, unknown condition labels) score 0.0 rather than erroring.

/// Oldest year the modernity scale distinguishes; anything earlier scores 0
pub const MIN_YEAR: u16 = 1950;

/// Newest year the modernity scale distinguishes; anything later scores 1
pub const MAX_YEAR: u16 = 2025;

/// Relative price overshoot treated as "slightly above budget"
const SOFT_OVERSHOOT: f64 = 0.10;

/// Clamp a value to [0, 1]
#[inline]
pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Price closeness (0-1)
/// Decays exponentially as price diverges from budget in either direction
#[inline]
pub fn price_closeness(price: f64, budget: f64) -> f64 {
    if budget <= 0.0 || price <= 0.0 {
        return 0.0;
    }

    // score = e^(-2 * |price - budget| / budget)
    // At budget the score is 1.0; at double the budget it is ~0.14
    let deviation = (price - budget).abs() / budget;
    (-2.0 * deviation).exp()
}

/// Budget gate (0-1), reported alongside the weighted score
///
/// 1.0 at or under budget, a small linear penalty up to 10% over, then a
/// strong exponential penalty beyond that. The bands line up with the
/// explanation thresholds (0.98 / 0.85).
#[inline]
pub fn budget_gate(price: f64, budget: f64) -> f64 {
    if budget <= 0.0 || price <= 0.0 {
        return 0.0;
    }

    let overshoot = (price - budget) / budget;
    if overshoot <= 0.0 {
        return 1.0;
    }
    if overshoot <= SOFT_OVERSHOOT {
        // Linear from 1.0 down to 0.85 at 10% over budget
        return 1.0 - 1.5 * overshoot;
    }

    clamp01(0.85 * (-4.0 * (overshoot - SOFT_OVERSHOOT)).exp())
}

/// Count closeness (0-1) for bedrooms/bathrooms
/// Exact match scores 1.0, each step off costs half, two or more steps score 0
#[inline]
pub fn count_closeness(actual: u8, desired: u8) -> f64 {
    if desired == 0 {
        return 0.0;
    }

    let diff = (actual as f64 - desired as f64).abs();
    (1.0 - diff / 2.0).max(0.0)
}

/// Size closeness (0-1)
/// Linear in the relative deviation from the desired size
#[inline]
pub fn size_closeness(size: f64, desired: f64) -> f64 {
    if desired <= 0.0 || size <= 0.0 {
        return 0.0;
    }

    let deviation = (size - desired).abs() / desired;
    (1.0 - deviation).max(0.0)
}

/// Categorical closeness (0-1): case-insensitive equality
/// An empty preference or attribute scores 0 (no information, no match)
#[inline]
pub fn categorical_closeness(actual: &str, preferred: &str) -> f64 {
    let actual = actual.trim();
    let preferred = preferred.trim();
    if actual.is_empty() || preferred.is_empty() {
        return 0.0;
    }

    if actual.eq_ignore_ascii_case(preferred) {
        1.0
    } else {
        0.0
    }
}

/// Condition score (0-1) from the listing's condition label
/// Unknown labels score 0
#[inline]
pub fn condition_score(label: &str) -> f64 {
    match label.trim().to_ascii_lowercase().as_str() {
        "new" | "excellent" => 1.0,
        "good" => 0.75,
        "fair" => 0.5,
        "old" | "poor" => 0.25,
        _ => 0.0,
    }
}

/// Modernity score (0-1) from the year built
/// Linear between [`MIN_YEAR`] and [`MAX_YEAR`], clamped at both ends
#[inline]
pub fn year_modernity(year_built: u16) -> f64 {
    let span = (MAX_YEAR - MIN_YEAR) as f64;
    clamp01((year_built as f64 - MIN_YEAR as f64) / span)
}
