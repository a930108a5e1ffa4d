//! Value to bar width mapping

use gauge_types::Bound;

use super::state::StateSnapshot;

/// Percentage of the gauge filled by `value` on the `[min, max]` scale.
///
/// The value is clamped with max-then-min so an inverted range does not
/// panic. A zero-length range or any non-finite input gives 0.
pub fn resolve_width(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() || !min.is_finite() || !max.is_finite() || max == min {
        return 0.0;
    }

    let clamped = value.max(min).min(max);
    let width = (clamped - min) / (max - min) * 100.0;

    if width.is_finite() {
        width.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Concrete value of a bound; entity bounds read the live numeric state
pub fn resolve_bound(bound: &Bound, snapshot: &StateSnapshot) -> Option<f64> {
    match bound {
        Bound::Value(v) => v.is_finite().then_some(*v),
        Bound::Entity(id) => snapshot.numeric(id, None),
    }
}
