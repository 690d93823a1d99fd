//! Scalar helpers shared by the shortest-path engine and the cycle finder.
//!
//! Distances use `f64::INFINITY` as the "unreachable" sentinel. Edge weights
//! follow the adjacency-matrix convention where `0.0` means "no edge".

/// Tentative distance of a vertex that no path reaches.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Returns true if `distance` came from an actual path.
#[inline]
pub fn is_reachable(distance: f64) -> bool {
    distance.is_finite()
}

/// Returns true if a stored matrix weight denotes an edge.
///
/// A zero weight is indistinguishable from an absent edge.
#[inline]
pub fn is_edge(weight: f64) -> bool {
    weight > 0.0
}

/// Strict relaxation step.
///
/// Returns the new distance `base + weight` only if `base` is reachable and the
/// sum is strictly shorter than `current`. Equal-length paths never replace the
/// one already recorded.
#[inline]
pub fn relax(current: f64, base: f64, weight: f64) -> Option<f64> {
    if !is_reachable(base) {
        return None;
    }

    let candidate = base + weight;
    (candidate < current).then_some(candidate)
}

/// Returns true if `value` has no fractional part.
#[inline]
pub fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
