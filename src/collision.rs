//! Overlap tests used by the step function.

use glam::Vec2;

/// Circle vs axis-aligned rectangle (`top_left`, `size`) by closest point.
/// Touching counts as a hit.
pub fn circle_rect(center: Vec2, radius: f32, top_left: Vec2, size: Vec2) -> bool {
    let nearest = center.clamp(top_left, top_left + size);
    center.distance_squared(nearest) <= radius * radius
}

/// Circle vs circle. Touching does not count.
pub fn circle_circle(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}
