//! Velocity math for the pull itself.

use grapple_api::math::Vec3;

/// Unit vector from the player to the hook, or `None` when the two
/// positions coincide and there is nothing to aim along.
pub fn pull_direction(player: Vec3, hook: Vec3) -> Option<Vec3> {
    (hook - player).normalized()
}

/// Combine the player's current velocity with a pull of strength `force`
/// along `direction` (a unit vector).
///
/// The delta accumulates onto the current velocity. When the pull points
/// within 90 degrees of where the player is already moving and the player
/// is already faster than the pull, the combined heading is kept but its
/// magnitude is clamped to the current speed, so chaining pulls mid-flight
/// steers instead of accelerating without bound.
pub fn pull_velocity(current: Vec3, direction: Vec3, force: f32) -> Vec3 {
    let combined = current + direction * force;
    let aligned = direction.dot(&current) > 0.0;
    if aligned && current.length() > force {
        match combined.normalized() {
            Some(heading) => heading * current.length(),
            None => combined,
        }
    } else {
        combined
    }
}
