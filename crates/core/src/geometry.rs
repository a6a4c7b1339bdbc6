//! Stateless geometry used to place avoidance anchors.
//!
//! Coordinates follow the game convention: Y is vertical, the playing field
//! is the XZ plane. Line math is solved in XZ only.

use glam::Vec3;

/// Numerator of the inverse-square falloff in [`inverse_square_offset`].
const PULL_GAIN: f32 = 100.0;

/// X separations below this are treated as a vertical line in the XZ plane,
/// which has no finite slope.
const MIN_DELTA_X: f32 = 1e-3;

/// Displacement point on the line through `agent` and `target`, pushed away
/// from the target by `PULL_GAIN / distance²(agent, target)`.
///
/// The push therefore strengthens sharply as the agent closes with the
/// target. The point keeps the target's height and stays on the XZ line
/// through both inputs.
///
/// Returns `None` when the two X coordinates are too close to solve the line
/// slope; callers are expected to fall back to plain zone registration.
pub fn inverse_square_offset(agent: Vec3, target: Vec3) -> Option<Vec3> {
    let dx = target.x - agent.x;
    if dx.abs() < MIN_DELTA_X {
        return None;
    }

    let m = (target.z - agent.z) / dx;
    let b = target.z - m * target.x;
    let gain = PULL_GAIN / agent.distance_squared(target);

    let x = agent.x - gain * dx;
    Some(Vec3::new(x, target.y, m * x + b))
}

/// Sideways shift applied to a directional spread anchor.
///
/// Positive when the agent sits strictly on the positive-X side of the
/// reference, negative otherwise, so the shift always points away from the
/// reference and the equal-X boundary resolves deterministically to the
/// negative side.
pub fn lateral_offset(agent_x: f32, reference_x: f32, magnitude: f32) -> f32 {
    if agent_x > reference_x {
        magnitude
    } else {
        -magnitude
    }
}
