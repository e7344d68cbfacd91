use glam::Vec3;

// Shared tuning constants used by the distributors and both front-ends.

// Circle defaults
pub const CIRCLE_POINT_COUNT: usize = 10;
pub const CIRCLE_TURN_FRACTION: f32 = 0.0;
pub const CIRCLE_RADIUS: f32 = 75.0;
pub const CIRCLE_DISTANCE_EXPONENT: f32 = 0.5;
pub const CIRCLE_HIGHLIGHT_PERIOD: u32 = 2;
pub const CIRCLE_HIGHLIGHT_OFFSET: u32 = 2;

// Exponents below this blow up for points close to the anchor
pub const MIN_DISTANCE_EXPONENT: f32 = -5.0;

// Sphere defaults
pub const SPHERE_POINT_COUNT: usize = 100;
pub const SPHERE_DISTANCE_BIAS: f32 = 1.4; // > 1 packs points near the apex
pub const SPHERE_VIEW_ANGLE_DEGREES: f32 = 180.0; // full sphere
pub const SPHERE_VIEW_RADIUS: f32 = 75.0;
pub const SPHERE_TURN_FRACTION: f32 = 1.61803; // golden ratio, one extra turn is a no-op

pub const MAX_VIEW_ANGLE_DEGREES: f32 = 180.0;
pub const VIEW_ANGLE_TOLERANCE_DEGREES: f32 = 1e-3; // absorbs acos rounding at the cone edge

// Emitting frame (left-handed host convention: forward is +Z, right is +X)
pub const DEFAULT_FORWARD: Vec3 = Vec3::Z;
pub const DEFAULT_RIGHT: Vec3 = Vec3::X;

// Animation
pub const TURN_STEP_PER_TICK: f32 = 0.00002; // added to turn_fraction each tick
pub const POINTS_ADDED_PER_SEC: u32 = 3; // rate of the point-adding animation

// Point sizing for hosts that draw plain spheres
pub const POINT_SCALE_FRACTION: f32 = 0.1; // of view_radius

/// Fractional part of the golden ratio, the classic phyllotaxis turn.
pub const GOLDEN_TURN_FRACTION: f32 = 0.618_034;

#[inline]
pub fn point_scale(view_radius: f32) -> f32 {
    POINT_SCALE_FRACTION * view_radius
}
