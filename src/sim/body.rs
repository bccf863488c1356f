//! Pure kinematics shared by the craft and asteroids.

use glam::Vec2;

/// Position, velocity, and sprite rotation with no collision response and
/// no drag: impulses change velocity permanently until the next impulse.
/// Wrapping and clamping are owner policy, not body behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Rotation in degrees.
    pub rotation: f32,
}

impl KinematicBody {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            rotation: 0.0,
        }
    }

    /// Advance position by one frame of velocity.
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Instantaneous, permanent velocity change.
    pub fn apply_impulse(&mut self, delta: Vec2) {
        self.vel += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_advances_position() {
        let mut body = KinematicBody::new(Vec2::new(10.0, 20.0));
        body.vel = Vec2::new(100.0, -50.0);
        body.integrate(0.1);
        assert_eq!(body.pos, Vec2::new(20.0, 15.0));
    }

    #[test]
    fn test_integrate_zero_dt_is_noop() {
        let mut body = KinematicBody::new(Vec2::new(1.0, 2.0));
        body.vel = Vec2::new(100.0, 100.0);
        body.integrate(0.0);
        assert_eq!(body.pos, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_impulses_accumulate() {
        let mut body = KinematicBody::new(Vec2::ZERO);
        body.apply_impulse(Vec2::new(3.0, 0.0));
        body.apply_impulse(Vec2::new(2.0, -1.0));
        assert_eq!(body.vel, Vec2::new(5.0, -1.0));
        // No drag: velocity persists across integration
        body.integrate(1.0);
        assert_eq!(body.vel, Vec2::new(5.0, -1.0));
    }
}
