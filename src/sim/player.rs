//! The player craft: thrust, fuel, hull integrity, and toroidal wrap.

use glam::Vec2;

use super::body::KinematicBody;
use super::meter::ResourceMeter;
use crate::consts::*;
use crate::facing_angle_degrees;

/// The player-controlled craft. Owns its body and both resource meters;
/// the meters are mutated only through the methods here, never poked by
/// the session loop or other entities.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: KinematicBody,
    fuel: ResourceMeter,
    health: ResourceMeter,
    /// Booster sprite state, toggled by thrust button edges.
    thrust_active: bool,
    /// Impulse scale from the most recent held-thrust frame. Press-edge
    /// frames reuse it before the modifier state is known.
    thrust_strength: f32,
    /// Last analog reading that cleared the deadzone, in raw pad units.
    /// Held-thrust frames keep pushing along it when the stick goes slack.
    cached_dir: Vec2,
    /// Sticky terminal flag, set when the hull gives out.
    depleted: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        let mut body = KinematicBody::new(pos);
        // Rest orientation of the ship art
        body.rotation = 90.0;
        Self {
            body,
            fuel: ResourceMeter::new(FUEL_MIN, FUEL_MAX, FUEL_START),
            health: ResourceMeter::new(HEALTH_MIN, HEALTH_MAX, HEALTH_MAX),
            thrust_active: false,
            thrust_strength: THRUST_BOOSTED,
            cached_dir: Vec2::ZERO,
            depleted: false,
        }
    }

    /// Update the commanded facing from raw analog axes. Readings inside
    /// the deadzone leave rotation and the cached thrust direction at
    /// their last valid values.
    pub fn update_facing(&mut self, dx: f32, dy: f32) {
        if dx.abs() + dy.abs() > ANALOG_DEADZONE {
            self.body.rotation = facing_angle_degrees(dx, dy);
            self.cached_dir = Vec2::new(dx, dy);
        }
    }

    /// Apply a thrust impulse along the cached analog direction. The pad's
    /// +y is up but arena +y is down, hence the flip.
    pub fn apply_thrust(&mut self, strength: f32) {
        self.thrust_strength = strength;
        self.body.apply_impulse(Vec2::new(
            self.cached_dir.x / ANALOG_RANGE * strength,
            -self.cached_dir.y / ANALOG_RANGE * strength,
        ));
    }

    /// Drain fuel for one boosted frame. `false` once the tank is dry.
    pub fn burn_boost(&mut self, dt: f32) -> bool {
        self.fuel.deplete(FUEL_BURN_RATE, dt)
    }

    /// Passive fuel regain, applied every frame.
    pub fn recharge_fuel(&mut self, dt: f32) {
        self.fuel.restore(FUEL_RECHARGE_RATE, dt);
    }

    pub fn set_thrust_visual(&mut self, on: bool) {
        self.thrust_active = on;
    }

    pub fn thrust_visual(&self) -> bool {
        self.thrust_active
    }

    /// Integrate the body by one frame.
    pub fn update(&mut self, dt: f32) {
        self.body.integrate(dt);
    }

    /// Toroidal wrap: a coordinate past a bound resets to the opposite
    /// edge exactly - not clamped, not bounced.
    pub fn wrap(&mut self) {
        if self.body.pos.x > ARENA_WIDTH {
            self.body.pos.x = 0.0;
        } else if self.body.pos.x < 0.0 {
            self.body.pos.x = ARENA_WIDTH;
        }
        if self.body.pos.y > ARENA_HEIGHT {
            self.body.pos.y = 0.0;
        } else if self.body.pos.y < 0.0 {
            self.body.pos.y = ARENA_HEIGHT;
        }
    }

    /// Contact damage. Returns `false` once the hull gives out; the
    /// depleted flag is sticky from then on.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if self.health.deplete(amount, 1.0) {
            true
        } else {
            self.depleted = true;
            false
        }
    }

    pub fn fuel(&self) -> &ResourceMeter {
        &self.fuel
    }

    pub fn health(&self) -> &ResourceMeter {
        &self.health
    }

    pub fn is_depleted(&self) -> bool {
        self.depleted
    }

    pub fn thrust_strength(&self) -> f32 {
        self.thrust_strength
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(Vec2::new(PLAYER_START_X, PLAYER_START_Y))
    }

    #[test]
    fn test_facing_follows_stick_outside_deadzone() {
        let mut p = player();
        p.update_facing(156.0, 0.0);
        assert!((p.body.rotation - 90.0).abs() < 1e-3);
        p.update_facing(0.0, 156.0);
        assert!(p.body.rotation.abs() < 1e-3);
    }

    #[test]
    fn test_facing_held_inside_deadzone() {
        let mut p = player();
        p.update_facing(156.0, 0.0);
        let held = p.body.rotation;

        // Manhattan magnitude 70 <= 75: ignored entirely
        p.update_facing(40.0, 30.0);
        assert_eq!(p.body.rotation, held);
        // Exactly at the threshold still counts as slack
        p.update_facing(75.0, 0.0);
        assert_eq!(p.body.rotation, held);
        // One unit past it snaps to the new facing
        p.update_facing(76.0, 0.0);
        assert!((p.body.rotation - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_thrust_uses_cached_direction() {
        let mut p = player();
        p.update_facing(156.0, 0.0);
        p.apply_thrust(5.0);
        assert!((p.body.vel.x - 5.0).abs() < 1e-5);
        assert!(p.body.vel.y.abs() < 1e-5);

        // Stick goes slack; a held-thrust frame keeps pushing the same way
        p.update_facing(0.0, 0.0);
        p.apply_thrust(3.0);
        assert!((p.body.vel.x - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_thrust_flips_pad_y_to_screen_y() {
        let mut p = player();
        p.update_facing(0.0, 156.0);
        p.apply_thrust(5.0);
        assert!(p.body.vel.x.abs() < 1e-5);
        assert!((p.body.vel.y + 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_wrap_resets_to_opposite_edge() {
        let mut p = player();
        p.body.pos = Vec2::new(ARENA_WIDTH + 1.0, 120.0);
        p.wrap();
        assert_eq!(p.body.pos.x, 0.0);

        p.body.pos = Vec2::new(-1.0, 120.0);
        p.wrap();
        assert_eq!(p.body.pos.x, ARENA_WIDTH);

        p.body.pos = Vec2::new(200.0, ARENA_HEIGHT + 1.0);
        p.wrap();
        assert_eq!(p.body.pos.y, 0.0);

        p.body.pos = Vec2::new(200.0, -1.0);
        p.wrap();
        assert_eq!(p.body.pos.y, ARENA_HEIGHT);
    }

    #[test]
    fn test_wrap_leaves_interior_alone() {
        let mut p = player();
        p.body.pos = Vec2::new(123.0, 45.0);
        p.wrap();
        assert_eq!(p.body.pos, Vec2::new(123.0, 45.0));
    }

    #[test]
    fn test_ten_hits_deplete_the_hull() {
        let mut p = player();
        for hit in 1..=9 {
            assert!(p.take_damage(HIT_DAMAGE), "hit {hit} should not be lethal");
            assert!(!p.is_depleted());
        }
        assert_eq!(p.health().value(), 10.0);
        // The tenth hit lands exactly on the floor and is terminal
        assert!(!p.take_damage(HIT_DAMAGE));
        assert_eq!(p.health().value(), 0.0);
        assert!(p.is_depleted());
        // The flag is sticky
        assert!(!p.take_damage(HIT_DAMAGE));
        assert!(p.is_depleted());
    }

    #[test]
    fn test_fuel_burn_and_recharge() {
        let mut p = player();
        assert!(p.burn_boost(0.5)); // 100 -> 50
        assert_eq!(p.fuel().value(), 50.0);
        p.recharge_fuel(0.5); // +25
        assert_eq!(p.fuel().value(), 75.0);
    }
}
