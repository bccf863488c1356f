//! Drifting asteroids: edge spawning and contact classification.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::body::KinematicBody;
use super::player::Player;
use crate::consts::*;

/// Single per-frame classification of an asteroid against the arena and
/// the craft. Out-of-bounds wins over contact: an asteroid that has left
/// the arena is never also reported as a hit, however close it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    None,
    OutOfBounds,
    Hit,
}

/// One drifting rock. Owned exclusively by the field; never outlives it.
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub body: KinematicBody,
    /// Sprite sheet variant, chosen at spawn. Cosmetic only.
    pub variant: usize,
}

impl Asteroid {
    /// Spawn on one of the four arena edges, chosen uniformly, with
    /// velocity biased to cross the arena: the component perpendicular to
    /// the spawn edge points strictly inward, the parallel component is
    /// free in both directions.
    pub fn spawn(rng: &mut Pcg32) -> Self {
        let (pos, vel) = match rng.random_range(0..4) {
            // left edge
            0 => (
                Vec2::new(1.0, rng.random_range(0.0..ARENA_HEIGHT)),
                Vec2::new(
                    rng.random_range(0.0..ASTEROID_MAX_SPEED),
                    rng.random_range(-ASTEROID_MAX_SPEED..ASTEROID_MAX_SPEED),
                ),
            ),
            // top edge
            1 => (
                Vec2::new(rng.random_range(0.0..ARENA_WIDTH), 1.0),
                Vec2::new(
                    rng.random_range(-ASTEROID_MAX_SPEED..ASTEROID_MAX_SPEED),
                    rng.random_range(0.0..ASTEROID_MAX_SPEED),
                ),
            ),
            // right edge
            2 => (
                Vec2::new(ARENA_WIDTH - 1.0, rng.random_range(0.0..ARENA_HEIGHT)),
                Vec2::new(
                    rng.random_range(-ASTEROID_MAX_SPEED..0.0),
                    rng.random_range(-ASTEROID_MAX_SPEED..ASTEROID_MAX_SPEED),
                ),
            ),
            // bottom edge
            _ => (
                Vec2::new(rng.random_range(0.0..ARENA_WIDTH), ARENA_HEIGHT - 1.0),
                Vec2::new(
                    rng.random_range(-ASTEROID_MAX_SPEED..ASTEROID_MAX_SPEED),
                    rng.random_range(-ASTEROID_MAX_SPEED..0.0),
                ),
            ),
        };
        let mut body = KinematicBody::new(pos);
        body.vel = vel;
        Self {
            body,
            variant: rng.random_range(0..ASTEROID_VARIANTS),
        }
    }

    /// Integrate the body by one frame.
    pub fn update(&mut self, dt: f32) {
        self.body.integrate(dt);
    }

    /// Cosmetic tumble. Present for renderers that want it; the default
    /// field update leaves rocks unrotated.
    pub fn spin(&mut self, degrees: f32) {
        self.body.rotation = crate::normalize_degrees(self.body.rotation + degrees);
    }

    /// Classify this asteroid against the arena bounds and the craft.
    /// Call exactly once per asteroid per frame: a `Hit` applies contact
    /// damage as a side effect, so re-calling double-damages the player.
    pub fn check_collision(&self, player: &mut Player) -> CollisionOutcome {
        let p = self.body.pos;
        if p.x > ARENA_WIDTH || p.x < 0.0 || p.y > ARENA_HEIGHT || p.y < 0.0 {
            return CollisionOutcome::OutOfBounds;
        }
        if p.distance(player.body.pos) < CONTACT_RADIUS {
            player.take_damage(HIT_DAMAGE);
            return CollisionOutcome::Hit;
        }
        CollisionOutcome::None
    }
}
