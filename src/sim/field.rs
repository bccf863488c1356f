//! The asteroid field: population cap, warm-up seeding, and collision
//! resolution against the craft.

use rand_pcg::Pcg32;

use super::asteroid::{Asteroid, CollisionOutcome};
use super::explosion::ExplosionTracker;
use super::player::Player;
use crate::audio::{AudioSink, SoundEffect};
use crate::consts::*;

/// Owns the asteroid collection. Holds at most `capacity` rocks after any
/// resolution pass; destroyed rocks are backfilled immediately.
#[derive(Debug, Clone)]
pub struct AsteroidField {
    pub(crate) asteroids: Vec<Asteroid>,
    capacity: usize,
    /// Frames since session start, for the one-time delayed seeding.
    warmup_frames: u32,
    seeded: bool,
}

impl AsteroidField {
    pub fn new(capacity: usize) -> Self {
        Self {
            asteroids: Vec::with_capacity(capacity),
            capacity,
            warmup_frames: 0,
            seeded: false,
        }
    }

    /// Append one asteroid unless the field is at capacity. Silent no-op
    /// at the cap: spawns are dropped, never queued.
    pub fn spawn(&mut self, rng: &mut Pcg32) {
        if self.asteroids.len() < self.capacity {
            self.asteroids.push(Asteroid::spawn(rng));
        }
    }

    /// Advance the warm-up counter and integrate every asteroid. The
    /// field starts empty and fills to capacity once the grace window
    /// elapses, giving the player time to get moving.
    pub fn update(&mut self, dt: f32, rng: &mut Pcg32) {
        self.warmup_frames = self.warmup_frames.saturating_add(1);
        if !self.seeded && self.warmup_frames > SPAWN_DELAY_FRAMES {
            for _ in 0..self.capacity {
                self.spawn(rng);
            }
            self.seeded = true;
            log::info!("asteroid field seeded with {} rocks", self.asteroids.len());
        }
        for asteroid in &mut self.asteroids {
            asteroid.update(dt);
        }
    }

    /// One classification per asteroid, then removal and backfill.
    ///
    /// Reverse index order keeps removal safe without skipping or
    /// revisiting entries; a backfilled rock lands past the cursor and is
    /// not examined until next frame. A `Hit` fires the explosion effect
    /// and leaves a marker at the rock's last position.
    pub fn resolve_collisions(
        &mut self,
        player: &mut Player,
        explosions: &mut ExplosionTracker,
        audio: &mut dyn AudioSink,
        rng: &mut Pcg32,
    ) {
        for i in (0..self.asteroids.len()).rev() {
            match self.asteroids[i].check_collision(player) {
                CollisionOutcome::None => {}
                CollisionOutcome::OutOfBounds => {
                    self.asteroids.remove(i);
                    self.spawn(rng);
                }
                CollisionOutcome::Hit => {
                    audio.play(SoundEffect::Explosion);
                    explosions.add(self.asteroids[i].body.pos, rng);
                    self.asteroids.remove(i);
                    self.spawn(rng);
                }
            }
        }
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
