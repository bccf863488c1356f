//! Short-lived explosion markers left where an asteroid met the craft.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Visual-only entity: no velocity, no collision, just a position and an
/// age in frames.
#[derive(Debug, Clone)]
pub struct Explosion {
    pub pos: Vec2,
    /// Sprite sheet variant, cosmetic.
    pub variant: usize,
    /// Frames since this explosion was spawned.
    pub age: u32,
}

/// Owns every live explosion and ages them out after a fixed frame count.
#[derive(Debug, Clone, Default)]
pub struct ExplosionTracker {
    explosions: Vec<Explosion>,
}

impl ExplosionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh explosion at the impact position.
    pub fn add(&mut self, pos: Vec2, rng: &mut Pcg32) {
        self.explosions.push(Explosion {
            pos,
            variant: rng.random_range(0..EXPLOSION_VARIANTS),
            age: 0,
        });
    }

    /// Age every explosion by one frame and drop the expired ones,
    /// preserving the relative order of survivors.
    pub fn update(&mut self) {
        for explosion in &mut self.explosions {
            explosion.age += 1;
        }
        self.explosions
            .retain(|e| e.age <= EXPLOSION_LIFETIME_FRAMES);
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn len(&self) -> usize {
        self.explosions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.explosions.is_empty()
    }
}
