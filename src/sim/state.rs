//! Session state: the craft, the field, live explosions, and the seeded RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::explosion::ExplosionTracker;
use super::field::AsteroidField;
use super::player::Player;
use crate::consts::*;

/// Current phase of a session. The only transition is
/// `Playing -> GameOver`, on an explicit quit or on hull depletion; both
/// are normal terminal states, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// Complete simulation state for one session.
///
/// Every entity has exactly one owner: the craft mutates itself, the
/// field mutates its rocks, the tracker mutates its explosions. The RNG
/// is owned here and handed down explicitly so spawn sequences are
/// reproducible from the seed.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, kept for reproducibility reporting.
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    pub field: AsteroidField,
    pub explosions: ExplosionTracker,
    /// Simulation frame counter.
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new session with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            player: Player::new(Vec2::new(PLAYER_START_X, PLAYER_START_Y)),
            field: AsteroidField::new(ASTEROID_CAP),
            explosions: ExplosionTracker::new(),
            time_ticks: 0,
        }
    }
}
