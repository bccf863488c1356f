//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only, passed in explicitly wherever spawning happens
//! - No rendering or platform dependencies
//! - Fixed per-frame update order (see [`tick::tick`])

pub mod asteroid;
pub mod body;
pub mod explosion;
pub mod field;
pub mod meter;
pub mod player;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, CollisionOutcome};
pub use body::KinematicBody;
pub use explosion::{Explosion, ExplosionTracker};
pub use field::AsteroidField;
pub use meter::ResourceMeter;
pub use player::Player;
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
