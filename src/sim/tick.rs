//! Per-frame simulation step.
//!
//! One call advances the whole session by one variable-dt frame in a
//! fixed order: input, craft physics, asteroid field, explosions,
//! boundary wrap, fuel recharge, session-end check. Collision resolution
//! always sees the craft and the rocks in the same coordinate frame: both
//! are integrated this frame and the craft's wrap happens afterwards.

use super::state::{GamePhase, GameState};
use crate::audio::AudioSink;
use crate::consts::*;

/// Input commands for a single frame, produced by the platform layer.
/// The simulation only consumes these values; it never polls hardware.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Raw analog pad axes, roughly +/-156 per axis, +y up.
    pub analog_dx: f32,
    pub analog_dy: f32,
    /// Thrust button went down this frame.
    pub thrust_pressed: bool,
    /// Thrust button is down.
    pub thrust_held: bool,
    /// Thrust button came up this frame.
    pub thrust_released: bool,
    /// Boost modifier is down (burns fuel for a stronger impulse).
    pub boost_held: bool,
    /// Explicit quit signal.
    pub quit: bool,
}

/// Advance the session by one frame. A `GameOver` session ignores ticks.
pub fn tick(state: &mut GameState, input: &TickInput, audio: &mut dyn AudioSink, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    if input.quit {
        log::info!("quit requested at tick {}", state.time_ticks);
        state.phase = GamePhase::GameOver;
        return;
    }

    let GameState {
        rng,
        player,
        field,
        explosions,
        ..
    } = state;

    // Facing follows the stick whenever it clears the deadzone
    player.update_facing(input.analog_dx, input.analog_dy);

    // A press edge reuses the last commanded strength; held frames pick
    // it from the boost modifier and the fuel meter
    if input.thrust_pressed {
        player.apply_thrust(player.thrust_strength());
        player.set_thrust_visual(true);
    } else if input.thrust_held {
        let strength = if input.boost_held && player.burn_boost(dt) {
            THRUST_BOOSTED
        } else {
            THRUST_BASE
        };
        player.apply_thrust(strength);
    } else if input.thrust_released {
        player.set_thrust_visual(false);
    }

    player.update(dt);
    field.update(dt, rng);
    field.resolve_collisions(player, explosions, audio, rng);
    explosions.update();
    player.wrap();
    player.recharge_fuel(dt);

    let depleted = player.is_depleted();
    if depleted {
        log::info!("hull depleted at tick {}", state.time_ticks);
        state.phase = GamePhase::GameOver;
    }
    state.time_ticks += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudio;
    use crate::sim::asteroid::Asteroid;
    use crate::sim::body::KinematicBody;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn rock_at(pos: Vec2) -> Asteroid {
        Asteroid {
            body: KinematicBody::new(pos),
            variant: 0,
        }
    }

    #[test]
    fn test_quit_ends_the_session() {
        let mut state = GameState::new(1);
        let input = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut state, &input, &mut NullAudio, DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        // The aborted frame is not counted
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_game_over_ignores_ticks() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        let before = state.player.body.pos;
        tick(&mut state, &TickInput::default(), &mut NullAudio, DT);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.player.body.pos, before);
    }

    #[test]
    fn test_grace_window_then_full_field() {
        let mut state = GameState::new(777);
        for _ in 0..SPAWN_DELAY_FRAMES {
            tick(&mut state, &TickInput::default(), &mut NullAudio, DT);
            assert!(state.field.is_empty());
        }
        tick(&mut state, &TickInput::default(), &mut NullAudio, DT);
        assert_eq!(state.field.len(), ASTEROID_CAP);
    }

    #[test]
    fn test_held_boost_burns_fuel_and_pushes_harder() {
        let mut state = GameState::new(1);
        let input = TickInput {
            analog_dx: 156.0,
            thrust_held: true,
            boost_held: true,
            ..Default::default()
        };
        tick(&mut state, &input, &mut NullAudio, 0.5);
        // Burned 50, recharged 25 on the same frame
        assert_eq!(state.player.fuel().value(), 75.0);
        // Full boost along +x at strength 5
        assert!((state.player.body.vel.x - THRUST_BOOSTED).abs() < 1e-4);
    }

    #[test]
    fn test_held_thrust_without_boost_spares_the_tank() {
        let mut state = GameState::new(1);
        let input = TickInput {
            analog_dx: 156.0,
            thrust_held: true,
            ..Default::default()
        };
        tick(&mut state, &input, &mut NullAudio, 0.5);
        // No burn; recharge banks past the starting level
        assert_eq!(state.player.fuel().value(), 125.0);
        assert!((state.player.body.vel.x - THRUST_BASE).abs() < 1e-4);
    }

    #[test]
    fn test_thrust_visual_follows_button_edges() {
        let mut state = GameState::new(1);
        assert!(!state.player.thrust_visual());

        let press = TickInput {
            thrust_pressed: true,
            ..Default::default()
        };
        tick(&mut state, &press, &mut NullAudio, DT);
        assert!(state.player.thrust_visual());

        let release = TickInput {
            thrust_released: true,
            ..Default::default()
        };
        tick(&mut state, &release, &mut NullAudio, DT);
        assert!(!state.player.thrust_visual());
    }

    #[test]
    fn test_ten_contact_frames_end_the_session() {
        let mut state = GameState::new(99);
        for frame in 1..=10u32 {
            // Plant a rock on the craft each frame; backfilled edge spawns
            // drift far too slowly to interfere at this dt
            let pos = state.player.body.pos;
            state.field.asteroids.push(rock_at(pos));
            tick(&mut state, &TickInput::default(), &mut NullAudio, 1e-4);

            let expected = HEALTH_MAX - HIT_DAMAGE * frame as f32;
            assert_eq!(state.player.health().value(), expected.max(0.0));
            if frame < 10 {
                assert_eq!(state.phase, GamePhase::Playing, "frame {frame}");
            }
        }
        assert_eq!(state.player.health().value(), 0.0);
        assert!(state.player.is_depleted());
        assert_eq!(state.phase, GamePhase::GameOver);
        // One explosion marker per contact, all still inside their lifetime
        assert_eq!(state.explosions.len(), 10);
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = GameState::new(424242);
        let mut b = GameState::new(424242);

        for t in 0..600u64 {
            let input = TickInput {
                analog_dx: if t % 120 < 60 { 156.0 } else { -90.0 },
                analog_dy: 40.0,
                thrust_pressed: t % 120 == 0,
                thrust_held: t % 120 < 60,
                thrust_released: t % 120 == 60,
                boost_held: t % 240 < 120,
                ..Default::default()
            };
            tick(&mut a, &input, &mut NullAudio, 1.0 / 120.0);
            tick(&mut b, &input, &mut NullAudio, 1.0 / 120.0);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.player.body.pos, b.player.body.pos);
        assert_eq!(a.player.fuel().value(), b.player.fuel().value());
        assert_eq!(a.player.health().value(), b.player.health().value());
        assert_eq!(a.field.len(), b.field.len());
        for (ra, rb) in a.field.asteroids().iter().zip(b.field.asteroids()) {
            assert_eq!(ra.body.pos, rb.body.pos);
            assert_eq!(ra.body.vel, rb.body.vel);
            assert_eq!(ra.variant, rb.variant);
        }
    }
}
