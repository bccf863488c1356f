//! Astro Drift entry point
//!
//! Headless session driver: wires the simulation to the shipped
//! render/audio sinks and flies a scripted demo pilot, the same way a
//! windowed shell would feed real pad input.

use std::time::Duration;

use astro_drift::audio::ConsoleAudio;
use astro_drift::consts::*;
use astro_drift::platform::FrameClock;
use astro_drift::render::{DebugRender, NullRender, RenderSink};
use astro_drift::settings::Settings;
use astro_drift::sim::{GamePhase, GameState, TickInput, tick};

/// Frame pacing for the headless loop (the sim itself is variable-dt).
const TARGET_FRAME: Duration = Duration::from_millis(16);
/// Hard stop for unattended runs: five minutes at ~60 fps.
const MAX_TICKS: u64 = 5 * 60 * 60;

fn main() {
    env_logger::init();
    let settings = Settings::load();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .or(settings.seed)
        .unwrap_or_else(seed_from_clock);
    log::info!("Astro Drift starting with seed {}", seed);

    let mut audio = ConsoleAudio::new();
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_muted(settings.muted);

    let mut render: Box<dyn RenderSink> = if settings.show_hud {
        Box::new(DebugRender::new(60))
    } else {
        Box::new(NullRender)
    };

    let mut state = GameState::new(seed);
    let mut clock = FrameClock::new();

    while state.phase == GamePhase::Playing && state.time_ticks < MAX_TICKS {
        let dt = clock.delta_seconds();
        let input = demo_input(state.time_ticks);
        tick(&mut state, &input, &mut audio, dt);
        render.draw(&state);
        std::thread::sleep(TARGET_FRAME);
    }

    log::info!(
        "session over after {} ticks: hull {:.1}, fuel {:.1}, {} rocks in flight",
        state.time_ticks,
        state.player.health().value(),
        state.player.fuel().value(),
        state.field.len(),
    );
}

/// Scripted pilot for unattended runs: sweeps the stick slowly and rides
/// the booster in bursts, enough to exercise thrust, fuel burn, and wrap.
fn demo_input(tick_no: u64) -> TickInput {
    let phase = tick_no % 240;
    let angle = tick_no as f32 * 0.01;
    TickInput {
        analog_dx: angle.cos() * ANALOG_RANGE,
        analog_dy: angle.sin() * ANALOG_RANGE,
        thrust_pressed: phase == 0,
        thrust_held: phase > 0 && phase < 120,
        thrust_released: phase == 120,
        boost_held: tick_no % 480 < 240,
        quit: false,
    }
}

fn seed_from_clock() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
