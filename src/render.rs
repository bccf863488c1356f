//! Render sink.
//!
//! The simulation never sees the renderer; once per frame the shell hands
//! the current state to whatever sink is installed. Sinks read positions,
//! rotations, visual variants, and meter readouts, and give nothing back.

use crate::sim::GameState;

pub trait RenderSink {
    fn draw(&mut self, state: &GameState);
}

/// Draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRender;

impl RenderSink for NullRender {
    fn draw(&mut self, _state: &GameState) {}
}

/// Headless HUD: logs a one-line scene summary at a fixed tick interval.
#[derive(Debug)]
pub struct DebugRender {
    every: u64,
}

impl DebugRender {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl RenderSink for DebugRender {
    fn draw(&mut self, state: &GameState) {
        if state.time_ticks % self.every != 0 {
            return;
        }
        let pos = state.player.body.pos;
        let fuel = state.player.fuel();
        let hull = state.player.health();
        log::debug!(
            "tick {:>6} | craft ({:5.1},{:5.1}) rot {:6.1} thrust {} | rocks {:2} booms {:2} | fuel {:5.1} hull {:5.1}",
            state.time_ticks,
            pos.x,
            pos.y,
            state.player.body.rotation,
            state.player.thrust_visual(),
            state.field.len(),
            state.explosions.len(),
            fuel.value(),
            hull.value(),
        );
    }
}
