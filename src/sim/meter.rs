//! Bounded resource meters (fuel, hull integrity)
//!
//! Both gauges are the same primitive with different call patterns: fuel
//! drains under boost and passively recharges every frame, hull integrity
//! drains on asteroid contact and never recharges. Sharing one type keeps
//! the clamp logic in one place.

/// Display span of the HUD bar. Both meters draw against 100 units even
/// though fuel can bank up to 150.
const METER_DISPLAY_SPAN: f32 = 100.0;

/// A bounded, clamped floating-point quantity with deplete/restore ops.
///
/// Invariant: `min <= value <= max` after every operation. Owners mutate
/// the value only through [`ResourceMeter::deplete`] and
/// [`ResourceMeter::restore`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceMeter {
    value: f32,
    min: f32,
    max: f32,
}

impl ResourceMeter {
    /// Create a meter with the given range and starting value (clamped).
    pub fn new(min: f32, max: f32, value: f32) -> Self {
        Self {
            value: value.clamp(min, max),
            min,
            max,
        }
    }

    /// Subtract `rate * dt`. Returns `false` when the meter bottoms out:
    /// the call that first drives the value to `min` clamps and reports
    /// exhaustion, as does every later call while empty.
    pub fn deplete(&mut self, rate: f32, dt: f32) -> bool {
        let next = self.value - rate * dt;
        if next <= self.min {
            self.value = self.min;
            false
        } else {
            self.value = next;
            true
        }
    }

    /// Add `rate * dt`, silently clamped to `max`.
    pub fn restore(&mut self, rate: f32, dt: f32) {
        self.value = (self.value + rate * dt).min(self.max);
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Fill fraction in [0, 1].
    pub fn fraction(&self) -> f32 {
        (self.value - self.min) / (self.max - self.min)
    }

    /// HUD bar color: red drains out and green fills in across the
    /// display span; values banked past it stay solid green.
    pub fn display_color(&self) -> [f32; 3] {
        let t = (self.value / METER_DISPLAY_SPAN).clamp(0.0, 1.0);
        [1.0 - t, t, 0.0]
    }
}
