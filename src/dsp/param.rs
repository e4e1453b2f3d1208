/*
Ramped Parameters
=================

Every audible level in the engine (master volume, mix balance, noise gain,
modulation-stage gains) is a `RampedParam`: a value that can either be set
immediately or glided to a target over a short, fixed duration.

Why ramp at all? Stepping a gain between two values mid-buffer produces a
discontinuity in the output signal - heard as a click or zipper noise. A
linear glide over a few tens of milliseconds is below the threshold where the
movement itself is audible, while completely removing the step.

The math mirrors the envelope-increment approach used elsewhere in this
codebase:

    increment = (target - current) / (seconds * sample_rate)

and each rendered sample advances the value by one increment until the ramp
is exhausted, at which point the value snaps exactly onto the target (no
floating-point drift).

Scheduling a new ramp, or an immediate set, replaces any ramp in flight.
There is no cancellation beyond that: once issued, a ramp runs on the render
clock until finished or superseded.
*/

/// A parameter value with click-free scheduled transitions.
#[derive(Debug, Clone)]
pub struct RampedParam {
    value: f32,
    target: f32,
    increment: f32,
    remaining: u32,
}

impl RampedParam {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            target: value,
            increment: 0.0,
            remaining: 0,
        }
    }

    /// Jump to `value` immediately, cancelling any ramp in flight.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.increment = 0.0;
        self.remaining = 0;
    }

    /// Glide linearly to `target` over `seconds`, starting now.
    pub fn ramp_to(&mut self, target: f32, seconds: f32, sample_rate: f32) {
        let samples = (seconds * sample_rate) as u32;
        if samples == 0 {
            self.set(target);
            return;
        }

        self.target = target;
        self.remaining = samples;
        self.increment = (target - self.value) / samples as f32;
    }

    /// Advance one sample and return the current value.
    #[inline]
    pub fn next_value(&mut self) -> f32 {
        if self.remaining > 0 {
            self.value += self.increment;
            self.remaining -= 1;
            if self.remaining == 0 {
                self.value = self.target;
            }
        }
        self.value
    }

    /// Advance `frames` samples at once (block-rate use) and return the value.
    pub fn advance(&mut self, frames: usize) -> f32 {
        let steps = (frames as u32).min(self.remaining);
        if steps > 0 {
            self.value += self.increment * steps as f32;
            self.remaining -= steps;
            if self.remaining == 0 {
                self.value = self.target;
            }
        }
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_ramping(&self) -> bool {
        self.remaining > 0
    }
}
