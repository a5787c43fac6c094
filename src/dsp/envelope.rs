#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Automation Envelope
===================

Percussion doesn't need a gate. A drum hit is struck once and rings out on
its own, so instead of an ADSR state machine driven by note_on/note_off we
describe every parameter curve up front as a list of breakpoints on an
absolute clock, the way an audio-parameter timeline works.

Vocabulary
----------

  default     The value before the first event (what the parameter would
              read if nothing were ever scheduled).

  event       A (curve, value, time) triple. `time` is absolute context time
              in seconds, not an offset from the note.

  curve       How the value travels from the previous event to this one:
                SetValue     jump at `time`, hold until the next event
                Linear       straight line from the previous breakpoint
                Exponential  constant ratio per second from the previous one


The Shape: a bass hit
---------------------

  Level
    1.0 ┐●
        │ ╲
        │  ╲_
        │    ╲__
   0.01 └───────╲●──────────────→ Time
        t      t+0.35

  set_value_at(1.0, t)
  exponential_ramp_to(0.01, t + 0.35)

Exponential decays are what acoustic resonators do: each millisecond takes
away the same *fraction* of what is left, which is why the ramp needs a
non-zero target (0.01 here, about -40 dB, rather than 0).


The Math
--------

Between a previous breakpoint (t0, v0) and an event (t1, v1):

    linear:       v(t) = v0 + (v1 - v0) * (t - t0) / (t1 - t0)
    exponential:  v(t) = v0 * (v1 / v0) ^ ((t - t0) / (t1 - t0))

If v0 and v1 are zero or of opposite sign the exponential is undefined; the
value then holds at v0 until t1 and jumps to v1.

After the last event the value holds at that event's value forever.


Implementation Notes
--------------------

Events stay sorted by time (equal times keep insertion order). Evaluation is
a linear scan; voices carry two or three events, so a search structure would
cost more than it saves.
*/

/// How the value reaches an automation event.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    SetValue,
    Linear,
    Exponential,
}

/// A single scheduled breakpoint.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Automation {
    pub curve: Curve,
    pub value: f32,
    /// Absolute context time in seconds
    pub time: f64,
}

#[derive(Debug, Clone)]
pub struct Envelope {
    default: f32,
    events: Vec<Automation>,
}

impl Envelope {
    pub fn new(default: f32) -> Self {
        Self {
            default,
            events: Vec::new(),
        }
    }

    /// Jump to `value` at `time`.
    pub fn set_value_at(self, value: f32, time: f64) -> Self {
        self.schedule(Curve::SetValue, value, time)
    }

    /// Ramp linearly from the previous breakpoint to `value`, arriving at `time`.
    pub fn linear_ramp_to(self, value: f32, time: f64) -> Self {
        self.schedule(Curve::Linear, value, time)
    }

    /// Ramp exponentially from the previous breakpoint to `value`, arriving at `time`.
    pub fn exponential_ramp_to(self, value: f32, time: f64) -> Self {
        self.schedule(Curve::Exponential, value, time)
    }

    fn schedule(mut self, curve: Curve, value: f32, time: f64) -> Self {
        let index = self.events.partition_point(|e| e.time <= time);
        self.events.insert(index, Automation { curve, value, time });
        self
    }

    pub fn default_value(&self) -> f32 {
        self.default
    }

    pub fn events(&self) -> &[Automation] {
        &self.events
    }

    /// Time of the last scheduled event, if any.
    pub fn end_time(&self) -> Option<f64> {
        self.events.last().map(|e| e.time)
    }

    /// Evaluate the curve at absolute time `t`.
    pub fn value_at(&self, t: f64) -> f32 {
        let mut prev_time = 0.0;
        let mut prev_value = self.default;

        for event in &self.events {
            if t < event.time {
                let span = event.time - prev_time;
                if span <= 0.0 {
                    return prev_value;
                }
                let progress = ((t - prev_time) / span).clamp(0.0, 1.0) as f32;

                return match event.curve {
                    Curve::SetValue => prev_value,
                    Curve::Linear => prev_value + (event.value - prev_value) * progress,
                    Curve::Exponential => {
                        if prev_value == 0.0 || prev_value * event.value <= 0.0 {
                            prev_value
                        } else {
                            prev_value * (event.value / prev_value).powf(progress)
                        }
                    }
                };
            }

            prev_time = event.time;
            prev_value = event.value;
        }

        prev_value
    }

    /// Render the curve into `buffer`, one value per sample starting at `start_time`.
    pub fn render(&self, buffer: &mut [f32], start_time: f64, sample_rate: f32) {
        let step = 1.0 / sample_rate as f64;
        for (i, sample) in buffer.iter_mut().enumerate() {
            *sample = self.value_at(start_time + i as f64 * step);
        }
    }
}

impl From<f32> for Envelope {
    fn from(value: f32) -> Self {
        Envelope::new(value)
    }
}
