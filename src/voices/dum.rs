//! Dum - the deep bass stroke.
//!
//! Struck in the centre of the skin. Two layers:
//!
//! 1. Sine body with a fast pitch drop, 110 Hz → 45 Hz over 200 ms. The drop
//!    is what makes it read as a drum rather than a tone.
//! 2. Low-passed noise (300 Hz) for the soft thud of the palm, gone in 50 ms.
//!
//! Both layers decay exponentially to the floor; the body rings for 350 ms.

use crate::{
    dsp::{envelope::Envelope, noise::NoiseBuffer},
    graph::{envelope::EnvNode, extensions::NodeExt, filter::FilterNode, mix::Mix, oscillator::OscNode},
    voices::{decay_from, noise_hit, NoiseBranch, ToneBranch},
};

pub type Dum = Mix<ToneBranch, NoiseBranch>;

const BODY_START_HZ: f32 = 110.0;
const BODY_END_HZ: f32 = 45.0;
const PITCH_DROP: f64 = 0.2;
const BODY_DECAY: f64 = 0.35;

const THUD_CUTOFF_HZ: f32 = 300.0;
const THUD_PEAK: f32 = 0.4;
const THUD_DECAY: f64 = 0.05;

/// Create a bass stroke starting at `at`.
pub fn dum(at: f64, noise: NoiseBuffer) -> Dum {
    let pitch = Envelope::new(BODY_START_HZ)
        .set_value_at(BODY_START_HZ, at)
        .exponential_ramp_to(BODY_END_HZ, at + PITCH_DROP);

    let body = OscNode::sine()
        .with_frequency(pitch)
        .start_at(at)
        .stop_at(at + BODY_DECAY)
        .amplify(EnvNode::new(decay_from(1.0, at, BODY_DECAY)));

    let thud = noise_hit(
        at,
        noise,
        FilterNode::lowpass(THUD_CUTOFF_HZ),
        THUD_PEAK,
        THUD_DECAY,
    );

    body.mix(thud)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dsp::{envelope::Curve, filter::FilterType},
        graph::GraphNode,
        voices::test_support::*,
    };

    #[test]
    fn body_pitch_drops_from_110_to_45() {
        let voice = dum(2.0, noise());
        let events = voice.source_a.signal.frequency().events();

        assert_eq!(events.len(), 2);
        assert_eq!((events[0].curve, events[0].value, events[0].time), (Curve::SetValue, 110.0, 2.0));
        assert_eq!(events[1].curve, Curve::Exponential);
        assert_eq!(events[1].value, 45.0);
        assert!((events[1].time - 2.2).abs() < 1e-9);
    }

    #[test]
    fn body_gain_decays_over_350ms() {
        let voice = dum(2.0, noise());
        let events = voice.source_a.modulator.envelope().events();

        assert_eq!((events[0].value, events[0].time), (1.0, 2.0));
        assert_eq!(events[1].curve, Curve::Exponential);
        assert_eq!(events[1].value, 0.01);
        assert!((events[1].time - 2.35).abs() < 1e-9);
        let stop = voice.source_a.signal.stop_time().unwrap_or_default();
        assert!((stop - 2.35).abs() < 1e-9);
    }

    #[test]
    fn thud_is_lowpassed_noise() {
        let voice = dum(0.0, noise());
        let filter = &voice.source_b.signal.filter;
        assert_eq!(filter.filter_type(), FilterType::LowPass);
        assert_eq!(filter.cutoff(), 300.0);

        let gain = voice.source_b.modulator.envelope().events();
        assert_eq!(gain[0].value, 0.4);
        assert!((gain[1].time - 0.05).abs() < 1e-9);
    }

    #[test]
    fn retires_once_noise_has_played_out() {
        let mut voice = dum(0.0, noise());
        let out = render(&mut voice, 0.0, 0.5);
        assert!(peak(&out) > 0.1);
        assert!(voice.is_active(), "noise tail still playing");

        render(&mut voice, 0.5, 1.6);
        assert!(!voice.is_active());
    }
}
