//! Oscillator shapes.

use safari_core::Oscillator;

/// `amplitude · sin(t·frequency + phase)³`.
///
/// Cubing the sine lingers near zero and sharpens the peaks, which reads as
/// breathing rather than mechanical swinging.
#[inline]
#[must_use]
pub fn eased_sine(time: f32, osc: Oscillator, phase: f32) -> f32 {
    let raw = (time * osc.frequency + phase).sin();
    raw * raw * raw * osc.amplitude
}

/// `amplitude · sin(t·frequency + phase)`.
#[inline]
#[must_use]
pub fn sine(time: f32, osc: Oscillator, phase: f32) -> f32 {
    (time * osc.frequency + phase).sin() * osc.amplitude
}
