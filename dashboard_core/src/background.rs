//! Slowly breathing vertical background gradient.

use crate::types::Rgba;

/// Angular speed of the color oscillation (rad/s).
const PULSE_RATE: f32 = 0.4;

/// Top and bottom gradient colors `t` seconds after start.
pub fn gradient_colors(t: f32) -> (Rgba, Rgba) {
    let phase = t * PULSE_RATE;
    let top = Rgba::rgb(channel(25.0 + 10.0 * phase.sin()), 20, 35);
    let bottom = Rgba::rgb(20, channel(25.0 + 10.0 * phase.cos()), 45);
    (top, bottom)
}

fn channel(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}
