use crate::color::{hsl_to_rgb, Rgb};

const HUE_PER_SEC: f64 = 100.0;
const SUB_HUE_OFFSET: f32 = 60.0;
const BREATH_RATE: f64 = 3.0;
const BREATH_DEPTH: f64 = 0.08;
const PULSE_RATE: f64 = 5.0;
const PULSE_HEIGHT: f64 = 10.0;
const SHINE_MAX: f64 = 180.0;

/// Animated look of the celebration title at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleFx {
    pub hue: f32,
    pub main_color: Rgb,
    pub sub_color: Rgb,
    pub scale: f32,
    pub pulse: f32,
    pub shine_alpha: u8,
}

impl TitleFx {
    /// Everything here is a function of wall-clock seconds `t`.
    pub fn at(t: f64) -> Self {
        // The f32 cast can round up to 360 just below a full turn.
        let hue = ((t * HUE_PER_SEC).rem_euclid(360.0) as f32) % 360.0;
        let wave = (t * PULSE_RATE).sin();
        Self {
            hue,
            main_color: hsl_to_rgb(hue, 1.0, 0.7),
            sub_color: hsl_to_rgb((hue + SUB_HUE_OFFSET) % 360.0, 1.0, 0.6),
            scale: (1.0 + BREATH_DEPTH * (t * BREATH_RATE).sin()) as f32,
            pulse: (PULSE_HEIGHT * wave) as f32,
            shine_alpha: (SHINE_MAX * wave.abs()) as u8,
        }
    }
}

impl Default for TitleFx {
    fn default() -> Self {
        Self::at(0.0)
    }
}
