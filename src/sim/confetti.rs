use crate::color::Rgb;
use crate::rng::RandomSource;

use super::firework::random_color;

pub const RESPAWN_Y: (i32, i32) = (-50, -10);
pub const ALPHA: u8 = 200;

/// A falling, spinning paper square. Recycled to the top when it leaves
/// the bottom edge.
#[derive(Debug, Clone)]
pub struct Confetti {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub color: Rgb,
    pub angle: f32,
    pub rotation_speed: f32,
    width: f32,
    height: f32,
}

impl Confetti {
    /// Scattered anywhere above the screen so the first wave arrives staggered.
    pub fn new(width: f32, height: f32, rng: &mut impl RandomSource) -> Self {
        Self {
            x: rng.range_i32(0, width as i32) as f32,
            y: rng.range_i32(-(height as i32), 0) as f32,
            size: rng.range_i32(5, 10) as f32,
            color: random_color(rng),
            vx: rng.range_f32(-2.0, 2.0),
            vy: rng.range_f32(2.0, 5.0),
            angle: rng.range_f32(0.0, 360.0),
            rotation_speed: rng.range_f32(2.0, 10.0),
            width,
            height,
        }
    }

    pub fn update(&mut self, rng: &mut impl RandomSource) {
        self.y += self.vy;
        self.x += self.vx;
        self.angle = (self.angle + self.rotation_speed) % 360.0;

        if self.y > self.height {
            self.y = rng.range_i32(RESPAWN_Y.0, RESPAWN_Y.1) as f32;
            self.x = rng.range_i32(0, self.width as i32) as f32;
        }
    }
}
