use super::physics::Body;
use crate::color::Rgb;
use crate::rng::RandomSource;

pub const GRAVITY: f32 = 0.15;
pub const BURST_FRICTION: f32 = 0.98;
pub const ROCKET_FRICTION: f32 = 1.0;
pub const FULL_ALPHA: f32 = 255.0;

const TWINKLE_CHANCE: f32 = 0.2;
const TWINKLE_DIM: f32 = 100.0;

/// A single fading point.
#[derive(Debug, Clone)]
pub struct Particle {
    pub body: Body,
    pub color: Rgb,
    alpha: f32,
    decay: f32,
    gravity: f32,
    friction: f32,
    rocket: bool,
}

impl Particle {
    /// Launch particle for a firework: slight sideways drift, strong upward push.
    pub fn rocket(x: f32, y: f32, color: Rgb, rng: &mut impl RandomSource) -> Self {
        let vx = rng.range_f32(-1.0, 1.0);
        let vy = rng.range_f32(-15.0, -10.0);
        Self::with_velocity(x, y, vx, vy, color, true, rng)
    }

    pub fn with_velocity(
        x: f32,
        y: f32,
        vx: f32,
        vy: f32,
        color: Rgb,
        rocket: bool,
        rng: &mut impl RandomSource,
    ) -> Self {
        Self {
            body: Body::new(x, y, vx, vy),
            color,
            alpha: FULL_ALPHA,
            decay: rng.range_f32(2.0, 5.0),
            gravity: GRAVITY,
            friction: if rocket { ROCKET_FRICTION } else { BURST_FRICTION },
            rocket,
        }
    }

    pub fn update(&mut self) {
        self.body.step(self.gravity, self.friction);
        self.alpha -= self.decay;
    }

    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    #[cfg(test)]
    fn decay(&self) -> f32 {
        self.decay
    }

    pub fn is_rocket(&self) -> bool {
        self.rocket
    }

    #[cfg(test)]
    fn friction(&self) -> f32 {
        self.friction
    }

    /// Alpha to draw this frame. One draw in five twinkles dimmer; the stored
    /// alpha is left untouched.
    pub fn render_alpha(&self, rng: &mut impl RandomSource) -> u8 {
        let alpha = self.alpha.max(0.0);
        let shown = if rng.chance(TWINKLE_CHANCE) {
            (alpha - TWINKLE_DIM).max(0.0)
        } else {
            alpha
        };
        shown.min(FULL_ALPHA) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;

    #[test]
    fn rocket_has_no_drag() {
        let mut rng = SequenceRng::constant(0.5);
        let p = Particle::rocket(0.0, 100.0, (255, 0, 0), &mut rng);
        assert!(p.is_rocket());
        assert_eq!(p.friction(), ROCKET_FRICTION);
        assert!(p.body.vy < 0.0);
    }

    #[test]
    fn decays_to_death() {
        let mut rng = SequenceRng::constant(0.0);
        let mut p = Particle::with_velocity(0.0, 0.0, 3.0, -3.0, (255, 255, 255), false, &mut rng);
        assert_eq!(p.decay(), 2.0);
        let mut ticks = 0;
        while p.is_alive() {
            p.update();
            ticks += 1;
        }
        assert_eq!(ticks, 128);
        assert!(p.alpha() <= 0.0);
    }

    #[test]
    fn twinkle_leaves_alpha_alone() {
        let mut build = SequenceRng::constant(0.5);
        let p = Particle::with_velocity(0.0, 0.0, 1.0, 1.0, (1, 2, 3), false, &mut build);
        let mut twinkle = SequenceRng::constant(0.1);
        let mut steady = SequenceRng::constant(0.9);
        assert_eq!(p.render_alpha(&mut twinkle), 155);
        assert_eq!(p.render_alpha(&mut steady), 255);
        assert_eq!(p.alpha(), FULL_ALPHA);
    }
}
