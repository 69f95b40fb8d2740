use super::particle::Particle;
use super::shape::{BurstShape, ShapeKind};
use crate::color::Rgb;
use crate::rng::RandomSource;

const SIDE_MARGIN: i32 = 100;
const MIN_TARGET_Y: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FireworkState {
    Ascending,
    Exploded,
    Dead,
}

/// Emitted on the tick a rocket bursts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explosion {
    pub x: f32,
    pub y: f32,
    pub shape: ShapeKind,
    pub particles: usize,
}

#[derive(Debug, Clone)]
pub struct Firework {
    target_y: f32,
    color: Rgb,
    rocket: Particle,
    particles: Vec<Particle>,
    state: FireworkState,
}

pub fn random_color(rng: &mut impl RandomSource) -> Rgb {
    (
        rng.range_i32(100, 255) as u8,
        rng.range_i32(100, 255) as u8,
        rng.range_i32(100, 255) as u8,
    )
}

impl Firework {
    /// Launches from the bottom edge somewhere away from the sides, aiming for
    /// the upper half of the screen.
    pub fn launch(width: f32, height: f32, rng: &mut impl RandomSource) -> Self {
        let (w, h) = (width as i32, height as i32);
        let x = if w > SIDE_MARGIN * 2 {
            rng.range_i32(SIDE_MARGIN, w - SIDE_MARGIN)
        } else {
            w / 2
        };
        let target_y = rng.range_i32(MIN_TARGET_Y.min(h / 2), h / 2);
        let color = random_color(rng);
        let rocket = Particle::rocket(x as f32, height, color, rng);
        Self::from_rocket(rocket, target_y as f32)
    }

    pub fn from_rocket(rocket: Particle, target_y: f32) -> Self {
        Self {
            target_y,
            color: rocket.color,
            rocket,
            particles: Vec::new(),
            state: FireworkState::Ascending,
        }
    }

    pub fn state(&self) -> FireworkState {
        self.state
    }

    pub fn is_exploded(&self) -> bool {
        self.state != FireworkState::Ascending
    }

    pub fn is_dead(&self) -> bool {
        self.state == FireworkState::Dead
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn target_y(&self) -> f32 {
        self.target_y
    }

    pub fn rocket(&self) -> &Particle {
        &self.rocket
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advances one tick. Returns the explosion on the tick the rocket bursts.
    pub fn update(&mut self, rng: &mut impl RandomSource) -> Option<Explosion> {
        match self.state {
            FireworkState::Ascending => {
                self.rocket.update();
                let body = self.rocket.body;
                // Apex or target height, whichever comes first.
                if body.vy >= 0.0 || body.y <= self.target_y {
                    Some(self.explode(ShapeKind::random(rng), rng))
                } else {
                    None
                }
            }
            FireworkState::Exploded => {
                for p in &mut self.particles {
                    p.update();
                }
                self.particles.retain(|p| p.is_alive());
                if self.particles.is_empty() {
                    self.state = FireworkState::Dead;
                }
                None
            }
            FireworkState::Dead => None,
        }
    }

    /// Bursts at the rocket's current position with the given shape.
    pub fn explode(&mut self, kind: ShapeKind, rng: &mut impl RandomSource) -> Explosion {
        let shape = BurstShape::roll(kind, rng);
        let count = shape.particle_count(rng);
        let (x, y) = (self.rocket.body.x, self.rocket.body.y);

        self.particles = shape
            .velocities(count, rng)
            .into_iter()
            .map(|(vx, vy)| Particle::with_velocity(x, y, vx, vy, self.color, false, rng))
            .collect();
        self.state = FireworkState::Exploded;

        Explosion { x, y, shape: kind, particles: count }
    }
}
