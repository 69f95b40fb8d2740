//! Velocity fields for firework bursts.
//!
//! Every shape turns a particle index into an initial velocity. Parametric
//! shapes walk `t = 2π·i/N` around the outline; the circle ignores the index
//! and scatters randomly. The glyph shape spells the year on a 3-row grid and
//! fixes its own particle count.

use std::f32::consts::TAU;

use crate::rng::RandomSource;

pub const MIN_BURST: i32 = 120;
pub const MAX_BURST: i32 = 250;
pub const GLYPH_DENSITY: usize = 3;

const JITTER: f32 = 0.5;
const GLYPH_SPREAD: f32 = 1.5;
const GLYPH_CENTER: (i32, i32) = (7, 1);
const DIGIT_ADVANCE: i32 = 4;

// 3x3 cells, listed in stroke order.
const DIGIT_TWO: &[(i32, i32)] = &[
    (0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1), (0, 2), (1, 2), (2, 2),
];
const DIGIT_ZERO: &[(i32, i32)] = &[
    (0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1),
];
const DIGIT_SIX: &[(i32, i32)] = &[
    (0, 0), (1, 0), (2, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (1, 1),
];
const YEAR: [&[(i32, i32)]; 4] = [DIGIT_TWO, DIGIT_ZERO, DIGIT_TWO, DIGIT_SIX];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Heart,
    Star,
    Ring,
    Glyph,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Circle,
        ShapeKind::Heart,
        ShapeKind::Star,
        ShapeKind::Ring,
        ShapeKind::Glyph,
    ];

    pub fn random(rng: &mut impl RandomSource) -> Self {
        Self::ALL[rng.index(Self::ALL.len())]
    }
}

/// Grid cells of the "2026" glyph, each digit shifted right by four columns.
#[cfg(test)]
fn glyph_points() -> Vec<(i32, i32)> {
    YEAR.iter()
        .enumerate()
        .flat_map(|(slot, digit)| {
            let dx = slot as i32 * DIGIT_ADVANCE;
            digit.iter().map(move |&(x, y)| (x + dx, y))
        })
        .collect()
}

/// Burst particle count for the glyph shape.
pub fn glyph_particle_count() -> usize {
    YEAR.iter().map(|digit| digit.len()).sum::<usize>() * GLYPH_DENSITY
}

/// A shape with its per-explosion draws (scale, ring speed) already made.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstShape {
    pub kind: ShapeKind,
    scale: f32,
    ring_speed: f32,
}

impl BurstShape {
    pub fn roll(kind: ShapeKind, rng: &mut impl RandomSource) -> Self {
        let (scale, ring_speed) = match kind {
            ShapeKind::Heart => (rng.range_f32(0.3, 0.6), 0.0),
            ShapeKind::Star => (rng.range_f32(0.5, 1.0), 0.0),
            ShapeKind::Ring => (1.0, rng.range_f32(6.0, 8.0)),
            ShapeKind::Circle | ShapeKind::Glyph => (1.0, 0.0),
        };
        Self { kind, scale, ring_speed }
    }

    /// How many burst particles this explosion throws.
    pub fn particle_count(&self, rng: &mut impl RandomSource) -> usize {
        match self.kind {
            ShapeKind::Glyph => glyph_particle_count(),
            _ => rng.range_i32(MIN_BURST, MAX_BURST) as usize,
        }
    }

    /// Velocity for particle `index` of `total`, before jitter.
    pub fn base_velocity(&self, index: usize, total: usize, rng: &mut impl RandomSource) -> (f32, f32) {
        let t = index as f32 / total.max(1) as f32 * TAU;
        match self.kind {
            ShapeKind::Circle => {
                let angle = rng.range_f32(0.0, TAU);
                let speed = rng.range_f32(2.0, 10.0);
                (angle.cos() * speed, angle.sin() * speed)
            }
            ShapeKind::Heart => {
                let vx = 16.0 * t.sin().powi(3);
                let vy = -(13.0 * t.cos()
                    - 5.0 * (2.0 * t).cos()
                    - 2.0 * (3.0 * t).cos()
                    - (4.0 * t).cos());
                (vx * self.scale, vy * self.scale)
            }
            ShapeKind::Star => {
                let r = 5.0 + 5.0 * (5.0 * t).cos();
                (r * t.cos() * self.scale, r * t.sin() * self.scale)
            }
            ShapeKind::Ring => (self.ring_speed * t.cos(), self.ring_speed * t.sin()),
            ShapeKind::Glyph => {
                let (gx, gy) = glyph_cell(index / GLYPH_DENSITY);
                glyph_velocity(gx, gy)
            }
        }
    }

    /// All burst velocities for one explosion, jitter included.
    pub fn velocities(&self, total: usize, rng: &mut impl RandomSource) -> Vec<(f32, f32)> {
        (0..total)
            .map(|i| {
                let (vx, vy) = self.base_velocity(i, total, rng);
                (
                    vx + rng.range_f32(-JITTER, JITTER),
                    vy + rng.range_f32(-JITTER, JITTER),
                )
            })
            .collect()
    }
}

fn glyph_cell(n: usize) -> (i32, i32) {
    let cells = glyph_particle_count() / GLYPH_DENSITY;
    let mut n = n % cells;
    for (slot, digit) in YEAR.iter().enumerate() {
        if n < digit.len() {
            let (x, y) = digit[n];
            return (x + slot as i32 * DIGIT_ADVANCE, y);
        }
        n -= digit.len();
    }
    GLYPH_CENTER
}

fn glyph_velocity(gx: i32, gy: i32) -> (f32, f32) {
    (
        (gx - GLYPH_CENTER.0) as f32 * GLYPH_SPREAD,
        (gy - GLYPH_CENTER.1) as f32 * GLYPH_SPREAD,
    )
}
