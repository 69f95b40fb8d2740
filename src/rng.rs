//! Random source used by every spawn, shape and jitter draw.
//!
//! The show normally runs on a [`fastrand::Rng`]; tests hand in a
//! [`SequenceRng`] so that every draw is known in advance.

pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// Uniform integer in `lo..=hi`. `hi < lo` collapses to `lo`.
    fn range_i32(&mut self, lo: i32, hi: i32) -> i32;

    /// Uniform value in `[lo, hi)`.
    fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }

    /// Uniform index in `0..n`. `n` must be non-zero.
    fn index(&mut self, n: usize) -> usize {
        ((self.next_f32() * n as f32) as usize).min(n - 1)
    }

    fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }
}

impl RandomSource for fastrand::Rng {
    fn next_f32(&mut self) -> f32 {
        self.f32()
    }

    fn range_i32(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.i32(lo..=hi)
    }

    fn index(&mut self, n: usize) -> usize {
        self.usize(0..n)
    }
}

/// Replays a fixed list of unit values, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let mut values: Vec<f32> = values.into();
        if values.is_empty() {
            values.push(0.0);
        }
        for v in &mut values {
            *v = v.clamp(0.0, 0.999_999);
        }
        Self { values, cursor: 0 }
    }

    /// A source that always returns the same value.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRng {
    fn next_f32(&mut self) -> f32 {
        let v = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        v
    }

    fn range_i32(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo + 1) as f32;
        lo + ((self.next_f32() * span) as i32).min(hi - lo)
    }
}
