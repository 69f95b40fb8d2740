//! The show's state machine: a short countdown, then an endless
//! celebration of fireworks and confetti.
//!
//! [`Scene::tick`] advances the whole world by one frame and reports what
//! happened as data; it never draws or plays anything itself.

use tracing::{debug, info};

use super::confetti::Confetti;
use super::firework::{Explosion, Firework};
use super::fx::ScreenFx;
use super::title::TitleFx;
use crate::rng::RandomSource;

pub const COUNTDOWN_START: u32 = 55;
pub const COUNTDOWN_END: u32 = 60;
pub const CONFETTI_POOL: usize = 150;
pub const LAUNCH_CHANCE: f32 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Countdown,
    Celebration,
}

#[derive(Debug, Default)]
pub struct TickReport {
    pub explosions: Vec<Explosion>,
    pub celebration_started: bool,
}

pub struct Scene {
    width: f32,
    height: f32,
    start: f64,
    phase: Phase,
    second: u32,
    fireworks: Vec<Firework>,
    confetti: Vec<Confetti>,
    fx: ScreenFx,
    title: TitleFx,
    ticks: u64,
}

impl Scene {
    pub fn new(width: f32, height: f32, start: f64) -> Self {
        Self {
            width,
            height,
            start,
            phase: Phase::Countdown,
            second: COUNTDOWN_START,
            fireworks: Vec::new(),
            confetti: Vec::new(),
            fx: ScreenFx::default(),
            title: TitleFx::default(),
            ticks: 0,
        }
    }

    pub fn tick(&mut self, now: f64, rng: &mut impl RandomSource) -> TickReport {
        let mut report = TickReport::default();
        self.ticks += 1;
        // Decay first so an explosion this tick is drawn at full strength.
        self.fx.decay();

        if self.phase == Phase::Countdown {
            let elapsed = (now - self.start).max(0.0).floor() as u32;
            self.second = COUNTDOWN_START.saturating_add(elapsed);
            if self.second >= COUNTDOWN_END {
                self.begin_celebration(rng);
                report.celebration_started = true;
            }
        }

        if self.phase == Phase::Celebration {
            for c in &mut self.confetti {
                c.update(rng);
            }

            if rng.chance(LAUNCH_CHANCE) {
                self.fireworks.push(Firework::launch(self.width, self.height, rng));
            }

            for fw in &mut self.fireworks {
                if let Some(boom) = fw.update(rng) {
                    debug!(shape = ?boom.shape, particles = boom.particles, "explosion");
                    report.explosions.push(boom);
                }
            }
            self.fireworks.retain(|fw| !fw.is_dead());

            if !report.explosions.is_empty() {
                self.fx.trigger();
            }
            self.title = TitleFx::at(now);
        }

        report
    }

    fn begin_celebration(&mut self, rng: &mut impl RandomSource) {
        self.phase = Phase::Celebration;
        self.second = COUNTDOWN_END;
        self.confetti = (0..CONFETTI_POOL)
            .map(|_| Confetti::new(self.width, self.height, rng))
            .collect();
        info!(tick = self.ticks, confetti = self.confetti.len(), "countdown finished, celebration started");
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Second shown on the countdown clock, 55 through 59.
    pub fn countdown_second(&self) -> u32 {
        self.second
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn fireworks(&self) -> &[Firework] {
        &self.fireworks
    }

    pub fn confetti(&self) -> &[Confetti] {
        &self.confetti
    }

    pub fn fx(&self) -> ScreenFx {
        self.fx
    }

    pub fn fx_mut(&mut self) -> &mut ScreenFx {
        &mut self.fx
    }

    pub fn title(&self) -> TitleFx {
        self.title
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
