use crate::rng::RandomSource;

pub const SHAKE_ON_EXPLOSION: i32 = 15;
pub const FLASH_ON_EXPLOSION: i32 = 100;
const SHAKE_DECAY: i32 = 1;
const FLASH_DECAY: i32 = 5;

/// Screen shake and white flash left behind by explosions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenFx {
    pub shake: i32,
    pub flash: i32,
}

impl ScreenFx {
    pub fn trigger(&mut self) {
        self.shake = SHAKE_ON_EXPLOSION;
        self.flash = FLASH_ON_EXPLOSION;
    }

    pub fn decay(&mut self) {
        self.shake = (self.shake - SHAKE_DECAY).max(0);
        self.flash = (self.flash - FLASH_DECAY).max(0);
    }

    /// Whole-scene offset for this frame, uniform in `[-shake, shake]` per axis.
    pub fn shake_offset(&self, rng: &mut impl RandomSource) -> (i32, i32) {
        if self.shake <= 0 {
            return (0, 0);
        }
        (
            rng.range_i32(-self.shake, self.shake),
            rng.range_i32(-self.shake, self.shake),
        )
    }

    pub fn flash_alpha(&self) -> u8 {
        self.flash.clamp(0, 255) as u8
    }
}
