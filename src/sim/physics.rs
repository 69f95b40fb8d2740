/// Position and velocity of a point mass, in world pixels and pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Body {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self { x, y, vx, vy }
    }

    /// Advances one tick: drag first, then gravity, then integrate position.
    pub fn step(&mut self, gravity: f32, friction: f32) {
        self.vx *= friction;
        self.vy = self.vy * friction + gravity;
        self.x += self.vx;
        self.y += self.vy;
    }
}
