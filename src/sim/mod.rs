pub mod confetti;
pub mod firework;
pub mod fx;
pub mod particle;
pub mod physics;
pub mod scene;
pub mod shape;
pub mod title;

pub use confetti::Confetti;
pub use firework::{Explosion, Firework, FireworkState};
pub use fx::ScreenFx;
pub use particle::Particle;
pub use physics::Body;
pub use scene::{Phase, Scene, TickReport};
pub use shape::{BurstShape, ShapeKind};
pub use title::TitleFx;
