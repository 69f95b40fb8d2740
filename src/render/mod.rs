use crate::color::Rgb;
use crate::error::Result;

pub mod present;
pub mod terminal;

pub use present::{draw_scene, Presenter};
pub use terminal::{world_size, TerminalRenderer};

/// Geometry in world pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Dot { x: f32, y: f32, radius: f32 },
    /// Square of side `size` with its top-left corner at `(x, y)`, rotated by
    /// `angle` degrees about its centre.
    Square { x: f32, y: f32, size: f32, angle: f32 },
}

/// A line of text centred on `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub content: String,
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
    pub alpha: u8,
    pub scale: f32,
}

impl TextItem {
    pub fn new(content: impl Into<String>, x: f32, y: f32, color: Rgb) -> Self {
        Self {
            content: content.into(),
            x,
            y,
            color,
            alpha: 255,
            scale: 1.0,
        }
    }

    pub fn alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// Whole-frame adjustments applied when a frame is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostFx {
    pub offset: (i32, i32),
    pub flash: u8,
}

pub trait Renderer {
    fn clear(&mut self, color: Rgb);
    fn fill(&mut self, shape: Shape, color: Rgb, alpha: u8);
    fn text(&mut self, item: &TextItem);
    fn present(&mut self, post: PostFx) -> Result<()>;
}
