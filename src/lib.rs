//! A New Year countdown that rolls into fireworks, confetti and a pulsing
//! title, drawn in a truecolor terminal.
//!
//! [`sim`] holds the frame-by-frame simulation and knows nothing about
//! output. [`render`], [`audio`] and [`input`] are the boundaries the binary
//! wires to the terminal.

pub mod audio;
pub mod clock;
pub mod color;
pub mod error;
pub mod frame;
pub mod input;
pub mod render;
pub mod rng;
pub mod sim;

pub use error::{Result, ShowError};
