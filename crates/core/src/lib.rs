//! Image to memory-image codec.
//!
//! Converts raster pictures into the word-oriented memory image an
//! external device (an FPGA board's SDRAM in the original setup)
//! expects to find at address zero: the picture is letterboxed onto a
//! fixed-size canvas, flattened into RGB bytes and packed into 32-bit
//! little-endian words, which are then written either as raw bytes or
//! as an `address: data` hex listing for simulation.

pub use errors::{Error, Result};
pub use normalize::{letterbox, CanvasSize};
pub use pack::{pack_image, pack_words};

pub mod batch;
pub mod emit;
pub mod errors;
pub mod normalize;
pub mod pack;

/// Number of bytes in a single memory word.
pub const WORD_BYTES: usize = 4;
