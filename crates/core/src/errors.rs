use std::path::PathBuf;

/// A specialized result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting an image to a memory image.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file could not be decoded as an image.
    #[error("unable to decode image: {0}")]
    Decode(#[from] image::ImageError),
    /// The requested canvas size cannot be produced.
    #[error("invalid canvas size {width}x{height}: both dimensions must be nonzero")]
    InvalidCanvasSize { width: u32, height: u32 },
    /// The batch input root does not exist or is not readable.
    #[error("input path {path:?} does not exist")]
    InputNotFound { path: PathBuf },
    /// Reading the input or writing the output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
