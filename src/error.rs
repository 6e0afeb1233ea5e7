//! Errors

use thiserror::Error;

/// Result type for fallible operations, i.e. reading and writing images
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that occur at the file boundary
///
/// Drawing itself never fails; pixels outside the framebuffer or the clip
/// rectangle are dropped.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Decoding or encoding an image failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
