use thiserror::Error;

use crate::size_mode::Extent;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown {kind} variant: {name}")]
    UnknownVariant { kind: &'static str, name: String },

    #[error("No {kind} variant has discriminant {value}")]
    InvalidDiscriminant { kind: &'static str, value: i32 },

    #[error("Texture extent {0} has a zero dimension")]
    EmptyExtent(Extent),

    #[error("Texture extent {0} cannot be rounded up to a power of two")]
    ExtentTooLarge(Extent),

    #[error("Image is {found} but the size plan expects {expected}")]
    ExtentMismatch { expected: Extent, found: Extent },

    #[error("Texture extent {extent} is not a whole number of {format} blocks")]
    UnalignedExtent {
        format: crate::PixelFormat,
        extent: Extent,
    },

    #[error("Pixel format {0} requires device features {1:?}")]
    UnsupportedFormat(crate::PixelFormat, wgpu::Features),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
