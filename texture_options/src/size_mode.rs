use std::fmt;

use derive_more::From;
use image::{GenericImage, RgbaImage, imageops};
use serde::{Deserialize, Serialize};

use crate::EnumSchema;
use crate::error::{Error, Result};

/// Defines how a texture handles pixel data without power-of-two dimensions.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumSchema,
)]
pub enum SizeMode {
    /// Enlarges the image canvas to the next power of two without scaling,
    /// leaving the new space empty. Texture coordinates are adjusted so only
    /// the original region is displayed. Keeps full quality but prevents
    /// tiling unless the image already was power-of-two.
    #[default]
    #[serde(alias = "Default")]
    #[schema(alias = "Default")]
    Enlarge,
    /// Stretches the image to power-of-two dimensions and scales it back down
    /// when displayed. Might blur slightly, but allows tiling.
    Stretch,
    /// Dimensions are left untouched and an actual non-power-of-two texture
    /// is used. Might be unsupported on older hardware.
    NonPowerOfTwo,
}

impl SizeMode {
    /// The default behaviour. Equals [`SizeMode::Enlarge`].
    pub const DEFAULT: SizeMode = SizeMode::Enlarge;

    /// Work out the canvas a texture of `content` size occupies under this
    /// mode. `npot_supported` reports whether the device can sample
    /// non-power-of-two textures with every wrap and mipmap mode; without it
    /// [`SizeMode::NonPowerOfTwo`] degrades to [`SizeMode::Enlarge`].
    pub fn plan(self, content: Extent, npot_supported: bool) -> Result<SizePlan> {
        if content.width == 0 || content.height == 0 {
            return Err(Error::EmptyExtent(content));
        }

        let mode = match self {
            SizeMode::NonPowerOfTwo if !npot_supported => {
                log::warn!(
                    "non-power-of-two textures unsupported, enlarging {content} instead"
                );
                SizeMode::Enlarge
            }
            other => other,
        };

        let canvas = match mode {
            SizeMode::NonPowerOfTwo => content,
            SizeMode::Enlarge | SizeMode::Stretch => Extent {
                width: next_power_of_two(content.width).ok_or(Error::ExtentTooLarge(content))?,
                height: next_power_of_two(content.height)
                    .ok_or(Error::ExtentTooLarge(content))?,
            },
        };

        let uv_ratio = match mode {
            SizeMode::Enlarge => [
                content.width as f32 / canvas.width as f32,
                content.height as f32 / canvas.height as f32,
            ],
            SizeMode::Stretch | SizeMode::NonPowerOfTwo => [1.0, 1.0],
        };

        log::debug!("{mode} plan: {content} on {canvas} canvas, uv ratio {uv_ratio:?}");

        Ok(SizePlan {
            mode,
            content,
            canvas,
            uv_ratio,
        })
    }
}

/// Width and height of an image or texture in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, From)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_power_of_two(&self) -> bool {
        is_power_of_two(self.width) && is_power_of_two(self.height)
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The outcome of [`SizeMode::plan`]. Only obtainable from a plan, so the
/// canvas always holds the content the way its mode dictates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizePlan {
    mode: SizeMode,
    content: Extent,
    canvas: Extent,
    uv_ratio: [f32; 2],
}

impl SizePlan {
    /// The mode actually applied, after any fallback.
    pub fn mode(&self) -> SizeMode {
        self.mode
    }

    /// Size of the source image.
    pub fn content(&self) -> Extent {
        self.content
    }

    /// Size of the texture to allocate.
    pub fn canvas(&self) -> Extent {
        self.canvas
    }

    /// Largest texture coordinate per axis that still lands on content.
    pub fn uv_ratio(&self) -> [f32; 2] {
        self.uv_ratio
    }

    /// True when the pixels have to be rescaled to fit the canvas.
    pub fn needs_resample(&self) -> bool {
        self.mode == SizeMode::Stretch && self.canvas != self.content
    }

    /// True when the canvas carries empty space around the content.
    pub fn is_padded(&self) -> bool {
        self.mode == SizeMode::Enlarge && self.canvas != self.content
    }

    /// Produce canvas pixels from content pixels. Padding is transparent and
    /// the content is anchored at the top left corner.
    pub fn apply(&self, image: &RgbaImage) -> Result<RgbaImage> {
        let found = Extent::from(image.dimensions());
        if found != self.content {
            return Err(Error::ExtentMismatch {
                expected: self.content,
                found,
            });
        }

        if self.needs_resample() {
            return Ok(imageops::resize(
                image,
                self.canvas.width,
                self.canvas.height,
                imageops::FilterType::Triangle,
            ));
        }

        if self.is_padded() {
            let mut canvas = RgbaImage::new(self.canvas.width, self.canvas.height);
            canvas.copy_from(image, 0, 0)?;
            return Ok(canvas);
        }

        Ok(image.clone())
    }
}

pub fn is_power_of_two(value: u32) -> bool {
    value.is_power_of_two()
}

/// Smallest power of two not below `value`, or `None` past 2^31.
pub fn next_power_of_two(value: u32) -> Option<u32> {
    value.checked_next_power_of_two()
}
