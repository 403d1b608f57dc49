use serde::{Deserialize, Serialize};

use crate::EnumSchema;
use crate::consts::BC_BLOCK_SIZE;
use crate::size_mode::Extent;

/// Defines the format used to store a texture's pixel data.
///
/// Each tag is one channel layout combined with one storage class; see
/// [`PixelFormat::new`], [`PixelFormat::layout`] and [`PixelFormat::storage`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumSchema,
)]
pub enum PixelFormat {
    Single,
    Dual,
    Rgb,
    #[default]
    Rgba,

    FloatSingle,
    FloatDual,
    FloatRgb,
    FloatRgba,

    CompressedSingle,
    CompressedDual,
    CompressedRgb,
    CompressedRgba,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumSchema,
)]
pub enum ChannelLayout {
    Single,
    Dual,
    Rgb,
    #[default]
    Rgba,
}

impl ChannelLayout {
    pub fn channels(self) -> u8 {
        match self {
            ChannelLayout::Single => 1,
            ChannelLayout::Dual => 2,
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }
}

/// Numeric representation of each channel.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumSchema,
)]
pub enum StorageClass {
    /// 8 bit normalized fixed point.
    #[default]
    Integer,
    /// 32 bit float.
    Float,
    /// GPU block compression.
    Compressed,
}

impl PixelFormat {
    pub fn new(layout: ChannelLayout, storage: StorageClass) -> Self {
        use ChannelLayout as L;
        use StorageClass as S;
        match (storage, layout) {
            (S::Integer, L::Single) => PixelFormat::Single,
            (S::Integer, L::Dual) => PixelFormat::Dual,
            (S::Integer, L::Rgb) => PixelFormat::Rgb,
            (S::Integer, L::Rgba) => PixelFormat::Rgba,
            (S::Float, L::Single) => PixelFormat::FloatSingle,
            (S::Float, L::Dual) => PixelFormat::FloatDual,
            (S::Float, L::Rgb) => PixelFormat::FloatRgb,
            (S::Float, L::Rgba) => PixelFormat::FloatRgba,
            (S::Compressed, L::Single) => PixelFormat::CompressedSingle,
            (S::Compressed, L::Dual) => PixelFormat::CompressedDual,
            (S::Compressed, L::Rgb) => PixelFormat::CompressedRgb,
            (S::Compressed, L::Rgba) => PixelFormat::CompressedRgba,
        }
    }

    pub fn layout(self) -> ChannelLayout {
        match self {
            PixelFormat::Single | PixelFormat::FloatSingle | PixelFormat::CompressedSingle => {
                ChannelLayout::Single
            }
            PixelFormat::Dual | PixelFormat::FloatDual | PixelFormat::CompressedDual => {
                ChannelLayout::Dual
            }
            PixelFormat::Rgb | PixelFormat::FloatRgb | PixelFormat::CompressedRgb => {
                ChannelLayout::Rgb
            }
            PixelFormat::Rgba | PixelFormat::FloatRgba | PixelFormat::CompressedRgba => {
                ChannelLayout::Rgba
            }
        }
    }

    pub fn storage(self) -> StorageClass {
        match self {
            PixelFormat::Single | PixelFormat::Dual | PixelFormat::Rgb | PixelFormat::Rgba => {
                StorageClass::Integer
            }
            PixelFormat::FloatSingle
            | PixelFormat::FloatDual
            | PixelFormat::FloatRgb
            | PixelFormat::FloatRgba => StorageClass::Float,
            PixelFormat::CompressedSingle
            | PixelFormat::CompressedDual
            | PixelFormat::CompressedRgb
            | PixelFormat::CompressedRgba => StorageClass::Compressed,
        }
    }

    pub fn channels(self) -> u8 {
        self.layout().channels()
    }

    pub fn is_float(self) -> bool {
        self.storage() == StorageClass::Float
    }

    pub fn is_compressed(self) -> bool {
        self.storage() == StorageClass::Compressed
    }

    /// The format textures of this kind are allocated with.
    pub fn wgpu_format(self) -> wgpu::TextureFormat {
        match self {
            PixelFormat::Single => wgpu::TextureFormat::R8Unorm,
            PixelFormat::Dual => wgpu::TextureFormat::Rg8Unorm,
            PixelFormat::Rgb | PixelFormat::Rgba => wgpu::TextureFormat::Rgba8Unorm,
            PixelFormat::FloatSingle => wgpu::TextureFormat::R32Float,
            PixelFormat::FloatDual => wgpu::TextureFormat::Rg32Float,
            PixelFormat::FloatRgb | PixelFormat::FloatRgba => wgpu::TextureFormat::Rgba32Float,
            PixelFormat::CompressedSingle => wgpu::TextureFormat::Bc4RUnorm,
            PixelFormat::CompressedDual => wgpu::TextureFormat::Bc5RgUnorm,
            PixelFormat::CompressedRgb => wgpu::TextureFormat::Bc1RgbaUnorm,
            PixelFormat::CompressedRgba => wgpu::TextureFormat::Bc3RgbaUnorm,
        }
    }

    /// True when the GPU format stores more channels than the layout has.
    /// Upload data must then carry the padding channel as well.
    pub fn is_widened(self) -> bool {
        matches!(self, PixelFormat::Rgb | PixelFormat::FloatRgb)
    }

    /// Texels covered by one addressable unit of upload data.
    pub fn block_size(self) -> (u32, u32) {
        if self.is_compressed() {
            (BC_BLOCK_SIZE, BC_BLOCK_SIZE)
        } else {
            (1, 1)
        }
    }

    /// True when `extent` covers a whole number of blocks.
    pub fn is_aligned(self, extent: Extent) -> bool {
        let (block_width, block_height) = self.block_size();
        extent.width % block_width == 0 && extent.height % block_height == 0
    }

    /// Bytes per texel, or per 4x4 block for compressed formats.
    pub fn bytes_per_block(self) -> u32 {
        match self {
            PixelFormat::Single => 1,
            PixelFormat::Dual => 2,
            PixelFormat::Rgb | PixelFormat::Rgba => 4,
            PixelFormat::FloatSingle => 4,
            PixelFormat::FloatDual => 8,
            PixelFormat::FloatRgb | PixelFormat::FloatRgba => 16,
            PixelFormat::CompressedSingle | PixelFormat::CompressedRgb => 8,
            PixelFormat::CompressedDual | PixelFormat::CompressedRgba => 16,
        }
    }

    /// Row pitch of tightly packed upload data for a row of `width` texels.
    pub fn bytes_per_row(self, width: u32) -> u32 {
        let (block_width, _) = self.block_size();
        width.div_ceil(block_width) * self.bytes_per_block()
    }

    /// Number of block rows covering `height` texels.
    pub fn rows_per_image(self, height: u32) -> u32 {
        let (_, block_height) = self.block_size();
        height.div_ceil(block_height)
    }

    pub fn required_features(self) -> wgpu::Features {
        if self.is_compressed() {
            wgpu::Features::TEXTURE_COMPRESSION_BC
        } else {
            wgpu::Features::empty()
        }
    }

    pub fn is_supported_by(self, features: wgpu::Features) -> bool {
        features.contains(self.required_features())
    }
}
