use serde::{Deserialize, Serialize};

use crate::EnumSchema;
use crate::size_mode::Extent;

/// Filtering used when a texture is displayed larger than it is.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumSchema,
)]
pub enum MagFilter {
    /// Point filtering with sharp edges.
    Nearest,
    /// Linear interpolation.
    #[default]
    Linear,
}

/// Filtering used when a texture is displayed smaller than it is.
///
/// The mipmap variants pair a sampling mode within one mip level with the
/// transition between levels. See [`MinFilter::base_filter`] and
/// [`MinFilter::mipmap_filter`] for the two halves.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumSchema,
)]
pub enum MinFilter {
    /// Point filtering with sharp edges.
    Nearest,
    /// Linear interpolation.
    Linear,
    /// Point filtering with sharp edges. Mipmaps are used, but switch from
    /// one to the next instantly.
    NearestMipmapNearest,
    /// Linear interpolation. Mipmaps are used, but switch from one to the
    /// next instantly.
    LinearMipmapNearest,
    /// Point filtering with sharp edges. Mipmaps are used and blend smoothly
    /// from one to the next.
    NearestMipmapLinear,
    /// Linear interpolation. Mipmaps are used and blend smoothly from one to
    /// the next.
    #[default]
    LinearMipmapLinear,
}

impl MinFilter {
    pub fn uses_mipmaps(self) -> bool {
        self.mipmap_filter().is_some()
    }

    /// Sampling within a single mip level.
    pub fn base_filter(self) -> MagFilter {
        match self {
            MinFilter::Nearest
            | MinFilter::NearestMipmapNearest
            | MinFilter::NearestMipmapLinear => MagFilter::Nearest,
            MinFilter::Linear
            | MinFilter::LinearMipmapNearest
            | MinFilter::LinearMipmapLinear => MagFilter::Linear,
        }
    }

    /// Transition between mip levels, `None` when mipmaps are unused.
    pub fn mipmap_filter(self) -> Option<MagFilter> {
        match self {
            MinFilter::Nearest | MinFilter::Linear => None,
            MinFilter::NearestMipmapNearest | MinFilter::LinearMipmapNearest => {
                Some(MagFilter::Nearest)
            }
            MinFilter::NearestMipmapLinear | MinFilter::LinearMipmapLinear => {
                Some(MagFilter::Linear)
            }
        }
    }

    pub fn from_parts(base: MagFilter, mipmap: Option<MagFilter>) -> Self {
        match (base, mipmap) {
            (MagFilter::Nearest, None) => MinFilter::Nearest,
            (MagFilter::Linear, None) => MinFilter::Linear,
            (MagFilter::Nearest, Some(MagFilter::Nearest)) => MinFilter::NearestMipmapNearest,
            (MagFilter::Linear, Some(MagFilter::Nearest)) => MinFilter::LinearMipmapNearest,
            (MagFilter::Nearest, Some(MagFilter::Linear)) => MinFilter::NearestMipmapLinear,
            (MagFilter::Linear, Some(MagFilter::Linear)) => MinFilter::LinearMipmapLinear,
        }
    }
}

impl From<MagFilter> for wgpu::FilterMode {
    fn from(filter: MagFilter) -> Self {
        match filter {
            MagFilter::Nearest => wgpu::FilterMode::Nearest,
            MagFilter::Linear => wgpu::FilterMode::Linear,
        }
    }
}

/// Number of levels in a full mip chain down to 1x1.
pub fn mip_level_count(extent: Extent) -> u32 {
    let largest = extent.width.max(extent.height).max(1);
    u32::BITS - largest.leading_zeros()
}
