use serde::{Deserialize, Serialize};

use crate::EnumSchema;

/// Defines how texture coordinates outside the regular [0, 1] range are
/// handled.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumSchema,
)]
pub enum WrapMode {
    /// Coordinates are clamped to the edge texels.
    #[default]
    Clamp,
    /// The texture tiles.
    Repeat,
    /// The texture tiles, mirrored on every other repeat.
    MirroredRepeat,
}

impl WrapMode {
    pub fn tiles(self) -> bool {
        !matches!(self, WrapMode::Clamp)
    }
}

impl From<WrapMode> for wgpu::AddressMode {
    fn from(mode: WrapMode) -> Self {
        match mode {
            WrapMode::Clamp => wgpu::AddressMode::ClampToEdge,
            WrapMode::Repeat => wgpu::AddressMode::Repeat,
            WrapMode::MirroredRepeat => wgpu::AddressMode::MirrorRepeat,
        }
    }
}
