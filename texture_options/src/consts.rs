/// Anisotropy clamp applied when anisotropic filtering is enabled.
pub const MAX_ANISOTROPY: u16 = 16;

/// Highest mip level a mipmapped sampler may select.
pub const LOD_MAX_CLAMP: f32 = 32.0;

/// Edge length of a block in the BC compressed formats.
pub const BC_BLOCK_SIZE: u32 = 4;
