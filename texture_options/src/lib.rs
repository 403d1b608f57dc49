//! Texture configuration vocabulary: how non-power-of-two images are sized,
//! how textures are filtered and wrapped, and how their pixels are stored,
//! along with the mapping of those choices onto `wgpu` descriptors.

extern crate self as texture_options;

mod filter;
mod options;
mod pixel_format;
mod size_mode;
mod wrap;

pub mod consts;
pub mod error;
pub mod traits;

pub use filter::*;
pub use options::*;
pub use pixel_format::*;
pub use size_mode::*;
pub use wrap::*;

pub use texture_options_derive::EnumSchema;
pub use traits::SchemaEnum;
