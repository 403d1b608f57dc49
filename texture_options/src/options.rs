use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{LOD_MAX_CLAMP, MAX_ANISOTROPY};
use crate::error::{Error, Result};
use crate::filter::{MagFilter, MinFilter, mip_level_count};
use crate::pixel_format::PixelFormat;
use crate::size_mode::{Extent, SizeMode, SizePlan};
use crate::wrap::WrapMode;

/// One choice from every texture option, as handed to a texture manager at
/// creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextureOptions {
    pub size_mode: SizeMode,
    pub mag_filter: MagFilter,
    pub min_filter: MinFilter,
    pub wrap_x: WrapMode,
    pub wrap_y: WrapMode,
    pub format: PixelFormat,
    pub anisotropic: bool,
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            size_mode: SizeMode::DEFAULT,
            mag_filter: MagFilter::default(),
            min_filter: MinFilter::default(),
            wrap_x: WrapMode::default(),
            wrap_y: WrapMode::default(),
            format: PixelFormat::default(),
            anisotropic: true,
        }
    }
}

impl TextureOptions {
    /// Sets both wrap axes at once.
    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap_x = wrap;
        self.wrap_y = wrap;
        self
    }

    pub fn plan(&self, content: Extent, npot_supported: bool) -> Result<SizePlan> {
        self.size_mode.plan(content, npot_supported)
    }

    /// True when anisotropic filtering survives validation: every filter
    /// stage has to be linear for the hardware to accept it.
    pub fn anisotropy_applies(&self) -> bool {
        self.anisotropic
            && self.mag_filter == MagFilter::Linear
            && self.min_filter == MinFilter::LinearMipmapLinear
    }

    pub fn sampler_descriptor<'a>(&self, label: Option<&'a str>) -> wgpu::SamplerDescriptor<'a> {
        let anisotropy_clamp = if self.anisotropy_applies() {
            MAX_ANISOTROPY
        } else {
            if self.anisotropic {
                log::debug!(
                    "dropping anisotropic filtering for {}/{} filters",
                    self.mag_filter,
                    self.min_filter
                );
            }
            1
        };

        let mipmap_filter = self
            .min_filter
            .mipmap_filter()
            .unwrap_or(MagFilter::Nearest);

        let lod_max_clamp = if self.min_filter.uses_mipmaps() {
            LOD_MAX_CLAMP
        } else {
            0.0
        };

        wgpu::SamplerDescriptor {
            label,
            address_mode_u: self.wrap_x.into(),
            address_mode_v: self.wrap_y.into(),
            address_mode_w: self.wrap_x.into(),
            mag_filter: self.mag_filter.into(),
            min_filter: self.min_filter.base_filter().into(),
            mipmap_filter: mipmap_filter.into(),
            lod_min_clamp: 0.0,
            lod_max_clamp,
            compare: None,
            anisotropy_clamp,
            border_color: None,
        }
    }

    /// Describes the texture a planned image is uploaded into. Block
    /// compressed formats need a canvas made of whole blocks.
    pub fn texture_descriptor<'a>(
        &self,
        label: Option<&'a str>,
        plan: &SizePlan,
    ) -> Result<wgpu::TextureDescriptor<'a>> {
        let canvas = plan.canvas();
        if !self.format.is_aligned(canvas) {
            return Err(Error::UnalignedExtent {
                format: self.format,
                extent: canvas,
            });
        }

        if self.format.is_widened() {
            log::debug!("{} data is stored with an extra channel", self.format);
        }

        let mip_level_count = if self.min_filter.uses_mipmaps() {
            mip_level_count(canvas)
        } else {
            1
        };

        Ok(wgpu::TextureDescriptor {
            label,
            size: wgpu::Extent3d {
                width: canvas.width,
                height: canvas.height,
                depth_or_array_layers: 1,
            },
            mip_level_count,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.format.wgpu_format(),
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        })
    }

    pub fn create_sampler(&self, device: &wgpu::Device, label: Option<&str>) -> wgpu::Sampler {
        device.create_sampler(&self.sampler_descriptor(label))
    }

    /// Check the options against the features a device was created with.
    pub fn validate(&self, features: wgpu::Features) -> Result<()> {
        if !self.format.is_supported_by(features) {
            return Err(Error::UnsupportedFormat(
                self.format,
                self.format.required_features().difference(features),
            ));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Deserialization(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
