use glam::Vec3;
use serde::Serialize;

/// Physical material state of one scene object.
///
/// Built locally (material file, then scene overrides) and committed to the
/// renderer's material instance in a single upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialParams {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub reflective: Vec3,
    pub emission: Vec3,
    /// Transparency color.
    pub alpha: Vec3,
    /// Subsurface-scatter color.
    pub subsurface: Vec3,
    pub subsurface_attenuation: f32,
    /// 0 is a perfect mirror, 1 fully blurred.
    pub glossiness: f32,
    pub anisotropic: bool,
    pub emissive: bool,
    /// Texture file names relative to the texture directory; empty means no map.
    pub diffuse_map: String,
    pub specular_map: String,
    pub normal_map: String,
    /// Light falloff coefficient.
    pub attenuation: f32,
    /// Emission multiplier, only meaningful when `emissive`.
    pub intensity: f32,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            ambient: Vec3::ZERO,
            diffuse: Vec3::ZERO,
            specular: Vec3::ZERO,
            reflective: Vec3::ZERO,
            emission: Vec3::ZERO,
            alpha: Vec3::ZERO,
            subsurface: Vec3::ZERO,
            subsurface_attenuation: 0.1,
            glossiness: 0.0,
            anisotropic: false,
            emissive: false,
            diffuse_map: String::new(),
            specular_map: String::new(),
            normal_map: String::new(),
            attenuation: 0.1,
            intensity: 1.0,
        }
    }
}

impl MaterialParams {
    pub fn has_diffuse_map(&self) -> bool {
        !self.diffuse_map.is_empty()
    }

    pub fn has_specular_map(&self) -> bool {
        !self.specular_map.is_empty()
    }

    pub fn has_normal_map(&self) -> bool {
        !self.normal_map.is_empty()
    }
}
