//! Rendering-engine surface used during object setup.
//!
//! The resolver only talks to the renderer through these traits: it creates
//! a material, loads geometry and textures, then writes named channels.

pub mod memory;

use std::path::Path;

use glam::Vec3;
use serde::Serialize;

use crate::error::Result;
use crate::types::IndexedMesh;

pub use memory::{ChannelValue, MemoryContext, MemoryMaterial};

/// Material channel names understood by the shading programs.
pub mod channel {
    pub const IS_EMISSIVE: &str = "is_emissive";
    pub const K_EMISSION: &str = "k_emission";
    pub const EMISSION_INTENSITY: &str = "emission_intensity";
    pub const K_AMBIENT: &str = "k_ambient";
    pub const K_DIFFUSE: &str = "k_diffuse";
    pub const K_SPECULAR: &str = "k_specular";
    pub const K_REFLECTIVE: &str = "k_reflective";
    pub const ALPHA: &str = "alpha";
    pub const SUBSURF_SCATTER_COLOR: &str = "subsurf_scatter_color";
    pub const SUBSURF_ATT: &str = "subsurf_att";
    pub const GLOSSINESS: &str = "glossiness";
    pub const ANISOTROPIC: &str = "anisotropic";
    pub const IMPORTANCE_CUTOFF: &str = "importance_cutoff";
    pub const CUTOFF_COLOR: &str = "cutoff_color";
    pub const REFLECTION_MAXDEPTH: &str = "reflection_maxdepth";
    pub const KD_MAP: &str = "kd_map";
    pub const KS_MAP: &str = "ks_map";
    pub const NORMAL_MAP: &str = "normal_map";
    pub const HAS_DIFFUSE_MAP: &str = "has_diffuse_map";
    pub const HAS_SPECULAR_MAP: &str = "has_specular_map";
    pub const HAS_NORMAL_MAP: &str = "has_normal_map";
}

/// Fixed shading constants, identical for every material.
pub const IMPORTANCE_CUTOFF: f32 = 0.01;
pub const CUTOFF_COLOR: Vec3 = Vec3::splat(0.2);
pub const REFLECTION_MAXDEPTH: i32 = 5;

/// Handle to a texture bound to a material channel.
///
/// A flat sampler (no image) has an empty `id`; that is the only
/// representation of "no texture".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextureSampler {
    pub id: String,
    pub width: u32,
    pub height: u32,
    /// Color returned where no image data exists.
    pub fallback: Vec3,
}

impl TextureSampler {
    pub fn flat(color: Vec3) -> Self {
        Self {
            id: String::new(),
            width: 1,
            height: 1,
            fallback: color,
        }
    }

    pub fn is_flat(&self) -> bool {
        self.id.is_empty()
    }
}

/// Write surface of a renderer material.
pub trait MaterialInstance {
    fn set_float(&mut self, channel: &str, value: f32);
    fn set_float3(&mut self, channel: &str, value: Vec3);
    fn set_int(&mut self, channel: &str, value: i32);
    fn set_texture_sampler(&mut self, channel: &str, sampler: TextureSampler);
}

/// The renderer's shared context: owns devices, materials and textures.
pub trait RenderContext {
    type Material: MaterialInstance;

    /// Create a fresh material bound to the scene's hit programs.
    fn create_material(&mut self) -> Result<Self::Material>;

    /// Load renderable geometry for a mesh file.
    fn load_geometry(&mut self, path: &Path) -> Result<IndexedMesh>;

    /// Load `dir/name` as a sampler; an empty `name`, or a file that cannot
    /// be read, gives a flat sampler of `fallback`.
    fn load_texture(&mut self, dir: &Path, name: &str, fallback: Vec3) -> Result<TextureSampler>;
}
