use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::Serialize;
use tracing::{debug, warn};

use crate::engine::{MaterialInstance, RenderContext, TextureSampler};
use crate::error::Result;
use crate::ingestion::{mesh_loader, texture_loader};
use crate::types::IndexedMesh;

/// A value written to a material channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChannelValue {
    Float(f32),
    Float3(Vec3),
    Int(i32),
    Texture(TextureSampler),
}

/// Material that records every channel write.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemoryMaterial {
    #[serde(flatten)]
    pub channels: BTreeMap<String, ChannelValue>,
}

impl MemoryMaterial {
    pub fn get(&self, channel: &str) -> Option<&ChannelValue> {
        self.channels.get(channel)
    }

    pub fn float(&self, channel: &str) -> Option<f32> {
        match self.get(channel)? {
            ChannelValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn float3(&self, channel: &str) -> Option<Vec3> {
        match self.get(channel)? {
            ChannelValue::Float3(v) => Some(*v),
            _ => None,
        }
    }

    pub fn int(&self, channel: &str) -> Option<i32> {
        match self.get(channel)? {
            ChannelValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn texture(&self, channel: &str) -> Option<&TextureSampler> {
        match self.get(channel)? {
            ChannelValue::Texture(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl MaterialInstance for MemoryMaterial {
    fn set_float(&mut self, channel: &str, value: f32) {
        self.channels.insert(channel.to_string(), ChannelValue::Float(value));
    }

    fn set_float3(&mut self, channel: &str, value: Vec3) {
        self.channels.insert(channel.to_string(), ChannelValue::Float3(value));
    }

    fn set_int(&mut self, channel: &str, value: i32) {
        self.channels.insert(channel.to_string(), ChannelValue::Int(value));
    }

    fn set_texture_sampler(&mut self, channel: &str, sampler: TextureSampler) {
        self.channels.insert(channel.to_string(), ChannelValue::Texture(sampler));
    }
}

/// In-process render context backed by the OBJ and image loaders.
///
/// Textures are decoded once per path and shared between materials. A
/// texture that cannot be read or decoded degrades to a flat sampler of the
/// fallback color.
#[derive(Debug, Default)]
pub struct MemoryContext {
    textures: HashMap<PathBuf, TextureSampler>,
    materials_created: usize,
}

impl MemoryContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn materials_created(&self) -> usize {
        self.materials_created
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

impl RenderContext for MemoryContext {
    type Material = MemoryMaterial;

    fn create_material(&mut self) -> Result<MemoryMaterial> {
        self.materials_created += 1;
        Ok(MemoryMaterial::default())
    }

    fn load_geometry(&mut self, path: &Path) -> Result<IndexedMesh> {
        mesh_loader::load_mesh(path)
    }

    fn load_texture(&mut self, dir: &Path, name: &str, fallback: Vec3) -> Result<TextureSampler> {
        if name.is_empty() {
            return Ok(TextureSampler::flat(fallback));
        }

        let path = dir.join(name);
        if let Some(cached) = self.textures.get(&path) {
            debug!(path = %path.display(), "Texture cache hit");
            return Ok(TextureSampler {
                fallback,
                ..cached.clone()
            });
        }

        let data = match texture_loader::load_texture(&path) {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %path.display(), "Texture unavailable, using flat color: {e}");
                return Ok(TextureSampler::flat(fallback));
            }
        };
        let sampler = TextureSampler {
            id: path.display().to_string(),
            width: data.width,
            height: data.height,
            fallback,
        };
        self.textures.insert(path, sampler.clone());
        Ok(sampler)
    }
}
