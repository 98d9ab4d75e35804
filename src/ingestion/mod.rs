pub mod mesh_loader;
pub mod mtl_parser;
pub mod texture_loader;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::config::{BinderConfig, ObjectSpec};
use crate::error::{Result, SceneBinderError};

/// Scene manifest listing the objects to bind.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneManifest {
    pub scene: Option<String>,
    pub texture_dir: Option<PathBuf>,
    pub objects: Vec<ObjectSpec>,
}

/// Everything the resolver needs for one scene load.
#[derive(Debug)]
pub struct IngestionResult {
    pub scene: String,
    pub texture_dir: PathBuf,
    pub objects: Vec<ObjectSpec>,
}

/// Supported mesh formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    Obj,
}

impl MeshFormat {
    /// Detect format from file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "obj" => Ok(MeshFormat::Obj),
            _ => Err(SceneBinderError::Mesh(format!(
                "Unsupported mesh format: .{ext}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MeshFormat::Obj => "OBJ",
        }
    }
}

impl std::fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read a scene manifest from disk.
pub fn load_manifest(path: &Path) -> Result<SceneManifest> {
    if !path.exists() {
        return Err(SceneBinderError::Input(format!(
            "Manifest not found: {}",
            path.display()
        )));
    }
    let text = std::fs::read_to_string(path)?;
    let manifest: SceneManifest = serde_json::from_str(&text)?;
    debug!(path = %path.display(), objects = manifest.objects.len(), "Loaded manifest");
    Ok(manifest)
}

/// Gather the scene identifier, texture directory and object list.
///
/// CLI values take precedence over the manifest; manifest objects come after
/// objects named on the command line.
pub fn ingest(config: &BinderConfig) -> Result<IngestionResult> {
    let mut scene = config.scene.clone();
    let mut texture_dir = config.texture_dir.clone();
    let mut objects = config.objects.clone();

    if let Some(ref path) = config.manifest {
        let manifest = load_manifest(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        if scene.is_none() {
            scene = manifest.scene;
        }
        if texture_dir.is_none() {
            texture_dir = manifest.texture_dir.map(|dir| base.join(dir));
        }
        objects.extend(manifest.objects.into_iter().map(|obj| obj.relative_to(base)));
    }

    let scene = scene.ok_or_else(|| {
        SceneBinderError::Input("No scene identifier given (use --scene or a manifest)".into())
    })?;
    if objects.is_empty() {
        return Err(SceneBinderError::Input("No objects to bind".into()));
    }

    let texture_dir = texture_dir.unwrap_or_else(|| PathBuf::from("."));
    info!(
        scene = %scene,
        objects = objects.len(),
        textures = %texture_dir.display(),
        "Ingested scene"
    );

    Ok(IngestionResult {
        scene,
        texture_dir,
        objects,
    })
}
