use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::error::SceneBinderError;

/// Report format printed by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    #[value(name = "json")]
    Json,
    #[value(name = "mtl")]
    Mtl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Mtl => write!(f, "mtl"),
        }
    }
}

/// One mesh asset and its material file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObjectSpec {
    pub mesh: PathBuf,
    /// Defaults to the mesh path with an `.mtl` extension.
    #[serde(default)]
    pub material: Option<PathBuf>,
}

impl ObjectSpec {
    pub fn new(mesh: impl Into<PathBuf>) -> Self {
        Self {
            mesh: mesh.into(),
            material: None,
        }
    }

    pub fn material_path(&self) -> PathBuf {
        self.material
            .clone()
            .unwrap_or_else(|| self.mesh.with_extension("mtl"))
    }

    /// Resolve relative paths against `base`.
    pub fn relative_to(self, base: &Path) -> Self {
        Self {
            mesh: base.join(self.mesh),
            material: self.material.map(|m| base.join(m)),
        }
    }
}

/// Fully resolved binder configuration (constructed from CLI args).
#[derive(Debug, Clone, Default)]
pub struct BinderConfig {
    /// Scene identifier selecting the override table partition.
    pub scene: Option<String>,
    pub objects: Vec<ObjectSpec>,
    pub manifest: Option<PathBuf>,
    pub texture_dir: Option<PathBuf>,
    pub area_lights: bool,
    pub format: OutputFormat,
    pub verbose: bool,
}

/// CLI argument definition (clap derive).
#[derive(Parser, Debug)]
#[command(
    name = "scene-binder",
    about = "Bind OBJ meshes to ray-tracer materials and area lights",
    version
)]
pub struct CliArgs {
    /// Scene identifier (kitchen, dining_room, bowling, milk, ...); may come
    /// from the manifest instead
    #[arg(short = 's', long)]
    pub scene: Option<String>,

    /// Mesh file (OBJ); repeat for several objects
    #[arg(short = 'm', long = "mesh")]
    pub meshes: Vec<PathBuf>,

    /// Material file for a single --mesh (default: mesh path with .mtl)
    #[arg(long, requires = "meshes")]
    pub material: Option<PathBuf>,

    /// JSON scene manifest listing objects
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Directory texture file names are resolved against
    #[arg(short = 't', long)]
    pub texture_dir: Option<PathBuf>,

    /// Extract rectangle lights for emissive quad objects
    #[arg(long)]
    pub area_lights: bool,

    /// Report format: json or mtl
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl TryFrom<CliArgs> for BinderConfig {
    type Error = SceneBinderError;

    /// `--material` names the material of exactly one `--mesh`.
    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.material.is_some() && args.meshes.len() > 1 {
            return Err(SceneBinderError::Input(format!(
                "--material applies to a single --mesh, got {} meshes",
                args.meshes.len()
            )));
        }

        let material = args.material;
        let objects = args
            .meshes
            .into_iter()
            .map(|mesh| ObjectSpec {
                mesh,
                material: material.clone(),
            })
            .collect();

        Ok(BinderConfig {
            scene: args.scene,
            objects,
            manifest: args.manifest,
            texture_dir: args.texture_dir,
            area_lights: args.area_lights,
            format: args.format,
            verbose: args.verbose,
        })
    }
}
