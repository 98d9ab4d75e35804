use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::BinderConfig;
use crate::engine::{MemoryContext, MemoryMaterial, RenderContext};
use crate::error::Result;
use crate::ingestion;
use crate::scene::{SceneObject, overrides, resolve_object};
use crate::types::{AreaLight, MaterialParams};

/// One resolved object as reported to the user.
#[derive(Debug, Serialize)]
pub struct ObjectReport {
    pub id: String,
    pub mesh: PathBuf,
    pub vertices: usize,
    pub params: MaterialParams,
    pub channels: MemoryMaterial,
}

/// A light together with the object it was derived from.
#[derive(Debug, Serialize)]
pub struct LightReport {
    pub object: String,
    #[serde(flatten)]
    pub light: AreaLight,
}

/// Summary of a completed scene load.
#[derive(Debug, Serialize)]
pub struct ProcessingResult {
    pub scene: String,
    pub objects: Vec<ObjectReport>,
    pub lights: Vec<LightReport>,
    #[serde(skip)]
    pub duration: Duration,
}

/// Pipeline orchestrator -- ingests the object list, resolves every object
/// and derives area lights.
pub struct Pipeline;

impl Pipeline {
    /// Run a full scene load against an in-process render context.
    pub fn run(config: &BinderConfig) -> Result<ProcessingResult> {
        let mut ctx = MemoryContext::new();
        let result = Self::run_with(&mut ctx, config)?;
        debug!(
            materials = ctx.materials_created(),
            textures = ctx.texture_count(),
            "Render context usage"
        );

        let objects = result
            .objects
            .into_iter()
            .map(|obj| ObjectReport {
                vertices: obj.mesh.vertex_count(),
                id: obj.id,
                mesh: obj.mesh_path,
                params: obj.params,
                channels: obj.material,
            })
            .collect();

        Ok(ProcessingResult {
            scene: result.scene,
            objects,
            lights: result.lights,
            duration: result.duration,
        })
    }

    /// Run a full scene load against any render context.
    ///
    /// Objects are resolved one at a time in list order. The first fatal
    /// error aborts the whole load.
    pub fn run_with<C: RenderContext>(
        ctx: &mut C,
        config: &BinderConfig,
    ) -> Result<SceneLoad<C::Material>> {
        let start = Instant::now();

        info!("Stage 1/3: Ingestion");
        let ingested = ingestion::ingest(config)?;
        if overrides::rules_for(&ingested.scene).is_none() {
            let known: Vec<_> = overrides::known_scenes().collect();
            warn!(scene = %ingested.scene, ?known, "Unknown scene, no overrides will apply");
        }

        info!("Stage 2/3: Material resolution");
        let mut objects = Vec::with_capacity(ingested.objects.len());
        for spec in &ingested.objects {
            let obj = resolve_object(
                ctx,
                &ingested.scene,
                &spec.mesh,
                &spec.material_path(),
                &ingested.texture_dir,
            )?;
            objects.push(obj);
        }

        let lights = if config.area_lights {
            info!("Stage 3/3: Area lights");
            Self::extract_lights(&objects)?
        } else {
            Vec::new()
        };

        let duration = start.elapsed();
        info!(
            objects = objects.len(),
            lights = lights.len(),
            elapsed = ?duration,
            "Scene load complete"
        );

        Ok(SceneLoad {
            scene: ingested.scene,
            objects,
            lights,
            duration,
        })
    }

    /// Rectangle lights for every emissive quad. Other emitters stay plain
    /// emissive geometry.
    fn extract_lights<M>(objects: &[SceneObject<M>]) -> Result<Vec<LightReport>> {
        let mut lights = Vec::new();
        for obj in objects.iter().filter(|o| o.is_emissive()) {
            if obj.mesh.vertex_count() != 4 {
                debug!(
                    object = %obj.id,
                    vertices = obj.mesh.vertex_count(),
                    "Emissive object is not a quad, no area light"
                );
                continue;
            }
            let light = obj.area_light()?;
            info!(
                object = %obj.id,
                intensity = light.intensity,
                area = light.area(),
                normal = ?light.normal(),
                "Extracted area light"
            );
            lights.push(LightReport {
                object: obj.id.clone(),
                light,
            });
        }
        Ok(lights)
    }
}

/// Resolved objects of one scene, still holding their material instances.
#[derive(Debug)]
pub struct SceneLoad<M> {
    pub scene: String,
    pub objects: Vec<SceneObject<M>>,
    pub lights: Vec<LightReport>,
    pub duration: Duration,
}
