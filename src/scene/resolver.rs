use std::path::{Path, PathBuf};

use glam::Vec3;
use tracing::{debug, info};

use crate::engine::{
    CUTOFF_COLOR, IMPORTANCE_CUTOFF, MaterialInstance, REFLECTION_MAXDEPTH, RenderContext,
    channel,
};
use crate::error::Result;
use crate::ingestion::mtl_parser;
use crate::scene::{area_light, overrides};
use crate::types::{AreaLight, IndexedMesh, MaterialParams};

/// A mesh bound to its fully configured material.
#[derive(Debug)]
pub struct SceneObject<M> {
    /// Base file name of the mesh, used for override matching.
    pub id: String,
    pub mesh_path: PathBuf,
    pub mesh: IndexedMesh,
    /// Final parameters as uploaded.
    pub params: MaterialParams,
    pub material: M,
}

impl<M> SceneObject<M> {
    pub fn is_emissive(&self) -> bool {
        self.params.emissive
    }

    /// Rectangle light for this object; requires quad geometry.
    pub fn area_light(&self) -> Result<AreaLight> {
        area_light::extract(&self.mesh, &self.params)
    }
}

/// Object identifier of a mesh: its final path segment.
pub fn object_id(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Apply the scene's first matching override to parsed parameters.
pub fn resolve_params(scene: &str, object_id: &str, parsed: MaterialParams) -> MaterialParams {
    let mut params = parsed;
    if let Some(rule) = overrides::lookup(scene, object_id) {
        debug!(scene, object = object_id, pattern = rule.pattern, "Applying scene override");
        rule.overrides.apply(&mut params);
    }
    params
}

/// Load a mesh, build its material and commit it to a fresh material instance.
///
/// Geometry failures are fatal. A missing material file leaves the defaults
/// in place and an unreadable texture binds a flat sampler.
pub fn resolve_object<C: RenderContext>(
    ctx: &mut C,
    scene: &str,
    mesh_path: &Path,
    material_path: &Path,
    texture_dir: &Path,
) -> Result<SceneObject<C::Material>> {
    let id = object_id(mesh_path);

    let mesh = ctx.load_geometry(mesh_path)?;
    let mut material = ctx.create_material()?;

    let parsed = mtl_parser::parse_material_file(material_path);
    let params = resolve_params(scene, &id, parsed);

    commit(ctx, &mut material, &params, texture_dir)?;

    info!(
        object = %id,
        vertices = mesh.vertex_count(),
        emissive = params.emissive,
        "Resolved object"
    );

    Ok(SceneObject {
        id,
        mesh_path: mesh_path.to_path_buf(),
        mesh,
        params,
        material,
    })
}

/// Upload `params` to `material`.
///
/// Samplers are loaded before the first write, so a context that fails to
/// load one leaves the material untouched.
pub fn commit<C: RenderContext>(
    ctx: &mut C,
    material: &mut C::Material,
    params: &MaterialParams,
    texture_dir: &Path,
) -> Result<()> {
    let kd_map = ctx.load_texture(texture_dir, &params.diffuse_map, Vec3::ONE)?;
    let ks_map = ctx.load_texture(texture_dir, &params.specular_map, Vec3::ONE)?;
    let normal_map = ctx.load_texture(texture_dir, &params.normal_map, Vec3::ONE)?;

    material.set_int(channel::IS_EMISSIVE, params.emissive.into());
    material.set_float3(channel::K_EMISSION, params.emission);
    material.set_float(channel::EMISSION_INTENSITY, params.intensity);
    material.set_float3(channel::K_AMBIENT, params.ambient);
    material.set_float3(channel::K_DIFFUSE, params.diffuse);
    material.set_float3(channel::K_SPECULAR, params.specular);
    material.set_float3(channel::K_REFLECTIVE, params.reflective);
    material.set_float3(channel::ALPHA, params.alpha);
    material.set_float3(channel::SUBSURF_SCATTER_COLOR, params.subsurface);
    material.set_float(channel::SUBSURF_ATT, params.subsurface_attenuation);
    material.set_float(channel::GLOSSINESS, params.glossiness);

    material.set_float(channel::IMPORTANCE_CUTOFF, IMPORTANCE_CUTOFF);
    material.set_float3(channel::CUTOFF_COLOR, CUTOFF_COLOR);
    material.set_int(channel::REFLECTION_MAXDEPTH, REFLECTION_MAXDEPTH);

    material.set_texture_sampler(channel::KD_MAP, kd_map);
    material.set_texture_sampler(channel::KS_MAP, ks_map);
    material.set_texture_sampler(channel::NORMAL_MAP, normal_map);

    material.set_int(channel::HAS_DIFFUSE_MAP, params.has_diffuse_map().into());
    material.set_int(channel::HAS_NORMAL_MAP, params.has_normal_map().into());
    material.set_int(channel::HAS_SPECULAR_MAP, params.has_specular_map().into());

    material.set_int(channel::ANISOTROPIC, params.anisotropic.into());

    Ok(())
}
