use std::path::Path;

use tracing::debug;

use crate::error::{Result, SceneBinderError};
use crate::ingestion::MeshFormat;
use crate::types::IndexedMesh;

/// Load an OBJ file into a single `IndexedMesh`, merging all of its models.
///
/// Material libraries referenced from the OBJ are ignored here; materials
/// come from the object's own material file.
pub fn load_mesh(path: &Path) -> Result<IndexedMesh> {
    if !path.exists() {
        return Err(SceneBinderError::Mesh(format!(
            "Mesh file not found: {}",
            path.display()
        )));
    }
    let format = MeshFormat::from_path(path)?;

    let (models, _materials) = tobj::load_obj(path, &tobj::GPU_LOAD_OPTIONS).map_err(|e| {
        SceneBinderError::Mesh(format!("Failed to load OBJ {}: {e}", path.display()))
    })?;

    debug!(path = %path.display(), %format, model_count = models.len(), "Loaded mesh models");

    let mut merged = IndexedMesh::default();
    for model in models {
        merged.append(convert_mesh(model.mesh));
    }

    if merged.is_empty() {
        return Err(SceneBinderError::Mesh(format!(
            "Mesh contains no geometry: {}",
            path.display()
        )));
    }

    debug!(
        vertices = merged.vertex_count(),
        triangles = merged.triangle_count(),
        normals = merged.has_normals(),
        uvs = merged.has_uvs(),
        "Merged mesh"
    );
    Ok(merged)
}

/// Convert a `tobj::Mesh` into our `IndexedMesh`.
fn convert_mesh(mesh: tobj::Mesh) -> IndexedMesh {
    IndexedMesh {
        positions: mesh.positions,
        normals: mesh.normals,
        uvs: mesh.texcoords,
        indices: mesh.indices,
    }
}
