use crate::error::{Result, SceneBinderError};
use crate::types::{AreaLight, IndexedMesh, MaterialParams};

/// Derive a rectangle light from a four-vertex quad and its resolved material.
///
/// The first vertex is the origin; the edges run to the second and fourth
/// vertices. Anything other than exactly four vertices is refused.
pub fn extract(mesh: &IndexedMesh, params: &MaterialParams) -> Result<AreaLight> {
    let count = mesh.vertex_count();
    let (v1, v2, v4) = match (mesh.vertex(0), mesh.vertex(1), mesh.vertex(3)) {
        (Some(v1), Some(v2), Some(v4)) if count == 4 => (v1, v2, v4),
        _ => {
            return Err(SceneBinderError::AreaLight(format!(
                "only rectangular emitters are supported: expected 4 vertices, found {count}"
            )));
        }
    };

    Ok(AreaLight {
        origin: v1,
        edge1: v2 - v1,
        edge2: v4 - v1,
        color: params.emission,
        intensity: params.intensity,
        attenuation: params.attenuation,
    })
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn mesh(positions: &[f32]) -> IndexedMesh {
        IndexedMesh {
            positions: positions.to_vec(),
            ..Default::default()
        }
    }

    fn emissive() -> MaterialParams {
        MaterialParams {
            emission: Vec3::new(1.0, 0.95, 0.85),
            intensity: 3.0,
            attenuation: 0.07,
            emissive: true,
            ..Default::default()
        }
    }

    #[test]
    fn unit_square() {
        let quad = mesh(&[
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0,
        ]);
        let light = extract(&quad, &emissive()).unwrap();

        assert_eq!(light.origin, Vec3::ZERO);
        assert_eq!(light.edge1, Vec3::X);
        assert_eq!(light.edge2, Vec3::Y);
        assert_eq!(light.color, Vec3::new(1.0, 0.95, 0.85));
        assert_eq!(light.intensity, 3.0);
        assert_eq!(light.attenuation, 0.07);
    }

    #[test]
    fn offset_ceiling_quad() {
        let quad = mesh(&[
            -1.0, 2.5, -1.0, 1.0, 2.5, -1.0, 1.0, 2.5, 1.0, -1.0, 2.5, 1.0,
        ]);
        let light = extract(&quad, &emissive()).unwrap();

        assert_eq!(light.origin, Vec3::new(-1.0, 2.5, -1.0));
        assert_eq!(light.edge1, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(light.edge2, Vec3::new(0.0, 0.0, 2.0));
        approx::assert_relative_eq!(light.area(), 4.0);
    }

    #[test]
    fn triangle_is_refused() {
        let tri = mesh(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        let err = extract(&tri, &emissive()).unwrap_err();
        assert!(matches!(err, SceneBinderError::AreaLight(_)));
        assert!(err.to_string().contains("found 3"));
    }

    #[test]
    fn pentagon_is_refused() {
        let pent = mesh(&[0.0; 15]);
        let err = extract(&pent, &emissive()).unwrap_err();
        assert!(err.to_string().contains("found 5"));
    }

    #[test]
    fn empty_mesh_is_refused() {
        assert!(extract(&IndexedMesh::default(), &emissive()).is_err());
    }
}
