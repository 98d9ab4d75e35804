use glam::Vec3;

/// Triangle geometry backing a scene object.
///
/// Buffers are flat `Vec<f32>` / `Vec<u32>` in the layout the OBJ loader
/// produces, so the renderer can take them without reshuffling.
#[derive(Debug, Clone, Default)]
pub struct IndexedMesh {
    /// Interleaved positions: [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Interleaved normals: [nx, ny, nz, ...] or empty
    pub normals: Vec<f32>,
    /// Interleaved UVs: [u, v, u, v, ...] or empty
    pub uvs: Vec<f32>,
    /// Triangle indices into the vertex buffers
    pub indices: Vec<u32>,
}

impl IndexedMesh {
    /// Number of vertices (positions / 3).
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles (indices / 3).
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position of vertex `i`, or `None` past the end.
    pub fn vertex(&self, i: usize) -> Option<Vec3> {
        self.positions
            .get(i * 3..i * 3 + 3)
            .map(|p| Vec3::new(p[0], p[1], p[2]))
    }

    /// Whether normals are present.
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    /// Whether UV coordinates are present.
    pub fn has_uvs(&self) -> bool {
        !self.uvs.is_empty()
    }

    /// Whether the mesh contains no geometry.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Append `other`, rebasing its indices past the current vertices.
    pub fn append(&mut self, other: IndexedMesh) {
        let base = self.vertex_count() as u32;
        self.positions.extend(other.positions);
        self.normals.extend(other.normals);
        self.uvs.extend(other.uvs);
        self.indices.extend(other.indices.into_iter().map(|i| i + base));
    }
}
