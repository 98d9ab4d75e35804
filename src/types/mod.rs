pub mod light;
pub mod material;
pub mod mesh;

pub use light::AreaLight;
pub use material::MaterialParams;
pub use mesh::IndexedMesh;
