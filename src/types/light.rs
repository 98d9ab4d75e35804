use glam::Vec3;
use serde::Serialize;

/// Rectangle emitter spanned from `origin` by two edge vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaLight {
    pub origin: Vec3,
    pub edge1: Vec3,
    pub edge2: Vec3,
    pub color: Vec3,
    pub intensity: f32,
    pub attenuation: f32,
}

impl AreaLight {
    /// Unit normal of the emitting face (`edge1 × edge2`), zero if degenerate.
    pub fn normal(&self) -> Vec3 {
        self.edge1.cross(self.edge2).normalize_or_zero()
    }

    /// Area of the spanned parallelogram.
    pub fn area(&self) -> f32 {
        self.edge1.cross(self.edge2).length()
    }
}
