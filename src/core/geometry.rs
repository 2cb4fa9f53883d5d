use nalgebra::{Point3, Vector2, Vector3};

/// A single vertex as fed to the vertex stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in model (object-local) space.
    pub position: Point3<f32>,
    /// Normal vector in model space. Unnormalized input is allowed;
    /// the stage never renormalizes it.
    pub normal: Vector3<f32>,
    /// Texture coordinates (UV), forwarded unmodified.
    pub texcoord: Vector2<f32>,
}

impl Vertex {
    pub fn new(position: Point3<f32>, normal: Vector3<f32>, texcoord: Vector2<f32>) -> Self {
        Self {
            position,
            normal,
            texcoord,
        }
    }
}
