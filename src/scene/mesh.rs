use crate::core::geometry::Vertex;
use nalgebra::{Point3, Vector2, Vector3};

/// Vertex and index buffers for one batch of the vertex stage.
///
/// Indices reference `vertices` in groups of three, one group per triangle.
/// The mesh owns nothing beyond these two buffers; matrices arrive
/// separately through the stage.
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Built-in single-triangle mesh the demo driver feeds through the
    /// stage. Counter-clockwise when viewed from +Z, with per-vertex
    /// normals that are deliberately tilted and unnormalized so the
    /// stage's output shows more than a constant.
    pub fn demo_triangle() -> Self {
        let vertices = vec![
            Vertex::new(
                Point3::new(0.0, 0.8, 0.2), // Apex
                Vector3::new(0.0, 0.5, 1.2),
                Vector2::new(0.5, 0.9),
            ),
            Vertex::new(
                Point3::new(-0.7, -0.4, 0.0), // Bottom left
                Vector3::new(-0.4, -0.2, 1.0),
                Vector2::new(0.05, 0.1),
            ),
            Vertex::new(
                Point3::new(0.7, -0.4, -0.2), // Bottom right
                Vector3::new(0.4, -0.2, 1.0),
                Vector2::new(0.95, 0.1),
            ),
        ];

        let indices = vec![0, 1, 2];

        Self::new(vertices, indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_triangle_is_one_valid_ccw_primitive() {
        let mesh = Mesh::demo_triangle();

        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);

        // CCW in the XY plane when viewed from +Z: the cross product of the
        // two edges must have a positive z component.
        let a = mesh.vertices[0].position;
        let b = mesh.vertices[1].position;
        let c = mesh.vertices[2].position;
        let cross_z = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
        assert!(cross_z > 0.0);

        // Every normal faces the viewer side the winding implies.
        for vertex in &mesh.vertices {
            assert!(vertex.normal.z > 0.0);
        }
    }
}
