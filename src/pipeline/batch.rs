use crate::core::math::interpolation::interpolate_varying;
use crate::core::pipeline::{Interpolatable, VertexStage};
use crate::scene::mesh::Mesh;
use log::debug;
use nalgebra::{Vector3, Vector4};
use rayon::prelude::*;

/// Output of one vertex-stage invocation.
pub struct StagedVertex<V> {
    /// Homogeneous clip-space position, consumed by clipping/rasterization.
    pub clip_pos: Vector4<f32>,
    /// Per-vertex varying, interpolated by the downstream stage.
    pub varying: V,
}

/// A primitive assembled from three staged vertices, ready for a
/// downstream rasterization stage.
pub struct StagedTriangle<V> {
    pub clip_coords: [Vector4<f32>; 3],
    pub varyings: [V; 3],
}

impl<V: Interpolatable> StagedTriangle<V> {
    /// The varying at the triangle's centroid: the equal-weight barycentric
    /// mix of the three per-vertex varyings, exactly what a downstream
    /// stage computes for the center fragment.
    pub fn centroid_varying(&self) -> V {
        let center = Vector3::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0);
        interpolate_varying(&self.varyings, center)
    }
}

/// Runs the vertex stage over every vertex of the mesh in parallel.
///
/// Invocations share only the stage's read-only matrices; each output
/// depends solely on its own input vertex, so execution order is
/// unconstrained. Output order matches input order.
pub fn process_mesh<S: VertexStage>(stage: &S, mesh: &Mesh) -> Vec<StagedVertex<S::Varying>> {
    debug!("Vertex stage over {} vertices", mesh.vertices.len());

    mesh.vertices
        .par_iter()
        .map(|vertex| {
            let (clip_pos, varying) = stage.vertex(vertex);
            StagedVertex { clip_pos, varying }
        })
        .collect()
}

/// Runs the vertex stage and assembles triangles from the mesh's index list
/// (three indices per primitive). A trailing partial chunk is dropped.
/// Indices out of range are skipped rather than panicking; a well-formed
/// mesh never hits that path.
pub fn process_indexed<S: VertexStage>(stage: &S, mesh: &Mesh) -> Vec<StagedTriangle<S::Varying>> {
    let staged = process_mesh(stage, mesh);

    mesh.indices
        .par_chunks_exact(3)
        .filter_map(|chunk| {
            let i0 = chunk[0] as usize;
            let i1 = chunk[1] as usize;
            let i2 = chunk[2] as usize;

            if i0 >= staged.len() || i1 >= staged.len() || i2 >= staged.len() {
                return None;
            }

            Some(StagedTriangle {
                clip_coords: [staged[i0].clip_pos, staged[i1].clip_pos, staged[i2].clip_pos],
                varyings: [staged[i0].varying, staged[i1].varying, staged[i2].varying],
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::shaders::phong::PhongVertexStage;
    use nalgebra::Matrix4;

    fn identity_stage() -> PhongVertexStage {
        PhongVertexStage::new(
            Matrix4::identity(),
            Matrix4::identity(),
            Matrix4::identity(),
            Matrix4::identity(),
        )
    }

    #[test]
    fn batch_matches_scalar_invocation_in_input_order() {
        let mesh = Mesh::demo_triangle();
        let stage = identity_stage();

        let staged = process_mesh(&stage, &mesh);
        assert_eq!(staged.len(), mesh.vertices.len());

        for (out, vertex) in staged.iter().zip(&mesh.vertices) {
            let (clip, var) = stage.vertex(vertex);
            assert_eq!(out.clip_pos, clip);
            assert_eq!(out.varying.uv, var.uv);
            assert_eq!(out.varying.frag_pos, var.frag_pos);
        }
    }

    #[test]
    fn indexed_assembly_builds_one_triangle_from_three_indices() {
        let mesh = Mesh::demo_triangle();
        let stage = identity_stage();

        let triangles = process_indexed(&stage, &mesh);
        assert_eq!(triangles.len(), 1);
        assert_eq!(
            triangles[0].clip_coords[0].xyz(),
            mesh.vertices[0].position.coords
        );
    }

    #[test]
    fn centroid_varying_is_the_mean_of_the_vertex_varyings() {
        let mesh = Mesh::demo_triangle();
        let triangles = process_indexed(&identity_stage(), &mesh);
        let center = triangles[0].centroid_varying();

        let mean_uv = (mesh.vertices[0].texcoord
            + mesh.vertices[1].texcoord
            + mesh.vertices[2].texcoord)
            / 3.0;
        let mean_pos = (mesh.vertices[0].position.coords
            + mesh.vertices[1].position.coords
            + mesh.vertices[2].position.coords)
            / 3.0;

        assert!((center.uv - mean_uv).norm() < 1e-6);
        assert!((center.frag_pos.coords - mean_pos).norm() < 1e-6);
    }

    #[test]
    fn out_of_range_indices_are_skipped() {
        let mut mesh = Mesh::demo_triangle();
        mesh.indices = vec![0, 1, 99];
        let triangles = process_indexed(&identity_stage(), &mesh);
        assert!(triangles.is_empty());
    }
}
