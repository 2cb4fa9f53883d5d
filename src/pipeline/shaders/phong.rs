use crate::core::geometry::Vertex;
use crate::core::pipeline::{Interpolatable, VertexStage};
use nalgebra::{Matrix4, Point3, Vector2, Vector3, Vector4};
use std::ops::{Add, Mul};

/// Data that needs to be interpolated across the triangle surface.
/// Passed from the vertex stage to the downstream (fragment) stage.
///
/// Field names follow the wire contract of the host engine's shader
/// (`vFragPos`, `vNormal`, `vTexCoords`), see [`crate::pipeline::glsl`].
#[derive(Clone, Copy, Debug)]
pub struct PhongVarying {
    /// Position in World Space (needed downstream for View and Light vectors).
    pub frag_pos: Point3<f32>,
    /// Normal vector in World Space. Linear part of the normal matrix only;
    /// not renormalized here. Downstream stages renormalize after
    /// interpolation.
    pub normal: Vector3<f32>,
    /// Texture coordinates (UV), forwarded bit-for-bit.
    pub uv: Vector2<f32>,
}

// Math operations required for barycentric interpolation.
// nalgebra's Point3 doesn't support addition with Point3 directly,
// so we go through coordinates.
impl Add for PhongVarying {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            frag_pos: Point3::from(self.frag_pos.coords + other.frag_pos.coords),
            normal: self.normal + other.normal,
            uv: self.uv + other.uv,
        }
    }
}

impl Mul<f32> for PhongVarying {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            frag_pos: Point3::from(self.frag_pos.coords * scalar),
            normal: self.normal * scalar,
            uv: self.uv * scalar,
        }
    }
}

impl Interpolatable for PhongVarying {}

/// The vertex stage of a Phong pipeline.
///
/// Holds the four per-draw matrices the host engine uploads (`uMMatrix`,
/// `uMVMatrix`, `uPMatrix`, `uNMatrix`). All four are externally owned and
/// read-only for the duration of a draw batch.
///
/// The normal matrix must be supplied pre-computed by the caller, normally
/// as the inverse-transpose of the model matrix
/// ([`TransformFactory::normal`](crate::core::math::transform::TransformFactory::normal)).
/// The stage performs no matrix inversion itself.
pub struct PhongVertexStage {
    /// Model -> world transform.
    pub model_matrix: Matrix4<f32>,
    /// Model -> view transform. Kept separate from `model_matrix`: clip
    /// position is computed through this matrix, never re-derived from the
    /// world position, since the two may legitimately differ.
    pub model_view_matrix: Matrix4<f32>,
    /// View -> clip transform.
    pub projection_matrix: Matrix4<f32>,
    /// Inverse-transpose of the model matrix; only its top-left 3x3 block
    /// is applied, so normals never pick up a translation.
    pub normal_matrix: Matrix4<f32>,
}

impl PhongVertexStage {
    pub fn new(
        model: Matrix4<f32>,
        model_view: Matrix4<f32>,
        projection: Matrix4<f32>,
        normal: Matrix4<f32>,
    ) -> Self {
        Self {
            model_matrix: model,
            model_view_matrix: model_view,
            projection_matrix: projection,
            normal_matrix: normal,
        }
    }
}

impl VertexStage for PhongVertexStage {
    type Varying = PhongVarying;

    fn vertex(&self, vertex: &Vertex) -> (Vector4<f32>, Self::Varying) {
        // 1. Position to World Space. The transform is assumed affine, so
        //    taking xyz without a homogeneous divide is exact.
        let world_homo = self.model_matrix * vertex.position.to_homogeneous();
        let frag_pos = Point3::from(world_homo.xyz());

        // 2. Normal to World Space: top-left 3x3 of the normal matrix.
        //    Linear transform only; no translation, no renormalization.
        let normal = self.normal_matrix.fixed_view::<3, 3>(0, 0) * vertex.normal;

        // 3. Position to Clip Space through the model-view matrix.
        //    Independent of step 1 by contract.
        let clip_pos =
            self.projection_matrix * (self.model_view_matrix * vertex.position.to_homogeneous());

        let varying = PhongVarying {
            frag_pos,
            normal,
            uv: vertex.texcoord,
        };

        (clip_pos, varying)
    }
}
