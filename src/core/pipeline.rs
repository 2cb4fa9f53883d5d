use crate::core::geometry::Vertex;
use nalgebra::Vector4;
use std::ops::{Add, Mul};

/// Trait for per-vertex outputs that can be linearly interpolated across a
/// triangle's surface by a downstream stage.
///
/// Requirements:
/// - Copy + Clone: cheaply duplicable values for per-vertex storage and interpolation.
/// - Add + Mul<f32>: support linear combination (a + b * t) used by barycentric interpolation.
/// - Send + Sync: safe to use from multiple threads during data-parallel execution.
pub trait Interpolatable:
    Copy + Clone + Add<Output = Self> + Mul<f32, Output = Self> + Send + Sync
{
}

/// The programmable vertex stage of the pipeline.
///
/// Implementations must be thread-safe (Send + Sync) because the stage is
/// invoked concurrently across many vertices with no ordering guarantee.
/// Each invocation is a pure function of the input vertex and the stage's
/// read-only state; implementations must not mutate shared state.
pub trait VertexStage: Send + Sync {
    /// Per-vertex varying data handed to the next pipeline stage, where it is
    /// interpolated across the primitive.
    type Varying: Interpolatable;

    /// Transforms one vertex into homogeneous clip space and produces the
    /// varying data associated with it.
    ///
    /// No error path exists here: malformed input (NaN/Inf) propagates
    /// silently per IEEE-754 floating-point semantics, matching the
    /// permissive behavior of per-vertex processing on real hardware.
    ///
    /// # Returns
    /// - `(Vector4<f32>, Self::Varying)`: clip-space position and per-vertex varying.
    fn vertex(&self, vertex: &Vertex) -> (Vector4<f32>, Self::Varying);
}
