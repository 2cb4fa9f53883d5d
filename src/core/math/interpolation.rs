use crate::core::pipeline::Interpolatable;
use nalgebra::{Point2, Vector3};

const EPSILON: f32 = 1e-5;

/// Calculates the barycentric coordinates (alpha, beta, gamma) of point p
/// with respect to triangle (v1, v2, v3).
///
/// Returns `None` if the triangle is degenerate (area is near zero).
///
/// # Returns
/// A Vector3 where:
/// - x: alpha (weight for v1)
/// - y: beta  (weight for v2)
/// - z: gamma (weight for v3)
pub fn barycentric_coordinates(
    p: Point2<f32>,
    v1: Point2<f32>,
    v2: Point2<f32>,
    v3: Point2<f32>,
) -> Option<Vector3<f32>> {
    let e1 = v2 - v1;
    let e2 = v3 - v1;
    let p_v1 = p - v1;

    // Determinant (2x area of the triangle)
    let total_area_x2 = e1.x * e2.y - e1.y * e2.x;

    if total_area_x2.abs() < EPSILON {
        return None; // Degenerate triangle
    }

    let inv_total_area_x2 = 1.0 / total_area_x2;

    let area2_x2 = p_v1.x * e2.y - p_v1.y * e2.x;
    let beta = area2_x2 * inv_total_area_x2;

    let area3_x2 = e1.x * p_v1.y - e1.y * p_v1.x;
    let gamma = area3_x2 * inv_total_area_x2;

    let alpha = 1.0 - beta - gamma;

    Some(Vector3::new(alpha, beta, gamma))
}

/// Linearly combines the three per-vertex varyings of a triangle with the
/// given barycentric weights. This is what a downstream fragment stage does
/// with the values the vertex stage emits.
#[inline]
pub fn interpolate_varying<V: Interpolatable>(values: &[V; 3], bary: Vector3<f32>) -> V {
    values[0] * bary.x + values[1] * bary.y + values[2] * bary.z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barycentric_at_vertices_and_centroid() {
        let v1 = Point2::new(0.0, 0.0);
        let v2 = Point2::new(1.0, 0.0);
        let v3 = Point2::new(0.0, 1.0);

        let at_v1 = barycentric_coordinates(v1, v1, v2, v3).unwrap();
        assert!((at_v1 - Vector3::new(1.0, 0.0, 0.0)).norm() < 1e-5);

        let centroid = Point2::new(1.0 / 3.0, 1.0 / 3.0);
        let at_c = barycentric_coordinates(centroid, v1, v2, v3).unwrap();
        assert!((at_c - Vector3::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0)).norm() < 1e-5);
    }

    #[test]
    fn degenerate_triangle_yields_none() {
        let v = Point2::new(0.5, 0.5);
        assert!(barycentric_coordinates(v, v, v, v).is_none());
    }

    #[test]
    fn varyings_mix_with_barycentric_weights() {
        use crate::pipeline::shaders::phong::PhongVarying;
        use nalgebra::{Point3, Vector2};

        let varyings = [
            PhongVarying {
                frag_pos: Point3::new(0.0, 0.0, 0.0),
                normal: Vector3::new(1.0, 0.0, 0.0),
                uv: Vector2::new(0.0, 0.0),
            },
            PhongVarying {
                frag_pos: Point3::new(3.0, 0.0, 0.0),
                normal: Vector3::new(0.0, 1.0, 0.0),
                uv: Vector2::new(1.0, 0.0),
            },
            PhongVarying {
                frag_pos: Point3::new(0.0, 3.0, 0.0),
                normal: Vector3::new(0.0, 0.0, 1.0),
                uv: Vector2::new(0.0, 1.0),
            },
        ];

        let center = Vector3::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0);
        let mixed = interpolate_varying(&varyings, center);

        assert!((mixed.frag_pos.coords - Vector3::new(1.0, 1.0, 0.0)).norm() < 1e-5);
        assert!((mixed.normal - Vector3::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0)).norm() < 1e-5);
        assert!((mixed.uv - Vector2::new(1.0 / 3.0, 1.0 / 3.0)).norm() < 1e-5);
    }
}
