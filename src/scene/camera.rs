use crate::core::math::transform::TransformFactory;
use nalgebra::{Matrix4, Point3, Vector3};

#[derive(Debug, Clone)]
pub enum ProjectionType {
    Perspective { fov_y_rad: f32, aspect_ratio: f32 },
    Orthographic { height: f32, aspect_ratio: f32 },
}

/// Manages the View and Projection matrices and derives the per-object
/// model-view matrix the vertex stage consumes as `uMVMatrix`.
#[derive(Debug, Clone)]
pub struct Camera {
    // --- Common Parameters ---
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub near: f32,
    pub far: f32,

    // --- Projection Specifics ---
    pub projection_type: ProjectionType,

    // --- Cached Matrices ---
    view_matrix: Matrix4<f32>,
    projection_matrix: Matrix4<f32>,
}

impl Camera {
    pub fn new_perspective(
        position: Point3<f32>,
        target: Point3<f32>,
        up: Vector3<f32>,
        fov_y_rad: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let mut cam = Self {
            position,
            target,
            up,
            near,
            far,
            projection_type: ProjectionType::Perspective {
                fov_y_rad,
                aspect_ratio,
            },
            view_matrix: Matrix4::identity(),
            projection_matrix: Matrix4::identity(),
        };
        cam.update_matrices();
        cam
    }

    pub fn new_orthographic(
        position: Point3<f32>,
        target: Point3<f32>,
        up: Vector3<f32>,
        height: f32, // View height
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let mut cam = Self {
            position,
            target,
            up,
            near,
            far,
            projection_type: ProjectionType::Orthographic {
                height,
                aspect_ratio,
            },
            view_matrix: Matrix4::identity(),
            projection_matrix: Matrix4::identity(),
        };
        cam.update_matrices();
        cam
    }

    /// Recalculates View and Projection matrices based on current parameters.
    pub fn update_matrices(&mut self) {
        // 1. View Matrix (Same for both)
        self.view_matrix = TransformFactory::view(&self.position, &self.target, &self.up);

        // 2. Projection Matrix (Depends on type)
        self.projection_matrix = match self.projection_type {
            ProjectionType::Perspective {
                fov_y_rad,
                aspect_ratio,
            } => TransformFactory::perspective(aspect_ratio, fov_y_rad, self.near, self.far),

            ProjectionType::Orthographic {
                height,
                aspect_ratio,
            } => {
                let half_height = height / 2.0;
                let half_width = half_height * aspect_ratio;

                TransformFactory::orthographic(
                    -half_width,
                    half_width, // Left, Right
                    -half_height,
                    half_height, // Bottom, Top
                    self.near,
                    self.far,
                )
            }
        };
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        self.view_matrix
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix
    }

    /// Combines this camera's view matrix with an object's model matrix.
    /// This is the `uMVMatrix` uniform of the vertex stage; it is kept
    /// distinct from the model matrix the stage uses for world positions.
    pub fn model_view(&self, model: &Matrix4<f32>) -> Matrix4<f32> {
        self.view_matrix * model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_view_is_view_times_model() {
        let cam = Camera::new_perspective(
            Point3::new(0.0, 0.5, 3.0),
            Point3::origin(),
            Vector3::y(),
            45.0_f32.to_radians(),
            4.0 / 3.0,
            0.1,
            100.0,
        );
        let model = TransformFactory::translation(&Vector3::new(1.0, 0.0, 0.0));
        let mv = cam.model_view(&model);
        assert_eq!(mv, cam.view_matrix() * model);
    }

    #[test]
    fn identity_placement_makes_model_view_equal_view() {
        let cam = Camera::new_orthographic(
            Point3::new(0.0, 0.0, 5.0),
            Point3::origin(),
            Vector3::y(),
            2.0,
            1.0,
            0.1,
            10.0,
        );
        assert_eq!(cam.model_view(&Matrix4::identity()), cam.view_matrix());
    }
}
