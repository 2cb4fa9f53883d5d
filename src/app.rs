use crate::core::math::transform::TransformFactory;
use crate::io::config::{CameraConfig, Config, ObjectConfig};
use crate::pipeline::batch::process_indexed;
use crate::pipeline::glsl;
use crate::pipeline::shaders::phong::PhongVertexStage;
use crate::scene::camera::Camera;
use crate::scene::mesh::Mesh;
use log::{info, warn};
use nalgebra::{Matrix4, Point3, Vector3};
use std::time::Instant;

/// Builds a camera from the config section, falling back to perspective
/// projection when the requested type is unknown.
pub fn build_camera(cfg: &CameraConfig) -> Camera {
    let position = Point3::from(cfg.position);
    let target = Point3::from(cfg.target);
    let up = Vector3::from(cfg.up);

    match cfg.projection.as_str() {
        "orthographic" => Camera::new_orthographic(
            position,
            target,
            up,
            cfg.ortho_height,
            cfg.aspect,
            cfg.near,
            cfg.far,
        ),
        "perspective" => Camera::new_perspective(
            position,
            target,
            up,
            cfg.fov.to_radians(),
            cfg.aspect,
            cfg.near,
            cfg.far,
        ),
        other => {
            warn!("Unknown projection '{other}', using perspective");
            Camera::new_perspective(
                position,
                target,
                up,
                cfg.fov.to_radians(),
                cfg.aspect,
                cfg.near,
                cfg.far,
            )
        }
    }
}

/// Builds the object's model matrix: Translation * Rotation(Z*Y*X) * Scale.
pub fn build_model_matrix(cfg: &ObjectConfig) -> Matrix4<f32> {
    let translation = TransformFactory::translation(&Vector3::from(cfg.position));
    let rotation = TransformFactory::rotation_z(cfg.rotation[2].to_radians())
        * TransformFactory::rotation_y(cfg.rotation[1].to_radians())
        * TransformFactory::rotation_x(cfg.rotation[0].to_radians());
    let scale = TransformFactory::scaling_nonuniform(&Vector3::from(cfg.scale));

    translation * rotation * scale
}

/// Assembles the four vertex-stage matrices from a scene config.
///
/// The normal matrix is pre-computed here (inverse-transpose of the model
/// matrix); the stage itself never inverts anything. A singular model matrix
/// degrades to the model matrix itself with a warning, which skews normals
/// but keeps the demo running.
pub fn build_stage(config: &Config) -> PhongVertexStage {
    let camera = build_camera(&config.camera);
    let model = build_model_matrix(&config.object);

    let normal = TransformFactory::normal(&model).unwrap_or_else(|| {
        warn!("Model matrix is singular; using it as the normal matrix");
        model
    });

    PhongVertexStage::new(
        model,
        camera.model_view(&model),
        camera.projection_matrix(),
        normal,
    )
}

/// Runs the demo: feeds the built-in test triangle through the vertex stage
/// and prints the staged outputs.
pub fn run(config: Config) {
    let stage = build_stage(&config);
    let mesh = Mesh::demo_triangle();

    info!(
        "Processing {} vertices / {} indices",
        mesh.vertices.len(),
        mesh.indices.len()
    );

    let start_time = Instant::now();
    let triangles = process_indexed(&stage, &mesh);
    info!("Vertex stage completed in {:.2?}", start_time.elapsed());

    for (i, tri) in triangles.iter().enumerate() {
        println!("triangle {i}:");
        for (clip, var) in tri.clip_coords.iter().zip(&tri.varyings) {
            println!(
                "  clip=({:.4}, {:.4}, {:.4}, {:.4})  world=({:.4}, {:.4}, {:.4})  \
                 normal=({:.4}, {:.4}, {:.4})  uv=({:.4}, {:.4})",
                clip.x, clip.y, clip.z, clip.w,
                var.frag_pos.x, var.frag_pos.y, var.frag_pos.z,
                var.normal.x, var.normal.y, var.normal.z,
                var.uv.x, var.uv.y,
            );
        }

        let center = tri.centroid_varying();
        println!(
            "  centroid: world=({:.4}, {:.4}, {:.4})  normal=({:.4}, {:.4}, {:.4})  uv=({:.4}, {:.4})",
            center.frag_pos.x, center.frag_pos.y, center.frag_pos.z,
            center.normal.x, center.normal.y, center.normal.z,
            center.uv.x, center.uv.y,
        );
    }
}

/// Prints the wire contract (binding names) and the vertex shader source
/// for the dialect this build targets.
pub fn print_bindings() {
    println!("attributes:");
    println!("  {} (vec3)", glsl::ATTR_POSITION);
    println!("  {} (vec3)", glsl::ATTR_NORMAL);
    println!("  {} (vec2)", glsl::ATTR_TEXCOORD);
    println!("uniforms:");
    println!("  {} (mat4)", glsl::UNIFORM_MODEL_VIEW);
    println!("  {} (mat4)", glsl::UNIFORM_PROJECTION);
    println!("  {} (mat4)", glsl::UNIFORM_NORMAL);
    println!("  {} (mat4)", glsl::UNIFORM_MODEL);
    println!("varyings:");
    println!("  {} (vec3)", glsl::VARYING_FRAG_POS);
    println!("  {} (vec3)", glsl::VARYING_NORMAL);
    println!("  {} (vec2)", glsl::VARYING_TEXCOORD);
    println!();
    println!("{}", glsl::vertex_shader_source());
}
