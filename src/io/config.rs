use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Demo-scene description: one camera, one placed object.
/// The mesh itself is the built-in test triangle; this config only decides
/// the matrices the vertex stage is fed.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub object: ObjectConfig,
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_cam_position")]
    pub position: [f32; 3],
    #[serde(default)]
    pub target: [f32; 3],
    #[serde(default = "default_up")]
    pub up: [f32; 3],
    #[serde(default = "default_fov")]
    pub fov: f32,
    #[serde(default = "default_projection")]
    pub projection: String,
    #[serde(default = "default_ortho_height")]
    pub ortho_height: f32,
    #[serde(default = "default_aspect")]
    pub aspect: f32,
    #[serde(default = "default_near")]
    pub near: f32,
    #[serde(default = "default_far")]
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: default_cam_position(),
            target: [0.0, 0.0, 0.0],
            up: default_up(),
            fov: default_fov(),
            projection: default_projection(),
            ortho_height: default_ortho_height(),
            aspect: default_aspect(),
            near: default_near(),
            far: default_far(),
        }
    }
}

fn default_cam_position() -> [f32; 3] {
    [0.0, 0.5, 3.0]
}
fn default_up() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}
fn default_fov() -> f32 {
    45.0
}
fn default_projection() -> String {
    "perspective".to_string()
}
fn default_ortho_height() -> f32 {
    2.0
}
fn default_aspect() -> f32 {
    4.0 / 3.0
}
fn default_near() -> f32 {
    0.1
}
fn default_far() -> f32 {
    100.0
}

#[derive(Debug, Deserialize)]
pub struct ObjectConfig {
    // --- Transform ---
    #[serde(default)]
    pub position: [f32; 3],
    /// Euler rotation in degrees, applied Z * Y * X.
    #[serde(default)]
    pub rotation: [f32; 3],
    #[serde(default = "default_scale")]
    pub scale: [f32; 3],
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            scale: default_scale(),
        }
    }
}

fn default_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse TOML: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.camera.position, [0.0, 0.5, 3.0]);
        assert_eq!(config.camera.projection, "perspective");
        assert_eq!(config.object.scale, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn partial_sections_keep_field_defaults() {
        let toml_str = r#"
            [camera]
            projection = "orthographic"
            ortho_height = 4.0

            [object]
            rotation = [0.0, 30.0, 0.0]
            scale = [2.0, 1.0, 1.0]
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.camera.projection, "orthographic");
        assert_eq!(config.camera.ortho_height, 4.0);
        assert_eq!(config.camera.near, 0.1);
        assert_eq!(config.object.rotation, [0.0, 30.0, 0.0]);
        assert_eq!(config.object.position, [0.0, 0.0, 0.0]);
    }
}
