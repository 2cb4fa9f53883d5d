//! GLSL source emission for the Phong vertex stage.
//!
//! The binding names below are the wire contract with the host engine's
//! attribute/uniform lookup code. The two dialect templates express the same
//! transform; which one the crate exports is a build-time choice (crate
//! feature `es300`), mirroring how the original shader selected its
//! vocabulary with preprocessor macros.

/// Per-vertex position attribute, vec3, model space.
pub const ATTR_POSITION: &str = "aVertexPosition";
/// Per-vertex normal attribute, vec3, model space.
pub const ATTR_NORMAL: &str = "aVertexNormal";
/// Per-vertex texture coordinate attribute, vec2.
pub const ATTR_TEXCOORD: &str = "aTextureCoord";

/// Model-view matrix uniform, mat4.
pub const UNIFORM_MODEL_VIEW: &str = "uMVMatrix";
/// Projection matrix uniform, mat4.
pub const UNIFORM_PROJECTION: &str = "uPMatrix";
/// Normal matrix uniform, mat4; only its mat3 part is applied.
pub const UNIFORM_NORMAL: &str = "uNMatrix";
/// Model matrix uniform, mat4.
pub const UNIFORM_MODEL: &str = "uMMatrix";

/// Interpolated world-space position output, vec3.
pub const VARYING_FRAG_POS: &str = "vFragPos";
/// Interpolated world-space normal output, vec3.
pub const VARYING_NORMAL: &str = "vNormal";
/// Interpolated texture coordinate output, vec2.
pub const VARYING_TEXCOORD: &str = "vTexCoords";

const VERTEX_SHADER_WEBGL1: &str = r#"attribute vec3 aVertexPosition;
attribute vec3 aVertexNormal;
attribute vec2 aTextureCoord;

uniform mat4 uMVMatrix;
uniform mat4 uPMatrix;
uniform mat4 uNMatrix;
uniform mat4 uMMatrix;

varying vec3 vFragPos;
varying vec3 vNormal;
varying vec2 vTexCoords;

void main(void) {
    vFragPos = vec3(uMMatrix * vec4(aVertexPosition, 1.0));
    vNormal = mat3(uNMatrix) * aVertexNormal;
    vTexCoords = aTextureCoord;
    gl_Position = uPMatrix * uMVMatrix * vec4(aVertexPosition, 1.0);
}
"#;

const VERTEX_SHADER_ES300: &str = r#"#version 300 es
in vec3 aVertexPosition;
in vec3 aVertexNormal;
in vec2 aTextureCoord;

uniform mat4 uMVMatrix;
uniform mat4 uPMatrix;
uniform mat4 uNMatrix;
uniform mat4 uMMatrix;

out vec3 vFragPos;
out vec3 vNormal;
out vec2 vTexCoords;

void main(void) {
    vFragPos = vec3(uMMatrix * vec4(aVertexPosition, 1.0));
    vNormal = mat3(uNMatrix) * aVertexNormal;
    vTexCoords = aTextureCoord;
    gl_Position = uPMatrix * uMVMatrix * vec4(aVertexPosition, 1.0);
}
"#;

/// Returns the vertex shader source for the dialect this crate was built
/// for: GLSL ES 1.00 (WebGL1) by default, GLSL ES 3.00 with the `es300`
/// feature.
#[cfg(not(feature = "es300"))]
pub fn vertex_shader_source() -> &'static str {
    VERTEX_SHADER_WEBGL1
}

/// Returns the vertex shader source for the dialect this crate was built
/// for: GLSL ES 1.00 (WebGL1) by default, GLSL ES 3.00 with the `es300`
/// feature.
#[cfg(feature = "es300")]
pub fn vertex_shader_source() -> &'static str {
    VERTEX_SHADER_ES300
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_BINDINGS: [&str; 10] = [
        ATTR_POSITION,
        ATTR_NORMAL,
        ATTR_TEXCOORD,
        UNIFORM_MODEL_VIEW,
        UNIFORM_PROJECTION,
        UNIFORM_NORMAL,
        UNIFORM_MODEL,
        VARYING_FRAG_POS,
        VARYING_NORMAL,
        VARYING_TEXCOORD,
    ];

    #[test]
    fn both_templates_declare_every_binding() {
        for source in [VERTEX_SHADER_WEBGL1, VERTEX_SHADER_ES300] {
            for name in ALL_BINDINGS {
                assert!(source.contains(name), "missing binding `{name}`");
            }
        }
    }

    #[test]
    fn dialects_use_their_own_qualifiers() {
        assert!(VERTEX_SHADER_WEBGL1.contains("attribute vec3"));
        assert!(VERTEX_SHADER_WEBGL1.contains("varying vec3"));
        assert!(!VERTEX_SHADER_WEBGL1.contains("#version"));

        assert!(VERTEX_SHADER_ES300.starts_with("#version 300 es"));
        assert!(VERTEX_SHADER_ES300.contains("in vec3"));
        assert!(VERTEX_SHADER_ES300.contains("out vec3"));
        assert!(!VERTEX_SHADER_ES300.contains("attribute"));
        assert!(!VERTEX_SHADER_ES300.contains("varying"));
    }

    #[test]
    fn selected_template_matches_build_features() {
        let source = vertex_shader_source();
        if cfg!(feature = "es300") {
            assert!(source.starts_with("#version 300 es"));
        } else {
            assert!(source.contains("attribute"));
        }
    }

    #[test]
    fn normals_take_only_the_linear_part() {
        // The templates must apply mat3(uNMatrix), never the full mat4,
        // so normals cannot pick up a translation.
        for source in [VERTEX_SHADER_WEBGL1, VERTEX_SHADER_ES300] {
            assert!(source.contains("mat3(uNMatrix) * aVertexNormal"));
        }
    }
}
