pub mod batch;
pub mod glsl;
pub mod shaders;
