//! Shader objects, programs and uniform uploads.

mod program;
mod stage;
mod uniform;

pub use program::Shader;
pub use stage::{CompiledShader, ShaderStage};
pub use uniform::{Uniform, UniformKind};

/// Uniform location within a linked program.
pub type UniformLocation = glow::NativeUniformLocation;
