//! gwr: thin, safe wrappers over OpenGL objects plus a window/context runtime.
//!
//! GL objects (buffers, vertex arrays, shaders, textures) are owned handles
//! that release their GL name on drop. They hold a clone of the [`Gl`]
//! context handle and must stay on the thread owning that context.

pub mod buffer;
pub mod core;
pub mod device;
pub mod draw;
pub mod input;
pub mod logging;
pub mod math;
pub mod shader;
pub mod texture;
pub mod vertex_array;
pub mod window;

pub use buffer::{BufferUsage, ElementBuffer, VertexBuffer};
pub use device::{Gl, GlError, GlInit, GlResult, GlVersion};
pub use draw::{draw_arrays, draw_elements, draw_elements_all, Primitive};
pub use math::{Color, Vertex};
pub use shader::{Shader, ShaderStage, Uniform};
pub use texture::Texture;
pub use vertex_array::{VertexArray, VertexAttrib};

/// Re-exported so apps can match on window events without a direct winit dependency.
pub use winit;
