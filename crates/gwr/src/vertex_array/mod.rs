//! Vertex array objects and attribute layout.

mod array;
mod attrib;

pub use array::VertexArray;
pub use attrib::{AttribPath, AttribType, VertexAttrib};
