//! Buffer objects.
//!
//! Creation and updates go through one of two backend paths chosen per
//! context (see [`BufferPath`]); the handle types themselves do not care
//! which one is active.

mod backend;
mod element;
mod usage;
mod vertex;

pub use backend::BufferPath;
pub use element::{ElementBuffer, IndexKind, IndexType};
pub use usage::BufferUsage;
pub use vertex::VertexBuffer;
