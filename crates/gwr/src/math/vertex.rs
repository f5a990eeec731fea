use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};

use crate::vertex_array::{AttribType, VertexAttrib};

/// Interleaved position / color / texture coordinate vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub color: [f32; 3],
    pub tex_coord: [f32; 2],
}

impl Vertex {
    pub const STRIDE: i32 = size_of::<Vertex>() as i32;

    #[inline]
    pub const fn new(pos: [f32; 3], color: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self {
            pos,
            color,
            tex_coord,
        }
    }

    /// Layout at locations 0 (pos), 1 (color), 2 (tex_coord).
    pub const fn attribs() -> [VertexAttrib; 3] {
        [
            VertexAttrib::new(0, 3, AttribType::Float)
                .stride(Self::STRIDE)
                .offset(offset_of!(Vertex, pos) as i32),
            VertexAttrib::new(1, 3, AttribType::Float)
                .stride(Self::STRIDE)
                .offset(offset_of!(Vertex, color) as i32),
            VertexAttrib::new(2, 2, AttribType::Float)
                .stride(Self::STRIDE)
                .offset(offset_of!(Vertex, tex_coord) as i32),
        ]
    }
}
