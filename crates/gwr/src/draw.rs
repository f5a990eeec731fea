//! One-call draw helpers: bind program + vertex array, draw, unbind.

use glow::HasContext;

use crate::buffer::ElementBuffer;
use crate::device::Gl;
use crate::shader::Shader;
use crate::vertex_array::VertexArray;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Primitive {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    #[default]
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl Primitive {
    pub const fn to_gl(self) -> u32 {
        match self {
            Primitive::Points => glow::POINTS,
            Primitive::Lines => glow::LINES,
            Primitive::LineStrip => glow::LINE_STRIP,
            Primitive::LineLoop => glow::LINE_LOOP,
            Primitive::Triangles => glow::TRIANGLES,
            Primitive::TriangleStrip => glow::TRIANGLE_STRIP,
            Primitive::TriangleFan => glow::TRIANGLE_FAN,
        }
    }
}

/// Draws `count` vertices starting at `first`.
pub fn draw_arrays(
    gl: &Gl,
    mode: Primitive,
    vao: &VertexArray,
    shader: &Shader,
    first: i32,
    count: i32,
) {
    shader.bind();
    vao.bind();
    unsafe { gl.raw().draw_arrays(mode.to_gl(), first, count) };
    VertexArray::unbind(gl);
}

/// Draws `count` indices of `ebo` starting at byte `offset`.
///
/// `count` is clamped to the indices available past `offset`.
pub fn draw_elements(
    gl: &Gl,
    mode: Primitive,
    vao: &VertexArray,
    shader: &Shader,
    ebo: &ElementBuffer,
    count: usize,
    offset: usize,
) {
    let available = available_indices(ebo.count(), ebo.index_kind().size_bytes(), offset);
    let count = if count > available {
        log::warn!("draw_elements: count {count} exceeds {available} available indices; clamped");
        available
    } else {
        count
    };
    if count == 0 {
        return;
    }

    shader.bind();
    vao.bind();
    ebo.bind();
    unsafe {
        gl.raw()
            .draw_elements(mode.to_gl(), count as i32, ebo.index_type(), offset as i32)
    };
    VertexArray::unbind(gl);
}

/// Draws every index in `ebo`.
pub fn draw_elements_all(
    gl: &Gl,
    mode: Primitive,
    vao: &VertexArray,
    shader: &Shader,
    ebo: &ElementBuffer,
) {
    draw_elements(gl, mode, vao, shader, ebo, ebo.count(), 0);
}

fn available_indices(count: usize, index_size: usize, offset: usize) -> usize {
    count.saturating_sub(offset / index_size.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_mapping() {
        assert_eq!(Primitive::default().to_gl(), glow::TRIANGLES);
        assert_eq!(Primitive::LineStrip.to_gl(), glow::LINE_STRIP);
        assert_eq!(Primitive::TriangleFan.to_gl(), glow::TRIANGLE_FAN);
    }

    #[test]
    fn available_indices_accounts_for_offset() {
        assert_eq!(available_indices(6, 4, 0), 6);
        assert_eq!(available_indices(6, 4, 12), 3);
        assert_eq!(available_indices(6, 2, 12), 0);
        assert_eq!(available_indices(6, 4, 100), 0);
    }
}
