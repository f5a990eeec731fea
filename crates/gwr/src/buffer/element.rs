use bytemuck::Pod;
use glow::HasContext;

use super::backend::{self, BufferPath};
use super::BufferUsage;
use crate::device::{Gl, GlResult};

/// Index element width.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum IndexKind {
    U8,
    U16,
    U32,
}

impl IndexKind {
    pub const fn to_gl(self) -> u32 {
        match self {
            IndexKind::U8 => glow::UNSIGNED_BYTE,
            IndexKind::U16 => glow::UNSIGNED_SHORT,
            IndexKind::U32 => glow::UNSIGNED_INT,
        }
    }

    pub const fn size_bytes(self) -> usize {
        match self {
            IndexKind::U8 => 1,
            IndexKind::U16 => 2,
            IndexKind::U32 => 4,
        }
    }
}

/// Integer types usable as element indices.
pub trait IndexType: Pod {
    const KIND: IndexKind;
}

impl IndexType for u8 {
    const KIND: IndexKind = IndexKind::U8;
}

impl IndexType for u16 {
    const KIND: IndexKind = IndexKind::U16;
}

impl IndexType for u32 {
    const KIND: IndexKind = IndexKind::U32;
}

/// Index data (`GL_ELEMENT_ARRAY_BUFFER`).
///
/// Tracks the index count and width alongside the byte size so draw calls
/// never have to re-derive them.
pub struct ElementBuffer {
    gl: Gl,
    buffer: glow::NativeBuffer,
    size: usize,
    count: usize,
    kind: IndexKind,
    usage: BufferUsage,
}

impl ElementBuffer {
    pub fn new<I: IndexType>(gl: &Gl, indices: &[I], usage: BufferUsage) -> GlResult<Self> {
        let bytes: &[u8] = bytemuck::cast_slice(indices);
        detach_vertex_array(gl);
        let buffer =
            backend::allocate(gl, glow::ELEMENT_ARRAY_BUFFER, bytes, usage, "element buffer")?;

        Ok(Self {
            gl: gl.clone(),
            buffer,
            size: bytes.len(),
            count: indices.len(),
            kind: I::KIND,
            usage,
        })
    }

    pub fn bind(&self) {
        unsafe {
            self.gl
                .raw()
                .bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(self.buffer))
        }
    }

    pub fn unbind(gl: &Gl) {
        unsafe { gl.raw().bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None) }
    }

    /// Replaces the index data. The index width follows the new slice type.
    pub fn set_data<I: IndexType>(&mut self, indices: &[I]) -> GlResult<()> {
        let bytes: &[u8] = bytemuck::cast_slice(indices);
        backend::require_data(bytes.len(), "element buffer")?;

        detach_vertex_array(&self.gl);
        backend::store(
            &self.gl,
            glow::ELEMENT_ARRAY_BUFFER,
            self.buffer,
            bytes,
            self.usage,
            "element buffer",
        )?;

        self.size = bytes.len();
        self.count = indices.len();
        self.kind = I::KIND;
        Ok(())
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.buffer.0.get()
    }

    #[inline]
    pub fn raw(&self) -> glow::NativeBuffer {
        self.buffer
    }

    /// Size of the data store in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of indices.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn index_kind(&self) -> IndexKind {
        self.kind
    }

    /// GL enum of the index type (`GL_UNSIGNED_INT` etc.).
    #[inline]
    pub fn index_type(&self) -> u32 {
        self.kind.to_gl()
    }

    #[inline]
    pub fn usage(&self) -> BufferUsage {
        self.usage
    }
}

impl Drop for ElementBuffer {
    fn drop(&mut self) {
        unsafe { self.gl.raw().delete_buffer(self.buffer) }
    }
}

/// The element binding is vertex array state: binding through the legacy
/// path while a VAO is bound would overwrite (and then clear) its index buffer.
fn detach_vertex_array(gl: &Gl) {
    if gl.buffer_path() == BufferPath::BindModify {
        unsafe { gl.raw().bind_vertex_array(None) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_kinds_match_type_widths() {
        assert_eq!(<u8 as IndexType>::KIND.size_bytes(), std::mem::size_of::<u8>());
        assert_eq!(<u16 as IndexType>::KIND.size_bytes(), std::mem::size_of::<u16>());
        assert_eq!(<u32 as IndexType>::KIND.size_bytes(), std::mem::size_of::<u32>());
    }

    #[test]
    fn index_kinds_map_to_gl() {
        assert_eq!(IndexKind::U8.to_gl(), glow::UNSIGNED_BYTE);
        assert_eq!(IndexKind::U16.to_gl(), glow::UNSIGNED_SHORT);
        assert_eq!(IndexKind::U32.to_gl(), glow::UNSIGNED_INT);
    }
}
