use bytemuck::Pod;
use glow::HasContext;

use super::backend;
use super::BufferUsage;
use crate::device::{Gl, GlResult};

/// Vertex attribute data (`GL_ARRAY_BUFFER`).
///
/// The GL name is released when the handle is dropped.
pub struct VertexBuffer {
    gl: Gl,
    buffer: glow::NativeBuffer,
    size: usize,
    usage: BufferUsage,
}

impl VertexBuffer {
    /// Creates a buffer holding `data`.
    pub fn new<T: Pod>(gl: &Gl, data: &[T], usage: BufferUsage) -> GlResult<Self> {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let buffer = backend::allocate(gl, glow::ARRAY_BUFFER, bytes, usage, "vertex buffer")?;

        Ok(Self {
            gl: gl.clone(),
            buffer,
            size: bytes.len(),
            usage,
        })
    }

    /// Creates a zero-filled buffer of `bytes` bytes, to be filled later.
    pub fn with_size(gl: &Gl, bytes: usize, usage: BufferUsage) -> GlResult<Self> {
        backend::require_data(bytes, "vertex buffer")?;
        Self::new(gl, &vec![0u8; bytes], usage)
    }

    pub fn bind(&self) {
        unsafe { self.gl.raw().bind_buffer(glow::ARRAY_BUFFER, Some(self.buffer)) }
    }

    pub fn unbind(gl: &Gl) {
        unsafe { gl.raw().bind_buffer(glow::ARRAY_BUFFER, None) }
    }

    /// Replaces the data store, keeping the creation usage hint.
    ///
    /// The recorded size only changes when the upload succeeds.
    pub fn set_data<T: Pod>(&mut self, data: &[T]) -> GlResult<()> {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        backend::require_data(bytes.len(), "vertex buffer")?;

        backend::store(
            &self.gl,
            glow::ARRAY_BUFFER,
            self.buffer,
            bytes,
            self.usage,
            "vertex buffer",
        )?;
        self.size = bytes.len();
        Ok(())
    }

    /// GL object name.
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

    #[inline]
    pub fn usage(&self) -> BufferUsage {
        self.usage
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe { self.gl.raw().delete_buffer(self.buffer) }
    }
}
