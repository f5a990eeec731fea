use glow::HasContext;

use super::attrib::{AttribPath, VertexAttrib};
use crate::buffer::{ElementBuffer, VertexBuffer};
use crate::device::{Gl, GlError, GlResult};

/// Vertex array object.
///
/// Attribute setup binds the array (and the source buffer) as needed and
/// unbinds the array afterwards.
pub struct VertexArray {
    gl: Gl,
    vao: glow::NativeVertexArray,
}

impl VertexArray {
    pub fn new(gl: &Gl) -> GlResult<Self> {
        let vao = unsafe { gl.raw().create_vertex_array() }.map_err(|e| {
            log::error!("vertex array: failed to create vertex array: {e}");
            GlError::Driver(e)
        })?;

        Ok(Self { gl: gl.clone(), vao })
    }

    pub fn bind(&self) {
        unsafe { self.gl.raw().bind_vertex_array(Some(self.vao)) }
    }

    pub fn unbind(gl: &Gl) {
        unsafe { gl.raw().bind_vertex_array(None) }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.vao.0.get()
    }

    #[inline]
    pub fn raw(&self) -> glow::NativeVertexArray {
        self.vao
    }

    pub fn enable_attrib(&self, index: u32) {
        self.bind();
        unsafe { self.gl.raw().enable_vertex_attrib_array(index) }
    }

    pub fn disable_attrib(&self, index: u32) {
        self.bind();
        unsafe { self.gl.raw().disable_vertex_attrib_array(index) }
    }

    /// Sets the instancing divisor; 0 means per-vertex.
    pub fn set_divisor(&self, index: u32, divisor: u32) {
        self.bind();
        unsafe { self.gl.raw().vertex_attrib_divisor(index, divisor) }
    }

    /// Float attribute sourced from `vbo` (optionally normalized integers).
    pub fn attrib_pointer_f(&self, vbo: &VertexBuffer, attrib: VertexAttrib) -> GlResult<()> {
        self.attrib_pointer(vbo, attrib, AttribPath::Float)
    }

    /// Pure integer attribute (`ivec*`/`uvec*` in the shader).
    pub fn attrib_pointer_i(&self, vbo: &VertexBuffer, attrib: VertexAttrib) -> GlResult<()> {
        self.attrib_pointer(vbo, attrib, AttribPath::Integer)
    }

    /// 64-bit double attribute (`dvec*` in the shader).
    pub fn attrib_pointer_l(&self, vbo: &VertexBuffer, attrib: VertexAttrib) -> GlResult<()> {
        self.attrib_pointer(vbo, attrib, AttribPath::Long)
    }

    /// Sets several float attributes from the same buffer.
    pub fn attrib_pointers_f(&self, vbo: &VertexBuffer, attribs: &[VertexAttrib]) -> GlResult<()> {
        attribs
            .iter()
            .try_for_each(|a| self.attrib_pointer(vbo, *a, AttribPath::Float))
    }

    /// Records `ebo` as this array's index buffer.
    pub fn set_element_buffer(&self, ebo: &ElementBuffer) {
        self.bind();
        ebo.bind();
        VertexArray::unbind(&self.gl);
    }

    fn attrib_pointer(
        &self,
        vbo: &VertexBuffer,
        attrib: VertexAttrib,
        path: AttribPath,
    ) -> GlResult<()> {
        if let Err(reason) = attrib.validate(path) {
            log::error!(
                "vertex array: attribute {} rejected ({path:?}): {reason}",
                attrib.index
            );
            return Err(GlError::InvalidAttrib(reason));
        }

        let gl = self.gl.raw();
        let VertexAttrib {
            index,
            components,
            ty,
            normalized,
            stride,
            offset,
        } = attrib;

        self.bind();
        vbo.bind();
        unsafe {
            match path {
                AttribPath::Float => {
                    gl.vertex_attrib_pointer_f32(index, components, ty.to_gl(), normalized, stride, offset)
                }
                AttribPath::Integer => {
                    gl.vertex_attrib_pointer_i32(index, components, ty.to_gl(), stride, offset)
                }
                AttribPath::Long => {
                    gl.vertex_attrib_pointer_f64(index, components, ty.to_gl(), stride, offset)
                }
            }
            gl.enable_vertex_attrib_array(index);
        }
        VertexArray::unbind(&self.gl);

        Ok(())
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe { self.gl.raw().delete_vertex_array(self.vao) }
    }
}
