use std::path::Path;

use glow::HasContext;

use super::stage::{clean_info_log, CompiledShader, ShaderStage};
use super::uniform::Uniform;
use super::UniformLocation;
use crate::device::{Gl, GlError, GlResult};

/// Linked shader program.
pub struct Shader {
    gl: Gl,
    program: glow::NativeProgram,
}

impl Shader {
    /// Links a vertex + fragment pair.
    pub fn link(gl: &Gl, vertex: &CompiledShader, fragment: &CompiledShader) -> GlResult<Self> {
        Self::link_stages(gl, &[vertex, fragment])
    }

    /// Links any set of compiled stages.
    ///
    /// Stages are detached after linking so they can be deleted independently.
    pub fn link_stages(gl: &Gl, stages: &[&CompiledShader]) -> GlResult<Self> {
        let raw = gl.raw();

        let program = unsafe { raw.create_program() }.map_err(|e| {
            log::error!("shader: glCreateProgram failed: {e}");
            GlError::Driver(e)
        })?;

        unsafe {
            for stage in stages {
                raw.attach_shader(program, stage.raw());
            }
            raw.link_program(program);
            for stage in stages {
                raw.detach_shader(program, stage.raw());
            }

            if !raw.get_program_link_status(program) {
                let log = clean_info_log(raw.get_program_info_log(program));
                raw.delete_program(program);
                log::error!("shader: program linking failed:\n{log}");
                return Err(GlError::ProgramLink { log });
            }
        }

        Ok(Self {
            gl: gl.clone(),
            program,
        })
    }

    /// Compiles and links vertex + fragment sources.
    pub fn from_sources(gl: &Gl, vertex_src: &str, fragment_src: &str) -> GlResult<Self> {
        let vs = CompiledShader::from_source(gl, ShaderStage::Vertex, vertex_src)?;
        let fs = CompiledShader::from_source(gl, ShaderStage::Fragment, fragment_src)?;
        Self::link(gl, &vs, &fs)
    }

    /// Reads, compiles and links vertex + fragment shader files.
    pub fn from_paths(
        gl: &Gl,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> GlResult<Self> {
        let vs = CompiledShader::from_path(gl, ShaderStage::Vertex, vertex_path)?;
        let fs = CompiledShader::from_path(gl, ShaderStage::Fragment, fragment_path)?;
        Self::link(gl, &vs, &fs)
    }

    /// Re-queries the link status from the driver.
    pub fn is_valid(&self) -> bool {
        unsafe { self.gl.raw().get_program_link_status(self.program) }
    }

    /// Makes this the active program.
    pub fn bind(&self) {
        unsafe { self.gl.raw().use_program(Some(self.program)) }
    }

    pub fn unbind(gl: &Gl) {
        unsafe { gl.raw().use_program(None) }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.program.0.get()
    }

    #[inline]
    pub fn raw(&self) -> glow::NativeProgram {
        self.program
    }

    /// `None` if the uniform does not exist or was optimized out.
    pub fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        unsafe { self.gl.raw().get_uniform_location(self.program, name) }
    }

    /// Uploads `value` at `loc`. Leaves this program bound.
    pub fn set_uniform<'a>(&self, loc: &UniformLocation, value: impl Into<Uniform<'a>>) {
        let value = value.into();
        if value.count() == 0 {
            log::warn!("shader: empty uniform upload ({:?}) skipped", value.kind());
            return;
        }

        self.bind();
        value.upload(self.gl.raw(), loc);
    }

    /// Looks up `name` and uploads `value`. Leaves this program bound.
    pub fn set_uniform_by_name<'a>(
        &self,
        name: &str,
        value: impl Into<Uniform<'a>>,
    ) -> GlResult<()> {
        let Some(loc) = self.uniform_location(name) else {
            log::warn!("shader: uniform '{name}' not found");
            return Err(GlError::UniformNotFound(name.to_string()));
        };

        self.set_uniform(&loc, value);
        Ok(())
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe { self.gl.raw().delete_program(self.program) }
    }
}
