use std::fmt;
use std::path::Path;

use glow::HasContext;

use crate::device::{Gl, GlError, GlResult};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Geometry,
    Compute,
}

impl ShaderStage {
    pub const fn to_gl(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
            ShaderStage::Geometry => glow::GEOMETRY_SHADER,
            ShaderStage::Compute => glow::COMPUTE_SHADER,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "VERTEX",
            ShaderStage::Fragment => "FRAGMENT",
            ShaderStage::Geometry => "GEOMETRY",
            ShaderStage::Compute => "COMPUTE",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A successfully compiled shader object, ready to be linked.
///
/// Dropping it deletes the shader object; programs it was linked into
/// are unaffected.
pub struct CompiledShader {
    gl: Gl,
    shader: glow::NativeShader,
    stage: ShaderStage,
}

impl CompiledShader {
    /// Compiles GLSL source for `stage`.
    ///
    /// On failure the driver info log is logged and carried in the error.
    pub fn from_source(gl: &Gl, stage: ShaderStage, src: &str) -> GlResult<Self> {
        let raw = gl.raw();

        let shader = unsafe { raw.create_shader(stage.to_gl()) }.map_err(|e| {
            log::error!("shader: glCreateShader failed for {stage}: {e}");
            GlError::Driver(e)
        })?;

        unsafe {
            raw.shader_source(shader, src);
            raw.compile_shader(shader);

            if !raw.get_shader_compile_status(shader) {
                let log = clean_info_log(raw.get_shader_info_log(shader));
                raw.delete_shader(shader);
                log::error!("shader: '{stage}' compilation failed:\n{log}");
                return Err(GlError::ShaderCompile { stage, log });
            }
        }

        Ok(Self {
            gl: gl.clone(),
            shader,
            stage,
        })
    }

    /// Reads a text file and compiles it.
    pub fn from_path(gl: &Gl, stage: ShaderStage, path: impl AsRef<Path>) -> GlResult<Self> {
        let path = path.as_ref();
        let src = read_source(path)?;

        Self::from_source(gl, stage, &src).inspect_err(|_| {
            log::error!("shader: compile failed: '{}'", path.display());
        })
    }

    #[inline]
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.shader.0.get()
    }

    #[inline]
    pub(crate) fn raw(&self) -> glow::NativeShader {
        self.shader
    }
}

impl Drop for CompiledShader {
    fn drop(&mut self) {
        unsafe { self.gl.raw().delete_shader(self.shader) }
    }
}

fn read_source(path: &Path) -> GlResult<String> {
    std::fs::read_to_string(path).map_err(|source| {
        log::error!("shader: read failed: '{}': {source}", path.display());
        GlError::ShaderIo {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Drivers pad logs with NULs and newlines; some return nothing at all.
pub(super) fn clean_info_log(log: String) -> String {
    let trimmed = log.trim_end_matches(['\0', '\n', '\r', ' ']);
    if trimmed.is_empty() {
        "(no info log)".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_names_and_enums() {
        assert_eq!(ShaderStage::Vertex.to_string(), "VERTEX");
        assert_eq!(ShaderStage::Fragment.name(), "FRAGMENT");
        assert_eq!(ShaderStage::Vertex.to_gl(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Geometry.to_gl(), glow::GEOMETRY_SHADER);
    }

    #[test]
    fn info_log_is_trimmed() {
        let log = clean_info_log("0:3(1): error: syntax error\n\0\0".to_string());
        assert_eq!(log, "0:3(1): error: syntax error");
    }

    #[test]
    fn empty_info_log_gets_placeholder() {
        assert_eq!(clean_info_log(String::new()), "(no info log)");
        assert_eq!(clean_info_log("\0\n".to_string()), "(no info log)");
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("gwr-missing-shader.vert");
        match read_source(&path) {
            Err(GlError::ShaderIo { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn source_is_read_verbatim() {
        let path = std::env::temp_dir().join(format!("gwr-stage-{}.frag", std::process::id()));
        let src = "#version 330 core\nvoid main() {}\n";
        std::fs::write(&path, src).unwrap();
        let read = read_source(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(read.unwrap(), src);
    }
}
