use std::path::PathBuf;

use super::caps::GlVersion;
use crate::shader::ShaderStage;

/// Errors raised by GL object wrappers.
///
/// Every variant is logged at the failure site before it is returned, so
/// callers may simply propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum GlError {
    /// The driver refused to create an object (glow reports these as strings).
    #[error("driver error: {0}")]
    Driver(String),

    #[error("invalid buffer size: {0} bytes")]
    InvalidSize(usize),

    #[error("buffer allocation mismatch: expected {expected} bytes, driver reports {actual}")]
    AllocationMismatch { expected: usize, actual: usize },

    #[error("GL_OUT_OF_MEMORY")]
    OutOfMemory,

    #[error("GL error 0x{0:04x}")]
    Code(u32),

    #[error("{stage} shader compilation failed:\n{log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("program linking failed:\n{log}")]
    ProgramLink { log: String },

    #[error("failed to read shader source '{}'", path.display())]
    ShaderIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load texture '{}'", path.display())]
    TextureLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid texture dimensions {width}x{height}")]
    TextureSize { width: u32, height: u32 },

    #[error("OpenGL {required} required, context provides {found}")]
    UnsupportedVersion { required: GlVersion, found: GlVersion },

    #[error("uniform '{0}' not found")]
    UniformNotFound(String),

    #[error("invalid vertex attribute: {0}")]
    InvalidAttrib(&'static str),
}

pub type GlResult<T> = Result<T, GlError>;

impl GlError {
    /// Maps a `glGetError` code; `None` for `GL_NO_ERROR`.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            glow::NO_ERROR => None,
            glow::OUT_OF_MEMORY => Some(GlError::OutOfMemory),
            other => Some(GlError::Code(other)),
        }
    }
}

/// `OutOfMemory` if any drained code reports it.
pub(crate) fn out_of_memory_in(codes: &[u32]) -> GlResult<()> {
    if codes.contains(&glow::OUT_OF_MEMORY) {
        Err(GlError::OutOfMemory)
    } else {
        Ok(())
    }
}

/// First error among drained codes, oldest first.
pub(crate) fn first_error_in(codes: &[u32]) -> GlResult<()> {
    match codes.iter().find_map(|&c| GlError::from_code(c)) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_variants() {
        assert!(GlError::from_code(glow::NO_ERROR).is_none());
        assert!(matches!(GlError::from_code(glow::OUT_OF_MEMORY), Some(GlError::OutOfMemory)));
        assert!(matches!(
            GlError::from_code(glow::INVALID_OPERATION),
            Some(GlError::Code(glow::INVALID_OPERATION))
        ));
    }

    #[test]
    fn only_out_of_memory_fails_uploads() {
        assert!(out_of_memory_in(&[]).is_ok());
        assert!(out_of_memory_in(&[glow::INVALID_ENUM, glow::INVALID_OPERATION]).is_ok());
        assert!(matches!(
            out_of_memory_in(&[glow::INVALID_OPERATION, glow::OUT_OF_MEMORY]),
            Err(GlError::OutOfMemory)
        ));
    }

    #[test]
    fn first_error_is_oldest() {
        assert!(first_error_in(&[]).is_ok());
        assert!(matches!(
            first_error_in(&[glow::INVALID_VALUE, glow::OUT_OF_MEMORY]),
            Err(GlError::Code(glow::INVALID_VALUE))
        ));
    }

    #[test]
    fn version_error_names_both_versions() {
        let err = GlError::UnsupportedVersion {
            required: GlVersion::new(4, 5),
            found: GlVersion::new(3, 3),
        };
        assert_eq!(err.to_string(), "OpenGL 4.5 required, context provides 3.3");
    }
}
