use std::rc::Rc;

use glow::HasContext;

use super::caps::{Capabilities, Feature, GlVersion};
use super::error::{GlError, GlResult};
use super::init::GlInit;
use crate::buffer::BufferPath;
use crate::logging;
use crate::math::Color;

/// Driver identification strings.
#[derive(Debug, Clone, Default)]
pub struct GlInfo {
    pub vendor: String,
    pub renderer: String,
    pub version: String,
    pub glsl_version: String,
}

struct Shared {
    gl: glow::Context,
    caps: Capabilities,
    buffer_path: BufferPath,
}

/// Handle to a current GL context with its detected capabilities.
///
/// Cloning is cheap; every object wrapper keeps a clone so it can release its
/// GL name on drop. The handle is `!Send`: GL objects must stay on the thread
/// that owns the context.
#[derive(Clone)]
pub struct Gl {
    shared: Rc<Shared>,
}

impl Gl {
    /// Wraps a freshly loaded context.
    ///
    /// The context must be current on the calling thread. Capabilities are
    /// probed here exactly once, the minimum version from `init` is enforced
    /// and the buffer path is chosen.
    pub fn new(mut gl: glow::Context, init: &GlInit) -> GlResult<Self> {
        let caps = Capabilities::probe(&gl);

        require_version(init.version, caps.version())?;

        if init.debug_output {
            if caps.has(Feature::DebugOutput) {
                logging::install_debug_output(&mut gl);
            } else {
                log::warn!("debug output requested but not supported by this context");
            }
        }

        let buffer_path = BufferPath::select(&caps, init.force_legacy_buffers);

        log::debug!(
            "caps: version {}, dsa={}, buffer_storage={}, debug_output={}, buffer path {:?}",
            caps.version(),
            caps.has(Feature::DirectStateAccess),
            caps.has(Feature::BufferStorage),
            caps.has(Feature::DebugOutput),
            buffer_path,
        );

        Ok(Self {
            shared: Rc::new(Shared {
                gl,
                caps,
                buffer_path,
            }),
        })
    }

    /// Returns the underlying `glow` context for calls not wrapped here.
    #[inline]
    pub fn raw(&self) -> &glow::Context {
        &self.shared.gl
    }

    #[inline]
    pub fn caps(&self) -> &Capabilities {
        &self.shared.caps
    }

    #[inline]
    pub fn buffer_path(&self) -> BufferPath {
        self.shared.buffer_path
    }

    /// Reads vendor, renderer and version strings from the driver.
    pub fn info(&self) -> GlInfo {
        let gl = self.raw();
        unsafe {
            GlInfo {
                vendor: gl.get_parameter_string(glow::VENDOR),
                renderer: gl.get_parameter_string(glow::RENDERER),
                version: gl.get_parameter_string(glow::VERSION),
                glsl_version: gl.get_parameter_string(glow::SHADING_LANGUAGE_VERSION),
            }
        }
    }

    /// Logs driver identification at info level.
    pub fn log_info(&self) {
        let info = self.info();
        log::info!("GL vendor:   {}", info.vendor);
        log::info!("GL renderer: {}", info.renderer);
        log::info!("GL version:  {}", info.version);
        log::info!("GLSL:        {}", info.glsl_version);
    }

    pub fn set_clear_color(&self, color: Color) {
        unsafe { self.raw().clear_color(color.r, color.g, color.b, color.a) }
    }

    /// Clears the color buffer of the current framebuffer.
    pub fn clear(&self) {
        unsafe { self.raw().clear(glow::COLOR_BUFFER_BIT) }
    }

    pub fn set_viewport(&self, width: i32, height: i32) {
        unsafe { self.raw().viewport(0, 0, width, height) }
    }

    /// Pops the oldest pending GL error, if any.
    pub fn check_error(&self) -> GlResult<()> {
        let code = unsafe { self.raw().get_error() };
        match GlError::from_code(code) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Pops every pending GL error, oldest first.
    ///
    /// Bounded: a lost context may report errors indefinitely.
    pub fn drain_errors(&self) -> Vec<u32> {
        let mut codes = Vec::new();
        for _ in 0..MAX_DRAINED_ERRORS {
            let code = unsafe { self.raw().get_error() };
            if code == glow::NO_ERROR {
                break;
            }
            codes.push(code);
        }
        codes
    }

    /// Drops errors left by earlier calls so the next check only sees `site`'s.
    pub(crate) fn discard_errors(&self, site: &str) {
        for code in self.drain_errors() {
            log::debug!("{site}: discarding earlier GL error {code:#06x}");
        }
    }
}

const MAX_DRAINED_ERRORS: usize = 16;

fn require_version(required: GlVersion, found: GlVersion) -> GlResult<()> {
    if found < required {
        log::error!(
            "OpenGL version does not match required version: expected {required}, current {found}"
        );
        return Err(GlError::UnsupportedVersion { required, found });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_or_equal_versions_pass() {
        assert!(require_version(GlVersion::new(3, 3), GlVersion::new(3, 3)).is_ok());
        assert!(require_version(GlVersion::new(3, 3), GlVersion::new(4, 6)).is_ok());
    }

    #[test]
    fn older_versions_are_rejected() {
        match require_version(GlVersion::new(4, 5), GlVersion::new(4, 1)) {
            Err(GlError::UnsupportedVersion { required, found }) => {
                assert_eq!(required, GlVersion::new(4, 5));
                assert_eq!(found, GlVersion::new(4, 1));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn info_defaults_are_empty() {
        let info = GlInfo::default();
        assert!(info.vendor.is_empty());
        assert!(info.glsl_version.is_empty());
    }
}
