use std::collections::HashSet;
use std::fmt;

use glow::HasContext;

/// OpenGL context version.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GlVersion {
    pub major: u32,
    pub minor: u32,
}

impl GlVersion {
    #[inline]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    #[inline]
    pub fn at_least(self, major: u32, minor: u32) -> bool {
        self >= Self::new(major, minor)
    }
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Optional driver features the wrappers care about.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Feature {
    DebugOutput,
    DirectStateAccess,
    BufferStorage,
}

/// Capabilities detected once per context.
///
/// Detection happens when the context is wrapped; afterwards the values are
/// read-only for the lifetime of the context.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Capabilities {
    version: GlVersion,
    embedded: bool,
    debug_output: bool,
    direct_state_access: bool,
    buffer_storage: bool,
}

impl Capabilities {
    /// Derives feature flags from a version and an extension name set.
    ///
    /// Each feature is available either through core promotion or through
    /// its ARB/KHR extension. ES contexts never use the DSA path.
    pub fn detect(version: GlVersion, embedded: bool, extensions: &HashSet<String>) -> Self {
        let has = |name: &str| extensions.contains(name);

        let direct_state_access =
            !embedded && (version.at_least(4, 5) || has("GL_ARB_direct_state_access"));
        let buffer_storage = if embedded {
            has("GL_EXT_buffer_storage")
        } else {
            version.at_least(4, 4) || has("GL_ARB_buffer_storage")
        };
        let debug_output = (!embedded && version.at_least(4, 3))
            || (embedded && version.at_least(3, 2))
            || has("GL_KHR_debug")
            || has("GL_ARB_debug_output");

        Self {
            version,
            embedded,
            debug_output,
            direct_state_access,
            buffer_storage,
        }
    }

    /// Queries the live context.
    pub fn probe(gl: &glow::Context) -> Self {
        let v = gl.version();
        let version = GlVersion::new(v.major, v.minor);
        Self::detect(version, v.is_embedded, gl.supported_extensions())
    }

    #[inline]
    pub fn version(&self) -> GlVersion {
        self.version
    }

    #[inline]
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    pub fn has(&self, feature: Feature) -> bool {
        match feature {
            Feature::DebugOutput => self.debug_output,
            Feature::DirectStateAccess => self.direct_state_access,
            Feature::BufferStorage => self.buffer_storage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn version_ordering() {
        assert!(GlVersion::new(4, 6).at_least(4, 5));
        assert!(GlVersion::new(4, 5).at_least(4, 5));
        assert!(!GlVersion::new(4, 1).at_least(4, 5));
        assert!(GlVersion::new(5, 0).at_least(4, 6));
        assert_eq!(GlVersion::new(3, 3).to_string(), "3.3");
    }

    // ── core promotion ────────────────────────────────────────────────────

    #[test]
    fn gl46_has_everything() {
        let caps = Capabilities::detect(GlVersion::new(4, 6), false, &exts(&[]));
        assert!(caps.has(Feature::DirectStateAccess));
        assert!(caps.has(Feature::BufferStorage));
        assert!(caps.has(Feature::DebugOutput));
    }

    #[test]
    fn gl43_has_debug_only() {
        let caps = Capabilities::detect(GlVersion::new(4, 3), false, &exts(&[]));
        assert!(caps.has(Feature::DebugOutput));
        assert!(!caps.has(Feature::BufferStorage));
        assert!(!caps.has(Feature::DirectStateAccess));
    }

    #[test]
    fn gl33_has_nothing() {
        let caps = Capabilities::detect(GlVersion::new(3, 3), false, &exts(&[]));
        assert!(!caps.has(Feature::DebugOutput));
        assert!(!caps.has(Feature::BufferStorage));
        assert!(!caps.has(Feature::DirectStateAccess));
    }

    // ── extensions ────────────────────────────────────────────────────────

    #[test]
    fn extensions_enable_features_on_old_contexts() {
        let caps = Capabilities::detect(
            GlVersion::new(3, 3),
            false,
            &exts(&["GL_ARB_direct_state_access", "GL_ARB_buffer_storage", "GL_KHR_debug"]),
        );
        assert!(caps.has(Feature::DirectStateAccess));
        assert!(caps.has(Feature::BufferStorage));
        assert!(caps.has(Feature::DebugOutput));
    }

    #[test]
    fn arb_debug_output_counts_as_debug_output() {
        let caps = Capabilities::detect(GlVersion::new(4, 1), false, &exts(&["GL_ARB_debug_output"]));
        assert!(caps.has(Feature::DebugOutput));
    }

    #[test]
    fn embedded_contexts_never_use_dsa() {
        let caps = Capabilities::detect(
            GlVersion::new(3, 2),
            true,
            &exts(&["GL_ARB_direct_state_access"]),
        );
        assert!(!caps.has(Feature::DirectStateAccess));
        assert!(caps.has(Feature::DebugOutput));
        assert!(caps.is_embedded());
    }
}
