use super::caps::GlVersion;

/// Initialization parameters for the GL layer.
///
/// Keep this structure small. Add flags only when a concrete driver or
/// platform requirement exists.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Context version requested from the platform and required from the driver.
    ///
    /// Context creation fails when the driver reports an older version.
    pub version: GlVersion,

    /// Request a core profile context (forward compatible on macOS).
    pub core_profile: bool,

    /// Wait for vertical blank on swap.
    pub vsync: bool,

    /// Forward driver debug messages to the `log` facade when supported.
    pub debug_output: bool,

    /// Always use the bind-then-modify buffer path, even when DSA is available.
    ///
    /// Useful for reproducing driver issues seen on older hardware.
    pub force_legacy_buffers: bool,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            version: GlVersion::new(3, 3),
            core_profile: true,
            vsync: true,
            debug_output: cfg!(debug_assertions),
            force_legacy_buffers: false,
        }
    }
}
