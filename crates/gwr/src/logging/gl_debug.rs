use glow::HasContext;
use log::Level;

/// Maps a driver debug message to a log level.
pub fn severity_level(kind: u32, severity: u32) -> Level {
    if kind == glow::DEBUG_TYPE_ERROR {
        return Level::Error;
    }

    match severity {
        glow::DEBUG_SEVERITY_HIGH => Level::Error,
        glow::DEBUG_SEVERITY_MEDIUM => Level::Warn,
        glow::DEBUG_SEVERITY_LOW => Level::Debug,
        glow::DEBUG_SEVERITY_NOTIFICATION => Level::Trace,
        _ => Level::Debug,
    }
}

fn forward_debug_message(source: u32, kind: u32, id: u32, severity: u32, message: &str) {
    let level = severity_level(kind, severity);
    // Some drivers emit a notification for every buffer upload.
    if !log::log_enabled!(target: "gwr::gl", level) {
        return;
    }

    log::log!(
        target: "gwr::gl",
        level,
        "source={source:#x} type={kind:#x} id={id}: {message}"
    );
}

/// Routes `KHR_debug` messages into the `log` facade.
///
/// Must be called while the context is current and before it is shared.
pub(crate) fn install_debug_output(gl: &mut glow::Context) {
    unsafe {
        gl.enable(glow::DEBUG_OUTPUT);
        gl.enable(glow::DEBUG_OUTPUT_SYNCHRONOUS);
        gl.debug_message_callback(forward_debug_message);
    }
    log::debug!("GL debug output enabled");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_type_is_always_error() {
        assert_eq!(
            severity_level(glow::DEBUG_TYPE_ERROR, glow::DEBUG_SEVERITY_LOW),
            Level::Error
        );
    }

    #[test]
    fn severities_map_to_levels() {
        let other = glow::DEBUG_TYPE_PERFORMANCE;
        assert_eq!(severity_level(other, glow::DEBUG_SEVERITY_HIGH), Level::Error);
        assert_eq!(severity_level(other, glow::DEBUG_SEVERITY_MEDIUM), Level::Warn);
        assert_eq!(severity_level(other, glow::DEBUG_SEVERITY_LOW), Level::Debug);
        assert_eq!(severity_level(other, glow::DEBUG_SEVERITY_NOTIFICATION), Level::Trace);
        assert_eq!(severity_level(other, 0xdead), Level::Debug);
    }
}
