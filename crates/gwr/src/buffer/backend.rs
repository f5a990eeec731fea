use glow::HasContext;

use super::BufferUsage;
use crate::device::{out_of_memory_in, Capabilities, Feature, Gl, GlError, GlResult};

/// How buffer storage is created and modified.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferPath {
    /// Direct state access: objects are created and filled by name without
    /// touching any binding point.
    Direct,
    /// Legacy path: bind to the target, modify, unbind.
    BindModify,
}

impl BufferPath {
    /// Picks the path for a context. Evaluated once when the context is wrapped.
    pub fn select(caps: &Capabilities, force_legacy: bool) -> Self {
        if !force_legacy && caps.has(Feature::DirectStateAccess) {
            BufferPath::Direct
        } else {
            BufferPath::BindModify
        }
    }
}

/// Creates a buffer object and fills it with `data`.
///
/// On failure the GL name is released before returning.
pub(super) fn allocate(
    gl: &Gl,
    target: u32,
    data: &[u8],
    usage: BufferUsage,
    what: &str,
) -> GlResult<glow::NativeBuffer> {
    require_data(data.len(), what)?;

    let raw = gl.raw();
    let created = unsafe {
        match gl.buffer_path() {
            BufferPath::Direct => raw.create_named_buffer(),
            BufferPath::BindModify => raw.create_buffer(),
        }
    };
    let buffer = created.map_err(|e| {
        log::error!("{what}: failed to create buffer object: {e}");
        GlError::Driver(e)
    })?;

    if let Err(err) = store(gl, target, buffer, data, usage, what) {
        unsafe { raw.delete_buffer(buffer) };
        return Err(err);
    }

    Ok(buffer)
}

/// Replaces the whole data store of `buffer`.
pub(super) fn store(
    gl: &Gl,
    target: u32,
    buffer: glow::NativeBuffer,
    data: &[u8],
    usage: BufferUsage,
    what: &str,
) -> GlResult<()> {
    let raw = gl.raw();

    let result = match gl.buffer_path() {
        BufferPath::Direct => {
            gl.discard_errors(what);
            unsafe { raw.named_buffer_data_u8_slice(buffer, data, usage.to_gl()) };
            // Named uploads report allocation failure through the error queue only.
            let codes = gl.drain_errors();
            for code in codes.iter().filter(|&&c| c != glow::OUT_OF_MEMORY) {
                log::warn!("{what}: GL error {code:#06x} during upload");
            }
            out_of_memory_in(&codes)
        }
        BufferPath::BindModify => unsafe {
            raw.bind_buffer(target, Some(buffer));
            raw.buffer_data_u8_slice(target, data, usage.to_gl());
            let actual = raw.get_buffer_parameter_i32(target, glow::BUFFER_SIZE);
            raw.bind_buffer(target, None);
            verify_size(data.len(), actual)
        },
    };

    if let Err(err) = &result {
        log::error!("{what}: failed to allocate {} bytes: {err}", data.len());
    }
    result
}

/// Rejects empty uploads before any GL call.
pub(super) fn require_data(len: usize, what: &str) -> GlResult<()> {
    if len == 0 {
        log::error!("{what}: invalid buffer size: 0");
        return Err(GlError::InvalidSize(0));
    }
    Ok(())
}

/// Compares the driver-reported store size with the requested one.
///
/// `actual` comes from the 32-bit `BUFFER_SIZE` query, so stores of 2 GiB or
/// more cannot be verified on the bind-then-modify path and report a mismatch.
pub(super) fn verify_size(expected: usize, actual: i32) -> GlResult<()> {
    match usize::try_from(actual) {
        Ok(actual) if actual == expected => Ok(()),
        Ok(actual) => Err(GlError::AllocationMismatch { expected, actual }),
        Err(_) => Err(GlError::AllocationMismatch { expected, actual: 0 }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::device::GlVersion;

    fn caps(version: (u32, u32), exts: &[&str]) -> Capabilities {
        let exts: HashSet<String> = exts.iter().map(|s| s.to_string()).collect();
        Capabilities::detect(GlVersion::new(version.0, version.1), false, &exts)
    }

    #[test]
    fn dsa_contexts_use_direct_path() {
        assert_eq!(BufferPath::select(&caps((4, 5), &[]), false), BufferPath::Direct);
        assert_eq!(
            BufferPath::select(&caps((3, 3), &["GL_ARB_direct_state_access"]), false),
            BufferPath::Direct
        );
    }

    #[test]
    fn old_contexts_use_bind_modify() {
        assert_eq!(BufferPath::select(&caps((4, 1), &[]), false), BufferPath::BindModify);
    }

    #[test]
    fn legacy_can_be_forced() {
        assert_eq!(BufferPath::select(&caps((4, 6), &[]), true), BufferPath::BindModify);
    }

    #[test]
    fn empty_data_is_rejected() {
        assert!(matches!(require_data(0, "vertex buffer"), Err(GlError::InvalidSize(0))));
        assert!(require_data(12, "vertex buffer").is_ok());
    }

    #[test]
    fn verify_size_matches() {
        assert!(verify_size(64, 64).is_ok());
    }

    #[test]
    fn verify_size_reports_mismatch() {
        match verify_size(64, 0) {
            Err(GlError::AllocationMismatch { expected, actual }) => {
                assert_eq!(expected, 64);
                assert_eq!(actual, 0);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn verify_size_negative_is_mismatch() {
        assert!(matches!(
            verify_size(16, -1),
            Err(GlError::AllocationMismatch { actual: 0, .. })
        ));
    }
}
