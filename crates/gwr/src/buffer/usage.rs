/// Buffer data usage hint.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BufferUsage {
    #[default]
    StaticDraw,
    DynamicDraw,
    StreamDraw,
    StaticRead,
    DynamicRead,
    StreamRead,
    StaticCopy,
    DynamicCopy,
    StreamCopy,
}

impl BufferUsage {
    pub const fn to_gl(self) -> u32 {
        match self {
            BufferUsage::StaticDraw => glow::STATIC_DRAW,
            BufferUsage::DynamicDraw => glow::DYNAMIC_DRAW,
            BufferUsage::StreamDraw => glow::STREAM_DRAW,
            BufferUsage::StaticRead => glow::STATIC_READ,
            BufferUsage::DynamicRead => glow::DYNAMIC_READ,
            BufferUsage::StreamRead => glow::STREAM_READ,
            BufferUsage::StaticCopy => glow::STATIC_COPY,
            BufferUsage::DynamicCopy => glow::DYNAMIC_COPY,
            BufferUsage::StreamCopy => glow::STREAM_COPY,
        }
    }

    pub const fn from_gl(value: u32) -> Option<Self> {
        Some(match value {
            glow::STATIC_DRAW => BufferUsage::StaticDraw,
            glow::DYNAMIC_DRAW => BufferUsage::DynamicDraw,
            glow::STREAM_DRAW => BufferUsage::StreamDraw,
            glow::STATIC_READ => BufferUsage::StaticRead,
            glow::DYNAMIC_READ => BufferUsage::DynamicRead,
            glow::STREAM_READ => BufferUsage::StreamRead,
            glow::STATIC_COPY => BufferUsage::StaticCopy,
            glow::DYNAMIC_COPY => BufferUsage::DynamicCopy,
            glow::STREAM_COPY => BufferUsage::StreamCopy,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gl_enum_mapping_is_reversible() {
        let all = [
            BufferUsage::StaticDraw,
            BufferUsage::DynamicDraw,
            BufferUsage::StreamDraw,
            BufferUsage::StaticRead,
            BufferUsage::DynamicRead,
            BufferUsage::StreamRead,
            BufferUsage::StaticCopy,
            BufferUsage::DynamicCopy,
            BufferUsage::StreamCopy,
        ];
        for usage in all {
            assert_eq!(BufferUsage::from_gl(usage.to_gl()), Some(usage));
        }
    }

    #[test]
    fn unknown_enum_is_rejected() {
        assert_eq!(BufferUsage::from_gl(glow::TRIANGLES), None);
        assert_eq!(BufferUsage::default().to_gl(), glow::STATIC_DRAW);
    }
}
