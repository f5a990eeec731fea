/// Component type of a vertex attribute in the source buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AttribType {
    Byte,
    UnsignedByte,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    HalfFloat,
    Float,
    Double,
}

impl AttribType {
    pub const fn to_gl(self) -> u32 {
        match self {
            AttribType::Byte => glow::BYTE,
            AttribType::UnsignedByte => glow::UNSIGNED_BYTE,
            AttribType::Short => glow::SHORT,
            AttribType::UnsignedShort => glow::UNSIGNED_SHORT,
            AttribType::Int => glow::INT,
            AttribType::UnsignedInt => glow::UNSIGNED_INT,
            AttribType::HalfFloat => glow::HALF_FLOAT,
            AttribType::Float => glow::FLOAT,
            AttribType::Double => glow::DOUBLE,
        }
    }

    pub const fn size_bytes(self) -> usize {
        match self {
            AttribType::Byte | AttribType::UnsignedByte => 1,
            AttribType::Short | AttribType::UnsignedShort | AttribType::HalfFloat => 2,
            AttribType::Int | AttribType::UnsignedInt | AttribType::Float => 4,
            AttribType::Double => 8,
        }
    }

    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            AttribType::Byte
                | AttribType::UnsignedByte
                | AttribType::Short
                | AttribType::UnsignedShort
                | AttribType::Int
                | AttribType::UnsignedInt
        )
    }
}

/// Which pointer call feeds the attribute to the shader.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttribPath {
    /// `glVertexAttribPointer`: shader sees floats (optionally normalized).
    Float,
    /// `glVertexAttribIPointer`: shader sees integers.
    Integer,
    /// `glVertexAttribLPointer`: shader sees 64-bit doubles.
    Long,
}

/// One attribute of an interleaved vertex layout.
///
/// `stride` and `offset` are in bytes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttrib {
    pub index: u32,
    pub components: i32,
    pub ty: AttribType,
    pub normalized: bool,
    pub stride: i32,
    pub offset: i32,
}

impl VertexAttrib {
    /// Tightly packed float attribute at offset 0.
    pub const fn new(index: u32, components: i32, ty: AttribType) -> Self {
        Self {
            index,
            components,
            ty,
            normalized: false,
            stride: 0,
            offset: 0,
        }
    }

    pub const fn stride(mut self, stride: i32) -> Self {
        self.stride = stride;
        self
    }

    pub const fn offset(mut self, offset: i32) -> Self {
        self.offset = offset;
        self
    }

    pub const fn normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    /// Checks the layout against what the given pointer call accepts.
    pub fn validate(&self, path: AttribPath) -> Result<(), &'static str> {
        if !(1..=4).contains(&self.components) {
            return Err("component count must be 1..=4");
        }
        if self.stride < 0 || self.offset < 0 {
            return Err("stride and offset must be non-negative");
        }

        match path {
            AttribPath::Float if self.ty == AttribType::Double => {
                Err("double attributes need the long pointer path")
            }
            AttribPath::Integer if !self.ty.is_integer() => {
                Err("integer pointer path requires an integer component type")
            }
            AttribPath::Long if self.ty != AttribType::Double => {
                Err("long pointer path requires double components")
            }
            _ => Ok(()),
        }
    }

    /// Bytes covered by one element of this attribute.
    pub const fn element_size(&self) -> usize {
        self.components as usize * self.ty.size_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_layout() {
        let a = VertexAttrib::new(2, 2, AttribType::Float)
            .stride(32)
            .offset(24)
            .normalized(true);
        assert_eq!(a.index, 2);
        assert_eq!(a.stride, 32);
        assert_eq!(a.offset, 24);
        assert!(a.normalized);
        assert_eq!(a.element_size(), 8);
    }

    // ── validate ──────────────────────────────────────────────────────────

    #[test]
    fn component_count_bounds() {
        assert!(VertexAttrib::new(0, 0, AttribType::Float).validate(AttribPath::Float).is_err());
        assert!(VertexAttrib::new(0, 5, AttribType::Float).validate(AttribPath::Float).is_err());
        assert!(VertexAttrib::new(0, 4, AttribType::Float).validate(AttribPath::Float).is_ok());
    }

    #[test]
    fn negative_offsets_rejected() {
        let a = VertexAttrib::new(0, 3, AttribType::Float).offset(-4);
        assert!(a.validate(AttribPath::Float).is_err());
    }

    #[test]
    fn float_path_accepts_normalized_bytes() {
        let a = VertexAttrib::new(1, 4, AttribType::UnsignedByte).normalized(true);
        assert!(a.validate(AttribPath::Float).is_ok());
        assert!(VertexAttrib::new(1, 1, AttribType::Double).validate(AttribPath::Float).is_err());
    }

    #[test]
    fn integer_path_rejects_floats() {
        assert!(VertexAttrib::new(0, 1, AttribType::Float).validate(AttribPath::Integer).is_err());
        assert!(VertexAttrib::new(0, 1, AttribType::Int).validate(AttribPath::Integer).is_ok());
    }

    #[test]
    fn long_path_requires_doubles() {
        assert!(VertexAttrib::new(0, 3, AttribType::Double).validate(AttribPath::Long).is_ok());
        assert!(VertexAttrib::new(0, 3, AttribType::Float).validate(AttribPath::Long).is_err());
    }
}
