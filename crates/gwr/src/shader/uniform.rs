use glow::HasContext;

use super::UniformLocation;

/// GLSL type of a uniform value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UniformKind {
    Int,
    IVec2,
    IVec3,
    IVec4,
    UInt,
    UVec2,
    UVec3,
    UVec4,
    Float,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

impl UniformKind {
    /// Scalars per element.
    pub const fn components(self) -> usize {
        match self {
            UniformKind::Int | UniformKind::UInt | UniformKind::Float => 1,
            UniformKind::IVec2 | UniformKind::UVec2 | UniformKind::Vec2 => 2,
            UniformKind::IVec3 | UniformKind::UVec3 | UniformKind::Vec3 => 3,
            UniformKind::IVec4 | UniformKind::UVec4 | UniformKind::Vec4 | UniformKind::Mat2 => 4,
            UniformKind::Mat3 => 9,
            UniformKind::Mat4 => 16,
        }
    }
}

/// Typed uniform data.
///
/// Each variant holds a slice; its length is the array count uploaded (one
/// element for plain uniforms). Matrices are column-major, not transposed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Uniform<'a> {
    Int(&'a [i32]),
    IVec2(&'a [[i32; 2]]),
    IVec3(&'a [[i32; 3]]),
    IVec4(&'a [[i32; 4]]),
    UInt(&'a [u32]),
    UVec2(&'a [[u32; 2]]),
    UVec3(&'a [[u32; 3]]),
    UVec4(&'a [[u32; 4]]),
    Float(&'a [f32]),
    Vec2(&'a [[f32; 2]]),
    Vec3(&'a [[f32; 3]]),
    Vec4(&'a [[f32; 4]]),
    Mat2(&'a [[f32; 4]]),
    Mat3(&'a [[f32; 9]]),
    Mat4(&'a [[f32; 16]]),
}

impl<'a> Uniform<'a> {
    pub fn kind(&self) -> UniformKind {
        match self {
            Uniform::Int(_) => UniformKind::Int,
            Uniform::IVec2(_) => UniformKind::IVec2,
            Uniform::IVec3(_) => UniformKind::IVec3,
            Uniform::IVec4(_) => UniformKind::IVec4,
            Uniform::UInt(_) => UniformKind::UInt,
            Uniform::UVec2(_) => UniformKind::UVec2,
            Uniform::UVec3(_) => UniformKind::UVec3,
            Uniform::UVec4(_) => UniformKind::UVec4,
            Uniform::Float(_) => UniformKind::Float,
            Uniform::Vec2(_) => UniformKind::Vec2,
            Uniform::Vec3(_) => UniformKind::Vec3,
            Uniform::Vec4(_) => UniformKind::Vec4,
            Uniform::Mat2(_) => UniformKind::Mat2,
            Uniform::Mat3(_) => UniformKind::Mat3,
            Uniform::Mat4(_) => UniformKind::Mat4,
        }
    }

    /// Number of array elements.
    pub fn count(&self) -> usize {
        match self {
            Uniform::Int(v) => v.len(),
            Uniform::IVec2(v) => v.len(),
            Uniform::IVec3(v) => v.len(),
            Uniform::IVec4(v) => v.len(),
            Uniform::UInt(v) => v.len(),
            Uniform::UVec2(v) => v.len(),
            Uniform::UVec3(v) => v.len(),
            Uniform::UVec4(v) => v.len(),
            Uniform::Float(v) => v.len(),
            Uniform::Vec2(v) => v.len(),
            Uniform::Vec3(v) => v.len(),
            Uniform::Vec4(v) => v.len(),
            Uniform::Mat2(v) => v.len(),
            Uniform::Mat3(v) => v.len(),
            Uniform::Mat4(v) => v.len(),
        }
    }

    #[inline]
    pub fn components(&self) -> usize {
        self.kind().components()
    }

    /// Uploads into the currently bound program.
    pub(super) fn upload(&self, gl: &glow::Context, loc: &UniformLocation) {
        let loc = Some(loc);
        unsafe {
            match *self {
                Uniform::Int(v) => gl.uniform_1_i32_slice(loc, v),
                Uniform::IVec2(v) => gl.uniform_2_i32_slice(loc, v.as_flattened()),
                Uniform::IVec3(v) => gl.uniform_3_i32_slice(loc, v.as_flattened()),
                Uniform::IVec4(v) => gl.uniform_4_i32_slice(loc, v.as_flattened()),
                Uniform::UInt(v) => gl.uniform_1_u32_slice(loc, v),
                Uniform::UVec2(v) => gl.uniform_2_u32_slice(loc, v.as_flattened()),
                Uniform::UVec3(v) => gl.uniform_3_u32_slice(loc, v.as_flattened()),
                Uniform::UVec4(v) => gl.uniform_4_u32_slice(loc, v.as_flattened()),
                Uniform::Float(v) => gl.uniform_1_f32_slice(loc, v),
                Uniform::Vec2(v) => gl.uniform_2_f32_slice(loc, v.as_flattened()),
                Uniform::Vec3(v) => gl.uniform_3_f32_slice(loc, v.as_flattened()),
                Uniform::Vec4(v) => gl.uniform_4_f32_slice(loc, v.as_flattened()),
                Uniform::Mat2(v) => gl.uniform_matrix_2_f32_slice(loc, false, v.as_flattened()),
                Uniform::Mat3(v) => gl.uniform_matrix_3_f32_slice(loc, false, v.as_flattened()),
                Uniform::Mat4(v) => gl.uniform_matrix_4_f32_slice(loc, false, v.as_flattened()),
            }
        }
    }
}

macro_rules! impl_from_single {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for Uniform<'a> {
                #[inline]
                fn from(v: &'a $ty) -> Self {
                    Uniform::$variant(std::slice::from_ref(v))
                }
            }
        )+
    };
}

impl_from_single! {
    i32 => Int,
    [i32; 2] => IVec2,
    [i32; 3] => IVec3,
    [i32; 4] => IVec4,
    u32 => UInt,
    [u32; 2] => UVec2,
    [u32; 3] => UVec3,
    [u32; 4] => UVec4,
    f32 => Float,
    [f32; 2] => Vec2,
    [f32; 3] => Vec3,
    [f32; 4] => Vec4,
    [f32; 9] => Mat3,
    [f32; 16] => Mat4,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_values_have_count_one() {
        let x = 3i32;
        let u: Uniform<'_> = (&x).into();
        assert_eq!(u.kind(), UniformKind::Int);
        assert_eq!(u.count(), 1);
        assert_eq!(u.components(), 1);
    }

    #[test]
    fn arrays_report_element_count() {
        let lights = [[0.0f32, 1.0, 0.0], [1.0, 0.0, 0.0]];
        let u = Uniform::Vec3(&lights);
        assert_eq!(u.count(), 2);
        assert_eq!(u.components(), 3);
    }

    #[test]
    fn four_floats_default_to_vec4() {
        let c = [1.0f32, 0.5, 0.25, 1.0];
        assert_eq!(Uniform::from(&c).kind(), UniformKind::Vec4);
        assert_eq!(Uniform::Mat2(std::slice::from_ref(&c)).kind(), UniformKind::Mat2);
    }

    #[test]
    fn matrix_components() {
        assert_eq!(UniformKind::Mat2.components(), 4);
        assert_eq!(UniformKind::Mat3.components(), 9);
        assert_eq!(UniformKind::Mat4.components(), 16);
        let m = [0.0f32; 16];
        assert_eq!(Uniform::from(&m).kind(), UniformKind::Mat4);
    }
}
