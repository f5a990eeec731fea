//! Small math and color types shared by vertex layouts and uniforms.
//!
//! All vector types are `#[repr(C)]` + `Pod` so they can be uploaded
//! directly with `bytemuck::cast_slice`.

mod color;
mod scalar;
mod vec;
mod vertex;

pub use color::Color;
pub use scalar::{clamp, deg_to_rad, lerp, rad_to_deg, DEG2RAD, PI, RAD2DEG};
pub use vec::{Vec2, Vec3, Vec4};
pub use vertex::Vertex;
