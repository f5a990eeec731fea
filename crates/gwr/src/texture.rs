//! 2D textures loaded from image files or raw RGBA8 pixels.

use std::path::Path;

use glow::HasContext;

use crate::device::{first_error_in, Gl, GlError, GlResult};

/// Immutable-size RGBA8 2D texture with mipmaps.
pub struct Texture {
    gl: Gl,
    texture: glow::NativeTexture,
    width: u32,
    height: u32,
}

impl Texture {
    /// Decodes an image file and uploads it.
    ///
    /// Rows are flipped so that texture coordinate (0, 0) is the bottom-left
    /// corner of the image, matching GL conventions.
    pub fn load(gl: &Gl, path: impl AsRef<Path>) -> GlResult<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| {
            log::error!("texture: failed to load '{}': {source}", path.display());
            GlError::TextureLoad {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let texture = Self::from_image(gl, &img)?;
        log::debug!(
            "texture: loaded '{}' ({}x{})",
            path.display(),
            texture.width,
            texture.height
        );
        Ok(texture)
    }

    pub fn from_image(gl: &Gl, img: &image::DynamicImage) -> GlResult<Self> {
        let rgba = img.flipv().to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba8(gl, width, height, rgba.as_raw())
    }

    /// Uploads tightly packed RGBA8 rows, bottom row first.
    pub fn from_rgba8(gl: &Gl, width: u32, height: u32, pixels: &[u8]) -> GlResult<Self> {
        let raw = gl.raw();
        let max = unsafe { raw.get_parameter_i32(glow::MAX_TEXTURE_SIZE) };
        if let Err(err) = validate_rgba8(width, height, pixels.len(), max) {
            log::error!("texture: rejected {width}x{height} upload: {err}");
            return Err(err);
        }

        gl.discard_errors("texture");
        let texture = unsafe { raw.create_texture() }.map_err(|e| {
            log::error!("texture: failed to create texture: {e}");
            GlError::Driver(e)
        })?;

        unsafe {
            raw.bind_texture(glow::TEXTURE_2D, Some(texture));

            raw.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            raw.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            raw.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            raw.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);

            raw.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            raw.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA8 as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                Some(pixels),
            );
            raw.generate_mipmap(glow::TEXTURE_2D);

            raw.bind_texture(glow::TEXTURE_2D, None);
        }

        if let Err(err) = first_error_in(&gl.drain_errors()) {
            log::error!("texture: upload of {width}x{height} failed: {err}");
            unsafe { raw.delete_texture(texture) };
            return Err(err);
        }

        Ok(Self {
            gl: gl.clone(),
            texture,
            width,
            height,
        })
    }

    /// Binds to texture unit `unit` (0 → `GL_TEXTURE0`).
    pub fn bind(&self, unit: u32) {
        unsafe {
            let raw = self.gl.raw();
            raw.active_texture(glow::TEXTURE0 + unit);
            raw.bind_texture(glow::TEXTURE_2D, Some(self.texture));
        }
    }

    pub fn unbind(gl: &Gl, unit: u32) {
        unsafe {
            gl.raw().active_texture(glow::TEXTURE0 + unit);
            gl.raw().bind_texture(glow::TEXTURE_2D, None);
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.texture.0.get()
    }

    #[inline]
    pub fn raw(&self) -> glow::NativeTexture {
        self.texture
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe { self.gl.raw().delete_texture(self.texture) }
    }
}

fn validate_rgba8(width: u32, height: u32, len: usize, max_size: i32) -> GlResult<()> {
    let max = u32::try_from(max_size).unwrap_or(0);
    if width == 0 || height == 0 || (max > 0 && (width > max || height > max)) {
        return Err(GlError::TextureSize { width, height });
    }

    let expected = width as usize * height as usize * 4;
    if len != expected {
        return Err(GlError::AllocationMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(
            validate_rgba8(0, 4, 0, 4096),
            Err(GlError::TextureSize { width: 0, height: 4 })
        ));
    }

    #[test]
    fn oversized_rejected() {
        assert!(validate_rgba8(8192, 1, 8192 * 4, 4096).is_err());
    }

    #[test]
    fn unknown_limit_only_checks_length() {
        assert!(validate_rgba8(8192, 1, 8192 * 4, 0).is_ok());
    }

    #[test]
    fn pixel_length_must_match() {
        assert!(validate_rgba8(2, 2, 16, 4096).is_ok());
        assert!(matches!(
            validate_rgba8(2, 2, 12, 4096),
            Err(GlError::AllocationMismatch { expected: 16, actual: 12 })
        ));
    }
}
