use std::time::Duration;

use crate::device::Gl;
use crate::input::InputState;
use crate::window::GlWindow;

/// Per-frame context passed to [`super::App::on_frame`].
pub struct FrameCtx<'a> {
    pub gl: &'a Gl,
    pub window: &'a mut GlWindow,
    pub input: &'a InputState,
    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
    /// Time since the first frame.
    pub elapsed: Duration,
    /// Time since the previous frame, clamped to 250 ms.
    pub dt: Duration,
}

impl FrameCtx<'_> {
    /// Framebuffer size in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.window.width(), self.window.height())
    }

    /// Width over height; 1.0 for a degenerate framebuffer.
    pub fn aspect(&self) -> f32 {
        let (w, h) = self.size();
        aspect_ratio(w, h)
    }
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_regular_framebuffer() {
        assert_eq!(aspect_ratio(1280, 720), 1280.0 / 720.0);
    }

    #[test]
    fn aspect_of_minimized_window_is_one() {
        assert_eq!(aspect_ratio(0, 720), 1.0);
        assert_eq!(aspect_ratio(1280, 0), 1.0);
    }
}
