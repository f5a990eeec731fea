use winit::event::WindowEvent;

use super::ctx::FrameCtx;
use crate::device::Gl;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by [`crate::window::Runtime`].
pub trait App {
    /// Called once after the window and context exist. Create GL objects here.
    fn init(&mut self, gl: &Gl) -> anyhow::Result<()>;

    /// Called for every window event before the runtime handles it.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per frame after the color buffer is cleared.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Called before the context is destroyed, while it is still current.
    ///
    /// GL objects still owned by the app should be dropped here.
    fn shutdown(&mut self, gl: &Gl) {
        let _ = gl;
    }
}
