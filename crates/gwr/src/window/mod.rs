//! Window + GL context lifecycle and the runtime loop.
//!
//! Owns the `winit` event loop and window, and the `glutin` surface/context
//! bound to it.

mod config;
mod gl_window;
mod runtime;

pub use config::WindowConfig;
pub use gl_window::GlWindow;
pub use runtime::Runtime;
