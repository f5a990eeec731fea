//! Core application contracts.
//!
//! This module defines the interface between the runtime loop and the
//! application drawing with the GL wrappers.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
