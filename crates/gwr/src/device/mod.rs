//! GL context + capability management.
//!
//! This module is responsible for:
//! - wrapping a loaded `glow` context into the shared [`Gl`] handle
//! - detecting the context version and optional features once
//! - choosing the buffer backend path from those features

mod caps;
mod context;
mod error;
mod init;

pub use caps::{Capabilities, Feature, GlVersion};
pub use context::{Gl, GlInfo};
pub use error::{GlError, GlResult};
pub(crate) use error::{first_error_in, out_of_memory_in};
pub use init::GlInit;
