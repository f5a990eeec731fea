//! Logging utilities.
//!
//! Logger initialization plus the bridge that forwards driver debug output
//! to the standard `log` facade.

mod gl_debug;
mod init;

pub(crate) use gl_debug::install_debug_output;
pub use gl_debug::severity_level;
pub use init::{init_logging, LoggingConfig};
