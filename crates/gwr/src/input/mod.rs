//! Keyboard and cursor state, polled once per frame.
//!
//! The public types do not expose winit; `translate` maps window events into
//! [`InputEvent`]s which are folded into [`InputState`].

mod key;
mod state;
mod translate;

pub use key::{Key, KeyState};
pub use state::{InputEvent, InputState};
pub(crate) use translate::translate_window_event;
