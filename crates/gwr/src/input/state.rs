use std::collections::HashSet;

use super::key::{Key, KeyState};

/// Platform-agnostic input events.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Key { key: Key, state: KeyState, repeat: bool },
    CursorMoved { x: f32, y: f32 },
    CursorLeft,
    Focused(bool),
}

/// Input state for the window.
///
/// `keys_down` persists across frames; `keys_pressed`/`keys_released` hold
/// transitions since the last [`InputState::clear_frame`].
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<Key>,
    keys_pressed: HashSet<Key>,
    keys_released: HashSet<Key>,
    cursor: Option<(f32, f32)>,
    focused: bool,
}

impl InputState {
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key { key, state, repeat } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(key) && !repeat {
                        self.keys_pressed.insert(key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(&key) {
                        self.keys_released.insert(key);
                    }
                }
            },
            InputEvent::CursorMoved { x, y } => self.cursor = Some((x, y)),
            InputEvent::CursorLeft => self.cursor = None,
            InputEvent::Focused(focused) => {
                self.focused = focused;
                if !focused {
                    // Releases are not delivered to unfocused windows.
                    self.keys_down.clear();
                }
            }
        }
    }

    /// Clears per-frame transitions.
    pub fn clear_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    #[inline]
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    #[inline]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    #[inline]
    pub fn key_released(&self, key: Key) -> bool {
        self.keys_released.contains(&key)
    }

    /// Cursor position in logical pixels, `None` outside the window.
    #[inline]
    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    #[inline]
    pub fn focused(&self) -> bool {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            repeat: false,
        }
    }

    #[test]
    fn press_and_release_transitions() {
        let mut input = InputState::default();
        input.apply(key(Key::Escape, KeyState::Pressed));
        assert!(input.key_down(Key::Escape));
        assert!(input.key_pressed(Key::Escape));

        input.clear_frame();
        assert!(input.key_down(Key::Escape));
        assert!(!input.key_pressed(Key::Escape));

        input.apply(key(Key::Escape, KeyState::Released));
        assert!(!input.key_down(Key::Escape));
        assert!(input.key_released(Key::Escape));
    }

    #[test]
    fn repeats_are_not_new_presses() {
        let mut input = InputState::default();
        input.apply(InputEvent::Key {
            key: Key::A,
            state: KeyState::Pressed,
            repeat: true,
        });
        assert!(input.key_down(Key::A));
        assert!(!input.key_pressed(Key::A));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut input = InputState::default();
        input.apply(InputEvent::Focused(true));
        input.apply(key(Key::W, KeyState::Pressed));
        input.apply(InputEvent::Focused(false));
        assert!(!input.key_down(Key::W));
        assert!(!input.focused());
    }

    #[test]
    fn cursor_tracking() {
        let mut input = InputState::default();
        input.apply(InputEvent::CursorMoved { x: 10.0, y: 20.0 });
        assert_eq!(input.cursor(), Some((10.0, 20.0)));
        input.apply(InputEvent::CursorLeft);
        assert_eq!(input.cursor(), None);
    }
}
