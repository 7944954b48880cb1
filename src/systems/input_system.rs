use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// keyboard state as seen by the app during one frame
#[derive(Debug, Default)]
pub struct InputSystem {
    pressed: HashSet<KeyCode>,
    just_pressed: HashSet<KeyCode>,
}

impl InputSystem {
    /// creates a new input system with no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// is the key held down right now
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// was the key pressed down since the last frame
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed.contains(&key)
    }

    /// registers a key press, held keys do not count as a new press
    pub fn press(&mut self, key: KeyCode) {
        if self.pressed.insert(key) {
            self.just_pressed.insert(key);
        }
    }

    /// registers a key release
    pub fn release(&mut self, key: KeyCode) {
        self.pressed.remove(&key);
    }

    /// forgets the presses of the frame that just ended
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }

    /// releases every key (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }

    /// process the winit window events that affect the input state
    pub(crate) fn parse_winit_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match event.state {
                        ElementState::Pressed if !event.repeat => self.press(key),
                        ElementState::Pressed => {}
                        ElementState::Released => self.release(key),
                    }
                }
            }
            WindowEvent::Focused(false) => {
                log::trace!("window lost focus, releasing all keys");
                self.clear();
            }
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn just_pressed_lasts_one_frame() {
        let mut input = InputSystem::new();
        input.press(KeyCode::Space);
        assert!(input.is_key_pressed(KeyCode::Space));
        assert!(input.is_key_just_pressed(KeyCode::Space));

        input.end_frame();
        assert!(input.is_key_pressed(KeyCode::Space));
        assert!(!input.is_key_just_pressed(KeyCode::Space));

        // still held, no new press
        input.press(KeyCode::Space);
        assert!(!input.is_key_just_pressed(KeyCode::Space));

        input.release(KeyCode::Space);
        input.press(KeyCode::Space);
        assert!(input.is_key_just_pressed(KeyCode::Space));
    }

    #[test]
    fn focus_loss_releases_keys() {
        let mut input = InputSystem::new();
        input.press(KeyCode::ArrowLeft);
        input.parse_winit_window_event(&WindowEvent::Focused(false));
        assert!(!input.is_key_pressed(KeyCode::ArrowLeft));
        assert!(!input.is_key_just_pressed(KeyCode::ArrowLeft));
    }
}
