use crate::systems::input_system::InputSystem;
use winit::keyboard::KeyCode;

pub const JUMP: KeyCode = KeyCode::Space;
pub const LEFT: KeyCode = KeyCode::ArrowLeft;
pub const RIGHT: KeyCode = KeyCode::ArrowRight;
pub const UP: KeyCode = KeyCode::ArrowUp;
pub const DOWN: KeyCode = KeyCode::ArrowDown;
pub const RESTART: KeyCode = KeyCode::Escape;

struct Arrows {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
}

impl Arrows {
    fn read(input: &InputSystem) -> Self {
        Self {
            left: input.is_key_pressed(LEFT),
            right: input.is_key_pressed(RIGHT),
            up: input.is_key_pressed(UP),
            down: input.is_key_pressed(DOWN),
        }
    }
}

/// walking direction, only when exactly one arrow key is held
pub fn walk_direction(input: &InputSystem) -> Option<(i32, i32)> {
    let arrows = Arrows::read(input);
    match (arrows.left, arrows.right, arrows.up, arrows.down) {
        (true, false, false, false) => Some((-1, 0)),
        (false, true, false, false) => Some((1, 0)),
        (false, false, false, true) => Some((0, -1)),
        (false, false, true, false) => Some((0, 1)),
        _ => None,
    }
}

/// steering in the air, both axes at once, opposite keys cancel out
pub fn air_direction(input: &InputSystem) -> (i32, i32) {
    let arrows = Arrows::read(input);
    let axis = |negative: bool, positive: bool| match (negative, positive) {
        (true, false) => -1,
        (false, true) => 1,
        _ => 0,
    };
    (
        axis(arrows.left, arrows.right),
        axis(arrows.down, arrows.up),
    )
}
