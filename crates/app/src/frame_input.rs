//! Keyboard and mouse input collection for one rendered frame.

use macroquad::prelude::{
    KeyCode, MouseButton, get_frame_time, is_key_pressed, is_mouse_button_pressed, mouse_position,
};
use maze_app::app_loop::FrameInput;
use maze_app::buttons::ButtonPad;
use maze_core::Direction;

const DIRECTION_KEYS: [(KeyCode, Direction); 4] = [
    (KeyCode::Up, Direction::Up),
    (KeyCode::Down, Direction::Down),
    (KeyCode::Left, Direction::Left),
    (KeyCode::Right, Direction::Right),
];

pub fn capture_frame_input(pad: &ButtonPad) -> FrameInput {
    let key_directions = DIRECTION_KEYS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, direction)| *direction)
        .collect();

    let mut button_directions = Vec::new();
    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        if let Some(direction) = pad.button_at(x, y) {
            button_directions.push(direction);
        }
    }

    let restart = is_key_pressed(KeyCode::R) || is_key_pressed(KeyCode::Enter);

    FrameInput { key_directions, button_directions, elapsed_secs: get_frame_time(), restart }
}
