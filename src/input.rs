//! Keyboard state, snapshotted once per frame.

use macroquad::input::{is_key_down, is_key_pressed, KeyCode};

/// One frame of boolean key state. Movement and fire are held state;
/// bomb and restart are discrete edges.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    pub bomb: bool,
    pub restart: bool,
}

/// Poll the keyboard. Arrows and WASD both steer, Space fires,
/// B drops a bomb, R restarts after a game over.
pub fn poll() -> InputFrame {
    InputFrame {
        left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
        right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
        up: is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
        down: is_key_down(KeyCode::Down) || is_key_down(KeyCode::S),
        fire: is_key_down(KeyCode::Space),
        bomb: is_key_pressed(KeyCode::B),
        restart: is_key_pressed(KeyCode::R),
    }
}
