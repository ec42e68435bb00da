//! Window configuration for the desktop app.

use macroquad::window::Conf;
use maze_app::APP_NAME;
use maze_app::config_file::AppConfig;

use crate::screen_layout::{SCREEN_PADDING, chrome_height};

const MIN_WINDOW_WIDTH: f32 = 480.0;
const MAX_WINDOW_WIDTH: f32 = 1600.0;
const MAX_WINDOW_HEIGHT: f32 = 1000.0;

pub fn build_window_conf(config: &AppConfig) -> Conf {
    let (window_width, window_height) = window_size(config);
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width,
        window_height,
        // Linux desktop sessions may not scale low-DPI framebuffers automatically.
        // Request a high-DPI framebuffer so text and UI size track display scale.
        high_dpi: true,
        ..Default::default()
    }
}

/// Window sized to show the whole maze at the configured cell size, clamped to
/// something that fits on a desktop.
pub fn window_size(config: &AppConfig) -> (i32, i32) {
    let maze_width = config.maze.cols as f32 * config.cell_size;
    let maze_height = config.maze.rows as f32 * config.cell_size;
    let width = (maze_width + 2.0 * SCREEN_PADDING).clamp(MIN_WINDOW_WIDTH, MAX_WINDOW_WIDTH);
    let height = (maze_height + chrome_height()).min(MAX_WINDOW_HEIGHT);
    (width.round() as i32, height.round() as i32)
}
