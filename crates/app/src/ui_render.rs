//! Rendering for the maze screen.

use macroquad::prelude::*;
use maze_app::app_loop::{AppMode, AppState};
use maze_app::buttons::{ButtonPad, button_label};
use maze_app::config_file::AppConfig;
use maze_app::ui_text::{recap_lines, status_text, timer_text, title_text};
use maze_core::{Cell, InputSource, Session, Tile};

use crate::screen_layout::{FrameLayout, PanelRect};

const WALL_COLOR: Color = Color { r: 0.12, g: 0.12, b: 0.14, a: 1.0 };
const PASSAGE_COLOR: Color = Color { r: 0.92, g: 0.92, b: 0.88, a: 1.0 };
const BUTTON_COLOR: Color = Color { r: 0.3, g: 0.3, b: 0.36, a: 1.0 };
const BUTTON_DISABLED_COLOR: Color = Color { r: 0.18, g: 0.18, b: 0.2, a: 1.0 };
const LINE_HEIGHT: f32 = 20.0;

/// Where the maze lands inside its panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MazeViewport {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell: f32,
}

impl MazeViewport {
    /// Largest cell size up to `preferred_cell` that fits the whole grid, centred.
    pub fn fit(panel: PanelRect, rows: usize, cols: usize, preferred_cell: f32) -> Self {
        let rows_f = rows.max(1) as f32;
        let cols_f = cols.max(1) as f32;
        let cell = preferred_cell.min(panel.width / cols_f).min(panel.height / rows_f).max(1.0);
        Self {
            origin_x: panel.x + (panel.width - cell * cols_f) / 2.0,
            origin_y: panel.y + (panel.height - cell * rows_f) / 2.0,
            cell,
        }
    }

    pub fn cell_origin(&self, cell: Cell) -> (f32, f32) {
        (self.origin_x + cell.x as f32 * self.cell, self.origin_y + cell.y as f32 * self.cell)
    }
}

pub fn draw_frame(
    session: &Session,
    app_state: &AppState,
    layout: &FrameLayout,
    pad: &ButtonPad,
    player_name: &str,
    config: &AppConfig,
) {
    draw_header(session, layout.header, player_name);
    draw_maze(session, layout.maze, config.cell_size);
    draw_buttons(session, pad);
    draw_status(session, app_state, layout.status, player_name, config);
}

fn draw_header(session: &Session, panel: PanelRect, player_name: &str) {
    draw_text(&title_text(player_name), panel.x, panel.y + 24.0, 32.0, WHITE);
    let timer_color = if session.remaining_secs() <= 5 { ORANGE } else { LIGHTGRAY };
    draw_text(&timer_text(session.remaining_secs()), panel.x, panel.y + 54.0, 22.0, timer_color);
}

fn draw_maze(session: &Session, panel: PanelRect, preferred_cell: f32) {
    let grid = &session.maze().grid;
    let viewport = MazeViewport::fit(panel, grid.rows(), grid.cols(), preferred_cell);

    for cell in grid.cells() {
        let color = match grid.tile_at(cell) {
            Tile::Wall => WALL_COLOR,
            Tile::Passage => PASSAGE_COLOR,
        };
        let (x, y) = viewport.cell_origin(cell);
        draw_rectangle(x, y, viewport.cell, viewport.cell, color);
    }

    let (goal_x, goal_y) = viewport.cell_origin(session.goal());
    draw_rectangle(goal_x, goal_y, viewport.cell, viewport.cell, GREEN);

    let (player_x, player_y) = viewport.cell_origin(session.player());
    let half = viewport.cell / 2.0;
    draw_circle(player_x + half, player_y + half, half * 0.8, BLUE);
}

fn draw_buttons(session: &Session, pad: &ButtonPad) {
    let enabled = session.listener(InputSource::OnScreenButtons).is_some();
    let (fill, label_color) =
        if enabled { (BUTTON_COLOR, WHITE) } else { (BUTTON_DISABLED_COLOR, GRAY) };

    for (direction, rect) in pad.buttons() {
        draw_rectangle(rect.x, rect.y, rect.width, rect.height, fill);
        draw_rectangle_lines(rect.x, rect.y, rect.width, rect.height, 1.0, LIGHTGRAY);
        let label = button_label(direction);
        let size = measure_text(label, None, 16, 1.0);
        draw_text(
            label,
            rect.x + (rect.width - size.width) / 2.0,
            rect.y + (rect.height + size.height) / 2.0,
            16.0,
            label_color,
        );
    }
}

fn draw_status(
    session: &Session,
    app_state: &AppState,
    panel: PanelRect,
    player_name: &str,
    config: &AppConfig,
) {
    let color = match app_state.mode {
        AppMode::Playing => LIGHTGRAY,
        AppMode::Finished(_) => YELLOW,
    };
    let status = status_text(app_state.mode, player_name, config);
    draw_text(&status, panel.x, panel.y + 20.0, 24.0, color);

    if let AppMode::Finished(_) = app_state.mode {
        for (index, line) in recap_lines(session).iter().enumerate() {
            let y = panel.y + 20.0 + (index + 1) as f32 * LINE_HEIGHT;
            draw_text(line, panel.x, y, 18.0, LIGHTGRAY);
        }
    }
}
