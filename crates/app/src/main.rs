mod frame_input;
mod screen_layout;
mod ui_render;
mod window_config;

use macroquad::prelude::{BLACK, clear_background, next_frame, screen_height, screen_width};
use macroquad::window::Conf;
use maze_app::app_loop::AppState;
use maze_app::config_file::AppConfig;
use maze_app::journal_file::{default_journal_path, write_journal_atomic};
use maze_app::seed::{LaunchOptions, generate_runtime_seed, resolve_launch_options};
use maze_app::ui_text::display_name;
use maze_core::{InputJournal, Session};
use std::env;
use std::io;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::frame_input::capture_frame_input;
use crate::screen_layout::ScreenLayout;
use crate::ui_render::draw_frame;
use crate::window_config::build_window_conf;

fn window_conf() -> Conf {
    let config = resolve_launch_options(env::args(), 0)
        .map(|options| load_config(&options))
        .unwrap_or_default();
    build_window_conf(&config)
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let options = match resolve_launch_options(env::args(), generate_runtime_seed()) {
        Ok(options) => options,
        Err(error) => error.exit(),
    };
    let config = load_config(&options);
    let player_name =
        display_name(options.player_name.as_deref().or(config.player_name.as_deref())).to_owned();

    let mut seed = options.seed.value();
    let mut session = match Session::start(config.maze.clone(), seed) {
        Ok(session) => session,
        Err(error) => {
            error!(%error, seed, "failed to start session");
            return;
        }
    };
    info!(seed, seed_source = ?options.seed, player = %player_name, "session started");
    let mut app = begin_app(&session);

    let mut screen = match ScreenLayout::new() {
        Ok(screen) => screen,
        Err(error) => {
            error!(%error, "failed to build screen layout");
            return;
        }
    };

    loop {
        let layout = match screen.compute(screen_width(), screen_height()) {
            Ok(layout) => layout,
            Err(error) => {
                error!(%error, "layout failed");
                return;
            }
        };
        let pad = layout.button_pad();
        let frame = capture_frame_input(&pad);

        if app.wants_restart(&frame) {
            seed = generate_runtime_seed();
            match Session::start(config.maze.clone(), seed) {
                Ok(next) => {
                    info!(seed, "session restarted");
                    session = next;
                    app = begin_app(&session);
                }
                Err(error) => error!(%error, seed, "failed to restart session"),
            }
        } else if let Some(outcome) = app.tick(&mut session, &frame) {
            info!(seed, ?outcome, moves = session.moves(), "session finished");
            save_journal(app.journal());
        }

        clear_background(BLACK);
        draw_frame(&session, &app, &layout, &pad, &player_name, &config);
        next_frame().await
    }
}

/// Wraps a fresh session; one already over at start gets its journal saved here
/// since no frame will report the ending.
fn begin_app(session: &Session) -> AppState {
    let app = AppState::new(session);
    if let Some(outcome) = app.finished_outcome() {
        info!(seed = session.seed(), ?outcome, "session finished at start");
        save_journal(app.journal());
    }
    app
}

fn load_config(options: &LaunchOptions) -> AppConfig {
    let Some(path) = options.config_path.clone().or_else(AppConfig::get_default_path) else {
        return AppConfig::default();
    };
    match AppConfig::load_or_default(&path) {
        Ok(config) => config,
        Err(error) => {
            warn!(%error, "using default settings");
            AppConfig::default()
        }
    }
}

fn save_journal(journal: &InputJournal) {
    let Some(path) = default_journal_path() else {
        warn!("no data directory; session journal not saved");
        return;
    };
    match write_journal_atomic(journal, &path) {
        Ok(()) => info!(path = %path.display(), inputs = journal.inputs.len(), "journal saved"),
        Err(error) => warn!(%error, path = %path.display(), "failed to save journal"),
    }
}
