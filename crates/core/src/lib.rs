pub mod config;
pub mod error;
pub mod journal;
pub mod mapgen;
pub mod replay;
pub mod session;
pub mod types;

pub use config::MazeConfig;
pub use error::{MazeError, ReplayError};
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use mapgen::{GeneratedMaze, Grid, MazeGenerator, generate_maze, is_reachable};
pub use replay::*;
pub use session::{Session, try_move};
pub use types::*;
