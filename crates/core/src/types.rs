use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct ListenerId;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub y: i32,
    pub x: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { y: 0, x: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    /// Cell reached by walking `steps` times in `direction`.
    pub fn offset(self, direction: Direction, steps: i32) -> Cell {
        let (dx, dy) = direction.delta();
        Cell { y: self.y + dy * steps, x: self.x + dx * steps }
    }

    pub fn step(self, direction: Direction) -> Cell {
        self.offset(direction, 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tile {
    Wall,
    Passage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit vector as `(dx, dy)`, with `y` growing downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InputSource {
    Keyboard,
    OnScreenButtons,
}

impl InputSource {
    pub const ALL: [InputSource; 2] = [InputSource::Keyboard, InputSource::OnScreenButtons];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    Won,
    TimeExpired,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Active,
    Ended(SessionOutcome),
}

impl SessionState {
    pub fn is_active(self) -> bool {
        matches!(self, SessionState::Active)
    }

    pub fn outcome(self) -> Option<SessionOutcome> {
        match self {
            SessionState::Active => None,
            SessionState::Ended(outcome) => Some(outcome),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Started { start: Cell, goal: Cell },
    Moved { source: InputSource, from: Cell, to: Cell },
    Blocked { source: InputSource, at: Cell, direction: Direction },
    Tick { remaining_secs: u32 },
    Ended { outcome: SessionOutcome, listeners_released: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub from: Cell,
    pub to: Cell,
    pub state: SessionState,
}

impl MoveReport {
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_deltas_follow_screen_coordinates() {
        let origin = Cell::new(3, 3);
        assert_eq!(origin.step(Direction::Up), Cell::new(3, 2));
        assert_eq!(origin.step(Direction::Down), Cell::new(3, 4));
        assert_eq!(origin.step(Direction::Left), Cell::new(2, 3));
        assert_eq!(origin.step(Direction::Right), Cell::new(4, 3));
        assert_eq!(origin.offset(Direction::Left, 2), Cell::new(1, 3));
    }

    #[test]
    fn cells_order_by_row_then_column() {
        assert!(Cell::new(5, 0) < Cell::new(0, 1));
        assert!(Cell::new(0, 1) < Cell::new(1, 1));
    }
}
