//! On-screen direction buttons: geometry and hit-testing.

use maze_core::Direction;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ButtonRect {
    /// Half-open on the right and bottom edges so adjacent buttons never overlap.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Four buttons laid out as a cross with an empty centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonPad {
    pub up: ButtonRect,
    pub down: ButtonRect,
    pub left: ButtonRect,
    pub right: ButtonRect,
}

impl ButtonPad {
    pub fn cross(center_x: f32, center_y: f32, button_size: f32, gap: f32) -> Self {
        let half = button_size / 2.0;
        let step = button_size + gap;
        let rect = |dx: f32, dy: f32| ButtonRect {
            x: center_x + dx * step - half,
            y: center_y + dy * step - half,
            width: button_size,
            height: button_size,
        };
        Self {
            up: rect(0.0, -1.0),
            down: rect(0.0, 1.0),
            left: rect(-1.0, 0.0),
            right: rect(1.0, 0.0),
        }
    }

    pub fn buttons(&self) -> [(Direction, ButtonRect); 4] {
        [
            (Direction::Up, self.up),
            (Direction::Down, self.down),
            (Direction::Left, self.left),
            (Direction::Right, self.right),
        ]
    }

    pub fn button_at(&self, x: f32, y: f32) -> Option<Direction> {
        self.buttons()
            .into_iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(direction, _)| direction)
    }
}

pub fn button_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "Up",
        Direction::Down => "Down",
        Direction::Left => "Left",
        Direction::Right => "Right",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad() -> ButtonPad {
        ButtonPad::cross(100.0, 100.0, 40.0, 10.0)
    }

    #[test]
    fn centre_of_each_button_maps_to_its_direction() {
        let pad = pad();
        for (direction, rect) in pad.buttons() {
            let x = rect.x + rect.width / 2.0;
            let y = rect.y + rect.height / 2.0;
            assert_eq!(pad.button_at(x, y), Some(direction), "{direction:?}");
        }
    }

    #[test]
    fn cross_places_buttons_around_the_centre() {
        let pad = pad();
        assert_eq!(pad.up, ButtonRect { x: 80.0, y: 30.0, width: 40.0, height: 40.0 });
        assert_eq!(pad.right, ButtonRect { x: 130.0, y: 80.0, width: 40.0, height: 40.0 });
    }

    #[test]
    fn centre_and_gaps_hit_nothing() {
        let pad = pad();
        assert_eq!(pad.button_at(100.0, 100.0), None);
        assert_eq!(pad.button_at(125.0, 100.0), None);
        assert_eq!(pad.button_at(0.0, 0.0), None);
    }

    #[test]
    fn right_and_bottom_edges_are_exclusive() {
        let rect = ButtonRect { x: 0.0, y: 0.0, width: 10.0, height: 10.0 };
        assert!(rect.contains(0.0, 0.0));
        assert!(!rect.contains(10.0, 5.0));
        assert!(!rect.contains(5.0, 10.0));
    }

    #[test]
    fn labels_name_the_direction() {
        let labels: Vec<_> = Direction::ALL.into_iter().map(button_label).collect();
        assert_eq!(labels, vec!["Up", "Down", "Left", "Right"]);
    }
}
