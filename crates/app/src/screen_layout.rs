//! Layout model for the maze screen: header, maze, button pad, status line.

use maze_app::buttons::ButtonPad;
use taffy::prelude::*;
use taffy::{Layout, TaffyError, TaffyTree};

pub const SCREEN_PADDING: f32 = 20.0;
pub const HEADER_HEIGHT: f32 = 64.0;
pub const CONTROLS_HEIGHT: f32 = 150.0;
pub const STATUS_HEIGHT: f32 = 110.0;
pub const BUTTON_SIZE: f32 = 42.0;
pub const BUTTON_GAP: f32 = 6.0;
const SECTION_GAP: f32 = 12.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameLayout {
    pub header: PanelRect,
    pub maze: PanelRect,
    pub controls: PanelRect,
    pub status: PanelRect,
}

impl FrameLayout {
    pub fn button_pad(&self) -> ButtonPad {
        let center_x = self.controls.x + self.controls.width / 2.0;
        let center_y = self.controls.y + self.controls.height / 2.0;
        ButtonPad::cross(center_x, center_y, BUTTON_SIZE, BUTTON_GAP)
    }
}

pub struct ScreenLayout {
    taffy: TaffyTree<()>,
    root: NodeId,
    header: NodeId,
    maze: NodeId,
    controls: NodeId,
    status: NodeId,
}

impl ScreenLayout {
    pub fn new() -> Result<Self, TaffyError> {
        let mut taffy = TaffyTree::new();
        let fixed_row = |height: f32| Style {
            size: Size { width: percent(1.0), height: length(height) },
            flex_shrink: 0.0,
            ..Default::default()
        };

        let header = taffy.new_leaf(fixed_row(HEADER_HEIGHT))?;
        let maze = taffy.new_leaf(Style {
            flex_grow: 1.0,
            size: Size { width: percent(1.0), height: auto() },
            ..Default::default()
        })?;
        let controls = taffy.new_leaf(fixed_row(CONTROLS_HEIGHT))?;
        let status = taffy.new_leaf(fixed_row(STATUS_HEIGHT))?;
        let root = taffy.new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                size: Size { width: percent(1.0), height: percent(1.0) },
                gap: Size { width: zero(), height: length(SECTION_GAP) },
                padding: taffy::Rect {
                    left: length(SCREEN_PADDING),
                    right: length(SCREEN_PADDING),
                    top: length(SCREEN_PADDING),
                    bottom: length(SCREEN_PADDING),
                },
                ..Default::default()
            },
            &[header, maze, controls, status],
        )?;

        Ok(Self { taffy, root, header, maze, controls, status })
    }

    pub fn compute(
        &mut self,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<FrameLayout, TaffyError> {
        let available_size = Size {
            width: AvailableSpace::Definite(viewport_width),
            height: AvailableSpace::Definite(viewport_height),
        };
        self.taffy.compute_layout(self.root, available_size)?;

        let root = *self.taffy.layout(self.root)?;
        Ok(FrameLayout {
            header: self.panel_rect(self.header, &root)?,
            maze: self.panel_rect(self.maze, &root)?,
            controls: self.panel_rect(self.controls, &root)?,
            status: self.panel_rect(self.status, &root)?,
        })
    }

    fn panel_rect(&self, node: NodeId, root: &Layout) -> Result<PanelRect, TaffyError> {
        let layout = self.taffy.layout(node)?;
        Ok(PanelRect {
            x: root.location.x + layout.location.x,
            y: root.location.y + layout.location.y,
            width: layout.size.width,
            height: layout.size.height,
        })
    }
}

/// Vertical space taken by everything except the maze itself.
pub fn chrome_height() -> f32 {
    2.0 * SCREEN_PADDING + HEADER_HEIGHT + CONTROLS_HEIGHT + STATUS_HEIGHT + 3.0 * SECTION_GAP
}
