//! Pointer gestures from terminal mouse events.
//!
//! A press and release on the same cell is a click; anything else is a drag,
//! which 2048 reads as a swipe and the swap puzzle as drag-and-drop.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::Direction;

/// Screen cell as (column, row)
pub type ScreenPos = (u16, u16);

/// Horizontal travel (in columns) a drag needs to count as a swipe.
/// Vertical travel counts double since terminal cells are about twice as
/// tall as they are wide.
pub const SWIPE_MIN_COLUMNS: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Click(ScreenPos),
    Drag { from: ScreenPos, to: ScreenPos },
}

impl Gesture {
    /// Dominant direction of a drag long enough to be a swipe
    pub fn swipe(&self) -> Option<Direction> {
        let Gesture::Drag { from, to } = *self else {
            return None;
        };
        let dx = to.0 as i32 - from.0 as i32;
        let dy = (to.1 as i32 - from.1 as i32) * 2;
        if dx.abs().max(dy.abs()) < SWIPE_MIN_COLUMNS as i32 {
            return None;
        }
        Some(if dx.abs() > dy.abs() {
            if dx > 0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy > 0 {
            Direction::Down
        } else {
            Direction::Up
        })
    }
}

/// Tracks the left button between press and release.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    pressed: Option<(ScreenPos, ScreenPos)>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start and current position while the button is held
    pub fn pressed(&self) -> Option<(ScreenPos, ScreenPos)> {
        self.pressed
    }

    /// Feed one mouse event; returns a gesture when the button is released
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<Gesture> {
        let pos = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = Some((pos, pos));
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some((start, _)) = self.pressed {
                    self.pressed = Some((start, pos));
                }
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (from, _) = self.pressed.take()?;
                if from == pos {
                    Some(Gesture::Click(pos))
                } else {
                    Some(Gesture::Drag { from, to: pos })
                }
            }
            _ => None,
        }
    }
}
