//! Host-neutral pointer events fed into [`crate::window::WindowManager::handle_pointer`].

use crate::layout::Point;
pub use crate::layout::floating::PointerSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
    pub source: PointerSource,
}

impl PointerEvent {
    pub fn mouse(kind: PointerKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
            source: PointerSource::Mouse,
        }
    }

    pub fn touch(kind: PointerKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
            source: PointerSource::Touch,
        }
    }
}
