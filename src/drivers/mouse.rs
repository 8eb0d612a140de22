use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::pointer::{PointerEvent, PointerKind};
use crate::render::CellScale;

/// Translate a terminal mouse report inside `area` into a pointer event in
/// viewport pixels. Only the left button drives the window manager.
pub fn to_pointer_event(mouse: &MouseEvent, area: Rect, scale: CellScale) -> Option<PointerEvent> {
    let kind = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerKind::Down,
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => PointerKind::Move,
        MouseEventKind::Up(MouseButton::Left) => PointerKind::Up,
        _ => return None,
    };
    let point = scale.to_point(area, mouse.column, mouse.row);
    Some(PointerEvent::mouse(kind, point.x, point.y))
}
