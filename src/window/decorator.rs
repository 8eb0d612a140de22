use ratatui::buffer::Buffer;
use ratatui::prelude::Rect;
use ratatui::style::{Color, Modifier, Style};

use crate::config::DesktopConfig;
use crate::constants::{CONTROL_BUTTON_GAP, CONTROL_BUTTON_SIZE};
use crate::layout::{Point, WindowRect, rect_contains};

/// What a press at a given point of a window means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Minimize,
    Maximize,
    Close,
    Drag,
    Resize,
    None,
}

/// Per-window chrome facts the decorator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub show_title_bar: bool,
    pub draggable: bool,
    pub title_bar_height: u32,
    pub resize_handle_size: u32,
    pub reserved_control_width: i32,
}

impl Chrome {
    pub fn new(show_title_bar: bool, draggable: bool, config: &DesktopConfig) -> Self {
        Self {
            show_title_bar,
            draggable,
            title_bar_height: config.title_bar_height,
            resize_handle_size: config.resize_handle_size,
            reserved_control_width: config.reserved_control_width(),
        }
    }
}

pub trait WindowDecorator: std::fmt::Debug {
    /// Classify a press at `point`, which the caller has already found to lie
    /// inside `rect`.
    fn hit_test(&self, rect: WindowRect, chrome: Chrome, point: Point) -> HeaderAction;

    /// Control buttons of a window in viewport pixels.
    fn control_rects(&self, rect: WindowRect, chrome: Chrome) -> Vec<(HeaderAction, WindowRect)>;

    /// Draw the frame of a window occupying `area` in terminal cells.
    fn render_window(
        &self,
        buffer: &mut Buffer,
        area: Rect,
        title: &str,
        focused: bool,
        chrome: Chrome,
    );
}

/// Title bar with minimize / maximize / close on the right and a resize grip
/// in the bottom-right corner. Windows without a title bar keep a lone close
/// button in the top-right corner.
#[derive(Debug, Default)]
pub struct DefaultDecorator;

const BUTTON_INSET: i32 = 12;
const BARE_CLOSE_SIZE: u32 = 20;
const BARE_CLOSE_INSET: i32 = 5;

impl WindowDecorator for DefaultDecorator {
    fn hit_test(&self, rect: WindowRect, chrome: Chrome, point: Point) -> HeaderAction {
        if let Some((action, _)) = self
            .control_rects(rect, chrome)
            .into_iter()
            .find(|(_, r)| rect_contains(*r, point))
        {
            return action;
        }

        let handle = chrome.resize_handle_size as i32;
        if point.x >= rect.right() - handle && point.y >= rect.bottom() - handle {
            return HeaderAction::Resize;
        }

        if !chrome.show_title_bar || point.y >= rect.y + chrome.title_bar_height as i32 {
            return HeaderAction::None;
        }
        if point.x >= rect.right() - chrome.reserved_control_width {
            return HeaderAction::None;
        }
        if chrome.draggable {
            HeaderAction::Drag
        } else {
            HeaderAction::None
        }
    }

    fn control_rects(&self, rect: WindowRect, chrome: Chrome) -> Vec<(HeaderAction, WindowRect)> {
        if !chrome.show_title_bar {
            let x = rect.right() - BARE_CLOSE_SIZE as i32 - BARE_CLOSE_INSET;
            let y = rect.y + BARE_CLOSE_INSET;
            return vec![(
                HeaderAction::Close,
                WindowRect::new(x, y, BARE_CLOSE_SIZE, BARE_CLOSE_SIZE),
            )];
        }

        let size = CONTROL_BUTTON_SIZE as i32;
        let step = size + CONTROL_BUTTON_GAP as i32;
        let y = rect.y + (chrome.title_bar_height as i32 - size) / 2;
        let close_x = rect.right() - BUTTON_INSET - size;
        [
            (HeaderAction::Minimize, close_x - 2 * step),
            (HeaderAction::Maximize, close_x - step),
            (HeaderAction::Close, close_x),
        ]
        .into_iter()
        .map(|(action, x)| {
            (
                action,
                WindowRect::new(x, y, CONTROL_BUTTON_SIZE, CONTROL_BUTTON_SIZE),
            )
        })
        .collect()
    }

    fn render_window(
        &self,
        buffer: &mut Buffer,
        area: Rect,
        title: &str,
        focused: bool,
        chrome: Chrome,
    ) {
        if area.width < 2 || area.height < 2 {
            return;
        }
        let header_style = if focused {
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        };
        let border_style = Style::default().fg(Color::DarkGray);

        let left = area.x;
        let top = area.y;
        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;

        for y in top..=bottom {
            for x in left..=right {
                let Some(cell) = buffer.cell_mut((x, y)) else {
                    continue;
                };
                cell.reset();
                let symbol = match (x == left, x == right, y == top, y == bottom) {
                    (true, _, true, _) if !chrome.show_title_bar => "┌",
                    (_, true, true, _) if !chrome.show_title_bar => "┐",
                    (true, _, _, true) => "└",
                    (_, true, _, true) => "◢",
                    (_, _, true, _) if !chrome.show_title_bar => "─",
                    (_, _, _, true) => "─",
                    (true, _, _, _) | (_, true, _, _) if y != top => "│",
                    _ => " ",
                };
                cell.set_symbol(symbol);
                if y == top && chrome.show_title_bar {
                    cell.set_style(header_style);
                } else {
                    cell.set_style(border_style);
                }
            }
        }

        let controls = if chrome.show_title_bar { "– □ ×" } else { "×" };
        let controls_len = controls.chars().count() as u16;
        if area.width > controls_len + 1 {
            let start = right.saturating_sub(controls_len);
            buffer.set_string(start, top, controls, header_style);
        }

        if chrome.show_title_bar {
            let room = area.width.saturating_sub(controls_len + 3) as usize;
            let label: String = title.chars().take(room).collect();
            buffer.set_string(left + 1, top, label, header_style);
        }
    }
}
