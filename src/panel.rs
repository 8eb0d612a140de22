use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

use crate::render::{safe_set_string, truncate_to_width};
use crate::surface::DesktopSurface;
use crate::window::WindowId;

#[derive(Debug, Clone, Copy)]
struct IconHit {
    id: WindowId,
    rect: Rect,
}

/// The dock strip along the bottom of the preview: one label per taskbar
/// icon, the latest notice, and a host label on the right.
#[derive(Debug, Default)]
pub struct Taskbar {
    area: Rect,
    hits: Vec<IconHit>,
    hostname: Option<String>,
}

impl Taskbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Split `area` into the desktop and, unless the dock is hidden or
    /// absent, a `rows`-tall dock strip at the bottom.
    pub fn split_area(&mut self, area: Rect, rows: u16, dock_hidden: Option<bool>) -> Rect {
        if dock_hidden != Some(false) || rows == 0 {
            self.area = Rect::default();
            return area;
        }
        let rows = rows.min(area.height);
        self.area = Rect::new(area.x, area.bottom() - rows, area.width, rows);
        Rect::new(area.x, area.y, area.width, area.height - rows)
    }

    pub fn render(&mut self, buffer: &mut Buffer, surface: &DesktopSurface, prompt: Option<&str>) {
        self.hits.clear();
        let bounds = self.area.intersection(buffer.area);
        if bounds.is_empty() {
            return;
        }
        let bg = Style::default().bg(Color::Black).fg(Color::Gray);
        for y in bounds.top()..bounds.bottom() {
            for x in bounds.left()..bounds.right() {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.set_symbol(" ").set_style(bg);
                }
            }
        }

        let y = bounds.y + bounds.height / 2;
        let max_x = bounds.right();
        let mut x = bounds.x;
        for icon in surface.taskbar_icons() {
            let max_label = max_x.saturating_sub(x).saturating_sub(2) as usize;
            if max_label == 0 {
                break;
            }
            let label = truncate_to_width(&icon.title, max_label.min(18));
            let chunk = format!(" {label} ");
            let width = chunk.chars().count() as u16;
            let style = if icon.active {
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                bg
            };
            safe_set_string(buffer, bounds, x, y, &chunk, style);
            self.hits.push(IconHit {
                id: icon.id,
                rect: Rect::new(x, bounds.y, width, bounds.height),
            });
            x = x.saturating_add(width + 1);
        }

        let host = self.host_label();
        let notice = prompt.or(surface.last_message()).unwrap_or_default();
        let status = if notice.is_empty() {
            host
        } else {
            format!("{notice} · {host}")
        };
        let room = max_x.saturating_sub(x) as usize;
        if room > 1 {
            let text = truncate_to_width(&status, room - 1);
            let start = max_x.saturating_sub(text.chars().count() as u16);
            safe_set_string(buffer, bounds, start, y, &text, bg.add_modifier(Modifier::DIM));
        }
    }

    /// Window whose icon is under `column`, `row`.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<WindowId> {
        self.hits
            .iter()
            .find(|hit| {
                column >= hit.rect.left()
                    && column < hit.rect.right()
                    && row >= hit.rect.top()
                    && row < hit.rect.bottom()
            })
            .map(|hit| hit.id)
    }

    fn host_label(&mut self) -> String {
        let host = self.hostname.get_or_insert_with(|| {
            hostname::get()
                .ok()
                .and_then(|s| s.into_string().ok())
                .unwrap_or_else(|| "unknown-host".to_string())
        });
        format!("{} {} · {host}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
