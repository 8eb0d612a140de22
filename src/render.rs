//! Terminal rendition of a [`DesktopSurface`].
//!
//! The window manager works in viewport pixels; the preview maps every
//! terminal cell to a `cell_width` x `cell_height` block of them.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

use crate::animation::Clock;
use crate::content::{FrameContent, UploadView};
use crate::layout::{Point, WindowRect};
use crate::surface::{DesktopSurface, ElementState};
use crate::window::WindowManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellScale {
    pub cell_width: u32,
    pub cell_height: u32,
}

impl CellScale {
    pub fn new(cell_width: u32, cell_height: u32) -> Self {
        Self {
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
        }
    }

    /// Viewport size in pixels for a desktop drawn into `area`.
    pub fn viewport_size(&self, area: Rect) -> (u32, u32) {
        (
            area.width as u32 * self.cell_width,
            area.height as u32 * self.cell_height,
        )
    }

    /// Pixel at the centre of the cell at `column`, `row`.
    pub fn to_point(&self, area: Rect, column: u16, row: u16) -> Point {
        let col = column.saturating_sub(area.x) as i64;
        let row = row.saturating_sub(area.y) as i64;
        Point::new(
            (col * self.cell_width as i64 + self.cell_width as i64 / 2) as i32,
            (row * self.cell_height as i64 + self.cell_height as i64 / 2) as i32,
        )
    }

    /// Cells covered by `rect`, clipped to `area`.
    pub fn to_cells(&self, area: Rect, rect: WindowRect) -> Option<Rect> {
        let cw = self.cell_width as i64;
        let ch = self.cell_height as i64;
        let x0 = (rect.x as i64).div_euclid(cw).max(0);
        let y0 = (rect.y as i64).div_euclid(ch).max(0);
        let x1 = ((rect.right() as i64 + cw - 1).div_euclid(cw)).min(area.width as i64);
        let y1 = ((rect.bottom() as i64 + ch - 1).div_euclid(ch)).min(area.height as i64);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect::new(
            area.x + x0 as u16,
            area.y + y0 as u16,
            (x1 - x0) as u16,
            (y1 - y0) as u16,
        ))
    }

    /// Terminal rows needed for a dock `dock_height` pixels tall.
    pub fn rows_for(&self, pixels: u32) -> u16 {
        pixels.div_ceil(self.cell_height) as u16
    }
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let text = truncate_to_width(text, max_x.saturating_sub(x) as usize);
    buffer.set_string(x, y, text, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

/// Draw every visible window, bottom to top, then the snap preview.
pub fn render_desktop<C: Clock>(
    buffer: &mut Buffer,
    area: Rect,
    wm: &WindowManager<DesktopSurface, C>,
    scale: CellScale,
) {
    let area = area.intersection(buffer.area);
    if area.is_empty() {
        return;
    }
    let surface = wm.surface();
    let decorator = wm.decorator();

    for id in surface.stacking_order() {
        let (Some(el), Some(window)) = (surface.element(id), wm.window(id)) else {
            continue;
        };
        if !el.is_visible() {
            continue;
        }
        let Some(cells) = scale.to_cells(area, el.displayed_rect()) else {
            continue;
        };
        decorator.render_window(buffer, cells, &el.title, el.active, wm.chrome(window));
        render_content(buffer, cells, el);
    }

    if let Some(preview) = surface.snap_preview()
        && let Some(cells) = scale.to_cells(area, preview)
    {
        render_preview(buffer, cells);
    }
}

fn content_lines(el: &ElementState) -> Vec<String> {
    match el.upload_view {
        UploadView::Choose => vec![
            "Load some HTML".to_string(),
            "[f] file  [p] paste  [e] type".to_string(),
        ],
        UploadView::ManualEntry => vec!["Type HTML, Enter loads, Esc cancels".to_string()],
        UploadView::Loaded | UploadView::Hidden => match &el.content {
            FrameContent::Url(url) => vec![url.clone(), "[o] open in browser".to_string()],
            FrameContent::Html(html) => html.lines().map(str::to_string).collect(),
            FrameContent::Empty => Vec::new(),
        },
    }
}

fn render_content(buffer: &mut Buffer, cells: Rect, el: &ElementState) {
    let inner = Rect::new(
        cells.x.saturating_add(1),
        cells.y.saturating_add(1),
        cells.width.saturating_sub(2),
        cells.height.saturating_sub(2),
    );
    if inner.is_empty() {
        return;
    }
    let style = match el.upload_view {
        UploadView::Choose | UploadView::ManualEntry => {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC)
        }
        _ => Style::default(),
    };
    for (row, line) in content_lines(el).iter().enumerate() {
        let Ok(row) = u16::try_from(row) else {
            break;
        };
        if row >= inner.height {
            break;
        }
        safe_set_string(buffer, inner, inner.x, inner.y + row, line, style);
    }
}

fn render_preview(buffer: &mut Buffer, cells: Rect) {
    let style = Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM);
    let right = cells.x + cells.width - 1;
    let bottom = cells.y + cells.height - 1;
    for y in cells.y..=bottom {
        for x in cells.x..=right {
            if (x == cells.x || x == right || y == cells.y || y == bottom)
                && let Some(cell) = buffer.cell_mut((x, y))
            {
                cell.set_symbol("┄").set_style(style);
            }
        }
    }
}
