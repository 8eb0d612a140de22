use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_TITLE, DEFAULT_WINDOW_URL, DEFAULT_WINDOW_WIDTH,
    DEFAULT_WINDOW_X, DEFAULT_WINDOW_Y,
};
use crate::layout::WindowRect;

/// Creation options for a window.
///
/// `content` takes precedence over `url`. A window left on `about:blank`
/// without inline content gets the upload surface.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowOptions {
    pub title: String,
    pub url: String,
    pub content: Option<String>,
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
    /// Excluded from the taskbar.
    pub system_panel: bool,
    pub show_title_bar: bool,
    pub draggable: bool,
    /// Whether dragging to a screen edge docks the window.
    pub snapping: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_WINDOW_TITLE.to_string(),
            url: DEFAULT_WINDOW_URL.to_string(),
            content: None,
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            x: DEFAULT_WINDOW_X,
            y: DEFAULT_WINDOW_Y,
            system_panel: false,
            show_title_bar: true,
            draggable: true,
            snapping: true,
        }
    }
}

impl WindowOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn content(mut self, html: impl Into<String>) -> Self {
        self.content = Some(html.into());
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn rect(self, rect: WindowRect) -> Self {
        self.position(rect.x, rect.y).size(rect.width, rect.height)
    }

    pub fn system_panel(mut self, value: bool) -> Self {
        self.system_panel = value;
        self
    }

    pub fn show_title_bar(mut self, value: bool) -> Self {
        self.show_title_bar = value;
        self
    }

    pub fn draggable(mut self, value: bool) -> Self {
        self.draggable = value;
        self
    }

    pub fn snapping(mut self, value: bool) -> Self {
        self.snapping = value;
        self
    }

    pub(crate) fn initial_rect(&self) -> WindowRect {
        WindowRect::new(self.x, self.y, self.width, self.height)
    }
}
