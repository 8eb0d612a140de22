//! The presentation surface: every visual side effect of the window manager
//! goes through [`PresentationSurface`], addressed by window id.
//!
//! A browser host maps these calls onto DOM mutations (class toggles,
//! inline styles, taskbar icon elements). [`DesktopSurface`] is an in-memory
//! model of the same page that the terminal preview renders and the tests
//! inspect.

mod model;

pub use model::{DesktopSurface, ElementState, TaskbarIcon};

use crate::content::{FrameContent, UploadView};
use crate::layout::{Point, WindowRect};
use crate::window::{WindowId, WindowMode};

/// Transition presets applied to a window element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    /// Properties change immediately.
    #[default]
    None,
    /// Position and opacity ease over the transition duration; used for the
    /// open fly-in and for close.
    Slide,
    /// Position and opacity ease over the full duration while the size
    /// collapses over a shorter span that starts slightly later, so the
    /// shrink and the fall read as two steps.
    Staged,
}

impl Transition {
    /// CSS `transition` value for browser hosts.
    pub fn css(self) -> &'static str {
        match self {
            Transition::None => "",
            Transition::Slide => "top 0.5s ease-out, opacity 0.5s ease-out",
            Transition::Staged => {
                "top 0.5s cubic-bezier(0.4, 0, 0.2, 1), \
                 opacity 0.5s cubic-bezier(0.4, 0, 0.2, 1), \
                 width 0.3s cubic-bezier(0.4, 0, 0.2, 1) 0.1s, \
                 height 0.3s cubic-bezier(0.4, 0, 0.2, 1) 0.1s"
            }
        }
    }
}

/// A batch of inline style changes. Unset fields are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleUpdate {
    pub left: Option<i32>,
    pub top: Option<i32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub opacity: Option<f32>,
    pub z_index: Option<i32>,
    /// `Some(Some(origin))` displays the element at `origin` without
    /// touching its layout position; `Some(None)` clears the override.
    pub transform: Option<Option<Point>>,
    pub transition: Option<Transition>,
}

impl StyleUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(rect: WindowRect) -> Self {
        Self::new()
            .left(rect.x)
            .top(rect.y)
            .width(rect.width)
            .height(rect.height)
    }

    pub fn left(mut self, value: i32) -> Self {
        self.left = Some(value);
        self
    }

    pub fn top(mut self, value: i32) -> Self {
        self.top = Some(value);
        self
    }

    pub fn width(mut self, value: u32) -> Self {
        self.width = Some(value);
        self
    }

    pub fn height(mut self, value: u32) -> Self {
        self.height = Some(value);
        self
    }

    pub fn opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn z_index(mut self, value: i32) -> Self {
        self.z_index = Some(value);
        self
    }

    pub fn transform(mut self, value: Option<Point>) -> Self {
        self.transform = Some(value);
        self
    }

    pub fn transition(mut self, value: Transition) -> Self {
        self.transition = Some(value);
        self
    }
}

/// Static facts about a window element, fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpec {
    pub title: String,
    pub system_panel: bool,
    pub show_title_bar: bool,
}

pub trait PresentationSurface {
    /// Whether the page hosts a taskbar icon container. Without one no icons
    /// are created.
    fn has_taskbar(&self) -> bool {
        true
    }

    /// Height of the dock, or `None` when the page has no dock.
    fn dock_height(&self) -> Option<u32>;

    fn set_dock_hidden(&mut self, hidden: bool);

    fn create_window(&mut self, id: WindowId, spec: &ElementSpec);
    fn remove_window(&mut self, id: WindowId);
    fn apply_style(&mut self, id: WindowId, style: &StyleUpdate);
    fn set_window_active(&mut self, id: WindowId, active: bool);
    fn set_window_mode(&mut self, id: WindowId, mode: WindowMode);
    fn set_window_title(&mut self, id: WindowId, title: &str);

    fn add_taskbar_icon(&mut self, id: WindowId, title: &str);
    fn remove_taskbar_icon(&mut self, id: WindowId);
    fn set_taskbar_icon_active(&mut self, id: WindowId, active: bool);
    fn set_taskbar_icon_title(&mut self, id: WindowId, title: &str);

    fn show_snap_preview(&mut self, rect: WindowRect);
    fn hide_snap_preview(&mut self);

    fn set_content(&mut self, id: WindowId, content: &FrameContent);
    fn set_upload_view(&mut self, id: WindowId, view: UploadView);

    /// Transient user-facing notice.
    fn show_message(&mut self, text: &str);
}
