use std::collections::{BTreeMap, VecDeque};

use super::{ElementSpec, PresentationSurface, StyleUpdate, Transition};
use crate::content::{FrameContent, UploadView};
use crate::layout::{Point, WindowRect};
use crate::window::{WindowId, WindowMode};

const MESSAGE_BACKLOG: usize = 8;

/// Everything the page shows for one window element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementState {
    pub title: String,
    pub system_panel: bool,
    pub show_title_bar: bool,
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
    pub opacity: f32,
    pub z_index: i32,
    pub transform: Option<Point>,
    pub transition: Transition,
    pub active: bool,
    pub mode: WindowMode,
    pub content: FrameContent,
    pub upload_view: UploadView,
}

impl ElementState {
    fn new(spec: &ElementSpec) -> Self {
        Self {
            title: spec.title.clone(),
            system_panel: spec.system_panel,
            show_title_bar: spec.show_title_bar,
            left: 0,
            top: 0,
            width: 0,
            height: 0,
            opacity: 1.0,
            z_index: 0,
            transform: None,
            transition: Transition::None,
            active: false,
            mode: WindowMode::Normal,
            content: FrameContent::Empty,
            upload_view: UploadView::Hidden,
        }
    }

    /// Layout rectangle from the inline styles.
    pub fn layout_rect(&self) -> WindowRect {
        WindowRect::new(self.left, self.top, self.width, self.height)
    }

    /// Where the element is drawn: the layout rectangle, moved to the
    /// transform origin while a drag is in flight.
    pub fn displayed_rect(&self) -> WindowRect {
        let rect = self.layout_rect();
        match self.transform {
            Some(origin) => rect.with_origin(origin),
            None => rect,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.width > 0 && self.height > 0
    }

    fn apply(&mut self, style: &StyleUpdate) {
        if let Some(v) = style.left {
            self.left = v;
        }
        if let Some(v) = style.top {
            self.top = v;
        }
        if let Some(v) = style.width {
            self.width = v;
        }
        if let Some(v) = style.height {
            self.height = v;
        }
        if let Some(v) = style.opacity {
            self.opacity = v.clamp(0.0, 1.0);
        }
        if let Some(v) = style.z_index {
            self.z_index = v;
        }
        if let Some(v) = style.transform {
            self.transform = v;
        }
        if let Some(v) = style.transition {
            self.transition = v;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarIcon {
    pub id: WindowId,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dock {
    height: u32,
    hidden: bool,
}

/// In-memory model of the desktop page.
#[derive(Debug, Clone)]
pub struct DesktopSurface {
    elements: BTreeMap<WindowId, ElementState>,
    taskbar: Option<Vec<TaskbarIcon>>,
    dock: Option<Dock>,
    snap_preview: Option<WindowRect>,
    messages: VecDeque<String>,
}

impl Default for DesktopSurface {
    fn default() -> Self {
        Self::new(None)
    }
}

impl DesktopSurface {
    /// A page with a taskbar and, when `dock_height` is given, a dock.
    pub fn new(dock_height: Option<u32>) -> Self {
        Self {
            elements: BTreeMap::new(),
            taskbar: Some(Vec::new()),
            dock: dock_height.map(|height| Dock {
                height,
                hidden: false,
            }),
            snap_preview: None,
            messages: VecDeque::new(),
        }
    }

    pub fn without_taskbar(mut self) -> Self {
        self.taskbar = None;
        self
    }

    pub fn element(&self, id: WindowId) -> Option<&ElementState> {
        self.elements.get(&id)
    }

    pub fn elements(&self) -> impl Iterator<Item = (WindowId, &ElementState)> {
        self.elements.iter().map(|(id, el)| (*id, el))
    }

    /// Element ids from bottom to top. Equal layers keep creation order.
    pub fn stacking_order(&self) -> Vec<WindowId> {
        let mut ids: Vec<(i32, WindowId)> = self
            .elements
            .iter()
            .map(|(id, el)| (el.z_index, *id))
            .collect();
        ids.sort();
        ids.into_iter().map(|(_, id)| id).collect()
    }

    pub fn taskbar_icons(&self) -> &[TaskbarIcon] {
        self.taskbar.as_deref().unwrap_or(&[])
    }

    pub fn taskbar_icon(&self, id: WindowId) -> Option<&TaskbarIcon> {
        self.taskbar_icons().iter().find(|icon| icon.id == id)
    }

    /// `None` when the page has no dock.
    pub fn dock_hidden(&self) -> Option<bool> {
        self.dock.map(|d| d.hidden)
    }

    pub fn snap_preview(&self) -> Option<WindowRect> {
        self.snap_preview
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages.back().map(String::as_str)
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    fn element_mut(&mut self, id: WindowId) -> Option<&mut ElementState> {
        let el = self.elements.get_mut(&id);
        if el.is_none() {
            tracing::debug!(window_id = %id, "surface update for missing element");
        }
        el
    }

    fn icon_mut(&mut self, id: WindowId) -> Option<&mut TaskbarIcon> {
        self.taskbar
            .as_mut()
            .and_then(|icons| icons.iter_mut().find(|icon| icon.id == id))
    }
}

impl PresentationSurface for DesktopSurface {
    fn has_taskbar(&self) -> bool {
        self.taskbar.is_some()
    }

    fn dock_height(&self) -> Option<u32> {
        self.dock.map(|d| d.height)
    }

    fn set_dock_hidden(&mut self, hidden: bool) {
        if let Some(dock) = self.dock.as_mut() {
            dock.hidden = hidden;
        }
    }

    fn create_window(&mut self, id: WindowId, spec: &ElementSpec) {
        self.elements.insert(id, ElementState::new(spec));
    }

    fn remove_window(&mut self, id: WindowId) {
        self.elements.remove(&id);
    }

    fn apply_style(&mut self, id: WindowId, style: &StyleUpdate) {
        if let Some(el) = self.element_mut(id) {
            el.apply(style);
        }
    }

    fn set_window_active(&mut self, id: WindowId, active: bool) {
        if let Some(el) = self.element_mut(id) {
            el.active = active;
        }
    }

    fn set_window_mode(&mut self, id: WindowId, mode: WindowMode) {
        if let Some(el) = self.element_mut(id) {
            el.mode = mode;
        }
    }

    fn set_window_title(&mut self, id: WindowId, title: &str) {
        if let Some(el) = self.element_mut(id) {
            el.title = title.to_string();
        }
    }

    fn add_taskbar_icon(&mut self, id: WindowId, title: &str) {
        if let Some(icons) = self.taskbar.as_mut() {
            icons.retain(|icon| icon.id != id);
            icons.push(TaskbarIcon {
                id,
                title: title.to_string(),
                active: false,
            });
        }
    }

    fn remove_taskbar_icon(&mut self, id: WindowId) {
        if let Some(icons) = self.taskbar.as_mut() {
            icons.retain(|icon| icon.id != id);
        }
    }

    fn set_taskbar_icon_active(&mut self, id: WindowId, active: bool) {
        if let Some(icon) = self.icon_mut(id) {
            icon.active = active;
        }
    }

    fn set_taskbar_icon_title(&mut self, id: WindowId, title: &str) {
        if let Some(icon) = self.icon_mut(id) {
            icon.title = title.to_string();
        }
    }

    fn show_snap_preview(&mut self, rect: WindowRect) {
        self.snap_preview = Some(rect);
    }

    fn hide_snap_preview(&mut self) {
        self.snap_preview = None;
    }

    fn set_content(&mut self, id: WindowId, content: &FrameContent) {
        if let Some(el) = self.element_mut(id) {
            el.content = content.clone();
        }
    }

    fn set_upload_view(&mut self, id: WindowId, view: UploadView) {
        if let Some(el) = self.element_mut(id) {
            el.upload_view = view;
        }
    }

    fn show_message(&mut self, text: &str) {
        if self.messages.len() == MESSAGE_BACKLOG {
            self.messages.pop_front();
        }
        self.messages.push_back(text.to_string());
    }
}
