use std::path::Path;
use std::sync::Arc;

use super::decorator::{Chrome, DefaultDecorator, HeaderAction, WindowDecorator};
use super::managed_window::{ManagedWindow, WindowCtx};
use super::options::WindowOptions;
use super::transition::StepOutcome;
use super::WindowId;
use crate::animation::{Clock, SystemClock};
use crate::clipboard::ClipboardSource;
use crate::config::DesktopConfig;
use crate::content::{ContentError, read_html_file};
use crate::layout::floating::PointerSource;
use crate::layout::snap::SnapRegion;
use crate::layout::{Point, Viewport, rect_contains};
use crate::pointer::{PointerEvent, PointerKind};
use crate::surface::PresentationSurface;

/// Registry of open windows.
///
/// Owns active-window selection, the z layers, the taskbar icons and the
/// single pointer dispatch path. Window geometry and mode changes are
/// delegated to [`ManagedWindow`].
pub struct WindowManager<S: PresentationSurface, C: Clock = SystemClock> {
    windows: Vec<ManagedWindow>,
    active: Option<WindowId>,
    /// Window that owns the running drag or resize, if any.
    grab: Option<WindowId>,
    surface: S,
    clock: C,
    config: DesktopConfig,
    viewport: Viewport,
    decorator: Arc<dyn WindowDecorator>,
    last_id: Option<u64>,
}

impl<S: PresentationSurface> WindowManager<S, SystemClock> {
    pub fn new(surface: S, width: u32, height: u32) -> Self {
        Self::with_clock(
            surface,
            SystemClock::new(),
            width,
            height,
            DesktopConfig::default(),
        )
    }
}

impl<S: PresentationSurface, C: Clock> WindowManager<S, C> {
    pub fn with_clock(surface: S, clock: C, width: u32, height: u32, config: DesktopConfig) -> Self {
        let dock_height = surface.dock_height().unwrap_or(0);
        Self {
            windows: Vec::new(),
            active: None,
            grab: None,
            surface,
            clock,
            config,
            viewport: Viewport::new(width, height, dock_height),
            decorator: Arc::new(DefaultDecorator),
            last_id: None,
        }
    }

    pub fn set_decorator(&mut self, decorator: Arc<dyn WindowDecorator>) {
        self.decorator = decorator;
    }

    pub fn decorator(&self) -> Arc<dyn WindowDecorator> {
        Arc::clone(&self.decorator)
    }

    pub fn windows(&self) -> &[ManagedWindow] {
        &self.windows
    }

    pub fn window(&self, id: WindowId) -> Option<&ManagedWindow> {
        self.windows.iter().find(|w| w.id() == id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.window(id).is_some()
    }

    pub fn active_window(&self) -> Option<WindowId> {
        self.active
    }

    /// Window that owns the running drag or resize.
    pub fn grabbed_window(&self) -> Option<WindowId> {
        self.grab
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn chrome(&self, window: &ManagedWindow) -> Chrome {
        window.chrome(&self.config)
    }

    /// Earliest pending animation step across all windows.
    pub fn next_due(&self) -> Option<u64> {
        self.windows.iter().filter_map(ManagedWindow::next_due).min()
    }

    /// Register a new window, play its fly-in and make it active.
    pub fn add_window(&mut self, options: WindowOptions) -> WindowId {
        let now = self.clock.now_ms();
        let raw = match self.last_id {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last_id = Some(raw);
        let id = WindowId(raw);

        let mut window = ManagedWindow::new(id, &options);
        {
            let mut ctx = WindowCtx {
                surface: &mut self.surface,
                viewport: self.viewport,
                config: &self.config,
                now_ms: now,
            };
            window.open(&mut ctx);
        }
        if !window.system_panel() && self.surface.has_taskbar() {
            self.surface.add_taskbar_icon(id, window.title());
        }
        tracing::info!(window_id = %id, title = %window.title(), "opened window");
        self.windows.push(window);
        self.set_active_window(id);
        id
    }

    /// Unregister a window and drop everything that refers to it. The next
    /// window in line becomes active if the removed one was.
    pub fn remove_window(&mut self, id: WindowId) {
        let Some(idx) = self.windows.iter().position(|w| w.id() == id) else {
            tracing::debug!(window_id = %id, "remove of unknown window");
            return;
        };
        self.windows.remove(idx);
        if self.grab == Some(id) {
            self.grab = None;
            self.surface.hide_snap_preview();
        }
        self.surface.remove_taskbar_icon(id);
        self.surface.remove_window(id);
        tracing::info!(window_id = %id, "removed window");

        if self.active == Some(id) {
            self.active = None;
            if let Some(next) = self.windows.last().map(ManagedWindow::id) {
                self.set_active_window(next);
            }
        }
    }

    /// Move the foreground layer and the taskbar marker to `id`, restoring
    /// the window if it is minimized. Unknown ids are rejected.
    pub fn set_active_window(&mut self, id: WindowId) -> bool {
        if !self.contains(id) {
            tracing::warn!(window_id = %id, "refusing to activate unknown window");
            return false;
        }
        if let Some(prev) = self.active
            && prev != id
        {
            self.with_window(prev, |w, ctx| w.set_active(ctx, false));
            self.surface.set_taskbar_icon_active(prev, false);
        }
        self.active = Some(id);
        self.with_window(id, |w, ctx| {
            w.set_active(ctx, true);
            if w.is_minimized() {
                w.restore(ctx);
            }
        });
        self.surface.set_taskbar_icon_active(id, true);
        tracing::debug!(window_id = %id, "activated window");
        true
    }

    /// Taskbar icon press: restore a minimized window, minimize the active
    /// one, otherwise bring the window forward.
    pub fn taskbar_click(&mut self, id: WindowId) {
        let Some(window) = self.window(id) else {
            tracing::debug!(window_id = %id, "taskbar click on unknown window");
            return;
        };
        if window.is_minimized() {
            self.set_active_window(id);
        } else if self.active == Some(id) {
            self.minimize(id);
        } else {
            self.set_active_window(id);
        }
    }

    pub fn update_title(&mut self, id: WindowId, title: &str) -> bool {
        let updated = self
            .with_window(id, |w, ctx| w.set_title(ctx.surface, title))
            .is_some();
        if updated {
            self.surface.set_taskbar_icon_title(id, title);
        }
        updated
    }

    pub fn minimize(&mut self, id: WindowId) -> bool {
        self.release_grab_of(id);
        self.with_window(id, |w, ctx| w.minimize(ctx))
            .unwrap_or(false)
    }

    pub fn restore(&mut self, id: WindowId) -> bool {
        self.with_window(id, |w, ctx| w.restore(ctx))
            .unwrap_or(false)
    }

    pub fn toggle_maximize(&mut self, id: WindowId) -> bool {
        self.release_grab_of(id);
        self.with_window(id, |w, ctx| w.toggle_maximize(ctx))
            .unwrap_or(false)
    }

    /// Start the close transition. The window is unregistered by [`tick`]
    /// once the fade-out has played.
    ///
    /// [`tick`]: Self::tick
    pub fn close(&mut self, id: WindowId) -> bool {
        self.release_grab_of(id);
        let started = self
            .with_window(id, |w, ctx| w.begin_close(ctx))
            .unwrap_or(false);
        if started {
            tracing::debug!(window_id = %id, "closing window");
        }
        started
    }

    pub fn unsnap(&mut self, id: WindowId) -> bool {
        self.release_grab_of(id);
        self.with_window(id, |w, ctx| w.unsnap(ctx))
            .unwrap_or(false)
    }

    pub fn snap_window(&mut self, id: WindowId, region: SnapRegion) -> bool {
        self.release_grab_of(id);
        self.with_window(id, |w, ctx| w.snap_to(ctx, region))
            .unwrap_or(false)
    }

    pub fn begin_drag(&mut self, id: WindowId, pointer: Point, source: PointerSource) -> bool {
        self.pointer_up();
        let started = self
            .with_window(id, |w, ctx| w.begin_drag(ctx, pointer, source))
            .unwrap_or(false);
        if started {
            self.grab = Some(id);
        }
        started
    }

    pub fn begin_resize(&mut self, id: WindowId, pointer: Point) -> bool {
        self.pointer_up();
        let started = self
            .with_window(id, |w, ctx| w.begin_resize(ctx, pointer))
            .unwrap_or(false);
        if started {
            self.grab = Some(id);
        }
        started
    }

    /// Forward a move to the grabbed window. Without a grab this is a no-op.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some(id) = self.grab else {
            return false;
        };
        self.with_window(id, |w, ctx| w.pointer_move(ctx, pointer))
            .unwrap_or(false)
    }

    pub fn pointer_up(&mut self) -> bool {
        let Some(id) = self.grab.take() else {
            return false;
        };
        self.with_window(id, |w, ctx| w.pointer_up(ctx));
        true
    }

    /// Single dispatch path for press / move / release.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerKind::Down => self.pointer_down(event.position, event.source),
            PointerKind::Move => self.pointer_move(event.position),
            PointerKind::Up => self.pointer_up(),
        }
    }

    fn pointer_down(&mut self, position: Point, source: PointerSource) -> bool {
        self.pointer_up();
        let Some(id) = self.window_at(position) else {
            return false;
        };
        self.set_active_window(id);
        let Some(window) = self.window(id) else {
            return false;
        };
        let action = self
            .decorator
            .hit_test(window.geometry(), window.chrome(&self.config), position);
        tracing::trace!(window_id = %id, ?action, "pointer down");
        match action {
            HeaderAction::Minimize => {
                self.minimize(id);
            }
            HeaderAction::Maximize => {
                self.toggle_maximize(id);
            }
            HeaderAction::Close => {
                self.close(id);
            }
            HeaderAction::Drag => {
                self.begin_drag(id, position, source);
            }
            HeaderAction::Resize => {
                self.begin_resize(id, position);
            }
            HeaderAction::None => {}
        }
        true
    }

    /// Top-most interactive window under `point`: the active window first,
    /// then the rest from newest to oldest.
    pub fn window_at(&self, point: Point) -> Option<WindowId> {
        self.stacking_order()
            .into_iter()
            .rev()
            .find(|id| {
                self.window(*id)
                    .is_some_and(|w| w.is_interactive() && rect_contains(w.geometry(), point))
            })
    }

    /// Window ids from bottom to top.
    pub fn stacking_order(&self) -> Vec<WindowId> {
        let mut order: Vec<WindowId> = self
            .windows
            .iter()
            .map(ManagedWindow::id)
            .filter(|id| Some(*id) != self.active)
            .collect();
        if let Some(active) = self.active {
            order.push(active);
        }
        order
    }

    /// Apply every animation step that has come due and finish pending
    /// closes. Returns the number of steps applied.
    pub fn tick(&mut self) -> usize {
        let now_ms = self.clock.now_ms();
        let mut applied = 0;
        let mut destroyed = Vec::new();
        {
            let Self {
                windows,
                surface,
                config,
                viewport,
                ..
            } = self;
            for window in windows.iter_mut() {
                let mut ctx = WindowCtx {
                    surface: &mut *surface,
                    viewport: *viewport,
                    config: &*config,
                    now_ms,
                };
                let (count, outcome) = window.run_due_steps(&mut ctx);
                applied += count;
                if outcome == StepOutcome::Destroyed {
                    destroyed.push(window.id());
                }
            }
        }
        for id in destroyed {
            self.remove_window(id);
        }
        applied
    }

    /// The host reports a new viewport size; every window is fitted back
    /// into the usable area.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height, self.surface.dock_height().unwrap_or(0));
        let now_ms = self.clock.now_ms();
        let Self {
            windows,
            surface,
            config,
            viewport,
            ..
        } = self;
        for window in windows.iter_mut() {
            let mut ctx = WindowCtx {
                surface: &mut *surface,
                viewport: *viewport,
                config: &*config,
                now_ms,
            };
            window.reclamp(&mut ctx);
        }
        tracing::debug!(width, height, "viewport resized");
    }

    /// Load an HTML file into a blank window.
    pub fn upload_file(&mut self, id: WindowId, path: &Path) -> Result<(), ContentError> {
        self.content_op(id, |w, surface| {
            w.ensure_can_upload()?;
            let html = read_html_file(path)?;
            w.load_html(surface, html)
        })
    }

    /// Load the clipboard text into a blank window. When the clipboard
    /// cannot be read the window falls back to manual entry.
    pub fn paste_clipboard(
        &mut self,
        id: WindowId,
        clipboard: &mut dyn ClipboardSource,
    ) -> Result<(), ContentError> {
        self.content_op(id, |w, surface| {
            w.ensure_can_upload()?;
            match clipboard.read_text() {
                Ok(text) if text.trim().is_empty() => Err(ContentError::EmptyClipboard),
                Ok(text) => w.load_html(surface, text),
                Err(err) => {
                    w.open_manual_entry(surface)?;
                    Err(err.into())
                }
            }
        })
    }

    pub fn apply_manual_html(&mut self, id: WindowId, text: &str) -> Result<(), ContentError> {
        self.content_op(id, |w, surface| {
            w.ensure_can_upload()?;
            let html = text.trim();
            if html.is_empty() {
                return Err(ContentError::EmptyText);
            }
            w.load_html(surface, html.to_string())
        })
    }

    pub fn reset_content(&mut self, id: WindowId) -> Result<(), ContentError> {
        self.content_op(id, |w, surface| w.reset_content(surface))
    }

    pub fn open_manual_entry(&mut self, id: WindowId) -> Result<(), ContentError> {
        self.content_op(id, |w, surface| w.open_manual_entry(surface))
    }

    pub fn close_manual_entry(&mut self, id: WindowId) -> Result<(), ContentError> {
        self.content_op(id, |w, surface| {
            w.close_manual_entry(surface);
            Ok(())
        })
    }

    fn content_op<F>(&mut self, id: WindowId, f: F) -> Result<(), ContentError>
    where
        F: FnOnce(&mut ManagedWindow, &mut dyn PresentationSurface) -> Result<(), ContentError>,
    {
        let Self {
            windows, surface, ..
        } = self;
        let result = match windows.iter_mut().find(|w| w.id() == id) {
            Some(window) => f(window, &mut *surface),
            None => Err(ContentError::WindowNotFound(id)),
        };
        if let Err(err) = &result {
            tracing::warn!(window_id = %id, error = %err, "content operation failed");
            surface.show_message(&err.to_string());
        }
        result
    }

    fn with_window<T>(
        &mut self,
        id: WindowId,
        f: impl FnOnce(&mut ManagedWindow, &mut WindowCtx<'_>) -> T,
    ) -> Option<T> {
        let now_ms = self.clock.now_ms();
        let Self {
            windows,
            surface,
            config,
            viewport,
            ..
        } = self;
        let Some(window) = windows.iter_mut().find(|w| w.id() == id) else {
            tracing::debug!(window_id = %id, "no such window");
            return None;
        };
        let mut ctx = WindowCtx {
            surface: &mut *surface,
            viewport: *viewport,
            config: &*config,
            now_ms,
        };
        Some(f(window, &mut ctx))
    }

    fn release_grab_of(&mut self, id: WindowId) {
        if self.grab == Some(id) {
            self.grab = None;
            self.with_window(id, |w, ctx| w.cancel_interaction(ctx));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::VirtualClock;
    use crate::surface::DesktopSurface;
    use crate::window::WindowMode;

    fn manager() -> (WindowManager<DesktopSurface, VirtualClock>, VirtualClock) {
        let clock = VirtualClock::new(1_000);
        let wm = WindowManager::with_clock(
            DesktopSurface::new(Some(60)),
            clock.clone(),
            1920,
            1080,
            DesktopConfig::default(),
        );
        (wm, clock)
    }

    #[test]
    fn ids_strictly_increase_on_a_frozen_clock() {
        let (mut wm, _clock) = manager();
        let a = wm.add_window(WindowOptions::default());
        let b = wm.add_window(WindowOptions::default());
        let c = wm.add_window(WindowOptions::default());
        assert_eq!(a, WindowId(1_000));
        assert!(a < b && b < c);
    }

    #[test]
    fn new_window_is_active_and_on_the_foreground_layer() {
        let (mut wm, _clock) = manager();
        let a = wm.add_window(WindowOptions::new("a"));
        let b = wm.add_window(WindowOptions::new("b"));
        assert_eq!(wm.active_window(), Some(b));
        let surface = wm.surface();
        assert_eq!(surface.element(b).unwrap().z_index, 1000);
        assert_eq!(surface.element(a).unwrap().z_index, 100);
        assert!(surface.taskbar_icon(b).unwrap().active);
        assert!(!surface.taskbar_icon(a).unwrap().active);
        assert_eq!(wm.stacking_order(), vec![a, b]);
    }

    #[test]
    fn open_flies_in_from_the_bottom() {
        let (mut wm, clock) = manager();
        let id = wm.add_window(WindowOptions::default());
        let el = wm.surface().element(id).unwrap();
        assert_eq!(el.top, 1020);
        assert_eq!(el.opacity, 0.0);
        assert!(!wm.window(id).unwrap().is_animating());

        clock.advance(10);
        assert_eq!(wm.tick(), 1);
        let el = wm.surface().element(id).unwrap();
        assert_eq!(el.top, 100);
        assert_eq!(el.opacity, 1.0);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let (mut wm, _clock) = manager();
        let a = wm.add_window(WindowOptions::default());
        assert!(!wm.set_active_window(WindowId(42)));
        assert_eq!(wm.active_window(), Some(a));
        wm.remove_window(WindowId(42));
        assert_eq!(wm.windows().len(), 1);
        assert!(!wm.minimize(WindowId(42)));
    }

    #[test]
    fn system_panels_get_no_taskbar_icon() {
        let (mut wm, _clock) = manager();
        let id = wm.add_window(WindowOptions::new("panel").system_panel(true));
        assert!(wm.surface().taskbar_icon(id).is_none());
        assert!(wm.surface().element(id).is_some());
    }

    #[test]
    fn press_on_title_bar_drags_and_release_commits() {
        let (mut wm, clock) = manager();
        let id = wm.add_window(WindowOptions::default().rect(crate::layout::WindowRect::new(
            200, 200, 400, 300,
        )));
        assert!(wm.handle_pointer(&PointerEvent::mouse(PointerKind::Down, 250, 210)));
        assert_eq!(wm.grabbed_window(), Some(id));

        clock.advance(20);
        wm.handle_pointer(&PointerEvent::mouse(PointerKind::Move, 350, 310));
        let el = wm.surface().element(id).unwrap();
        assert_eq!(el.transform, Some(Point::new(300, 300)));
        assert_eq!(el.left, 200);

        wm.handle_pointer(&PointerEvent::mouse(PointerKind::Up, 350, 310));
        assert_eq!(wm.grabbed_window(), None);
        let w = wm.window(id).unwrap();
        assert_eq!(w.geometry().origin(), Point::new(300, 300));
        assert_eq!(w.normal_geometry().origin(), Point::new(300, 300));
        let el = wm.surface().element(id).unwrap();
        assert_eq!(el.transform, None);
        assert_eq!((el.left, el.top), (300, 300));
    }

    #[test]
    fn moves_without_a_grab_are_ignored() {
        let (mut wm, _clock) = manager();
        wm.add_window(WindowOptions::default());
        assert!(!wm.pointer_move(Point::new(10, 10)));
        assert!(!wm.pointer_up());
    }

    #[test]
    fn throttled_moves_are_dropped() {
        let (mut wm, clock) = manager();
        let id = wm.add_window(WindowOptions::default());
        assert!(wm.begin_drag(id, Point::new(1010, 110), PointerSource::Touch));
        assert!(wm.pointer_move(Point::new(900, 200)));
        clock.advance(10);
        assert!(!wm.pointer_move(Point::new(800, 200)));
        clock.advance(6);
        assert!(wm.pointer_move(Point::new(800, 200)));
    }

    #[test]
    fn close_removes_window_after_fade() {
        let (mut wm, clock) = manager();
        let a = wm.add_window(WindowOptions::new("a"));
        let b = wm.add_window(WindowOptions::new("b"));
        assert!(wm.close(b));
        assert!(!wm.close(b));
        assert!(wm.window(b).unwrap().is_closing());
        assert_eq!(wm.surface().element(b).unwrap().opacity, 0.0);

        clock.advance(499);
        wm.tick();
        assert!(wm.contains(b));
        clock.advance(1);
        wm.tick();
        assert!(!wm.contains(b));
        assert!(wm.surface().element(b).is_none());
        assert!(wm.surface().taskbar_icon(b).is_none());
        assert_eq!(wm.active_window(), Some(a));
    }

    #[test]
    fn closing_the_grabbed_window_releases_the_grab() {
        let (mut wm, clock) = manager();
        let id = wm.add_window(WindowOptions::default());
        wm.begin_drag(id, Point::new(1010, 110), PointerSource::Mouse);
        clock.advance(20);
        wm.pointer_move(Point::new(10, 500));
        assert!(wm.surface().snap_preview().is_some());
        wm.close(id);
        assert_eq!(wm.grabbed_window(), None);
        assert!(wm.surface().snap_preview().is_none());
        assert!(!wm.pointer_move(Point::new(20, 500)));
    }

    #[test]
    fn control_buttons_route_to_operations() {
        let (mut wm, _clock) = manager();
        let id = wm.add_window(WindowOptions::default().rect(crate::layout::WindowRect::new(
            100, 100, 400, 300,
        )));
        let window = wm.window(id).unwrap();
        let controls = wm
            .decorator()
            .control_rects(window.geometry(), wm.chrome(window));
        let maximize = controls[1].1;
        wm.handle_pointer(&PointerEvent::mouse(
            PointerKind::Down,
            maximize.x + 2,
            maximize.y + 2,
        ));
        assert_eq!(wm.window(id).unwrap().mode(), WindowMode::Maximized);
        assert_eq!(wm.surface().dock_hidden(), Some(true));
    }

    #[test]
    fn grip_press_on_maximized_window_keeps_saved_rectangle() {
        use crate::layout::WindowRect;

        let (mut wm, _clock) = manager();
        let saved = WindowRect::new(100, 100, 350, 570);
        let id = wm.add_window(WindowOptions::default().rect(saved));
        wm.toggle_maximize(id);

        assert!(wm.handle_pointer(&PointerEvent::mouse(PointerKind::Down, 1910, 1070)));
        let w = wm.window(id).unwrap();
        assert!(w.is_resizing());
        assert_eq!(w.mode(), WindowMode::Normal);
        assert_eq!(w.geometry(), WindowRect::new(0, 0, 1920, 1020));
        assert_eq!(w.normal_geometry(), saved);
        assert_eq!(wm.surface().dock_hidden(), Some(false));
        assert_eq!(
            wm.surface().element(id).unwrap().layout_rect(),
            WindowRect::new(0, 0, 1920, 1020)
        );
        wm.handle_pointer(&PointerEvent::mouse(PointerKind::Up, 1910, 1070));

        wm.toggle_maximize(id);
        wm.toggle_maximize(id);
        assert_eq!(wm.window(id).unwrap().mode(), WindowMode::Normal);
        assert_eq!(wm.window(id).unwrap().geometry(), saved);
    }

    #[test]
    fn resize_move_after_leaving_maximize_becomes_normal() {
        use crate::layout::WindowRect;

        let (mut wm, _clock) = manager();
        let id = wm.add_window(WindowOptions::default().rect(WindowRect::new(100, 100, 350, 570)));
        wm.toggle_maximize(id);
        wm.handle_pointer(&PointerEvent::mouse(PointerKind::Down, 1910, 1070));
        wm.handle_pointer(&PointerEvent::mouse(PointerKind::Move, 1800, 900));
        wm.handle_pointer(&PointerEvent::mouse(PointerKind::Up, 1800, 900));

        let resized = WindowRect::new(0, 0, 1810, 850);
        assert_eq!(wm.window(id).unwrap().geometry(), resized);
        wm.toggle_maximize(id);
        wm.toggle_maximize(id);
        assert_eq!(wm.window(id).unwrap().geometry(), resized);
    }

    #[test]
    fn viewport_resize_reclamps_windows() {
        let (mut wm, _clock) = manager();
        let id = wm.add_window(WindowOptions::default());
        wm.set_viewport(1024, 600);
        let g = wm.window(id).unwrap().geometry();
        assert_eq!(g.origin(), Point::new(1024 - 350, 0));
        assert_eq!(wm.viewport().usable_height(), 540);
    }

    #[test]
    fn update_title_changes_window_and_icon() {
        let (mut wm, _clock) = manager();
        let id = wm.add_window(WindowOptions::default());
        assert!(wm.update_title(id, "Docs"));
        assert_eq!(wm.window(id).unwrap().title(), "Docs");
        assert_eq!(wm.surface().taskbar_icon(id).unwrap().title, "Docs");
        assert_eq!(wm.surface().element(id).unwrap().title, "Docs");
    }
}
