use super::decorator::Chrome;
use super::options::WindowOptions;
use super::transition::{StepOutcome, TransitionStep};
use super::{WindowId, WindowMode};
use crate::animation::Timeline;
use crate::config::DesktopConfig;
use crate::content::{ContentError, ContentFrame, FrameContent, UploadView};
use crate::layout::floating::{
    HeaderDrag, PointerSource, ResizeDrag, apply_header_drag, apply_resize_drag,
};
use crate::layout::snap::{SnapRegion, detect_snap_region};
use crate::layout::{Point, Viewport, WindowRect, clamp_origin};
use crate::surface::{ElementSpec, PresentationSurface, StyleUpdate, Transition};

/// Everything a window operation may touch outside the window itself.
pub(crate) struct WindowCtx<'a> {
    pub surface: &'a mut dyn PresentationSurface,
    pub viewport: Viewport,
    pub config: &'a DesktopConfig,
    pub now_ms: u64,
}

#[derive(Debug, Clone, Copy)]
enum Interaction {
    Drag(HeaderDrag),
    Resize(ResizeDrag),
}

/// One open window: geometry, display mode, the active pointer session and
/// the pending animation steps.
#[derive(Debug)]
pub struct ManagedWindow {
    id: WindowId,
    title: String,
    geometry: WindowRect,
    normal: WindowRect,
    mode: WindowMode,
    animating: bool,
    closing: bool,
    interaction: Option<Interaction>,
    timeline: Timeline<TransitionStep>,
    content: ContentFrame,
    system_panel: bool,
    show_title_bar: bool,
    draggable: bool,
    snapping: bool,
}

impl ManagedWindow {
    pub(crate) fn new(id: WindowId, options: &WindowOptions) -> Self {
        let rect = options.initial_rect();
        Self {
            id,
            title: options.title.clone(),
            geometry: rect,
            normal: rect,
            mode: WindowMode::Normal,
            animating: false,
            closing: false,
            interaction: None,
            timeline: Timeline::new(),
            content: ContentFrame::new(&options.url, options.content.as_deref()),
            system_panel: options.system_panel,
            show_title_bar: options.show_title_bar,
            draggable: options.draggable,
            snapping: options.snapping,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rectangle the window occupies in its current mode.
    pub fn geometry(&self) -> WindowRect {
        self.geometry
    }

    /// Last normal-mode rectangle, restored on un-maximize and un-snap.
    pub fn normal_geometry(&self) -> WindowRect {
        self.normal
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    pub fn snap_region(&self) -> Option<SnapRegion> {
        self.mode.snap_region()
    }

    pub fn is_minimized(&self) -> bool {
        self.mode.is_minimized()
    }

    pub fn is_maximized(&self) -> bool {
        self.mode.is_maximized()
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.interaction, Some(Interaction::Drag(_)))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.interaction, Some(Interaction::Resize(_)))
    }

    /// Shown on screen and able to take pointer input.
    pub fn is_interactive(&self) -> bool {
        !self.closing && !self.is_minimized()
    }

    pub fn system_panel(&self) -> bool {
        self.system_panel
    }

    pub fn show_title_bar(&self) -> bool {
        self.show_title_bar
    }

    pub fn draggable(&self) -> bool {
        self.draggable
    }

    pub fn snapping(&self) -> bool {
        self.snapping
    }

    pub fn content(&self) -> &FrameContent {
        self.content.content()
    }

    pub fn url(&self) -> Option<&str> {
        match self.content.content() {
            FrameContent::Url(url) => Some(url),
            _ => None,
        }
    }

    pub fn upload_view(&self) -> UploadView {
        self.content.upload_view()
    }

    pub fn has_uploaded(&self) -> bool {
        self.content.has_uploaded()
    }

    pub fn pending_steps(&self) -> usize {
        self.timeline.len()
    }

    pub fn next_due(&self) -> Option<u64> {
        self.timeline.next_due()
    }

    pub fn chrome(&self, config: &DesktopConfig) -> Chrome {
        Chrome::new(self.show_title_bar, self.draggable, config)
    }

    /// Create the element and start the fly-in from the bottom edge.
    pub(crate) fn open(&mut self, ctx: &mut WindowCtx<'_>) {
        ctx.surface.create_window(
            self.id,
            &ElementSpec {
                title: self.title.clone(),
                system_panel: self.system_panel,
                show_title_bar: self.show_title_bar,
            },
        );
        ctx.surface.set_window_mode(self.id, self.mode);
        self.sync_content(ctx.surface);
        ctx.surface.apply_style(
            self.id,
            &StyleUpdate::new()
                .left(self.geometry.x)
                .top(ctx.viewport.usable_height() as i32)
                .width(self.geometry.width)
                .height(self.geometry.height)
                .opacity(0.0)
                .z_index(ctx.config.base_z_index)
                .transition(Transition::Slide),
        );
        self.timeline
            .schedule(ctx.now_ms + ctx.config.reveal_delay_ms, TransitionStep::FlyIn);
    }

    pub(crate) fn set_active(&self, ctx: &mut WindowCtx<'_>, active: bool) {
        let z = if active {
            ctx.config.foreground_z_index
        } else {
            ctx.config.base_z_index
        };
        ctx.surface
            .apply_style(self.id, &StyleUpdate::new().z_index(z));
        ctx.surface.set_window_active(self.id, active);
    }

    pub(crate) fn set_title(&mut self, surface: &mut dyn PresentationSurface, title: &str) {
        self.title = title.to_string();
        surface.set_window_title(self.id, title);
    }

    pub(crate) fn begin_drag(
        &mut self,
        ctx: &mut WindowCtx<'_>,
        pointer: Point,
        source: PointerSource,
    ) -> bool {
        if !self.is_interactive() || !self.show_title_bar || !self.draggable {
            tracing::debug!(window_id = %self.id, "drag refused");
            return false;
        }
        if self.is_maximized() {
            tracing::debug!(window_id = %self.id, "maximized windows do not drag");
            return false;
        }
        let interval = ctx.config.move_interval_ms(source);
        self.interaction = Some(Interaction::Drag(HeaderDrag::new(
            source,
            pointer,
            self.geometry,
            interval,
        )));
        ctx.surface.apply_style(
            self.id,
            &StyleUpdate::new().transition(Transition::None),
        );
        true
    }

    pub(crate) fn begin_resize(&mut self, ctx: &mut WindowCtx<'_>, pointer: Point) -> bool {
        if !self.is_interactive() {
            tracing::debug!(window_id = %self.id, "resize refused");
            return false;
        }
        if matches!(self.mode, WindowMode::Maximized | WindowMode::Snapped(_)) {
            // `normal` keeps the pre-maximize rectangle until a resize move lands
            self.show_dock_if_hidden(ctx);
            self.mode = WindowMode::Normal;
            let usable = ctx.viewport.usable_area();
            let width = self.geometry.width.min(usable.width);
            let height = self.geometry.height.min(usable.height);
            let origin = clamp_origin(self.geometry.origin(), width, height, ctx.viewport);
            self.geometry = WindowRect::new(origin.x, origin.y, width, height);
            ctx.surface.set_window_mode(self.id, self.mode);
            ctx.surface
                .apply_style(self.id, &StyleUpdate::rect(self.geometry));
        }
        self.interaction = Some(Interaction::Resize(ResizeDrag {
            start_pointer: pointer,
            start_width: self.geometry.width,
            start_height: self.geometry.height,
        }));
        ctx.surface.apply_style(
            self.id,
            &StyleUpdate::new().transition(Transition::None),
        );
        true
    }

    /// Feed a pointer move into the running session. Returns whether the
    /// move was applied.
    pub(crate) fn pointer_move(&mut self, ctx: &mut WindowCtx<'_>, pointer: Point) -> bool {
        match self.interaction {
            Some(Interaction::Drag(drag)) => self.drag_to(ctx, drag, pointer),
            Some(Interaction::Resize(drag)) => {
                let (width, height) = apply_resize_drag(
                    &drag,
                    pointer,
                    (ctx.config.min_width, ctx.config.min_height),
                    ctx.viewport,
                );
                self.geometry.width = width;
                self.geometry.height = height;
                self.normal = self.geometry;
                ctx.surface.apply_style(
                    self.id,
                    &StyleUpdate::new().width(width).height(height),
                );
                true
            }
            None => false,
        }
    }

    fn drag_to(&mut self, ctx: &mut WindowCtx<'_>, mut drag: HeaderDrag, pointer: Point) -> bool {
        if !drag.throttle.admit(ctx.now_ms) {
            return false;
        }

        if let WindowMode::Snapped(region) = self.mode {
            // back to the normal size under the pointer
            let scaled = drag.offset.x as i64 * self.normal.width as i64
                / self.geometry.width.max(1) as i64;
            drag.offset.x = (scaled as i32).clamp(0, self.normal.width.saturating_sub(1) as i32);
            self.geometry = WindowRect::new(
                pointer.x - drag.offset.x,
                pointer.y - drag.offset.y,
                self.normal.width,
                self.normal.height,
            );
            drag.start_rect = self.normal;
            self.mode = WindowMode::Normal;
            if region.hides_dock() {
                ctx.surface.set_dock_hidden(false);
            }
            ctx.surface.set_window_mode(self.id, self.mode);
            ctx.surface
                .apply_style(self.id, &StyleUpdate::rect(self.geometry));
            tracing::debug!(window_id = %self.id, %region, "unsnapped by drag");
        }

        let size = (self.geometry.width, self.geometry.height);
        let candidate = apply_header_drag(drag.offset, pointer, size, ctx.viewport);
        drag.candidate = candidate;
        ctx.surface.apply_style(
            self.id,
            &StyleUpdate::new().transform(Some(candidate)),
        );

        if self.snapping {
            let region = detect_snap_region(pointer, size, ctx.viewport, ctx.config.snap_rules());
            if region != drag.snap {
                match region {
                    Some(region) => ctx.surface.show_snap_preview(region.rect(ctx.viewport)),
                    None => ctx.surface.hide_snap_preview(),
                }
                drag.snap = region;
            }
        }

        self.interaction = Some(Interaction::Drag(drag));
        true
    }

    /// Finish the running session, if any.
    pub(crate) fn pointer_up(&mut self, ctx: &mut WindowCtx<'_>) {
        match self.interaction.take() {
            Some(Interaction::Drag(drag)) => {
                self.geometry = self.geometry.with_origin(drag.candidate);
                if self.mode == WindowMode::Normal {
                    self.normal = self.geometry;
                }
                ctx.surface.apply_style(
                    self.id,
                    &StyleUpdate::new()
                        .transform(None)
                        .left(self.geometry.x)
                        .top(self.geometry.y),
                );
                ctx.surface.hide_snap_preview();
                if let Some(region) = drag.snap {
                    self.apply_snap(ctx, region, drag.start_rect);
                }
            }
            Some(Interaction::Resize(_)) | None => {}
        }
    }

    /// Drop a running session without applying it.
    pub(crate) fn cancel_interaction(&mut self, ctx: &mut WindowCtx<'_>) {
        if let Some(Interaction::Drag(_)) = self.interaction.take() {
            ctx.surface.apply_style(
                self.id,
                &StyleUpdate::new().transform(None),
            );
            ctx.surface.hide_snap_preview();
        }
    }

    pub(crate) fn snap_to(&mut self, ctx: &mut WindowCtx<'_>, region: SnapRegion) -> bool {
        if !self.is_interactive() {
            return false;
        }
        self.cancel_interaction(ctx);
        self.apply_snap(ctx, region, self.normal);
        true
    }

    fn apply_snap(&mut self, ctx: &mut WindowCtx<'_>, region: SnapRegion, snapshot: WindowRect) {
        if self.mode == WindowMode::Normal {
            self.normal = snapshot;
        }
        self.geometry = region.rect(ctx.viewport);
        self.mode = WindowMode::Snapped(region);
        ctx.surface.set_window_mode(self.id, self.mode);
        ctx.surface
            .apply_style(self.id, &StyleUpdate::rect(self.geometry));
        ctx.surface.set_dock_hidden(region.hides_dock());
        tracing::debug!(window_id = %self.id, %region, "snapped");
    }

    pub(crate) fn unsnap(&mut self, ctx: &mut WindowCtx<'_>) -> bool {
        if !matches!(self.mode, WindowMode::Snapped(_)) || self.closing {
            return false;
        }
        self.cancel_interaction(ctx);
        self.geometry = self.normal;
        self.mode = WindowMode::Normal;
        ctx.surface.set_window_mode(self.id, self.mode);
        ctx.surface
            .apply_style(self.id, &StyleUpdate::rect(self.geometry));
        ctx.surface.set_dock_hidden(false);
        true
    }

    pub(crate) fn toggle_maximize(&mut self, ctx: &mut WindowCtx<'_>) -> bool {
        if !self.is_interactive() {
            tracing::debug!(window_id = %self.id, "maximize ignored");
            return false;
        }
        self.cancel_interaction(ctx);
        if self.is_maximized() {
            self.geometry = self.normal;
            self.mode = WindowMode::Normal;
            ctx.surface.set_dock_hidden(false);
        } else {
            // a Normal window's committed geometry is already in `normal`
            self.geometry = ctx.viewport.full_area();
            self.mode = WindowMode::Maximized;
            ctx.surface.set_dock_hidden(true);
        }
        ctx.surface.set_window_mode(self.id, self.mode);
        ctx.surface.apply_style(
            self.id,
            &StyleUpdate::rect(self.geometry).transition(Transition::None),
        );
        true
    }

    pub(crate) fn minimize(&mut self, ctx: &mut WindowCtx<'_>) -> bool {
        if self.animating || self.closing || self.is_minimized() {
            tracing::debug!(window_id = %self.id, animating = self.animating, "minimize dropped");
            return false;
        }
        self.cancel_interaction(ctx);
        self.timeline.clear();
        self.show_dock_if_hidden(ctx);

        self.mode = WindowMode::Minimized {
            restore_to: self.mode.as_restore_target(),
        };
        self.animating = true;
        ctx.surface.set_window_mode(self.id, self.mode);
        ctx.surface.apply_style(
            self.id,
            &StyleUpdate::new()
                .width(self.normal.width)
                .height(self.normal.height),
        );
        ctx.surface.apply_style(
            self.id,
            &StyleUpdate::new()
                .transition(Transition::Staged)
                .width(0)
                .height(0)
                .left(self.normal.x)
                .opacity(0.0),
        );
        let slide_at = ctx.now_ms + ctx.config.minimize_slide_delay_ms;
        self.timeline
            .schedule(slide_at, TransitionStep::SlideToBottom);
        self.timeline.schedule(
            slide_at + ctx.config.transition_ms,
            TransitionStep::EndAnimation,
        );
        true
    }

    pub(crate) fn restore(&mut self, ctx: &mut WindowCtx<'_>) -> bool {
        let WindowMode::Minimized { restore_to } = self.mode else {
            return false;
        };
        if self.animating || self.closing {
            tracing::debug!(window_id = %self.id, "restore dropped");
            return false;
        }
        self.timeline.clear();
        self.mode = restore_to.into_mode();
        self.animating = true;
        ctx.surface.set_window_mode(self.id, self.mode);
        ctx.surface.apply_style(
            self.id,
            &StyleUpdate::new()
                .transition(Transition::Slide)
                .width(self.geometry.width)
                .height(self.geometry.height)
                .left(self.geometry.x)
                .top(ctx.viewport.usable_height() as i32)
                .opacity(0.0),
        );
        let reveal_at = ctx.now_ms + ctx.config.reveal_delay_ms;
        self.timeline.schedule(reveal_at, TransitionStep::Reveal);
        self.timeline.schedule(
            reveal_at + ctx.config.transition_ms,
            TransitionStep::EndAnimation,
        );
        true
    }

    pub(crate) fn begin_close(&mut self, ctx: &mut WindowCtx<'_>) -> bool {
        if self.closing {
            return false;
        }
        self.cancel_interaction(ctx);
        self.timeline.clear();
        self.show_dock_if_hidden(ctx);
        self.closing = true;
        ctx.surface.apply_style(
            self.id,
            &StyleUpdate::new()
                .transition(Transition::Slide)
                .top(ctx.viewport.usable_height() as i32)
                .opacity(0.0),
        );
        self.timeline.schedule(
            ctx.now_ms + ctx.config.transition_ms,
            TransitionStep::Destroy,
        );
        true
    }

    /// Apply every step due at `ctx.now_ms`.
    pub(crate) fn run_due_steps(&mut self, ctx: &mut WindowCtx<'_>) -> (usize, StepOutcome) {
        let steps = self.timeline.drain_due(ctx.now_ms);
        let count = steps.len();
        for step in steps {
            if self.apply_step(ctx, step) == StepOutcome::Destroyed {
                return (count, StepOutcome::Destroyed);
            }
        }
        (count, StepOutcome::Continue)
    }

    fn apply_step(&mut self, ctx: &mut WindowCtx<'_>, step: TransitionStep) -> StepOutcome {
        tracing::trace!(window_id = %self.id, ?step, "transition step");
        match step {
            TransitionStep::FlyIn => {
                ctx.surface.apply_style(
                    self.id,
                    &StyleUpdate::new().top(self.geometry.y).opacity(1.0),
                );
            }
            TransitionStep::SlideToBottom => {
                ctx.surface.apply_style(
                    self.id,
                    &StyleUpdate::new().top(ctx.viewport.usable_height() as i32),
                );
            }
            TransitionStep::Reveal => {
                ctx.surface.apply_style(
                    self.id,
                    &StyleUpdate::new()
                        .left(self.geometry.x)
                        .top(self.geometry.y)
                        .opacity(1.0),
                );
                ctx.surface.set_dock_hidden(self.mode.hides_dock());
            }
            TransitionStep::EndAnimation => {
                self.animating = false;
                ctx.surface.apply_style(
                    self.id,
                    &StyleUpdate::new().transition(Transition::None),
                );
            }
            TransitionStep::Destroy => return StepOutcome::Destroyed,
        }
        StepOutcome::Continue
    }

    /// Fit the window into a resized viewport.
    pub(crate) fn reclamp(&mut self, ctx: &mut WindowCtx<'_>) {
        let viewport = ctx.viewport;
        let origin = clamp_origin(
            self.normal.origin(),
            self.normal.width,
            self.normal.height,
            viewport,
        );
        self.normal = self.normal.with_origin(origin);

        let mode = match self.mode {
            WindowMode::Minimized { restore_to } => restore_to.into_mode(),
            mode => mode,
        };
        self.geometry = match mode {
            WindowMode::Maximized => viewport.full_area(),
            WindowMode::Snapped(region) => region.rect(viewport),
            _ => {
                let origin = clamp_origin(
                    self.geometry.origin(),
                    self.geometry.width,
                    self.geometry.height,
                    viewport,
                );
                self.geometry.with_origin(origin)
            }
        };
        if self.mode == WindowMode::Normal {
            self.normal = self.geometry;
        }
        if self.is_interactive() && !self.animating {
            ctx.surface
                .apply_style(self.id, &StyleUpdate::rect(self.geometry));
        }
    }

    fn show_dock_if_hidden(&self, ctx: &mut WindowCtx<'_>) {
        if self.mode.hides_dock() {
            ctx.surface.set_dock_hidden(false);
        }
    }

    fn sync_content(&self, surface: &mut dyn PresentationSurface) {
        surface.set_content(self.id, self.content.content());
        surface.set_upload_view(self.id, self.content.upload_view());
    }

    pub(crate) fn ensure_can_upload(&self) -> Result<(), ContentError> {
        self.content.ensure_can_upload()
    }

    pub(crate) fn load_html(
        &mut self,
        surface: &mut dyn PresentationSurface,
        html: String,
    ) -> Result<(), ContentError> {
        self.content.inject(html)?;
        self.sync_content(surface);
        tracing::info!(window_id = %self.id, "content loaded");
        Ok(())
    }

    pub(crate) fn reset_content(
        &mut self,
        surface: &mut dyn PresentationSurface,
    ) -> Result<(), ContentError> {
        self.content.reset()?;
        self.sync_content(surface);
        Ok(())
    }

    pub(crate) fn open_manual_entry(
        &mut self,
        surface: &mut dyn PresentationSurface,
    ) -> Result<(), ContentError> {
        self.content.open_manual_entry()?;
        self.sync_content(surface);
        Ok(())
    }

    pub(crate) fn close_manual_entry(&mut self, surface: &mut dyn PresentationSurface) {
        self.content.close_manual_entry();
        self.sync_content(surface);
    }
}
