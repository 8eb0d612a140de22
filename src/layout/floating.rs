use super::snap::SnapRegion;
use super::{Point, Viewport, WindowRect, clamp_origin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Drops moves that arrive faster than `interval_ms` after the last
/// accepted one, bounding the reflow cost of a drag.
#[derive(Debug, Clone, Copy)]
pub struct MoveThrottle {
    interval_ms: u64,
    last: Option<u64>,
}

impl MoveThrottle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last: None,
        }
    }

    pub fn admit(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last
            && now_ms.saturating_sub(last) < self.interval_ms
        {
            return false;
        }
        self.last = Some(now_ms);
        true
    }
}

/// State of a title bar drag. The pointer keeps its offset from the window
/// origin for the whole gesture.
#[derive(Debug, Clone, Copy)]
pub struct HeaderDrag {
    pub source: PointerSource,
    pub offset: Point,
    /// Geometry before the drag began; becomes the normal snapshot if the
    /// drag ends in a snap.
    pub start_rect: WindowRect,
    pub candidate: Point,
    pub snap: Option<SnapRegion>,
    pub throttle: MoveThrottle,
}

impl HeaderDrag {
    pub fn new(
        source: PointerSource,
        pointer: Point,
        start_rect: WindowRect,
        throttle_ms: u64,
    ) -> Self {
        Self {
            source,
            offset: Point::new(pointer.x - start_rect.x, pointer.y - start_rect.y),
            start_rect,
            candidate: start_rect.origin(),
            snap: None,
            throttle: MoveThrottle::new(throttle_ms),
        }
    }
}

/// Candidate origin for a header drag, clamped inside the usable area.
pub fn apply_header_drag(
    offset: Point,
    pointer: Point,
    size: (u32, u32),
    viewport: Viewport,
) -> Point {
    let raw = Point::new(pointer.x - offset.x, pointer.y - offset.y);
    clamp_origin(raw, size.0, size.1, viewport)
}

#[derive(Debug, Clone, Copy)]
pub struct ResizeDrag {
    pub start_pointer: Point,
    pub start_width: u32,
    pub start_height: u32,
}

/// New size for a bottom-right resize drag: the start size grown by the
/// pointer delta, floored at `min` and capped at the usable area.
pub fn apply_resize_drag(
    drag: &ResizeDrag,
    pointer: Point,
    min: (u32, u32),
    viewport: Viewport,
) -> (u32, u32) {
    let dx = pointer.x as i64 - drag.start_pointer.x as i64;
    let dy = pointer.y as i64 - drag.start_pointer.y as i64;
    let width = (drag.start_width as i64 + dx).max(min.0 as i64);
    let height = (drag.start_height as i64 + dy).max(min.1 as i64);
    let width = width.min(viewport.width as i64).max(0) as u32;
    let height = height.min(viewport.usable_height() as i64).max(0) as u32;
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp() -> Viewport {
        Viewport::new(1280, 800, 40)
    }

    #[test]
    fn throttle_drops_fast_moves() {
        let mut t = MoveThrottle::new(10);
        assert!(t.admit(0));
        assert!(!t.admit(5));
        assert!(!t.admit(9));
        assert!(t.admit(10));
        assert!(t.admit(30));
    }

    #[test]
    fn header_drag_keeps_pointer_offset() {
        let start = WindowRect::new(100, 100, 350, 400);
        let drag = HeaderDrag::new(PointerSource::Mouse, Point::new(120, 110), start, 10);
        assert_eq!(drag.offset, Point::new(20, 10));
        let p = apply_header_drag(drag.offset, Point::new(320, 210), (350, 400), vp());
        assert_eq!(p, Point::new(300, 200));
    }

    #[test]
    fn header_drag_clamps_to_usable_area() {
        let offset = Point::new(20, 10);
        let p = apply_header_drag(offset, Point::new(5000, 5000), (350, 400), vp());
        assert_eq!(p, Point::new(1280 - 350, 760 - 400));
        let p = apply_header_drag(offset, Point::new(-50, -50), (350, 400), vp());
        assert_eq!(p, Point::new(0, 0));
    }

    #[test]
    fn resize_grows_by_delta() {
        let drag = ResizeDrag {
            start_pointer: Point::new(400, 400),
            start_width: 350,
            start_height: 300,
        };
        let size = apply_resize_drag(&drag, Point::new(450, 380), (300, 200), vp());
        assert_eq!(size, (400, 280));
    }

    #[test]
    fn resize_respects_floor_and_viewport() {
        let drag = ResizeDrag {
            start_pointer: Point::new(400, 400),
            start_width: 350,
            start_height: 300,
        };
        assert_eq!(
            apply_resize_drag(&drag, Point::new(0, 0), (300, 200), vp()),
            (300, 200)
        );
        assert_eq!(
            apply_resize_drag(&drag, Point::new(5000, 5000), (300, 200), vp()),
            (1280, 760)
        );
    }
}
