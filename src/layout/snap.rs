//! Edge-snap detection for dragged windows.
//!
//! Regions are checked corners first, then the left/right edges, then the
//! top band (the outer half of which means fullscreen), then the bottom edge.

use std::fmt;

use super::{Point, Viewport, WindowRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapRegion {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Fullscreen,
}

impl SnapRegion {
    pub const ALL: [SnapRegion; 9] = [
        SnapRegion::Left,
        SnapRegion::Right,
        SnapRegion::Top,
        SnapRegion::Bottom,
        SnapRegion::TopLeft,
        SnapRegion::TopRight,
        SnapRegion::BottomLeft,
        SnapRegion::BottomRight,
        SnapRegion::Fullscreen,
    ];

    /// The docked rectangle for this region: halves and quarters of the
    /// usable area, or all of it for `Fullscreen`.
    pub fn rect(self, viewport: Viewport) -> WindowRect {
        let w = viewport.width;
        let h = viewport.usable_height();
        let half_w = w / 2;
        let half_h = h / 2;
        let (x, y, width, height) = match self {
            SnapRegion::Left => (0, 0, half_w, h),
            SnapRegion::Right => (half_w, 0, half_w, h),
            SnapRegion::Top => (0, 0, w, half_h),
            SnapRegion::Bottom => (0, half_h, w, half_h),
            SnapRegion::TopLeft => (0, 0, half_w, half_h),
            SnapRegion::TopRight => (half_w, 0, half_w, half_h),
            SnapRegion::BottomLeft => (0, half_h, half_w, half_h),
            SnapRegion::BottomRight => (half_w, half_h, half_w, half_h),
            SnapRegion::Fullscreen => (0, 0, w, h),
        };
        WindowRect::new(x as i32, y as i32, width, height)
    }

    /// Whether a window docked here covers the full width, in which case the
    /// dock is hidden.
    pub fn hides_dock(self) -> bool {
        matches!(
            self,
            SnapRegion::Fullscreen | SnapRegion::Top | SnapRegion::Bottom
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SnapRegion::Left => "left",
            SnapRegion::Right => "right",
            SnapRegion::Top => "top",
            SnapRegion::Bottom => "bottom",
            SnapRegion::TopLeft => "top-left",
            SnapRegion::TopRight => "top-right",
            SnapRegion::BottomLeft => "bottom-left",
            SnapRegion::BottomRight => "bottom-right",
            SnapRegion::Fullscreen => "fullscreen",
        }
    }
}

impl fmt::Display for SnapRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tuning knobs for [`detect_snap_region`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapRules {
    pub zone: i32,
    pub size_ratio: f32,
}

/// Pick the region a window of `size` would dock into if released with the
/// pointer at `pointer`, or `None` when the pointer is away from the edges or
/// the window is already close to full size on the relevant axis.
pub fn detect_snap_region(
    pointer: Point,
    size: (u32, u32),
    viewport: Viewport,
    rules: SnapRules,
) -> Option<SnapRegion> {
    let screen_w = viewport.width as i32;
    let screen_h = viewport.usable_height() as i32;
    let zone = rules.zone;
    let narrow = (size.0 as f32) < screen_w as f32 * rules.size_ratio;
    let short = (size.1 as f32) < screen_h as f32 * rules.size_ratio;

    let near_left = pointer.x <= zone;
    let near_right = pointer.x >= screen_w - zone;
    let near_top = pointer.y <= zone;
    let near_bottom = pointer.y >= screen_h - zone;

    if narrow && short {
        let corner = match (near_left, near_right, near_top, near_bottom) {
            (true, _, true, _) => Some(SnapRegion::TopLeft),
            (_, true, true, _) => Some(SnapRegion::TopRight),
            (true, _, _, true) => Some(SnapRegion::BottomLeft),
            (_, true, _, true) => Some(SnapRegion::BottomRight),
            _ => None,
        };
        if corner.is_some() {
            return corner;
        }
    }

    let in_side_band = pointer.y > zone && pointer.y < screen_h - zone;
    if near_left && in_side_band && narrow {
        return Some(SnapRegion::Left);
    }
    if near_right && in_side_band && narrow {
        return Some(SnapRegion::Right);
    }
    if pointer.y <= zone / 2 && short {
        return Some(SnapRegion::Fullscreen);
    }
    if near_top && short {
        return Some(SnapRegion::Top);
    }
    if near_bottom && short {
        return Some(SnapRegion::Bottom);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: SnapRules = SnapRules {
        zone: 50,
        size_ratio: 0.7,
    };

    fn vp() -> Viewport {
        Viewport::new(1920, 1080, 60)
    }

    #[test]
    fn corners_win_over_edges_and_top_band() {
        let size = (350, 570);
        let cases = [
            (Point::new(5, 5), SnapRegion::TopLeft),
            (Point::new(1915, 5), SnapRegion::TopRight),
            (Point::new(5, 1015), SnapRegion::BottomLeft),
            (Point::new(1915, 1015), SnapRegion::BottomRight),
        ];
        for (pointer, expected) in cases {
            assert_eq!(
                detect_snap_region(pointer, size, vp(), RULES),
                Some(expected),
                "pointer {pointer:?}"
            );
        }
    }

    #[test]
    fn side_edges_and_bands() {
        let size = (350, 570);
        assert_eq!(
            detect_snap_region(Point::new(10, 500), size, vp(), RULES),
            Some(SnapRegion::Left)
        );
        assert_eq!(
            detect_snap_region(Point::new(1900, 500), size, vp(), RULES),
            Some(SnapRegion::Right)
        );
        assert_eq!(
            detect_snap_region(Point::new(900, 20), size, vp(), RULES),
            Some(SnapRegion::Fullscreen)
        );
        assert_eq!(
            detect_snap_region(Point::new(900, 40), size, vp(), RULES),
            Some(SnapRegion::Top)
        );
        assert_eq!(
            detect_snap_region(Point::new(900, 1000), size, vp(), RULES),
            Some(SnapRegion::Bottom)
        );
        assert_eq!(
            detect_snap_region(Point::new(900, 500), size, vp(), RULES),
            None
        );
    }

    #[test]
    fn large_windows_do_not_snap() {
        let wide = (1500, 300);
        assert_eq!(
            detect_snap_region(Point::new(10, 500), wide, vp(), RULES),
            None
        );
        let tall = (300, 900);
        assert_eq!(
            detect_snap_region(Point::new(900, 20), tall, vp(), RULES),
            None
        );
        // a tall but narrow window still docks to a side
        assert_eq!(
            detect_snap_region(Point::new(10, 500), tall, vp(), RULES),
            Some(SnapRegion::Left)
        );
    }

    #[test]
    fn region_rects_split_usable_area() {
        let vp = vp();
        assert_eq!(SnapRegion::Left.rect(vp), WindowRect::new(0, 0, 960, 1020));
        assert_eq!(
            SnapRegion::Right.rect(vp),
            WindowRect::new(960, 0, 960, 1020)
        );
        assert_eq!(
            SnapRegion::BottomRight.rect(vp),
            WindowRect::new(960, 510, 960, 510)
        );
        assert_eq!(
            SnapRegion::Fullscreen.rect(vp),
            WindowRect::new(0, 0, 1920, 1020)
        );
    }

    #[test]
    fn odd_widths_floor_the_half() {
        let vp = Viewport::new(1001, 701, 0);
        assert_eq!(SnapRegion::Left.rect(vp).width, 500);
        assert_eq!(SnapRegion::Right.rect(vp).x, 500);
        assert_eq!(SnapRegion::Top.rect(vp).height, 350);
    }

    #[test]
    fn dock_hiding_regions() {
        let hiding: Vec<_> = SnapRegion::ALL
            .iter()
            .copied()
            .filter(|r| r.hides_dock())
            .collect();
        assert_eq!(
            hiding,
            vec![SnapRegion::Top, SnapRegion::Bottom, SnapRegion::Fullscreen]
        );
        assert_eq!(SnapRegion::TopLeft.to_string(), "top-left");
    }
}
