pub mod floating;
pub mod snap;

/// A pointer position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Signed window origin with unsigned size, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl WindowRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width as i32)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height as i32)
    }

    pub fn with_origin(self, origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..self
        }
    }
}

pub fn rect_contains(rect: WindowRect, point: Point) -> bool {
    point.x >= rect.x && point.x < rect.right() && point.y >= rect.y && point.y < rect.bottom()
}

/// Viewport dimensions plus the height of the dock docked at its bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub dock_height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32, dock_height: u32) -> Self {
        Self {
            width,
            height,
            dock_height,
        }
    }

    /// Height left for windows once the dock is subtracted.
    pub fn usable_height(&self) -> u32 {
        self.height.saturating_sub(self.dock_height)
    }

    pub fn usable_area(&self) -> WindowRect {
        WindowRect::new(0, 0, self.width, self.usable_height())
    }

    pub fn full_area(&self) -> WindowRect {
        WindowRect::new(0, 0, self.width, self.height)
    }
}

/// Clamp an origin so a `width` x `height` window stays inside the usable
/// area. When the window is larger than the area the origin pins to zero.
pub fn clamp_origin(origin: Point, width: u32, height: u32, viewport: Viewport) -> Point {
    let max_x = viewport.width as i32 - width as i32;
    let max_y = viewport.usable_height() as i32 - height as i32;
    Point {
        x: origin.x.min(max_x).max(0),
        y: origin.y.min(max_y).max(0),
    }
}
