//! Shared crate-wide constants.
//!
//! All distances are CSS pixels of the viewport the desktop is laid out in.

/// Distance from a screen edge (or corner) within which a dragged pointer
/// arms an edge snap.
pub const SNAP_ZONE: i32 = 50;

/// A window only snaps while its size along the snapped axis is below this
/// fraction of the usable area, so near full-size windows are left alone.
pub const SNAP_SIZE_RATIO: f32 = 0.7;

/// Width of the title bar's right-hand region reserved for the window
/// controls. Presses inside it never start a drag.
pub const CONTROL_ZONE_WIDTH: i32 = 100;

/// Extra slack added to the left of the control zone.
pub const CONTROL_ZONE_MARGIN: i32 = 10;

/// Resize floor.
pub const MIN_WINDOW_WIDTH: u32 = 300;
pub const MIN_WINDOW_HEIGHT: u32 = 200;

/// Minimum spacing between two processed drag moves, per input source.
pub const MOUSE_MOVE_INTERVAL_MS: u64 = 10;
pub const TOUCH_MOVE_INTERVAL_MS: u64 = 16;

/// Stacking layers. Only the active window sits on the foreground layer.
pub const BASE_Z_INDEX: i32 = 100;
pub const FOREGROUND_Z_INDEX: i32 = 1000;

pub const TITLE_BAR_HEIGHT: u32 = 32;

/// Side of the square resize handle in the bottom-right corner.
pub const RESIZE_HANDLE_SIZE: u32 = 16;

/// Diameter of each title bar control button and the gap between them.
pub const CONTROL_BUTTON_SIZE: u32 = 14;
pub const CONTROL_BUTTON_GAP: u32 = 8;

/// Delay between the minimize collapse and the slide to the bottom edge.
pub const MINIMIZE_SLIDE_DELAY_MS: u64 = 100;

/// Delay before a restored or freshly opened window flies in.
pub const REVEAL_DELAY_MS: u64 = 10;

/// Duration of the slide/fade transitions.
pub const TRANSITION_MS: u64 = 500;

pub const DEFAULT_WINDOW_TITLE: &str = "Window";
pub const DEFAULT_WINDOW_URL: &str = "about:blank";
pub const DEFAULT_WINDOW_WIDTH: u32 = 350;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 570;
pub const DEFAULT_WINDOW_X: i32 = 1000;
pub const DEFAULT_WINDOW_Y: i32 = 100;
