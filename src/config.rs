//! Desktop-wide tuning. Defaults come from [`crate::constants`].

use crate::constants::*;
use crate::layout::floating::PointerSource;
use crate::layout::snap::SnapRules;

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopConfig {
    pub snap_zone: i32,
    pub snap_size_ratio: f32,
    pub control_zone_width: i32,
    pub control_zone_margin: i32,
    pub min_width: u32,
    pub min_height: u32,
    pub mouse_move_interval_ms: u64,
    pub touch_move_interval_ms: u64,
    pub base_z_index: i32,
    pub foreground_z_index: i32,
    pub title_bar_height: u32,
    pub resize_handle_size: u32,
    pub minimize_slide_delay_ms: u64,
    pub reveal_delay_ms: u64,
    pub transition_ms: u64,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            snap_zone: SNAP_ZONE,
            snap_size_ratio: SNAP_SIZE_RATIO,
            control_zone_width: CONTROL_ZONE_WIDTH,
            control_zone_margin: CONTROL_ZONE_MARGIN,
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
            mouse_move_interval_ms: MOUSE_MOVE_INTERVAL_MS,
            touch_move_interval_ms: TOUCH_MOVE_INTERVAL_MS,
            base_z_index: BASE_Z_INDEX,
            foreground_z_index: FOREGROUND_Z_INDEX,
            title_bar_height: TITLE_BAR_HEIGHT,
            resize_handle_size: RESIZE_HANDLE_SIZE,
            minimize_slide_delay_ms: MINIMIZE_SLIDE_DELAY_MS,
            reveal_delay_ms: REVEAL_DELAY_MS,
            transition_ms: TRANSITION_MS,
        }
    }
}

impl DesktopConfig {
    pub fn snap_rules(&self) -> SnapRules {
        SnapRules {
            zone: self.snap_zone,
            size_ratio: self.snap_size_ratio,
        }
    }

    pub fn move_interval_ms(&self, source: PointerSource) -> u64 {
        match source {
            PointerSource::Mouse => self.mouse_move_interval_ms,
            PointerSource::Touch => self.touch_move_interval_ms,
        }
    }

    /// Width of the title bar strip, measured from the right edge, in which
    /// a press never starts a drag.
    pub fn reserved_control_width(&self) -> i32 {
        self.control_zone_width + self.control_zone_margin
    }
}
