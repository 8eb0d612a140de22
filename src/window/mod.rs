pub mod decorator;
pub mod options;

mod managed_window;
mod transition;
mod window_manager;

use std::fmt;

use crate::layout::snap::SnapRegion;

pub use managed_window::ManagedWindow;
pub use options::WindowOptions;
pub use transition::TransitionStep;
pub use window_manager::WindowManager;

/// Window identifier, derived from the creation timestamp in milliseconds
/// and kept strictly increasing by the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// Where a minimized window returns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreTarget {
    Normal,
    Maximized,
    Snapped(SnapRegion),
}

impl RestoreTarget {
    pub fn into_mode(self) -> WindowMode {
        match self {
            RestoreTarget::Normal => WindowMode::Normal,
            RestoreTarget::Maximized => WindowMode::Maximized,
            RestoreTarget::Snapped(region) => WindowMode::Snapped(region),
        }
    }
}

/// The single source of truth for a window's display mode. Exactly one
/// variant holds at a time; visual classes are derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    #[default]
    Normal,
    Minimized {
        restore_to: RestoreTarget,
    },
    Maximized,
    Snapped(SnapRegion),
}

impl WindowMode {
    pub fn is_minimized(&self) -> bool {
        matches!(self, WindowMode::Minimized { .. })
    }

    pub fn is_maximized(&self) -> bool {
        matches!(self, WindowMode::Maximized)
    }

    pub fn snap_region(&self) -> Option<SnapRegion> {
        match self {
            WindowMode::Snapped(region) => Some(*region),
            _ => None,
        }
    }

    /// Whether a window displayed in this mode keeps the dock hidden.
    pub fn hides_dock(&self) -> bool {
        match self {
            WindowMode::Maximized => true,
            WindowMode::Snapped(region) => region.hides_dock(),
            WindowMode::Normal | WindowMode::Minimized { .. } => false,
        }
    }

    /// The restore target a window minimized from this mode should return to.
    pub fn as_restore_target(&self) -> RestoreTarget {
        match self {
            WindowMode::Normal => RestoreTarget::Normal,
            WindowMode::Maximized => RestoreTarget::Maximized,
            WindowMode::Snapped(region) => RestoreTarget::Snapped(*region),
            WindowMode::Minimized { restore_to } => *restore_to,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            WindowMode::Normal => "normal",
            WindowMode::Minimized { .. } => "minimized",
            WindowMode::Maximized => "maximized",
            WindowMode::Snapped(_) => "snapped",
        }
    }
}
