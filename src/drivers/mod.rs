//! Terminal plumbing for the preview binary. The window manager itself
//! never touches these; it only sees [`crate::pointer::PointerEvent`]s.

pub mod console;
pub mod mouse;

use std::io;
use std::time::Duration;

use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::Size;

/// Source of terminal events.
pub trait InputDriver {
    /// Wait up to `timeout` for an event to become readable.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

/// Owner of the terminal screen.
pub trait OutputDriver {
    /// Switch to the alternate screen with mouse reporting on.
    fn enter(&mut self) -> io::Result<()>;
    fn exit(&mut self) -> io::Result<()>;
    fn size(&self) -> io::Result<Size>;

    fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>);
}
