use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// What the loop hands to its handler.
#[derive(Debug)]
pub enum LoopEvent {
    Input(Event),
    /// No more input is queued: advance animations and redraw.
    Frame,
}

/// Drives the preview: polls the input driver and alternates bursts of input
/// with frame callbacks.
///
/// Pointer moves arrive in bursts while a window is dragged. Every queued
/// event is drained before the next frame so drawing never lags the input
/// stream; the window manager's own throttle decides which moves it applies.
pub struct EventLoop<D> {
    driver: D,
    frame_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, frame_interval: Duration) -> Self {
        Self {
            driver,
            frame_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, LoopEvent) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.driver, LoopEvent::Frame)? {
                return Ok(());
            }
            if !self.driver.poll(self.frame_interval)? {
                continue;
            }
            loop {
                let event = self.driver.read()?;
                if let ControlFlow::Quit = handler(&mut self.driver, LoopEvent::Input(event))? {
                    return Ok(());
                }
                if !self.driver.poll(Duration::ZERO)? {
                    break;
                }
            }
        }
    }
}
