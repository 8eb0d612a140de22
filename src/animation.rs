//! Time sources and the per-window transition timeline.
//!
//! Transitions are a finite list of `{due, step}` entries rather than nested
//! timer callbacks. The manager polls the clock on every tick and applies the
//! steps that have come due, so a virtual clock makes whole sequences
//! testable without waiting.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Instant;

/// Millisecond time source.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Manually advanced clock. Clones share the same time, so a test can keep
/// a handle while the manager owns another.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    now: Rc<Cell<u64>>,
}

impl VirtualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for VirtualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Ordered queue of scheduled steps. Steps with the same due time run in the
/// order they were scheduled.
#[derive(Debug, Clone)]
pub struct Timeline<A> {
    steps: VecDeque<(u64, A)>,
}

impl<A> Default for Timeline<A> {
    fn default() -> Self {
        Self {
            steps: VecDeque::new(),
        }
    }
}

impl<A> Timeline<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: u64, step: A) {
        let idx = self
            .steps
            .iter()
            .position(|(due, _)| *due > due_ms)
            .unwrap_or(self.steps.len());
        self.steps.insert(idx, (due_ms, step));
    }

    /// Remove and return every step due at or before `now_ms`.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<A> {
        let mut due = Vec::new();
        while let Some((at, _)) = self.steps.front() {
            if *at > now_ms {
                break;
            }
            if let Some((_, step)) = self.steps.pop_front() {
                due.push(step);
            }
        }
        due
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn next_due(&self) -> Option<u64> {
        self.steps.front().map(|(at, _)| *at)
    }
}
