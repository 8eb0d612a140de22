use std::io;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use desk_wm::animation::VirtualClock;
use desk_wm::config::DesktopConfig;
use desk_wm::layout::snap::SnapRegion;
use desk_wm::layout::{Point, WindowRect};
use desk_wm::pointer::{PointerEvent, PointerKind};
use desk_wm::render::{CellScale, render_desktop};
use desk_wm::surface::DesktopSurface;
use desk_wm::window::{WindowId, WindowManager, WindowOptions};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 240,
    height: 67,
};
const DOCK_HEIGHT: u32 = 48;
const MOVE_STEP_MS: u64 = 20;
const SETTLE_MS: u64 = 700;

#[derive(Parser, Debug)]
#[command(
    name = "desk-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Replays random window gestures against a headless desktop and reports throughput"
)]
struct BenchCli {
    /// Windows kept open during the run.
    #[arg(short = 'w', long, value_name = "COUNT", default_value_t = 8)]
    windows: usize,

    /// Gestures to replay.
    #[arg(short = 'i', long, value_name = "COUNT", default_value_t = 2_000)]
    iterations: u64,

    /// Seed for the gesture generator. Defaults to the wall clock.
    #[arg(short = 's', long, value_name = "SEED")]
    seed: Option<u64>,
}

struct BenchConfig {
    windows: usize,
    iterations: u64,
    seed: u64,
}

impl TryFrom<&BenchCli> for BenchConfig {
    type Error = String;

    fn try_from(cli: &BenchCli) -> Result<Self, Self::Error> {
        if !(1..=256).contains(&cli.windows) {
            return Err("windows must be between 1 and 256".to_string());
        }
        if !(1..=10_000_000).contains(&cli.iterations) {
            return Err("iterations must be between 1 and 10000000".to_string());
        }
        let seed = cli.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
                ^ 0xA5A5_A5A5_1234_5678
        });
        Ok(Self {
            windows: cli.windows,
            iterations: cli.iterations,
            seed,
        })
    }
}

fn main() -> io::Result<()> {
    let args = BenchCli::parse();
    let config = BenchConfig::try_from(&args)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    let stats = run_benchmark(&config);
    println!("{}", stats.final_report(&config));
    Ok(())
}

type BenchManager = WindowManager<DesktopSurface, VirtualClock>;

fn run_benchmark(config: &BenchConfig) -> BenchStats {
    let scale = CellScale::new(8, 16);
    let (width, height) = scale.viewport_size(SCREEN);
    let clock = VirtualClock::new(1_000);
    let mut wm = WindowManager::with_clock(
        DesktopSurface::new(Some(DOCK_HEIGHT)),
        clock.clone(),
        width,
        height,
        DesktopConfig::default(),
    );
    let mut noise = Noise::new(config.seed);
    let mut buffer = Buffer::empty(SCREEN);
    let mut stats = BenchStats::new();

    for n in 0..config.windows {
        open_window(&mut wm, &mut noise, n);
    }

    for _ in 0..config.iterations {
        let started = Instant::now();
        let gesture = Gesture::pick(&mut noise);
        let ids: Vec<WindowId> = wm.windows().iter().map(|w| w.id()).collect();
        let target = ids[noise.below(ids.len() as u32) as usize];

        let events = match gesture {
            Gesture::Drag => drag(&mut wm, &clock, &mut noise, target, false),
            Gesture::Resize => drag(&mut wm, &clock, &mut noise, target, true),
            Gesture::Minimize => {
                wm.minimize(target);
                1
            }
            Gesture::Focus => {
                wm.taskbar_click(target);
                1
            }
            Gesture::Maximize => {
                wm.toggle_maximize(target);
                1
            }
            Gesture::Snap => {
                let region = SnapRegion::ALL[noise.below(SnapRegion::ALL.len() as u32) as usize];
                wm.snap_window(target, region);
                1
            }
            Gesture::Reopen => {
                wm.close(target);
                open_window(&mut wm, &mut noise, stats.gestures as usize);
                1
            }
        };

        clock.advance(SETTLE_MS);
        let steps = wm.tick();

        buffer.reset();
        render_desktop(&mut buffer, SCREEN, &wm, scale);

        stats.record(gesture, events, steps, started.elapsed());
    }

    stats.mark_completed();
    stats
}

fn open_window(wm: &mut BenchManager, noise: &mut Noise, n: usize) -> WindowId {
    let viewport = wm.viewport();
    let width = 320 + noise.below(480);
    let height = 240 + noise.below(320);
    let x = noise.below(viewport.width.saturating_sub(width).max(1)) as i32;
    let y = noise.below(viewport.usable_height().saturating_sub(height).max(1)) as i32;
    wm.add_window(
        WindowOptions::new(format!("Bench {n}"))
            .url("https://example.com")
            .rect(WindowRect::new(x, y, width, height)),
    )
}

/// Press on the title bar (or the resize grip), move in steps, release.
fn drag(
    wm: &mut BenchManager,
    clock: &VirtualClock,
    noise: &mut Noise,
    id: WindowId,
    resize: bool,
) -> u64 {
    let Some(rect) = wm.window(id).map(|w| w.geometry()) else {
        return 0;
    };
    let start = if resize {
        Point::new(rect.right() - 4, rect.bottom() - 4)
    } else {
        Point::new(rect.x + 20, rect.y + 12)
    };
    let viewport = wm.viewport();
    let end = Point::new(
        noise.below(viewport.width) as i32,
        noise.below(viewport.height) as i32,
    );
    let steps = 4 + noise.below(12) as i32;

    wm.handle_pointer(&PointerEvent::mouse(PointerKind::Down, start.x, start.y));
    for step in 1..=steps {
        clock.advance(MOVE_STEP_MS);
        let x = start.x + (end.x - start.x) * step / steps;
        let y = start.y + (end.y - start.y) * step / steps;
        wm.handle_pointer(&PointerEvent::mouse(PointerKind::Move, x, y));
    }
    wm.handle_pointer(&PointerEvent::mouse(PointerKind::Up, end.x, end.y));
    steps as u64 + 2
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gesture {
    Drag,
    Resize,
    Minimize,
    Focus,
    Maximize,
    Snap,
    Reopen,
}

impl Gesture {
    const ALL: [Gesture; 7] = [
        Gesture::Drag,
        Gesture::Resize,
        Gesture::Minimize,
        Gesture::Focus,
        Gesture::Maximize,
        Gesture::Snap,
        Gesture::Reopen,
    ];

    fn pick(noise: &mut Noise) -> Self {
        // Drags dominate real sessions.
        match noise.below(10) {
            0..=3 => Gesture::Drag,
            n => Self::ALL[(n as usize - 3) % Self::ALL.len()],
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|g| *g == self).unwrap_or(0)
    }

    fn label(self) -> &'static str {
        match self {
            Gesture::Drag => "drag",
            Gesture::Resize => "resize",
            Gesture::Minimize => "minimize",
            Gesture::Focus => "focus",
            Gesture::Maximize => "maximize",
            Gesture::Snap => "snap",
            Gesture::Reopen => "reopen",
        }
    }
}

struct BenchStats {
    start: Instant,
    completed_at: Option<Instant>,
    gestures: u64,
    pointer_events: u64,
    steps_applied: u64,
    per_gesture: [u64; Gesture::ALL.len()],
    total_time: Duration,
    slowest: Duration,
}

impl BenchStats {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            completed_at: None,
            gestures: 0,
            pointer_events: 0,
            steps_applied: 0,
            per_gesture: [0; Gesture::ALL.len()],
            total_time: Duration::ZERO,
            slowest: Duration::ZERO,
        }
    }

    fn elapsed(&self) -> Duration {
        match self.completed_at {
            Some(done) => done.duration_since(self.start),
            None => self.start.elapsed(),
        }
    }

    fn mark_completed(&mut self) {
        self.completed_at = Some(Instant::now());
    }

    fn record(&mut self, gesture: Gesture, events: u64, steps: usize, took: Duration) {
        self.gestures = self.gestures.saturating_add(1);
        self.pointer_events = self.pointer_events.saturating_add(events);
        self.steps_applied = self.steps_applied.saturating_add(steps as u64);
        self.per_gesture[gesture.index()] += 1;
        self.total_time += took;
        if took > self.slowest {
            self.slowest = took;
        }
    }

    fn average_us(&self) -> f64 {
        if self.gestures == 0 {
            return 0.0;
        }
        self.total_time.as_secs_f64() / self.gestures as f64 * 1_000_000.0
    }

    fn final_report(&self, config: &BenchConfig) -> String {
        let elapsed = self.elapsed().as_secs_f64();
        let per_second = if elapsed > 0.0 {
            self.gestures as f64 / elapsed
        } else {
            0.0
        };
        let mix = Gesture::ALL
            .iter()
            .map(|g| format!("{} {}", g.label(), self.per_gesture[g.index()]))
            .collect::<Vec<_>>()
            .join(" | ");

        indoc::formatdoc!(
            r#"
            Desk bench finished.
            Seed: {seed} | Windows: {windows}
            Gestures: {gestures} in {elapsed:.2}s (~{per_second:.0}/s)
            Avg gesture + frame: {avg:.1} us | Worst: {worst:.1} us
            Pointer events: {events} | Transition steps: {steps}
            Mix: {mix}
            "#,
            seed = config.seed,
            windows = config.windows,
            gestures = self.gestures,
            elapsed = elapsed,
            per_second = per_second,
            avg = self.average_us(),
            worst = self.slowest.as_secs_f64() * 1_000_000.0,
            events = self.pointer_events,
            steps = self.steps_applied,
            mix = mix,
        )
    }
}

/// Linear congruential generator; repeatable for a given seed.
struct Noise {
    state: u64,
}

impl Noise {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next() % bound
    }
}
