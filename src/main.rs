use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEventKind};
use indoc::indoc;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use desk_wm::clipboard::{self, SystemClipboard};
use desk_wm::content::UploadView;
use desk_wm::drivers::OutputDriver;
use desk_wm::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use desk_wm::drivers::mouse::to_pointer_event;
use desk_wm::event_loop::{ControlFlow, EventLoop, LoopEvent};
use desk_wm::layout::WindowRect;
use desk_wm::layout::snap::SnapRegion;
use desk_wm::panel::Taskbar;
use desk_wm::render::{CellScale, render_desktop};
use desk_wm::surface::{DesktopSurface, PresentationSurface};
use desk_wm::tracing_sub;
use desk_wm::window::{WindowId, WindowManager, WindowOptions};

const HELP: &str = indoc! {"
    mouse   drag title bars, resize from the corner grip,
            click the taskbar to focus / minimize / restore
    n u     new blank / new URL window
    m h x   maximize / minimize / close the active window
    ← → ↑   snap left / right / fullscreen,  ↓ unsnap
    tab     focus the next window
    f p e   load a file / paste / type HTML into a blank window
    r       reset loaded content
    o       open the active window's URL in a browser
    ?       toggle this help,  q quits
"};

const SAMPLE_URL: &str = "https://example.com";

#[derive(Parser, Debug)]
#[command(
    name = "desk-wm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Terminal preview of the desk-wm window manager"
)]
struct Cli {
    /// Dock height in pixels. 0 runs without a dock.
    #[arg(long, value_name = "PX", default_value_t = 48)]
    dock_height: u32,

    /// Pixels per terminal column.
    #[arg(long, value_name = "PX", default_value_t = 8)]
    cell_width: u32,

    /// Pixels per terminal row.
    #[arg(long, value_name = "PX", default_value_t = 16)]
    cell_height: u32,

    /// Windows to open at start.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    windows: usize,

    /// Open windows with edge snapping turned off.
    #[arg(long)]
    no_snap: bool,

    /// Append debug logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    tracing_sub::init(cli.log_file.as_deref())?;

    let mut output = ConsoleOutputDriver::new()?;
    let size = output.size()?;
    let mut app = App::new(&cli, Rect::new(0, 0, size.width, size.height));
    tracing::info!(
        width = size.width,
        height = size.height,
        clipboard = clipboard::available(),
        "starting preview"
    );

    output.enter()?;
    let mut event_loop = EventLoop::new(ConsoleInputDriver::new(), Duration::from_millis(16));
    let result = event_loop.run(|_, event| match event {
        LoopEvent::Frame => {
            app.wm.tick();
            output.draw(|frame| app.draw(frame))?;
            Ok(ControlFlow::Continue)
        }
        LoopEvent::Input(event) => Ok(app.handle_event(event)),
    });
    output.exit()?;
    result
}

enum PromptKind {
    Html,
    Path,
}

struct Prompt {
    kind: PromptKind,
    window: WindowId,
    text: String,
}

impl Prompt {
    fn label(&self) -> String {
        match self.kind {
            PromptKind::Html => format!("html> {}", self.text),
            PromptKind::Path => format!("file> {}", self.text),
        }
    }
}

struct App {
    wm: WindowManager<DesktopSurface>,
    taskbar: Taskbar,
    scale: CellScale,
    screen: Rect,
    dock_rows: u16,
    snapping: bool,
    prompt: Option<Prompt>,
    help: bool,
    opened: usize,
}

impl App {
    fn new(cli: &Cli, area: Rect) -> Self {
        let scale = CellScale::new(cli.cell_width, cli.cell_height);
        let dock_rows = scale.rows_for(cli.dock_height);
        let dock = (dock_rows > 0).then(|| dock_rows as u32 * scale.cell_height);
        let (width, height) = scale.viewport_size(area);
        let mut app = Self {
            wm: WindowManager::new(DesktopSurface::new(dock), width, height),
            taskbar: Taskbar::new(),
            scale,
            screen: area,
            dock_rows,
            snapping: !cli.no_snap,
            prompt: None,
            help: false,
            opened: 0,
        };
        for n in 0..cli.windows {
            app.open_window(n % 2 == 0);
        }
        app
    }

    fn open_window(&mut self, with_url: bool) -> WindowId {
        self.opened += 1;
        let n = self.opened;
        let viewport = self.wm.viewport();
        let width = (viewport.width / 2).max(self.wm.config().min_width);
        let height = (viewport.usable_height() / 2).max(self.wm.config().min_height);
        let step = 2 * self.scale.cell_height as i32;
        let offset = step * ((n as i32 - 1) % 6);
        let rect = WindowRect::new(offset + step, offset, width, height);
        let options = if with_url {
            WindowOptions::new(format!("Example {n}")).url(SAMPLE_URL)
        } else {
            WindowOptions::new(format!("Scratch {n}"))
        };
        self.wm
            .add_window(options.rect(rect).snapping(self.snapping))
    }

    fn draw(&mut self, frame: &mut Frame<'_>) {
        let full = frame.area();
        self.screen = full;
        let dock_hidden = self.wm.surface().dock_hidden();
        let desktop = self.taskbar.split_area(full, self.dock_rows, dock_hidden);
        let prompt = self.prompt.as_ref().map(Prompt::label);

        let buffer = frame.buffer_mut();
        render_desktop(buffer, desktop, &self.wm, self.scale);
        self.taskbar
            .render(buffer, self.wm.surface(), prompt.as_deref());

        if self.help {
            let lines = HELP.lines().count() as u16;
            let width = HELP.lines().map(|l| l.chars().count()).max().unwrap_or(0) as u16 + 4;
            let area = Rect::new(
                full.x + full.width.saturating_sub(width) / 2,
                full.y + full.height.saturating_sub(lines + 2) / 2,
                width.min(full.width),
                (lines + 2).min(full.height),
            );
            frame.render_widget(Clear, area);
            frame.render_widget(
                Paragraph::new(HELP)
                    .block(Block::default().borders(Borders::ALL).title(" keys "))
                    .style(Style::default().fg(Color::White).bg(Color::Black)),
                area,
            );
        }
    }

    fn handle_event(&mut self, event: Event) -> ControlFlow {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(_) = mouse.kind
                    && let Some(id) = self.taskbar.hit_test(mouse.column, mouse.row)
                {
                    self.wm.taskbar_click(id);
                    return ControlFlow::Continue;
                }
                if let Some(pointer) = to_pointer_event(&mouse, self.screen, self.scale) {
                    self.wm.handle_pointer(&pointer);
                }
                ControlFlow::Continue
            }
            Event::Resize(cols, rows) => {
                self.screen = Rect::new(0, 0, cols, rows);
                let (width, height) = self.scale.viewport_size(self.screen);
                self.wm.set_viewport(width, height);
                ControlFlow::Continue
            }
            _ => ControlFlow::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> ControlFlow {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return ControlFlow::Quit;
        }
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return ControlFlow::Continue;
        }
        if self.help {
            self.help = false;
            return ControlFlow::Continue;
        }

        let active = self.wm.active_window();
        match key.code {
            KeyCode::Char('q') => return ControlFlow::Quit,
            KeyCode::Char('?') => self.help = true,
            KeyCode::Char('n') => {
                self.open_window(false);
            }
            KeyCode::Char('u') => {
                self.open_window(true);
            }
            KeyCode::Tab => self.focus_next(),
            _ => {
                if let Some(id) = active {
                    self.handle_window_key(id, key.code);
                }
            }
        }
        ControlFlow::Continue
    }

    fn handle_window_key(&mut self, id: WindowId, code: KeyCode) {
        match code {
            KeyCode::Char('m') => {
                self.wm.toggle_maximize(id);
            }
            KeyCode::Char('h') => {
                self.wm.minimize(id);
            }
            KeyCode::Char('x') => {
                self.wm.close(id);
            }
            KeyCode::Left => {
                self.wm.snap_window(id, SnapRegion::Left);
            }
            KeyCode::Right => {
                self.wm.snap_window(id, SnapRegion::Right);
            }
            KeyCode::Up => {
                self.wm.snap_window(id, SnapRegion::Fullscreen);
            }
            KeyCode::Down => {
                self.wm.unsnap(id);
            }
            KeyCode::Char('r') => {
                let _ = self.wm.reset_content(id);
            }
            KeyCode::Char('p') => {
                let _ = self.wm.paste_clipboard(id, &mut SystemClipboard);
            }
            KeyCode::Char('e') => {
                if self.wm.open_manual_entry(id).is_ok() {
                    self.prompt = Some(Prompt {
                        kind: PromptKind::Html,
                        window: id,
                        text: String::new(),
                    });
                }
            }
            KeyCode::Char('f') => {
                let can_upload = self
                    .wm
                    .window(id)
                    .is_some_and(|w| w.upload_view() != UploadView::Hidden);
                if can_upload {
                    self.prompt = Some(Prompt {
                        kind: PromptKind::Path,
                        window: id,
                        text: String::new(),
                    });
                }
            }
            KeyCode::Char('o') => self.open_in_browser(id),
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(c) => prompt.text.push(c),
            KeyCode::Backspace => {
                prompt.text.pop();
            }
            KeyCode::Esc => {
                if let Some(prompt) = self.prompt.take()
                    && let PromptKind::Html = prompt.kind
                {
                    let _ = self.wm.close_manual_entry(prompt.window);
                }
            }
            KeyCode::Enter => {
                if let Some(prompt) = self.prompt.take() {
                    let _ = match prompt.kind {
                        PromptKind::Html => self.wm.apply_manual_html(prompt.window, &prompt.text),
                        PromptKind::Path => self
                            .wm
                            .upload_file(prompt.window, Path::new(prompt.text.trim())),
                    };
                }
            }
            _ => {}
        }
    }

    fn focus_next(&mut self) {
        let ids: Vec<WindowId> = self
            .wm
            .windows()
            .iter()
            .filter(|w| !w.is_closing())
            .map(|w| w.id())
            .collect();
        if ids.is_empty() {
            return;
        }
        let next = match self
            .wm
            .active_window()
            .and_then(|a| ids.iter().position(|id| *id == a))
        {
            Some(idx) => ids[(idx + 1) % ids.len()],
            None => ids[0],
        };
        self.wm.set_active_window(next);
    }

    fn open_in_browser(&mut self, id: WindowId) {
        let Some(url) = self.wm.window(id).and_then(|w| w.url()).map(str::to_string) else {
            return;
        };
        if let Err(err) = webbrowser::open(&url) {
            tracing::warn!(%url, error = %err, "could not open browser");
            self.wm
                .surface_mut()
                .show_message(&format!("could not open {url}: {err}"));
        }
    }
}
