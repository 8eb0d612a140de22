use desk_wm::animation::VirtualClock;
use desk_wm::config::DesktopConfig;
use desk_wm::layout::WindowRect;
use desk_wm::layout::snap::SnapRegion;
use desk_wm::pointer::{PointerEvent, PointerKind};
use desk_wm::surface::DesktopSurface;
use desk_wm::window::{WindowId, WindowManager, WindowMode, WindowOptions};

type Desktop = WindowManager<DesktopSurface, VirtualClock>;

fn desktop() -> (Desktop, VirtualClock) {
    let clock = VirtualClock::new(1_000);
    let wm = WindowManager::with_clock(
        DesktopSurface::new(Some(60)),
        clock.clone(),
        1920,
        1080,
        DesktopConfig::default(),
    );
    (wm, clock)
}

fn open(wm: &mut Desktop, title: &str, rect: WindowRect) -> WindowId {
    wm.add_window(WindowOptions::new(title).rect(rect))
}

fn z_of(wm: &Desktop, id: WindowId) -> i32 {
    wm.surface().element(id).map(|el| el.z_index).unwrap_or_default()
}

#[test]
fn drag_to_top_left_corner_snaps_quarter() {
    let (mut wm, clock) = desktop();
    let a = open(&mut wm, "A", WindowRect::new(100, 100, 350, 570));

    assert!(wm.handle_pointer(&PointerEvent::mouse(PointerKind::Down, 120, 112)));
    assert_eq!(wm.grabbed_window(), Some(a));
    clock.advance(20);
    wm.handle_pointer(&PointerEvent::mouse(PointerKind::Move, 5, 5));

    let quarter = WindowRect::new(0, 0, 960, 510);
    assert_eq!(wm.surface().snap_preview(), Some(quarter));

    wm.handle_pointer(&PointerEvent::mouse(PointerKind::Up, 5, 5));
    let window = wm.window(a).unwrap();
    assert_eq!(window.geometry(), quarter);
    assert_eq!(window.mode(), WindowMode::Snapped(SnapRegion::TopLeft));
    assert_eq!(window.normal_geometry(), WindowRect::new(100, 100, 350, 570));
    assert_eq!(wm.surface().snap_preview(), None);
    assert_eq!(wm.surface().element(a).unwrap().layout_rect(), quarter);
    assert_eq!(wm.surface().dock_hidden(), Some(false));
}

#[test]
fn taskbar_click_moves_focus_and_layers() {
    let (mut wm, _clock) = desktop();
    let a = open(&mut wm, "A", WindowRect::new(100, 100, 350, 570));
    let b = open(&mut wm, "B", WindowRect::new(400, 100, 350, 570));

    assert_eq!(wm.active_window(), Some(b));
    assert!(wm.surface().taskbar_icon(b).unwrap().active);
    assert!(!wm.surface().taskbar_icon(a).unwrap().active);

    wm.taskbar_click(a);
    assert_eq!(wm.active_window(), Some(a));
    assert_eq!(z_of(&wm, a), wm.config().foreground_z_index);
    assert_eq!(z_of(&wm, b), wm.config().base_z_index);
    assert!(wm.surface().taskbar_icon(a).unwrap().active);
    assert!(!wm.surface().taskbar_icon(b).unwrap().active);
    assert_eq!(wm.stacking_order(), vec![b, a]);
}

#[test]
fn clicking_the_active_icon_minimizes_and_again_restores() {
    let (mut wm, clock) = desktop();
    let a = open(&mut wm, "A", WindowRect::new(100, 100, 350, 570));

    wm.taskbar_click(a);
    assert!(wm.window(a).unwrap().is_minimized());

    clock.advance(600);
    wm.tick();
    wm.taskbar_click(a);
    assert_eq!(wm.window(a).unwrap().mode(), WindowMode::Normal);
    assert_eq!(wm.active_window(), Some(a));
}

#[test]
fn maximize_hides_dock_and_toggle_restores_geometry() {
    let (mut wm, _clock) = desktop();
    let a = open(&mut wm, "A", WindowRect::new(100, 100, 350, 570));

    assert!(wm.toggle_maximize(a));
    assert_eq!(wm.surface().dock_hidden(), Some(true));
    assert_eq!(wm.window(a).unwrap().geometry(), WindowRect::new(0, 0, 1920, 1080));
    assert_eq!(wm.surface().element(a).unwrap().mode, WindowMode::Maximized);

    assert!(wm.toggle_maximize(a));
    assert_eq!(wm.surface().dock_hidden(), Some(false));
    assert_eq!(wm.window(a).unwrap().geometry(), WindowRect::new(100, 100, 350, 570));
    assert_eq!(wm.window(a).unwrap().mode(), WindowMode::Normal);
}

#[test]
fn minimize_and_restore_are_dropped_while_animating() {
    let (mut wm, clock) = desktop();
    let a = open(&mut wm, "A", WindowRect::new(100, 100, 350, 570));

    assert!(wm.minimize(a));
    assert!(wm.window(a).unwrap().is_animating());
    assert!(!wm.minimize(a));
    assert!(!wm.restore(a));

    clock.advance(100);
    wm.tick();
    assert_eq!(wm.surface().element(a).unwrap().top, 1020);
    assert!(wm.window(a).unwrap().is_animating());

    clock.advance(500);
    wm.tick();
    assert!(!wm.window(a).unwrap().is_animating());
    assert!(!wm.surface().element(a).unwrap().is_visible());

    assert!(wm.restore(a));
    assert!(!wm.minimize(a));
    clock.advance(10);
    wm.tick();
    let el = wm.surface().element(a).unwrap();
    assert_eq!((el.left, el.top, el.opacity), (100, 100, 1.0));
    clock.advance(500);
    wm.tick();
    assert!(!wm.window(a).unwrap().is_animating());
    assert!(wm.minimize(a));
}

#[test]
fn restoring_a_maximized_window_hides_the_dock_again() {
    let (mut wm, clock) = desktop();
    let a = open(&mut wm, "A", WindowRect::new(100, 100, 350, 570));
    wm.toggle_maximize(a);

    wm.minimize(a);
    assert_eq!(wm.surface().dock_hidden(), Some(false));
    clock.advance(600);
    wm.tick();

    wm.restore(a);
    assert_eq!(wm.window(a).unwrap().mode(), WindowMode::Maximized);
    clock.advance(10);
    wm.tick();
    assert_eq!(wm.surface().dock_hidden(), Some(true));
    assert_eq!(
        wm.surface().element(a).unwrap().layout_rect(),
        WindowRect::new(0, 0, 1920, 1080)
    );
}

#[test]
fn restoring_a_normal_window_shows_the_dock() {
    let (mut wm, clock) = desktop();
    let a = open(&mut wm, "A", WindowRect::new(100, 100, 350, 570));
    let b = open(&mut wm, "B", WindowRect::new(400, 100, 350, 570));

    wm.minimize(a);
    clock.advance(600);
    wm.tick();
    wm.toggle_maximize(b);
    assert_eq!(wm.surface().dock_hidden(), Some(true));

    assert!(wm.restore(a));
    clock.advance(9);
    wm.tick();
    assert_eq!(wm.surface().dock_hidden(), Some(true));

    clock.advance(1);
    wm.tick();
    assert_eq!(wm.window(a).unwrap().mode(), WindowMode::Normal);
    assert_eq!(wm.surface().dock_hidden(), Some(false));
    assert!(wm.surface().element(a).unwrap().is_visible());
}

#[test]
fn close_fades_then_unregisters() {
    let (mut wm, clock) = desktop();
    let a = open(&mut wm, "A", WindowRect::new(100, 100, 350, 570));
    let b = open(&mut wm, "B", WindowRect::new(400, 100, 350, 570));

    assert!(wm.close(b));
    assert!(!wm.close(b));
    assert!(wm.window(b).unwrap().is_closing());
    assert_eq!(wm.surface().element(b).unwrap().opacity, 0.0);

    clock.advance(499);
    wm.tick();
    assert!(wm.contains(b));

    clock.advance(1);
    wm.tick();
    assert!(!wm.contains(b));
    assert!(wm.surface().element(b).is_none());
    assert!(wm.surface().taskbar_icon(b).is_none());
    assert_eq!(wm.active_window(), Some(a));
}

#[test]
fn side_snaps_split_the_usable_area() {
    let (mut wm, _clock) = desktop();
    let a = open(&mut wm, "A", WindowRect::new(100, 100, 350, 570));
    let b = open(&mut wm, "B", WindowRect::new(400, 100, 350, 570));

    wm.snap_window(a, SnapRegion::Left);
    wm.snap_window(b, SnapRegion::Right);
    assert_eq!(wm.window(a).unwrap().geometry(), WindowRect::new(0, 0, 960, 1020));
    assert_eq!(wm.window(b).unwrap().geometry(), WindowRect::new(960, 0, 960, 1020));
    assert_eq!(wm.surface().dock_hidden(), Some(false));

    wm.snap_window(b, SnapRegion::Fullscreen);
    assert_eq!(wm.surface().dock_hidden(), Some(true));
    assert!(wm.unsnap(b));
    assert_eq!(wm.window(b).unwrap().geometry(), WindowRect::new(400, 100, 350, 570));
    assert_eq!(wm.surface().dock_hidden(), Some(false));
}

#[test]
fn dragging_a_snapped_window_restores_its_normal_size() {
    let (mut wm, clock) = desktop();
    let a = open(&mut wm, "A", WindowRect::new(100, 100, 350, 570));
    wm.snap_window(a, SnapRegion::Left);

    wm.handle_pointer(&PointerEvent::mouse(PointerKind::Down, 480, 10));
    clock.advance(20);
    wm.handle_pointer(&PointerEvent::mouse(PointerKind::Move, 800, 400));
    wm.handle_pointer(&PointerEvent::mouse(PointerKind::Up, 800, 400));

    let window = wm.window(a).unwrap();
    assert_eq!(window.mode(), WindowMode::Normal);
    assert_eq!((window.geometry().width, window.geometry().height), (350, 570));
    assert!(window.geometry().x <= 800 && window.geometry().right() > 800);
}

#[test]
fn removal_keeps_or_hands_over_focus() {
    let (mut wm, _clock) = desktop();
    let a = open(&mut wm, "A", WindowRect::new(100, 100, 350, 570));
    let b = open(&mut wm, "B", WindowRect::new(200, 100, 350, 570));
    let c = open(&mut wm, "C", WindowRect::new(300, 100, 350, 570));

    wm.remove_window(a);
    assert_eq!(wm.active_window(), Some(c));

    wm.remove_window(c);
    assert_eq!(wm.active_window(), Some(b));
    assert!(wm.surface().taskbar_icon(b).unwrap().active);

    wm.remove_window(b);
    assert_eq!(wm.active_window(), None);
    assert!(wm.surface().taskbar_icons().is_empty());
}

#[test]
fn system_panels_stay_off_the_taskbar() {
    let (mut wm, _clock) = desktop();
    let panel = wm.add_window(
        WindowOptions::new("Settings")
            .system_panel(true)
            .show_title_bar(false),
    );
    assert!(wm.surface().taskbar_icon(panel).is_none());
    assert_eq!(wm.active_window(), Some(panel));
    assert!(!wm.begin_drag(
        panel,
        desk_wm::layout::Point::new(1010, 110),
        desk_wm::pointer::PointerSource::Mouse
    ));
}
