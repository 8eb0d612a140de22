use desk_wm::animation::VirtualClock;
use desk_wm::config::DesktopConfig;
use desk_wm::layout::WindowRect;
use desk_wm::pointer::{PointerEvent, PointerKind};
use desk_wm::surface::DesktopSurface;
use desk_wm::window::{WindowId, WindowManager, WindowOptions};
use proptest::prelude::*;

type Desktop = WindowManager<DesktopSurface, VirtualClock>;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 800;
const DOCK: u32 = 40;

fn desktop() -> (Desktop, VirtualClock) {
    let clock = VirtualClock::new(1_000);
    let wm = WindowManager::with_clock(
        DesktopSurface::new(Some(DOCK)),
        clock.clone(),
        WIDTH,
        HEIGHT,
        DesktopConfig::default(),
    );
    (wm, clock)
}

#[derive(Debug, Clone)]
enum Op {
    Add,
    Remove(usize),
    Activate(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Add),
        (0usize..8).prop_map(Op::Remove),
        (0usize..8).prop_map(Op::Activate),
    ]
}

proptest! {
    #[test]
    fn active_window_is_always_registered(ops in prop::collection::vec(op(), 1..40)) {
        let (mut wm, clock) = desktop();
        for op in ops {
            clock.advance(1);
            let ids: Vec<WindowId> = wm.windows().iter().map(|w| w.id()).collect();
            match op {
                Op::Add => {
                    let id = wm.add_window(WindowOptions::new("w"));
                    prop_assert_eq!(wm.active_window(), Some(id));
                }
                Op::Remove(i) if !ids.is_empty() => wm.remove_window(ids[i % ids.len()]),
                Op::Activate(i) if !ids.is_empty() => {
                    prop_assert!(wm.set_active_window(ids[i % ids.len()]));
                }
                _ => {}
            }

            match wm.active_window() {
                Some(active) => prop_assert!(wm.contains(active)),
                None => prop_assert!(wm.windows().is_empty()),
            }
            let icons = wm.surface().taskbar_icons();
            prop_assert_eq!(icons.len(), wm.windows().len());
            prop_assert!(icons.iter().filter(|i| i.active).count() <= 1);
        }
    }

    #[test]
    fn drags_stay_inside_the_usable_area(
        start in (0i32..900, 0i32..400),
        moves in prop::collection::vec((-400i32..1700, -400i32..1200), 1..12),
    ) {
        let (mut wm, clock) = desktop();
        let id = wm.add_window(
            WindowOptions::new("w")
                .rect(WindowRect::new(start.0, start.1, 350, 300))
                .snapping(false),
        );
        let grip = (start.0 + 20, start.1 + 10);
        prop_assert!(wm.handle_pointer(&PointerEvent::mouse(PointerKind::Down, grip.0, grip.1)));
        for (x, y) in &moves {
            clock.advance(20);
            wm.handle_pointer(&PointerEvent::mouse(PointerKind::Move, *x, *y));
        }
        wm.handle_pointer(&PointerEvent::mouse(PointerKind::Up, 0, 0));

        let rect = wm.window(id).unwrap().geometry();
        prop_assert!(rect.x >= 0 && rect.right() <= WIDTH as i32);
        prop_assert!(rect.y >= 0 && rect.bottom() <= (HEIGHT - DOCK) as i32);
        prop_assert_eq!((rect.width, rect.height), (350, 300));
    }

    #[test]
    fn resizes_respect_minimum_and_viewport(
        moves in prop::collection::vec((-2000i32..3000, -2000i32..3000), 1..10),
    ) {
        let (mut wm, clock) = desktop();
        let config = wm.config().clone();
        let id = wm.add_window(WindowOptions::new("w").rect(WindowRect::new(100, 100, 400, 300)));
        prop_assert!(wm.handle_pointer(&PointerEvent::mouse(PointerKind::Down, 495, 395)));
        prop_assert_eq!(wm.grabbed_window(), Some(id));
        for (x, y) in &moves {
            clock.advance(20);
            wm.handle_pointer(&PointerEvent::mouse(PointerKind::Move, *x, *y));
            let rect = wm.window(id).unwrap().geometry();
            prop_assert!(rect.width >= config.min_width && rect.width <= WIDTH);
            prop_assert!(rect.height >= config.min_height && rect.height <= HEIGHT - DOCK);
        }
        wm.handle_pointer(&PointerEvent::mouse(PointerKind::Up, 0, 0));
        prop_assert_eq!(wm.grabbed_window(), None);
    }
}
