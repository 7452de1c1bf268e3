use crate::*;

use std::rc::Rc;
use std::sync::{Arc, Mutex};

use rollpicker::{GeometryConfig, PickerOptions};

type Sim = Controller<RecordingSurface, RecordingSurface, Rc<ManualClock>>;

fn sim(options: PickerOptions) -> (Sim, Rc<ManualClock>, Arc<Mutex<Vec<usize>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let options = options.with_on_index_change(move |i| sink.lock().unwrap().push(i));
    let clock = Rc::new(ManualClock::new(0));
    let c = Controller::new(
        options,
        RecordingSurface::new(),
        RecordingSurface::new(),
        Rc::clone(&clock),
    )
    .unwrap();
    (c, clock, seen)
}

fn languages() -> PickerOptions {
    PickerOptions::new([
        "C", "Java", "Python", "JavaScript", "PHP", ".NET", "C#", "C++", "Ruby",
    ])
    .with_geometry(50.0, 250.0)
}

// Replays programmatic scrolls the way a native view reports them.
fn deliver_echoes(c: &mut Sim) {
    for off in c.picker_mut().primary_mut().take_echoes() {
        c.on_scroll(off);
    }
}

#[test]
fn manual_clock_advances() {
    let clock = ManualClock::new(10);
    assert_eq!(clock.advance(5), 15);
    clock.set(100);
    assert_eq!(clock.now_ms(), 100);
    assert_eq!((&clock).now_ms(), 100);
}

#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock::new();
    let a = clock.now_ms();
    let b = clock.now_ms();
    assert!(b >= a);
}

#[test]
fn recording_surface_rests_on_nearest_snap_point() {
    let (c, _, _) = sim(languages());
    let primary = c.picker().primary();
    assert_eq!(primary.rest_offset(130.0), 150.0);
    assert_eq!(primary.rest_offset(-40.0), 0.0);
    assert_eq!(primary.rest_offset(9_999.0), 400.0);
    assert_eq!(primary.config().unwrap().content_padding, 100.0);

    let unconfigured = RecordingSurface::new();
    assert_eq!(unconfigured.rest_offset(13.0), 13.0);
}

#[test]
fn fling_then_settle_notifies_once() {
    let (mut c, clock, seen) = sim(languages());
    deliver_echoes(&mut c);

    for off in [12.0, 48.0, 97.0, 131.0, 148.0] {
        clock.advance(16);
        c.picker_mut().primary_mut().drag_to(off);
        c.dispatch(HostEvent::Scroll { offset: off });
        assert_eq!(c.tick(), None);
    }
    let rest = c.picker().primary().rest_offset(148.0);
    clock.advance(16);
    c.dispatch(HostEvent::ScrollEnd { offset: rest });

    assert_eq!(c.time_until_settle_ms(), Some(380));
    clock.advance(379);
    assert_eq!(c.tick(), None);
    clock.advance(1);
    assert_eq!(c.time_until_settle_ms(), Some(0));
    assert_eq!(c.tick(), Some(3));
    assert_eq!(c.time_until_settle_ms(), None);

    assert_eq!(c.picker().selected_item(), Some("JavaScript"));
    assert_eq!(c.picker().secondary().offset(), 150.0);
    assert_eq!(*seen.lock().unwrap(), vec![3]);
}

#[test]
fn programmatic_jumps_are_echoed_without_commits() {
    let (mut c, clock, seen) = sim(languages());
    c.set_index(6);
    assert_eq!(c.jump_to(2), Some(100.0));
    c.reconfigure_geometry(GeometryConfig::new(40.0, 200.0)).unwrap();
    assert_eq!(c.picker().primary().offset(), 80.0);

    clock.advance(5);
    deliver_echoes(&mut c);
    assert_eq!(c.time_until_settle_ms(), None);
    assert_eq!(c.picker().secondary().offset(), 80.0);

    clock.advance(1_000);
    assert_eq!(c.tick(), None);
    assert_eq!(c.picker().committed_index(), 2);
    assert!(seen.lock().unwrap().is_empty());

    let commands = c.picker().primary().commands();
    assert!(commands.iter().all(|cmd| !cmd.animated));
    assert_eq!(
        commands.last(),
        Some(&ScrollCommand {
            offset: 80.0,
            animated: false
        })
    );
}

#[test]
fn late_tick_does_not_drop_earlier_gesture() {
    let (mut c, clock, seen) = sim(languages());
    c.on_scroll_end(100.0);
    clock.advance(2_000);
    c.on_scroll(300.0);
    assert_eq!(c.picker().committed_index(), 2);
    assert_eq!(c.time_until_settle_ms(), Some(380));

    clock.advance(380);
    assert_eq!(c.tick(), Some(6));
    assert_eq!(*seen.lock().unwrap(), vec![2, 6]);
}

#[test]
fn jump_to_resting_row_leaves_no_echo() {
    let (mut c, _, _) = sim(languages().with_index(1));
    assert_eq!(c.picker_mut().primary_mut().take_echoes(), vec![50.0]);
    assert_eq!(c.jump_to(1), Some(50.0));
    assert!(c.picker_mut().primary_mut().take_echoes().is_empty());
    assert_eq!(c.picker().primary().commands().len(), 2);
}

#[test]
fn secondary_follows_every_primary_event() {
    let (mut c, clock, _) = sim(languages());
    for off in [3.0, 77.5, 210.25, 180.0, 400.0] {
        clock.advance(8);
        c.on_scroll(off);
        assert_eq!(c.picker().secondary().offset(), off);
        assert_eq!(
            c.picker().secondary().last_command(),
            Some(ScrollCommand {
                offset: off,
                animated: false
            })
        );
    }
    c.picker_mut().secondary_mut().clear_commands();
    assert!(c.picker().secondary().commands().is_empty());
}

#[test]
fn controller_wraps_existing_picker() {
    let picker = rollpicker::Picker::headless(languages().with_index(4)).unwrap();
    let clock = ManualClock::new(0);
    let mut c = Controller::from_picker(picker, &clock);
    c.on_scroll(0.0);
    clock.advance(500);
    assert_eq!(c.tick(), Some(0));
    assert_eq!(c.into_picker().committed_index(), 0);
}
