// Host-side tests for the cancelable frame loop.

mod common;

use common::scheduler::{FrameLoop, Scheduler};
use common::ManualScheduler;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

#[test]
fn frame_loop_ticks_once_per_frame() {
    let scheduler = Rc::new(ManualScheduler::default());
    let ticks = Rc::new(Cell::new(0));
    let counter = ticks.clone();
    let handle = FrameLoop::start(scheduler.clone(), move || counter.set(counter.get() + 1));

    assert!(handle.is_running());
    assert_eq!(ticks.get(), 0);
    for expected in 1..=5 {
        assert_eq!(scheduler.run_frame(), 1);
        assert_eq!(ticks.get(), expected);
    }
    assert_eq!(scheduler.pending_frames(), 1);
}

#[test]
fn stop_ends_the_loop_before_the_next_tick() {
    let scheduler = Rc::new(ManualScheduler::default());
    let ticks = Rc::new(Cell::new(0));
    let counter = ticks.clone();
    let handle = FrameLoop::start(scheduler.clone(), move || counter.set(counter.get() + 1));

    scheduler.run_frame();
    handle.stop();
    assert!(!handle.is_running());
    scheduler.run_frame();
    scheduler.run_frame();
    assert_eq!(ticks.get(), 1);
    assert_eq!(scheduler.pending_frames(), 0);
}

#[test]
fn dropping_the_handle_keeps_the_loop_alive() {
    let scheduler = Rc::new(ManualScheduler::default());
    let ticks = Rc::new(Cell::new(0));
    let counter = ticks.clone();
    drop(FrameLoop::start(scheduler.clone(), move || {
        counter.set(counter.get() + 1)
    }));
    for _ in 0..3 {
        scheduler.run_frame();
    }
    assert_eq!(ticks.get(), 3);
}

#[test]
fn stopping_a_clone_stops_the_loop() {
    let scheduler = Rc::new(ManualScheduler::default());
    let handle = FrameLoop::start(scheduler.clone(), || {});
    let other = handle.clone();
    other.stop();
    assert!(!handle.is_running());
}

#[test]
fn manual_timers_fire_in_due_order() {
    let scheduler = ManualScheduler::default();
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));
    for (label, ms) in [("c", 30u64), ("a", 10), ("b", 20), ("a2", 10)] {
        let order = order.clone();
        scheduler.set_timeout(
            Duration::from_millis(ms),
            Box::new(move || order.borrow_mut().push(label)),
        );
    }
    scheduler.advance_ms(25);
    assert_eq!(*order.borrow(), vec!["a", "a2", "b"]);
    assert_eq!(scheduler.now(), Duration::from_millis(25));
    scheduler.advance_ms(5);
    assert_eq!(*order.borrow(), vec!["a", "a2", "b", "c"]);
}
