// Shared harness for the host-side tests.
// The main crate is wasm-only, so the pure effect modules are included
// directly and driven through a virtual clock and a recording stage.

#![allow(dead_code)]

pub mod constants {
    include!("../../src/core/constants.rs");
}
pub mod tuning {
    include!("../../src/core/tuning.rs");
}
pub mod scheduler {
    include!("../../src/core/scheduler.rs");
}
pub mod motion {
    include!("../../src/core/motion.rs");
}
pub mod effects {
    include!("../../src/core/effects.rs");
}
pub mod look {
    include!("../../src/core/look.rs");
}
pub mod controller {
    include!("../../src/core/controller.rs");
}
pub mod links {
    include!("../../src/core/links.rs");
}
pub mod page {
    include!("../../src/core/page.rs");
}

use controller::Stage;
use effects::MarkerSpec;
use glam::Vec2;
use look::CursorLook;
use scheduler::{Scheduler, Task};
use std::cell::{Cell, RefCell};
use page::PageSurface;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

struct Timer {
    due: Duration,
    seq: u64,
    task: Task,
}

/// Deterministic scheduler: timers fire in (due, insertion) order when the
/// clock is advanced; frames run only when asked.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    seq: Cell<u64>,
    timers: RefCell<Vec<Timer>>,
    frames: RefCell<Vec<Task>>,
}

impl ManualScheduler {
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    /// Move the clock forward, firing every timer that falls due on the way,
    /// including timers scheduled by the tasks themselves.
    pub fn advance(&self, by: Duration) {
        let deadline = self.now.get() + by;
        loop {
            let next = {
                let mut timers = self.timers.borrow_mut();
                let idx = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= deadline)
                    .min_by_key(|(_, t)| (t.due, t.seq))
                    .map(|(i, _)| i);
                idx.map(|i| timers.remove(i))
            };
            match next {
                Some(timer) => {
                    self.now.set(timer.due);
                    (timer.task)();
                }
                None => break,
            }
        }
        self.now.set(deadline);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Run the callbacks queued for the next frame; returns how many ran.
    pub fn run_frame(&self) -> usize {
        let tasks = std::mem::take(&mut *self.frames.borrow_mut());
        let n = tasks.len();
        for task in tasks {
            task();
        }
        n
    }
}

impl Scheduler for ManualScheduler {
    fn set_timeout(&self, delay: Duration, task: Task) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.timers.borrow_mut().push(Timer {
            due: self.now.get() + delay,
            seq,
            task,
        });
    }

    fn request_frame(&self, task: Task) {
        self.frames.borrow_mut().push(task);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StageEvent {
    CursorMoved(Vec2),
    FollowerMoved(Vec2),
    Spawned(usize, MarkerSpec),
    Removed(usize),
    Look(CursorLook),
    Visible(bool),
    DemoPlaying(bool),
}

/// Stage that records every mutation instead of touching a document.
pub struct RecordingStage {
    pub events: RefCell<Vec<StageEvent>>,
    pub live: RefCell<BTreeMap<usize, MarkerSpec>>,
    pub demo_center: Cell<Option<Vec2>>,
    /// `false` simulates a page without `<body>`: spawns fail.
    pub has_body: Cell<bool>,
    next_id: Cell<usize>,
}

impl Default for RecordingStage {
    fn default() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            live: RefCell::new(BTreeMap::new()),
            demo_center: Cell::new(Some(Vec2::new(400.0, 300.0))),
            has_body: Cell::new(true),
            next_id: Cell::new(0),
        }
    }
}

impl RecordingStage {
    pub fn spawned(&self) -> Vec<MarkerSpec> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                StageEvent::Spawned(_, spec) => Some(*spec),
                _ => None,
            })
            .collect()
    }

    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }

    pub fn last_cursor(&self) -> Option<Vec2> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            StageEvent::CursorMoved(p) => Some(*p),
            _ => None,
        })
    }

    pub fn demo_states(&self) -> Vec<bool> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                StageEvent::DemoPlaying(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl Stage for RecordingStage {
    type Marker = usize;

    fn move_cursor(&self, pos: Vec2) {
        self.events.borrow_mut().push(StageEvent::CursorMoved(pos));
    }

    fn move_follower(&self, pos: Vec2) {
        self.events.borrow_mut().push(StageEvent::FollowerMoved(pos));
    }

    fn spawn_marker(&self, spec: &MarkerSpec) -> Option<usize> {
        if !self.has_body.get() {
            return None;
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.live.borrow_mut().insert(id, *spec);
        self.events.borrow_mut().push(StageEvent::Spawned(id, *spec));
        Some(id)
    }

    fn remove_marker(&self, marker: usize) {
        self.live.borrow_mut().remove(&marker);
        self.events.borrow_mut().push(StageEvent::Removed(marker));
    }

    fn apply_look(&self, look: &CursorLook) {
        self.events.borrow_mut().push(StageEvent::Look(*look));
    }

    fn set_cursor_visible(&self, visible: bool) {
        self.events.borrow_mut().push(StageEvent::Visible(visible));
    }

    fn set_demo_playing(&self, playing: bool) {
        self.events.borrow_mut().push(StageEvent::DemoPlaying(playing));
    }

    fn demo_center(&self) -> Option<Vec2> {
        self.demo_center.get()
    }
}

/// Page double: elements are named by the selector that finds them.
#[derive(Default)]
pub struct RecordingPage {
    targets: BTreeSet<String>,
    pub classes: RefCell<BTreeMap<String, BTreeSet<String>>>,
    pub scrolled: RefCell<Vec<String>>,
    pub unobserved: RefCell<Vec<String>>,
}

impl RecordingPage {
    pub fn with_targets(selectors: &[&str]) -> Self {
        Self {
            targets: selectors.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn has_class(&self, el: &str, class: &str) -> bool {
        self.classes
            .borrow()
            .get(el)
            .map_or(false, |set| set.contains(class))
    }
}

impl PageSurface for RecordingPage {
    type Element = String;

    fn find(&self, selector: &str) -> Option<String> {
        self.targets.get(selector).cloned()
    }

    fn scroll_into_view(&self, target: &String) {
        self.scrolled.borrow_mut().push(target.clone());
    }

    fn add_class(&self, el: &String, class: &str) {
        self.classes
            .borrow_mut()
            .entry(el.clone())
            .or_default()
            .insert(class.to_string());
    }

    fn remove_class(&self, el: &String, class: &str) {
        if let Some(set) = self.classes.borrow_mut().get_mut(el) {
            set.remove(class);
        }
    }

    fn stop_observing(&self, el: &String) {
        self.unobserved.borrow_mut().push(el.clone());
    }
}
