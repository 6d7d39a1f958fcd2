use super::effects::{plan_pointer_move, MarkerKind, MarkerSpec};
use super::look::CursorLook;
use super::motion::{Follower, PointerTracker};
use super::scheduler::{FrameLoop, Scheduler};
use super::tuning::Tuning;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

/// DOM mutations the pointer effects perform.
///
/// Every method is best-effort: an implementation whose target element is
/// missing simply does nothing.
pub trait Stage {
    /// Handle to a spawned transient marker.
    type Marker: 'static;

    fn move_cursor(&self, pos: Vec2);
    fn move_follower(&self, pos: Vec2);
    fn spawn_marker(&self, spec: &MarkerSpec) -> Option<Self::Marker>;
    fn remove_marker(&self, marker: Self::Marker);
    fn apply_look(&self, look: &CursorLook);
    fn set_cursor_visible(&self, visible: bool);
    fn set_demo_playing(&self, playing: bool);
    /// Centre of the demo video element in viewport coordinates.
    fn demo_center(&self) -> Option<Vec2>;
}

/// Pointer effects controller. One per page.
pub struct CursorFx<S: Stage, C: Scheduler> {
    stage: Rc<S>,
    scheduler: Rc<C>,
    tuning: Tuning,
    pointer: RefCell<PointerTracker>,
    follower: RefCell<Follower>,
    rng: RefCell<StdRng>,
}

impl<S, C> CursorFx<S, C>
where
    S: Stage + 'static,
    C: Scheduler + 'static,
{
    pub fn new(stage: Rc<S>, scheduler: Rc<C>, tuning: Tuning, seed: u64) -> Rc<Self> {
        let follower = Follower::new(tuning.follower_ease);
        Rc::new(Self {
            stage,
            scheduler,
            tuning,
            pointer: RefCell::new(PointerTracker::default()),
            follower: RefCell::new(follower),
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        })
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn pointer(&self) -> Vec2 {
        self.pointer.borrow().current
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn follower(&self) -> Vec2 {
        self.follower.borrow().pos
    }

    pub fn pointer_moved(&self, pos: Vec2) {
        self.stage.move_cursor(pos);
        let speed = self.pointer.borrow_mut().record(pos);
        let specs = {
            let mut rng = self.rng.borrow_mut();
            plan_pointer_move(pos, speed, &self.tuning, &mut *rng)
        };
        for spec in &specs {
            self.spawn(spec);
        }
    }

    /// Advance the follower by one frame and return its new position.
    pub fn frame(&self) -> Vec2 {
        let target = self.pointer.borrow().current;
        let pos = self.follower.borrow_mut().step(target);
        self.stage.move_follower(pos);
        pos
    }

    /// Run [`CursorFx::frame`] on every animation frame until the returned
    /// handle is stopped.
    pub fn start_follower(self: &Rc<Self>) -> FrameLoop {
        let fx = self.clone();
        FrameLoop::start(self.scheduler.clone(), move || {
            fx.frame();
        })
    }

    /// Put a marker on the stage and schedule its removal.
    pub fn spawn(&self, spec: &MarkerSpec) {
        let Some(marker) = self.stage.spawn_marker(spec) else {
            return;
        };
        let stage = self.stage.clone();
        self.scheduler.set_timeout(
            self.tuning.lifetime(spec.kind),
            Box::new(move || stage.remove_marker(marker)),
        );
    }

    pub fn hover_enter(&self) {
        self.stage.apply_look(&CursorLook::HOVER);
    }

    pub fn hover_leave(&self) {
        self.stage.apply_look(&CursorLook::DEFAULT);
    }

    pub fn viewport_left(&self) {
        self.stage.set_cursor_visible(false);
    }

    pub fn viewport_entered(&self) {
        self.stage.set_cursor_visible(true);
    }

    pub fn clicked(&self, pos: Vec2) {
        self.spawn(&MarkerSpec::new(MarkerKind::Ripple, pos));
    }

    /// Play the demo video animation: a staggered particle burst from the
    /// element's centre, then a revert to the idle look.
    ///
    /// Overlapping clicks are not coalesced; each click schedules its own
    /// burst and its own revert.
    pub fn demo_clicked(self: &Rc<Self>) {
        self.stage.set_demo_playing(true);
        for i in 0..self.tuning.burst_count {
            let fx = self.clone();
            self.scheduler.set_timeout(
                self.tuning.burst_stagger * i,
                Box::new(move || fx.demo_particle()),
            );
        }
        let stage = self.stage.clone();
        self.scheduler.set_timeout(
            self.tuning.demo_revert_after,
            Box::new(move || stage.set_demo_playing(false)),
        );
        log::debug!("[fx] demo burst of {} particles", self.tuning.burst_count);
    }

    fn demo_particle(&self) {
        // Measured per particle so a scrolled page still bursts from the element.
        let Some(center) = self.stage.demo_center() else {
            return;
        };
        let spec = {
            let mut rng = self.rng.borrow_mut();
            MarkerSpec::particle(center, &self.tuning, &mut *rng)
        };
        self.spawn(&spec);
    }
}
