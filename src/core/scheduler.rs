use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

/// Host timer services the effects run on.
///
/// The browser implementation maps onto `setTimeout` and
/// `requestAnimationFrame`; tests drive a virtual clock instead.
pub trait Scheduler {
    /// Run `task` once after `delay`. Not cancelable.
    fn set_timeout(&self, delay: Duration, task: Task);
    /// Run `task` once before the next repaint.
    fn request_frame(&self, task: Task);
}

/// Handle to a self-rescheduling per-frame loop.
///
/// Dropping the handle leaves the loop running; call [`FrameLoop::stop`] to
/// end it. The tick already queued for the next frame sees the flag and
/// returns without running.
#[derive(Clone, Debug)]
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start<C>(scheduler: Rc<C>, tick: impl FnMut() + 'static) -> Self
    where
        C: Scheduler + 'static,
    {
        let running = Rc::new(Cell::new(true));
        let tick: Rc<RefCell<dyn FnMut()>> = Rc::new(RefCell::new(tick));
        queue_frame(scheduler, running.clone(), tick);
        Self { running }
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn stop(&self) {
        self.running.set(false);
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

fn queue_frame<C>(scheduler: Rc<C>, running: Rc<Cell<bool>>, tick: Rc<RefCell<dyn FnMut()>>)
where
    C: Scheduler + 'static,
{
    let next = scheduler.clone();
    scheduler.request_frame(Box::new(move || {
        if !running.get() {
            return;
        }
        (&mut *tick.borrow_mut())();
        queue_frame(next, running, tick);
    }));
}
