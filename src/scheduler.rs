use crate::core::{Scheduler, Task};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `setTimeout` / `requestAnimationFrame` backed scheduler.
pub struct WebScheduler {
    window: web::Window,
}

impl WebScheduler {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl Scheduler for WebScheduler {
    fn set_timeout(&self, delay: Duration, task: Task) {
        let callback = Closure::once_into_js(move || task());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        {
            log::warn!("[fx] setTimeout failed: {:?}", e);
        }
    }

    fn request_frame(&self, task: Task) {
        let callback = Closure::once_into_js(move |_timestamp: f64| task());
        if let Err(e) = self.window.request_animation_frame(callback.unchecked_ref()) {
            log::warn!("[fx] requestAnimationFrame failed: {:?}", e);
        }
    }
}
