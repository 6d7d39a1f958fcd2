#![cfg(target_arch = "wasm32")]
use crate::core::{
    CursorFx, Tuning, BRAND_BANNER, BRAND_BANNER_STYLE, BRAND_STATUS, BRAND_STATUS_STYLE,
};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod core;
mod dom;
mod events;
mod scheduler;
mod stage;

fn log_branding() {
    web::console::log_2(
        &JsValue::from_str(BRAND_BANNER),
        &JsValue::from_str(BRAND_BANNER_STYLE),
    );
    web::console::log_2(
        &JsValue::from_str(BRAND_STATUS),
        &JsValue::from_str(BRAND_STATUS_STYLE),
    );
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cursor-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let stage = Rc::new(stage::DomStage::new(&document));
    let scheduler = Rc::new(scheduler::WebScheduler::new(window));
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let fx = CursorFx::new(stage, scheduler.clone(), Tuning::default(), seed);

    events::wire_pointer_handlers(&document, &fx);
    events::wire_page_behaviors(&document, &fx, &scheduler);

    // The follower eases for as long as the page is open; the handle is not kept.
    fx.start_follower();

    log_branding();
    Ok(())
}
