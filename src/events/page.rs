use super::pointer::WebFx;
use crate::core::page::{anchor_clicked, blink, reveal_on_intersect};
use crate::core::*;
use crate::dom;
use crate::scheduler::WebScheduler;
use crate::stage::DomPage;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Page behaviours that are not tied to the cursor pair.
pub fn wire_page_behaviors(
    document: &web::Document,
    fx: &Rc<WebFx>,
    scheduler: &Rc<WebScheduler>,
) {
    let page = Rc::new(DomPage::new(document));
    wire_smooth_scroll(document, &page);
    wire_fade_in(document, &page);
    wire_demo_video(document, fx);
    wire_click_blink(document, &page, scheduler);
}

fn wire_smooth_scroll(document: &web::Document, page: &Rc<DomPage>) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let page = page.clone();
        let link = anchor.clone();
        dom::add_listener(&anchor, "click", move |ev: web::MouseEvent| {
            let href = link.get_attribute("href").unwrap_or_default();
            if anchor_clicked(&*page, &href) {
                ev.prevent_default();
            }
        });
    }
}

fn wire_fade_in(document: &web::Document, page: &Rc<DomPage>) {
    let page_cb = page.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                reveal_on_intersect(&*page_cb, &entry.target(), entry.is_intersecting());
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(FADE_IN_THRESHOLD));
    init.set_root_margin(FADE_IN_ROOT_MARGIN);
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[page] fade-in disabled: {:?}", e);
            return;
        }
    };
    let elements = dom::query_all(document, FADE_IN_SELECTOR);
    for el in &elements {
        observer.observe(el);
    }
    page.attach_observer(observer);
    callback.forget();
    log::info!("[page] observing {} fade-in elements", elements.len());
}

fn wire_demo_video(document: &web::Document, fx: &Rc<WebFx>) {
    let Some(demo) = dom::query_html(document, DEMO_VIDEO_SELECTOR) else {
        return;
    };
    let fx = fx.clone();
    dom::add_listener(&demo, "click", move |_ev: web::MouseEvent| {
        fx.demo_clicked();
    });
}

fn wire_click_blink(document: &web::Document, page: &Rc<DomPage>, scheduler: &Rc<WebScheduler>) {
    for el in dom::query_all(document, CLICKABLE_SELECTOR) {
        let target = el.clone();
        let page = page.clone();
        let scheduler = scheduler.clone();
        dom::add_listener(&el, "click", move |_ev: web::MouseEvent| {
            blink(&page, &*scheduler, &target);
        });
    }
}
