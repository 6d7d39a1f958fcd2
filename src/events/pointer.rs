use crate::core::{CursorFx, INTERACTIVE_SELECTOR};
use crate::dom;
use crate::scheduler::WebScheduler;
use crate::stage::DomStage;
use glam::Vec2;
use std::rc::Rc;
use web_sys as web;

pub type WebFx = CursorFx<DomStage, WebScheduler>;

pub fn wire_pointer_handlers(document: &web::Document, fx: &Rc<WebFx>) {
    wire_pointermove(document, fx);
    wire_viewport_presence(document, fx);
    wire_hover(document, fx);
    wire_click_ripple(document, fx);
}

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn wire_pointermove(document: &web::Document, fx: &Rc<WebFx>) {
    let fx = fx.clone();
    dom::add_listener(document, "pointermove", move |ev: web::PointerEvent| {
        fx.pointer_moved(client_pos(&ev));
    });
}

// Fade the cursor pair out while the pointer is outside the page.
fn wire_viewport_presence(document: &web::Document, fx: &Rc<WebFx>) {
    let fx_leave = fx.clone();
    dom::add_listener(document, "mouseleave", move |_ev: web::MouseEvent| {
        fx_leave.viewport_left();
    });
    let fx_enter = fx.clone();
    dom::add_listener(document, "mouseenter", move |_ev: web::MouseEvent| {
        fx_enter.viewport_entered();
    });
}

fn wire_hover(document: &web::Document, fx: &Rc<WebFx>) {
    let elements = dom::query_all(document, INTERACTIVE_SELECTOR);
    for el in &elements {
        let fx_enter = fx.clone();
        dom::add_listener(el, "mouseenter", move |_ev: web::MouseEvent| {
            fx_enter.hover_enter();
        });
        let fx_leave = fx.clone();
        dom::add_listener(el, "mouseleave", move |_ev: web::MouseEvent| {
            fx_leave.hover_leave();
        });
    }
    log::info!("[fx] hover styling on {} elements", elements.len());
}

fn wire_click_ripple(document: &web::Document, fx: &Rc<WebFx>) {
    let fx = fx.clone();
    dom::add_listener(document, "click", move |ev: web::MouseEvent| {
        fx.clicked(client_pos(&ev));
    });
}
