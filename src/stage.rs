use crate::core::*;
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Stage` over the live document: the two cursor elements, the optional
/// demo video element, and markers appended to `<body>`.
pub struct DomStage {
    document: web::Document,
    cursor: Option<web::HtmlElement>,
    follower: Option<web::HtmlElement>,
    demo: Option<web::HtmlElement>,
}

impl DomStage {
    pub fn new(document: &web::Document) -> Self {
        let cursor = dom::query_html(document, CURSOR_SELECTOR);
        let follower = dom::query_html(document, FOLLOWER_SELECTOR);
        if cursor.is_none() || follower.is_none() {
            log::warn!("[fx] cursor elements missing; only markers will render");
        }
        Self {
            document: document.clone(),
            cursor,
            follower,
            demo: dom::query_html(document, DEMO_VIDEO_SELECTOR),
        }
    }

    fn cursor_pair(&self) -> impl Iterator<Item = &web::HtmlElement> {
        self.cursor.iter().chain(self.follower.iter())
    }
}

impl Stage for DomStage {
    type Marker = web::HtmlElement;

    fn move_cursor(&self, pos: Vec2) {
        if let Some(cursor) = &self.cursor {
            dom::place_at(cursor, pos);
        }
    }

    fn move_follower(&self, pos: Vec2) {
        if let Some(follower) = &self.follower {
            dom::place_at(follower, pos);
        }
    }

    fn spawn_marker(&self, spec: &MarkerSpec) -> Option<web::HtmlElement> {
        let body = self.document.body()?;
        let el = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        if let Some(class) = spec.kind.class_name() {
            el.set_class_name(class);
        }
        if spec.kind == MarkerKind::Ripple {
            for (property, value) in RIPPLE_STYLE {
                dom::set_style(&el, property, value);
            }
        }
        if spec.kind.is_horizontal_band() {
            dom::set_px(&el, "top", spec.at.y);
        } else {
            dom::place_at(&el, spec.at);
        }
        if let Some(drift) = spec.drift {
            dom::set_px(&el, "--tx", drift.x);
            dom::set_px(&el, "--ty", drift.y);
        }
        body.append_child(&el).ok()?;
        Some(el)
    }

    fn remove_marker(&self, marker: web::HtmlElement) {
        marker.remove();
    }

    fn apply_look(&self, look: &CursorLook) {
        if let Some(cursor) = &self.cursor {
            for (property, value) in look.cursor_styles() {
                dom::set_style(cursor, property, value);
            }
        }
        if let Some(follower) = &self.follower {
            for (property, value) in look.follower_styles() {
                dom::set_style(follower, property, value);
            }
        }
    }

    fn set_cursor_visible(&self, visible: bool) {
        let opacity = look::opacity_value(visible);
        for el in self.cursor_pair() {
            dom::set_style(el, "opacity", opacity);
        }
    }

    fn set_demo_playing(&self, playing: bool) {
        let Some(demo) = &self.demo else {
            return;
        };
        let (icon, background) = if playing {
            (DEMO_ICON_PLAYING, DEMO_BG_PLAYING)
        } else {
            (DEMO_ICON_IDLE, DEMO_BG_IDLE)
        };
        demo.set_text_content(Some(icon));
        dom::set_style(demo, "background", background);
    }

    fn demo_center(&self) -> Option<Vec2> {
        self.demo.as_ref().map(|el| dom::rect_center(el))
    }
}

/// `PageSurface` over the live document. The fade-in observer is attached
/// once it has been created.
pub struct DomPage {
    document: web::Document,
    fade_observer: RefCell<Option<web::IntersectionObserver>>,
}

impl DomPage {
    pub fn new(document: &web::Document) -> Self {
        Self {
            document: document.clone(),
            fade_observer: RefCell::new(None),
        }
    }

    pub fn attach_observer(&self, observer: web::IntersectionObserver) {
        *self.fade_observer.borrow_mut() = Some(observer);
    }
}

impl PageSurface for DomPage {
    type Element = web::Element;

    fn find(&self, selector: &str) -> Option<web::Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn scroll_into_view(&self, target: &web::Element) {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        opts.set_block(web::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&opts);
    }

    fn add_class(&self, el: &web::Element, class: &str) {
        _ = el.class_list().add_1(class);
    }

    fn remove_class(&self, el: &web::Element, class: &str) {
        _ = el.class_list().remove_1(class);
    }

    fn stop_observing(&self, el: &web::Element) {
        if let Some(observer) = self.fade_observer.borrow().as_ref() {
            observer.unobserve(el);
        }
    }
}
