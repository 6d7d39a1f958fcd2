use super::constants::{BLINK_CLASS, BLINK_DURATION, VISIBLE_CLASS};
use super::links::anchor_action;
use super::scheduler::Scheduler;
use std::rc::Rc;

/// Page-level mutations outside the cursor pair: scrolling, class toggles
/// and the fade-in observer.
pub trait PageSurface {
    type Element: Clone + 'static;

    fn find(&self, selector: &str) -> Option<Self::Element>;
    fn scroll_into_view(&self, target: &Self::Element);
    fn add_class(&self, el: &Self::Element, class: &str);
    fn remove_class(&self, el: &Self::Element, class: &str);
    /// Drop `el` from the fade-in observer.
    fn stop_observing(&self, el: &Self::Element);
}

/// Handle a click on a same-page link. Returns whether the browser's
/// default navigation must be cancelled.
pub fn anchor_clicked<P: PageSurface>(page: &P, href: &str) -> bool {
    let action = anchor_action(href);
    if let Some(target) = action.scroll_to.and_then(|selector| page.find(selector)) {
        page.scroll_into_view(&target);
    }
    action.suppress_default
}

/// Fade-in observer callback for one entry. A visible element gets the
/// `visible` class and is no longer observed; returns whether it was revealed.
pub fn reveal_on_intersect<P: PageSurface>(
    page: &P,
    el: &P::Element,
    intersecting: bool,
) -> bool {
    if !intersecting {
        return false;
    }
    page.add_class(el, VISIBLE_CLASS);
    page.stop_observing(el);
    true
}

/// Flash the blink class on a clicked element.
pub fn blink<P, C>(page: &Rc<P>, scheduler: &C, el: &P::Element)
where
    P: PageSurface + 'static,
    C: Scheduler + ?Sized,
{
    page.add_class(el, BLINK_CLASS);
    let page = page.clone();
    let el = el.clone();
    scheduler.set_timeout(
        BLINK_DURATION,
        Box::new(move || page.remove_class(&el, BLINK_CLASS)),
    );
}
