/// Selector for the element a same-page link points at.
///
/// Returns `None` for hrefs that are not fragment links or that name no
/// element (a bare `#`). Anything else is handed to `querySelector` as is,
/// so `#features .card` works and an invalid selector simply finds nothing.
#[inline]
pub fn fragment_target(href: &str) -> Option<&str> {
    let href = href.trim();
    match href.strip_prefix('#') {
        Some(rest) if !rest.is_empty() => Some(href),
        _ => None,
    }
}

/// What a click on a same-page link should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorAction<'a> {
    /// Cancel the browser's own jump. Always set: the page never wants one,
    /// even when the link has no target.
    pub suppress_default: bool,
    pub scroll_to: Option<&'a str>,
}

#[inline]
pub fn anchor_action(href: &str) -> AnchorAction<'_> {
    AnchorAction {
        suppress_default: true,
        scroll_to: fragment_target(href),
    }
}
