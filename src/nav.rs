/// Height of the fixed navbar; anchors land just below it.
pub const NAVBAR_OFFSET: f64 = 85.0;

/// Absolute scroll position that puts an element right under the navbar.
///
/// `element_top` is the element's viewport-relative top (`getBoundingClientRect().top`),
/// `scroll_y` the current document scroll.
pub fn scroll_target(element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y - NAVBAR_OFFSET
}
