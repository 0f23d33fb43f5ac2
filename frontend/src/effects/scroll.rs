use web_sys::{ScrollBehavior, ScrollToOptions};

/// Height of the fixed header; anchor targets land just below it.
pub const HEADER_OFFSET: f64 = 72.0;
pub const HEADER_SCROLLED_AFTER: f64 = 10.0;
pub const SCROLL_TOP_VISIBLE_AFTER: f64 = 420.0;

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_AFTER
}

pub fn scroll_top_is_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_VISIBLE_AFTER
}

/// `#` alone means "top of page" in plain HTML and is left to the browser.
pub fn is_in_page_hash(href: &str) -> bool {
    href.starts_with('#') && href.len() > 1
}

pub fn anchor_target_y(rect_top: f64, page_offset: f64) -> f64 {
    rect_top + page_offset - HEADER_OFFSET
}

pub fn smooth_scroll_to_y(y: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(y);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Scrolls to the element matching `hash`. Returns false when there is no
/// such element.
pub fn smooth_scroll_to_hash(hash: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let target = window
        .document()
        .and_then(|document| document.query_selector(hash).ok().flatten());
    let Some(target) = target else {
        return false;
    };

    let page_offset = window.scroll_y().unwrap_or(0.0);
    smooth_scroll_to_y(anchor_target_y(target.get_bounding_client_rect().top(), page_offset));
    true
}
