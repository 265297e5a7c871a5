use chrono::Datelike;
use log::debug;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls to the element with the given id. Returns false, without
/// scrolling, when there is no such element on the page.
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        debug!("No anchor with id {}, not scrolling", id);
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
