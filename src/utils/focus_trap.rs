use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

use crate::utils::dom;

const FOCUSABLE: &str =
    "button, a[href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Where Tab should land inside a trap of `len` focusable elements when
/// focus is currently at `current` (None: focus is outside the trap).
/// Returns None when the browser's own move already stays inside.
pub fn wrap_target(len: usize, current: Option<usize>, backwards: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (current, backwards) {
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(i), false) if i >= last => Some(0),
        (Some(0), true) => Some(last),
        _ => None,
    }
}

fn focusables(root: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = root.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .filter(|el| !el.has_attribute("disabled") && el.get_attribute("aria-hidden").is_none())
        .collect()
}

/// Keeps Tab / Shift+Tab cycling inside `root`. Call from a keydown handler.
pub fn trap_tab(root: &Element, event: &KeyboardEvent) {
    if event.key() != "Tab" {
        return;
    }
    let elements = focusables(root);
    let active = dom::document().ok().and_then(|d| d.active_element());
    let current = active.and_then(|active| {
        elements
            .iter()
            .position(|el| el.unchecked_ref::<Element>() == &active)
    });
    if let Some(target) = wrap_target(elements.len(), current, event.shift_key()) {
        event.prevent_default();
        let _ = elements[target].focus();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_from_last_wraps_to_first() {
        assert_eq!(wrap_target(4, Some(3), false), Some(0));
    }

    #[test]
    fn shift_tab_from_first_wraps_to_last() {
        assert_eq!(wrap_target(4, Some(0), true), Some(3));
    }

    #[test]
    fn moves_inside_are_left_to_the_browser() {
        assert_eq!(wrap_target(4, Some(1), false), None);
        assert_eq!(wrap_target(4, Some(2), true), None);
    }

    #[test]
    fn focus_outside_is_pulled_in() {
        assert_eq!(wrap_target(3, None, false), Some(0));
        assert_eq!(wrap_target(3, None, true), Some(2));
    }

    #[test]
    fn single_element_keeps_focus() {
        assert_eq!(wrap_target(1, Some(0), false), Some(0));
        assert_eq!(wrap_target(1, Some(0), true), Some(0));
    }

    #[test]
    fn empty_trap_does_nothing() {
        assert_eq!(wrap_target(0, None, false), None);
    }
}
