use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Storage,
    Window,
};

use crate::error::{SiteError, SiteResult};

pub fn window() -> SiteResult<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> SiteResult<Document> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub fn body() -> SiteResult<HtmlElement> {
    document()?.body().ok_or(SiteError::NoDocument)
}

pub fn element_by_id(id: &str) -> SiteResult<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(id.to_string()))
}

pub fn local_storage() -> SiteResult<Storage> {
    window()?
        .local_storage()
        .map_err(|_| SiteError::StorageUnavailable)?
        .ok_or(SiteError::StorageUnavailable)
}

/// Document-relative top of an element.
pub fn document_top(element: &Element) -> SiteResult<f64> {
    let scroll_y = window()?.scroll_y()?;
    Ok(element.get_bounding_client_rect().top() + scroll_y)
}

pub fn smooth_scroll_to(top: f64) -> SiteResult<()> {
    let options = ScrollToOptions::new();
    options.set_top(top.max(0.0));
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Smooth-scrolls so the element sits `offset` px below the viewport top.
pub fn smooth_scroll_to_element(element: &Element, offset: f64) -> SiteResult<()> {
    smooth_scroll_to(document_top(element)? - offset)
}

pub fn scroll_into_view(id: &str) -> SiteResult<()> {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element_by_id(id)?.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Swaps the current history entry without navigating or scrolling.
pub fn replace_url(url: &str) -> SiteResult<()> {
    window()?
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(url))?;
    Ok(())
}

/// Runs `f` after the next two animation frames, once layout has settled.
pub fn after_layout(f: impl FnOnce() + 'static) -> SiteResult<()> {
    let inner = Closure::once_into_js(f);
    let outer = Closure::once_into_js(move || {
        if let Ok(window) = window() {
            if let Err(e) = window.request_animation_frame(inner.unchecked_ref()) {
                log::warn!("Failed to schedule frame: {:?}", e);
            }
        }
    });
    window()?.request_animation_frame(outer.unchecked_ref())?;
    Ok(())
}

/// Window event listener that is removed when dropped.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn Fn(Event)>,
}

impl WindowListener {
    pub fn new(event: &'static str, handler: impl Fn(Event) + 'static) -> SiteResult<Self> {
        let callback = Closure::<dyn Fn(Event)>::new(handler);
        window()?.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { event, callback })
    }

    /// Listens for the lifetime of the returned guard; failures are logged.
    pub fn attach(event: &'static str, handler: impl Fn(Event) + 'static) -> Option<Self> {
        Self::new(event, handler)
            .map_err(|e| log::warn!("Failed to listen for {}: {}", event, e))
            .ok()
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Ok(window) = window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}
