use std::collections::HashSet;
use std::sync::Mutex;

use gloo_net::http::{Method, Request};
use once_cell::sync::Lazy;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{MediaQueryListEvent, RequestMode};
use yew::prelude::*;

use crate::error::{SiteError, SiteResult};
use crate::utils::dom;

static WARMED: Lazy<Mutex<HashSet<String>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Records `url` as warmed. True only the first time a given url is seen.
pub fn first_warm(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    WARMED
        .lock()
        .map(|mut warmed| warmed.insert(url.to_string()))
        .unwrap_or(false)
}

fn insert_preload_link(url: &str) -> SiteResult<()> {
    let document = dom::document()?;
    let link = document.create_element("link")?;
    link.set_attribute("rel", "preload")?;
    link.set_attribute("as", "video")?;
    link.set_attribute("href", url)?;
    document
        .head()
        .ok_or(SiteError::NoDocument)?
        .append_child(&link)?;
    Ok(())
}

/// Light preload so a reel starts fast once its modal opens: a preload hint
/// plus a HEAD request that warms the CDN edge. Runs at most once per url.
pub fn warm_video(url: &str) {
    if !first_warm(url) {
        return;
    }
    if let Err(e) = insert_preload_link(url) {
        log::debug!("Preload hint for {} skipped: {}", url, e);
    }
    let url = url.to_string();
    spawn_local(async move {
        let result = Request::new(&url)
            .method(Method::HEAD)
            .mode(RequestMode::NoCors)
            .send()
            .await;
        if let Err(e) = result {
            log::debug!("Warm request for {} failed: {:?}", url, e);
        }
    });
}

fn current_match(query: &str) -> bool {
    dom::window()
        .ok()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

/// Tracks whether the viewport matches a media query, following changes.
#[hook]
pub fn use_media_query(query: &'static str) -> bool {
    let matches = use_state(|| current_match(query));
    {
        let matches = matches.clone();
        use_effect_with_deps(
            move |query: &&'static str| {
                let listener = dom::window()
                    .ok()
                    .and_then(|w| w.match_media(query).ok().flatten())
                    .map(|list| {
                        matches.set(list.matches());
                        let callback = Closure::<dyn Fn(MediaQueryListEvent)>::new({
                            let matches = matches.clone();
                            move |e: MediaQueryListEvent| matches.set(e.matches())
                        });
                        if let Err(e) = list
                            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
                        {
                            log::warn!("Failed to watch media query: {:?}", e);
                        }
                        (list, callback)
                    });
                move || {
                    if let Some((list, callback)) = listener {
                        let _ = list.remove_event_listener_with_callback(
                            "change",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            query,
        );
    }
    *matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_warm_once() {
        let url = "https://res.cloudinary.com/demo/video/upload/q_auto/clip";
        assert!(first_warm(url));
        assert!(!first_warm(url));
        assert!(first_warm("https://res.cloudinary.com/demo/video/upload/q_auto/other"));
    }

    #[test]
    fn empty_url_is_never_warmed() {
        assert!(!first_warm(""));
    }
}
