use std::collections::HashSet;
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::error::SiteResult;
use crate::utils::dom;

// Markers for browsers that refuse local storage (private mode, blocked
// cookies). They only last for the page session.
static SESSION_SEEN: Lazy<Mutex<HashSet<String>>> = Lazy::new(|| Mutex::new(HashSet::new()));

fn session_has(key: &str) -> bool {
    SESSION_SEEN
        .lock()
        .map(|seen| seen.contains(key))
        .unwrap_or(false)
}

fn session_mark(key: &str) {
    if let Ok(mut seen) = SESSION_SEEN.lock() {
        seen.insert(key.to_string());
    }
}

fn stored_flag(key: &str) -> SiteResult<bool> {
    Ok(dom::local_storage()?.get_item(key)?.is_some())
}

fn store_flag(key: &str) -> SiteResult<()> {
    dom::local_storage()?.set_item(key, "1")?;
    Ok(())
}

/// True when the one-time flag `key` was already set, either persistently or
/// during this session.
pub fn has_seen(key: &str) -> bool {
    if session_has(key) {
        return true;
    }
    match stored_flag(key) {
        Ok(seen) => seen,
        Err(e) => {
            log::debug!("Falling back to session flag for {}: {}", key, e);
            false
        }
    }
}

/// Sets the one-time flag `key`. Always recorded for the session; persisted
/// when local storage is usable.
pub fn mark_seen(key: &str) {
    session_mark(key);
    if let Err(e) = store_flag(key) {
        log::debug!("Could not persist {}: {}", key, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_marker_is_idempotent() {
        let key = "test-session-marker";
        assert!(!session_has(key));
        session_mark(key);
        session_mark(key);
        assert!(session_has(key));
    }
}
