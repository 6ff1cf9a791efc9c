use std::cell::RefCell;

use crate::error::SiteResult;
use crate::utils::dom;

/// Page state captured when the first overlay locks scrolling.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_x: f64,
    pub scroll_y: f64,
    /// Width of the vertical scrollbar that disappears while locked.
    pub scrollbar_width: f64,
    pub overflow: String,
    pub position: String,
    pub top: String,
    pub width: String,
    pub padding_right: String,
}

impl ScrollSnapshot {
    /// Inline body styles to apply while locked, as `(property, value)`.
    pub fn frozen_styles(&self) -> Vec<(&'static str, String)> {
        let mut styles = vec![
            ("overflow", "hidden".to_string()),
            ("position", "fixed".to_string()),
            ("top", format!("-{}px", self.scroll_y)),
            ("width", "100%".to_string()),
        ];
        if self.scrollbar_width > 0.0 {
            styles.push(("padding-right", format!("{}px", self.scrollbar_width)));
        }
        styles
    }

    /// Inline body styles that were in place before locking.
    pub fn saved_styles(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("overflow", self.overflow.as_str()),
            ("position", self.position.as_str()),
            ("top", self.top.as_str()),
            ("width", self.width.as_str()),
            ("padding-right", self.padding_right.as_str()),
        ]
    }
}

/// Whatever scrolls underneath the overlays.
pub trait ScrollSurface {
    fn capture(&self) -> SiteResult<ScrollSnapshot>;
    fn freeze(&self, snapshot: &ScrollSnapshot) -> SiteResult<()>;
    fn restore(&self, snapshot: &ScrollSnapshot) -> SiteResult<()>;
}

/// Reference counted lock: the first acquisition freezes the surface, the
/// last release restores exactly what the first one captured.
#[derive(Debug)]
pub struct LockStack<S> {
    surface: S,
    depth: usize,
    saved: Option<ScrollSnapshot>,
}

impl<S: ScrollSurface> LockStack<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            depth: 0,
            saved: None,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// True while any layer holds the lock. Scroll events seen in this state
    /// come from freezing or restoring the surface, not from the reader.
    pub fn is_engaged(&self) -> bool {
        self.depth > 0
    }

    pub fn acquire(&mut self) {
        if self.depth == 0 {
            match self.surface.capture() {
                Ok(snapshot) => {
                    if let Err(e) = self.surface.freeze(&snapshot) {
                        log::warn!("Failed to freeze page scroll: {}", e);
                    }
                    self.saved = Some(snapshot);
                }
                Err(e) => log::warn!("Failed to capture page scroll: {}", e),
            }
        }
        self.depth += 1;
    }

    pub fn release(&mut self) {
        if self.depth == 0 {
            return;
        }
        self.depth -= 1;
        if self.depth == 0 {
            if let Some(snapshot) = self.saved.take() {
                if let Err(e) = self.surface.restore(&snapshot) {
                    log::warn!("Failed to restore page scroll: {}", e);
                }
            }
        }
    }
}

/// The document body of the running page.
#[derive(Debug, Default)]
pub struct DocumentBody;

impl ScrollSurface for DocumentBody {
    fn capture(&self) -> SiteResult<ScrollSnapshot> {
        let window = dom::window()?;
        let document = dom::document()?;
        let style = dom::body()?.style();
        let inner_width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let client_width = document
            .document_element()
            .map(|root| f64::from(root.client_width()))
            .unwrap_or(inner_width);

        Ok(ScrollSnapshot {
            scroll_x: window.scroll_x()?,
            scroll_y: window.scroll_y()?,
            scrollbar_width: (inner_width - client_width).max(0.0),
            overflow: style.get_property_value("overflow")?,
            position: style.get_property_value("position")?,
            top: style.get_property_value("top")?,
            width: style.get_property_value("width")?,
            padding_right: style.get_property_value("padding-right")?,
        })
    }

    fn freeze(&self, snapshot: &ScrollSnapshot) -> SiteResult<()> {
        let style = dom::body()?.style();
        for (property, value) in snapshot.frozen_styles() {
            style.set_property(property, &value)?;
        }
        Ok(())
    }

    fn restore(&self, snapshot: &ScrollSnapshot) -> SiteResult<()> {
        let style = dom::body()?.style();
        for (property, value) in snapshot.saved_styles() {
            if value.is_empty() {
                style.remove_property(property)?;
            } else {
                style.set_property(property, value)?;
            }
        }
        dom::window()?.scroll_to_with_x_and_y(snapshot.scroll_x, snapshot.scroll_y);
        Ok(())
    }
}

thread_local! {
    static BODY_LOCK: RefCell<LockStack<DocumentBody>> = RefCell::new(LockStack::new(DocumentBody));
}

/// Holds the page scroll frozen for as long as it lives. Overlays keep one
/// per open layer; dropping the last one restores the page.
#[must_use = "the page unlocks as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ScrollLock {
    _private: (),
}

impl ScrollLock {
    pub fn acquire() -> Self {
        let depth = BODY_LOCK.with(|lock| {
            let mut lock = lock.borrow_mut();
            lock.acquire();
            lock.depth()
        });
        log::debug!("Page scroll locked, {} layer(s) open", depth);
        Self { _private: () }
    }

    pub fn is_engaged() -> bool {
        BODY_LOCK.with(|lock| lock.borrow().is_engaged())
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        BODY_LOCK.with(|lock| lock.borrow_mut().release());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct FakePage {
        scroll_y: f64,
        styles: Vec<(String, String)>,
        freezes: usize,
        restores: usize,
    }

    #[derive(Clone, Debug, Default)]
    struct FakeSurface(Rc<RefCell<FakePage>>);

    impl ScrollSurface for FakeSurface {
        fn capture(&self) -> SiteResult<ScrollSnapshot> {
            let page = self.0.borrow();
            Ok(ScrollSnapshot {
                scroll_y: page.scroll_y,
                scrollbar_width: 15.0,
                ..ScrollSnapshot::default()
            })
        }

        fn freeze(&self, snapshot: &ScrollSnapshot) -> SiteResult<()> {
            let mut page = self.0.borrow_mut();
            page.freezes += 1;
            page.scroll_y = 0.0;
            page.styles = snapshot
                .frozen_styles()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect();
            Ok(())
        }

        fn restore(&self, snapshot: &ScrollSnapshot) -> SiteResult<()> {
            let mut page = self.0.borrow_mut();
            page.restores += 1;
            page.scroll_y = snapshot.scroll_y;
            page.styles.clear();
            Ok(())
        }
    }

    #[test]
    fn nested_locks_restore_once_at_original_position() {
        let surface = FakeSurface::default();
        surface.0.borrow_mut().scroll_y = 1234.0;
        let mut stack = LockStack::new(surface.clone());

        stack.acquire();
        stack.acquire();
        assert_eq!(stack.depth(), 2);
        assert_eq!(surface.0.borrow().scroll_y, 0.0);

        stack.release();
        assert_eq!(surface.0.borrow().restores, 0);
        stack.release();

        let page = surface.0.borrow();
        assert_eq!(page.scroll_y, 1234.0);
        assert_eq!(page.freezes, 1);
        assert_eq!(page.restores, 1);
        assert!(page.styles.is_empty());
    }

    #[test]
    fn any_balanced_sequence_restores_position() {
        let surface = FakeSurface::default();
        let mut stack = LockStack::new(surface.clone());
        let sequences: [&[bool]; 3] = [
            &[true, false],
            &[true, true, false, true, false, false],
            &[true, true, true, false, false, false],
        ];
        for (n, sequence) in sequences.iter().enumerate() {
            let start = 100.0 * (n as f64 + 1.0);
            surface.0.borrow_mut().scroll_y = start;
            for &open in sequence.iter() {
                if open {
                    stack.acquire();
                } else {
                    stack.release();
                }
            }
            assert_eq!(stack.depth(), 0);
            assert_eq!(surface.0.borrow().scroll_y, start);
        }
    }

    #[test]
    fn engaged_while_any_layer_is_open() {
        let surface = FakeSurface::default();
        surface.0.borrow_mut().scroll_y = 800.0;
        let mut stack = LockStack::new(surface.clone());
        assert!(!stack.is_engaged());

        stack.acquire();
        // The freeze clamps the page to the top while engaged.
        assert!(stack.is_engaged());
        assert_eq!(surface.0.borrow().scroll_y, 0.0);

        stack.acquire();
        stack.release();
        assert!(stack.is_engaged());

        stack.release();
        assert!(!stack.is_engaged());
        assert_eq!(surface.0.borrow().scroll_y, 800.0);

        stack.release();
        assert!(!stack.is_engaged());
    }

    #[test]
    fn extra_release_is_harmless() {
        let surface = FakeSurface::default();
        let mut stack = LockStack::new(surface.clone());
        stack.release();
        assert_eq!(stack.depth(), 0);
        assert_eq!(surface.0.borrow().restores, 0);
    }

    #[test]
    fn frozen_styles_compensate_scrollbar() {
        let snapshot = ScrollSnapshot {
            scroll_y: 480.0,
            scrollbar_width: 15.0,
            ..ScrollSnapshot::default()
        };
        let styles = snapshot.frozen_styles();
        assert!(styles.contains(&("top", "-480px".to_string())));
        assert!(styles.contains(&("padding-right", "15px".to_string())));

        let no_bar = ScrollSnapshot::default().frozen_styles();
        assert!(no_bar.iter().all(|(k, _)| *k != "padding-right"));
    }
}
