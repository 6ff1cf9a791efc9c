use std::rc::Rc;

use yew::Reducible;

use crate::models::work_models::GalleryItem;
use crate::utils::cycle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryView {
    Browsing,
    ItemOpen,
    LightboxOpen,
}

/// Detail modal + lightbox state of the work grid.
///
/// The lightbox index is only ever set through `open_image`, which checks
/// bounds, and moved with modular steps, so it always points into `images`.
/// Closing the item always drops the lightbox with it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryState {
    item: Option<&'static GalleryItem>,
    images: Vec<String>,
    lightbox: Option<usize>,
}

impl GalleryState {
    pub fn view(&self) -> GalleryView {
        match (self.item, self.lightbox) {
            (None, _) => GalleryView::Browsing,
            (Some(_), None) => GalleryView::ItemOpen,
            (Some(_), Some(_)) => GalleryView::LightboxOpen,
        }
    }

    pub fn item(&self) -> Option<&'static GalleryItem> {
        self.item
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn lightbox_index(&self) -> Option<usize> {
        self.lightbox
    }

    pub fn current_image(&self) -> Option<&str> {
        self.lightbox
            .and_then(|i| self.images.get(i))
            .map(String::as_str)
    }

    /// "3 / 9"
    pub fn position_label(&self) -> Option<String> {
        self.lightbox
            .map(|i| format!("{} / {}", i + 1, self.images.len()))
    }

    pub fn is_overlay_open(&self) -> bool {
        self.view() != GalleryView::Browsing
    }

    pub fn open_item(&mut self, item: &'static GalleryItem) {
        self.lightbox = None;
        self.images = item.image_paths();
        self.item = Some(item);
    }

    /// Opens the lightbox at `index`. Ignored without an open item or when
    /// `index` is outside the item's images.
    pub fn open_image(&mut self, index: usize) -> bool {
        if self.item.is_none() || index >= self.images.len() {
            return false;
        }
        self.lightbox = Some(index);
        true
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    pub fn close_item(&mut self) {
        self.close_lightbox();
        self.item = None;
        self.images.clear();
    }

    /// Closes the top-most overlay only. Returns false when nothing was open.
    pub fn escape(&mut self) -> bool {
        match self.view() {
            GalleryView::LightboxOpen => self.close_lightbox(),
            GalleryView::ItemOpen => self.close_item(),
            GalleryView::Browsing => return false,
        }
        true
    }

    pub fn next(&mut self) {
        if let Some(i) = self.lightbox {
            self.lightbox = Some(cycle::next(i, self.images.len()));
        }
    }

    pub fn prev(&mut self) {
        if let Some(i) = self.lightbox {
            self.lightbox = Some(cycle::prev(i, self.images.len()));
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GalleryAction {
    OpenItem(&'static GalleryItem),
    OpenImage(usize),
    CloseLightbox,
    CloseItem,
    Escape,
    Next,
    Prev,
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            GalleryAction::OpenItem(item) => next.open_item(item),
            GalleryAction::OpenImage(index) => {
                if !next.open_image(index) {
                    return self;
                }
            }
            GalleryAction::CloseLightbox => next.close_lightbox(),
            GalleryAction::CloseItem => next.close_item(),
            GalleryAction::Escape => {
                if !next.escape() {
                    return self;
                }
            }
            GalleryAction::Next => next.next(),
            GalleryAction::Prev => next.prev(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::work_models::{WorkCategory, WorkMedia, WORK};

    static EMPTY: GalleryItem = GalleryItem {
        title: "Próximo",
        slug: "proximo",
        category: WorkCategory::Autos,
        media: WorkMedia::Foto,
        image_count: 0,
        link: None,
    };

    static SINGLE: GalleryItem = GalleryItem {
        title: "Única",
        slug: "unica",
        category: WorkCategory::Retrato,
        media: WorkMedia::Foto,
        image_count: 1,
        link: None,
    };

    #[test]
    fn starts_browsing() {
        let state = GalleryState::default();
        assert_eq!(state.view(), GalleryView::Browsing);
        assert!(!state.is_overlay_open());
    }

    #[test]
    fn walks_through_the_states() {
        let mut state = GalleryState::default();
        state.open_item(&WORK[0]);
        assert_eq!(state.view(), GalleryView::ItemOpen);
        assert!(state.open_image(2));
        assert_eq!(state.view(), GalleryView::LightboxOpen);
        assert_eq!(state.current_image(), Some("/work/gac-emzoom-r/3.jpg"));
        state.close_lightbox();
        assert_eq!(state.view(), GalleryView::ItemOpen);
        state.close_item();
        assert_eq!(state.view(), GalleryView::Browsing);
    }

    #[test]
    fn closing_item_cascades_and_does_not_leak() {
        let mut state = GalleryState::default();
        state.open_item(&WORK[1]);
        state.open_image(4);
        state.close_item();
        assert_eq!(state.view(), GalleryView::Browsing);
        assert_eq!(state.lightbox_index(), None);

        state.open_item(&WORK[1]);
        assert_eq!(state.view(), GalleryView::ItemOpen);
        assert_eq!(state.lightbox_index(), None);
    }

    #[test]
    fn opening_another_item_resets_lightbox() {
        let mut state = GalleryState::default();
        state.open_item(&WORK[0]);
        state.open_image(8);
        state.open_item(&WORK[7]);
        assert_eq!(state.view(), GalleryView::ItemOpen);
        assert_eq!(state.images().len(), 4);
    }

    #[test]
    fn escape_closes_top_most_only() {
        let mut state = GalleryState::default();
        state.open_item(&WORK[2]);
        state.open_image(0);
        assert!(state.escape());
        assert_eq!(state.view(), GalleryView::ItemOpen);
        assert!(state.escape());
        assert_eq!(state.view(), GalleryView::Browsing);
        assert!(!state.escape());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut state = GalleryState::default();
        assert!(!state.open_image(0));
        state.open_item(&WORK[7]);
        assert!(!state.open_image(4));
        assert_eq!(state.view(), GalleryView::ItemOpen);
    }

    #[test]
    fn empty_gallery_never_opens_lightbox() {
        let mut state = GalleryState::default();
        state.open_item(&EMPTY);
        assert!(state.images().is_empty());
        assert!(!state.open_image(0));
        state.next();
        assert_eq!(state.lightbox_index(), None);
    }

    #[test]
    fn navigation_is_circular() {
        let mut state = GalleryState::default();
        state.open_item(&WORK[7]);
        state.open_image(3);
        state.next();
        assert_eq!(state.lightbox_index(), Some(0));
        state.prev();
        assert_eq!(state.lightbox_index(), Some(3));
        assert_eq!(state.position_label().as_deref(), Some("4 / 4"));
    }

    #[test]
    fn single_image_stays_put() {
        let mut state = GalleryState::default();
        state.open_item(&SINGLE);
        state.open_image(0);
        state.next();
        assert_eq!(state.lightbox_index(), Some(0));
        state.prev();
        assert_eq!(state.lightbox_index(), Some(0));
    }

    #[test]
    fn reducer_applies_actions_in_order() {
        let state = Rc::new(GalleryState::default());
        let state = state.reduce(GalleryAction::OpenItem(&WORK[3]));
        let state = state.reduce(GalleryAction::OpenImage(5));
        let state = state.reduce(GalleryAction::Next);
        assert_eq!(state.lightbox_index(), Some(0));
        let state = state.reduce(GalleryAction::CloseItem);
        assert_eq!(state.view(), GalleryView::Browsing);
        assert_eq!(state.lightbox_index(), None);
    }

    #[test]
    fn rejected_actions_keep_the_same_state() {
        let state = Rc::new(GalleryState::default());
        let same = state.clone().reduce(GalleryAction::Escape);
        assert!(Rc::ptr_eq(&state, &same));
        let same = state.clone().reduce(GalleryAction::OpenImage(0));
        assert!(Rc::ptr_eq(&state, &same));
    }

    #[test]
    fn index_stays_in_bounds_for_every_item() {
        for item in WORK {
            let mut state = GalleryState::default();
            state.open_item(item);
            state.open_image(0);
            for _ in 0..(item.image_count * 2 + 1) {
                state.next();
                assert!(state.current_image().is_some());
            }
            for _ in 0..(item.image_count * 3) {
                state.prev();
                assert!(state.current_image().is_some());
            }
        }
    }
}
