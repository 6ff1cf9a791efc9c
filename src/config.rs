// Compile-time site configuration. Everything the widgets tune lives here so
// the components only carry layout.

/// Height of the fixed top bar in px.
pub const HEADER_OFFSET: f64 = 64.0;
/// Height of the sticky filter bar of the work section (mobile) in px.
pub const STICKY_FILTERS_OFFSET: f64 = 56.0;
/// Breathing room left above a section after a programmatic scroll.
pub const SCROLL_MARGIN: f64 = 12.0;
/// Reading point below the header used to decide the active section.
pub const ACTIVE_SECTION_PROBE: f64 = 24.0;

/// Horizontal travel needed before a touch is treated as a swipe.
pub const SWIPE_LOCK_DISTANCE: f64 = 10.0;
/// Horizontal travel needed for a swipe to change page.
pub const SWIPE_THRESHOLD: f64 = 45.0;

pub const HERO_AUTOPLAY_MS: u32 = 6_000;
pub const SWIPE_HINT_MS: u32 = 2_200;
pub const NAV_SETTLE_MS: u32 = 450;
pub const FILTER_FADE_MS: u32 = 180;
pub const MODAL_UNMOUNT_MS: u32 = 180;
pub const MODAL_SCROLL_DELAY_MS: u32 = 220;

pub const MOBILE_QUERY: &str = "(max-width: 767px)";
pub const DESKTOP_QUERY: &str = "(min-width: 768px)";
pub const DESKTOP_MIN_WIDTH: f64 = 768.0;

pub const SWIPE_HINT_KEY: &str = "seenSwipeHint";
pub const WORK_QUERY_KEY: &str = "work";

pub const SHOWCASE_VIDEO_WIDTH: u32 = 1080;

pub const OWNER_NAME: &str = "Daniel Núñez";
pub const BRAND_NAME: &str = "Danielnung";
pub const LOCATION_LINE: &str = "Torreón, Coahuila · Disponible para proyectos";

pub const WHATSAPP_NUMBER: &str = "5218721150538";
pub const WHATSAPP_TEXT: &str =
    "Hola Daniel, vi tu portafolio y me interesa cotizar un proyecto de foto/video.";
pub const CONTACT_EMAIL: &str = "josedanielnunezgomez@gmail.com";
pub const INSTAGRAM_URL: &str = "https://instagram.com/danielnung";
pub const INSTAGRAM_HANDLE: &str = "@danielnung";

/// Deep link that opens a WhatsApp chat with the prefilled quote request.
pub fn whatsapp_link() -> String {
    whatsapp_link_with(WHATSAPP_NUMBER, Some(WHATSAPP_TEXT))
}

pub fn whatsapp_link_with(number: &str, text: Option<&str>) -> String {
    match text {
        Some(text) => format!("https://wa.me/{}?text={}", number, urlencoding::encode(text)),
        None => format!("https://wa.me/{}", number),
    }
}

pub fn mailto_link() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_the_prefilled_text() {
        assert_eq!(
            whatsapp_link(),
            "https://wa.me/5218721150538?text=Hola%20Daniel%2C%20vi%20tu%20portafolio%20y%20me%20interesa%20cotizar%20un%20proyecto%20de%20foto%2Fvideo."
        );
    }

    #[test]
    fn whatsapp_link_without_text_is_bare() {
        assert_eq!(whatsapp_link_with("123", None), "https://wa.me/123");
    }

    #[test]
    fn mailto_uses_contact_email() {
        assert_eq!(mailto_link(), "mailto:josedanielnunezgomez@gmail.com");
    }
}
