use std::cmp::Ordering;

use url::Url;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShowcaseCategory {
    Autos,
    Motos,
    Ciudad,
    Nocturno,
    Comercial,
}

impl ShowcaseCategory {
    pub fn label(self) -> &'static str {
        match self {
            ShowcaseCategory::Autos => "Autos",
            ShowcaseCategory::Motos => "Motos",
            ShowcaseCategory::Ciudad => "Ciudad",
            ShowcaseCategory::Nocturno => "Nocturno",
            ShowcaseCategory::Comercial => "Comercial",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aspect {
    Vertical,
    Horizontal,
    Square,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseItem {
    pub id: &'static str,
    pub title: &'static str,
    pub category: ShowcaseCategory,
    pub client: Option<&'static str>,
    pub year: Option<&'static str>,
    pub role: Option<&'static str>,
    pub highlight: Option<&'static str>,
    pub description: Option<&'static str>,
    pub media: MediaType,
    pub cover: &'static str,
    pub src: String,
    pub aspect: Option<Aspect>,
    pub featured: bool,
}

pub const DEFAULT_REEL_DESCRIPTION: &str = "Reel diseñado para redes: ritmo, planos cortos y estética cinematográfica orientada a retención y percepción premium.";
pub const DEFAULT_ROLE: &str = "Dirección · Cámara · Edición";

impl ShowcaseItem {
    pub fn is_video(&self) -> bool {
        self.media == MediaType::Video
    }

    pub fn description_or_default(&self) -> &'static str {
        self.description.unwrap_or(DEFAULT_REEL_DESCRIPTION)
    }

    pub fn role_or_default(&self) -> &'static str {
        self.role.unwrap_or(DEFAULT_ROLE)
    }

    /// "CFMOTO · Cámara · Edición que atrapa"
    pub fn credits_line(&self) -> String {
        match self.client {
            Some(client) => format!("{} · {}", client, self.role_or_default()),
            None => self.role_or_default().to_string(),
        }
    }

    /// "Motos · CFMOTO · 2024"
    pub fn meta_line(&self) -> String {
        let mut line = self.category.label().to_string();
        for part in [self.client, self.year].into_iter().flatten() {
            line.push_str(" · ");
            line.push_str(part);
        }
        line
    }

    /// CSS `aspect-ratio` of the grid cover.
    pub fn cover_ratio(&self) -> &'static str {
        match (self.aspect, self.media) {
            (Some(Aspect::Vertical), _) | (None, MediaType::Video) => "9 / 16",
            (Some(Aspect::Horizontal), _) => "16 / 9",
            (Some(Aspect::Square), _) => "1 / 1",
            (None, MediaType::Image) => "4 / 5",
        }
    }

    fn year_number(&self) -> u32 {
        self.year.and_then(|y| y.parse().ok()).unwrap_or(0)
    }
}

/// Rewrites a Cloudinary delivery URL so the CDN picks quality, format and
/// codec and scales to `width`. The version segment and the file extension are
/// dropped. URLs that do not parse or have no `upload` segment come back as is.
pub fn cloudinary_optimized(raw: &str, width: u32) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return raw.to_string();
    };
    let parts: Vec<&str> = url.path().split('/').filter(|p| !p.is_empty()).collect();
    let Some(upload_idx) = parts.iter().position(|p| *p == "upload") else {
        return raw.to_string();
    };

    let mut after_upload = &parts[upload_idx + 1..];
    if after_upload.first().map_or(false, |p| is_version_segment(p)) {
        after_upload = &after_upload[1..];
    }
    let Some((last, folders)) = after_upload.split_last() else {
        return raw.to_string();
    };
    let public_id = match last.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) => stem,
        _ => last,
    };

    let mut path = format!(
        "/{}/q_auto,f_auto,vc_auto,w_{}/",
        parts[..=upload_idx].join("/"),
        width
    );
    for folder in folders {
        path.push_str(folder);
        path.push('/');
    }
    path.push_str(public_id);
    url.set_path(&path);
    url.to_string()
}

fn is_version_segment(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .map_or(false, |rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}

fn reel(url: &str) -> String {
    cloudinary_optimized(url, config::SHOWCASE_VIDEO_WIDTH)
}

pub fn showcase_items() -> Vec<ShowcaseItem> {
    vec![
        ShowcaseItem {
            id: "cfmoto-01",
            title: "CFMOTO 450SR-S Reel",
            category: ShowcaseCategory::Motos,
            client: Some("CFMOTO"),
            year: Some("2024"),
            role: Some("Cámara · Edición que atrapa"),
            highlight: Some("Look premium con motion y detalles."),
            description: Some("Reel enfocado en la retención de audicencia y en mostrar el modelo."),
            media: MediaType::Video,
            cover: "/portfolio/cfmoto-01-cover.jpg",
            src: reel("https://res.cloudinary.com/dmoezxwgx/video/upload/v1767474138/cfmoto-450srs_jkekyw.mp4"),
            aspect: Some(Aspect::Vertical),
            featured: true,
        },
        ShowcaseItem {
            id: "ducati-01",
            title: "Ducati Panigale V4S Reel",
            category: ShowcaseCategory::Motos,
            client: Some("Ducati"),
            year: Some("2024"),
            role: Some("Dirección · Cámara · Edición"),
            highlight: Some("Ritmo + detalle para máxima retención."),
            description: Some("Reel enfocado en la retención de audicencia y en mostrar el modelo de forma dinámica."),
            media: MediaType::Video,
            cover: "/portfolio/ducati-01-cover.jpg",
            src: reel("https://res.cloudinary.com/dmoezxwgx/video/upload/v1767474142/panigale-v4s_fcpabh.mp4"),
            aspect: Some(Aspect::Vertical),
            featured: true,
        },
        ShowcaseItem {
            id: "changan-01",
            title: "Changan — Video promocional",
            category: ShowcaseCategory::Comercial,
            client: Some("Changan"),
            year: Some("2024"),
            role: Some("Dirección · Cámara · Edición"),
            highlight: Some("Video hecho para publicidad general de la agencia."),
            description: Some("Comercial hecho para redes y publicidad."),
            media: MediaType::Video,
            cover: "/portfolio/changan-01-cover.jpg",
            src: reel("https://res.cloudinary.com/dmoezxwgx/video/upload/v1767474142/changan-demo_zxsh5q.mp4"),
            aspect: Some(Aspect::Vertical),
            featured: false,
        },
        ShowcaseItem {
            id: "gac-01",
            title: "GAC — Reel producto (Huawei)",
            category: ShowcaseCategory::Comercial,
            client: Some("GAC"),
            year: Some("2025"),
            role: Some("Dirección · Cámara · Edición"),
            highlight: Some("Reel de promoción a campaña de GAC con Huawei"),
            description: Some("Reel dinámico enfocado a la campaña de GAC sorteando productos Huawei."),
            media: MediaType::Video,
            cover: "/portfolio/gac-01-cover.jpg",
            src: reel("https://res.cloudinary.com/dmoezxwgx/video/upload/v1767474143/gac-huawei_k2z7fs.mp4"),
            aspect: Some(Aspect::Vertical),
            featured: false,
        },
        ShowcaseItem {
            id: "gac-02",
            title: "GAC GN8 — Reel de presentación",
            category: ShowcaseCategory::Autos,
            client: Some("GAC"),
            year: Some("2025"),
            role: Some("Cámara · Edición"),
            highlight: Some("Video de presentación al modelo GN8"),
            description: Some("Video de presentación para la GAC GN8, se usaron tomas áereas con dron y en movimiento"),
            media: MediaType::Video,
            cover: "/portfolio/gac-gn8-cover.jpg",
            src: reel("https://res.cloudinary.com/dmoezxwgx/video/upload/v1767474142/gac-gn8_h5osfu.mov"),
            aspect: Some(Aspect::Vertical),
            featured: false,
        },
    ]
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShowcaseFilter {
    #[default]
    All,
    Category(ShowcaseCategory),
}

impl ShowcaseFilter {
    pub fn label(self) -> &'static str {
        match self {
            ShowcaseFilter::All => "Todo",
            ShowcaseFilter::Category(c) => c.label(),
        }
    }

    pub fn matches(self, item: &ShowcaseItem) -> bool {
        match self {
            ShowcaseFilter::All => true,
            ShowcaseFilter::Category(c) => item.category == c,
        }
    }
}

/// "Todo" followed by every category present, in order of first appearance.
pub fn showcase_filters(items: &[ShowcaseItem]) -> Vec<ShowcaseFilter> {
    let mut filters = vec![ShowcaseFilter::All];
    for item in items {
        let filter = ShowcaseFilter::Category(item.category);
        if !filters.contains(&filter) {
            filters.push(filter);
        }
    }
    filters
}

fn showcase_order(a: &ShowcaseItem, b: &ShowcaseItem) -> Ordering {
    b.featured
        .cmp(&a.featured)
        .then_with(|| b.year_number().cmp(&a.year_number()))
        .then_with(|| a.title.cmp(b.title))
}

/// Matching items, featured first, then newest year, then by title.
pub fn filter_showcase(items: &[ShowcaseItem], filter: ShowcaseFilter) -> Vec<ShowcaseItem> {
    let mut picked: Vec<ShowcaseItem> = items.iter().filter(|i| filter.matches(i)).cloned().collect();
    picked.sort_by(showcase_order);
    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloudinary_drops_version_and_extension() {
        assert_eq!(
            cloudinary_optimized(
                "https://res.cloudinary.com/dmoezxwgx/video/upload/v1767474138/cfmoto-450srs_jkekyw.mp4",
                1080
            ),
            "https://res.cloudinary.com/dmoezxwgx/video/upload/q_auto,f_auto,vc_auto,w_1080/cfmoto-450srs_jkekyw"
        );
    }

    #[test]
    fn cloudinary_keeps_folders() {
        assert_eq!(
            cloudinary_optimized("https://res.cloudinary.com/c/video/upload/v12/reels/2024/clip.mov", 720),
            "https://res.cloudinary.com/c/video/upload/q_auto,f_auto,vc_auto,w_720/reels/2024/clip"
        );
    }

    #[test]
    fn cloudinary_leaves_foreign_urls_alone() {
        assert_eq!(cloudinary_optimized("/portfolio/local.mp4", 1080), "/portfolio/local.mp4");
        assert_eq!(
            cloudinary_optimized("https://example.com/videos/clip.mp4", 1080),
            "https://example.com/videos/clip.mp4"
        );
    }

    #[test]
    fn filters_follow_first_appearance() {
        let labels: Vec<_> = showcase_filters(&showcase_items()).iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["Todo", "Motos", "Comercial", "Autos"]);
    }

    #[test]
    fn featured_first_then_year_desc_then_title() {
        let ids: Vec<_> = filter_showcase(&showcase_items(), ShowcaseFilter::All)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["cfmoto-01", "ducati-01", "gac-02", "gac-01", "changan-01"]);
    }

    #[test]
    fn category_filter_is_exact() {
        let comercial = filter_showcase(
            &showcase_items(),
            ShowcaseFilter::Category(ShowcaseCategory::Comercial),
        );
        assert_eq!(comercial.len(), 2);
        assert!(comercial.iter().all(|i| i.category == ShowcaseCategory::Comercial));
        assert!(filter_showcase(&showcase_items(), ShowcaseFilter::Category(ShowcaseCategory::Ciudad)).is_empty());
    }

    #[test]
    fn missing_fields_fall_back() {
        let mut item = showcase_items().remove(0);
        item.description = None;
        item.role = None;
        item.client = None;
        item.year = None;
        assert_eq!(item.description_or_default(), DEFAULT_REEL_DESCRIPTION);
        assert_eq!(item.credits_line(), DEFAULT_ROLE);
        assert_eq!(item.meta_line(), "Motos");
    }
}
