use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkCategory {
    Autos,
    Motos,
    Retrato,
}

impl WorkCategory {
    pub fn label(self) -> &'static str {
        match self {
            WorkCategory::Autos => "Autos",
            WorkCategory::Motos => "Motos",
            WorkCategory::Retrato => "Retrato",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkMedia {
    Foto,
    Video,
}

impl WorkMedia {
    pub fn label(self) -> &'static str {
        match self {
            WorkMedia::Foto => "Foto",
            WorkMedia::Video => "Video",
        }
    }
}

/// One photo session of the work grid.
///
/// Assets follow a fixed layout under `/work`: the grid cover lives at
/// `/work/covers/{slug}.jpg` and the session images at `/work/{slug}/{n}.jpg`,
/// numbered from 1.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub title: &'static str,
    pub slug: &'static str,
    pub category: WorkCategory,
    pub media: WorkMedia,
    pub image_count: usize,
    pub link: Option<&'static str>,
}

impl GalleryItem {
    pub fn cover_path(&self) -> String {
        format!("/work/covers/{}.jpg", self.slug)
    }

    pub fn image_paths(&self) -> Vec<String> {
        (1..=self.image_count)
            .map(|n| format!("/work/{}/{}.jpg", self.slug, n))
            .collect()
    }
}

const fn photo_session(
    title: &'static str,
    slug: &'static str,
    category: WorkCategory,
    image_count: usize,
) -> GalleryItem {
    GalleryItem {
        title,
        slug,
        category,
        media: WorkMedia::Foto,
        image_count,
        link: None,
    }
}

pub const WORK: &[GalleryItem] = &[
    photo_session("GAC Emzoom R", "gac-emzoom-r", WorkCategory::Autos, 9),
    photo_session("Ducati Lamborghini", "ducati-lamborghini", WorkCategory::Motos, 7),
    photo_session("CHANGAN HUNTER", "changan-hunter", WorkCategory::Autos, 5),
    photo_session("Ducati Panigale V2", "ducati-panigale-v2", WorkCategory::Retrato, 6),
    photo_session("Ducati Monster", "ducati-monster-nocturna", WorkCategory::Retrato, 5),
    photo_session("Ducati Multistrada V4S", "ducati-multistrada-v4s", WorkCategory::Motos, 7),
    photo_session("Ducati SuperSport", "ducati-supersport", WorkCategory::Motos, 9),
    photo_session("CFMOTO 450 SRS", "cfmoto-450-srs", WorkCategory::Motos, 4),
    photo_session("GAC GS8 MAX HEV", "gac-gs8-max-hev", WorkCategory::Autos, 6),
    photo_session("CHANGAN CS55", "changan-cs55", WorkCategory::Autos, 5),
];

/// Filter chips of the work grid. `Todos` is the default and is never
/// written to the URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WorkFilter {
    #[default]
    Todos,
    Autos,
    Motos,
    Retrato,
}

impl WorkFilter {
    pub const ALL: [WorkFilter; 4] = [
        WorkFilter::Todos,
        WorkFilter::Autos,
        WorkFilter::Motos,
        WorkFilter::Retrato,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WorkFilter::Todos => "Todos",
            WorkFilter::Autos => "Autos",
            WorkFilter::Motos => "Motos",
            WorkFilter::Retrato => "Retrato",
        }
    }

    /// Parses a raw query value. Only the exact chip labels are accepted.
    pub fn from_query_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == value)
    }

    pub fn is_default(self) -> bool {
        self == WorkFilter::Todos
    }

    pub fn matches(self, item: &GalleryItem) -> bool {
        match self {
            WorkFilter::Todos => true,
            WorkFilter::Autos => item.category == WorkCategory::Autos,
            WorkFilter::Motos => item.category == WorkCategory::Motos,
            WorkFilter::Retrato => item.category == WorkCategory::Retrato,
        }
    }
}

impl fmt::Display for WorkFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Items matching `filter`, in their original order.
pub fn filter_items<'a>(items: &'a [GalleryItem], filter: WorkFilter) -> Vec<&'a GalleryItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

pub fn filter_work(filter: WorkFilter) -> Vec<&'static GalleryItem> {
    filter_items(WORK, filter)
}

/// "Mostrando 3 proyectos en Motos"
pub fn count_label(count: usize, filter: WorkFilter) -> String {
    let noun = if count == 1 { "proyecto" } else { "proyectos" };
    if filter.is_default() {
        format!("Mostrando {} {}", count, noun)
    } else {
        format!("Mostrando {} {} en {}", count, noun, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_follow_the_folder_convention() {
        let item = &WORK[0];
        assert_eq!(item.cover_path(), "/work/covers/gac-emzoom-r.jpg");
        let images = item.image_paths();
        assert_eq!(images.len(), 9);
        assert_eq!(images[0], "/work/gac-emzoom-r/1.jpg");
        assert_eq!(images[8], "/work/gac-emzoom-r/9.jpg");
    }

    #[test]
    fn item_without_images_has_empty_gallery() {
        let item = photo_session("Próximo", "proximo", WorkCategory::Autos, 0);
        assert!(item.image_paths().is_empty());
    }

    #[test]
    fn motos_filter_keeps_original_order() {
        let motos: Vec<_> = filter_work(WorkFilter::Motos).iter().map(|i| i.title).collect();
        assert_eq!(
            motos,
            vec![
                "Ducati Lamborghini",
                "Ducati Multistrada V4S",
                "Ducati SuperSport",
                "CFMOTO 450 SRS"
            ]
        );
    }

    #[test]
    fn filter_picks_exact_subset_of_mixed_items() {
        let items: Vec<GalleryItem> = (0..10)
            .map(|i| {
                let category = match i {
                    1 | 4 | 8 => WorkCategory::Motos,
                    2 | 6 => WorkCategory::Retrato,
                    _ => WorkCategory::Autos,
                };
                photo_session("Item", "item", category, i)
            })
            .collect();
        let motos: Vec<usize> = filter_items(&items, WorkFilter::Motos)
            .iter()
            .map(|i| i.image_count)
            .collect();
        assert_eq!(motos, vec![1, 4, 8]);
        assert_eq!(filter_items(&items, WorkFilter::Todos).len(), 10);
    }

    #[test]
    fn todos_restores_everything() {
        assert_eq!(filter_work(WorkFilter::Motos).len(), 4);
        assert_eq!(filter_work(WorkFilter::Todos).len(), WORK.len());
    }

    #[test]
    fn every_filter_selects_exactly_its_category() {
        for filter in WorkFilter::ALL {
            let selected = filter_work(filter);
            let expected = WORK.iter().filter(|i| filter.matches(i)).count();
            assert_eq!(selected.len(), expected);
            assert!(selected.iter().all(|i| filter.matches(i)));
        }
        let total: usize = [WorkFilter::Autos, WorkFilter::Motos, WorkFilter::Retrato]
            .into_iter()
            .map(|f| filter_work(f).len())
            .sum();
        assert_eq!(total, WORK.len());
    }

    #[test]
    fn three_of_ten_scenario() {
        let items: Vec<GalleryItem> = (0..10)
            .map(|n| {
                let category = if n % 3 == 1 { WorkCategory::Motos } else { WorkCategory::Autos };
                photo_session("item", "item", category, 1)
            })
            .collect();
        let picked = filter_items(&items, WorkFilter::Motos);
        assert_eq!(picked.len(), 3);
        assert!(std::ptr::eq(picked[0], &items[1]));
        assert!(std::ptr::eq(picked[1], &items[4]));
        assert!(std::ptr::eq(picked[2], &items[7]));
        assert_eq!(filter_items(&items, WorkFilter::Todos).len(), 10);
    }

    #[test]
    fn query_values_are_exact_labels() {
        assert_eq!(WorkFilter::from_query_value("Motos"), Some(WorkFilter::Motos));
        assert_eq!(WorkFilter::from_query_value("Todos"), Some(WorkFilter::Todos));
        assert_eq!(WorkFilter::from_query_value("motos"), None);
        assert_eq!(WorkFilter::from_query_value(""), None);
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(count_label(1, WorkFilter::Retrato), "Mostrando 1 proyecto en Retrato");
        assert_eq!(count_label(10, WorkFilter::Todos), "Mostrando 10 proyectos");
    }
}
