#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    /// Tall variant, used below the mobile breakpoint.
    pub mobile: &'static str,
    /// Wide variant.
    pub desktop: &'static str,
    pub alt: &'static str,
}

impl Slide {
    pub fn source(&self, is_mobile: bool) -> &'static str {
        if is_mobile {
            self.mobile
        } else {
            self.desktop
        }
    }
}

pub const SLIDES: &[Slide] = &[
    Slide { mobile: "/slider/1-v.jpg", desktop: "/slider/1-h.jpg", alt: "Slide 1" },
    Slide { mobile: "/slider/2-v.jpg", desktop: "/slider/2-h.jpg", alt: "Slide 2" },
    Slide { mobile: "/slider/3-v.jpg", desktop: "/slider/3-h.jpg", alt: "Slide 3" },
    Slide { mobile: "/slider/4-v.jpg", desktop: "/slider/4-h.jpg", alt: "Slide 4" },
    Slide { mobile: "/slider/5-v.jpg", desktop: "/slider/5-h.jpg", alt: "Slide 5" },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Brand {
    pub name: &'static str,
    pub logo: &'static str,
}

pub const BRANDS: &[Brand] = &[
    Brand { name: "Ducati", logo: "/brands/ducativ1.png" },
    Brand { name: "CFMOTO", logo: "/brands/cfmotov1.png" },
    Brand { name: "GAC", logo: "/brands/gacv1.png" },
    Brand { name: "Changan", logo: "/brands/changanv1.png" },
];

/// Page sections the top bar knows about, in document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Home,
    Work,
    Brands,
    About,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Work,
        SectionId::Brands,
        SectionId::About,
        SectionId::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Work => "work",
            SectionId::Brands => "brands",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Inicio",
            SectionId::Work => "Trabajo",
            SectionId::Brands => "Colaboraciones",
            SectionId::About => "Sobre mí",
            SectionId::Contact => "Contacto",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Call to action shown next to the menu: from the contact section it
    /// points back to the work, everywhere else to contact.
    pub fn call_to_action(self) -> (SectionId, &'static str) {
        if self == SectionId::Contact {
            (SectionId::Work, "Ver trabajo")
        } else {
            (SectionId::Contact, "Contacto")
        }
    }
}

/// Last section whose top is at or above the reading point. Sections that are
/// not in the document (`None` offset) are skipped; with nothing scrolled past
/// the first section wins.
pub fn active_section(reading_point: f64, offsets: &[(SectionId, Option<f64>)]) -> SectionId {
    offsets
        .iter()
        .filter_map(|(id, top)| top.map(|top| (*id, top)))
        .filter(|(_, top)| reading_point >= *top)
        .map(|(id, _)| id)
        .last()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<(SectionId, Option<f64>)> {
        vec![
            (SectionId::Home, Some(0.0)),
            (SectionId::Work, Some(900.0)),
            (SectionId::Brands, Some(2400.0)),
            (SectionId::About, Some(3000.0)),
            (SectionId::Contact, Some(3600.0)),
        ]
    }

    #[test]
    fn picks_last_section_scrolled_past() {
        assert_eq!(active_section(0.0, &layout()), SectionId::Home);
        assert_eq!(active_section(899.0, &layout()), SectionId::Home);
        assert_eq!(active_section(900.0, &layout()), SectionId::Work);
        assert_eq!(active_section(3100.0, &layout()), SectionId::About);
        assert_eq!(active_section(99_999.0, &layout()), SectionId::Contact);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let mut offsets = layout();
        offsets[2].1 = None;
        assert_eq!(active_section(2500.0, &offsets), SectionId::Work);
        assert_eq!(active_section(500.0, &[]), SectionId::Home);
    }

    #[test]
    fn call_to_action_flips_on_contact() {
        assert_eq!(SectionId::Work.call_to_action().0, SectionId::Contact);
        assert_eq!(SectionId::Contact.call_to_action(), (SectionId::Work, "Ver trabajo"));
    }

    #[test]
    fn slide_variant_follows_viewport() {
        assert_eq!(SLIDES[0].source(true), "/slider/1-v.jpg");
        assert_eq!(SLIDES[0].source(false), "/slider/1-h.jpg");
    }
}
