use yew::prelude::*;

use crate::components::about_section::AboutSection;
use crate::components::brands::Brands;
use crate::components::contact_section::ContactSection;
use crate::components::footer::Footer;
use crate::components::hero_slider::HeroSlider;
use crate::components::portfolio_modal::PortfolioModal;
use crate::components::work_section::WorkSection;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <HeroSlider />
            <WorkSection />
            <PortfolioModal />
            <Brands />
            <AboutSection />
            <ContactSection />
            <Footer />
        </>
    }
}
