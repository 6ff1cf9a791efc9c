use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::site_models::{Brand, BRANDS};

const BRANDS_CSS: &str = r#"
    .brands { padding: 6rem 0; }
    .brands-inner { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
    .brands-head { max-width: 48rem; }
    .brands-head .eyebrow { margin: 0; font-size: 0.75rem; letter-spacing: 0.22em; text-transform: uppercase; color: #a3a3a3; }
    .brands-head h2 { margin: 0.75rem 0 0; font-size: 1.9rem; font-weight: 600; }
    .brands-head .lead { margin: 1rem 0 0; color: #a3a3a3; }
    .brands-card { margin-top: 2.5rem; border-radius: 1.5rem; border: 1px solid rgba(255,255,255,0.1);
        background: rgba(255,255,255,0.02); padding: 1.5rem; }
    .brands-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2.5rem; align-items: center; }
    .brand-logo { display: flex; align-items: center; justify-content: center; }
    .brand-logo img { height: 56px; width: 160px; object-fit: contain; opacity: 0.9; transition: opacity 300ms;
        user-select: none; }
    .brand-logo:hover img { opacity: 1; }
    .brands-note { margin-top: 2.5rem; padding-top: 1.5rem; border-top: 1px solid rgba(255,255,255,0.1); }
    .brands-note p { margin: 0; font-size: 0.875rem; color: #737373; }
    @media (min-width: 640px) {
        .brands-grid { grid-template-columns: repeat(4, 1fr); }
        .brand-logo img { height: 64px; width: 180px; }
    }
    @media (min-width: 768px) {
        .brands-head h2 { font-size: 2.25rem; }
        .brands-card { padding: 2.5rem; }
    }
"#;

fn logo(brand: &'static Brand) -> Html {
    let onerror = Callback::from(move |e: Event| {
        gloo_console::error!(format!("Logo no encontrado: {}", brand.logo));
        if let Some(img) = e.target_dyn_into::<HtmlElement>() {
            let _ = img.style().set_property("opacity", "0.15");
        }
    });
    html! {
        <div key={brand.name} class="brand-logo" title={brand.name}>
            <img src={brand.logo} alt={format!("{} logo", brand.name)} loading="lazy" draggable="false" {onerror} />
        </div>
    }
}

#[function_component(Brands)]
pub fn brands() -> Html {
    html! {
        <section id="brands" class="brands">
            <style>{BRANDS_CSS}</style>
            <div class="brands-inner">
                <div class="brands-head">
                    <p class="eyebrow">{"Colaboraciones"}</p>
                    <h2>{"Marcas con las que he trabajado"}</h2>
                    <p class="lead">{"Algunas de las marcas y empresas con las que he colaborado en foto y video."}</p>
                </div>
                <div class="brands-card">
                    <div class="brands-grid">
                        { for BRANDS.iter().map(logo) }
                    </div>
                    <div class="brands-note">
                        <p>{"Desde 2021 colaborando con marcas en proyectos comerciales de foto y video para redes sociales."}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
