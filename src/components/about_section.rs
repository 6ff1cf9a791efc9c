use yew::prelude::*;

use crate::config;
use crate::utils::media::use_media_query;

const ABOUT_CSS: &str = r#"
    .about { padding: 3rem 0; }
    .about-inner { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
    .about h2 { margin: 0; font-size: 1.5rem; font-weight: 600; }
    .about-badges { margin-top: 1rem; display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .about-badges span { border-radius: 999px; border: 1px solid rgba(255,255,255,0.15); background: rgba(255,255,255,0.02);
        padding: 0.25rem 0.75rem; font-size: 0.75rem; color: rgba(255,255,255,0.8); }
    .about-lead { margin: 1.5rem 0 0; max-width: 48rem; color: rgba(255,255,255,0.7); line-height: 1.6; }
    .about-toggle { margin-top: 1.25rem; display: inline-flex; align-items: center; gap: 0.5rem; border-radius: 1rem;
        padding: 0.5rem 1rem; font-size: 0.875rem; border: 1px solid rgba(255,255,255,0.15);
        background: rgba(255,255,255,0.02); color: #fff; }
    .about-toggle .arrow { color: rgba(255,255,255,0.6); }
    .about-more { display: none; }
    .about-more.open { display: block; }
    .about-more > p { margin: 1.5rem 0 0; max-width: 48rem; color: rgba(255,255,255,0.6); line-height: 1.6; }
    .about-cards { margin-top: 3rem; display: grid; grid-template-columns: 1fr; gap: 1.5rem; }
    .about-card { border-radius: 1rem; border: 1px solid rgba(255,255,255,0.1); background: rgba(255,255,255,0.05); padding: 1.5rem; }
    .about-card .kicker { margin: 0; font-size: 0.75rem; letter-spacing: 0.25em; text-transform: uppercase; color: rgba(255,255,255,0.6); }
    .about-card .value { margin: 0.75rem 0 0; font-size: 1.125rem; font-weight: 500; }
    .about-more .closing { margin-top: 3rem; font-size: 0.875rem; color: rgba(255,255,255,0.45); }
    @media (min-width: 640px) { .about-cards { grid-template-columns: repeat(3, 1fr); } }
    @media (min-width: 768px) {
        .about h2 { font-size: 1.9rem; }
        .about-toggle { display: none; }
        .about-more { display: block; }
    }
"#;

const BADGES: [&str; 4] = [
    "Filmmaker · Foto + Video",
    "Desde 2021",
    "Reels para marcas",
    "Drone · Tomas aéreas",
];

const CARDS: [(&str, &str); 3] = [
    ("Enfoque", "Marcas automotrices y motociclismo"),
    ("Especialidad", "Reels cinematográficos y foto para redes + tomas aéreas con dron"),
    ("Diferencial", "Estética cuidada, rapidez y enfoque digital"),
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let is_desktop = use_media_query(config::DESKTOP_QUERY);
    let open = use_state(|| is_desktop);

    // Follow the breakpoint: open on desktop, collapsed on mobile.
    {
        let open = open.clone();
        use_effect_with_deps(
            move |desktop| {
                open.set(*desktop);
                || ()
            },
            is_desktop,
        );
    }

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <section id="about" class="about">
            <style>{ABOUT_CSS}</style>
            <div class="about-inner">
                <h2>{"Mi enfoque"}</h2>
                <div class="about-badges">
                    { for BADGES.iter().map(|badge| html! { <span key={*badge}>{*badge}</span> }) }
                </div>

                <p class="about-lead">
                    {"Trabajo con marcas automotrices y de motocicletas creando contenido visual pensado \
                      para redes sociales: estética cinematográfica, ritmo y formatos que funcionan en \
                      plataformas digitales."}
                </p>

                <button type="button" class="about-toggle" onclick={toggle} aria-expanded={open.to_string()}>
                    { if *open { "Ver menos" } else { "Leer más" } }
                    <span class="arrow" aria-hidden="true">{ if *open { "↑" } else { "↓" } }</span>
                </button>

                <div class={classes!("about-more", open.then_some("open"))}>
                    <p>
                        {"Me especializo en reels cinematográficos y fotografía para redes, cuidando desde la \
                          estética hasta el ritmo y el formato final. Trabajo de forma ágil, con entregas \
                          rápidas y una comunicación clara durante todo el proceso."}
                    </p>
                    <div class="about-cards">
                        { for CARDS.iter().map(|(kicker, value)| html! {
                            <div key={*kicker} class="about-card">
                                <p class="kicker">{*kicker}</p>
                                <p class="value">{*value}</p>
                            </div>
                        }) }
                    </div>
                    <p class="closing">
                        {"Freelance desde 2021. He colaborado con marcas como GAC, Ducati y Changan en proyectos \
                          comerciales y colaboraciones continuas, trabajando siempre con un enfoque profesional y \
                          orientado a resultados."}
                    </p>
                </div>
            </div>
        </section>
    }
}
