use yew::prelude::*;

use crate::config;

const CONTACT_CSS: &str = r#"
    .contact { padding: 8rem 1.5rem; scroll-margin-top: 6rem; }
    .contact-inner { max-width: 72rem; margin: 0 auto; text-align: center; }
    .contact h2 { margin: 0; font-size: 1.5rem; font-weight: 600; }
    .contact-lead { margin: 0.75rem auto 0; max-width: 36rem; color: rgba(255,255,255,0.6); }
    .contact-cards { margin-top: 3rem; display: grid; grid-template-columns: 1fr; gap: 1rem; }
    .contact-card { display: block; text-align: left; border-radius: 1rem; padding: 1.75rem; text-decoration: none;
        border: 1px solid rgba(255,255,255,0.15); background: rgba(255,255,255,0.05); color: #fff; transition: all 200ms; }
    .contact-card:hover { background: #fff; color: #000; }
    .contact-card.primary { background: #fff; color: #000; border-color: #fff; }
    .contact-card.primary:hover { background: rgba(255,255,255,0.9); }
    .contact-card .kicker { margin: 0; font-size: 0.75rem; letter-spacing: 0.25em; text-transform: uppercase; opacity: 0.6; }
    .contact-card .title { margin: 0.75rem 0 0; font-size: 1.125rem; font-weight: 500; }
    .contact-card.primary .title { font-size: 1.25rem; font-weight: 600; }
    .contact-card .detail { margin: 0.5rem 0 0; font-size: 0.875rem; opacity: 0.7; }
    .contact-card .action { margin: 1rem 0 0; font-size: 0.875rem; font-weight: 500; }
    .contact-card .email { margin: 1rem 0 0; font-size: 0.75rem; opacity: 0.45; word-break: break-all; }
    .contact-location { margin: 3rem 0 0; font-size: 0.875rem; color: rgba(255,255,255,0.45); }
    @media (min-width: 640px) { .contact-cards { grid-template-columns: repeat(3, 1fr); } }
    @media (min-width: 768px) { .contact h2 { font-size: 1.9rem; } }
"#;

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <section id="contact" class="contact">
            <style>{CONTACT_CSS}</style>
            <div class="contact-inner">
                <h2>{"¿Tienes un proyecto en mente?"}</h2>
                <p class="contact-lead">
                    {"Trabajo con marcas, agencias y proyectos creativos en foto y video. \
                      Escríbeme y vemos cómo llevarlo a algo visualmente sólido."}
                </p>

                <div class="contact-cards">
                    <a class="contact-card primary" href={config::whatsapp_link()} target="_blank" rel="noreferrer">
                        <p class="kicker">{"WhatsApp"}</p>
                        <p class="title">{"Escríbeme directo"}</p>
                        <p class="detail">{"Cotizaciones · Proyectos nuevos · Respuesta rápida"}</p>
                        <p class="action">{"Iniciar conversación →"}</p>
                    </a>
                    <a class="contact-card" href={config::mailto_link()}>
                        <p class="kicker">{"Email"}</p>
                        <p class="title">{"Enviar brief"}</p>
                        <p class="detail">{"Propuestas, archivos o información detallada"}</p>
                        <p class="email">{config::CONTACT_EMAIL}</p>
                    </a>
                    <a class="contact-card" href={config::INSTAGRAM_URL} target="_blank" rel="noreferrer">
                        <p class="kicker">{"Instagram"}</p>
                        <p class="title">{config::INSTAGRAM_HANDLE}</p>
                        <p class="detail">{"Referencias · Mensajes directos"}</p>
                    </a>
                </div>

                <p class="contact-location">{format!("{} y colaboraciones", config::LOCATION_LINE)}</p>
            </div>
        </section>
    }
}
