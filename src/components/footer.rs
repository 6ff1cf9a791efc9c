use chrono::Datelike;
use yew::prelude::*;

use crate::config;

const FOOTER_CSS: &str = r#"
    .site-footer { padding: 1.75rem 1.5rem; }
    .site-footer-inner { max-width: 72rem; margin: 0 auto; text-align: center; font-size: 0.875rem;
        color: rgba(255,255,255,0.5); border-top: 1px solid rgba(255,255,255,0.1); padding-top: 2rem; }
    .site-footer p { margin: 0; }
    .site-footer .tagline { margin-top: 0.25rem; }
    .site-footer-links { margin-top: 1rem; display: flex; justify-content: center; gap: 1.5rem; }
    .site-footer-links a { color: inherit; text-decoration: none; transition: color 200ms; }
    .site-footer-links a:hover { color: #fff; }
"#;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="site-footer-inner">
                <p>{format!("© {} {}", year, config::BRAND_NAME)}</p>
                <p class="tagline">{"Filmmaker & Photographer · Torreón, MX"}</p>
                <div class="site-footer-links">
                    <a href={config::INSTAGRAM_URL} target="_blank">{"Instagram"}</a>
                    <a href={config::mailto_link()}>{"Email"}</a>
                    <a href={config::whatsapp_link_with(config::WHATSAPP_NUMBER, None)} target="_blank">{"WhatsApp"}</a>
                </div>
            </div>
        </footer>
    }
}
