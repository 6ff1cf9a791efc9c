use gloo_timers::callback::Timeout;
use web_sys::TouchEvent;
use yew::prelude::*;

use crate::config;
use crate::models::site_models::SLIDES;
use crate::utils::cycle;
use crate::utils::media::use_media_query;
use crate::utils::storage;
use crate::utils::swipe::{SwipeDirection, SwipeTracker};

const HERO_CSS: &str = r#"
    .hero { position: relative; min-height: 100vh; width: 100%; overflow: hidden; background: #000;
        scroll-margin-top: 6rem; touch-action: pan-y; }
    .hero-slide { position: absolute; inset: 0; opacity: 0; transition: opacity 700ms; }
    .hero-slide.active { opacity: 1; }
    .hero-slide img { width: 100%; height: 100%; object-fit: cover; }
    .hero-shade { position: absolute; inset: 0;
        background: linear-gradient(to bottom, rgba(0,0,0,0.4), rgba(0,0,0,0.1), rgba(0,0,0,0.6)); }
    .hero-card-wrap { position: absolute; z-index: 30; bottom: 6rem; left: 50%; transform: translateX(-50%);
        width: calc(100% - 3rem); max-width: 28rem; }
    .hero-card { border-radius: 1.5rem; border: 1px solid rgba(255,255,255,0.1); background: rgba(0,0,0,0.35);
        backdrop-filter: blur(12px); padding: 1rem; box-shadow: 0 20px 60px rgba(0,0,0,0.55); }
    .hero-card .eyebrow { margin: 0; font-size: 10px; letter-spacing: 0.25em; text-transform: uppercase;
        color: rgba(255,255,255,0.6); }
    .hero-card h1 { margin: 0.5rem 0 0; font-size: 1.5rem; font-weight: 600; line-height: 1.2; }
    .hero-card .lead { margin: 0.5rem 0 0; font-size: 0.875rem; color: rgba(255,255,255,0.7); }
    .hero-actions { margin-top: 1.5rem; display: flex; flex-wrap: wrap; gap: 0.75rem; }
    .hero-actions a { border-radius: 999px; padding: 0.375rem 1rem; font-size: 0.75rem; font-weight: 500;
        text-decoration: none; }
    .hero-actions .primary { background: #fff; color: #000; }
    .hero-actions .ghost { border: 1px solid rgba(255,255,255,0.25); background: rgba(0,0,0,0.3); color: #fff; }
    .hero-arrow { display: none; position: absolute; z-index: 20; top: 50%; transform: translateY(-50%);
        width: 2.75rem; height: 2.75rem; border-radius: 999px; border: 1px solid rgba(255,255,255,0.2);
        background: rgba(0,0,0,0.3); color: #fff; font-size: 1.25rem; align-items: center; justify-content: center; }
    .hero-arrow.prev { left: 1.5rem; }
    .hero-arrow.next { right: 1.5rem; }
    .hero-dots { position: absolute; z-index: 20; bottom: 2rem; left: 50%; transform: translateX(-50%);
        display: flex; gap: 0.5rem; }
    .hero-dot { height: 0.625rem; width: 0.625rem; padding: 0; border: 0; border-radius: 999px;
        background: rgba(255,255,255,0.35); transition: all 300ms; }
    .hero-dot.active { width: 2rem; background: rgba(255,255,255,0.9); }
    .swipe-hint { position: absolute; z-index: 20; bottom: 5rem; left: 50%; transform: translate(-50%, 0.5rem);
        opacity: 0; pointer-events: none; transition: all 500ms; border-radius: 999px;
        border: 1px solid rgba(255,255,255,0.1); background: rgba(0,0,0,0.3); padding: 0.5rem 1rem;
        font-size: 0.75rem; color: rgba(255,255,255,0.7); }
    .swipe-hint.visible { opacity: 1; transform: translate(-50%, 0); }
    @media (min-width: 768px) {
        .hero-card-wrap { left: 4rem; transform: none; width: auto; }
        .hero-card { padding: 1.5rem; }
        .hero-card .eyebrow { font-size: 0.75rem; }
        .hero-card h1 { font-size: 2.25rem; }
        .hero-card .lead { font-size: 15px; }
        .hero-actions a { font-size: 0.875rem; }
        .hero-arrow { display: flex; }
        .swipe-hint { display: none; }
    }
"#;

fn touch_point(e: &TouchEvent) -> Option<(f64, f64)> {
    e.touches()
        .get(0)
        .map(|t| (f64::from(t.client_x()), f64::from(t.client_y())))
}

#[function_component(HeroSlider)]
pub fn hero_slider() -> Html {
    let index = use_state(|| 0usize);
    let paused = use_state(|| false);
    let show_hint = use_state(|| false);
    let swipe = use_mut_ref(SwipeTracker::default);
    let is_mobile = use_media_query(config::MOBILE_QUERY);
    let total = SLIDES.len();

    // Autoplay. Any index change or pause toggle restarts the countdown.
    {
        let deps = (*index, *paused);
        let index = index.clone();
        use_effect_with_deps(
            move |&(current, paused): &(usize, bool)| {
                let timer = cycle::autoplay_target(current, paused, total).map(|next| {
                    Timeout::new(config::HERO_AUTOPLAY_MS, move || index.set(next))
                });
                move || drop(timer)
            },
            deps,
        );
    }

    // One-time swipe hint.
    {
        let show_hint = show_hint.clone();
        use_effect_with_deps(
            move |_| {
                let timer = (!storage::has_seen(config::SWIPE_HINT_KEY)).then(|| {
                    show_hint.set(true);
                    Timeout::new(config::SWIPE_HINT_MS, move || {
                        show_hint.set(false);
                        storage::mark_seen(config::SWIPE_HINT_KEY);
                    })
                });
                move || drop(timer)
            },
            (),
        );
    }

    let go = {
        let index = index.clone();
        Callback::from(move |delta: isize| index.set(cycle::step(*index, delta, total)))
    };

    let on_mouse_enter = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(true))
    };
    let on_mouse_leave = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(false))
    };

    let on_touch_start = {
        let swipe = swipe.clone();
        let paused = paused.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some((x, y)) = touch_point(&e) {
                if swipe.borrow_mut().start(e.touches().length(), x, y) {
                    paused.set(true);
                }
            }
        })
    };
    let on_touch_move = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some((x, y)) = touch_point(&e) {
                if swipe.borrow_mut().update(x, y) {
                    e.prevent_default();
                }
            }
        })
    };
    let on_touch_end = {
        let swipe = swipe.clone();
        let paused = paused.clone();
        let go = go.clone();
        Callback::from(move |e: TouchEvent| {
            let end_x = e.changed_touches().get(0).map(|t| f64::from(t.client_x()));
            match swipe.borrow_mut().end(end_x) {
                Some(SwipeDirection::Next) => go.emit(1),
                Some(SwipeDirection::Prev) => go.emit(-1),
                None => {}
            }
            paused.set(false);
        })
    };

    let on_prev = {
        let go = go.clone();
        Callback::from(move |_: MouseEvent| go.emit(-1))
    };
    let on_next = {
        let go = go.clone();
        Callback::from(move |_: MouseEvent| go.emit(1))
    };

    html! {
        <section id="home" class="hero"
            onmouseenter={on_mouse_enter}
            onmouseleave={on_mouse_leave}
            ontouchstart={on_touch_start}
            ontouchmove={on_touch_move}
            ontouchend={on_touch_end}>
            <style>{HERO_CSS}</style>
            <div class="hero-card-wrap">
                <div class="hero-card">
                    <p class="eyebrow">{config::OWNER_NAME}</p>
                    <h1>{"Fotógrafo y filmmaker"}</h1>
                    <p class="lead">{"Creador de contenido para autos, motos y marcas."}</p>
                    <div class="hero-actions">
                        <a class="primary" href="#work">{"Ver trabajo"}</a>
                        <a class="ghost" href="#contact">{"Contacto"}</a>
                    </div>
                </div>
            </div>

            { for SLIDES.iter().enumerate().map(|(i, slide)| html! {
                <div key={slide.desktop} class={classes!("hero-slide", (i == *index).then_some("active"))}>
                    <img src={slide.source(is_mobile)} alt={slide.alt}
                        loading={if i == 0 { "eager" } else { "lazy" }} />
                    <div class="hero-shade"></div>
                </div>
            }) }

            <button type="button" class="hero-arrow prev" aria-label="Anterior" onclick={on_prev}>{"‹"}</button>
            <button type="button" class="hero-arrow next" aria-label="Siguiente" onclick={on_next}>{"›"}</button>

            <div class="hero-dots">
                { for (0..total).map(|i| {
                    let index = index.clone();
                    html! {
                        <button key={i} type="button"
                            class={classes!("hero-dot", (i == *index).then_some("active"))}
                            aria-label={format!("Ir a slide {}", i + 1)}
                            onclick={Callback::from(move |_: MouseEvent| index.set(i))} />
                    }
                }) }
            </div>

            <div class={classes!("swipe-hint", show_hint.then_some("visible"))} aria-hidden={(!*show_hint).to_string()}>
                {"Desliza →"}
            </div>
        </section>
    }
}
