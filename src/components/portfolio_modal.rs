use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent};
use yew::prelude::*;

use crate::config;
use crate::models::showcase_models::{filter_showcase, showcase_filters, showcase_items, ShowcaseFilter, ShowcaseItem};
use crate::models::site_models::SectionId;
use crate::utils::dom::{self, WindowListener};
use crate::utils::focus_trap;
use crate::utils::media::warm_video;
use crate::utils::scroll_lock::ScrollLock;

const SHOWCASE_CSS: &str = r#"
    .showcase { padding: 3rem 0; scroll-margin-top: 6rem; }
    .showcase-inner { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
    .showcase-head { display: flex; flex-direction: column; gap: 1.5rem; }
    .showcase-head .eyebrow { margin: 0; font-size: 0.75rem; letter-spacing: 0.22em; text-transform: uppercase; color: #a3a3a3; }
    .showcase-head h2 { margin: 0.75rem 0 0; font-size: 1.9rem; font-weight: 600; }
    .showcase-head .lead { margin: 0.75rem 0 0; max-width: 42rem; color: #a3a3a3; }
    .showcase-chips { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .showcase-chip { border-radius: 999px; padding: 0.5rem 1rem; font-size: 0.875rem;
        border: 1px solid rgba(255,255,255,0.15); background: rgba(255,255,255,0.02); color: #fff; }
    .showcase-chip.active { background: #fff; color: #000; border-color: #fff; }
    .showcase-grid { margin-top: 3rem; display: grid; gap: 1.25rem; grid-template-columns: 1fr; }
    .reel-card { text-align: left; padding: 0; border-radius: 1.5rem; overflow: hidden;
        border: 1px solid rgba(255,255,255,0.1); background: rgba(255,255,255,0.02); color: #fff; }
    .reel-cover { position: relative; width: 100%; overflow: hidden; }
    .reel-cover img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover;
        opacity: 0; transition: opacity 300ms, transform 500ms; }
    .reel-cover img.loaded { opacity: 1; }
    .reel-cover img.failed { opacity: 0.15; }
    .reel-card:hover .reel-cover img { transform: scale(1.05); }
    .reel-skeleton { position: absolute; inset: 0; background: rgba(255,255,255,0.03);
        animation: reel-pulse 1.6s ease-in-out infinite; transition: opacity 300ms; }
    .reel-skeleton.hidden { opacity: 0; }
    @keyframes reel-pulse { 50% { opacity: 0.5; } }
    .reel-shade { pointer-events: none; position: absolute; inset: 0;
        background: linear-gradient(to top, rgba(0,0,0,0.65), rgba(0,0,0,0.2), transparent); }
    .reel-tags { position: absolute; left: 1rem; top: 1rem; display: flex; gap: 0.5rem; }
    .reel-tags span { border-radius: 999px; background: rgba(0,0,0,0.4); border: 1px solid rgba(255,255,255,0.1);
        padding: 0.25rem 0.75rem; font-size: 0.75rem; }
    .reel-text { padding: 1.25rem; }
    .reel-title { display: flex; justify-content: space-between; gap: 0.75rem; }
    .reel-title h3 { margin: 0; font-weight: 600; }
    .reel-title span, .reel-credits { font-size: 0.75rem; color: #a3a3a3; }
    .reel-credits { margin: 0.5rem 0 0; font-size: 0.875rem; }
    .reel-highlight { margin: 0.75rem 0 0; font-size: 0.875rem; color: #d4d4d4; }
    .reel-modal { position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center;
        padding: 1rem; background: rgba(0,0,0,0.7); backdrop-filter: blur(4px); opacity: 0; transition: opacity 200ms; }
    .reel-modal.open { opacity: 1; }
    .reel-panel { width: 100%; max-width: 64rem; max-height: calc(100vh - 2rem); display: flex; flex-direction: column;
        border-radius: 1.5rem; border: 1px solid rgba(255,255,255,0.1); background: #0b0b0f; overflow: hidden;
        transform: scale(0.98); transition: transform 200ms; }
    .reel-modal.open .reel-panel { transform: scale(1); }
    .reel-bar { display: flex; align-items: center; justify-content: space-between; gap: 1rem; padding: 1rem 1.25rem;
        border-bottom: 1px solid rgba(255,255,255,0.1); }
    .reel-bar .meta { font-size: 0.875rem; color: #a3a3a3; }
    .reel-bar .name { font-weight: 600; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
    .reel-close { border-radius: 1rem; padding: 0.5rem 1rem; font-size: 0.875rem;
        border: 1px solid rgba(255,255,255,0.15); background: rgba(255,255,255,0.02); color: #fff; }
    .reel-content { flex: 1; min-height: 0; overflow-y: auto; overscroll-behavior: contain; }
    .reel-layout { display: grid; }
    .reel-media { position: relative; background: #000; aspect-ratio: 9 / 16; }
    .reel-media video, .reel-media img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: contain; }
    .reel-details { padding: 1.5rem; }
    .reel-pills { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .reel-pills span { border-radius: 999px; border: 1px solid rgba(255,255,255,0.15); padding: 0.25rem 0.75rem;
        font-size: 0.75rem; color: #e5e5e5; }
    .reel-description { margin: 1.5rem 0 0; color: #d4d4d4; line-height: 1.6; }
    .reel-cta { margin-top: 2rem; padding-top: 1.5rem; border-top: 1px solid rgba(255,255,255,0.1); }
    .reel-cta p { margin: 0; font-size: 0.875rem; color: #a3a3a3; }
    .reel-cta-buttons { margin-top: 1rem; display: flex; flex-direction: column; gap: 0.75rem; }
    .reel-cta-buttons button { border-radius: 1rem; padding: 0.75rem 1.25rem; font-size: 0.875rem; font-weight: 500; }
    .reel-cta-buttons .solid { background: #fff; color: #000; border: 0; }
    .reel-cta-buttons .outline { background: rgba(255,255,255,0.02); color: #fff; border: 1px solid rgba(255,255,255,0.15); }
    @media (min-width: 640px) {
        .showcase-grid { grid-template-columns: repeat(2, 1fr); }
        .reel-cta-buttons { flex-direction: row; }
    }
    @media (min-width: 768px) {
        .showcase-head { flex-direction: row; align-items: flex-end; justify-content: space-between; }
        .showcase-head h2 { font-size: 2.25rem; }
    }
    @media (min-width: 1024px) {
        .showcase-grid { grid-template-columns: repeat(3, 1fr); }
        .reel-content { overflow: hidden; }
        .reel-layout { grid-template-columns: 1fr 1fr; height: 100%; }
        .reel-media { aspect-ratio: auto; height: 70vh; }
        .reel-details { padding: 2rem; overflow-y: auto; }
    }
"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CoverStatus {
    Loaded,
    Failed,
}

impl CoverStatus {
    fn class(self) -> &'static str {
        match self {
            CoverStatus::Loaded => "loaded",
            CoverStatus::Failed => "failed",
        }
    }
}

/// How each cover image settled. Covers missing here are still loading.
#[derive(Clone, Debug, Default, PartialEq)]
struct CoverStates(HashMap<&'static str, CoverStatus>);

impl CoverStates {
    fn status(&self, id: &str) -> Option<CoverStatus> {
        self.0.get(id).copied()
    }
}

impl Reducible for CoverStates {
    type Action = (&'static str, CoverStatus);

    fn reduce(self: Rc<Self>, (id, status): Self::Action) -> Rc<Self> {
        if self.status(id) == Some(status) {
            return self;
        }
        let mut next = (*self).clone();
        next.0.insert(id, status);
        Rc::new(next)
    }
}

fn scroll_after_close(section: SectionId) {
    spawn_local(async move {
        TimeoutFuture::new(config::MODAL_SCROLL_DELAY_MS).await;
        if let Err(e) = dom::scroll_into_view(section.id()) {
            log::warn!("Failed to scroll to #{}: {}", section.id(), e);
        }
    });
}

#[derive(Properties, PartialEq)]
struct ReelCardProps {
    item: ShowcaseItem,
    status: Option<CoverStatus>,
    on_open: Callback<ShowcaseItem>,
    on_settled: Callback<(&'static str, CoverStatus)>,
}

#[function_component(ReelCard)]
fn reel_card(props: &ReelCardProps) -> Html {
    let item = &props.item;
    let onclick = {
        let on_open = props.on_open.clone();
        let item = item.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(item.clone()))
    };
    let warm = {
        let src = item.is_video().then(|| item.src.clone());
        move || {
            if let Some(src) = &src {
                warm_video(src);
            }
        }
    };
    let onmouseenter = {
        let warm = warm.clone();
        Callback::from(move |_: MouseEvent| warm())
    };
    let ontouchstart = Callback::from(move |_: TouchEvent| warm());
    let onload = {
        let on_settled = props.on_settled.clone();
        let id = item.id;
        Callback::from(move |_: Event| on_settled.emit((id, CoverStatus::Loaded)))
    };
    let onerror = {
        let on_settled = props.on_settled.clone();
        let id = item.id;
        let cover = item.cover;
        Callback::from(move |_: Event| {
            log::warn!("Cover for {} failed to load: {}", id, cover);
            on_settled.emit((id, CoverStatus::Failed));
        })
    };
    let settled = props.status.is_some();

    html! {
        <button type="button" class="reel-card" {onclick} {onmouseenter} {ontouchstart}>
            <div class="reel-cover" style={format!("aspect-ratio: {};", item.cover_ratio())}>
                <div class={classes!("reel-skeleton", settled.then_some("hidden"))}></div>
                <img src={item.cover} alt={item.title} loading="lazy"
                    class={classes!(props.status.map(CoverStatus::class))} {onload} {onerror} />
                <div class="reel-shade"></div>
                <div class="reel-tags">
                    <span>{item.category.label()}</span>
                    if item.is_video() {
                        <span>{"Reel"}</span>
                    }
                </div>
            </div>
            <div class="reel-text">
                <div class="reel-title">
                    <h3>{item.title}</h3>
                    <span>{item.year.unwrap_or_default()}</span>
                </div>
                <p class="reel-credits">{item.credits_line()}</p>
                if let Some(highlight) = item.highlight {
                    <p class="reel-highlight">{highlight}</p>
                }
            </div>
        </button>
    }
}

#[function_component(PortfolioModal)]
pub fn portfolio_modal() -> Html {
    let items = use_memo(|_| showcase_items(), ());
    let filters = {
        let items = items.clone();
        use_memo(move |_| showcase_filters(&items), ())
    };
    let filter = use_state(ShowcaseFilter::default);
    let visible = {
        let items = items.clone();
        use_memo(move |filter| filter_showcase(&items, *filter), *filter)
    };
    let covers = use_reducer(CoverStates::default);

    // `modal_item` keeps the content mounted through the closing fade;
    // `modal_open` drives the fade itself.
    let modal_item = use_state(|| None::<ShowcaseItem>);
    let modal_open = use_state(|| false);

    let backdrop_ref = use_node_ref();
    let panel_ref = use_node_ref();
    let close_ref = use_node_ref();

    {
        let deps = (*modal_open, modal_item.is_some());
        let modal_item = modal_item.clone();
        use_effect_with_deps(
            move |&(open, mounted): &(bool, bool)| {
                let timer = (!open && mounted).then(|| {
                    Timeout::new(config::MODAL_UNMOUNT_MS, move || modal_item.set(None))
                });
                move || drop(timer)
            },
            deps,
        );
    }

    use_effect_with_deps(
        move |open| {
            let lock = open.then(ScrollLock::acquire);
            move || drop(lock)
        },
        *modal_open,
    );

    {
        let close_ref = close_ref.clone();
        use_effect_with_deps(
            move |open| {
                let timer = open.then(|| {
                    Timeout::new(0, move || {
                        if let Some(button) = close_ref.cast::<HtmlElement>() {
                            let _ = button.focus();
                        }
                    })
                });
                move || drop(timer)
            },
            *modal_open,
        );
    }

    {
        let open = *modal_open;
        let modal_open = modal_open.clone();
        let panel_ref = panel_ref.clone();
        use_effect_with_deps(
            move |open| {
                let listener = if *open {
                    WindowListener::attach("keydown", move |e: Event| {
                        let Some(e) = e.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        match e.key().as_str() {
                            "Escape" => modal_open.set(false),
                            "Tab" => {
                                if let Some(root) = panel_ref.cast::<Element>() {
                                    focus_trap::trap_tab(&root, e);
                                }
                            }
                            _ => {}
                        }
                    })
                } else {
                    None
                };
                move || drop(listener)
            },
            open,
        );
    }

    let open = {
        let modal_item = modal_item.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |item: ShowcaseItem| {
            log::debug!("Opening reel {}", item.id);
            modal_item.set(Some(item));
            modal_open.set(true);
        })
    };
    let close = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(false))
    };
    let on_backdrop = {
        let modal_open = modal_open.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target_dyn_into::<Element>();
            let on_backdrop = backdrop_ref
                .cast::<Element>()
                .zip(target)
                .map_or(false, |(backdrop, target)| backdrop == target);
            if on_backdrop {
                modal_open.set(false);
            }
        })
    };
    let on_settled = {
        let covers = covers.dispatcher();
        Callback::from(move |settled: (&'static str, CoverStatus)| covers.dispatch(settled))
    };
    let close_and_scroll = |section: SectionId| {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| {
            modal_open.set(false);
            scroll_after_close(section);
        })
    };

    let modal = (*modal_item).as_ref().map(|item| {
        let media = if item.is_video() {
            let src = item.src.clone();
            let onplay = Callback::from(move |_: Event| warm_video(&src));
            let onerror = {
                let id = item.id;
                let src = item.src.clone();
                Callback::from(move |_: Event| log::warn!("Video for {} failed to load: {}", id, src))
            };
            html! {
                <video key={item.src.clone()} src={item.src.clone()} poster={item.cover}
                    controls=true autoplay=true loop=true muted=true playsinline=true preload="metadata"
                    {onplay} {onerror}></video>
            }
        } else {
            html! { <img src={item.src.clone()} alt={item.title} /> }
        };
        html! {
            <div class={classes!("reel-modal", modal_open.then_some("open"))} role="dialog" aria-modal="true"
                aria-label={format!("Reel: {}", item.title)} ref={backdrop_ref.clone()} onmousedown={on_backdrop.clone()}>
                <div class="reel-panel" ref={panel_ref.clone()}>
                    <div class="reel-bar">
                        <div>
                            <div class="meta">{item.meta_line()}</div>
                            <div class="name">{item.title}</div>
                        </div>
                        <button type="button" class="reel-close" ref={close_ref.clone()} onclick={close.clone()}>
                            {"Cerrar (ESC)"}
                        </button>
                    </div>
                    <div class="reel-content">
                        <div class="reel-layout">
                            <div class="reel-media">{media}</div>
                            <div class="reel-details">
                                <div class="reel-pills">
                                    if let Some(role) = item.role {
                                        <span>{role}</span>
                                    }
                                    if let Some(highlight) = item.highlight {
                                        <span>{highlight}</span>
                                    }
                                </div>
                                <p class="reel-description">{item.description_or_default()}</p>
                                <div class="reel-cta">
                                    <p>{"¿Quieres algo similar? Escríbeme y lo aterrizamos rápido."}</p>
                                    <div class="reel-cta-buttons">
                                        <button type="button" class="solid" onclick={close_and_scroll(SectionId::Contact)}>
                                            {"Ir a contacto"}
                                        </button>
                                        <button type="button" class="outline" onclick={close_and_scroll(SectionId::Work)}>
                                            {"Ver más trabajos"}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <section id="portafolio" class="showcase">
            <style>{SHOWCASE_CSS}</style>
            <div class="showcase-inner">
                <div class="showcase-head">
                    <div>
                        <p class="eyebrow">{"Portafolio"}</p>
                        <h2>{"Reels cinematográficos para marcas"}</h2>
                        <p class="lead">{"Contenido vertical optimizado para Instagram: ritmo, retención y estética premium."}</p>
                    </div>
                    <div class="showcase-chips">
                        { for filters.iter().copied().map(|chip| {
                            let active = chip == *filter;
                            let filter = filter.clone();
                            html! {
                                <button key={chip.label()} type="button"
                                    class={classes!("showcase-chip", active.then_some("active"))}
                                    onclick={Callback::from(move |_: MouseEvent| filter.set(chip))}>
                                    {chip.label()}
                                </button>
                            }
                        }) }
                    </div>
                </div>
                <div class="showcase-grid">
                    { for visible.iter().map(|item| html! {
                        <ReelCard key={item.id} item={item.clone()} status={covers.status(item.id)}
                            on_open={open.clone()} on_settled={on_settled.clone()} />
                    }) }
                </div>
            </div>
            { modal.unwrap_or_default() }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_are_recorded_once() {
        let covers = Rc::new(CoverStates::default());
        let covers = covers.reduce(("cfmoto-01", CoverStatus::Loaded));
        assert_eq!(covers.status("cfmoto-01"), Some(CoverStatus::Loaded));
        assert_eq!(covers.status("gac-01"), None);
        let same = covers.clone().reduce(("cfmoto-01", CoverStatus::Loaded));
        assert!(Rc::ptr_eq(&covers, &same));
    }

    #[test]
    fn failed_cover_settles_dimmed() {
        let covers = Rc::new(CoverStates::default()).reduce(("gac-01", CoverStatus::Failed));
        let status = covers.status("gac-01");
        // Any settled status hides the skeleton.
        assert!(status.is_some());
        assert_eq!(status.map(CoverStatus::class), Some("failed"));
        assert!(SHOWCASE_CSS.contains(".reel-cover img.failed { opacity: 0.15; }"));
    }
}
