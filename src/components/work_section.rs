use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, TouchEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::gallery_state::{GalleryAction, GalleryState, GalleryView};
use crate::config;
use crate::error::SiteResult;
use crate::models::work_models::{count_label, filter_work, GalleryItem, WorkFilter};
use crate::utils::dom::{self, WindowListener};
use crate::utils::filter_query::{compose_url, filter_from_query, query_with_filter};
use crate::utils::focus_trap;
use crate::utils::scroll_lock::ScrollLock;
use crate::utils::swipe::{SwipeDirection, SwipeTracker};

const WORK_CSS: &str = r#"
    .work-section { padding: 3rem 0; scroll-margin-top: 6rem; }
    .work-inner { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
    .work-header { display: flex; flex-direction: column; gap: 1.5rem; }
    .work-header h2 { font-size: 1.75rem; font-weight: 600; margin: 0; }
    .work-header p { margin: 0.5rem 0 0; color: rgba(255,255,255,0.6); }
    .work-filters { position: sticky; top: 64px; z-index: 30; margin: 0 -1.5rem; padding: 0.75rem 1.5rem;
        background: rgba(0,0,0,0.55); backdrop-filter: blur(8px); border-bottom: 1px solid rgba(255,255,255,0.1); }
    .chip-row { display: flex; gap: 0.5rem; overflow-x: auto; scrollbar-width: none; }
    .chip { flex-shrink: 0; border-radius: 999px; padding: 0.5rem 1rem; font-size: 0.875rem;
        border: 1px solid rgba(255,255,255,0.15); background: rgba(255,255,255,0.05); color: rgba(255,255,255,0.8); }
    .chip.active { background: #fff; color: #000; border-color: #fff; }
    .work-count { margin-top: 1.5rem; font-size: 0.875rem; color: rgba(255,255,255,0.45); }
    .work-grid { margin-top: 2rem; display: grid; grid-template-columns: 1fr; gap: 1.5rem;
        transition: opacity 300ms, transform 300ms; }
    .work-grid.fading { opacity: 0; transform: translateY(0.5rem); }
    .work-card { position: relative; overflow: hidden; border-radius: 1.5rem; border: 1px solid rgba(255,255,255,0.1);
        background: rgba(255,255,255,0.05); padding: 0; text-align: left; }
    .work-card img { display: block; width: 100%; aspect-ratio: 9 / 16; object-fit: cover; transition: transform 500ms; }
    .work-card:hover img { transform: scale(1.04); }
    .work-card-body { position: absolute; inset: auto 0 0 0; padding: 1.5rem;
        background: linear-gradient(to top, rgba(0,0,0,0.8), transparent); }
    .tag { font-size: 0.75rem; color: rgba(255,255,255,0.7); border: 1px solid rgba(255,255,255,0.15);
        background: rgba(0,0,0,0.3); padding: 0.25rem 0.75rem; border-radius: 999px; margin-right: 0.5rem; }
    .work-card h3 { margin: 0.75rem 0 0; font-size: 1.15rem; font-weight: 500; }
    .work-card-cta { margin: 0.25rem 0 0; font-size: 0.875rem; color: rgba(255,255,255,0.6); }
    .work-modal { position: fixed; inset: 0; z-index: 60; display: flex; align-items: flex-end; justify-content: center; }
    .work-backdrop { position: absolute; inset: 0; border: 0; background: rgba(0,0,0,0.7); backdrop-filter: blur(4px); }
    .work-panel { position: relative; width: 100%; max-height: 88vh; overflow: hidden; border-radius: 1.5rem 1.5rem 0 0;
        border: 1px solid rgba(255,255,255,0.1); background: rgba(0,0,0,0.6); backdrop-filter: blur(24px); }
    .work-panel-head { display: flex; justify-content: space-between; gap: 1rem; padding: 1.25rem;
        border-bottom: 1px solid rgba(255,255,255,0.1); }
    .work-panel-head p { margin: 0; font-size: 0.75rem; letter-spacing: 0.25em; text-transform: uppercase; color: rgba(255,255,255,0.55); }
    .work-panel-head h3 { margin: 0.5rem 0 0; font-size: 1.25rem; font-weight: 600; }
    .round-button { border-radius: 999px; border: 1px solid rgba(255,255,255,0.15); background: rgba(255,255,255,0.05);
        padding: 0.5rem 1rem; font-size: 0.875rem; }
    .work-panel-body { max-height: calc(88vh - 74px); overflow-y: auto; padding: 1.25rem; }
    .external-link { display: inline-flex; gap: 0.5rem; border-radius: 999px; background: #fff; color: #000;
        padding: 0.5rem 1rem; font-size: 0.875rem; font-weight: 500; text-decoration: none; }
    .coming-soon { margin-top: 1rem; border-radius: 1rem; border: 1px solid rgba(255,255,255,0.1);
        background: rgba(255,255,255,0.05); padding: 1.5rem; font-size: 0.875rem; color: rgba(255,255,255,0.6); }
    .masonry { margin-top: 1rem; columns: 2; column-gap: 0.75rem; }
    .masonry button { display: block; width: 100%; margin-bottom: 0.75rem; padding: 0; break-inside: avoid;
        border-radius: 1rem; border: 1px solid rgba(255,255,255,0.1); background: rgba(255,255,255,0.05); overflow: hidden; }
    .masonry img { display: block; width: 100%; height: auto; }
    .lightbox { position: fixed; inset: 0; z-index: 70; }
    .lightbox-backdrop { position: absolute; inset: 0; border: 0; background: rgba(0,0,0,0.85); }
    .lightbox-bar { position: absolute; top: 0; left: 0; right: 0; z-index: 30; padding: 1rem;
        display: flex; align-items: center; justify-content: space-between; }
    .lightbox-count { border-radius: 999px; border: 1px solid rgba(255,255,255,0.15); background: rgba(255,255,255,0.05);
        padding: 0.375rem 0.75rem; font-size: 0.75rem; color: rgba(255,255,255,0.75); }
    .lightbox-stage { position: absolute; inset: 0; z-index: 20; display: flex; align-items: center; justify-content: center;
        padding: 1rem; touch-action: pan-y; pointer-events: none; }
    .lightbox-stage img { max-width: min(1300px, 100%); max-height: 82vh; object-fit: contain; pointer-events: auto; }
    .lightbox-nav { position: absolute; z-index: 30; top: 50%; transform: translateY(-50%); width: 2.75rem; height: 2.75rem;
        border-radius: 999px; border: 1px solid rgba(255,255,255,0.15); background: rgba(255,255,255,0.05); }
    .lightbox-nav.prev { left: 0.75rem; }
    .lightbox-nav.next { right: 0.75rem; }
    .lightbox-hint { position: absolute; bottom: 1rem; left: 0; right: 0; display: none; justify-content: center;
        font-size: 0.75rem; color: rgba(255,255,255,0.45); pointer-events: none; }
    @media (min-width: 640px) { .work-grid { grid-template-columns: repeat(2, 1fr); } }
    @media (min-width: 768px) {
        .work-header { flex-direction: row; align-items: flex-end; justify-content: space-between; }
        .work-header h2 { font-size: 1.9rem; }
        .work-filters { position: static; margin: 0; padding: 0; background: none; backdrop-filter: none; border: 0; }
        .work-modal { align-items: center; }
        .work-panel { width: min(1120px, 92vw); border-radius: 1.5rem; }
        .masonry { columns: 3; }
        .lightbox-stage { padding: 2.5rem; }
        .lightbox-nav.prev { left: 1.5rem; }
        .lightbox-nav.next { right: 1.5rem; }
        .lightbox-hint { display: flex; }
    }
    @media (min-width: 1024px) { .work-grid { grid-template-columns: repeat(3, 1fr); } }
"#;

fn sync_filter_to_url(filter: WorkFilter) -> SiteResult<()> {
    let location = dom::window()?.location();
    let query = query_with_filter(&location.search()?, filter);
    dom::replace_url(&compose_url(&location.pathname()?, &query, &location.hash()?))
}

fn dim_broken_image(e: Event) {
    if let Some(img) = e.target_dyn_into::<HtmlElement>() {
        let src = img.get_attribute("src").unwrap_or_default();
        log::warn!("Image failed to load: {}", src);
        let _ = img.style().set_property("opacity", "0.15");
    }
}

fn touch_point(e: &TouchEvent) -> Option<(f64, f64)> {
    e.touches()
        .get(0)
        .map(|t| (f64::from(t.client_x()), f64::from(t.client_y())))
}

#[derive(Properties, PartialEq)]
struct WorkCardProps {
    item: &'static GalleryItem,
    on_open: Callback<&'static GalleryItem>,
}

#[function_component(WorkCard)]
fn work_card(props: &WorkCardProps) -> Html {
    let item = props.item;
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(item))
    };
    html! {
        <button type="button" class="work-card" {onclick}>
            <img src={item.cover_path()} alt={item.title} loading="lazy" onerror={Callback::from(dim_broken_image)} />
            <div class="work-card-body">
                <span class="tag">{item.category.label()}</span>
                <span class="tag">{item.media.label()}</span>
                <h3>{item.title}</h3>
                <p class="work-card-cta">{"Ver sesión →"}</p>
            </div>
        </button>
    }
}

#[function_component(WorkSection)]
pub fn work_section() -> Html {
    let initial_query = use_location()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();
    let filter = use_state(move || filter_from_query(&initial_query));
    let fading = use_state(|| false);
    let fade_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);
    let gallery = use_reducer(GalleryState::default);
    let swipe = use_mut_ref(SwipeTracker::default);

    let section_ref = use_node_ref();
    let grid_top_ref = use_node_ref();
    let panel_ref = use_node_ref();
    let panel_close_ref = use_node_ref();
    let lightbox_ref = use_node_ref();
    let lightbox_close_ref = use_node_ref();

    let view = gallery.view();

    // A shared link with ?work=<filter> lands on the grid, once.
    {
        let section_ref = section_ref.clone();
        let filter = *filter;
        use_effect_with_deps(
            move |_| {
                if !filter.is_default() {
                    let scheduled = dom::after_layout(move || {
                        if let Some(section) = section_ref.cast::<Element>() {
                            if let Err(e) = dom::smooth_scroll_to_element(
                                &section,
                                config::HEADER_OFFSET + config::SCROLL_MARGIN,
                            ) {
                                log::warn!("Failed to scroll to work section: {}", e);
                            }
                        }
                    });
                    if let Err(e) = scheduled {
                        log::warn!("Failed to schedule work section scroll: {}", e);
                    }
                }
                || ()
            },
            (),
        );
    }

    // Page scroll stays frozen while the modal or the lightbox is up.
    {
        let overlay_open = gallery.is_overlay_open();
        use_effect_with_deps(
            move |open| {
                let lock = open.then(ScrollLock::acquire);
                move || drop(lock)
            },
            overlay_open,
        );
    }

    // Focus the close control of whichever overlay just opened.
    {
        let panel_close_ref = panel_close_ref.clone();
        let lightbox_close_ref = lightbox_close_ref.clone();
        use_effect_with_deps(
            move |view| {
                let target = match view {
                    GalleryView::ItemOpen => panel_close_ref.cast::<HtmlElement>(),
                    GalleryView::LightboxOpen => lightbox_close_ref.cast::<HtmlElement>(),
                    GalleryView::Browsing => None,
                };
                if let Some(button) = target {
                    let _ = button.focus();
                }
                || ()
            },
            view,
        );
    }

    // Keyboard: Escape closes the top-most overlay, arrows page the lightbox,
    // Tab cycles inside the top-most overlay.
    {
        let gallery = gallery.dispatcher();
        let panel_ref = panel_ref.clone();
        let lightbox_ref = lightbox_ref.clone();
        use_effect_with_deps(
            move |view| {
                let view = *view;
                let listener = if view == GalleryView::Browsing {
                    None
                } else {
                    WindowListener::attach("keydown", move |e: Event| {
                        let Some(e) = e.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        match e.key().as_str() {
                            "Escape" => gallery.dispatch(GalleryAction::Escape),
                            "ArrowRight" if view == GalleryView::LightboxOpen => {
                                gallery.dispatch(GalleryAction::Next)
                            }
                            "ArrowLeft" if view == GalleryView::LightboxOpen => {
                                gallery.dispatch(GalleryAction::Prev)
                            }
                            "Tab" => {
                                let root = if view == GalleryView::LightboxOpen {
                                    lightbox_ref.cast::<Element>()
                                } else {
                                    panel_ref.cast::<Element>()
                                };
                                if let Some(root) = root {
                                    focus_trap::trap_tab(&root, e);
                                }
                            }
                            _ => {}
                        }
                    })
                };
                move || drop(listener)
            },
            view,
        );
    }

    let apply_filter = {
        let filter = filter.clone();
        let fading = fading.clone();
        let fade_timer = fade_timer.clone();
        let grid_top_ref = grid_top_ref.clone();
        Callback::from(move |next: WorkFilter| {
            if next == *filter {
                return;
            }
            fading.set(true);
            filter.set(next);
            if let Err(e) = sync_filter_to_url(next) {
                log::warn!("Failed to update filter in url: {}", e);
            }
            if let Some(grid_top) = grid_top_ref.cast::<Element>() {
                let offset = config::HEADER_OFFSET + config::STICKY_FILTERS_OFFSET + config::SCROLL_MARGIN;
                if let Err(e) = dom::smooth_scroll_to_element(&grid_top, offset) {
                    log::warn!("Failed to scroll to grid: {}", e);
                }
            }
            let fading = fading.clone();
            *fade_timer.borrow_mut() = Some(Timeout::new(config::FILTER_FADE_MS, move || {
                fading.set(false);
            }));
        })
    };

    let open_item = {
        let gallery = gallery.dispatcher();
        Callback::from(move |item: &'static GalleryItem| gallery.dispatch(GalleryAction::OpenItem(item)))
    };
    let close_item = {
        let gallery = gallery.dispatcher();
        Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::CloseItem))
    };
    let close_lightbox = {
        let gallery = gallery.dispatcher();
        Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::CloseLightbox))
    };
    let go_prev = {
        let gallery = gallery.dispatcher();
        Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::Prev))
    };
    let go_next = {
        let gallery = gallery.dispatcher();
        Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::Next))
    };

    let on_touch_start = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some((x, y)) = touch_point(&e) {
                swipe.borrow_mut().start(e.touches().length(), x, y);
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
        let gallery = gallery.dispatcher();
        Callback::from(move |e: TouchEvent| {
            let end_x = e.changed_touches().get(0).map(|t| f64::from(t.client_x()));
            match swipe.borrow_mut().end(end_x) {
                Some(SwipeDirection::Next) => gallery.dispatch(GalleryAction::Next),
                Some(SwipeDirection::Prev) => gallery.dispatch(GalleryAction::Prev),
                None => {}
            }
        })
    };

    let visible = filter_work(*filter);
    let modal = gallery.item().map(|item| {
        let images = gallery.images();
        let body = if images.is_empty() {
            html! { <div class="coming-soon">{"Próximamente."}</div> }
        } else {
            html! {
                <div class="masonry">
                    { for images.iter().enumerate().map(|(idx, src)| {
                        let gallery = gallery.dispatcher();
                        let onclick = Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::OpenImage(idx)));
                        html! {
                            <button key={src.clone()} type="button" {onclick} aria-label={format!("Abrir foto {}", idx + 1)}>
                                <img src={src.clone()} alt={format!("{} {}", item.title, idx + 1)} loading="lazy"
                                    onerror={Callback::from(dim_broken_image)} />
                            </button>
                        }
                    }) }
                </div>
            }
        };

        let lightbox = match (gallery.current_image(), gallery.position_label()) {
            (Some(src), Some(position)) if view == GalleryView::LightboxOpen => {
                let index = gallery.lightbox_index().unwrap_or(0);
                html! {
                    <div class="lightbox" role="dialog" aria-modal="true" aria-label="Lightbox" ref={lightbox_ref.clone()}>
                        <button type="button" class="lightbox-backdrop" onclick={close_lightbox.clone()} aria-label="Cerrar lightbox" />
                        <div class="lightbox-bar">
                            <div class="lightbox-count">{position}</div>
                            <button type="button" class="round-button" ref={lightbox_close_ref.clone()}
                                onclick={close_lightbox.clone()} aria-label="Cerrar">{"✕"}</button>
                        </div>
                        <div class="lightbox-stage"
                            ontouchstart={on_touch_start.clone()}
                            ontouchmove={on_touch_move.clone()}
                            ontouchend={on_touch_end.clone()}>
                            <img src={src.to_string()} alt={format!("{} lightbox {}", item.title, index + 1)} />
                        </div>
                        if images.len() > 1 {
                            <button type="button" class="lightbox-nav prev" onclick={go_prev.clone()} aria-label="Anterior">{"‹"}</button>
                            <button type="button" class="lightbox-nav next" onclick={go_next.clone()} aria-label="Siguiente">{"›"}</button>
                        }
                        <div class="lightbox-hint">{"Usa ← → para navegar • ESC para cerrar • En móvil desliza"}</div>
                    </div>
                }
            }
            _ => html! {},
        };

        html! {
            <div class="work-modal" role="dialog" aria-modal="true" aria-label={format!("Detalle de {}", item.title)}>
                <button type="button" class="work-backdrop" onclick={close_item.clone()} aria-label="Cerrar" />
                <div class="work-panel" ref={panel_ref.clone()}>
                    <div class="work-panel-head">
                        <div>
                            <p>{format!("{} • {}", item.category.label(), item.media.label())}</p>
                            <h3>{item.title}</h3>
                        </div>
                        <button type="button" class="round-button" ref={panel_close_ref.clone()}
                            onclick={close_item.clone()} aria-label="Cerrar modal">{"✕"}</button>
                    </div>
                    <div class="work-panel-body">
                        if let Some(link) = item.link {
                            <a class="external-link" href={link} target="_blank" rel="noreferrer">
                                {"Ver link externo "}<span aria-hidden="true">{"↗"}</span>
                            </a>
                        }
                        {body}
                    </div>
                </div>
                {lightbox}
            </div>
        }
    });

    html! {
        <section id="work" class="work-section" ref={section_ref}>
            <style>{WORK_CSS}</style>
            <div class="work-inner">
                <div class="work-header">
                    <div>
                        <h2>{"Sesiones de fotos"}</h2>
                        <p>{"Selección de proyectos en fotografía."}</p>
                    </div>
                    <div class="work-filters">
                        <div class="chip-row">
                            { for WorkFilter::ALL.into_iter().map(|chip| {
                                let active = chip == *filter;
                                let apply_filter = apply_filter.clone();
                                html! {
                                    <button key={chip.label()} type="button"
                                        class={classes!("chip", active.then_some("active"))}
                                        aria-pressed={active.to_string()}
                                        onclick={Callback::from(move |_: MouseEvent| apply_filter.emit(chip))}>
                                        {chip.label()}
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                </div>

                <p class="work-count">{count_label(visible.len(), *filter)}</p>
                <div ref={grid_top_ref}></div>

                <div class={classes!("work-grid", fading.then_some("fading"))}>
                    { for visible.into_iter().map(|item| html! {
                        <WorkCard key={item.slug} {item} on_open={open_item.clone()} />
                    }) }
                </div>
            </div>
            { modal.unwrap_or_default() }
        </section>
    }
}
