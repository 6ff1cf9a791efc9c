use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};
use yew::prelude::*;

use crate::config;
use crate::error::SiteResult;
use crate::models::site_models::{active_section, SectionId};
use crate::utils::dom::{self, WindowListener};
use crate::utils::scroll_lock::ScrollLock;
use crate::utils::settle::SettleGate;

const TOPBAR_CSS: &str = r#"
    .topbar { position: fixed; top: 0; left: 0; right: 0; z-index: 50; background: rgba(0,0,0,0.4);
        backdrop-filter: blur(8px); border-bottom: 1px solid rgba(255,255,255,0.1); }
    .topbar-inner { margin: 0 auto; padding: 0 1.5rem; height: 64px; display: grid;
        grid-template-columns: repeat(3, 1fr); align-items: center; }
    .brand-link { display: flex; align-items: center; gap: 0.75rem; color: #fff; text-decoration: none; }
    .brand-mark { font-size: 0.75rem; letter-spacing: 0.45em; font-weight: 500; color: rgba(255,255,255,0.8); }
    .brand-text { display: none; line-height: 1.2; }
    .brand-text p { margin: 0; }
    .brand-text .name { font-size: 0.875rem; font-weight: 600; }
    .brand-text .role { font-size: 0.75rem; color: rgba(255,255,255,0.5); }
    .topbar-center { display: flex; justify-content: center; }
    .desktop-nav { display: none; gap: 2.5rem; font-size: 0.875rem; }
    .desktop-nav a { position: relative; color: rgba(255,255,255,0.7); text-decoration: none; }
    .desktop-nav a.active { color: #fff; }
    .desktop-nav a .underline { pointer-events: none; position: absolute; bottom: -0.5rem; left: 50%;
        transform: translateX(-50%); height: 2px; width: 0; border-radius: 999px; transition: all 300ms; }
    .desktop-nav a.active .underline { width: 2rem; background: rgba(255,255,255,0.8); }
    .pill { display: inline-flex; align-items: center; gap: 0.5rem; border-radius: 999px; padding: 0.5rem 0.875rem;
        border: 1px solid rgba(255,255,255,0.15); background: rgba(0,0,0,0.3); color: rgba(255,255,255,0.85);
        font-size: 0.75rem; }
    .pill .dot { width: 6px; height: 6px; border-radius: 999px; background: rgba(255,255,255,0.7); }
    .pill .current { max-width: 130px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
    .topbar-right { display: flex; justify-content: flex-end; align-items: center; gap: 0.75rem; }
    .cta { display: none; padding: 0.5rem 1rem; border-radius: 999px; background: #fff; color: #000;
        font-size: 0.875rem; font-weight: 500; text-decoration: none; }
    .mobile-menu { position: fixed; inset: 0; z-index: 60; }
    .mobile-menu-backdrop { position: absolute; inset: 0; border: 0; background: rgba(0,0,0,0.6); }
    .mobile-menu-panel { position: absolute; top: 0; left: 0; right: 0; padding-top: 64px; }
    .mobile-menu-card { margin: 1rem 1rem 0; border-radius: 1.5rem; border: 1px solid rgba(255,255,255,0.1);
        background: rgba(0,0,0,0.7); backdrop-filter: blur(24px); overflow: hidden; }
    .mobile-menu-head { display: flex; align-items: center; justify-content: space-between; padding: 1rem 1.25rem;
        border-bottom: 1px solid rgba(255,255,255,0.1); }
    .mobile-menu-head p { margin: 0; font-size: 0.875rem; color: rgba(255,255,255,0.8); }
    .mobile-menu-body { padding: 1rem 1.25rem; }
    .mobile-links { display: grid; gap: 0.5rem; }
    .mobile-links a { display: flex; justify-content: space-between; border-radius: 1rem; padding: 0.75rem 1rem;
        border: 1px solid rgba(255,255,255,0.1); background: rgba(255,255,255,0.05); color: rgba(255,255,255,0.85);
        text-decoration: none; font-weight: 500; }
    .mobile-links a.active { background: #fff; color: #000; border-color: #fff; }
    .mobile-cta { margin-top: 1rem; width: 100%; border: 0; border-radius: 1rem; background: #fff; color: #000;
        padding: 1rem 1.25rem; font-weight: 600; }
    .mobile-location { margin: 1rem 0 0; font-size: 0.75rem; color: rgba(255,255,255,0.45); text-align: center; }
    @media (min-width: 640px) { .brand-text { display: block; } }
    @media (min-width: 768px) {
        .desktop-nav { display: flex; }
        .cta { display: inline-flex; }
        .pill { display: none; }
        .mobile-menu { display: none; }
    }
"#;

fn section_offsets() -> Vec<(SectionId, Option<f64>)> {
    SectionId::ALL
        .iter()
        .map(|&id| {
            let top = dom::element_by_id(id.id())
                .ok()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map(|el| f64::from(el.offset_top()));
            (id, top)
        })
        .collect()
}

fn section_from_scroll() -> SiteResult<SectionId> {
    let reading_point = dom::window()?.scroll_y()? + config::HEADER_OFFSET + config::ACTIVE_SECTION_PROBE;
    Ok(active_section(reading_point, &section_offsets()))
}

fn update_gate(gate: &Cell<SettleGate>, f: impl FnOnce(&mut SettleGate)) {
    let mut next = gate.get();
    f(&mut next);
    gate.set(next);
}

/// Shared handle on the settle gate plus the timer that releases it. Each
/// click replaces the timer; dropping the last handle cancels it.
#[derive(Clone, Default)]
struct SettleLock {
    gate: Rc<Cell<SettleGate>>,
    timer: Rc<RefCell<Option<Timeout>>>,
}

impl SettleLock {
    fn engage(&self) {
        update_gate(&self.gate, SettleGate::engage);
        let gate = self.gate.clone();
        let timer = Timeout::new(config::NAV_SETTLE_MS, move || update_gate(&gate, SettleGate::release));
        *self.timer.borrow_mut() = Some(timer);
    }

    fn allows_tracking(&self) -> bool {
        self.gate.get().allows_tracking(ScrollLock::is_engaged())
    }
}

fn scroll_to_section(id: SectionId) -> SiteResult<()> {
    let target = dom::element_by_id(id.id())?;
    dom::smooth_scroll_to_element(&target, config::HEADER_OFFSET + config::SCROLL_MARGIN)?;
    dom::replace_url(&id.href())
}

#[function_component(TopBar)]
pub fn top_bar() -> Html {
    let active = use_state(SectionId::default);
    let menu_open = use_state(|| false);
    let settle = use_mut_ref(SettleLock::default);

    {
        let active = active.clone();
        let settle = settle.borrow().clone();
        use_effect_with_deps(
            move |_| {
                let update = Rc::new(move || {
                    if !settle.allows_tracking() {
                        return;
                    }
                    match section_from_scroll() {
                        Ok(section) => active.set(section),
                        Err(e) => log::warn!("Failed to read scroll position: {}", e),
                    }
                });
                update();
                let on_scroll = update.clone();
                let listeners = [
                    WindowListener::attach("scroll", move |_: Event| on_scroll()),
                    WindowListener::attach("resize", move |_: Event| update()),
                ];
                move || drop(listeners)
            },
            (),
        );
    }

    // Open menu: the page stays frozen underneath, and the menu closes when
    // the viewport becomes desktop-sized.
    {
        let open = *menu_open;
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |open| {
                let listener = open.then(|| {
                    WindowListener::attach("resize", move |_: Event| {
                        let width = dom::window()
                            .ok()
                            .and_then(|w| w.inner_width().ok())
                            .and_then(|w| w.as_f64())
                            .unwrap_or(0.0);
                        if width >= config::DESKTOP_MIN_WIDTH {
                            menu_open.set(false);
                        }
                    })
                })
                .flatten();
                let lock = open.then(ScrollLock::acquire);
                move || {
                    drop(listener);
                    drop(lock);
                }
            },
            open,
        );
    }

    let go_to = {
        let active = active.clone();
        let menu_open = menu_open.clone();
        let settle = settle.borrow().clone();
        Callback::from(move |id: SectionId| {
            settle.engage();
            active.set(id);
            if *menu_open {
                menu_open.set(false);
                // Let the menu release the page before measuring it.
                Timeout::new(0, move || {
                    if let Err(e) = scroll_to_section(id) {
                        log::warn!("Failed to scroll to #{}: {}", id.id(), e);
                    }
                })
                .forget();
            } else if let Err(e) = scroll_to_section(id) {
                log::warn!("Failed to scroll to #{}: {}", id.id(), e);
            }
        })
    };

    let nav_link = |id: SectionId| {
        let go_to = go_to.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            go_to.emit(id);
        })
    };

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(true))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let current = *active;
    let (cta_target, cta_label) = current.call_to_action();
    let cta_click = {
        let go_to = go_to.clone();
        Callback::from(move |_: MouseEvent| go_to.emit(cta_target))
    };

    html! {
        <header class="topbar">
            <style>{TOPBAR_CSS}</style>
            <div class="topbar-inner">
                <div>
                    <a class="brand-link" href={SectionId::Home.href()} onclick={nav_link(SectionId::Home)}>
                        <span class="brand-mark">{"DNG"}</span>
                        <div class="brand-text">
                            <p class="name">{config::OWNER_NAME}</p>
                            <p class="role">{"Filmmaker & Photographer"}</p>
                        </div>
                    </a>
                </div>

                <div class="topbar-center">
                    <nav class="desktop-nav">
                        { for SectionId::ALL.iter().map(|&id| {
                            let is_active = id == current;
                            html! {
                                <a key={id.id()} href={id.href()} class={classes!(is_active.then_some("active"))}
                                    aria-current={is_active.then_some("page")} onclick={nav_link(id)}>
                                    {id.label()}
                                    <span class="underline"></span>
                                </a>
                            }
                        }) }
                    </nav>
                    <button type="button" class="pill" onclick={open_menu.clone()} aria-haspopup="dialog"
                        aria-expanded={menu_open.to_string()} aria-controls="mobile-menu">
                        <span class="dot"></span>
                        <span class="current">{current.label()}</span>
                        <span>{"▾"}</span>
                    </button>
                </div>

                <div class="topbar-right">
                    <a class="cta" href={cta_target.href()} onclick={nav_link(cta_target)}>{cta_label}</a>
                    <button type="button" class="pill" onclick={open_menu}>{"Menú"}</button>
                </div>
            </div>

            if *menu_open {
                <div class="mobile-menu" role="dialog" aria-modal="true" id="mobile-menu">
                    <button type="button" class="mobile-menu-backdrop" aria-label="Cerrar menú" onclick={close_menu.clone()} />
                    <div class="mobile-menu-panel">
                        <div class="mobile-menu-card">
                            <div class="mobile-menu-head">
                                <p>{"Navegación"}</p>
                                <button type="button" class="pill" onclick={close_menu}>{"Cerrar"}</button>
                            </div>
                            <div class="mobile-menu-body">
                                <div class="mobile-links">
                                    { for SectionId::ALL.iter().map(|&id| {
                                        let is_active = id == current;
                                        html! {
                                            <a key={id.id()} href={id.href()} class={classes!(is_active.then_some("active"))}
                                                aria-current={is_active.then_some("page")} onclick={nav_link(id)}>
                                                <span>{id.label()}</span>
                                                <span>{"→"}</span>
                                            </a>
                                        }
                                    }) }
                                </div>
                                <button type="button" class="mobile-cta" onclick={cta_click}>{cta_label}</button>
                                <p class="mobile-location">{config::LOCATION_LINE}</p>
                            </div>
                        </div>
                    </div>
                </div>
            }
        </header>
    }
}
