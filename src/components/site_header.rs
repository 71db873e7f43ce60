use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::anchor_link::AnchorLink;
use super::mobile_nav::NAV_LINKS;
use crate::config;
use crate::interactions::scroll::header_is_scrolled;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub on_open_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().map(|window| {
                Closure::wrap(Box::new(move || {
                    if let Ok(scroll_y) = window.scroll_y() {
                        is_scrolled.set(header_is_scrolled(scroll_y));
                    }
                }) as Box<dyn FnMut()>)
            });

            if let (Some(window), Some(listener)) = (&window, &listener) {
                if let Err(e) = window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref()) {
                    warn!("Failed to attach header scroll listener: {:?}", e);
                }
            }

            move || {
                if let (Some(window), Some(listener)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let open_menu = {
        let on_open_menu = props.on_open_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_open_menu.emit(());
        })
    };

    html! {
        <header class={classes!("header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-content">
                <a href="#" class="logo">{"Thợ Nhà 24h"}</a>
                <nav class="header-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <AnchorLink href={*href} on_navigate={props.on_close_menu.clone()}>{*label}</AnchorLink>
                    }) }
                </nav>
                <a href={config::HOTLINE_TEL} class="header-hotline">{config::HOTLINE}</a>
                <button class="mobile-menu-btn" aria-label="Mở menu" onclick={open_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </header>
    }
}
