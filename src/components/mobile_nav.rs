use log::warn;
use web_sys::window;
use yew::prelude::*;

use super::anchor_link::AnchorLink;

pub const NAV_LINKS: [(&str, &str); 4] = [
    ("#services", "Dịch vụ"),
    ("#why-us", "Vì sao chọn chúng tôi"),
    ("#contact", "Đặt lịch"),
    ("#footer", "Liên hệ"),
];

pub fn body_overflow(locked: bool) -> &'static str {
    if locked {
        "hidden"
    } else {
        ""
    }
}

/// Disables page scrolling while the drawer is open.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    if let Err(e) = body.style().set_property("overflow", body_overflow(locked)) {
        warn!("Failed to toggle body scroll lock: {:?}", e);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerAction {
    Open,
    Close,
}

/// Drawer state after `action`. Opening an open drawer or closing a closed
/// one changes nothing.
pub fn drawer_after(_open: bool, action: DrawerAction) -> bool {
    action == DrawerAction::Open
}

pub struct MobileNav {
    pub is_open: bool,
    pub open: Callback<()>,
    pub close: Callback<()>,
}

/// Drawer open state with the body scroll lock kept in step.
#[hook]
pub fn use_mobile_nav() -> MobileNav {
    let open = use_state(|| false);
    {
        use_effect_with_deps(
            move |open| {
                set_body_scroll_locked(*open);
                || ()
            },
            *open,
        );
    }

    let dispatch = |action: DrawerAction| {
        let open = open.clone();
        Callback::from(move |_: ()| {
            let next = drawer_after(*open, action);
            if next != *open {
                open.set(next);
            }
        })
    };

    MobileNav {
        is_open: *open,
        open: dispatch(DrawerAction::Open),
        close: dispatch(DrawerAction::Close),
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };
    let active = props.open.then_some("active");

    html! {
        <>
            <div class={classes!("overlay", active)} onclick={close.clone()}></div>
            <aside class={classes!("mobile-menu", active)}>
                <button class="mobile-menu-close" aria-label="Đóng menu" onclick={close}>
                    {"✕"}
                </button>
                <nav class="mobile-menu-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <AnchorLink href={*href} on_navigate={props.on_close.clone()}>
                            {*label}
                        </AnchorLink>
                    }) }
                </nav>
            </aside>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_lock_maps_to_overflow() {
        assert_eq!(body_overflow(true), "hidden");
        assert_eq!(body_overflow(false), "");
    }

    #[test]
    fn open_and_close_are_idempotent() {
        assert!(drawer_after(false, DrawerAction::Open));
        assert!(drawer_after(true, DrawerAction::Open));
        assert!(!drawer_after(true, DrawerAction::Close));
        assert!(!drawer_after(false, DrawerAction::Close));
    }

    #[test]
    fn nav_links_are_in_page_anchors() {
        for (href, _) in NAV_LINKS {
            assert!(crate::interactions::anchor::anchor_target(href).is_some());
        }
    }
}
