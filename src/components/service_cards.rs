use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::interactions::scroll::RevealSet;

pub const SERVICES: [(&str, &str, &str); 4] = [
    ("⚡", "Sửa điện", "Chập cháy, mất điện, lắp đặt ổ cắm và đèn tận nơi."),
    ("🚿", "Sửa nước", "Rò rỉ, tắc nghẽn, thay vòi và thiết bị vệ sinh."),
    ("❄️", "Điện lạnh", "Vệ sinh, nạp gas, sửa máy lạnh và tủ lạnh."),
    ("🔧", "Sửa chữa khác", "Khoan tường, lắp kệ, bảo trì nhà cửa định kỳ."),
];

pub enum RevealAction {
    Card(usize),
    Passed { card_tops: Vec<Option<f64>>, viewport_height: f64 },
}

impl Reducible for RevealSet {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            RevealAction::Card(index) => next.reveal(index),
            RevealAction::Passed { card_tops, viewport_height } => {
                next.reveal_passed(&card_tops, viewport_height)
            }
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[function_component(ServiceCards)]
pub fn service_cards() -> Html {
    let revealed = use_reducer(|| RevealSet::new(SERVICES.len()));
    let card_refs = use_memo(|_| SERVICES.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(), ());

    // Staggered reveal on first render.
    {
        let dispatcher = revealed.dispatcher();
        use_effect_with_deps(move |_| {
            let timeouts: Vec<Timeout> = (0..SERVICES.len())
                .map(|index| {
                    let dispatcher = dispatcher.clone();
                    Timeout::new(index as u32 * config::CARD_STAGGER_MS, move || {
                        dispatcher.dispatch(RevealAction::Card(index));
                    })
                })
                .collect();
            move || drop(timeouts)
        }, ());
    }

    {
        let dispatcher = revealed.dispatcher();
        let card_refs = card_refs.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().map(|window| {
                Closure::wrap(Box::new(move || {
                    let viewport_height = window.inner_height().ok().and_then(|h| h.as_f64());
                    let Some(viewport_height) = viewport_height else {
                        return;
                    };
                    let card_tops = card_refs
                        .iter()
                        .map(|node| node.cast::<Element>().map(|card| card.get_bounding_client_rect().top()))
                        .collect();
                    dispatcher.dispatch(RevealAction::Passed { card_tops, viewport_height });
                }) as Box<dyn FnMut()>)
            });

            if let (Some(window), Some(listener)) = (&window, &listener) {
                if let Err(e) = window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref()) {
                    warn!("Failed to attach card scroll listener: {:?}", e);
                }
            }

            move || {
                if let (Some(window), Some(listener)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    html! {
        <section id="services" class="services">
            <h2 class="section-title">{"Dịch vụ của chúng tôi"}</h2>
            <div class="services-grid">
                { for SERVICES.iter().enumerate().map(|(index, (icon, title, description))| html! {
                    <div
                        ref={card_refs[index].clone()}
                        class={classes!("service-card", revealed.is_revealed(index).then(|| "visible"))}
                    >
                        <div class="service-icon">{*icon}</div>
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_reveals_keep_the_same_state() {
        let state = Rc::new(RevealSet::new(SERVICES.len()));
        let next = state.clone().reduce(RevealAction::Passed {
            card_tops: vec![Some(2000.0); SERVICES.len()],
            viewport_height: 800.0,
        });
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn stagger_and_scroll_reveals_combine() {
        let state = Rc::new(RevealSet::new(SERVICES.len()));
        let state = state.reduce(RevealAction::Card(0));
        let state = state.reduce(RevealAction::Passed {
            card_tops: vec![Some(2000.0), Some(300.0), None, Some(2000.0)],
            viewport_height: 800.0,
        });

        assert!(state.is_revealed(0));
        assert!(state.is_revealed(1));
        assert!(!state.is_revealed(2));
        assert!(!state.is_revealed(3));
    }
}
