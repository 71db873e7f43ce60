use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NotificationKind,
}

/// The single status message of the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationState {
    pub message: String,
    pub kind: NotificationKind,
    pub visible: bool,
    generation: u64,
}

pub enum NotificationAction {
    Show { notice: Notice, generation: u64 },
    /// Hides only if no newer message was shown since.
    Expire { generation: u64 },
}

impl Reducible for NotificationState {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NotificationAction::Show { notice, generation } => Rc::new(Self {
                message: notice.message,
                kind: notice.kind,
                visible: true,
                generation,
            }),
            NotificationAction::Expire { generation } if generation == self.generation && self.visible => {
                Rc::new(Self { visible: false, ..(*self).clone() })
            }
            NotificationAction::Expire { .. } => self,
        }
    }
}

impl NotificationState {
    pub fn class_name(&self) -> String {
        format!("notification {}", self.kind.class())
    }
}

pub struct NotificationHandle {
    pub state: UseReducerHandle<NotificationState>,
    pub show: Callback<Notice>,
}

/// Notification state plus a `show` callback. Each show replaces the pending
/// auto-hide timer, so an older timer can never hide a newer message.
#[hook]
pub fn use_notification() -> NotificationHandle {
    let state = use_reducer(NotificationState::default);
    let timer = use_mut_ref(|| None::<Timeout>);
    let generation = use_mut_ref(|| 0u64);

    let show = {
        let dispatcher = state.dispatcher();
        Callback::from(move |notice: Notice| {
            let current = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };
            dispatcher.dispatch(NotificationAction::Show { notice, generation: current });

            let expire = dispatcher.clone();
            let timeout = Timeout::new(config::NOTIFICATION_LIFETIME_MS, move || {
                expire.dispatch(NotificationAction::Expire { generation: current });
            });
            // dropping the previous Timeout cancels it
            *timer.borrow_mut() = Some(timeout);
        })
    };

    NotificationHandle { state, show }
}

#[derive(Properties, PartialEq)]
pub struct NotificationBannerProps {
    pub state: NotificationState,
}

#[function_component(NotificationBanner)]
pub fn notification_banner(props: &NotificationBannerProps) -> Html {
    let display = if props.state.visible { "display: block;" } else { "display: none;" };

    html! {
        <div id="notification" class={props.state.class_name()} style={display} role="status">
            {props.state.message.clone()}
        </div>
    }
}
