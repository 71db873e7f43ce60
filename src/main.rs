use log::info;
use yew::prelude::*;

mod config;
mod components {
    pub mod anchor_link;
    pub mod floating_button;
    pub mod lead_form;
    pub mod mobile_nav;
    pub mod notification;
    pub mod service_cards;
    pub mod site_header;
}
mod interactions {
    pub mod anchor;
    pub mod phone;
    pub mod prefill;
    pub mod scroll;
}
mod lead {
    pub mod backup;
    pub mod integrations;
    pub mod record;
    pub mod submission;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
