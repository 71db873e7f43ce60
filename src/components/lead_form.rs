use std::rc::Rc;

use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::notification::{Notice, NotificationKind};
use crate::config;
use crate::interactions::phone::sanitize_phone;
use crate::interactions::prefill::Prefill;
use crate::lead::integrations::Integrations;
use crate::lead::record::{LeadForm, LeadPayload};
use crate::lead::submission::{SubmissionHandler, SubmitView};

pub const SERVICE_OPTIONS: [(&str, &str); 4] = [
    ("sua-dien", "Sửa điện"),
    ("sua-nuoc", "Sửa nước"),
    ("dien-lanh", "Điện lạnh"),
    ("khac", "Khác"),
];

fn service_values() -> Vec<&'static str> {
    SERVICE_OPTIONS.iter().map(|(value, _)| *value).collect()
}

fn prefilled_form(prefill: &Prefill) -> LeadForm {
    let mut form = LeadForm::default();
    prefill.apply(&mut form, &service_values());
    form
}

/// State handles a submission writes to after the request settles.
struct FormHandles {
    busy: UseStateHandle<bool>,
    form: UseStateHandle<LeadForm>,
    on_notify: Callback<Notice>,
}

impl SubmitView for FormHandles {
    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    fn notify(&self, message: &str, kind: NotificationKind) {
        self.on_notify.emit(Notice { message: message.to_string(), kind });
    }

    fn reset_form(&self) {
        self.form.set(LeadForm::default());
    }
}

fn page_url() -> String {
    window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

fn field_setter(form: &UseStateHandle<LeadForm>, apply: fn(&mut LeadForm, String)) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |value: String| {
        let mut next = (*form).clone();
        apply(&mut next, value);
        form.set(next);
    })
}

#[derive(Properties, PartialEq)]
pub struct LeadFormSectionProps {
    pub on_notify: Callback<Notice>,
}

#[function_component(LeadFormSection)]
pub fn lead_form_section(props: &LeadFormSectionProps) -> Html {
    let phone_param = use_search_param("phone".to_string());
    let service_param = use_search_param("service".to_string());
    let form = use_state(move || prefilled_form(&Prefill::new(phone_param, service_param)));
    let busy = use_state(|| false);
    let handler = use_memo(|_| SubmissionHandler::browser(Integrations::detect()), ());

    let set_name = field_setter(&form, |f, v| f.name = v);
    let set_phone = field_setter(&form, |f, v| f.phone = v);
    let set_service = field_setter(&form, |f, v| f.service = v);
    let set_address = field_setter(&form, |f, v| f.address = v);
    let set_message = field_setter(&form, |f, v| f.message = v);

    let on_name = Callback::from(move |e: InputEvent| {
        set_name.emit(e.target_unchecked_into::<HtmlInputElement>().value());
    });
    let on_phone = Callback::from(move |e: InputEvent| {
        let input = e.target_unchecked_into::<HtmlInputElement>();
        let raw = input.value();
        let digits = sanitize_phone(&raw);
        if digits != raw {
            input.set_value(&digits);
        }
        set_phone.emit(digits);
    });
    let on_service = Callback::from(move |e: Event| {
        set_service.emit(e.target_unchecked_into::<HtmlSelectElement>().value());
    });
    let on_address = Callback::from(move |e: InputEvent| {
        set_address.emit(e.target_unchecked_into::<HtmlInputElement>().value());
    });
    let on_message = Callback::from(move |e: InputEvent| {
        set_message.emit(e.target_unchecked_into::<HtmlTextAreaElement>().value());
    });

    let onsubmit = {
        let form = form.clone();
        let busy = busy.clone();
        let handler = handler.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = LeadPayload::new((*form).clone(), page_url());
            let view = FormHandles { busy: busy.clone(), form: form.clone(), on_notify: on_notify.clone() };
            let handler: Rc<_> = handler.clone();
            spawn_local(async move {
                let outcome = handler.submit(payload, &view).await;
                debug!("Submission finished: {:?}", outcome);
            });
        })
    };

    let label = if *busy { config::SUBMIT_BUSY_LABEL } else { config::SUBMIT_LABEL };
    let spinner_style = if *busy { "display: block;" } else { "display: none;" };

    html! {
        <section id="contact" class="contact">
            <h2 class="section-title">{"Đặt lịch sửa chữa"}</h2>
            <form id="serviceForm" class="service-form" {onsubmit}>
                <input
                    id="name"
                    name="name"
                    type="text"
                    placeholder="Họ và tên"
                    required=true
                    value={form.name.clone()}
                    oninput={on_name}
                />
                <input
                    id="phone"
                    name="phone"
                    type="tel"
                    inputmode="numeric"
                    placeholder="Số điện thoại"
                    required=true
                    value={form.phone.clone()}
                    oninput={on_phone}
                />
                <select id="service" name="service" onchange={on_service}>
                    <option value="" selected={form.service.is_empty()}>{"Chọn dịch vụ"}</option>
                    { for SERVICE_OPTIONS.iter().map(|(value, label)| html! {
                        <option value={*value} selected={form.service == *value}>{*label}</option>
                    }) }
                </select>
                <input
                    id="address"
                    name="address"
                    type="text"
                    placeholder="Địa chỉ"
                    value={form.address.clone()}
                    oninput={on_address}
                />
                <textarea
                    id="message"
                    name="message"
                    placeholder="Mô tả sự cố"
                    value={form.message.clone()}
                    oninput={on_message}
                />
                <button type="submit" class="submit-btn" disabled={*busy}>
                    <span class="btn-text">{label}</span>
                    <span class="spinner" style={spinner_style}></span>
                </button>
            </form>
        </section>
    }
}
