use std::rc::Rc;

use futures::future::{self, FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};

use super::record::LeadPayload;
use crate::config::{self, TelegramConfig};

/// Side-channel notification sent after a lead reached the form backend.
pub trait LeadAlert {
    fn alert<'a>(&'a self, payload: &'a LeadPayload) -> LocalBoxFuture<'a, ()>;
}

/// Analytics conversion hook.
pub trait ConversionTracker {
    fn track_lead(&self);
}

pub struct NoopAlert;

impl LeadAlert for NoopAlert {
    fn alert<'a>(&'a self, _payload: &'a LeadPayload) -> LocalBoxFuture<'a, ()> {
        future::ready(()).boxed_local()
    }
}

pub struct NoopTracker;

impl ConversionTracker for NoopTracker {
    fn track_lead(&self) {}
}

#[derive(Serialize)]
struct TelegramMessage<'a> {
    chat_id: &'a str,
    text: String,
}

pub fn alert_text(payload: &LeadPayload) -> String {
    format!(
        "📞 YÊU CẦU MỚI:\nTên: {}\nSĐT: {}\nDịch vụ: {}",
        payload.form.name, payload.form.phone, payload.form.service
    )
}

pub struct TelegramAlert {
    config: TelegramConfig,
}

impl TelegramAlert {
    pub fn new(config: TelegramConfig) -> Self {
        Self { config }
    }
}

impl LeadAlert for TelegramAlert {
    fn alert<'a>(&'a self, payload: &'a LeadPayload) -> LocalBoxFuture<'a, ()> {
        async move {
            let url = format!("https://api.telegram.org/bot{}/sendMessage", self.config.bot_token);
            let body = TelegramMessage { chat_id: self.config.chat_id, text: alert_text(payload) };
            let request = match Request::post(&url).json(&body) {
                Ok(request) => request,
                Err(e) => {
                    warn!("Telegram alert failed: {}", e);
                    return;
                }
            };
            match request.send().await {
                Ok(response) if response.ok() => debug!("Telegram alert sent"),
                Ok(response) => warn!("Telegram alert failed with status: {}", response.status()),
                Err(e) => warn!("Telegram alert failed: {}", e),
            }
        }
        .boxed_local()
    }
}

#[derive(Serialize)]
struct ConversionEvent<'a> {
    send_to: &'a str,
}

/// Facebook Pixel and Google Ads conversion calls, for whichever globals the page loaded.
pub struct PixelTracker {
    fbq: Option<Function>,
    gtag: Option<Function>,
}

impl PixelTracker {
    pub fn detect() -> Self {
        Self { fbq: global_function("fbq"), gtag: global_function("gtag") }
    }

    pub fn is_empty(&self) -> bool {
        self.fbq.is_none() && self.gtag.is_none()
    }
}

fn global_function(name: &str) -> Option<Function> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

impl ConversionTracker for PixelTracker {
    fn track_lead(&self) {
        if let Some(fbq) = &self.fbq {
            if let Err(e) = fbq.call2(&JsValue::NULL, &"track".into(), &"Lead".into()) {
                warn!("fbq call failed: {:?}", e);
            }
        }
        if let Some(gtag) = &self.gtag {
            let event = match serde_wasm_bindgen::to_value(&ConversionEvent {
                send_to: config::CONVERSION_SEND_TO,
            }) {
                Ok(event) => event,
                Err(e) => {
                    warn!("Failed to encode conversion event: {}", e);
                    return;
                }
            };
            if let Err(e) = gtag.call3(&JsValue::NULL, &"event".into(), &"conversion".into(), &event) {
                warn!("gtag call failed: {:?}", e);
            }
        }
    }
}

/// Optional hooks, chosen once when the page is composed.
#[derive(Clone)]
pub struct Integrations {
    pub alert: Rc<dyn LeadAlert>,
    pub tracker: Rc<dyn ConversionTracker>,
}

impl Default for Integrations {
    fn default() -> Self {
        Self { alert: Rc::new(NoopAlert), tracker: Rc::new(NoopTracker) }
    }
}

impl Integrations {
    pub fn detect() -> Self {
        let alert: Rc<dyn LeadAlert> = match config::get_telegram_config() {
            Some(telegram) => Rc::new(TelegramAlert::new(telegram)),
            None => Rc::new(NoopAlert),
        };
        let pixels = PixelTracker::detect();
        let tracker: Rc<dyn ConversionTracker> = if pixels.is_empty() {
            debug!("No analytics globals found, conversion tracking disabled");
            Rc::new(NoopTracker)
        } else {
            Rc::new(pixels)
        };
        Self { alert, tracker }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::record::LeadForm;

    #[test]
    fn alert_text_lists_contact_fields() {
        let payload = LeadPayload::new(
            LeadForm {
                name: "Lan".to_string(),
                phone: "0911222333".to_string(),
                service: "sua-nuoc".to_string(),
                ..Default::default()
            },
            "https://example.vn/",
        );

        assert_eq!(
            alert_text(&payload),
            "📞 YÊU CẦU MỚI:\nTên: Lan\nSĐT: 0911222333\nDịch vụ: sua-nuoc"
        );
    }

    #[test]
    fn default_hooks_are_noops() {
        let integrations = Integrations::default();
        let payload = LeadPayload::new(LeadForm::default(), "");
        futures::executor::block_on(integrations.alert.alert(&payload));
        integrations.tracker.track_lead();
    }
}
