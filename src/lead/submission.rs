use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use log::{error, info};
use thiserror::Error;
use web_sys::FormData;

use super::backup::{BackupLog, BrowserStorage, KeyValueStore};
use super::integrations::Integrations;
use super::record::LeadPayload;
use crate::components::notification::NotificationKind;
use crate::config;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("form backend answered with status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not build form data: {0}")]
    FormData(String),
}

pub trait LeadTransport {
    fn send<'a>(&'a self, payload: &'a LeadPayload) -> LocalBoxFuture<'a, Result<(), SubmitError>>;
}

/// Posts the lead as multipart form data and asks for a JSON answer.
pub struct FormspreeTransport {
    endpoint: String,
}

impl FormspreeTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

fn to_form_data(payload: &LeadPayload) -> Result<FormData, SubmitError> {
    let form_data = FormData::new().map_err(|e| SubmitError::FormData(format!("{:?}", e)))?;
    for (name, value) in payload.fields() {
        form_data
            .append_with_str(name, value)
            .map_err(|e| SubmitError::FormData(format!("{:?}", e)))?;
    }
    Ok(form_data)
}

impl LeadTransport for FormspreeTransport {
    fn send<'a>(&'a self, payload: &'a LeadPayload) -> LocalBoxFuture<'a, Result<(), SubmitError>> {
        async move {
            let form_data = to_form_data(payload)?;
            let response = Request::post(&self.endpoint)
                .header("Accept", "application/json")
                .body(form_data)
                .send()
                .await
                .map_err(|e| SubmitError::Transport(e.to_string()))?;
            if response.ok() {
                Ok(())
            } else {
                Err(SubmitError::Status(response.status()))
            }
        }
        .boxed_local()
    }
}

/// The parts of the page a submission touches.
pub trait SubmitView {
    fn set_busy(&self, busy: bool);
    fn notify(&self, message: &str, kind: NotificationKind);
    fn reset_form(&self);
}

/// Holds the view busy until dropped, whichever branch the submission took.
struct BusyGuard<'a, V: SubmitView + ?Sized> {
    view: &'a V,
}

impl<'a, V: SubmitView + ?Sized> BusyGuard<'a, V> {
    fn enter(view: &'a V) -> Self {
        view.set_busy(true);
        Self { view }
    }
}

impl<V: SubmitView + ?Sized> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_busy(false);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    BackedUp,
}

pub struct SubmissionHandler<T, S> {
    transport: T,
    backup: BackupLog<S>,
    integrations: Integrations,
}

impl SubmissionHandler<FormspreeTransport, BrowserStorage> {
    pub fn browser(integrations: Integrations) -> Self {
        Self::new(
            FormspreeTransport::new(config::get_form_endpoint()),
            BackupLog::new(BrowserStorage, config::BACKUP_STORAGE_KEY),
            integrations,
        )
    }
}

impl<T: LeadTransport, S: KeyValueStore> SubmissionHandler<T, S> {
    pub fn new(transport: T, backup: BackupLog<S>, integrations: Integrations) -> Self {
        Self { transport, backup, integrations }
    }

    /// Sends one lead. No retry: a failed lead is reported and kept in the local backup.
    pub async fn submit<V: SubmitView + ?Sized>(&self, payload: LeadPayload, view: &V) -> SubmitOutcome {
        let _busy = BusyGuard::enter(view);

        match self.transport.send(&payload).await {
            Ok(()) => {
                info!("Lead submitted from {}", payload.page_url);
                view.notify(config::SUCCESS_MESSAGE, NotificationKind::Success);
                view.reset_form();
                self.integrations.alert.alert(&payload).await;
                self.integrations.tracker.track_lead();
                SubmitOutcome::Delivered
            }
            Err(e) => {
                error!("Lead submission failed: {}", e);
                view.notify(&config::failure_message(), NotificationKind::Error);
                self.backup.save(&payload);
                SubmitOutcome::BackedUp
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::backup::tests::MemoryStore;
    use crate::lead::integrations::{ConversionTracker, LeadAlert};
    use crate::lead::record::LeadForm;
    use futures::executor::block_on;
    use futures::future;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    enum FakeTransport {
        Accepts,
        Rejects(u16),
        Unreachable,
    }

    impl LeadTransport for FakeTransport {
        fn send<'a>(&'a self, _payload: &'a LeadPayload) -> LocalBoxFuture<'a, Result<(), SubmitError>> {
            let result = match self {
                FakeTransport::Accepts => Ok(()),
                FakeTransport::Rejects(status) => Err(SubmitError::Status(*status)),
                FakeTransport::Unreachable => Err(SubmitError::Transport("TypeError: Failed to fetch".to_string())),
            };
            future::ready(result).boxed_local()
        }
    }

    #[derive(Debug, PartialEq)]
    enum ViewEvent {
        Busy(bool),
        Notice(String, NotificationKind),
        Reset,
    }

    #[derive(Default)]
    struct RecordingView {
        events: RefCell<Vec<ViewEvent>>,
    }

    impl SubmitView for RecordingView {
        fn set_busy(&self, busy: bool) {
            self.events.borrow_mut().push(ViewEvent::Busy(busy));
        }

        fn notify(&self, message: &str, kind: NotificationKind) {
            self.events.borrow_mut().push(ViewEvent::Notice(message.to_string(), kind));
        }

        fn reset_form(&self) {
            self.events.borrow_mut().push(ViewEvent::Reset);
        }
    }

    #[derive(Default)]
    struct Counter {
        alerts: Cell<u32>,
        conversions: Cell<u32>,
    }

    impl LeadAlert for Counter {
        fn alert<'a>(&'a self, _payload: &'a LeadPayload) -> LocalBoxFuture<'a, ()> {
            self.alerts.set(self.alerts.get() + 1);
            future::ready(()).boxed_local()
        }
    }

    impl ConversionTracker for Counter {
        fn track_lead(&self) {
            self.conversions.set(self.conversions.get() + 1);
        }
    }

    fn payload() -> LeadPayload {
        LeadPayload::new(
            LeadForm {
                name: "Minh".to_string(),
                phone: "0911222333".to_string(),
                service: "sua-dien".to_string(),
                address: "5 Trần Phú".to_string(),
                message: "Chập điện".to_string(),
            },
            "https://example.vn/",
        )
    }

    fn run(transport: FakeTransport) -> (SubmitOutcome, RecordingView, MemoryStore, Rc<Counter>) {
        let store = MemoryStore::default();
        let counter = Rc::new(Counter::default());
        let integrations = Integrations { alert: counter.clone(), tracker: counter.clone() };
        let handler = SubmissionHandler::new(
            transport,
            BackupLog::new(store.clone(), "formSubmissions"),
            integrations,
        );
        let view = RecordingView::default();
        let outcome = block_on(handler.submit(payload(), &view));
        (outcome, view, store, counter)
    }

    #[test]
    fn accepted_lead_resets_form_and_skips_backup() {
        let (outcome, view, store, counter) = run(FakeTransport::Accepts);

        assert_eq!(outcome, SubmitOutcome::Delivered);
        assert_eq!(
            *view.events.borrow(),
            vec![
                ViewEvent::Busy(true),
                ViewEvent::Notice(config::SUCCESS_MESSAGE.to_string(), NotificationKind::Success),
                ViewEvent::Reset,
                ViewEvent::Busy(false),
            ]
        );
        assert!(store.get("formSubmissions").is_none());
        assert_eq!(counter.alerts.get(), 1);
        assert_eq!(counter.conversions.get(), 1);
    }

    #[test]
    fn rejected_lead_is_backed_up_once() {
        for transport in [FakeTransport::Rejects(422), FakeTransport::Unreachable] {
            let (outcome, view, store, counter) = run(transport);

            assert_eq!(outcome, SubmitOutcome::BackedUp);
            assert_eq!(
                *view.events.borrow(),
                vec![
                    ViewEvent::Busy(true),
                    ViewEvent::Notice(config::failure_message(), NotificationKind::Error),
                    ViewEvent::Busy(false),
                ]
            );

            let log: Vec<serde_json::Value> =
                serde_json::from_str(&store.get("formSubmissions").unwrap()).unwrap();
            assert_eq!(log.len(), 1);
            assert_eq!(log[0]["name"], "Minh");
            assert_eq!(log[0]["phone"], "0911222333");
            assert_eq!(log[0]["service"], "sua-dien");
            assert_eq!(log[0]["address"], "5 Trần Phú");
            assert_eq!(log[0]["message"], "Chập điện");
            assert_eq!(counter.alerts.get(), 0);
            assert_eq!(counter.conversions.get(), 0);
        }
    }

    #[test]
    fn busy_state_is_left_exactly_once() {
        for transport in [FakeTransport::Accepts, FakeTransport::Rejects(500), FakeTransport::Unreachable] {
            let (_, view, _, _) = run(transport);
            let releases = view
                .events
                .borrow()
                .iter()
                .filter(|event| **event == ViewEvent::Busy(false))
                .count();
            assert_eq!(releases, 1);
        }
    }
}
