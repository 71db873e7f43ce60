use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config;

/// Values the visitor typed into the lead form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadForm {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub address: String,
    pub message: String,
}

/// What gets posted to the form backend: the form plus submit-time metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadPayload {
    pub form: LeadForm,
    pub timestamp: String,
    pub source: String,
    pub page_url: String,
}

impl LeadPayload {
    pub fn new(form: LeadForm, page_url: impl Into<String>) -> Self {
        Self {
            form,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            source: config::SUBMISSION_SOURCE.to_string(),
            page_url: page_url.into(),
        }
    }

    /// Multipart field names and values, in the order they are appended.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.form.name.as_str()),
            ("phone", self.form.phone.as_str()),
            ("service", self.form.service.as_str()),
            ("address", self.form.address.as_str()),
            ("message", self.form.message.as_str()),
            ("_timestamp", self.timestamp.as_str()),
            ("_source", self.source.as_str()),
            ("_page", self.page_url.as_str()),
        ]
    }
}

/// One entry of the local backup log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackupRecord {
    pub timestamp: String,
    pub name: String,
    pub phone: String,
    pub service: String,
    pub address: String,
    pub message: String,
}

impl From<&LeadPayload> for BackupRecord {
    fn from(payload: &LeadPayload) -> Self {
        Self {
            timestamp: payload.timestamp.clone(),
            name: payload.form.name.clone(),
            phone: payload.form.phone.clone(),
            service: payload.form.service.clone(),
            address: payload.form.address.clone(),
            message: payload.form.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn sample_form() -> LeadForm {
        LeadForm {
            name: "Nguyễn Văn A".to_string(),
            phone: "0911222333".to_string(),
            service: "sua-dien".to_string(),
            address: "12 Lê Lợi".to_string(),
            message: "Mất điện tầng 2".to_string(),
        }
    }

    #[test]
    fn payload_injects_metadata_fields() {
        let payload = LeadPayload::new(sample_form(), "https://example.vn/?phone=1");
        let fields = payload.fields();

        assert_eq!(fields.len(), 8);
        assert!(fields.contains(&("_source", "website")));
        assert!(fields.contains(&("_page", "https://example.vn/?phone=1")));
        let (_, timestamp) = fields.iter().find(|(k, _)| *k == "_timestamp").unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
        assert!(timestamp.ends_with('Z'));
    }

    #[test]
    fn backup_record_keeps_known_fields_only() {
        let payload = LeadPayload::new(sample_form(), "https://example.vn/");
        let record = BackupRecord::from(&payload);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["phone"], "0911222333");
        assert_eq!(json["timestamp"], payload.timestamp.as_str());
        assert!(json.get("page_url").is_none());
        assert!(json.get("source").is_none());
    }
}
