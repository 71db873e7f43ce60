use crate::lead::record::LeadForm;

/// Form values carried in the page URL (`?phone=...&service=...`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Prefill {
    pub phone: Option<String>,
    pub service: Option<String>,
}

impl Prefill {
    /// Empty parameters count as absent.
    pub fn new(phone: Option<String>, service: Option<String>) -> Self {
        Self {
            phone: phone.filter(|v| !v.is_empty()),
            service: service.filter(|v| !v.is_empty()),
        }
    }

    /// Copies present values verbatim; absent ones leave the field as it was.
    ///
    /// `service` lands in a select, so a value outside `service_options`
    /// selects nothing and leaves the field empty.
    pub fn apply(&self, form: &mut LeadForm, service_options: &[&str]) {
        if let Some(phone) = &self.phone {
            form.phone = phone.clone();
        }
        if let Some(service) = &self.service {
            form.service = if service_options.contains(&service.as_str()) {
                service.clone()
            } else {
                String::new()
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: [&str; 2] = ["sua-dien", "dien-lanh"];

    #[test]
    fn phone_parameter_is_copied_verbatim() {
        let mut form = LeadForm::default();
        Prefill::new(Some("0911222333".to_string()), None).apply(&mut form, &OPTIONS);

        assert_eq!(form.phone, "0911222333");
        assert_eq!(form.service, "");
    }

    #[test]
    fn phone_is_not_sanitized() {
        let mut form = LeadForm::default();
        Prefill::new(Some("+84 91".to_string()), None).apply(&mut form, &OPTIONS);

        assert_eq!(form.phone, "+84 91");
    }

    #[test]
    fn known_service_is_selected() {
        let mut form = LeadForm::default();
        Prefill::new(None, Some("dien-lanh".to_string())).apply(&mut form, &OPTIONS);

        assert_eq!(form.service, "dien-lanh");
    }

    #[test]
    fn unknown_service_selects_nothing() {
        let mut form = LeadForm { service: "sua-dien".to_string(), ..Default::default() };
        Prefill::new(None, Some("unknown".to_string())).apply(&mut form, &OPTIONS);

        assert_eq!(form.service, "");
    }

    #[test]
    fn absent_or_empty_parameters_leave_fields_untouched() {
        let mut form = LeadForm {
            phone: "0909".to_string(),
            service: "sua-dien".to_string(),
            ..Default::default()
        };
        Prefill::new(Some(String::new()), None).apply(&mut form, &OPTIONS);

        assert_eq!(form.phone, "0909");
        assert_eq!(form.service, "sua-dien");
    }
}
