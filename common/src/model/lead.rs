use serde::Serialize;

/// Contact-form payload posted to the operator-configured webhook.
///
/// One JSON key per form field. The project-type checkboxes are joined
/// into a single comma-separated string before the record is built, so
/// the receiving sheet sees a flat row of scalars.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub industry: String,
    pub project_type: String,
    pub message: String,
}

/// Outcome of a lead submission. Delivery is opaque: the webhook response
/// body is never read, so `Delivered` only means the request went out
/// without a transport error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryResult {
    Delivered,
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::LeadSubmission;

    #[test]
    fn serializes_one_key_per_form_field() {
        let lead = LeadSubmission {
            name: "Ada".into(),
            email: "ada@x.com".into(),
            company: "Acme".into(),
            message: "Hi".into(),
            ..Default::default()
        };
        let json: serde_json::Value = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@x.com");
        assert_eq!(json["company"], "Acme");
        assert_eq!(json["message"], "Hi");
        assert_eq!(json["projectType"], "");
    }
}
