//! Support/contact form model and relay payload.

use crate::forms::validation::{is_valid_email, ValidationIssue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Why the visitor is reaching out. Closed set, mirrored in the page copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactReason {
    PasswordRecovery,
    AccountDeletion,
    TechnicalIssue,
    GeneralInquiry,
    FeatureRequest,
    PrivacyConcern,
    Other,
}

impl ContactReason {
    pub const ALL: [ContactReason; 7] = [
        ContactReason::PasswordRecovery,
        ContactReason::AccountDeletion,
        ContactReason::TechnicalIssue,
        ContactReason::GeneralInquiry,
        ContactReason::FeatureRequest,
        ContactReason::PrivacyConcern,
        ContactReason::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactReason::PasswordRecovery => "password_recovery",
            ContactReason::AccountDeletion => "account_deletion",
            ContactReason::TechnicalIssue => "technical_issue",
            ContactReason::GeneralInquiry => "general_inquiry",
            ContactReason::FeatureRequest => "feature_request",
            ContactReason::PrivacyConcern => "privacy_concern",
            ContactReason::Other => "other",
        }
    }

    pub fn from_str(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|reason| reason.as_str() == tag)
    }
}

/// State of the support form as the visitor fills it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportForm {
    pub reason: Option<ContactReason>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl SupportForm {
    /// Reason, name, email, subject and message are required; the email
    /// must look like an address; phone is optional. All violations are
    /// collected in one pass.
    pub fn validate(&self) -> BTreeMap<&'static str, ValidationIssue> {
        let mut issues = BTreeMap::new();
        if self.reason.is_none() {
            issues.insert("reason", ValidationIssue::Required);
        }
        if self.name.trim().is_empty() {
            issues.insert("name", ValidationIssue::Required);
        }
        let email = self.email.trim();
        if email.is_empty() {
            issues.insert("email", ValidationIssue::Required);
        } else if !is_valid_email(email) {
            issues.insert("email", ValidationIssue::InvalidEmail);
        }
        if self.subject.trim().is_empty() {
            issues.insert("subject", ValidationIssue::Required);
        }
        if self.message.trim().is_empty() {
            issues.insert("message", ValidationIssue::Required);
        }
        issues
    }
}

/// Flat payload posted to the form-relay channel. The underscored fields
/// are the relay's routing metadata: reply-to address and mail subject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupportPayload {
    pub reason: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "_replyto")]
    pub reply_to: String,
    #[serde(rename = "_subject")]
    pub mail_subject: String,
}

impl SupportPayload {
    /// Build the relay payload from a validated form. `reason_label` is the
    /// localized label shown to the support team, not the raw tag.
    pub fn from_form(form: &SupportForm, reason_label: &str) -> Self {
        let phone = if form.phone.trim().is_empty() {
            "Not provided".to_string()
        } else {
            form.phone.clone()
        };
        Self {
            reason: reason_label.to_string(),
            name: form.name.clone(),
            email: form.email.clone(),
            phone,
            subject: form.subject.clone(),
            message: form.message.clone(),
            reply_to: form.email.clone(),
            mail_subject: format!(
                "[S.E.T.A.L. Support] {}: {}",
                reason_label, form.subject
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> SupportForm {
        SupportForm {
            reason: Some(ContactReason::TechnicalIssue),
            name: "Awa Diop".to_string(),
            email: "awa@exemple.sn".to_string(),
            phone: String::new(),
            subject: "L'application ne démarre pas".to_string(),
            message: "Depuis la mise à jour, l'écran reste blanc.".to_string(),
        }
    }

    #[test]
    fn filled_form_validates() {
        assert!(filled_form().validate().is_empty());
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let issues = SupportForm::default().validate();
        assert_eq!(issues.len(), 5);
        assert_eq!(issues.get("reason"), Some(&ValidationIssue::Required));
        assert_eq!(issues.get("message"), Some(&ValidationIssue::Required));
        assert!(!issues.contains_key("phone"));
    }

    #[test]
    fn bad_email_is_distinguished_from_missing() {
        let mut form = filled_form();
        form.email = "pas-un-email".to_string();
        assert_eq!(
            form.validate().get("email"),
            Some(&ValidationIssue::InvalidEmail)
        );
    }

    #[test]
    fn payload_carries_routing_metadata() {
        let payload = SupportPayload::from_form(&filled_form(), "Problème technique");
        assert_eq!(payload.reply_to, "awa@exemple.sn");
        assert_eq!(payload.phone, "Not provided");
        assert_eq!(
            payload.mail_subject,
            "[S.E.T.A.L. Support] Problème technique: L'application ne démarre pas"
        );

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("_replyto").is_some());
        assert!(json.get("_subject").is_some());
    }

    #[test]
    fn reason_tags_roundtrip() {
        for reason in ContactReason::ALL {
            assert_eq!(ContactReason::from_str(reason.as_str()), Some(reason));
        }
        assert_eq!(ContactReason::from_str("spam"), None);
    }
}
