//! Translated copy for the support page.
//!
//! The page is fully bilingual, so all its strings live in one struct per
//! language instead of being scattered through the view code.

use contracts::support::ContactReason;

use crate::shared::i18n::Language;

pub struct SupportCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub reason_label: &'static str,
    pub reason_placeholder: &'static str,
    pub name_label: &'static str,
    pub email_label: &'static str,
    pub phone_label: &'static str,
    pub subject_label: &'static str,
    pub message_label: &'static str,
    pub message_placeholder: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub success_title: &'static str,
    pub success_body: &'static str,
    pub send_another: &'static str,
    pub error_body: &'static str,
    pub try_again: &'static str,
}

impl SupportCopy {
    pub fn for_language(language: Language) -> &'static Self {
        match language {
            Language::Fr => &FR,
            Language::En => &EN,
        }
    }
}

static FR: SupportCopy = SupportCopy {
    title: "Contactez-nous",
    subtitle: "Une question, un problème, une suggestion ? Notre équipe vous répond.",
    reason_label: "Motif de la demande",
    reason_placeholder: "Choisissez un motif",
    name_label: "Nom complet",
    email_label: "Adresse e-mail",
    phone_label: "Téléphone (facultatif)",
    subject_label: "Objet",
    message_label: "Message",
    message_placeholder: "Décrivez votre demande...",
    submit: "Envoyer le message",
    submitting: "Envoi en cours...",
    success_title: "Message envoyé !",
    success_body: "Merci de nous avoir contactés. Nous vous répondrons au plus vite.",
    send_another: "Envoyer un autre message",
    error_body: "L'envoi a échoué. Vos informations ont été conservées, veuillez réessayer.",
    try_again: "Réessayer",
};

static EN: SupportCopy = SupportCopy {
    title: "Contact us",
    subtitle: "A question, an issue, a suggestion? Our team will get back to you.",
    reason_label: "Reason for contacting us",
    reason_placeholder: "Choose a reason",
    name_label: "Full name",
    email_label: "Email address",
    phone_label: "Phone (optional)",
    subject_label: "Subject",
    message_label: "Message",
    message_placeholder: "Describe your request...",
    submit: "Send message",
    submitting: "Sending...",
    success_title: "Message sent!",
    success_body: "Thank you for reaching out. We will get back to you as soon as possible.",
    send_another: "Send another message",
    error_body: "Sending failed. Your entries were kept, please try again.",
    try_again: "Try again",
};

/// Localized label for one contact reason, used both in the select options
/// and in the mail subject seen by the support team.
pub fn reason_label(reason: ContactReason, language: Language) -> &'static str {
    match language {
        Language::Fr => match reason {
            ContactReason::PasswordRecovery => "Récupération de mot de passe",
            ContactReason::AccountDeletion => "Suppression de compte",
            ContactReason::TechnicalIssue => "Problème technique",
            ContactReason::GeneralInquiry => "Question générale",
            ContactReason::FeatureRequest => "Suggestion de fonctionnalité",
            ContactReason::PrivacyConcern => "Confidentialité des données",
            ContactReason::Other => "Autre",
        },
        Language::En => match reason {
            ContactReason::PasswordRecovery => "Password recovery",
            ContactReason::AccountDeletion => "Account deletion",
            ContactReason::TechnicalIssue => "Technical issue",
            ContactReason::GeneralInquiry => "General inquiry",
            ContactReason::FeatureRequest => "Feature request",
            ContactReason::PrivacyConcern => "Privacy concern",
            ContactReason::Other => "Other",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reason_has_a_label_in_both_languages() {
        for reason in ContactReason::ALL {
            assert!(!reason_label(reason, Language::Fr).is_empty());
            assert!(!reason_label(reason, Language::En).is_empty());
        }
    }
}
