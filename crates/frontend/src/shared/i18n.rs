//! Language selection and shared translated copy.
//!
//! The language catalog is loaded once at app mount and exposed through
//! context; pages read it with `use_language` instead of touching any
//! global. The choice is persisted so it survives reloads.

use contracts::forms::catalog::EntityKind;
use contracts::forms::validation::ValidationIssue;
use leptos::prelude::*;

const STORAGE_KEY: &str = "setal.lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    fn from_str(tag: &str) -> Option<Self> {
        match tag {
            "fr" => Some(Language::Fr),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct LanguageContext {
    pub current: RwSignal<Language>,
}

impl LanguageContext {
    pub fn new() -> Self {
        let stored = local_storage()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|tag| Language::from_str(&tag));
        Self {
            current: RwSignal::new(stored.unwrap_or_default()),
        }
    }

    pub fn set(&self, language: Language) {
        self.current.set(language);
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, language.as_str());
        }
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::new()
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().expect("LanguageContext not found in context")
}

/// Field-scoped validation message.
pub fn validation_message(issue: ValidationIssue, language: Language) -> &'static str {
    match (issue, language) {
        (ValidationIssue::Required, Language::Fr) => "Ce champ est obligatoire",
        (ValidationIssue::Required, Language::En) => "This field is required",
        (ValidationIssue::InvalidEmail, Language::Fr) => {
            "Veuillez entrer une adresse e-mail valide"
        }
        (ValidationIssue::InvalidEmail, Language::En) => {
            "Please enter a valid email address"
        }
    }
}

/// Display name of an entity kind on the selection grid.
pub fn entity_name(kind: EntityKind, language: Language) -> &'static str {
    match language {
        Language::Fr => match kind {
            EntityKind::Pme => "PME & Commerces",
            EntityKind::Municipalities => "Communes & Collectivités",
            EntityKind::Collection => "Opérateurs de collecte",
            EntityKind::Ministries => "Ministères & Agences",
            EntityKind::Ngos => "ONG & Bailleurs",
            EntityKind::EconomicZones => "Zones économiques",
            EntityKind::Events => "Événements & Infrastructures",
            EntityKind::Enterprises => "Grandes entreprises",
            EntityKind::Consortiums => "Consortiums & PPP",
        },
        Language::En => match kind {
            EntityKind::Pme => "SMEs & Shops",
            EntityKind::Municipalities => "Municipalities",
            EntityKind::Collection => "Collection operators",
            EntityKind::Ministries => "Ministries & Agencies",
            EntityKind::Ngos => "NGOs & Donors",
            EntityKind::EconomicZones => "Economic zones",
            EntityKind::Events => "Events & Venues",
            EntityKind::Enterprises => "Large enterprises",
            EntityKind::Consortiums => "Consortiums & PPPs",
        },
    }
}

/// "Back" label used by the pages with a history back control.
pub fn back_label(language: Language) -> &'static str {
    match language {
        Language::Fr => "Retour",
        Language::En => "Back",
    }
}
