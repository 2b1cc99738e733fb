use leptos::prelude::*;

use crate::shared::i18n::{use_language, Language};
use crate::shared::icons::icon;

#[component]
pub fn Hero() -> impl IntoView {
    let lang = use_language();

    view! {
        <section class="hero">
            <h1 class="hero__title">{move || title(lang.current.get())}</h1>
            <p class="hero__subtitle">{move || subtitle(lang.current.get())}</p>
            <div class="hero__actions">
                <a href="/entity-selection" class="button button--primary">
                    {move || cta(lang.current.get())}
                    {icon("arrow-right")}
                </a>
                <a href="/blog" class="button button--ghost">
                    {move || secondary(lang.current.get())}
                </a>
            </div>
        </section>
    }
}

fn title(language: Language) -> &'static str {
    match language {
        Language::Fr => "La gestion des déchets, simplifiée pour votre structure",
        Language::En => "Waste management, made simple for your organization",
    }
}

fn subtitle(language: Language) -> &'static str {
    match language {
        Language::Fr => {
            "S.E.T.A.L. accompagne les PME, communes, opérateurs et institutions du Sénégal avec des solutions de collecte et de traitement sur mesure."
        }
        Language::En => {
            "S.E.T.A.L. supports Senegal's SMEs, municipalities, operators and institutions with tailored collection and treatment solutions."
        }
    }
}

fn cta(language: Language) -> &'static str {
    match language {
        Language::Fr => "Commencer ma demande",
        Language::En => "Start my request",
    }
}

fn secondary(language: Language) -> &'static str {
    match language {
        Language::Fr => "Voir nos actualités",
        Language::En => "See our news",
    }
}
