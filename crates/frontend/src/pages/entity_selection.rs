use contracts::forms::catalog::EntityKind;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::i18n::{back_label, entity_name, use_language, Language};
use crate::shared::icons::icon;
use crate::shared::nav::go_back;

/// Grid of organization kinds. Picking one opens its questionnaire.
#[component]
pub fn EntitySelectionPage() -> impl IntoView {
    let lang = use_language();
    let navigate = use_navigate();
    let back_nav = navigate.clone();

    view! {
        <div class="entity-selection page">
            <header class="entity-selection__header">
                <button
                    class="button button--ghost entity-selection__back"
                    on:click=move |_| go_back(&back_nav)
                >
                    {icon("arrow-left")}
                    {move || back_label(lang.current.get())}
                </button>
                <h1 class="entity-selection__title">
                    {move || title(lang.current.get())}
                </h1>
                <p class="entity-selection__subtitle">
                    {move || subtitle(lang.current.get())}
                </p>
            </header>

            <div class="entity-selection__grid">
                {EntityKind::ALL.into_iter().map(|kind| {
                    let navigate = navigate.clone();
                    let card_class = format!(
                        "entity-card entity-card--{}",
                        kind.accent()
                    );
                    view! {
                        <button
                            class=card_class
                            on:click=move |_| {
                                navigate(
                                    &format!("/questionnaire/{}", kind.as_str()),
                                    NavigateOptions::default(),
                                );
                            }
                        >
                            <span class="entity-card__icon">{icon(kind.icon())}</span>
                            <span class="entity-card__name">
                                {move || entity_name(kind, lang.current.get())}
                            </span>
                            {icon("arrow-right")}
                        </button>
                    }
                }).collect_view()}
            </div>

            <p class="entity-selection__help">
                {move || help_text(lang.current.get())}
                " "
                <a href="/help">{move || help_link(lang.current.get())}</a>
            </p>
        </div>
    }
}

fn title(language: Language) -> &'static str {
    match language {
        Language::Fr => "Quel type de structure êtes-vous ?",
        Language::En => "What kind of organization are you?",
    }
}

fn subtitle(language: Language) -> &'static str {
    match language {
        Language::Fr => {
            "Choisissez votre profil pour accéder au questionnaire adapté à vos besoins."
        }
        Language::En => {
            "Pick your profile to open the questionnaire tailored to your needs."
        }
    }
}

fn help_text(language: Language) -> &'static str {
    match language {
        Language::Fr => "Vous ne trouvez pas votre profil ?",
        Language::En => "Can't find your profile?",
    }
}

fn help_link(language: Language) -> &'static str {
    match language {
        Language::Fr => "Contactez-nous",
        Language::En => "Contact us",
    }
}
