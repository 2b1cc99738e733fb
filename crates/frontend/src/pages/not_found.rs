use leptos::prelude::*;

use crate::shared::i18n::{use_language, Language};
use crate::shared::icons::icon;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let lang = use_language();

    view! {
        <div class="not-found page">
            {icon("help-circle")}
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">{move || message(lang.current.get())}</p>
            <a href="/" class="button button--primary">
                {move || home_label(lang.current.get())}
            </a>
        </div>
    }
}

fn message(language: Language) -> &'static str {
    match language {
        Language::Fr => "La page que vous cherchez n'existe pas.",
        Language::En => "The page you are looking for does not exist.",
    }
}

fn home_label(language: Language) -> &'static str {
    match language {
        Language::Fr => "Retour à l'accueil",
        Language::En => "Back to home",
    }
}
