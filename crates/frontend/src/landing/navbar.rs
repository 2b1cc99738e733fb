use leptos::prelude::*;

use crate::shared::i18n::{use_language, Language};

#[component]
pub fn Navbar() -> impl IntoView {
    let lang = use_language();

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"S.E.T.A.L."</a>
            <div class="navbar__links">
                <a href="/blog" class="navbar__link">
                    {move || blog_label(lang.current.get())}
                </a>
                <a href="/help" class="navbar__link">
                    {move || contact_label(lang.current.get())}
                </a>
                <a href="/entity-selection" class="button button--primary navbar__cta">
                    {move || cta_label(lang.current.get())}
                </a>
            </div>
        </nav>
    }
}

fn blog_label(language: Language) -> &'static str {
    match language {
        Language::Fr => "Actualités",
        Language::En => "News",
    }
}

fn contact_label(language: Language) -> &'static str {
    match language {
        Language::Fr => "Contact",
        Language::En => "Contact",
    }
}

fn cta_label(language: Language) -> &'static str {
    match language {
        Language::Fr => "Demander une offre",
        Language::En => "Request an offer",
    }
}
