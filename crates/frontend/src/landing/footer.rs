use leptos::prelude::*;

use crate::shared::i18n::{use_language, Language};
use crate::shared::icons::icon;

#[component]
pub fn Footer() -> impl IntoView {
    let lang = use_language();

    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__logo">"S.E.T.A.L."</span>
                <p class="footer__tagline">{move || tagline(lang.current.get())}</p>
            </div>
            <div class="footer__contact">
                <span>{icon("mail")}" contact@setal.app"</span>
                <span>{icon("map-pin")}" Dakar, Sénégal"</span>
            </div>
            <div class="footer__links">
                <a href="/blog">{move || news_label(lang.current.get())}</a>
                <a href="/help">{move || support_label(lang.current.get())}</a>
            </div>
            <p class="footer__copyright">
                {move || copyright(lang.current.get())}
            </p>
        </footer>
    }
}

fn tagline(language: Language) -> &'static str {
    match language {
        Language::Fr => "Des solutions de gestion des déchets pour toutes les structures.",
        Language::En => "Waste management solutions for every organization.",
    }
}

fn news_label(language: Language) -> &'static str {
    match language {
        Language::Fr => "Actualités",
        Language::En => "News",
    }
}

fn support_label(language: Language) -> &'static str {
    match language {
        Language::Fr => "Support",
        Language::En => "Support",
    }
}

fn copyright(language: Language) -> &'static str {
    match language {
        Language::Fr => "© 2025 S.E.T.A.L. Tous droits réservés.",
        Language::En => "© 2025 S.E.T.A.L. All rights reserved.",
    }
}
