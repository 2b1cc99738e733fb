use leptos::prelude::*;

use crate::shared::i18n::{use_language, Language};
use crate::shared::icons::icon;

struct Step {
    icon: &'static str,
    title_fr: &'static str,
    title_en: &'static str,
    body_fr: &'static str,
    body_en: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        icon: "users",
        title_fr: "Identifiez votre structure",
        title_en: "Identify your organization",
        body_fr: "PME, commune, opérateur de collecte, institution : choisissez le profil qui vous correspond.",
        body_en: "SME, municipality, collection operator, institution: pick the profile that matches you.",
    },
    Step {
        icon: "message-square",
        title_fr: "Décrivez vos besoins",
        title_en: "Describe your needs",
        body_fr: "Un questionnaire court et adapté à votre profil nous donne tout ce qu'il faut pour préparer une offre.",
        body_en: "A short questionnaire tailored to your profile gives us everything we need to prepare an offer.",
    },
    Step {
        icon: "trash",
        title_fr: "Recevez une offre sur mesure",
        title_en: "Receive a tailored offer",
        body_fr: "Notre équipe vous recontacte avec un plan de collecte et de traitement adapté.",
        body_en: "Our team gets back to you with a collection and treatment plan that fits.",
    },
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    let lang = use_language();

    view! {
        <section class="how-it-works">
            <h2 class="how-it-works__title">{move || heading(lang.current.get())}</h2>
            <div class="how-it-works__steps">
                {STEPS.iter().map(|step| view! {
                    <div class="how-it-works__step">
                        <span class="how-it-works__icon">{icon(step.icon)}</span>
                        <h3>{move || match lang.current.get() {
                            Language::Fr => step.title_fr,
                            Language::En => step.title_en,
                        }}</h3>
                        <p>{move || match lang.current.get() {
                            Language::Fr => step.body_fr,
                            Language::En => step.body_en,
                        }}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

fn heading(language: Language) -> &'static str {
    match language {
        Language::Fr => "Comment ça marche",
        Language::En => "How it works",
    }
}
