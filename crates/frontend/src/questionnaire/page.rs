use contracts::forms::catalog::{schema_for, EntityKind};
use contracts::forms::schema::{FieldSpec, FieldType};
use contracts::forms::submission::{SubmissionState, REDIRECT_DELAY_MS};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use crate::shared::components::{Button, Input, Select, Textarea};
use crate::shared::i18n::{back_label, entity_name, use_language, validation_message, Language};
use crate::shared::icons::icon;
use crate::shared::nav::go_back;

use super::view_model::QuestionnaireViewModel;

/// Questionnaire route. The entity tag comes from the URL; an unknown tag
/// renders a recovery view instead of a form.
#[component]
pub fn QuestionnairePage() -> impl IntoView {
    let params = use_params_map();
    let entity = Memo::new(move |_| {
        params.with(|p| p.get("entity").and_then(|tag| EntityKind::from_str(&tag)))
    });

    view! {
        <div class="questionnaire page">
            {move || match entity.get() {
                Some(kind) => view! { <QuestionnaireForm kind /> }.into_any(),
                None => view! { <UnknownEntity /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn QuestionnaireForm(kind: EntityKind) -> impl IntoView {
    let vm = QuestionnaireViewModel::new(kind);
    let lang = use_language();
    let schema = schema_for(kind);

    let navigate = use_navigate();
    let back_nav = navigate.clone();

    // One-shot redirect home once the submission has succeeded. The handle
    // lives in local storage because the timer type is not Send; cleanup
    // cancels it if the visitor navigates away first.
    let redirect = StoredValue::new_local(None::<Timeout>);
    Effect::new(move |_| {
        if vm.state.get() == SubmissionState::Success {
            let navigate = navigate.clone();
            let handle = Timeout::new(REDIRECT_DELAY_MS, move || {
                navigate("/", NavigateOptions::default());
            });
            redirect.set_value(Some(handle));
        }
    });
    on_cleanup(move || {
        if let Some(handle) = redirect.try_update_value(|h| h.take()).flatten() {
            handle.cancel();
        }
    });

    let submitting = Signal::derive(move || vm.is_submitting());
    let succeeded = move || vm.state.get() == SubmissionState::Success;
    let failed = move || vm.state.get() == SubmissionState::Error;

    view! {
        <header class="questionnaire__header">
            <button
                class="button button--ghost questionnaire__back"
                on:click=move |_| go_back(&back_nav)
            >
                {icon("arrow-left")}
                {move || back_label(lang.current.get())}
            </button>
            <h1 class="questionnaire__title">
                {move || entity_name(kind, lang.current.get())}
            </h1>
            <p class="questionnaire__intro">
                {move || intro_text(lang.current.get())}
            </p>
        </header>

        {move || if succeeded() {
            view! {
                <div class="questionnaire__success" role="status">
                    {icon("check-circle")}
                    <p>{success_text(lang.current.get())}</p>
                </div>
            }.into_any()
        } else {
            view! {
                <form
                    class="questionnaire__form"
                    novalidate=true
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.submit();
                    }
                >
                    {schema.sections.iter().map(|section| view! {
                        <fieldset class="questionnaire__section">
                            <legend class="questionnaire__section-title">
                                {section.title.clone()}
                            </legend>
                            <div class="questionnaire__grid">
                                {section.fields.iter().map(|field| view! {
                                    <FieldControl vm field />
                                }).collect_view()}
                            </div>
                        </fieldset>
                    }).collect_view()}

                    {move || failed().then(|| view! {
                        <div class="questionnaire__error" role="alert">
                            {icon("alert-circle")}
                            <p>{failure_text(lang.current.get())}</p>
                        </div>
                    })}

                    <Button
                        button_type="submit"
                        class="questionnaire__submit"
                        disabled=submitting
                    >
                        {move || if submitting.get() {
                            submitting_label(lang.current.get())
                        } else {
                            submit_label(lang.current.get())
                        }}
                        {icon("send")}
                    </Button>
                </form>
            }.into_any()
        }}
    }
}

/// One schema field rendered as the matching control, wired to the view
/// model by its id.
#[component]
fn FieldControl(vm: QuestionnaireViewModel, field: &'static FieldSpec) -> impl IntoView {
    let lang = use_language();
    let id = field.id.as_str();

    let value = Signal::derive(move || vm.answer(id));
    let error = Signal::derive(move || {
        vm.error_for(id)
            .map(|issue| validation_message(issue, lang.current.get()).to_string())
    });
    let disabled = Signal::derive(move || vm.is_submitting());
    let on_input = Callback::new(move |v: String| vm.set_answer(id, v));

    let wrapper_class = if field.full_width() {
        "questionnaire__field questionnaire__field--full"
    } else {
        "questionnaire__field"
    };

    let control = match field.field_type {
        FieldType::Textarea => view! {
            <Textarea
                label=field.label.clone()
                value=value
                on_input=on_input
                placeholder=field.placeholder.clone()
                disabled=disabled
                required=field.required
                id=field.id.clone()
                error=error
            />
        }
        .into_any(),
        FieldType::Select => {
            let options: Vec<(String, String)> = field
                .options
                .iter()
                .map(|o| (o.clone(), o.clone()))
                .collect();
            let placeholder =
                Signal::derive(move || select_placeholder(lang.current.get()).to_string());
            view! {
                <Select
                    label=field.label.clone()
                    value=value
                    on_change=on_input
                    options=options
                    placeholder=placeholder
                    disabled=disabled
                    required=field.required
                    id=field.id.clone()
                    error=error
                />
            }
            .into_any()
        }
        _ => view! {
            <Input
                label=field.label.clone()
                value=value
                on_input=on_input
                placeholder=field.placeholder.clone()
                input_type=field.field_type.input_type().unwrap_or("text")
                disabled=disabled
                required=field.required
                id=field.id.clone()
                error=error
            />
        }
        .into_any(),
    };

    view! { <div class=wrapper_class>{control}</div> }
}

#[component]
fn UnknownEntity() -> impl IntoView {
    let lang = use_language();

    view! {
        <div class="questionnaire__unknown">
            {icon("help-circle")}
            <h1>{move || unknown_title(lang.current.get())}</h1>
            <p>{move || unknown_body(lang.current.get())}</p>
            <a href="/entity-selection" class="button button--primary">
                {move || unknown_cta(lang.current.get())}
            </a>
        </div>
    }
}

fn intro_text(language: Language) -> &'static str {
    match language {
        Language::Fr => {
            "Remplissez ce questionnaire pour que notre équipe prépare une offre adaptée à votre structure."
        }
        Language::En => {
            "Fill in this questionnaire so our team can prepare an offer tailored to your organization."
        }
    }
}

fn submit_label(language: Language) -> &'static str {
    match language {
        Language::Fr => "Envoyer la demande",
        Language::En => "Submit request",
    }
}

fn submitting_label(language: Language) -> &'static str {
    match language {
        Language::Fr => "Envoi en cours...",
        Language::En => "Sending...",
    }
}

fn select_placeholder(language: Language) -> &'static str {
    match language {
        Language::Fr => "Sélectionner",
        Language::En => "Select",
    }
}

fn success_text(language: Language) -> &'static str {
    match language {
        Language::Fr => {
            "Merci ! Votre demande a bien été envoyée. Vous allez être redirigé vers l'accueil."
        }
        Language::En => {
            "Thank you! Your request has been sent. You will be redirected to the home page."
        }
    }
}

fn failure_text(language: Language) -> &'static str {
    match language {
        Language::Fr => {
            "L'envoi a échoué. Vos réponses ont été conservées, veuillez réessayer."
        }
        Language::En => "Sending failed. Your answers were kept, please try again.",
    }
}

fn unknown_title(language: Language) -> &'static str {
    match language {
        Language::Fr => "Type de structure inconnu",
        Language::En => "Unknown organization type",
    }
}

fn unknown_body(language: Language) -> &'static str {
    match language {
        Language::Fr => {
            "Cette adresse ne correspond à aucun questionnaire. Choisissez votre structure dans la liste."
        }
        Language::En => {
            "This address does not match any questionnaire. Pick your organization from the list."
        }
    }
}

fn unknown_cta(language: Language) -> &'static str {
    match language {
        Language::Fr => "Choisir ma structure",
        Language::En => "Choose my organization",
    }
}
