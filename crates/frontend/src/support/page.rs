use std::collections::BTreeMap;

use contracts::forms::submission::SubmissionState;
use contracts::forms::validation::ValidationIssue;
use contracts::support::{ContactReason, SupportForm, SupportPayload};
use gloo_net::http::Request;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::{Button, Input, Select, Textarea};
use crate::shared::config::relay_endpoint;
use crate::shared::i18n::{use_language, validation_message, Language};
use crate::shared::icons::icon;

use super::copy::{reason_label, SupportCopy};

async fn send(payload: &SupportPayload) -> Result<(), String> {
    let response = Request::post(&relay_endpoint())
        .header("Accept", "application/json")
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

#[component]
pub fn SupportPage() -> impl IntoView {
    let lang = use_language();

    let form = RwSignal::new(SupportForm::default());
    let errors = RwSignal::new(BTreeMap::<&'static str, ValidationIssue>::new());
    let state = RwSignal::new(SubmissionState::Idle);

    let submitting = Signal::derive(move || state.get() == SubmissionState::Submitting);

    let error_for = move |field: &'static str| {
        Signal::derive(move || {
            errors.with(|e| {
                e.get(field)
                    .map(|issue| validation_message(*issue, lang.current.get()).to_string())
            })
        })
    };
    let clear_error = move |field: &'static str| {
        errors.update(|e| {
            e.remove(field);
        });
    };

    let submit = move || {
        let Some(next) = state.get_untracked().begin() else {
            return;
        };
        let snapshot = form.get_untracked();
        let issues = snapshot.validate();
        if !issues.is_empty() {
            errors.set(issues);
            return;
        }
        errors.update(|e| e.clear());
        state.set(next);

        // The reason always exists here, validate refuses a missing one.
        let label = snapshot
            .reason
            .map(|r| reason_label(r, lang.current.get_untracked()))
            .unwrap_or_default();
        let payload = SupportPayload::from_form(&snapshot, label);
        spawn_local(async move {
            let result = send(&payload).await;
            if let Err(ref e) = result {
                log::error!("support message failed to send: {e}");
            }
            let ok = result.is_ok();
            state.try_update(|s| *s = s.finish(ok));
            if ok {
                form.try_set(SupportForm::default());
            }
        });
    };

    let reason_options = move || {
        ContactReason::ALL
            .iter()
            .map(|r| {
                (
                    r.as_str().to_string(),
                    reason_label(*r, lang.current.get()).to_string(),
                )
            })
            .collect::<Vec<_>>()
    };

    let copy = move || SupportCopy::for_language(lang.current.get());

    view! {
        <div class="support page">
            <div class="support__language">
                <select
                    class="form__select support__language-select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let language = if value == "en" { Language::En } else { Language::Fr };
                        lang.set(language);
                    }
                >
                    <option value="fr" selected=move || lang.current.get() == Language::Fr>
                        "Français"
                    </option>
                    <option value="en" selected=move || lang.current.get() == Language::En>
                        "English"
                    </option>
                </select>
            </div>

            <header class="support__header">
                <h1 class="support__title">{move || copy().title}</h1>
                <p class="support__subtitle">{move || copy().subtitle}</p>
            </header>

            {move || if state.get() == SubmissionState::Success {
                view! {
                    <div class="support__success" role="status">
                        {icon("check-circle")}
                        <h2>{copy().success_title}</h2>
                        <p>{copy().success_body}</p>
                        <Button
                            variant="secondary"
                            on_click=Callback::new(move |_| state.set(SubmissionState::Idle))
                        >
                            {move || copy().send_another}
                        </Button>
                    </div>
                }.into_any()
            } else {
                view! {
                    <form
                        class="support__form"
                        novalidate=true
                        on:submit=move |ev| {
                            ev.prevent_default();
                            submit();
                        }
                    >
                        {move || {
                            // Rebuilt on language change so options relabel.
                            let c = copy();
                            view! {
                                <Select
                                    label=c.reason_label
                                    value=Signal::derive(move || {
                                        form.with(|f| {
                                            f.reason.map(|r| r.as_str().to_string()).unwrap_or_default()
                                        })
                                    })
                                    on_change=Callback::new(move |tag: String| {
                                        form.update(|f| f.reason = ContactReason::from_str(&tag));
                                        clear_error("reason");
                                    })
                                    options=reason_options()
                                    placeholder=c.reason_placeholder
                                    disabled=submitting
                                    required=true
                                    id="reason"
                                    error=error_for("reason")
                                />
                            }
                        }}

                        <Input
                            label=Signal::derive(move || copy().name_label.to_string())
                            value=Signal::derive(move || form.with(|f| f.name.clone()))
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| f.name = v);
                                clear_error("name");
                            })
                            disabled=submitting
                            required=true
                            id="name"
                            error=error_for("name")
                        />

                        <Input
                            label=Signal::derive(move || copy().email_label.to_string())
                            value=Signal::derive(move || form.with(|f| f.email.clone()))
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| f.email = v);
                                clear_error("email");
                            })
                            input_type="email"
                            disabled=submitting
                            required=true
                            id="email"
                            error=error_for("email")
                        />

                        <Input
                            label=Signal::derive(move || copy().phone_label.to_string())
                            value=Signal::derive(move || form.with(|f| f.phone.clone()))
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| f.phone = v);
                            })
                            input_type="tel"
                            disabled=submitting
                            id="phone"
                        />

                        <Input
                            label=Signal::derive(move || copy().subject_label.to_string())
                            value=Signal::derive(move || form.with(|f| f.subject.clone()))
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| f.subject = v);
                                clear_error("subject");
                            })
                            disabled=submitting
                            required=true
                            id="subject"
                            error=error_for("subject")
                        />

                        <Textarea
                            label=Signal::derive(move || copy().message_label.to_string())
                            value=Signal::derive(move || form.with(|f| f.message.clone()))
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| f.message = v);
                                clear_error("message");
                            })
                            placeholder=Signal::derive(move || {
                                copy().message_placeholder.to_string()
                            })
                            disabled=submitting
                            required=true
                            rows=6
                            id="message"
                            error=error_for("message")
                        />

                        {move || (state.get() == SubmissionState::Error).then(|| view! {
                            <div class="support__error" role="alert">
                                {icon("alert-circle")}
                                <p>{copy().error_body}</p>
                            </div>
                        })}

                        <Button
                            button_type="submit"
                            class="support__submit"
                            disabled=submitting
                        >
                            {move || if submitting.get() {
                                copy().submitting
                            } else if state.get() == SubmissionState::Error {
                                copy().try_again
                            } else {
                                copy().submit
                            }}
                            {icon("send")}
                        </Button>
                    </form>
                }.into_any()
            }}
        </div>
    }
}
