use std::collections::BTreeMap;

use contracts::forms::answers::AnswerSet;
use contracts::forms::catalog::{schema_for, EntityKind};
use contracts::forms::submission::SubmissionState;
use contracts::forms::validation::{validate, ValidationIssue};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;

/// Reactive state for one questionnaire run.
///
/// Copy on purpose: the struct only holds signal handles, so views and
/// callbacks capture it by value.
#[derive(Clone, Copy)]
pub struct QuestionnaireViewModel {
    pub entity: EntityKind,
    pub answers: RwSignal<AnswerSet>,
    pub errors: RwSignal<BTreeMap<String, ValidationIssue>>,
    pub state: RwSignal<SubmissionState>,
}

impl QuestionnaireViewModel {
    pub fn new(entity: EntityKind) -> Self {
        Self {
            entity,
            answers: RwSignal::new(AnswerSet::new()),
            errors: RwSignal::new(BTreeMap::new()),
            state: RwSignal::new(SubmissionState::Idle),
        }
    }

    pub fn answer(&self, field_id: &str) -> String {
        self.answers
            .with(|a| a.get(field_id).map(str::to_string))
            .unwrap_or_default()
    }

    /// Record one field edit and drop its stale validation error, if any.
    pub fn set_answer(&self, field_id: &str, value: String) {
        let id = field_id.to_string();
        self.answers.update(|a| a.set(&id, value));
        self.errors.update(|e| {
            e.remove(&id);
        });
    }

    pub fn error_for(&self, field_id: &str) -> Option<ValidationIssue> {
        self.errors.with(|e| e.get(field_id).copied())
    }

    pub fn is_submitting(&self) -> bool {
        self.state.get() == SubmissionState::Submitting
    }

    /// Validate and, when clean, submit. Answers survive a failed attempt
    /// so the visitor can retry; a success clears them.
    pub fn submit(&self) {
        let Some(next) = self.state.get_untracked().begin() else {
            return;
        };

        let schema = schema_for(self.entity);
        let outcome = self.answers.with_untracked(|a| validate(schema, a));
        match outcome {
            Ok(()) => {
                self.errors.update(|e| e.clear());
                self.state.set(next);
                let vm = *self;
                spawn_local(async move {
                    let answers = vm.answers.get_untracked();
                    let result = api::submit(vm.entity, &answers).await;
                    if let Err(ref e) = result {
                        log::error!("questionnaire submission failed: {e}");
                    }
                    let ok = result.is_ok();
                    vm.state.try_update(|s| *s = s.finish(ok));
                    if ok {
                        vm.answers.try_update(|a| a.clear());
                    }
                });
            }
            Err(issues) => {
                self.errors.set(issues);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Signal construction needs an owner even outside the DOM.
    fn with_owner(f: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        f();
    }

    #[test]
    fn invalid_submit_surfaces_errors_and_stays_idle() {
        with_owner(|| {
            let vm = QuestionnaireViewModel::new(EntityKind::Pme);
            vm.set_answer("email", "not-an-email".to_string());
            vm.submit();
            assert_eq!(vm.state.get_untracked(), SubmissionState::Idle);
            assert!(vm.error_for("companyName").is_some());
            assert_eq!(
                vm.error_for("email"),
                Some(ValidationIssue::InvalidEmail)
            );
            // The typed answer is still there for correction.
            assert_eq!(vm.answer("email"), "not-an-email");
        });
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        with_owner(|| {
            let vm = QuestionnaireViewModel::new(EntityKind::Pme);
            vm.submit();
            assert!(vm.error_for("companyName").is_some());
            assert!(vm.error_for("email").is_some());

            vm.set_answer("companyName", "Atelier Ba".to_string());
            assert!(vm.error_for("companyName").is_none());
            assert!(vm.error_for("email").is_some());
        });
    }
}
