//! Client-side questionnaire validation
//!
//! Runs in one pass and collects every violation so the form can flag all
//! invalid fields at once. Messages are the UI's concern; this layer only
//! names the violation.

use crate::forms::answers::AnswerSet;
use crate::forms::schema::{FieldType, FormSchema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationIssue {
    Required,
    InvalidEmail,
}

/// Validate `answers` against `schema`.
///
/// Required fields must be non-empty after trimming (the select placeholder
/// state is an empty string and therefore counts as missing). Email-typed
/// fields must additionally look like `local@domain.tld`.
pub fn validate(
    schema: &FormSchema,
    answers: &AnswerSet,
) -> Result<(), BTreeMap<String, ValidationIssue>> {
    let mut issues = BTreeMap::new();
    for field in schema.fields() {
        let value = answers.get(&field.id).map(str::trim).unwrap_or("");
        if value.is_empty() {
            if field.required {
                issues.insert(field.id.clone(), ValidationIssue::Required);
            }
            continue;
        }
        if field.field_type == FieldType::Email && !is_valid_email(value) {
            issues.insert(field.id.clone(), ValidationIssue::InvalidEmail);
        }
    }
    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// `local@domain.tld` shape check: no whitespace, exactly one `@`, and a
/// dot with something on both sides in the domain part.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::catalog::{schema_for, EntityKind};

    /// Fill every field of the schema with a syntactically valid value.
    fn complete_answers(kind: EntityKind) -> AnswerSet {
        let mut answers = AnswerSet::new();
        for field in schema_for(kind).fields() {
            let value = match field.field_type {
                FieldType::Email => "contact@exemple.sn".to_string(),
                FieldType::Number => "12".to_string(),
                FieldType::Select => field.options[0].clone(),
                _ => "réponse".to_string(),
            };
            answers.set(&field.id, value);
        }
        answers
    }

    #[test]
    fn complete_answers_validate_for_every_entity() {
        for kind in EntityKind::ALL {
            let answers = complete_answers(kind);
            assert!(
                validate(schema_for(kind), &answers).is_ok(),
                "{}",
                kind.as_str()
            );
        }
    }

    #[test]
    fn omitting_one_required_field_flags_exactly_that_field() {
        let schema = schema_for(EntityKind::Pme);
        let mut answers = complete_answers(EntityKind::Pme);
        answers.set("companyName", String::new());

        let issues = validate(schema, &answers).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues.get("companyName"), Some(&ValidationIssue::Required));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let schema = schema_for(EntityKind::Municipalities);
        let mut answers = complete_answers(EntityKind::Municipalities);
        answers.set("municipalityName", "   ".to_string());

        let issues = validate(schema, &answers).unwrap_err();
        assert_eq!(
            issues.get("municipalityName"),
            Some(&ValidationIssue::Required)
        );
    }

    #[test]
    fn malformed_email_is_flagged() {
        let schema = schema_for(EntityKind::Pme);
        let mut answers = complete_answers(EntityKind::Pme);
        answers.set("email", "pas-un-email".to_string());

        let issues = validate(schema, &answers).unwrap_err();
        assert_eq!(issues.get("email"), Some(&ValidationIssue::InvalidEmail));
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let schema = schema_for(EntityKind::Pme);
        let mut answers = complete_answers(EntityKind::Pme);
        answers.set("otherNeeds", String::new());

        assert!(validate(schema, &answers).is_ok());
    }

    #[test]
    fn collects_all_violations_in_one_pass() {
        let schema = schema_for(EntityKind::Pme);
        let mut answers = complete_answers(EntityKind::Pme);
        answers.set("companyName", String::new());
        answers.set("phone", String::new());
        answers.set("email", "broken@".to_string());

        let issues = validate(schema, &answers).unwrap_err();
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn email_shape_cases() {
        assert!(is_valid_email("a@b.cd"));
        assert!(is_valid_email("prenom.nom@mairie.gouv.sn"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.cd"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.cd"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@b@c.de"));
    }
}
