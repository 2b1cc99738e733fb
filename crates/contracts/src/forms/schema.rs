//! Questionnaire schema model
//!
//! A schema is an ordered list of sections, each holding an ordered list of
//! field specifications. Field ids double as the answer-storage keys, so
//! they must be unique across the whole schema; `check_unique_ids` turns
//! an accidental collision into a construction-time error instead of a
//! silent overwrite.

use crate::forms::catalog::EntityKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Kind of input control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Tel,
    Number,
    Textarea,
    Select,
}

impl FieldType {
    /// HTML `type` attribute for variants rendered as `<input>`.
    /// `Textarea` and `Select` use their own elements.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FieldType::Text => Some("text"),
            FieldType::Email => Some("email"),
            FieldType::Tel => Some("tel"),
            FieldType::Number => Some("number"),
            FieldType::Textarea | FieldType::Select => None,
        }
    }
}

/// A single form field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    /// Selectable values, in display order. Only meaningful for `Select`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FieldSpec {
    /// Required field of the given type.
    pub fn new(id: &str, label: &str, field_type: FieldType) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            field_type,
            required: true,
            options: Vec::new(),
            placeholder: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    /// Whether the field spans both columns of the questionnaire grid.
    pub fn full_width(&self) -> bool {
        self.field_type == FieldType::Textarea
    }
}

/// A titled group of fields. Section order is rendering order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSection {
    pub title: String,
    pub fields: Vec<FieldSpec>,
}

impl FormSection {
    pub fn new(title: &str, fields: Vec<FieldSpec>) -> Self {
        Self {
            title: title.to_string(),
            fields,
        }
    }
}

/// The complete questionnaire for one entity kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSchema {
    pub entity: EntityKind,
    pub sections: Vec<FormSection>,
}

impl FormSchema {
    pub fn new(entity: EntityKind, sections: Vec<FormSection>) -> Self {
        Self { entity, sections }
    }

    /// All fields across all sections, in rendering order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|s| s.fields.len()).sum()
    }

    /// Answers live in one flat map keyed by field id, so duplicate ids
    /// across sections would overwrite each other.
    pub fn check_unique_ids(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for field in self.fields() {
            if !seen.insert(field.id.as_str()) {
                return Err(SchemaError::DuplicateFieldId {
                    entity: self.entity,
                    id: field.id.clone(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    DuplicateFieldId { entity: EntityKind, id: String },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::DuplicateFieldId { entity, id } => {
                write!(
                    f,
                    "duplicate field id '{}' in schema for '{}'",
                    id,
                    entity.as_str()
                )
            }
        }
    }
}

impl std::error::Error for SchemaError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_sections(second_field_id: &str) -> FormSchema {
        FormSchema::new(
            EntityKind::Pme,
            vec![
                FormSection::new(
                    "A",
                    vec![FieldSpec::new("name", "Name", FieldType::Text)],
                ),
                FormSection::new(
                    "B",
                    vec![FieldSpec::new(second_field_id, "Other", FieldType::Text)],
                ),
            ],
        )
    }

    #[test]
    fn detects_cross_section_id_collision() {
        let schema = two_sections("name");
        assert_eq!(
            schema.check_unique_ids(),
            Err(SchemaError::DuplicateFieldId {
                entity: EntityKind::Pme,
                id: "name".to_string(),
            })
        );
    }

    #[test]
    fn accepts_unique_ids() {
        assert!(two_sections("email").check_unique_ids().is_ok());
    }

    #[test]
    fn only_textarea_is_full_width() {
        assert!(FieldSpec::new("a", "A", FieldType::Textarea).full_width());
        assert!(!FieldSpec::new("b", "B", FieldType::Select).full_width());
        assert!(!FieldSpec::new("c", "C", FieldType::Number).full_width());
    }

    #[test]
    fn input_type_mapping_is_exhaustive_for_inputs() {
        assert_eq!(FieldType::Email.input_type(), Some("email"));
        assert_eq!(FieldType::Tel.input_type(), Some("tel"));
        assert_eq!(FieldType::Number.input_type(), Some("number"));
        assert_eq!(FieldType::Textarea.input_type(), None);
        assert_eq!(FieldType::Select.input_type(), None);
    }
}
