use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Flat mapping from field id to the raw string the user entered.
///
/// Values are stored as typed by the user, including for number fields;
/// validation and any numeric interpretation happen downstream. An
/// `AnswerSet` lives for a single questionnaire session and is cleared
/// on successful submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSet(HashMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field_id: &str, value: String) {
        self.0.insert(field_id.to_string(), value);
    }

    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.0.get(field_id).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_previous_value() {
        let mut answers = AnswerSet::new();
        answers.set("phone", "77".to_string());
        answers.set("phone", "77 123 45 67".to_string());
        assert_eq!(answers.get("phone"), Some("77 123 45 67"));
    }

    #[test]
    fn clear_empties_the_set() {
        let mut answers = AnswerSet::new();
        answers.set("name", "Awa".to_string());
        answers.clear();
        assert!(answers.is_empty());
        assert_eq!(answers.get("name"), None);
    }
}
