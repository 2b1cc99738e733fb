//! Schema-driven questionnaire engine
//!
//! Split the way details screens are organized elsewhere:
//! - api.rs: submission transport
//! - view_model.rs: answers, validation errors and submission state
//! - page.rs: rendering

pub mod api;
mod page;
mod view_model;

pub use page::QuestionnairePage;
pub use view_model::QuestionnaireViewModel;
