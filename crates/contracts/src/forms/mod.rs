pub mod answers;
pub mod catalog;
pub mod schema;
pub mod submission;
pub mod validation;
