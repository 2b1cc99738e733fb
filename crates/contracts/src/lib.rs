pub mod blog;
pub mod forms;
pub mod support;
