pub mod ui;

pub use ui::{Button, Input, Select, Textarea};
