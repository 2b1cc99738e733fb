pub mod entity_selection;
pub mod not_found;
