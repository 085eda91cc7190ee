pub mod form;
pub mod not_found;
pub mod report;
