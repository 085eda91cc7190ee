pub mod report_actions;
pub mod report_form;
