pub mod calendar_view;
pub mod reminder_form;
