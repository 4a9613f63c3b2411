//! Common reusable UI components

pub mod form;
pub mod spinner;

pub use form::{FormField, SelectField, TextAreaField};
pub use spinner::{InlineSpinner, SubmitButton};
