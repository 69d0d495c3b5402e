//! Input validation helpers built on the `validator` crate.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run a DTO's declarative rules and fold any failures into
/// [`CoreError::Validation`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Render validation failures as `field: message` pairs, sorted by field so
/// the output is stable.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: failed '{}' check", e.code),
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
