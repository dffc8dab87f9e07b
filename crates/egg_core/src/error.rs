use thiserror::Error;

/// Text written back into the duration field when the input is rejected.
pub const INVALID_DURATION_MESSAGE: &str = "Please enter a number";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DurationInputError {
    #[error("duration input is empty")]
    Empty,
    #[error("duration input '{input}' is not a number")]
    NotANumber { input: String },
    #[error("duration input '{input}' is not a finite number")]
    NotFinite { input: String },
}

impl DurationInputError {
    pub fn user_message(&self) -> &'static str {
        INVALID_DURATION_MESSAGE
    }
}

/// Parses the boil duration field the way the start button reads it:
/// surrounding whitespace is ignored, anything that is not a finite float is rejected.
pub fn parse_duration_input(raw: &str) -> Result<f32, DurationInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DurationInputError::Empty);
    }

    let value = trimmed
        .parse::<f32>()
        .map_err(|_| DurationInputError::NotANumber {
            input: trimmed.to_string(),
        })?;

    if !value.is_finite() {
        return Err(DurationInputError::NotFinite {
            input: trimmed.to_string(),
        });
    }

    Ok(value)
}
