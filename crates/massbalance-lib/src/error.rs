use thiserror::Error;

/// Convenient result alias for the mass and balance library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the loaded total weight is zero, negative or non-finite, leaving the CG arm undefined.
    #[error("total weight {total_weight_kg} kg is not a positive finite number; CG arm is undefined")]
    DegenerateWeight { total_weight_kg: f64 },

    /// Raised when an aircraft envelope cannot describe a polygon.
    #[error("envelope for {registration} is malformed: {message}")]
    MalformedEnvelope {
        registration: String,
        message: String,
    },

    /// Raised when aircraft profile data fails validation.
    #[error("invalid aircraft profile: {message}")]
    ProfileValidation { message: String },

    /// Raised when duplicate registrations are encountered during catalog load.
    #[error("duplicate aircraft registration encountered: {registration}")]
    DuplicateAircraft { registration: String },

    /// Raised when a registration could not be found in the catalog.
    #[error("unknown aircraft: {registration}{}", format_suggestions(.suggestions))]
    UnknownAircraft {
        registration: String,
        suggestions: Vec<String>,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for catalog (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
