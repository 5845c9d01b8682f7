// Prediction service ("oracle"): wire types, errors and the client.

pub mod client;
pub mod types;

use thiserror::Error;

pub use client::{HttpTransport, PredictionClient, PredictionTransport, TransportError, TransportResponse};
pub use types::{PlayerStat, PredictionRequest, PredictionResult, RoleComparison};

/// Input the user must fix before a prediction can be requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("teams incomplete")]
    TeamsIncomplete,

    #[error("champions incomplete")]
    ChampionsIncomplete,

    #[error("unknown team `{0}`")]
    UnknownTeam(String),
}

/// Every way a submission can fail. None of them is fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The request never got an HTTP answer.
    #[error("network error: {message}")]
    Network { message: String },

    /// An answer arrived but was not a usable prediction.
    #[error("protocol error: {message}")]
    Protocol {
        status: Option<u16>,
        message: String,
    },
}

impl PredictError {
    pub fn protocol(status: Option<u16>, message: impl Into<String>) -> Self {
        PredictError::Protocol {
            status,
            message: message.into(),
        }
    }

    /// Text shown inline in the UI.
    pub fn user_message(&self) -> String {
        match self {
            PredictError::Validation(ValidationError::TeamsIncomplete) => {
                "Select a team for both sides before predicting.".to_string()
            }
            PredictError::Validation(ValidationError::ChampionsIncomplete) => {
                "Fill all 10 champion slots before predicting.".to_string()
            }
            PredictError::Validation(ValidationError::UnknownTeam(name)) => {
                format!("Unknown team: {name}")
            }
            PredictError::Network { .. } => {
                "Could not reach the prediction service. Try again.".to_string()
            }
            PredictError::Protocol { status: Some(code), .. } => {
                format!("Prediction service error (HTTP {code}).")
            }
            PredictError::Protocol { status: None, .. } => {
                "Prediction service returned an unexpected response.".to_string()
            }
        }
    }
}
