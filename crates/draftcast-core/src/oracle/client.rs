// Prediction client.
//
// Validates the draft and team selection locally, then performs exactly one
// POST /predict. The HTTP call sits behind `PredictionTransport` so the
// validation and response handling can be exercised without a server.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::draft::{DraftBoard, Side, TeamSelector};

use super::types::{PredictionRequest, PredictionResult};
use super::{PredictError, ValidationError};

// ---------------------------------------------------------------------------
// Transport seam
// ---------------------------------------------------------------------------

/// Raw HTTP answer: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// The request never produced an HTTP answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[async_trait]
pub trait PredictionTransport: Send + Sync {
    async fn post_predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<TransportResponse, TransportError>;
}

/// reqwest-backed transport posting JSON to `{base_url}/predict`.
pub struct HttpTransport {
    http: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            url: format!("{}/predict", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl PredictionTransport for HttpTransport {
    async fn post_predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<TransportResponse, TransportError> {
        let resp = self
            .http
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(TransportResponse { status, body })
    }
}

// ---------------------------------------------------------------------------
// PredictionClient
// ---------------------------------------------------------------------------

/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct PredictionClient {
    transport: Arc<dyn PredictionTransport>,
}

impl PredictionClient {
    pub fn new(transport: Arc<dyn PredictionTransport>) -> Self {
        Self { transport }
    }

    /// Client talking HTTP to the service at `base_url`.
    pub fn http(http: reqwest::Client, base_url: &str) -> Self {
        Self::new(Arc::new(HttpTransport::new(http, base_url)))
    }

    /// Build the request body from the current selections.
    ///
    /// Teams are checked before champions, so a draft missing both reports
    /// `TeamsIncomplete`.
    pub fn prepare(
        board: &DraftBoard,
        teams: &TeamSelector,
    ) -> Result<PredictionRequest, ValidationError> {
        let selection = teams.validate()?;
        let blue_champs = board
            .champion_ids(Side::Blue)
            .ok_or(ValidationError::ChampionsIncomplete)?;
        let red_champs = board
            .champion_ids(Side::Red)
            .ok_or(ValidationError::ChampionsIncomplete)?;

        Ok(PredictionRequest {
            blue_team: selection.blue_team_name,
            red_team: selection.red_team_name,
            blue_champs,
            red_champs,
        })
    }

    /// Perform the single POST and interpret the answer.
    pub async fn send(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictError> {
        info!(
            "Requesting prediction: {} {:?} vs {} {:?}",
            request.blue_team, request.blue_champs, request.red_team, request.red_champs
        );

        let resp = self.transport.post_predict(request).await.map_err(|e| {
            warn!("Prediction request failed: {}", e);
            PredictError::Network { message: e.0 }
        })?;

        if !(200..300).contains(&resp.status) {
            warn!("Prediction service returned status {}", resp.status);
            debug!("Error body: {}", resp.body);
            return Err(PredictError::protocol(
                Some(resp.status),
                format!("service returned status {}", resp.status),
            ));
        }

        let result = PredictionResult::from_json(&resp.body).map_err(|msg| {
            warn!("Unusable prediction response: {}", msg);
            PredictError::protocol(None, msg)
        })?;

        info!(
            "Prediction received: blue {:.1}% / red {:.1}%",
            result.blue_win_percent, result.red_win_percent
        );
        Ok(result)
    }

    /// Validate, then request. No network traffic happens when validation
    /// fails.
    pub async fn submit(
        &self,
        board: &DraftBoard,
        teams: &TeamSelector,
    ) -> Result<PredictionResult, PredictError> {
        let request = Self::prepare(board, teams).map_err(|e| {
            debug!("Submission blocked: {}", e);
            PredictError::from(e)
        })?;
        self.send(&request).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
