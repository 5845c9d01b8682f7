// Wire types for POST /predict.

use serde::{Deserialize, Serialize};

use crate::draft::{Side, SLOTS_PER_SIDE};

/// Request body. Champion arrays are in slot order (top, jng, mid, bot, sup);
/// the service matches roles by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub blue_team: String,
    pub red_team: String,
    pub blue_champs: Vec<String>,
    pub red_champs: Vec<String>,
}

/// Per-player line of the primary stats table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub role: String,
    pub player: String,
    /// Champion proficiency as a fraction in [0, 1].
    pub mastery: f64,
    /// Positive: current win streak. Negative: current loss streak.
    pub streak: i32,
}

/// Which side has the edge in a role, and by how much.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleComparison {
    pub role: String,
    pub mastery_edge: Side,
    pub mastery_val: f64,
    pub form_edge: Side,
    pub form_val: f64,
}

/// A validated prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub blue_win_percent: f64,
    pub red_win_percent: f64,
    pub blue_stats: Vec<PlayerStat>,
    pub red_stats: Vec<PlayerStat>,
    pub comparison: Vec<RoleComparison>,
}

impl PredictionResult {
    /// Parse and shape-check a response body. All-or-nothing: any problem,
    /// including a missing field, yields an error describing the first
    /// mismatch found.
    pub fn from_json(body: &str) -> Result<Self, String> {
        let result: PredictionResult =
            serde_json::from_str(body).map_err(|e| format!("malformed prediction body: {e}"))?;

        check_percent("blue_win_percent", result.blue_win_percent)?;
        check_percent("red_win_percent", result.red_win_percent)?;

        for (field, stats) in [("blue_stats", &result.blue_stats), ("red_stats", &result.red_stats)] {
            if stats.len() != SLOTS_PER_SIDE {
                return Err(format!(
                    "{field} has {} entries, expected {SLOTS_PER_SIDE}",
                    stats.len()
                ));
            }
            if let Some(bad) = stats.iter().find(|s| !s.mastery.is_finite()) {
                return Err(format!("{field}: non-finite mastery for {}", bad.player));
            }
        }

        if let Some(bad) = result
            .comparison
            .iter()
            .find(|c| !c.mastery_val.is_finite() || !c.form_val.is_finite())
        {
            return Err(format!("comparison: non-finite value for role {}", bad.role));
        }

        Ok(result)
    }
}

fn check_percent(field: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(format!("{field} out of range: {value}"));
    }
    Ok(())
}
