// Integration tests for draftcast-core.
//
// These drive the public API end-to-end: shipped defaults are loaded into a
// scratch directory, a draft is filled against the configured rosters, the
// prediction client talks to an in-memory transport, and the answer is
// rendered for display.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use draftcast_core::catalog::ChampionCatalog;
use draftcast_core::config::{self, Config};
use draftcast_core::draft::{DraftBoard, Role, Side, TeamSelector, SLOTS_PER_SIDE};
use draftcast_core::oracle::{
    PredictError, PredictionClient, PredictionRequest, PredictionTransport, TransportError,
    TransportResponse, ValidationError,
};
use draftcast_core::render::{self, EdgeChannel, Form};

// ===========================================================================
// Test helpers
// ===========================================================================

/// Answers every request with a fixed response and keeps what was sent.
struct RecordingTransport {
    reply: Result<TransportResponse, TransportError>,
    seen: Mutex<Vec<PredictionRequest>>,
}

impl RecordingTransport {
    fn ok(body: String) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(TransportResponse { status: 200, body }),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<PredictionRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionTransport for RecordingTransport {
    async fn post_predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<TransportResponse, TransportError> {
        self.seen.lock().unwrap().push(request.clone());
        self.reply.clone()
    }
}

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Copy the shipped defaults into a fresh scratch directory and load them.
fn shipped_config(name: &str) -> Config {
    let base = std::env::temp_dir().join(format!("draftcast-it-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&base);
    let defaults = base.join("defaults");
    std::fs::create_dir_all(&defaults).unwrap();
    for file in ["app.toml", "teams.toml"] {
        std::fs::copy(workspace_root().join("defaults").join(file), defaults.join(file)).unwrap();
    }

    let copied = config::ensure_config_files(&base).unwrap();
    assert_eq!(copied.len(), 2);
    let config = config::load_config_from(&base).unwrap();
    let _ = std::fs::remove_dir_all(&base);
    config
}

const BLUE_PICKS: [&str; SLOTS_PER_SIDE] = ["Rumble", "Vi", "Azir", "Kaisa", "Rell"];
const RED_PICKS: [&str; SLOTS_PER_SIDE] = ["Jax", "Sejuani", "Orianna", "Xayah", "Rakan"];

fn catalog_json() -> String {
    let data: serde_json::Map<String, serde_json::Value> = BLUE_PICKS
        .iter()
        .chain(RED_PICKS.iter())
        .map(|id| {
            (
                id.to_string(),
                serde_json::json!({"id": id, "name": id, "image": {"full": format!("{id}.png")}}),
            )
        })
        .collect();
    serde_json::json!({"type": "champion", "data": data}).to_string()
}

fn prediction_body() -> String {
    let stats = |names: [&str; 5], streak: i32| -> Vec<serde_json::Value> {
        Role::ALL
            .iter()
            .zip(names)
            .map(|(role, player)| {
                serde_json::json!({
                    "role": role.display_str(),
                    "player": player,
                    "mastery": 0.7,
                    "streak": streak
                })
            })
            .collect()
    };
    serde_json::json!({
        "blue_win_percent": 61.3,
        "red_win_percent": 38.7,
        "blue_stats": stats(["Robo", "Croc", "tinowns", "Route", "RedBert"], 3),
        "red_stats": stats(["Wizer", "CarioK", "dyNquedo", "TitaN", "Kuri"], -2),
        "comparison": [
            {"role": "TOP", "mastery_edge": "Blue", "mastery_val": 0.12,
             "form_edge": "Blue", "form_val": 0.3},
            {"role": "BOT", "mastery_edge": "Red", "mastery_val": 0.05,
             "form_edge": "Blue", "form_val": 0.1}
        ]
    })
    .to_string()
}

/// Board filled by dragging catalog entries into every slot.
fn drafted_board(catalog: &ChampionCatalog) -> DraftBoard {
    let mut board = DraftBoard::new();
    for (side, picks) in [(Side::Blue, BLUE_PICKS), (Side::Red, RED_PICKS)] {
        for (slot, id) in picks.iter().enumerate() {
            let entry = catalog.get(id).unwrap();
            board.assign(side, slot, entry.to_pick()).unwrap();
        }
    }
    board
}

// ===========================================================================
// Tests
// ===========================================================================

#[test]
fn shipped_defaults_offer_known_teams() {
    let config = shipped_config("teams");
    let selector = TeamSelector::new(config.teams.clone());
    let options: Vec<&str> = selector.options().collect();
    assert!(options.contains(&"LOUD"));
    assert!(options.contains(&"paiN Gaming"));
    assert!(config.ui.carousel_page_size > 0);
}

#[tokio::test]
async fn full_draft_prediction_pipeline() {
    let config = shipped_config("pipeline");
    let catalog = ChampionCatalog::from_json(&catalog_json(), &config.catalog).unwrap();
    assert_eq!(catalog.len(), 10);

    let board = drafted_board(&catalog);
    assert!(board.is_fully_complete());

    let mut teams = TeamSelector::new(config.teams.clone());
    teams.set_team(Side::Blue, "LOUD");
    teams.set_team(Side::Red, "paiN Gaming");

    let transport = RecordingTransport::ok(prediction_body());
    let client = PredictionClient::new(transport.clone());
    let result = client.submit(&board, &teams).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].blue_team, "LOUD");
    assert_eq!(requests[0].red_team, "paiN Gaming");
    assert_eq!(requests[0].blue_champs, BLUE_PICKS.to_vec());
    assert_eq!(requests[0].red_champs, RED_PICKS.to_vec());

    let view = render::render(&result);
    assert_eq!(view.win.blue_text, "61.3%");
    assert_eq!(view.win.red_text, "38.7%");
    assert_eq!(view.primary_rows.len(), 5);
    assert_eq!(view.primary_rows[0].blue.player, "Robo");
    assert_eq!(view.primary_rows[0].blue.form, Form::Hot);
    assert_eq!(view.primary_rows[0].red.as_ref().unwrap().form, Form::Cold);

    assert_eq!(view.comparison_rows.len(), 2);
    assert_eq!(view.comparison_rows[1].mastery_label, "Vermelho");
    assert_eq!(view.comparison_rows[1].mastery_channel, EdgeChannel::Red);
    assert_eq!(view.comparison_rows[1].form_label, "Azul");
}

#[tokio::test]
async fn incomplete_draft_never_reaches_transport() {
    let config = shipped_config("incomplete");
    let catalog = ChampionCatalog::from_json(&catalog_json(), &config.catalog).unwrap();
    let mut board = drafted_board(&catalog);
    board.clear(Side::Red, 4).unwrap();

    let mut teams = TeamSelector::new(config.teams.clone());
    teams.set_team(Side::Blue, "LOUD");
    teams.set_team(Side::Red, "FURIA");

    let transport = RecordingTransport::ok(prediction_body());
    let client = PredictionClient::new(transport.clone());
    let err = client.submit(&board, &teams).await.unwrap_err();

    assert_eq!(
        err,
        PredictError::Validation(ValidationError::ChampionsIncomplete)
    );
    assert!(transport.requests().is_empty());
}
