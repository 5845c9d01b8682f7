// Message types exchanged between the TUI, the app orchestrator and the
// background tasks it spawns.

use chrono::{DateTime, Local};

use draftcast_core::catalog::{CatalogError, ChampionCatalog};
use draftcast_core::draft::{ChampionPick, DraftBoard, Side, TeamSelector};
use draftcast_core::oracle::{PredictError, PredictionResult};
use draftcast_core::render::ResultView;

// ---------------------------------------------------------------------------
// TUI -> app
// ---------------------------------------------------------------------------

/// Commands that mutate draft state. The TUI never touches the board itself.
#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    /// Drop a held champion onto a slot.
    Assign {
        side: Side,
        slot: usize,
        pick: ChampionPick,
    },
    Clear {
        side: Side,
        slot: usize,
    },
    /// Step a team dropdown forward or backward.
    CycleTeam {
        side: Side,
        forward: bool,
    },
    Submit,
    /// Empty every slot and drop any pending or shown prediction.
    ResetBoard,
    Quit,
}

// ---------------------------------------------------------------------------
// app -> TUI
// ---------------------------------------------------------------------------

/// Team dropdown state plus the chosen organizations' starting fives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamsView {
    pub blue: Option<String>,
    pub red: Option<String>,
    /// Player names in role order; empty when no team is chosen.
    pub blue_lineup: Vec<String>,
    pub red_lineup: Vec<String>,
}

impl TeamsView {
    pub fn from_selector(selector: &TeamSelector) -> Self {
        let lineup = |side: Side| -> Vec<String> {
            selector
                .lineup(side)
                .map(|players| players.into_iter().map(|(_, name)| name.to_string()).collect())
                .unwrap_or_default()
        };
        TeamsView {
            blue: selector.team(Side::Blue).map(str::to_string),
            red: selector.team(Side::Red).map(str::to_string),
            blue_lineup: lineup(Side::Blue),
            red_lineup: lineup(Side::Red),
        }
    }

    pub fn team(&self, side: Side) -> Option<&str> {
        match side {
            Side::Blue => self.blue.as_deref(),
            Side::Red => self.red.as_deref(),
        }
    }

    pub fn lineup(&self, side: Side) -> &[String] {
        match side {
            Side::Blue => &self.blue_lineup,
            Side::Red => &self.red_lineup,
        }
    }
}

/// A rendered prediction and when it arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub view: ResultView,
    pub received_at: DateTime<Local>,
}

/// Lifecycle of the submit trigger as shown in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    /// A request is outstanding; the trigger is disabled.
    InFlight,
    Failed,
}

#[derive(Debug, Clone)]
pub enum UiUpdate {
    CatalogLoaded(Box<ChampionCatalog>),
    CatalogFailed(String),
    Board(Box<DraftBoard>),
    Teams(TeamsView),
    PredictionStarted,
    PredictionReady(Box<PredictionView>),
    /// User-facing failure text. Any earlier result stays on screen.
    PredictionFailed(String),
    ResultsCleared,
    /// Transient status line text.
    Message(String),
}

// ---------------------------------------------------------------------------
// Background tasks -> app
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum TaskEvent {
    CatalogLoaded(Result<ChampionCatalog, CatalogError>),
    /// Outcome of the submission tagged `generation`.
    Prediction {
        generation: u64,
        outcome: Result<PredictionResult, PredictError>,
    },
}

// ---------------------------------------------------------------------------
// TUI-local
// ---------------------------------------------------------------------------

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Carousel,
    Board,
}
