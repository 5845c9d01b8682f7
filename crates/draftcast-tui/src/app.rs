// Application state and orchestration logic.
//
// The central event loop owns the draft board and team selector. User
// commands from the TUI mutate them; background tasks (catalog load,
// prediction requests) report back over the task channel. Every state change
// is pushed to the TUI as a `UiUpdate`.

use chrono::Local;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use draftcast_core::catalog::ChampionCatalog;
use draftcast_core::config::Config;
use draftcast_core::draft::{DraftBoard, TeamSelector};
use draftcast_core::oracle::{PredictError, PredictionClient};
use draftcast_core::render;

use crate::protocol::{PredictionView, TaskEvent, TeamsView, UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub config: Config,
    pub board: DraftBoard,
    pub teams: TeamSelector,
    pub http: reqwest::Client,
    /// Shared with spawned prediction tasks.
    pub client: PredictionClient,
    /// Identifies the newest submission. Completions tagged with an older
    /// generation are discarded in `handle_task_event`.
    pub prediction_generation: u64,
    /// True while a submission is outstanding; further submits are refused.
    pub in_flight: bool,
    /// Spawned tasks report back through clones of this sender.
    pub task_tx: mpsc::Sender<TaskEvent>,
}

impl AppState {
    pub fn new(
        config: Config,
        http: reqwest::Client,
        client: PredictionClient,
        task_tx: mpsc::Sender<TaskEvent>,
    ) -> Self {
        let teams = TeamSelector::new(config.teams.clone());
        AppState {
            config,
            board: DraftBoard::new(),
            teams,
            http,
            client,
            prediction_generation: 0,
            in_flight: false,
            task_tx,
        }
    }

    /// Fetch the champion catalog in the background. One attempt only.
    pub fn start_catalog_load(&self) -> JoinHandle<()> {
        let http = self.http.clone();
        let catalog_config = self.config.catalog.clone();
        let tx = self.task_tx.clone();
        tokio::spawn(async move {
            let outcome = ChampionCatalog::fetch(&http, &catalog_config).await;
            let _ = tx.send(TaskEvent::CatalogLoaded(outcome)).await;
        })
    }

    /// Validate the current draft and, if it is complete, spawn the request.
    ///
    /// Returns the generation assigned to the request. Validation failures
    /// return immediately without touching the network or the generation.
    pub fn start_prediction(&mut self) -> Result<u64, PredictError> {
        let request = PredictionClient::prepare(&self.board, &self.teams)?;

        self.prediction_generation += 1;
        let generation = self.prediction_generation;
        self.in_flight = true;

        let client = self.client.clone();
        let tx = self.task_tx.clone();
        tokio::spawn(async move {
            let outcome = client.send(&request).await;
            let _ = tx
                .send(TaskEvent::Prediction {
                    generation,
                    outcome,
                })
                .await;
        });

        Ok(generation)
    }

    /// Empty the board and orphan a pending prediction. The TUI drops the
    /// shown result on `ResultsCleared`.
    pub fn reset_board(&mut self) {
        self.board.reset();
        if self.in_flight {
            self.prediction_generation += 1;
            self.in_flight = false;
        }
    }

    pub fn teams_view(&self) -> TeamsView {
        TeamsView::from_selector(&self.teams)
    }
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Run until the TUI sends `Quit` or drops its command sender.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    mut task_rx: mpsc::Receiver<TaskEvent>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    let _ = ui_tx.send(UiUpdate::Board(Box::new(state.board.clone()))).await;
    let _ = ui_tx.send(UiUpdate::Teams(state.teams_view())).await;

    loop {
        tokio::select! {
            // --- User commands ---
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("Quit command received, shutting down");
                        break;
                    }
                    Some(cmd) => {
                        handle_user_command(&mut state, cmd, &ui_tx).await;
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }

            // --- Background task results ---
            // `state` holds a sender, so this channel stays open for the
            // whole loop.
            Some(event) = task_rx.recv() => {
                handle_task_event(&mut state, event, &ui_tx).await;
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub async fn handle_user_command(
    state: &mut AppState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    match cmd {
        UserCommand::Assign { side, slot, pick } => {
            let id = pick.id.clone();
            match state.board.assign(side, slot, pick) {
                Ok(()) => {
                    info!("Assigned {} to {} slot {}", id, side, slot);
                    let _ = ui_tx.send(UiUpdate::Board(Box::new(state.board.clone()))).await;
                }
                Err(e) => {
                    warn!("Rejected assignment of {}: {}", id, e);
                    let _ = ui_tx.send(UiUpdate::Message(e.to_string())).await;
                }
            }
        }
        UserCommand::Clear { side, slot } => match state.board.clear(side, slot) {
            Ok(()) => {
                debug!("Cleared {} slot {}", side, slot);
                let _ = ui_tx.send(UiUpdate::Board(Box::new(state.board.clone()))).await;
            }
            Err(e) => {
                warn!("Rejected clear: {}", e);
                let _ = ui_tx.send(UiUpdate::Message(e.to_string())).await;
            }
        },
        UserCommand::CycleTeam { side, forward } => {
            let choice = state.teams.cycle(side, forward).map(str::to_string);
            info!("{} team -> {}", side, choice.as_deref().unwrap_or("(none)"));
            let _ = ui_tx.send(UiUpdate::Teams(state.teams_view())).await;
        }
        UserCommand::Submit => {
            if state.in_flight {
                debug!("Submit ignored: generation {} in flight", state.prediction_generation);
                let _ = ui_tx
                    .send(UiUpdate::Message("Prediction already in progress".into()))
                    .await;
                return;
            }
            match state.start_prediction() {
                Ok(generation) => {
                    info!("Prediction generation {} submitted", generation);
                    let _ = ui_tx.send(UiUpdate::PredictionStarted).await;
                }
                Err(e) => {
                    info!("Submission refused: {}", e);
                    let _ = ui_tx.send(UiUpdate::PredictionFailed(e.user_message())).await;
                }
            }
        }
        UserCommand::ResetBoard => {
            info!("Board reset");
            state.reset_board();
            let _ = ui_tx.send(UiUpdate::Board(Box::new(state.board.clone()))).await;
            let _ = ui_tx.send(UiUpdate::ResultsCleared).await;
        }
        UserCommand::Quit => {}
    }
}

pub async fn handle_task_event(
    state: &mut AppState,
    event: TaskEvent,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    match event {
        TaskEvent::CatalogLoaded(Ok(catalog)) => {
            if catalog.is_empty() {
                warn!("Champion catalog loaded but contains no champions");
            } else {
                info!("Champion catalog ready ({} entries)", catalog.len());
            }
            let _ = ui_tx.send(UiUpdate::CatalogLoaded(Box::new(catalog))).await;
        }
        TaskEvent::CatalogLoaded(Err(e)) => {
            error!("Champion catalog unavailable: {}", e);
            let _ = ui_tx.send(UiUpdate::CatalogFailed(e.to_string())).await;
        }
        TaskEvent::Prediction {
            generation,
            outcome,
        } => {
            if generation != state.prediction_generation || !state.in_flight {
                debug!(
                    "Discarding stale prediction (event gen: {}, current gen: {})",
                    generation, state.prediction_generation
                );
                return;
            }
            state.in_flight = false;

            match outcome {
                Ok(result) => {
                    let view = PredictionView {
                        view: render::render(&result),
                        received_at: Local::now(),
                    };
                    let _ = ui_tx.send(UiUpdate::PredictionReady(Box::new(view))).await;
                }
                Err(e) => {
                    warn!("Prediction generation {} failed: {}", generation, e);
                    let _ = ui_tx.send(UiUpdate::PredictionFailed(e.user_message())).await;
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
