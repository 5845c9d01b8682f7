// TUI: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors the app's draft state. The app
// orchestrator pushes `UiUpdate` messages over an mpsc channel; the TUI
// applies them to `ViewState` and re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tokio::sync::mpsc;

use draftcast_core::catalog::{ChampionCatalog, ChampionEntry};
use draftcast_core::draft::{DraftBoard, Side, SLOTS_PER_SIDE};

use crate::protocol::{Focus, PredictionView, SubmitStatus, TeamsView, UiUpdate, UserCommand};

use layout::build_layout;

// ---------------------------------------------------------------------------
// CatalogStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    Loading,
    Ready,
    /// Load failed; the carousel stays empty for the rest of the session.
    Failed(String),
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state that mirrors the application state for rendering, plus
/// purely presentational state (cursors, filter, the held pick).
pub struct ViewState {
    pub catalog: Option<ChampionCatalog>,
    pub catalog_status: CatalogStatus,
    /// Last board snapshot from the app.
    pub board: DraftBoard,
    pub teams: TeamsView,
    pub focus: Focus,
    /// Index into the filtered catalog.
    pub carousel_cursor: usize,
    pub page_size: usize,
    pub board_side: Side,
    pub board_slot: usize,
    /// Champion picked up from the carousel and not yet dropped.
    pub held: Option<ChampionEntry>,
    pub filter_text: String,
    pub filter_mode: bool,
    pub submit_status: SubmitStatus,
    pub prediction: Option<PredictionView>,
    /// Inline message (errors, hints) shown in the status bar.
    pub message: Option<String>,
    pub confirm_quit: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(12)
    }
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        ViewState {
            catalog: None,
            catalog_status: CatalogStatus::Loading,
            board: DraftBoard::new(),
            teams: TeamsView::default(),
            focus: Focus::Carousel,
            carousel_cursor: 0,
            page_size: page_size.max(1),
            board_side: Side::Blue,
            board_slot: 0,
            held: None,
            filter_text: String::new(),
            filter_mode: false,
            submit_status: SubmitStatus::Idle,
            prediction: None,
            message: None,
            confirm_quit: false,
        }
    }

    /// Catalog entries matching the current filter, in catalog order.
    pub fn filtered(&self) -> Vec<&ChampionEntry> {
        match &self.catalog {
            Some(catalog) => catalog.filter(&self.filter_text).collect(),
            None => Vec::new(),
        }
    }

    /// Entry under the carousel cursor, if any.
    pub fn selected_entry(&self) -> Option<&ChampionEntry> {
        self.filtered().get(self.carousel_cursor).copied()
    }

    /// Zero-based page containing the cursor, and the total page count.
    pub fn page(&self) -> (usize, usize) {
        let total = self.filtered().len();
        let pages = total.div_ceil(self.page_size).max(1);
        (self.carousel_cursor / self.page_size, pages)
    }

    pub fn move_carousel(&mut self, delta: isize) {
        let len = self.filtered().len();
        if len == 0 {
            self.carousel_cursor = 0;
            return;
        }
        let next = self.carousel_cursor as isize + delta;
        self.carousel_cursor = next.clamp(0, len as isize - 1) as usize;
    }

    pub fn move_board(&mut self, delta: isize) {
        let next = self.board_slot as isize + delta;
        self.board_slot = next.clamp(0, SLOTS_PER_SIDE as isize - 1) as usize;
    }

    /// Keep the cursor inside the filtered list after the filter changes.
    pub fn clamp_carousel(&mut self) {
        let len = self.filtered().len();
        if self.carousel_cursor >= len {
            self.carousel_cursor = len.saturating_sub(1);
        }
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::CatalogLoaded(catalog) => {
            state.catalog = Some(*catalog);
            state.catalog_status = CatalogStatus::Ready;
            state.clamp_carousel();
        }
        UiUpdate::CatalogFailed(message) => {
            state.catalog = None;
            state.catalog_status = CatalogStatus::Failed(message);
        }
        UiUpdate::Board(board) => {
            state.board = *board;
        }
        UiUpdate::Teams(teams) => {
            state.teams = teams;
        }
        UiUpdate::PredictionStarted => {
            state.submit_status = SubmitStatus::InFlight;
            state.message = Some("Requesting prediction...".into());
        }
        UiUpdate::PredictionReady(prediction) => {
            state.submit_status = SubmitStatus::Idle;
            state.prediction = Some(*prediction);
            state.message = None;
        }
        UiUpdate::PredictionFailed(message) => {
            state.submit_status = SubmitStatus::Failed;
            state.message = Some(message);
        }
        UiUpdate::ResultsCleared => {
            state.prediction = None;
            state.submit_status = SubmitStatus::Idle;
        }
        UiUpdate::Message(message) => {
            state.message = Some(message);
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::teams::render(frame, layout.teams, state);
    widgets::catalog::render(frame, layout.carousel, state);
    widgets::board::render(frame, layout.board, state);
    widgets::results::render(frame, layout.results, state);
    widgets::status_bar::render_help(frame, layout.help_bar, state);

    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop until the user quits or the app hangs up.
///
/// 1. Initialize the terminal and install a panic hook that restores it.
/// 2. Select over UI updates, keyboard input and the render tick.
/// 3. Restore the terminal on exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
    page_size: usize,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::new(page_size);
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    // App is shutting down
                    None => break,
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            let _ = cmd_tx.send(cmd).await;
                            if quit {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(_)) | None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::Local;
    use draftcast_core::config::CatalogConfig;
    use draftcast_core::draft::ChampionPick;
    use draftcast_core::oracle::PredictionResult;
    use draftcast_core::render::render;

    pub(crate) fn sample_catalog(n: usize) -> ChampionCatalog {
        let config = CatalogConfig {
            base_url: "https://ddragon.leagueoflegends.com/cdn".into(),
            version: "15.1.1".into(),
            locale: "pt_BR".into(),
        };
        let entries = (0..n)
            .map(|i| ChampionEntry {
                id: format!("Champ{i:02}"),
                name: format!("Champion {i:02}"),
                icon_ref: format!("Champ{i:02}.png"),
            })
            .collect();
        ChampionCatalog::from_entries(entries, &config)
    }

    /// All symbols of the rendered buffer, row-major, as one string.
    pub(crate) fn buffer_text(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    pub(crate) fn sample_prediction() -> PredictionView {
        let stats: Vec<serde_json::Value> = ["TOP", "JNG", "MID", "BOT", "SUP"]
            .iter()
            .map(|r| serde_json::json!({"role": r, "player": "Robo", "mastery": 0.62, "streak": 2}))
            .collect();
        let body = serde_json::json!({
            "blue_win_percent": 58.4,
            "red_win_percent": 41.6,
            "blue_stats": stats,
            "red_stats": stats,
            "comparison": [
                {"role": "TOP", "mastery_edge": "Blue", "mastery_val": 0.1,
                 "form_edge": "Red", "form_val": 0.05},
                {"role": "MID", "mastery_edge": "Red", "mastery_val": 0.2,
                 "form_edge": "Red", "form_val": 0.0}
            ]
        });
        let result = PredictionResult::from_json(&body.to_string()).unwrap();
        PredictionView {
            view: render(&result),
            received_at: Local::now(),
        }
    }

    #[test]
    fn view_state_default_is_sensible() {
        let state = ViewState::default();
        assert!(state.catalog.is_none());
        assert_eq!(state.catalog_status, CatalogStatus::Loading);
        assert_eq!(state.focus, Focus::Carousel);
        assert_eq!(state.page_size, 12);
        assert_eq!(state.submit_status, SubmitStatus::Idle);
        assert!(state.prediction.is_none());
        assert!(state.held.is_none());
        assert!(!state.filter_mode);
        assert!(!state.confirm_quit);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        assert_eq!(ViewState::new(0).page_size, 1);
    }

    #[test]
    fn paging_tracks_cursor() {
        let mut state = ViewState::new(5);
        apply_ui_update(&mut state, UiUpdate::CatalogLoaded(Box::new(sample_catalog(12))));
        assert_eq!(state.page(), (0, 3));
        state.move_carousel(7);
        assert_eq!(state.page(), (1, 3));
        state.move_carousel(100);
        assert_eq!(state.carousel_cursor, 11);
        assert_eq!(state.page(), (2, 3));
        state.move_carousel(-100);
        assert_eq!(state.carousel_cursor, 0);
    }

    #[test]
    fn filter_narrows_selection() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::CatalogLoaded(Box::new(sample_catalog(20))));
        state.carousel_cursor = 15;
        state.filter_text = "champion 1".into();
        state.clamp_carousel();
        // "Champion 10" .. "Champion 19"
        assert_eq!(state.filtered().len(), 10);
        assert_eq!(state.carousel_cursor, 9);
        assert_eq!(state.selected_entry().unwrap().id, "Champ19");
    }

    #[test]
    fn catalog_failure_leaves_carousel_empty() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::CatalogFailed("timeout".into()));
        assert_eq!(state.catalog_status, CatalogStatus::Failed("timeout".into()));
        assert!(state.filtered().is_empty());
        assert!(state.selected_entry().is_none());
        assert_eq!(state.page(), (0, 1));
    }

    #[test]
    fn board_snapshot_replaces_board() {
        let mut state = ViewState::default();
        let mut board = DraftBoard::new();
        board.assign(Side::Red, 2, ChampionPick::new("Azir", "Azir.png")).unwrap();
        apply_ui_update(&mut state, UiUpdate::Board(Box::new(board.clone())));
        assert_eq!(state.board, board);
    }

    #[test]
    fn prediction_lifecycle() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::PredictionStarted);
        assert_eq!(state.submit_status, SubmitStatus::InFlight);

        apply_ui_update(&mut state, UiUpdate::PredictionReady(Box::new(sample_prediction())));
        assert_eq!(state.submit_status, SubmitStatus::Idle);
        assert!(state.prediction.is_some());

        // A later failure keeps the earlier result visible
        apply_ui_update(&mut state, UiUpdate::PredictionStarted);
        apply_ui_update(&mut state, UiUpdate::PredictionFailed("HTTP 500".into()));
        assert_eq!(state.submit_status, SubmitStatus::Failed);
        assert!(state.prediction.is_some());
        assert_eq!(state.message.as_deref(), Some("HTTP 500"));

        apply_ui_update(&mut state, UiUpdate::ResultsCleared);
        assert!(state.prediction.is_none());
    }

    #[test]
    fn render_frame_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(160, 50);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::CatalogLoaded(Box::new(sample_catalog(30))));
        apply_ui_update(&mut state, UiUpdate::PredictionReady(Box::new(sample_prediction())));
        state.confirm_quit = true;
        terminal
            .draw(|frame| render_frame(frame, &state))
            .unwrap();
    }

    #[test]
    fn render_frame_small_terminal() {
        let backend = ratatui::backend::TestBackend::new(40, 12);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render_frame(frame, &state))
            .unwrap();
    }
}
