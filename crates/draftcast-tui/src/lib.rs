// Library root: re-exports the app modules so integration tests can drive
// the orchestrator and the view state directly.

pub mod app;
pub mod protocol;
pub mod tui;
