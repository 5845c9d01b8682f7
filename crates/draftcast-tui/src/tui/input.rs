// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages sent to the app
// orchestrator, or into local ViewState mutations (cursor movement, filter
// text, picking a champion up).
//
// Drag-and-drop on a keyboard: Enter on the carousel picks the highlighted
// champion up and moves focus to the board; Enter on a board slot drops it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use draftcast_core::draft::Side;

use super::ViewState;
use crate::protocol::{Focus, SubmitStatus, UserCommand};

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// app orchestrator. Returns `None` when it was handled locally.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Windows reports both press and release
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    if view_state.filter_mode {
        return handle_filter_mode(key_event, view_state);
    }

    match key_event.code {
        KeyCode::Tab | KeyCode::BackTab => {
            view_state.focus = match view_state.focus {
                Focus::Carousel => Focus::Board,
                Focus::Board => Focus::Carousel,
            };
            None
        }

        KeyCode::Char('/') => {
            view_state.filter_mode = true;
            view_state.focus = Focus::Carousel;
            None
        }

        KeyCode::Esc => {
            if view_state.held.take().is_some() {
                view_state.message = None;
            } else {
                view_state.filter_text.clear();
                view_state.clamp_carousel();
            }
            None
        }

        KeyCode::Up | KeyCode::Char('k') => {
            navigate(view_state, -1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            navigate(view_state, 1);
            None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            match view_state.focus {
                Focus::Carousel => view_state.move_carousel(-1),
                Focus::Board => view_state.board_side = Side::Blue,
            }
            None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            match view_state.focus {
                Focus::Carousel => view_state.move_carousel(1),
                Focus::Board => view_state.board_side = Side::Red,
            }
            None
        }
        KeyCode::PageUp => {
            view_state.move_carousel(-(view_state.page_size as isize));
            None
        }
        KeyCode::PageDown => {
            view_state.move_carousel(view_state.page_size as isize);
            None
        }

        KeyCode::Enter => match view_state.focus {
            Focus::Carousel => {
                if let Some(entry) = view_state.selected_entry().cloned() {
                    view_state.message = Some(format!("Holding {}: choose a slot", entry.name));
                    view_state.held = Some(entry);
                    view_state.focus = Focus::Board;
                }
                None
            }
            Focus::Board => {
                let entry = view_state.held.take()?;
                view_state.message = None;
                Some(UserCommand::Assign {
                    side: view_state.board_side,
                    slot: view_state.board_slot,
                    pick: entry.to_pick(),
                })
            }
        },

        KeyCode::Backspace | KeyCode::Delete if view_state.focus == Focus::Board => {
            Some(UserCommand::Clear {
                side: view_state.board_side,
                slot: view_state.board_slot,
            })
        }

        KeyCode::Char('b') => Some(UserCommand::CycleTeam {
            side: Side::Blue,
            forward: true,
        }),
        KeyCode::Char('B') => Some(UserCommand::CycleTeam {
            side: Side::Blue,
            forward: false,
        }),
        KeyCode::Char('r') => Some(UserCommand::CycleTeam {
            side: Side::Red,
            forward: true,
        }),
        KeyCode::Char('R') => Some(UserCommand::CycleTeam {
            side: Side::Red,
            forward: false,
        }),

        // Submit is disabled while a request is outstanding
        KeyCode::Char('s') => {
            if view_state.submit_status == SubmitStatus::InFlight {
                None
            } else {
                Some(UserCommand::Submit)
            }
        }

        KeyCode::Char('x') => {
            view_state.held = None;
            Some(UserCommand::ResetBoard)
        }

        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }

        _ => None,
    }
}

fn navigate(view_state: &mut ViewState, delta: isize) {
    match view_state.focus {
        Focus::Carousel => view_state.move_carousel(delta),
        Focus::Board => view_state.move_board(delta),
    }
}

/// `y`/`q` confirm, `n`/Esc cancel, anything else is swallowed.
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

/// Typing edits the filter; Enter keeps it, Esc discards it.
fn handle_filter_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc => {
            view_state.filter_mode = false;
            view_state.filter_text.clear();
        }
        KeyCode::Enter => {
            view_state.filter_mode = false;
        }
        KeyCode::Backspace => {
            view_state.filter_text.pop();
        }
        KeyCode::Char(c) => {
            view_state.filter_text.push(c);
            view_state.carousel_cursor = 0;
        }
        _ => return None,
    }
    view_state.clamp_carousel();
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
