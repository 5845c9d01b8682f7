// Draft board widget: the ten drop targets, one row per role.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use draftcast_core::draft::{ChampionPick, Role, Side};

use crate::protocol::Focus;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let focused = state.focus == Focus::Board;

    let header = Row::new(vec![
        Cell::from("Role"),
        Cell::from(Side::Blue.label()).style(Style::default().fg(Color::Blue)),
        Cell::from(Side::Red.label()).style(Style::default().fg(Color::Red)),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let blue = state.board.slots(Side::Blue);
    let red = state.board.slots(Side::Red);

    let rows: Vec<Row> = Role::ALL
        .iter()
        .enumerate()
        .map(|(i, role)| {
            let cell = |side: Side, pick: Option<&ChampionPick>| {
                let cursor = focused && state.board_side == side && state.board_slot == i;
                let style = if cursor {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else if pick.is_none() {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default()
                };
                Cell::from(format_slot(pick)).style(style)
            };
            Row::new(vec![
                Cell::from(role.display_str()),
                cell(Side::Blue, blue[i].occupant.as_ref()),
                cell(Side::Red, red[i].occupant.as_ref()),
            ])
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(build_title(state)),
    );

    frame.render_widget(table, area);
}

pub fn format_slot(pick: Option<&ChampionPick>) -> String {
    match pick {
        Some(p) => p.id.clone(),
        None => "--".to_string(),
    }
}

fn build_title(state: &ViewState) -> String {
    let filled = state.board.filled_count(Side::Blue) + state.board.filled_count(Side::Red);
    match &state.held {
        Some(entry) => format!("Draft {}/10 [holding {}]", filled, entry.name),
        None => format!("Draft {}/10", filled),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
