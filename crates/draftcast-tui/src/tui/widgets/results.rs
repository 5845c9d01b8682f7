// Prediction results: win split, per-player table, per-role comparison.
//
// Draws a `ResultView` as-is. Row counts come from the view, never from the
// role count.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use draftcast_core::draft::Side;
use draftcast_core::render::{EdgeChannel, Form, PlayerCell, ResultView};

use crate::protocol::SubmitStatus;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(prediction) = &state.prediction else {
        render_placeholder(frame, area, state);
        return;
    };
    let view = &prediction.view;

    let title = format!("Prediction @ {}", prediction.received_at.format("%H:%M:%S"));
    let outer = Block::default().borders(Borders::ALL).title(title);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let sections = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(view.primary_rows.len() as u16 + 2),
        Constraint::Min(0),
    ])
    .split(inner);

    frame.render_widget(Paragraph::new(win_line(view)), sections[0]);
    frame.render_widget(primary_table(view), sections[1]);
    frame.render_widget(comparison_table(view), sections[2]);
}

fn render_placeholder(frame: &mut Frame, area: Rect, state: &ViewState) {
    let text = match state.submit_status {
        SubmitStatus::InFlight => "Waiting for the prediction service...",
        _ => "No prediction yet. Fill the draft, pick both teams, press s.",
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    )))
    .block(Block::default().borders(Borders::ALL).title("Prediction"));
    frame.render_widget(paragraph, area);
}

pub fn channel_color(channel: EdgeChannel) -> Color {
    match channel {
        EdgeChannel::Blue => Color::Blue,
        EdgeChannel::Red => Color::Red,
    }
}

pub fn form_color(form: Form) -> Color {
    match form {
        Form::Hot => Color::Green,
        Form::Cold => Color::Red,
        Form::Neutral => Color::Gray,
    }
}

fn win_line(view: &ResultView) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{} {}", Side::Blue.label(), view.win.blue_text),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  vs  "),
        Span::styled(
            format!("{} {}", view.win.red_text, Side::Red.label()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn player_cells(cell: Option<&PlayerCell>) -> [Cell<'static>; 3] {
    match cell {
        Some(c) => [
            Cell::from(c.player.clone()),
            Cell::from(c.mastery_text.clone()),
            Cell::from(c.streak_text.clone()).style(Style::default().fg(form_color(c.form))),
        ],
        None => [Cell::from(""), Cell::from(""), Cell::from("")],
    }
}

fn primary_table(view: &ResultView) -> Table<'static> {
    let header = Row::new(vec!["Role", "Azul", "M", "S", "Vermelho", "M", "S"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = view
        .primary_rows
        .iter()
        .map(|row| {
            let mut cells = vec![Cell::from(row.role.clone())];
            cells.extend(player_cells(Some(&row.blue)));
            cells.extend(player_cells(row.red.as_ref()));
            Row::new(cells)
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(4),
            Constraint::Length(3),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::TOP).title("Players"))
}

fn comparison_table(view: &ResultView) -> Table<'static> {
    let header = Row::new(vec!["Role", "Mastery", "", "Form", ""])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = view
        .comparison_rows
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(c.role.clone()),
                Cell::from(c.mastery_label)
                    .style(Style::default().fg(channel_color(c.mastery_channel))),
                Cell::from(c.mastery_text.clone()),
                Cell::from(c.form_label).style(Style::default().fg(channel_color(c.form_channel))),
                Cell::from(c.form_text.clone()),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::TOP).title("Edges"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
