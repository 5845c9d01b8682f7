// Status bar (catalog state, submit state, inline message) and help bar.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::{Focus, SubmitStatus};
use crate::tui::{CatalogStatus, ViewState};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (dot, dot_color) = catalog_indicator(&state.catalog_status);
    let mut spans = vec![
        Span::styled(format!(" {} ", dot), Style::default().fg(dot_color)),
        Span::styled(catalog_label(state), Style::default().fg(Color::White)),
        Span::styled(" | ", Style::default().fg(Color::Gray)),
    ];

    let (label, style) = submit_label(state.submit_status);
    spans.push(Span::styled(label, style));

    if let Some(message) = &state.message {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        let color = if state.submit_status == SubmitStatus::Failed {
            Color::Red
        } else {
            Color::Yellow
        };
        spans.push(Span::styled(message.clone(), Style::default().fg(color)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

pub fn render_help(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        help_text(state),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

pub fn catalog_indicator(status: &CatalogStatus) -> (&'static str, Color) {
    match status {
        CatalogStatus::Loading => ("●", Color::Yellow),
        CatalogStatus::Ready => ("●", Color::Green),
        CatalogStatus::Failed(_) => ("●", Color::Red),
    }
}

fn catalog_label(state: &ViewState) -> String {
    match (&state.catalog_status, &state.catalog) {
        (CatalogStatus::Ready, Some(catalog)) => format!("{} champions", catalog.len()),
        (CatalogStatus::Failed(_), _) => "catalog failed".to_string(),
        _ => "loading catalog".to_string(),
    }
}

/// The submit trigger, greyed out while a request is outstanding.
pub fn submit_label(status: SubmitStatus) -> (&'static str, Style) {
    match status {
        SubmitStatus::Idle => ("[s] Predict", Style::default().fg(Color::Green)),
        SubmitStatus::InFlight => (
            "[s] Predicting...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        ),
        SubmitStatus::Failed => ("[s] Retry", Style::default().fg(Color::Yellow)),
    }
}

pub fn help_text(state: &ViewState) -> &'static str {
    if state.confirm_quit {
        " y:Quit | n/Esc:Cancel"
    } else if state.filter_mode {
        " type to filter | Enter:Keep | Esc:Clear"
    } else {
        match state.focus {
            Focus::Carousel => {
                " Tab:Board | ←→↑↓:Browse | PgUp/PgDn:Page | Enter:Pick up | /:Filter | b/r:Teams | s:Predict | x:Reset | q:Quit"
            }
            Focus::Board => {
                " Tab:Champions | ↑↓:Slot | ←→:Side | Enter:Drop | Del:Clear | Esc:Drop held | s:Predict | x:Reset | q:Quit"
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
