// Team selector widget: one dropdown per side plus the chosen starting five.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use draftcast_core::draft::Side;

use crate::protocol::TeamsView;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let halves = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (side, rect) in [(Side::Blue, halves[0]), (Side::Red, halves[1])] {
        let (color, keys) = match side {
            Side::Blue => (Color::Blue, "b/B"),
            Side::Red => (Color::Red, "r/R"),
        };

        let name_style = if state.teams.team(side).is_some() {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let lines = vec![
            Line::from(Span::styled(team_name(&state.teams, side), name_style)),
            Line::from(lineup_text(&state.teams, side)),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!("{} [{}]", side.label(), keys));
        frame.render_widget(Paragraph::new(lines).block(block), rect);
    }
}

pub fn team_name(teams: &TeamsView, side: Side) -> String {
    teams
        .team(side)
        .map(str::to_string)
        .unwrap_or_else(|| "(no team)".to_string())
}

/// "Robo / Croc / Tinowns / Route / RedBert", or empty when unset.
pub fn lineup_text(teams: &TeamsView, side: Side) -> String {
    teams.lineup(side).join(" / ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
