// Champion carousel: one page of the filtered catalog at a time.
//
// The highlighted entry is what Enter picks up; its icon URL is shown on the
// last line since the terminal cannot draw the image itself.

use std::ops::Range;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::protocol::Focus;
use crate::tui::{CatalogStatus, ViewState};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let filtered = state.filtered();
    let (page, pages) = state.page();
    let focused = state.focus == Focus::Carousel;

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(build_title(state, filtered.len(), page, pages));

    let lines: Vec<Line> = match &state.catalog_status {
        CatalogStatus::Loading => vec![Line::from("Loading champions...")],
        CatalogStatus::Failed(_) => vec![Line::from(Span::styled(
            "Champion catalog unavailable",
            Style::default().fg(Color::Red),
        ))],
        CatalogStatus::Ready if filtered.is_empty() => vec![Line::from("No champions match")],
        CatalogStatus::Ready => {
            let mut lines: Vec<Line> = page_bounds(filtered.len(), page, state.page_size)
                .map(|i| {
                    let entry = filtered[i];
                    if i == state.carousel_cursor {
                        let style = if focused {
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Cyan)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().add_modifier(Modifier::BOLD)
                        };
                        Line::from(Span::styled(format!("> {}", entry.name), style))
                    } else {
                        Line::from(format!("  {}", entry.name))
                    }
                })
                .collect();

            if let (Some(entry), Some(catalog)) = (state.selected_entry(), &state.catalog) {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    catalog.icon_url(&entry.icon_ref),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines
        }
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Indices of `page` within a list of `total` items.
pub fn page_bounds(total: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = (page * page_size).min(total);
    let end = (start + page_size).min(total);
    start..end
}

fn build_title(state: &ViewState, count: usize, page: usize, pages: usize) -> String {
    let mut title = String::from("Champions");
    if !state.filter_text.is_empty() || state.filter_mode {
        let cursor = if state.filter_mode { "_" } else { "" };
        title.push_str(&format!(" /{}{}", state.filter_text, cursor));
    }
    title.push_str(&format!(" ({}) {}/{}", count, page + 1, pages));
    title
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::UiUpdate;
    use crate::tui::apply_ui_update;
    use crate::tui::tests::{buffer_text, sample_catalog};

    #[test]
    fn page_bounds_clamps_last_page() {
        assert_eq!(page_bounds(10, 0, 4), 0..4);
        assert_eq!(page_bounds(10, 2, 4), 8..10);
        assert_eq!(page_bounds(10, 5, 4), 10..10);
        assert_eq!(page_bounds(0, 0, 4), 0..0);
    }

    #[test]
    fn title_shows_filter_and_page() {
        let mut state = ViewState::new(4);
        apply_ui_update(&mut state, UiUpdate::CatalogLoaded(Box::new(sample_catalog(10))));
        assert_eq!(build_title(&state, 10, 0, 3), "Champions (10) 1/3");
        state.filter_text = "ch".into();
        state.filter_mode = true;
        assert_eq!(build_title(&state, 10, 1, 3), "Champions /ch_ (10) 2/3");
    }

    #[test]
    fn renders_only_current_page() {
        let backend = ratatui::backend::TestBackend::new(100, 12);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::new(3);
        apply_ui_update(&mut state, UiUpdate::CatalogLoaded(Box::new(sample_catalog(10))));
        state.carousel_cursor = 4;

        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Champion 03"));
        assert!(text.contains("> Champion 04"));
        assert!(text.contains("Champion 05"));
        assert!(!text.contains("Champion 02"));
        assert!(!text.contains("Champion 06"));
        assert!(text.contains("img/champion/Champ04.png"));
    }

    #[test]
    fn render_loading_and_failed() {
        let backend = ratatui::backend::TestBackend::new(40, 8);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        assert!(buffer_text(&terminal).contains("Loading champions"));

        apply_ui_update(&mut state, UiUpdate::CatalogFailed("refused".into()));
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        assert!(buffer_text(&terminal).contains("unavailable"));
    }
}
