// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------------------+
// | Status Bar (1 row)                                            |
// +--------------------------------------------------------------+
// | Teams (4 rows): Azul dropdown + lineup | Vermelho dropdown    |
// +-------------------+-------------------+----------------------+
// | Carousel (30%)     | Board (30%)       | Results (40%)        |
// +-------------------+-------------------+----------------------+
// | Help Bar (1 row)                                              |
// +--------------------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    pub status_bar: Rect,
    pub teams: Rect,
    /// Champion catalog, one page at a time.
    pub carousel: Rect,
    /// The ten role slots.
    pub board: Rect,
    pub results: Rect,
    pub help_bar: Rect,
}

pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Length(4), // teams
            Constraint::Min(9),    // carousel | board | results
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(vertical[2]);

    AppLayout {
        status_bar: vertical[0],
        teams: vertical[1],
        carousel: middle[0],
        board: middle[1],
        results: middle[2],
        help_bar: vertical[3],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
