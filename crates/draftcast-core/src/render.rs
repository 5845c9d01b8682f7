// Projection of a prediction result onto the three result regions.
//
// Everything here is a pure function of its input so the TUI can redraw the
// same view every frame without keeping any derived state of its own.

use serde::Serialize;

use crate::draft::Side;
use crate::oracle::{PlayerStat, PredictionResult, RoleComparison};

/// Visual channel used to colour an edge cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EdgeChannel {
    Blue,
    Red,
}

/// Recent form bucket derived from the sign of a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Form {
    Hot,
    Cold,
    Neutral,
}

impl Form {
    pub fn from_streak(streak: i32) -> Self {
        match streak.signum() {
            1 => Form::Hot,
            -1 => Form::Cold,
            _ => Form::Neutral,
        }
    }

    pub fn display_str(self) -> &'static str {
        match self {
            Form::Hot => "Hot",
            Form::Cold => "Cold",
            Form::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinSplit {
    pub blue_percent: f64,
    pub red_percent: f64,
    pub blue_text: String,
    pub red_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerCell {
    pub player: String,
    pub mastery_text: String,
    pub streak_text: String,
    pub form: Form,
}

/// One line of the primary table: the same role for both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimaryRow {
    pub role: String,
    pub blue: PlayerCell,
    /// `None` when the red side sent fewer stats than the blue side.
    pub red: Option<PlayerCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub role: String,
    pub mastery_label: &'static str,
    pub mastery_channel: EdgeChannel,
    pub mastery_text: String,
    pub form_label: &'static str,
    pub form_channel: EdgeChannel,
    pub form_text: String,
}

/// Everything the result panel draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub win: WinSplit,
    pub primary_rows: Vec<PrimaryRow>,
    pub comparison_rows: Vec<ComparisonRow>,
}

/// Locale label for the side holding an edge.
pub fn edge_label(side: Side) -> &'static str {
    side.label()
}

pub fn edge_channel(side: Side) -> EdgeChannel {
    match side {
        Side::Blue => EdgeChannel::Blue,
        Side::Red => EdgeChannel::Red,
    }
}

/// `3W`, `2L`, or `-` for no streak.
pub fn format_streak(streak: i32) -> String {
    match streak {
        0 => "-".to_string(),
        n if n > 0 => format!("{n}W"),
        n => format!("{}L", n.unsigned_abs()),
    }
}

/// A `[0, 1]` fraction as a whole percent.
pub fn format_fraction(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

/// A signed gap between two fractions, as unsigned percentage points.
fn format_gap(value: f64) -> String {
    format!("{:.1} pp", value.abs() * 100.0)
}

fn player_cell(stat: &PlayerStat) -> PlayerCell {
    PlayerCell {
        player: stat.player.clone(),
        mastery_text: format_fraction(stat.mastery),
        streak_text: format_streak(stat.streak),
        form: Form::from_streak(stat.streak),
    }
}

fn comparison_row(c: &RoleComparison) -> ComparisonRow {
    ComparisonRow {
        role: c.role.clone(),
        mastery_label: edge_label(c.mastery_edge),
        mastery_channel: edge_channel(c.mastery_edge),
        mastery_text: format_gap(c.mastery_val),
        form_label: edge_label(c.form_edge),
        form_channel: edge_channel(c.form_edge),
        form_text: format_gap(c.form_val),
    }
}

pub fn render(result: &PredictionResult) -> ResultView {
    let win = WinSplit {
        blue_percent: result.blue_win_percent,
        red_percent: result.red_win_percent,
        blue_text: format!("{:.1}%", result.blue_win_percent),
        red_text: format!("{:.1}%", result.red_win_percent),
    };

    let primary_rows = result
        .blue_stats
        .iter()
        .enumerate()
        .map(|(i, blue)| PrimaryRow {
            role: blue.role.clone(),
            blue: player_cell(blue),
            red: result.red_stats.get(i).map(player_cell),
        })
        .collect();

    let comparison_rows = result.comparison.iter().map(comparison_row).collect();

    ResultView {
        win,
        primary_rows,
        comparison_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(role: &str, player: &str, mastery: f64, streak: i32) -> PlayerStat {
        PlayerStat {
            role: role.into(),
            player: player.into(),
            mastery,
            streak,
        }
    }

    fn cmp(role: &str, mastery_edge: Side, form_edge: Side) -> RoleComparison {
        RoleComparison {
            role: role.into(),
            mastery_edge,
            mastery_val: 0.042,
            form_edge,
            form_val: -0.1,
        }
    }

    fn result(comparison: Vec<RoleComparison>) -> PredictionResult {
        let roles = ["TOP", "JNG", "MID", "BOT", "SUP"];
        PredictionResult {
            blue_win_percent: 61.3,
            red_win_percent: 38.7,
            blue_stats: roles
                .iter()
                .map(|r| stat(r, &format!("blue-{r}"), 0.55, 3))
                .collect(),
            red_stats: roles
                .iter()
                .map(|r| stat(r, &format!("red-{r}"), 0.5, -2))
                .collect(),
            comparison,
        }
    }

    #[test]
    fn three_comparisons_give_three_labelled_rows() {
        let r = result(vec![
            cmp("TOP", Side::Blue, Side::Red),
            cmp("MID", Side::Red, Side::Red),
            cmp("SUP", Side::Blue, Side::Blue),
        ]);
        let view = render(&r);
        assert_eq!(view.comparison_rows.len(), 3);
        let labels: Vec<&str> = view.comparison_rows.iter().map(|c| c.mastery_label).collect();
        assert_eq!(labels, vec!["Azul", "Vermelho", "Azul"]);
        assert_eq!(view.comparison_rows[1].mastery_channel, EdgeChannel::Red);
        assert_eq!(view.comparison_rows[0].form_label, "Vermelho");
    }

    #[test]
    fn primary_rows_follow_stats_length() {
        let mut r = result(vec![]);
        let view = render(&r);
        assert_eq!(view.primary_rows.len(), 5);
        assert!(view.comparison_rows.is_empty());

        r.blue_stats.truncate(3);
        assert_eq!(render(&r).primary_rows.len(), 3);
    }

    #[test]
    fn shorter_red_side_leaves_blank_cells() {
        let mut r = result(vec![]);
        r.red_stats.truncate(4);
        let view = render(&r);
        assert!(view.primary_rows[3].red.is_some());
        assert!(view.primary_rows[4].red.is_none());
    }

    #[test]
    fn cells_are_formatted() {
        let view = render(&result(vec![cmp("TOP", Side::Blue, Side::Red)]));
        assert_eq!(view.win.blue_text, "61.3%");
        assert_eq!(view.win.red_text, "38.7%");

        let row = &view.primary_rows[0];
        assert_eq!(row.role, "TOP");
        assert_eq!(row.blue.player, "blue-TOP");
        assert_eq!(row.blue.mastery_text, "55%");
        assert_eq!(row.blue.streak_text, "3W");
        assert_eq!(row.blue.form, Form::Hot);
        let red = row.red.as_ref().unwrap();
        assert_eq!(red.streak_text, "2L");
        assert_eq!(red.form, Form::Cold);

        assert_eq!(view.comparison_rows[0].mastery_text, "4.2 pp");
        assert_eq!(view.comparison_rows[0].form_text, "10.0 pp");
    }

    #[test]
    fn streak_formatting() {
        assert_eq!(format_streak(0), "-");
        assert_eq!(format_streak(1), "1W");
        assert_eq!(format_streak(-4), "4L");
        assert_eq!(Form::from_streak(0), Form::Neutral);
    }

    #[test]
    fn render_is_deterministic() {
        let r = result(vec![cmp("BOT", Side::Red, Side::Blue)]);
        assert_eq!(render(&r), render(&r));
    }
}
