// Team selection: which organization plays on each side.

use serde::{Deserialize, Serialize};

use crate::config::TeamRoster;
use crate::oracle::ValidationError;

use super::{Role, Side};

/// The two chosen organization names. Empty string means "not chosen".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSelection {
    pub blue_team_name: String,
    pub red_team_name: String,
}

/// Holds the enumerated roster and the current choice for each side.
///
/// Independent of the draft board; the two only meet at submission.
#[derive(Debug, Clone)]
pub struct TeamSelector {
    roster: Vec<TeamRoster>,
    blue: Option<String>,
    red: Option<String>,
}

impl TeamSelector {
    pub fn new(roster: Vec<TeamRoster>) -> Self {
        TeamSelector {
            roster,
            blue: None,
            red: None,
        }
    }

    /// Names offered by the dropdowns, in roster order.
    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.roster.iter().map(|t| t.name.as_str())
    }

    /// Record a choice. The name is not checked here; `validate` does that
    /// at the submission boundary.
    pub fn set_team(&mut self, side: Side, name: impl Into<String>) {
        *self.choice_mut(side) = Some(name.into());
    }

    /// Back to "no team".
    pub fn clear_team(&mut self, side: Side) {
        *self.choice_mut(side) = None;
    }

    pub fn team(&self, side: Side) -> Option<&str> {
        match side {
            Side::Blue => self.blue.as_deref(),
            Side::Red => self.red.as_deref(),
        }
    }

    pub fn get_selection(&self) -> TeamSelection {
        TeamSelection {
            blue_team_name: self.blue.clone().unwrap_or_default(),
            red_team_name: self.red.clone().unwrap_or_default(),
        }
    }

    /// Step the dropdown for `side` through unset -> first -> ... -> last ->
    /// unset (or backwards). Returns the new choice.
    pub fn cycle(&mut self, side: Side, forward: bool) -> Option<&str> {
        let len = self.roster.len();
        let current = self
            .team(side)
            .and_then(|name| self.roster.iter().position(|t| t.name == name));

        // Position len stands for "unset" so the ring has len + 1 stops.
        let pos = current.unwrap_or(len);
        let next = if forward {
            (pos + 1) % (len + 1)
        } else {
            (pos + len) % (len + 1)
        };

        let choice = self.roster.get(next).map(|t| t.name.clone());
        match choice {
            Some(name) => self.set_team(side, name),
            None => self.clear_team(side),
        }
        self.team(side)
    }

    /// Check both sides are chosen and known. Returns the selection on success.
    pub fn validate(&self) -> Result<TeamSelection, ValidationError> {
        let selection = self.get_selection();
        if selection.blue_team_name.trim().is_empty() || selection.red_team_name.trim().is_empty()
        {
            return Err(ValidationError::TeamsIncomplete);
        }
        for name in [&selection.blue_team_name, &selection.red_team_name] {
            if !self.roster.iter().any(|t| &t.name == name) {
                return Err(ValidationError::UnknownTeam(name.clone()));
            }
        }
        Ok(selection)
    }

    /// Starting five of the organization chosen for `side`, in role order.
    pub fn lineup(&self, side: Side) -> Option<Vec<(Role, &str)>> {
        let name = self.team(side)?;
        let team = self.roster.iter().find(|t| t.name == name)?;
        Some(Role::ALL.iter().map(|&r| (r, team.player(r))).collect())
    }

    fn choice_mut(&mut self, side: Side) -> &mut Option<String> {
        match side {
            Side::Blue => &mut self.blue,
            Side::Red => &mut self.red,
        }
    }
}
