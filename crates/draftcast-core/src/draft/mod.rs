// Draft model: sides, roles, the pick payload, the board and team selection.

pub mod board;
pub mod teams;

pub use board::{DraftBoard, DraftError, RoleSlot};
pub use teams::{TeamSelection, TeamSelector};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of role slots per side.
pub const SLOTS_PER_SIDE: usize = 5;

/// One of the two opposing allegiances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Blue, Side::Red];

    /// Localized label shown in the results tables.
    pub fn label(self) -> &'static str {
        match self {
            Side::Blue => "Azul",
            Side::Red => "Vermelho",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Blue => write!(f, "Blue"),
            Side::Red => write!(f, "Red"),
        }
    }
}

/// The five lanes/roles, in the order the oracle expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Bottom,
    Support,
}

impl Role {
    /// All roles in slot order. Slot `i` on either side holds `ALL[i]`.
    pub const ALL: [Role; SLOTS_PER_SIDE] = [
        Role::Top,
        Role::Jungle,
        Role::Mid,
        Role::Bottom,
        Role::Support,
    ];

    /// Role key used by the prediction service ("top", "jng", ...).
    pub fn wire_key(self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::Jungle => "jng",
            Role::Mid => "mid",
            Role::Bottom => "bot",
            Role::Support => "sup",
        }
    }

    /// Short upper-case label for slot headers.
    pub fn display_str(self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JNG",
            Role::Mid => "MID",
            Role::Bottom => "BOT",
            Role::Support => "SUP",
        }
    }
}

/// What gets dragged onto a slot: the champion id plus the catalog's
/// authoritative icon file name, so the icon never has to be re-derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionPick {
    pub id: String,
    pub icon_ref: String,
}

impl ChampionPick {
    pub fn new(id: impl Into<String>, icon_ref: impl Into<String>) -> Self {
        ChampionPick {
            id: id.into(),
            icon_ref: icon_ref.into(),
        }
    }
}
