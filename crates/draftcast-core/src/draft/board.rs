// Draft board: ten role slots, five per side.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::{ChampionPick, Role, Side, SLOTS_PER_SIDE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("slot index {index} out of range (0..{SLOTS_PER_SIDE})")]
    SlotOutOfRange { index: usize },
}

/// A single role slot on one side of the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSlot {
    pub role: Role,
    pub occupant: Option<ChampionPick>,
}

/// Both sides' role assignments.
///
/// Each side is a fixed-size array, so the five-slots-per-side invariant
/// holds by construction. The same champion may sit in several slots, on
/// either side; no uniqueness is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftBoard {
    blue: [RoleSlot; SLOTS_PER_SIDE],
    red: [RoleSlot; SLOTS_PER_SIDE],
}

impl Default for DraftBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftBoard {
    /// An empty board with slots in `Role::ALL` order on both sides.
    pub fn new() -> Self {
        let empty = || {
            Role::ALL.map(|role| RoleSlot {
                role,
                occupant: None,
            })
        };
        DraftBoard {
            blue: empty(),
            red: empty(),
        }
    }

    /// Put `pick` in the given slot, replacing whatever was there.
    pub fn assign(
        &mut self,
        side: Side,
        slot_index: usize,
        pick: ChampionPick,
    ) -> Result<(), DraftError> {
        let slot = self.slot_mut(side, slot_index)?;
        debug!(
            "{} {}: {:?} -> {}",
            side,
            slot.role.display_str(),
            slot.occupant.as_ref().map(|p| p.id.as_str()),
            pick.id
        );
        slot.occupant = Some(pick);
        Ok(())
    }

    /// Empty the given slot. Clearing an already-empty slot is a no-op.
    pub fn clear(&mut self, side: Side, slot_index: usize) -> Result<(), DraftError> {
        self.slot_mut(side, slot_index)?.occupant = None;
        Ok(())
    }

    /// Empty all ten slots.
    pub fn reset(&mut self) {
        *self = DraftBoard::new();
    }

    pub fn slots(&self, side: Side) -> &[RoleSlot; SLOTS_PER_SIDE] {
        match side {
            Side::Blue => &self.blue,
            Side::Red => &self.red,
        }
    }

    /// Occupant ids of one side, in slot order.
    pub fn read_all(&self, side: Side) -> [Option<&str>; SLOTS_PER_SIDE] {
        let slots = self.slots(side);
        std::array::from_fn(|i| slots[i].occupant.as_ref().map(|p| p.id.as_str()))
    }

    pub fn is_complete(&self, side: Side) -> bool {
        self.slots(side).iter().all(|s| s.occupant.is_some())
    }

    pub fn is_fully_complete(&self) -> bool {
        self.is_complete(Side::Blue) && self.is_complete(Side::Red)
    }

    pub fn filled_count(&self, side: Side) -> usize {
        self.slots(side)
            .iter()
            .filter(|s| s.occupant.is_some())
            .count()
    }

    /// The five champion ids of a side, or `None` if any slot is empty.
    pub fn champion_ids(&self, side: Side) -> Option<Vec<String>> {
        self.slots(side)
            .iter()
            .map(|s| s.occupant.as_ref().map(|p| p.id.clone()))
            .collect()
    }

    fn slot_mut(&mut self, side: Side, slot_index: usize) -> Result<&mut RoleSlot, DraftError> {
        let slots = match side {
            Side::Blue => &mut self.blue,
            Side::Red => &mut self.red,
        };
        slots
            .get_mut(slot_index)
            .ok_or(DraftError::SlotOutOfRange { index: slot_index })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
