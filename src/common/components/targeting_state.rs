//! Targeting State
//!
//! Tracks whether the controlled actor is busy choosing a spell target.
//! Movement previews are suppressed for as long as a spell is being aimed.

use bevy_ecs::prelude::*;
use log::debug;
use serde::{Deserialize, Serialize};

pub type SpellId = u16;

/// Read side handed to anything that must back off while a spell is aimed
pub trait TargetingState {
    fn is_targeting(&self) -> bool;
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum TargetingMode {
    /// Nothing selected; clicks on the grid are movement
    #[default]
    Idle,
    /// A spell is selected and waiting for a target cell
    Spell(SpellId),
}

/// Targeting mode of the locally controlled actor.
///
/// Lives in the world as a resource so the spell bar writes it and the
/// movement controller reads it without either holding the other.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Resource, Serialize)]
pub struct Targeting {
    pub mode: TargetingMode,
}

impl Targeting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_spell(&mut self, spell: SpellId) {
        debug!("targeting spell {}", spell);
        self.mode = TargetingMode::Spell(spell);
    }

    /// Back to idle, after a cast or a cancel
    pub fn cancel(&mut self) {
        self.mode = TargetingMode::Idle;
    }

    pub fn get_spell(&self) -> Option<SpellId> {
        match self.mode {
            TargetingMode::Spell(spell) => Some(spell),
            TargetingMode::Idle => None,
        }
    }
}

impl TargetingState for Targeting {
    fn is_targeting(&self) -> bool {
        matches!(self.mode, TargetingMode::Spell(_))
    }
}
