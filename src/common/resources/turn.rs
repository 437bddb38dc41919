use bevy_ecs::prelude::*;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Read side of the turn system, as seen by input handling
pub trait TurnState {
    /// True when the locally controlled actor may act
    fn is_player_turn(&self) -> bool;

    /// True during pre-combat placement
    fn is_positioning(&self) -> bool { false }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum CombatPhase {
    /// Units are being placed inside the positioning zone; nobody moves yet
    #[default]
    Positioning,
    Combat,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Side {
    #[default]
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Turn ownership for a two-sided fight.
///
/// Rounds are counted from 1 once combat begins; a round ends each time the
/// turn comes back to the player.
#[derive(Clone, Debug, Default, Deserialize, Resource, Serialize)]
pub struct TurnTracker {
    phase: CombatPhase,
    side: Side,
    round: u32,
}

impl TurnTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CombatPhase { self.phase }
    pub fn side(&self) -> Side { self.side }
    pub fn round(&self) -> u32 { self.round }

    pub fn begin_combat(&mut self) {
        if self.phase == CombatPhase::Combat { return }
        self.phase = CombatPhase::Combat;
        self.side = Side::Player;
        self.round = 1;
        info!("combat begins");
    }

    /// Pass the turn to the other side and return who acts next.
    pub fn end_turn(&mut self) -> Side {
        if self.phase == CombatPhase::Positioning {
            debug!("end_turn ignored during positioning");
            return self.side;
        }
        self.side = self.side.opponent();
        if self.side == Side::Player { self.round += 1; }
        debug!("round {}: {:?} to act", self.round, self.side);
        self.side
    }
}

impl TurnState for TurnTracker {
    fn is_player_turn(&self) -> bool {
        self.phase == CombatPhase::Combat && self.side == Side::Player
    }

    fn is_positioning(&self) -> bool {
        self.phase == CombatPhase::Positioning
    }
}
