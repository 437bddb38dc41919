use glam::Vec2;
use serde::{Deserialize, Serialize};
use tilegrid::Xy;

/// Health bar sits this far above the actor's translation (y grows downward)
pub const HEALTH_BAR_OFFSET: Vec2 = Vec2::new(0., -24.);

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ActorId(pub u32);

/// Screen-linked health indicator that has to follow its actor around
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct HealthBar {
    pub anchor: Vec2,
    pub current: u16,
    pub max: u16,
}

impl HealthBar {
    pub fn new(max: u16) -> Self {
        Self { anchor: Vec2::ZERO, current: max, max }
    }

    pub fn follow(&mut self, translation: Vec2) {
        self.anchor = translation + HEALTH_BAR_OFFSET;
    }
}

/// Movement state of a unit taking part in combat.
///
/// `movement_points` is the budget left this turn. The turn system spends and
/// restores it; movement previews and commits only read it.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Actor {
    pub id: ActorId,
    pub loc: Xy,
    pub movement_points: u16,
    pub max_movement_points: u16,
    /// World position of the actor's sprite
    pub translation: Vec2,
    pub health_bar: Option<HealthBar>,
}

impl Actor {
    pub fn new(id: ActorId, loc: Xy, max_movement_points: u16) -> Self {
        Self {
            id,
            loc,
            movement_points: max_movement_points,
            max_movement_points,
            translation: Vec2::ZERO,
            health_bar: None,
        }
    }

    pub fn with_health_bar(mut self, max: u16) -> Self {
        let mut bar = HealthBar::new(max);
        bar.follow(self.translation);
        self.health_bar = Some(bar);
        self
    }

    /// Move the sprite and anything pinned to it.
    pub fn place(&mut self, translation: Vec2) {
        self.translation = translation;
        if let Some(bar) = self.health_bar.as_mut() { bar.follow(translation); }
    }

    /// Deduct `cost` points if the budget covers it.
    pub fn spend_movement(&mut self, cost: u16) -> bool {
        let Some(left) = self.movement_points.checked_sub(cost) else { return false };
        self.movement_points = left;
        true
    }

    pub fn reset_movement(&mut self) {
        self.movement_points = self.max_movement_points;
    }
}
