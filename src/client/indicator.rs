//! Movement Indicators
//!
//! Path markers, cost labels and positioning highlights are transient
//! entities. Whoever spawns one keeps its [`Entity`] and despawns it when the
//! overlay it belongs to goes away; a renderer picks them up by querying for
//! [`Indicator`].

use bevy_ecs::prelude::*;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Tint for a cost label the actor can pay for
pub const AFFORDABLE_TINT: u32 = 0x00ff00;
/// Tint for a cost label beyond the remaining budget
pub const UNAFFORDABLE_TINT: u32 = 0xff0000;
pub const PATH_STEP_TINT: u32 = 0x3399ff;
pub const POSITIONING_TINT: u32 = 0xffff00;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum IndicatorKind {
    /// One cell of a previewed path, numbered from 1
    PathStep { step: usize },
    /// Movement point cost shown on the target cell
    CostLabel { cost: u16, affordable: bool },
    /// Pulsing marker on a free positioning cell
    PositioningHighlight,
}

impl IndicatorKind {
    pub fn tint(&self) -> u32 {
        match self {
            IndicatorKind::PathStep { .. } => PATH_STEP_TINT,
            IndicatorKind::CostLabel { affordable: true, .. } => AFFORDABLE_TINT,
            IndicatorKind::CostLabel { affordable: false, .. } => UNAFFORDABLE_TINT,
            IndicatorKind::PositioningHighlight => POSITIONING_TINT,
        }
    }

    pub fn pulses(&self) -> bool {
        matches!(self, IndicatorKind::PositioningHighlight)
    }

    pub fn label(&self) -> Option<String> {
        match self {
            IndicatorKind::PathStep { step } => Some(step.to_string()),
            IndicatorKind::CostLabel { cost, .. } => Some(format!("{cost} PM")),
            IndicatorKind::PositioningHighlight => None,
        }
    }
}

/// Marks an overlay entity and says what it shows
#[derive(Clone, Component, Copy, Debug, PartialEq)]
pub struct Indicator {
    pub kind: IndicatorKind,
}

/// World position of an overlay entity
#[derive(Clone, Component, Copy, Debug, Default, PartialEq)]
pub struct Translation(pub Vec2);

#[derive(Clone, Component, Copy, Debug, PartialEq)]
pub struct Tint(pub u32);

/// Highlight that should throb rather than sit still
#[derive(Clone, Component, Copy, Debug, Default)]
pub struct Pulse;

/// Spawn one indicator entity with everything a renderer needs.
pub fn spawn(world: &mut World, kind: IndicatorKind, at: Vec2) -> Entity {
    let mut ent = world.spawn((Indicator { kind }, Translation(at), Tint(kind.tint())));
    if kind.pulses() { ent.insert(Pulse); }
    ent.id()
}
