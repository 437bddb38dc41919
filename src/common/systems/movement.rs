//! Pure Movement Planning
//!
//! Turns a hover or click target into a [`MovePlan`] without touching the
//! grid or the actor. The controller renders and commits from the plan.

use serde::{Deserialize, Serialize};
use tilegrid::{Grid, Xy};

use crate::common::components::{Actor, ActorId};

/// A route the actor could take this turn.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MovePlan {
    /// Start cell first, target last
    pub path: Vec<Xy>,
    /// Steps taken, `path.len() - 1`
    pub cost: u16,
    /// Drives the cost label tint. [`plan`] searches within the remaining
    /// budget, so plans it returns are always affordable.
    pub affordable: bool,
}

impl MovePlan {
    pub fn target(&self) -> Xy {
        self.path[self.path.len() - 1]
    }

    /// Cells after the start, numbered from 1.
    pub fn steps(&self) -> impl Iterator<Item = (usize, Xy)> + '_ {
        self.path.iter().copied().enumerate().skip(1)
    }
}

/// Plan a move for `actor` to `target` within its remaining movement points.
pub fn plan(grid: &Grid<ActorId>, actor: &Actor, target: Xy) -> Option<MovePlan> {
    let path = grid.find_path(actor.loc, target, actor.movement_points)?;
    let cost = (path.len() - 1) as u16;
    Some(MovePlan { affordable: cost <= actor.movement_points, cost, path })
}
