//! Headless overlay.
//!
//! Reads indicator entities back out of the world and draws them, together
//! with the grid, as text.

use std::{collections::BTreeMap, fmt::Write};

use bevy_ecs::prelude::*;
use glam::Vec2;
use tilegrid::{Convert, Grid, Xy};

use crate::{
    client::indicator::{Indicator, IndicatorKind, Translation},
    common::components::ActorId,
};

/// Every live indicator, sorted by entity so output is stable
pub fn live_indicators(world: &mut World) -> Vec<(IndicatorKind, Vec2)> {
    let mut query = world.query::<(Entity, &Indicator, &Translation)>();
    let mut live: Vec<(Entity, IndicatorKind, Vec2)> = query.iter(world)
        .map(|(ent, indicator, translation)| (ent, indicator.kind, translation.0))
        .collect();
    live.sort_by_key(|&(ent, _, _)| ent);
    live.into_iter().map(|(_, kind, at)| (kind, at)).collect()
}

pub fn count(world: &mut World) -> usize {
    world.query::<&Indicator>().iter(world).count()
}

/// Draw the grid one character per cell, followed by any cost labels.
///
/// `#` blocked, `@` the given actor, `E` any other occupant, digits for
/// path steps (last digit), `*` positioning highlight, `+` positioning
/// zone without highlight, `.` open ground.
pub fn render(world: &mut World, grid: &Grid<ActorId>, actor: ActorId) -> String {
    let mut marks: BTreeMap<Xy, char> = BTreeMap::new();
    let mut labels = Vec::new();
    for (kind, at) in live_indicators(world) {
        let xy: Xy = grid.convert(at);
        match kind {
            IndicatorKind::PathStep { step } => {
                let digit = char::from_digit((step % 10) as u32, 10).unwrap_or('?');
                marks.insert(xy, digit);
            }
            IndicatorKind::PositioningHighlight => { marks.insert(xy, '*'); }
            IndicatorKind::CostLabel { cost, affordable } => labels.push((xy, cost, affordable)),
        }
    }

    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let xy = Xy::new(x, y);
            let Some(cell) = grid.cell(xy) else { continue };
            let ch = match (cell.occupied, marks.get(&xy)) {
                (Some(id), _) if id == actor => '@',
                (Some(_), _) => 'E',
                (None, Some(&mark)) => mark,
                (None, None) if !cell.walkable => '#',
                (None, None) if cell.positioning_zone => '+',
                (None, None) => '.',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    for (xy, cost, affordable) in labels {
        let verdict = if affordable { "affordable" } else { "too far" };
        let _ = writeln!(out, "({},{}): {} PM, {}", xy.x, xy.y, cost, verdict);
    }
    out
}
