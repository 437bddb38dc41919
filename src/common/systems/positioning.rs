//! Pre-combat positioning queries.
//!
//! A cell accepts a unit during placement when it is walkable, inside the
//! positioning zone and nobody stands on it.

use std::ops::Range;

use tilegrid::{Grid, Xy};

use crate::common::components::ActorId;

pub fn is_valid_positioning_cell(grid: &Grid<ActorId>, xy: Xy) -> bool {
    grid.cell(xy).is_some_and(|cell| cell.walkable && cell.positioning_zone && cell.occupied.is_none())
}

/// Every valid placement cell, `y` outer and `x` inner.
pub fn valid_positioning_cells(grid: &Grid<ActorId>) -> Vec<Xy> {
    grid.positions().filter(|&xy| is_valid_positioning_cell(grid, xy)).collect()
}

/// Flag whole rows as positioning zone; rows outside the grid are skipped.
pub fn mark_zone_rows(grid: &mut Grid<ActorId>, rows: Range<i16>) {
    let rows = rows.start.max(0)..rows.end.min(grid.height());
    for y in rows {
        for x in 0..grid.width() { grid.set_positioning_zone(Xy::new(x, y), true); }
    }
}
