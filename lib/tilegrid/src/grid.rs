//! # Grid: Square Tile Occupancy with World Space Conversion
//!
//! A fixed-size rectangular grid of [`Cell`]s addressed by [`Xy`]. Each cell
//! records whether it can be walked on, which occupant (if any) stands on it,
//! and whether it belongs to the pre-combat positioning zone.
//!
//! ## Features
//!
//! - **Occupancy**: at most one occupant per cell, claimed and released explicitly
//! - **Conversion**: Xy ↔ Vec2 through the [`Convert`] trait, relative to a screen origin
//! - **Path search**: A* bounded by a movement budget
//!
//! ## Example
//!
//! ```rust
//! use tilegrid::{Convert, Grid, Xy};
//! use glam::Vec2;
//!
//! let mut grid: Grid<u32> = Grid::new(5, 5, 32., Vec2::ZERO);
//! grid.set_walkable(Xy::new(2, 0), false);
//!
//! let path = grid.find_path(Xy::new(0, 0), Xy::new(3, 0), 5).unwrap();
//! assert_eq!(path.len() - 1, 5);
//!
//! let center: Vec2 = grid.convert(Xy::new(1, 0));
//! assert_eq!(center, Vec2::new(48., 16.));
//! ```

use std::fmt::Debug;

use derive_more::IntoIterator;
use glam::Vec2;
use log::{trace, warn};
use pathfinding::prelude::astar;
use serde::{Deserialize, Serialize};

use crate::xy::Xy;

/// Trait for bidirectional coordinate conversion
pub trait Convert<T, U> {
    /// Convert from type T to type U
    fn convert(&self, it: T) -> U;
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Cell<T> {
    pub walkable: bool,
    pub occupied: Option<T>,
    pub positioning_zone: bool,
}

impl<T> Default for Cell<T> {
    fn default() -> Self {
        Self { walkable: true, occupied: None, positioning_zone: false }
    }
}

impl<T> Cell<T> {
    /// Walkable and nobody standing on it.
    pub fn is_passable(&self) -> bool {
        self.walkable && self.occupied.is_none()
    }
}

/// A rectangular tile grid with world space conversion.
///
/// # Type Parameters
///
/// - `T`: the occupant handle stored in occupied cells (an actor id, usually)
///
/// Cells are stored row-major, so iterating the grid visits `y` outer and
/// `x` inner.
#[derive(Clone, Debug, Deserialize, IntoIterator, Serialize)]
pub struct Grid<T> {
    width: i16,
    height: i16,
    tile_size: f32,
    origin: Vec2,
    #[into_iterator(owned, ref, ref_mut)]
    cells: Vec<Cell<T>>,
}

impl<T> Grid<T>
where T: Copy + Debug + PartialEq {
    /// A grid with every cell walkable, free and outside the positioning zone.
    pub fn new(width: i16, height: i16, tile_size: f32, origin: Vec2) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let cells = (0..width as usize * height as usize).map(|_| Cell::default()).collect();
        Self { width, height, tile_size, origin, cells }
    }

    pub fn width(&self) -> i16 { self.width }
    pub fn height(&self) -> i16 { self.height }
    pub fn tile_size(&self) -> f32 { self.tile_size }
    pub fn origin(&self) -> Vec2 { self.origin }

    pub fn in_bounds(&self, xy: Xy) -> bool {
        xy.x >= 0 && xy.y >= 0 && xy.x < self.width && xy.y < self.height
    }

    fn index(&self, xy: Xy) -> Option<usize> {
        self.in_bounds(xy).then(|| xy.y as usize * self.width as usize + xy.x as usize)
    }

    pub fn cell(&self, xy: Xy) -> Option<&Cell<T>> {
        self.index(xy).map(|i| &self.cells[i])
    }

    fn cell_mut(&mut self, xy: Xy) -> Option<&mut Cell<T>> {
        let Some(i) = self.index(xy) else {
            warn!("ignoring update to {:?}, outside {}x{} grid", xy, self.width, self.height);
            return None;
        };
        Some(&mut self.cells[i])
    }

    /// Every coordinate of the grid, `y` outer and `x` inner.
    pub fn positions(&self) -> impl Iterator<Item = Xy> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Xy { x, y }))
    }

    pub fn is_passable(&self, xy: Xy) -> bool {
        self.cell(xy).is_some_and(Cell::is_passable)
    }

    pub fn occupant(&self, xy: Xy) -> Option<T> {
        self.cell(xy).and_then(|cell| cell.occupied)
    }

    /// Where `occupant` currently stands, if anywhere.
    pub fn locate(&self, occupant: T) -> Option<Xy> {
        self.positions().find(|&xy| self.occupant(xy) == Some(occupant))
    }

    pub fn set_walkable(&mut self, xy: Xy, walkable: bool) {
        if let Some(cell) = self.cell_mut(xy) { cell.walkable = walkable; }
    }

    pub fn set_free(&mut self, xy: Xy) {
        if let Some(cell) = self.cell_mut(xy) { cell.occupied = None; }
    }

    pub fn set_occupied(&mut self, xy: Xy, occupant: T) {
        if let Some(cell) = self.cell_mut(xy) {
            if let Some(prev) = cell.occupied.filter(|&prev| prev != occupant) {
                warn!("{:?} displaces {:?} at {:?}", occupant, prev, xy);
            }
            cell.occupied = Some(occupant);
        }
    }

    pub fn set_positioning_zone(&mut self, xy: Xy, zone: bool) {
        if let Some(cell) = self.cell_mut(xy) { cell.positioning_zone = zone; }
    }

    pub fn clear_positioning_zones(&mut self) {
        for cell in &mut self.cells { cell.positioning_zone = false; }
    }

    /// Shortest orthogonal path from `from` to `to`, both inclusive.
    ///
    /// Returns `None` when `to` is blocked, occupied or out of bounds, when no
    /// route exists, or when the route would take more than `max_cost` steps.
    /// The start cell is never checked, since the mover is standing on it.
    pub fn find_path(&self, from: Xy, to: Xy, max_cost: u16) -> Option<Vec<Xy>> {
        if !self.in_bounds(from) { return None }
        if from == to { return Some(vec![from]) }
        if !self.is_passable(to) || from.distance(&to) > max_cost { return None }

        let (path, cost) = astar(
            &from,
            |&l| l.neighbors().filter(|&n| self.is_passable(n)).map(|n| (n, 1_u16)).collect::<Vec<_>>(),
            |&l| l.distance(&to),
            |&l| l == to,
        )?;

        if cost > max_cost {
            trace!("path {:?} -> {:?} costs {}, budget {}", from, to, cost, max_cost);
            return None;
        }
        Some(path)
    }
}

impl<T> Convert<Xy, Vec2> for Grid<T> {
    /// Center of the tile in world space.
    fn convert(&self, xy: Xy) -> Vec2 {
        let half = self.tile_size / 2.;
        self.origin + Vec2::new(
            xy.x as f32 * self.tile_size + half,
            xy.y as f32 * self.tile_size + half,
        )
    }
}

impl<T> Convert<Vec2, Xy> for Grid<T> {
    fn convert(&self, world: Vec2) -> Xy {
        let local = (world - self.origin) / self.tile_size;
        Xy { x: local.x.floor() as i16, y: local.y.floor() as i16 }
    }
}
