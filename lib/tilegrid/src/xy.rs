use std::ops::Mul;

use derive_more::{Add, Sub};
use serde::{Deserialize, Serialize};

/// Orthogonal steps, clockwise from north.
pub const DIRECTIONS: [Xy; 4] = [
        Xy { x: 0, y: -1 }, // north
        Xy { x: 1, y: 0 },  // east
        Xy { x: 0, y: 1 },  // south
        Xy { x: -1, y: 0 }, // west
];

/// A square tile coordinate. `y` grows downward, matching screen space.
#[derive(Add, Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Sub)]
pub struct Xy {
    pub x: i16,
    pub y: i16,
}

impl Xy {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Manhattan distance; the number of orthogonal steps on an open grid.
    pub fn distance(&self, other: &Xy) -> u16 {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs()
    }

    pub fn neighbors(&self) -> impl Iterator<Item = Xy> + '_ {
        DIRECTIONS.iter().map(move |&dir| *self + dir)
    }
}

impl Mul<i16> for Xy {
    type Output = Xy;
    fn mul(self, rhs: i16) -> Self::Output {
        Xy { x: self.x * rhs, y: self.y * rhs }
    }
}

impl From<(i16, i16)> for Xy {
    fn from((x, y): (i16, i16)) -> Self {
        Xy { x, y }
    }
}
