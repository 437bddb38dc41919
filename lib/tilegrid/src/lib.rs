mod xy;
mod grid;

pub use xy::{Xy, DIRECTIONS};
pub use grid::{Cell, Convert, Grid};
