use std::{fs, path::{Path, PathBuf}};

use anyhow::{bail, Context, Result};
use clap::Parser;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use tilegrid::{Grid, Xy};

use tile_tactics::common::{
    components::ActorId,
    systems::positioning,
};

#[derive(Debug, Parser)]
#[command(name = "skirmish", about = "Drive combat movement from a command script")]
pub struct Args {
    /// JSON scenario; replaces every grid option below
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    /// Command script, one command per line (stdin when omitted)
    #[arg(long)]
    pub script: Option<PathBuf>,

    #[arg(long, default_value_t = 8)]
    pub width: i16,

    #[arg(long, default_value_t = 8)]
    pub height: i16,

    #[arg(long, default_value_t = 32.)]
    pub tile_size: f32,

    #[arg(long, default_value_t = 3)]
    pub movement_points: u16,

    /// Starting cell as X,Y
    #[arg(long, value_parser = parse_xy, default_value = "0,7")]
    pub start: Xy,

    /// Unwalkable cell as X,Y; repeatable
    #[arg(long = "block", value_parser = parse_xy)]
    pub blocked: Vec<Xy>,

    /// Enemy-held cell as X,Y; repeatable
    #[arg(long = "enemy", value_parser = parse_xy)]
    pub enemies: Vec<Xy>,

    /// Rows at the bottom of the grid that form the positioning zone
    #[arg(long, default_value_t = 2)]
    pub zone_rows: i16,
}

pub fn parse_xy(s: &str) -> Result<Xy, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Xy { x, y })
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Scenario {
    pub width: i16,
    pub height: i16,
    pub tile_size: f32,
    pub origin: Vec2,
    pub movement_points: u16,
    pub start: Xy,
    pub blocked: Vec<Xy>,
    pub enemies: Vec<Xy>,
    pub zone_rows: i16,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            tile_size: 32.,
            origin: Vec2::ZERO,
            movement_points: 3,
            start: Xy::new(0, 7),
            blocked: Vec::new(),
            enemies: Vec::new(),
            zone_rows: 2,
        }
    }
}

impl Scenario {
    pub fn from_args(args: &Args) -> Result<Self> {
        let scenario = match &args.scenario {
            Some(path) => Self::load(path)?,
            None => Self {
                width: args.width,
                height: args.height,
                tile_size: args.tile_size,
                movement_points: args.movement_points,
                start: args.start,
                blocked: args.blocked.clone(),
                enemies: args.enemies.clone(),
                zone_rows: args.zone_rows,
                ..Self::default()
            },
        };
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing scenario {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            bail!("grid must be at least 1x1, got {}x{}", self.width, self.height);
        }
        if !(self.tile_size.is_finite() && self.tile_size > 0.) {
            bail!("tile size must be positive, got {}", self.tile_size);
        }
        if !self.origin.is_finite() {
            bail!("origin must be finite, got {}", self.origin);
        }
        if !(0..=self.height).contains(&self.zone_rows) {
            bail!("zone rows must be within 0..={}, got {}", self.height, self.zone_rows);
        }
        let inside = |xy: &Xy| xy.x >= 0 && xy.y >= 0 && xy.x < self.width && xy.y < self.height;
        if !inside(&self.start) {
            bail!("start {:?} is outside the {}x{} grid", self.start, self.width, self.height);
        }
        if self.blocked.contains(&self.start) || self.enemies.contains(&self.start) {
            bail!("start {:?} is blocked", self.start);
        }
        Ok(())
    }

    /// Enemies get ids from 100 up so they never collide with the player's.
    pub fn build_grid(&self) -> Grid<ActorId> {
        let mut grid = Grid::new(self.width, self.height, self.tile_size, self.origin);
        for &xy in &self.blocked { grid.set_walkable(xy, false); }
        for (i, &xy) in self.enemies.iter().enumerate() {
            grid.set_occupied(xy, ActorId(100 + i as u32));
        }
        positioning::mark_zone_rows(&mut grid, self.height.saturating_sub(self.zone_rows)..self.height);
        grid
    }
}
