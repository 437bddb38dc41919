//! Combat Movement Controller
//!
//! Handles hover previews and click commits for the locally controlled actor
//! during combat, and cell highlighting during pre-combat placement.
//!
//! # Indicators
//!
//! Every overlay entity the controller spawns is tracked by its [`Entity`].
//! At most one preview is live at a time: each preview or highlight call
//! despawns the previous set first, and `clear_movement_preview` or
//! `destroy` despawns whatever is left.
//!
//! # Suppression
//!
//! Previews only appear on the player's turn and while no spell is being
//! aimed. Both come from world resources behind the [`TurnState`] and
//! [`TargetingState`] traits; a missing resource counts as "may not move".

use std::{fmt, marker::PhantomData};

use bevy_ecs::prelude::*;
use log::{debug, info, trace, warn};
use tilegrid::{Convert, Grid, Xy};

use crate::{
    client::indicator::{self, IndicatorKind},
    common::{
        components::{Actor, ActorId, Targeting, TargetingState},
        resources::{TurnState, TurnTracker},
        systems::{movement::{self, MovePlan}, positioning},
    },
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MoveError {
    NotYourTurn,
    Targeting,
    OutOfBounds(Xy),
    /// No route to the cell within the remaining movement points
    Unreachable(Xy),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NotYourTurn => write!(f, "not your turn"),
            MoveError::Targeting => write!(f, "a spell is being targeted"),
            MoveError::OutOfBounds(xy) => write!(f, "({},{}) is outside the grid", xy.x, xy.y),
            MoveError::Unreachable(xy) => write!(f, "({},{}) is out of reach", xy.x, xy.y),
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlacementError {
    NotPositioning,
    InvalidCell(Xy),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::NotPositioning => write!(f, "placement is over"),
            PlacementError::InvalidCell(xy) => write!(f, "({},{}) is not a free positioning cell", xy.x, xy.y),
        }
    }
}

impl std::error::Error for PlacementError {}

pub struct MovementController<T = TurnTracker, G = Targeting> {
    world: World,
    grid: Grid<ActorId>,
    actor: Actor,
    indicators: Vec<Entity>,
    state: PhantomData<fn() -> (T, G)>,
}

impl<T, G> MovementController<T, G>
where
    T: TurnState + Resource,
    G: TargetingState + Resource,
{
    /// Takes ownership of the world (which carries the `T` and `G`
    /// resources), the grid and the actor. The actor's cell is claimed and
    /// its sprite placed on it.
    pub fn new(world: World, mut grid: Grid<ActorId>, mut actor: Actor) -> Self {
        if world.get_resource::<T>().is_none() { warn!("no turn state resource; movement stays locked"); }
        if world.get_resource::<G>().is_none() { warn!("no targeting state resource; movement stays locked"); }
        grid.set_occupied(actor.loc, actor.id);
        actor.place(grid.convert(actor.loc));
        Self { world, grid, actor, indicators: Vec::new(), state: PhantomData }
    }

    pub fn world(&self) -> &World { &self.world }
    pub fn world_mut(&mut self) -> &mut World { &mut self.world }
    pub fn grid(&self) -> &Grid<ActorId> { &self.grid }
    pub fn grid_mut(&mut self) -> &mut Grid<ActorId> { &mut self.grid }
    pub fn actor(&self) -> &Actor { &self.actor }
    pub fn actor_mut(&mut self) -> &mut Actor { &mut self.actor }

    /// Entities of the indicators currently shown
    pub fn indicators(&self) -> &[Entity] {
        &self.indicators
    }

    pub fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn is_positioning(&self) -> bool {
        self.world.get_resource::<T>().is_some_and(|turn| turn.is_positioning())
    }

    fn can_move(&self) -> Result<(), MoveError> {
        if !self.world.get_resource::<T>().is_some_and(|turn| turn.is_player_turn()) {
            return Err(MoveError::NotYourTurn)
        }
        if self.world.get_resource::<G>().map_or(true, |targeting| targeting.is_targeting()) {
            return Err(MoveError::Targeting)
        }
        Ok(())
    }

    fn spawn(&mut self, kind: IndicatorKind, xy: Xy) {
        let at = self.grid.convert(xy);
        let ent = indicator::spawn(&mut self.world, kind, at);
        self.indicators.push(ent);
    }

    /// Show the route to the hovered cell, numbered per step, with its cost
    /// on the target. Does nothing beyond clearing when movement is blocked
    /// or the cell is out of reach.
    pub fn show_movement_preview(&mut self, x: i16, y: i16) {
        self.clear_movement_preview();
        if let Err(err) = self.can_move() {
            trace!("preview suppressed: {}", err);
            return;
        }

        let Some(plan) = movement::plan(&self.grid, &self.actor, Xy::new(x, y)) else {
            trace!("no path from {:?} to ({},{}) within {}", self.actor.loc, x, y, self.actor.movement_points);
            return;
        };

        for (step, xy) in plan.steps() {
            self.spawn(IndicatorKind::PathStep { step }, xy);
        }
        self.spawn(IndicatorKind::CostLabel { cost: plan.cost, affordable: plan.affordable }, plan.target());
    }

    pub fn clear_movement_preview(&mut self) {
        for ent in self.indicators.drain(..) { self.world.despawn(ent); }
    }

    /// Commit the actor to a new cell without any validation.
    ///
    /// Callers are expected to have checked reachability (see
    /// [`try_move_to`](Self::try_move_to)). Out-of-grid targets are refused
    /// since the grid cannot hold the actor there.
    pub fn move_player_to_position(&mut self, x: i16, y: i16) {
        let to = Xy::new(x, y);
        if !self.grid.in_bounds(to) {
            warn!("refusing to move {:?} off the grid to {:?}", self.actor.id, to);
            return;
        }
        if let Some(other) = self.grid.occupant(to).filter(|&other| other != self.actor.id) {
            warn!("{:?} moved onto {:?} at {:?}; {:?} no longer holds a cell", self.actor.id, other, to, other);
        }

        let from = self.actor.loc;
        self.grid.set_free(from);
        self.actor.loc = to;
        self.grid.set_occupied(to, self.actor.id);
        self.actor.place(self.grid.convert(to));
        debug!("{:?} moved {:?} -> {:?}", self.actor.id, from, to);
    }

    /// Validate a click against turn, targeting mode and the remaining budget,
    /// then commit. The caller spends `plan.cost` movement points.
    pub fn try_move_to(&mut self, x: i16, y: i16) -> Result<MovePlan, MoveError> {
        self.can_move()?;
        let to = Xy::new(x, y);
        if !self.grid.in_bounds(to) { return Err(MoveError::OutOfBounds(to)) }
        let plan = movement::plan(&self.grid, &self.actor, to).ok_or(MoveError::Unreachable(to))?;

        self.clear_movement_preview();
        self.move_player_to_position(x, y);
        Ok(plan)
    }

    pub fn is_valid_positioning_cell(&self, x: i16, y: i16) -> bool {
        positioning::is_valid_positioning_cell(&self.grid, Xy::new(x, y))
    }

    pub fn get_valid_positioning_cells(&self) -> Vec<Xy> {
        positioning::valid_positioning_cells(&self.grid)
    }

    pub fn highlight_positioning_cells(&mut self) {
        self.clear_movement_preview();
        for xy in self.get_valid_positioning_cells() {
            self.spawn(IndicatorKind::PositioningHighlight, xy);
        }
    }

    /// Place the actor during pre-combat positioning and refresh highlights.
    pub fn place_actor(&mut self, x: i16, y: i16) -> Result<(), PlacementError> {
        if !self.is_positioning() { return Err(PlacementError::NotPositioning) }
        if !self.is_valid_positioning_cell(x, y) { return Err(PlacementError::InvalidCell(Xy::new(x, y))) }
        self.move_player_to_position(x, y);
        self.highlight_positioning_cells();
        Ok(())
    }

    /// Leave placement: highlights go away along with the zone itself.
    pub fn begin_combat(&mut self) {
        self.clear_movement_preview();
        self.grid.clear_positioning_zones();
        info!("{:?} enters combat at {:?}", self.actor.id, self.actor.loc);
    }

    /// Despawn every tracked indicator and hand the world back.
    pub fn destroy(mut self) -> World {
        self.clear_movement_preview();
        debug!("released movement controller for {:?}", self.actor.id);
        self.world
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::{
        client::{indicator::Indicator, overlay},
        common::components::{actor::HEALTH_BAR_OFFSET, HealthBar},
    };

    const PLAYER: ActorId = ActorId(1);

    type Controller = MovementController<TurnTracker, Targeting>;

    fn world(combat: bool) -> World {
        let mut world = World::new();
        let mut turns = TurnTracker::new();
        if combat { turns.begin_combat(); }
        world.insert_resource(turns);
        world.insert_resource(Targeting::new());
        world
    }

    /// 5x5 grid, (2,0) blocked, player at (0,0), combat already running.
    fn controller(movement_points: u16) -> Controller {
        let mut grid = Grid::new(5, 5, 32., Vec2::ZERO);
        grid.set_walkable(Xy::new(2, 0), false);
        let actor = Actor::new(PLAYER, Xy::new(0, 0), movement_points).with_health_bar(10);
        MovementController::new(world(true), grid, actor)
    }

    fn live<T: TurnState + Resource, G: TargetingState + Resource>(c: &mut MovementController<T, G>) -> Vec<IndicatorKind> {
        overlay::live_indicators(c.world_mut()).into_iter().map(|(kind, _)| kind).collect()
    }

    fn steps(c: &mut Controller) -> Vec<usize> {
        let mut steps: Vec<usize> = live(c).into_iter().filter_map(|kind| match kind {
            IndicatorKind::PathStep { step } => Some(step),
            _ => None,
        }).collect();
        steps.sort();
        steps
    }

    fn cost_labels(c: &mut Controller) -> Vec<(u16, bool)> {
        live(c).into_iter().filter_map(|kind| match kind {
            IndicatorKind::CostLabel { cost, affordable } => Some((cost, affordable)),
            _ => None,
        }).collect()
    }

    /// Occupancy checks for the single-cell-per-actor rule
    fn cells_held_by(grid: &Grid<ActorId>, id: ActorId) -> Vec<Xy> {
        grid.positions().filter(|&xy| grid.occupant(xy) == Some(id)).collect()
    }

    /// Stand-in resource serving both capabilities
    #[derive(Default, Resource)]
    struct Flags {
        player_turn: bool,
        targeting: bool,
    }

    impl TurnState for Flags {
        fn is_player_turn(&self) -> bool { self.player_turn }
    }

    impl TargetingState for Flags {
        fn is_targeting(&self) -> bool { self.targeting }
    }

    // ===== CONSTRUCTION =====

    #[test]
    fn test_new_claims_start_cell() {
        let c = controller(3);
        assert_eq!(cells_held_by(c.grid(), PLAYER), vec![Xy::new(0, 0)]);
        assert_eq!(c.actor().translation, Vec2::new(16., 16.));
        assert_eq!(c.indicator_count(), 0);
    }

    #[test]
    fn test_missing_resources_lock_movement() {
        let grid = Grid::new(5, 5, 32., Vec2::ZERO);
        let actor = Actor::new(PLAYER, Xy::new(0, 0), 3);
        let mut c: Controller = MovementController::new(World::new(), grid, actor);
        c.show_movement_preview(1, 0);
        assert_eq!(c.indicator_count(), 0);
        assert_eq!(c.try_move_to(1, 0), Err(MoveError::NotYourTurn));
        assert_eq!(c.place_actor(1, 0), Err(PlacementError::NotPositioning));
    }

    // ===== PREVIEW =====

    #[test]
    fn test_preview_marks_each_step_and_cost() {
        let mut c = controller(3);
        c.show_movement_preview(0, 3);

        assert_eq!(steps(&mut c), vec![1, 2, 3]);
        assert_eq!(cost_labels(&mut c), vec![(3, true)]);
        assert_eq!(c.indicator_count(), 4);
        assert_eq!(overlay::count(c.world_mut()), 4);
    }

    #[test]
    fn test_preview_tracks_spawned_entities() {
        let mut c = controller(3);
        c.show_movement_preview(1, 0);
        let ents = c.indicators().to_vec();
        assert_eq!(ents.len(), 2);
        for ent in ents {
            assert!(c.world().get::<Indicator>(ent).is_some());
        }
    }

    #[test]
    fn test_preview_cost_label_sits_on_target() {
        let mut c = controller(3);
        c.show_movement_preview(1, 1);

        let (_, at) = overlay::live_indicators(c.world_mut()).into_iter()
            .find(|(kind, _)| matches!(kind, IndicatorKind::CostLabel { .. }))
            .unwrap();
        let at: Xy = c.grid().convert(at);
        assert_eq!(at, Xy::new(1, 1));
    }

    #[test]
    fn test_preview_never_marks_start_cell() {
        let mut c = controller(3);
        c.show_movement_preview(1, 0);
        let start: Vec2 = c.grid().convert(Xy::new(0, 0));
        assert!(overlay::live_indicators(c.world_mut()).iter().all(|&(_, at)| at != start));
    }

    #[test]
    fn test_preview_around_blocked_cell_over_budget_shows_nothing() {
        let mut c = controller(3);
        c.show_movement_preview(3, 0);
        assert_eq!(c.indicator_count(), 0);
        assert_eq!(overlay::count(c.world_mut()), 0);
    }

    #[test]
    fn test_preview_around_blocked_cell_within_budget() {
        let mut c = controller(5);
        c.show_movement_preview(3, 0);
        assert_eq!(steps(&mut c), vec![1, 2, 3, 4, 5]);
        assert_eq!(cost_labels(&mut c), vec![(5, true)]);
    }

    #[test]
    fn test_preview_replaces_previous_preview() {
        let mut c = controller(3);
        c.show_movement_preview(0, 3);
        c.show_movement_preview(1, 0);
        assert_eq!(steps(&mut c), vec![1]);
        assert_eq!(cost_labels(&mut c), vec![(1, true)]);
        assert_eq!(c.indicator_count(), 2);
        assert_eq!(overlay::count(c.world_mut()), 2);
    }

    #[test]
    fn test_unreachable_hover_clears_old_preview() {
        let mut c = controller(3);
        c.show_movement_preview(0, 3);
        c.show_movement_preview(4, 4);
        assert_eq!(overlay::count(c.world_mut()), 0);
    }

    #[test]
    fn test_preview_suppressed_out_of_turn() {
        let mut c = controller(3);
        c.show_movement_preview(0, 2);
        c.world_mut().resource_mut::<TurnTracker>().end_turn();
        c.show_movement_preview(0, 3);
        assert_eq!(c.indicator_count(), 0);
        assert_eq!(overlay::count(c.world_mut()), 0);
    }

    #[test]
    fn test_preview_suppressed_while_targeting() {
        let mut c = controller(3);
        c.world_mut().resource_mut::<Targeting>().begin_spell(7);
        c.show_movement_preview(0, 3);
        assert_eq!(overlay::count(c.world_mut()), 0);

        c.world_mut().resource_mut::<Targeting>().cancel();
        c.show_movement_preview(0, 3);
        assert_eq!(c.indicator_count(), 4);
    }

    #[test]
    fn test_preview_suppressed_during_positioning() {
        let grid = Grid::new(5, 5, 32., Vec2::ZERO);
        let actor = Actor::new(PLAYER, Xy::new(0, 0), 3);
        let mut c: Controller = MovementController::new(world(false), grid, actor);
        c.show_movement_preview(1, 1);
        assert_eq!(overlay::count(c.world_mut()), 0);
    }

    #[test]
    fn test_preview_with_stand_in_resources() {
        let mut world = World::new();
        world.insert_resource(Flags { player_turn: true, targeting: false });
        let grid = Grid::new(5, 5, 32., Vec2::ZERO);
        let actor = Actor::new(PLAYER, Xy::new(0, 0), 4);
        let mut c: MovementController<Flags, Flags> = MovementController::new(world, grid, actor);

        c.show_movement_preview(2, 2);
        assert_eq!(live(&mut c).len(), 5);

        c.world_mut().resource_mut::<Flags>().targeting = true;
        c.show_movement_preview(2, 2);
        assert!(live(&mut c).is_empty());

        {
            let mut flags = c.world_mut().resource_mut::<Flags>();
            flags.targeting = false;
            flags.player_turn = false;
        }
        c.show_movement_preview(2, 2);
        assert!(live(&mut c).is_empty());
    }

    #[test]
    fn test_commit_ignores_cost_label() {
        // plans are bounded by the budget, so the controller only ever draws
        // affordable labels; a budget cut after the hover does not redraw it
        // and does not stop an unconditional commit either
        let mut c = controller(3);
        c.show_movement_preview(0, 3);
        c.actor_mut().movement_points = 0;
        assert_eq!(cost_labels(&mut c), vec![(3, true)]);
        c.move_player_to_position(0, 3);
        assert_eq!(c.actor().loc, Xy::new(0, 3));
    }

    // ===== CLEAR =====

    #[test]
    fn test_clear_despawns_everything() {
        let mut c = controller(3);
        c.show_movement_preview(0, 3);
        let ents = c.indicators().to_vec();
        c.clear_movement_preview();
        assert_eq!(c.indicator_count(), 0);
        assert_eq!(overlay::count(c.world_mut()), 0);
        for ent in ents {
            assert!(c.world().get::<Indicator>(ent).is_none(), "{:?} outlived the clear", ent);
        }
    }

    #[test]
    fn test_clear_with_nothing_shown() {
        let mut c = controller(3);
        c.clear_movement_preview();
        c.clear_movement_preview();
        assert_eq!(c.indicator_count(), 0);
    }

    #[test]
    fn test_clear_leaves_other_entities_alone() {
        let mut c = controller(3);
        let other = c.world_mut().spawn(Indicator { kind: IndicatorKind::PositioningHighlight }).id();
        c.show_movement_preview(0, 1);
        c.clear_movement_preview();
        assert!(c.world().get::<Indicator>(other).is_some());
    }

    // ===== COMMIT =====

    #[test]
    fn test_move_updates_occupancy_and_visuals() {
        let mut c = controller(3);
        assert_eq!(cells_held_by(c.grid(), PLAYER).len(), 1);

        c.move_player_to_position(1, 2);

        assert_eq!(c.grid().occupant(Xy::new(0, 0)), None);
        assert_eq!(c.grid().occupant(Xy::new(1, 2)), Some(PLAYER));
        assert_eq!(c.actor().loc, Xy::new(1, 2));
        assert_eq!(cells_held_by(c.grid(), PLAYER), vec![Xy::new(1, 2)]);

        let world: Vec2 = c.grid().convert(Xy::new(1, 2));
        assert_eq!(c.actor().translation, world);
        let bar: HealthBar = c.actor().health_bar.unwrap();
        assert_eq!(bar.anchor, world + HEALTH_BAR_OFFSET);
    }

    #[test]
    fn test_move_is_unconditional() {
        let mut c = controller(1);
        c.world_mut().resource_mut::<TurnTracker>().end_turn();
        c.move_player_to_position(4, 4);
        assert_eq!(c.actor().loc, Xy::new(4, 4));
        assert_eq!(c.actor().movement_points, 1, "points are spent by the turn system");
    }

    #[test]
    fn test_move_onto_occupied_cell_displaces_occupant() {
        let mut c = controller(3);
        let other = ActorId(2);
        c.grid_mut().set_occupied(Xy::new(1, 1), other);

        c.move_player_to_position(1, 1);

        assert_eq!(c.grid().occupant(Xy::new(1, 1)), Some(PLAYER));
        assert!(cells_held_by(c.grid(), other).is_empty());
        assert_eq!(cells_held_by(c.grid(), PLAYER), vec![Xy::new(1, 1)]);
    }

    #[test]
    fn test_move_off_grid_is_refused() {
        let mut c = controller(3);
        c.move_player_to_position(-1, 0);
        assert_eq!(c.actor().loc, Xy::new(0, 0));
        assert_eq!(cells_held_by(c.grid(), PLAYER), vec![Xy::new(0, 0)]);
    }

    #[test]
    fn test_try_move_commits_reachable_target() {
        let mut c = controller(3);
        c.show_movement_preview(1, 1);

        let plan = c.try_move_to(1, 1).unwrap();
        assert_eq!(plan.cost, 2);
        assert!(plan.affordable);
        assert_eq!(c.actor().loc, Xy::new(1, 1));
        assert_eq!(overlay::count(c.world_mut()), 0);
    }

    #[test]
    fn test_try_move_rejections() {
        let mut c = controller(3);

        assert_eq!(c.try_move_to(3, 0), Err(MoveError::Unreachable(Xy::new(3, 0))));
        assert_eq!(c.try_move_to(2, 0), Err(MoveError::Unreachable(Xy::new(2, 0))));
        assert_eq!(c.try_move_to(9, 0), Err(MoveError::OutOfBounds(Xy::new(9, 0))));

        c.world_mut().resource_mut::<Targeting>().begin_spell(1);
        assert_eq!(c.try_move_to(1, 0), Err(MoveError::Targeting));
        c.world_mut().resource_mut::<Targeting>().cancel();

        c.world_mut().resource_mut::<TurnTracker>().end_turn();
        assert_eq!(c.try_move_to(1, 0), Err(MoveError::NotYourTurn));
        assert_eq!(c.actor().loc, Xy::new(0, 0));
    }

    #[test]
    fn test_try_move_respects_spent_points() {
        let mut c = controller(3);
        let plan = c.try_move_to(0, 2).unwrap();
        assert!(c.actor_mut().spend_movement(plan.cost));
        assert_eq!(c.try_move_to(0, 4), Err(MoveError::Unreachable(Xy::new(0, 4))));
        assert!(c.try_move_to(0, 3).is_ok());
    }

    // ===== POSITIONING =====

    fn positioning_controller() -> Controller {
        let mut grid = Grid::new(4, 4, 32., Vec2::ZERO);
        positioning::mark_zone_rows(&mut grid, 3..4);
        grid.set_walkable(Xy::new(0, 3), false);
        grid.set_occupied(Xy::new(3, 3), ActorId(2));
        let actor = Actor::new(PLAYER, Xy::new(1, 3), 3);
        MovementController::new(world(false), grid, actor)
    }

    #[test]
    fn test_positioning_queries() {
        let c = positioning_controller();
        assert!(c.is_valid_positioning_cell(2, 3));
        assert!(!c.is_valid_positioning_cell(0, 3), "blocked");
        assert!(!c.is_valid_positioning_cell(1, 3), "player stands there");
        assert!(!c.is_valid_positioning_cell(3, 3), "ally stands there");
        assert!(!c.is_valid_positioning_cell(2, 2), "outside zone");
        assert!(!c.is_valid_positioning_cell(-1, 3));
        assert!(!c.is_valid_positioning_cell(4, 3));
        assert_eq!(c.get_valid_positioning_cells(), vec![Xy::new(2, 3)]);
    }

    #[test]
    fn test_highlight_then_destroy_leaves_nothing() {
        let mut c = positioning_controller();
        c.grid_mut().set_positioning_zone(Xy::new(0, 0), true);
        c.highlight_positioning_cells();
        assert_eq!(c.indicator_count(), 2);
        assert!(live(&mut c).iter().all(|&kind| kind == IndicatorKind::PositioningHighlight));

        let mut world = c.destroy();
        assert_eq!(overlay::count(&mut world), 0);
    }

    #[test]
    fn test_highlight_twice_does_not_accumulate() {
        let mut c = positioning_controller();
        c.highlight_positioning_cells();
        c.highlight_positioning_cells();
        assert_eq!(overlay::count(c.world_mut()), 1);
    }

    #[test]
    fn test_place_actor() {
        let mut c = positioning_controller();
        c.highlight_positioning_cells();

        assert_eq!(c.place_actor(0, 3), Err(PlacementError::InvalidCell(Xy::new(0, 3))));
        assert_eq!(c.place_actor(2, 3), Ok(()));
        assert_eq!(c.actor().loc, Xy::new(2, 3));
        // (1,3) is free again and becomes the only highlight
        assert_eq!(c.get_valid_positioning_cells(), vec![Xy::new(1, 3)]);
        assert_eq!(overlay::count(c.world_mut()), 1);
    }

    #[test]
    fn test_begin_combat_ends_placement() {
        let mut c = positioning_controller();
        c.highlight_positioning_cells();
        c.world_mut().resource_mut::<TurnTracker>().begin_combat();
        c.begin_combat();

        assert_eq!(overlay::count(c.world_mut()), 0);
        assert!(c.get_valid_positioning_cells().is_empty());
        assert_eq!(c.place_actor(2, 3), Err(PlacementError::NotPositioning));
    }

    // ===== TEARDOWN =====

    #[test]
    fn test_destroy_despawns_preview() {
        let mut c = controller(3);
        c.show_movement_preview(0, 3);
        let mut world = c.destroy();
        assert_eq!(overlay::count(&mut world), 0);
        assert!(world.get_resource::<TurnTracker>().is_some());
    }
}
