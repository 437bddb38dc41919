//! Scripted skirmish: the input-dispatch layer around the movement controller.

pub mod command;
pub mod config;

use bevy_ecs::prelude::*;
use log::{debug, info};

use tile_tactics::{
    client::{overlay, systems::combat_movement::MovementController},
    common::{
        components::{Actor, ActorId, Targeting},
        resources::{Side, TurnTracker},
    },
};

use command::Command;
use config::Scenario;

pub const PLAYER: ActorId = ActorId(1);

pub struct Skirmish {
    controller: MovementController<TurnTracker, Targeting>,
}

impl Skirmish {
    pub fn new(scenario: &Scenario) -> Self {
        let mut world = World::new();
        world.insert_resource(TurnTracker::new());
        world.insert_resource(Targeting::new());

        let grid = scenario.build_grid();
        let actor = Actor::new(PLAYER, scenario.start, scenario.movement_points).with_health_bar(20);
        let mut controller = MovementController::new(world, grid, actor);
        controller.highlight_positioning_cells();
        Self { controller }
    }

    pub fn controller(&self) -> &MovementController<TurnTracker, Targeting> {
        &self.controller
    }

    fn turns(&mut self) -> Mut<'_, TurnTracker> {
        self.controller.world_mut().resource_mut::<TurnTracker>()
    }

    fn targeting(&mut self) -> Mut<'_, Targeting> {
        self.controller.world_mut().resource_mut::<Targeting>()
    }

    /// Run one command; returns text meant for the player.
    pub fn apply(&mut self, command: Command) -> Option<String> {
        debug!("{:?}", command);
        match command {
            Command::Hover(x, y) => self.controller.show_movement_preview(x, y),
            Command::Click(x, y) => match self.controller.try_move_to(x, y) {
                Ok(plan) => {
                    self.controller.actor_mut().spend_movement(plan.cost);
                    let left = self.controller.actor().movement_points;
                    return Some(format!("moved to ({x},{y}) for {} PM, {left} left\n", plan.cost));
                }
                Err(err) => return Some(format!("cannot move: {err}\n")),
            },
            Command::Place(x, y) => if let Err(err) = self.controller.place_actor(x, y) {
                return Some(format!("cannot place: {err}\n"));
            },
            Command::Highlight => self.controller.highlight_positioning_cells(),
            Command::Clear => self.controller.clear_movement_preview(),
            Command::Spell(spell) => {
                self.targeting().begin_spell(spell);
                self.controller.clear_movement_preview();
            }
            Command::Cancel => self.targeting().cancel(),
            Command::Begin => {
                self.turns().begin_combat();
                self.controller.begin_combat();
                return Some(format!("round {}\n", self.turns().round()));
            }
            Command::End => return Some(self.end_turn()),
            Command::Show => {
                let grid = self.controller.grid().clone();
                return Some(overlay::render(self.controller.world_mut(), &grid, PLAYER));
            }
        }
        None
    }

    /// The enemy side has no behaviour yet and passes straight back.
    fn end_turn(&mut self) -> String {
        self.controller.clear_movement_preview();
        if self.turns().end_turn() == Side::Enemy {
            info!("enemy passes");
            self.turns().end_turn();
        }
        self.controller.actor_mut().reset_movement();
        format!("round {}\n", self.turns().round())
    }

    /// Tear down the controller and return what it left in the world.
    pub fn finish(self) -> World {
        let mut world = self.controller.destroy();
        debug!("{} indicators left in world", overlay::count(&mut world));
        world
    }
}
