pub mod combat_movement;
