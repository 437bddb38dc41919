pub mod turn;

pub use turn::{CombatPhase, Side, TurnState, TurnTracker};
