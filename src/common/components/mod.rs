pub mod actor;
pub mod targeting_state;

pub use actor::{Actor, ActorId, HealthBar};
pub use targeting_state::{SpellId, Targeting, TargetingMode, TargetingState};
