pub mod movement;
pub mod positioning;
