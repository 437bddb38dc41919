pub mod indicator;
pub mod overlay;
pub mod systems;
