// simulation_engine/mod.rs
pub mod fleet;
pub mod gate;
pub mod scheduler;
pub mod simulation;
pub mod stopping;
