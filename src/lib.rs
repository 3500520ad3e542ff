//! Signal-controlled traffic on a one-dimensional track.
//!
//! A [`SimulationState`] owns the traffic light and the fleet and advances
//! them one tick at a time. [`PhysicsScheduler`] runs those ticks on their own
//! thread behind a [`SharedStateGate`], from which a renderer copies
//! [`FrameSnapshot`]s.

pub mod config;
pub mod control_system;
pub mod error;
pub mod global_variables;
pub mod models;
pub mod monitoring;
pub mod shared_data;
pub mod simulation_engine;

pub use config::SimConfig;
pub use error::SimError;
pub use shared_data::FrameSnapshot;
pub use simulation_engine::gate::SharedStateGate;
pub use simulation_engine::scheduler::PhysicsScheduler;
pub use simulation_engine::simulation::SimulationState;
