use std::sync::{Arc, Mutex};

use crate::error::{Result, SimError};
use crate::shared_data::FrameSnapshot;
use crate::simulation_engine::simulation::SimulationState;

/// The single lock between the physics loop and any reader.
///
/// The physics loop mutates a whole tick inside one `with_exclusive_access`
/// call, so readers only ever see complete ticks. Neither closure may block
/// on display, sleep or I/O, and neither may call back into the gate.
#[derive(Debug, Clone)]
pub struct SharedStateGate {
    state: Arc<Mutex<SimulationState>>,
}

impl SharedStateGate {
    pub fn new(state: SimulationState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Runs `mutator` with the state locked for writing.
    pub fn with_exclusive_access<R>(
        &self,
        mutator: impl FnOnce(&mut SimulationState) -> R,
    ) -> Result<R> {
        let mut guard = self.state.lock().map_err(|_| SimError::LockPoisoned)?;
        Ok(mutator(&mut guard))
    }

    /// Runs `reader` with the state locked; whatever it returns must be owned
    /// data copied out of the state.
    pub fn with_read_access<R>(&self, reader: impl FnOnce(&SimulationState) -> R) -> Result<R> {
        let guard = self.state.lock().map_err(|_| SimError::LockPoisoned)?;
        Ok(reader(&guard))
    }

    /// Copies one frame's draw data out under the lock.
    pub fn snapshot(&self) -> Result<FrameSnapshot> {
        self.with_read_access(SimulationState::snapshot)
    }
}
