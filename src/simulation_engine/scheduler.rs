use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::config::PhysicsConfig;
use crate::error::{Result, SimError};
use crate::simulation_engine::gate::SharedStateGate;
use crate::simulation_engine::simulation::SimulationState;

/// Drives `SimulationState::tick` on a dedicated thread.
///
/// The thread polls the running flag between ticks only, so a tick that has
/// started always completes. It sleeps outside the lock.
pub struct PhysicsScheduler {
    gate: SharedStateGate,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl PhysicsScheduler {
    /// Moves `state` behind a gate and starts ticking it.
    pub fn start(state: SimulationState) -> Result<Self> {
        let physics = state.config().physics;
        let gate = SharedStateGate::new(state);
        let running = Arc::new(AtomicBool::new(true));

        let thread_gate = gate.clone();
        let thread_running = Arc::clone(&running);
        let handle = thread::Builder::new()
            .name("physics".into())
            .spawn(move || run_physics_loop(thread_gate, thread_running, physics))
            .map_err(SimError::ThreadSpawn)?;

        log::info!(
            "Physics loop started (sleep {:?}, fixed dt {:?})",
            physics.sleep(),
            physics.fixed_dt
        );
        Ok(Self {
            gate,
            running,
            handle: Some(handle),
        })
    }

    /// A handle for readers; clones share the same lock.
    pub fn gate(&self) -> SharedStateGate {
        self.gate.clone()
    }

    /// False once shutdown was requested or the loop exited on its own.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
            && self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Requests shutdown and waits for the physics thread to exit.
    pub fn stop(mut self) -> Result<()> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<()> {
        self.running.store(false, Ordering::Release);
        match self.handle.take() {
            Some(handle) => {
                handle.join().map_err(|_| SimError::PhysicsThreadPanicked)?;
                log::info!("Physics loop stopped");
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl Drop for PhysicsScheduler {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            log::warn!("Physics loop did not shut down cleanly: {}", e);
        }
    }
}

fn run_physics_loop(gate: SharedStateGate, running: Arc<AtomicBool>, physics: PhysicsConfig) {
    let mut last = Instant::now();
    while running.load(Ordering::Acquire) {
        let now = Instant::now();
        let dt = physics
            .fixed_dt
            .unwrap_or_else(|| now.duration_since(last).as_secs_f32());
        last = now;

        if let Err(e) = gate.with_exclusive_access(|state| state.tick(dt)) {
            log::error!("Stopping physics loop: {}", e);
            running.store(false, Ordering::Release);
            break;
        }

        thread::sleep(physics.sleep());
    }
}
