use std::collections::VecDeque;

use cgmath::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{KindTable, SpawnConfig};
use crate::models::vehicle::{Vehicle, VehicleKind};

/// The vehicles on the track, leader first.
///
/// Spawns append at the back and despawns pop the front, so insertion order
/// is spawn order. Nothing re-sorts by position.
#[derive(Debug, Clone)]
pub struct Fleet {
    pub(crate) vehicles: VecDeque<Vehicle>,
    spawn_timer: f32,
    spawn: SpawnConfig,
    spawn_point: Point2<f32>,
    exit_x: f32,
    sensor_length: f32,
    rng: StdRng,
}

impl Fleet {
    pub fn new(
        spawn: SpawnConfig,
        spawn_point: Point2<f32>,
        exit_x: f32,
        sensor_length: f32,
    ) -> Self {
        let rng = match spawn.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            vehicles: VecDeque::new(),
            spawn_timer: 0.0,
            spawn,
            spawn_point,
            exit_x,
            sensor_length,
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    /// The oldest vehicle, assumed furthest along the track.
    pub fn leader(&self) -> Option<&Vehicle> {
        self.vehicles.front()
    }

    /// The most recently spawned vehicle.
    pub fn newest(&self) -> Option<&Vehicle> {
        self.vehicles.back()
    }

    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    /// Removes the leader if it has crossed the exit bound.
    ///
    /// Only the front element is ever examined; a second vehicle past the
    /// exit waits for the next tick.
    pub fn despawn(&mut self) -> Option<Vehicle> {
        if self.vehicles.front()?.x() > self.exit_x {
            let vehicle = self.vehicles.pop_front()?;
            log::debug!("Despawned {:?}, {} vehicles remain", vehicle.kind, self.len());
            Some(vehicle)
        } else {
            None
        }
    }

    /// Whether the newest vehicle has travelled far enough from the spawn point.
    pub fn rear_is_clear(&self) -> bool {
        match self.vehicles.back() {
            None => true,
            Some(newest) => newest.x() - self.spawn_point.x > self.spawn.rear_clearance,
        }
    }

    /// Accumulates `dt` and appends a randomly chosen vehicle once both the
    /// interval has elapsed and the rear is clear.
    ///
    /// The timer only resets on a successful spawn, so a spawn blocked by
    /// clearance happens as soon as the rear clears.
    pub fn try_spawn(&mut self, dt: f32, kinds: &KindTable) -> Option<VehicleKind> {
        self.spawn_timer += dt;
        if self.spawn_timer <= self.spawn.interval || !self.rear_is_clear() {
            return None;
        }

        let kind = if self.rng.random_bool(0.5) {
            VehicleKind::Car
        } else {
            VehicleKind::Truck
        };
        self.vehicles.push_back(Vehicle::new(
            kind,
            self.spawn_point,
            kinds.get(kind),
            self.sensor_length,
        ));
        self.spawn_timer = 0.0;
        log::debug!("Spawned {:?}, fleet size {}", kind, self.len());
        Some(kind)
    }
}
