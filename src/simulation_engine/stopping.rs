use crate::config::{KindTable, StoppingConfig};
use crate::control_system::traffic_light::{LightState, TrafficLight};
use crate::models::vehicle::Vehicle;

/// Decides, per vehicle per tick, whether the vehicle has to brake.
///
/// Each rule can only force a stop; no rule ever grants movement that
/// another rule refused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoppingPolicy {
    config: StoppingConfig,
}

impl StoppingPolicy {
    pub fn new(config: StoppingConfig) -> Self {
        Self { config }
    }

    /// Whether `fleet[index]` must stop this tick.
    ///
    /// `fleet` is in spawn order, so `fleet[index - 1]` is the vehicle's leader.
    pub fn must_stop(
        &self,
        light: &TrafficLight,
        fleet: &[Vehicle],
        index: usize,
        kinds: &KindTable,
    ) -> bool {
        let vehicle = &fleet[index];
        let leader = index.checked_sub(1).map(|i| &fleet[i]);

        self.signal_rule(light, vehicle, kinds)
            || leader.is_some_and(|leader| self.leader_rule(vehicle, leader))
            || (self.config.sensors && self.sensor_rule(fleet, index, kinds))
    }

    /// Red always applies inside the approach zone; yellow applies to kinds
    /// that do not run yellow lights.
    pub fn signal_rule(&self, light: &TrafficLight, vehicle: &Vehicle, kinds: &KindTable) -> bool {
        let applies = match light.state() {
            LightState::Red => true,
            LightState::Yellow => !kinds.get(vehicle.kind).runs_yellow_light,
            LightState::Green => false,
        };
        if !applies {
            return false;
        }

        let stop_line = light.stop_line_x();
        vehicle.x() < stop_line && stop_line - vehicle.x() < self.config.approach_distance
    }

    /// Keeps a safety gap to the spawn-order leader.
    ///
    /// A non-positive distance means the leader is level with or behind the
    /// follower; that never blocks.
    pub fn leader_rule(&self, vehicle: &Vehicle, leader: &Vehicle) -> bool {
        let distance = leader.x() - vehicle.x();
        distance > 0.0 && distance < self.config.safety_gap
    }

    /// Whether the forward sensor of `fleet[index]` overlaps the body of any
    /// other vehicle, regardless of spawn order. O(n) per vehicle.
    pub fn sensor_rule(&self, fleet: &[Vehicle], index: usize, kinds: &KindTable) -> bool {
        let sensor = &fleet[index].sensor;
        fleet
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != index)
            .any(|(_, other)| sensor.intersects(&other.body(kinds.get(other.kind))))
    }
}
