// simulation.rs
use crate::config::SimConfig;
use crate::control_system::traffic_light::TrafficLight;
use crate::error::Result;
use crate::models::geometry::Rect;
use crate::shared_data::{Color, FrameSnapshot};
use crate::simulation_engine::fleet::Fleet;
use crate::simulation_engine::stopping::StoppingPolicy;
use cgmath::{Point2, Vector2};

/// Everything the physics loop owns: the light, the fleet and the
/// configuration they were built from.
#[derive(Debug, Clone)]
pub struct SimulationState {
    config: SimConfig,
    light: TrafficLight,
    fleet: Fleet,
    policy: StoppingPolicy,
    tick: u64,
    sim_time: f64,
}

impl SimulationState {
    /// Builds the initial state: light RED with a zero timer, empty fleet.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let track = &config.track;
        let light = TrafficLight::new(track.light_position, track.light_radius, config.light);
        let fleet = Fleet::new(
            config.spawn,
            track.spawn_point,
            track.exit_x,
            config.stopping.sensor_length,
        );
        let policy = StoppingPolicy::new(config.stopping);
        Ok(Self {
            config,
            light,
            fleet,
            policy,
            tick: 0,
            sim_time: 0.0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn light(&self) -> &TrafficLight {
        &self.light
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Number of completed ticks.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Advances the whole simulation by `dt` seconds.
    ///
    /// Order: despawn, spawn, light, then each vehicle front to back. A
    /// follower sees its leader's position from this same tick.
    pub fn tick(&mut self, dt: f32) {
        self.fleet.despawn();
        self.fleet.try_spawn(dt, &self.config.kinds);
        self.light.update(dt);

        let kinds = &self.config.kinds;
        let vehicles = self.fleet.vehicles.make_contiguous();
        for i in 0..vehicles.len() {
            let must_stop = self.policy.must_stop(&self.light, vehicles, i, kinds);
            let vehicle = &mut vehicles[i];
            vehicle.update(dt, !must_stop, kinds.get(vehicle.kind));
        }

        self.tick += 1;
        self.sim_time += f64::from(dt);
        log::trace!(
            "Tick {} dt={:.4} light={:?} vehicles={}",
            self.tick,
            dt,
            self.light.state(),
            self.fleet.len()
        );
    }

    /// Copies out everything a renderer needs for one frame.
    pub fn snapshot(&self) -> FrameSnapshot {
        let track = &self.config.track;
        let sensors = self.config.stopping.sensors;
        FrameSnapshot {
            tick: self.tick,
            sim_time: self.sim_time,
            light: self.light.snapshot(),
            vehicles: self
                .fleet
                .iter()
                .map(|v| v.snapshot(&self.config.kinds, sensors))
                .collect(),
            canvas: Vector2::new(track.width, track.height),
            background: Color::BACKGROUND,
            road: Rect::new(
                Point2::new(0.0, track.road_y),
                Vector2::new(track.width, track.road_height),
            ),
            road_color: Color::ROAD,
        }
    }
}
