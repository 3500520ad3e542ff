use std::fs;
use std::path::Path;
use std::time::Duration;

use cgmath::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::global_variables::*;
use crate::models::vehicle::VehicleKind;
use crate::shared_data::Color;

/// Full configuration of one simulation run.
///
/// Every field has a default matching the reference scenario, so a JSON file
/// only needs to name the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimConfig {
    pub track: TrackConfig,
    pub light: LightConfig,
    pub kinds: KindTable,
    pub stopping: StoppingConfig,
    pub spawn: SpawnConfig,
    pub physics: PhysicsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Vehicles whose x passes this bound are despawned.
    pub exit_x: f32,
    pub spawn_point: Point2<f32>,
    /// Position of the traffic light; its x is the stop line.
    pub light_position: Point2<f32>,
    pub light_radius: f32,
    /// Top edge and height of the drawn road strip.
    pub road_y: f32,
    pub road_height: f32,
    /// Size of the drawing area.
    pub width: f32,
    pub height: f32,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            exit_x: TRACK_EXIT_X,
            spawn_point: Point2::new(SPAWN_X, SPAWN_Y),
            light_position: Point2::new(LIGHT_X, LIGHT_Y),
            light_radius: LIGHT_RADIUS,
            road_y: ROAD_Y,
            road_height: ROAD_HEIGHT,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

/// How the traffic light cycles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LightConfig {
    /// RED -> GREEN -> YELLOW -> RED, each state with its own duration.
    ThreePhase { red: f32, green: f32, yellow: f32 },
    /// RED -> GREEN -> RED on one shared duration.
    TwoPhase { period: f32 },
}

impl Default for LightConfig {
    fn default() -> Self {
        LightConfig::ThreePhase {
            red: RED_DURATION,
            green: GREEN_DURATION,
            yellow: YELLOW_DURATION,
        }
    }
}

/// Physical and presentation constants of one vehicle kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindSpec {
    pub max_speed: f32,
    pub acceleration: f32,
    pub braking_power: f32,
    pub runs_yellow_light: bool,
    pub body: Vector2<f32>,
    pub color: Color,
}

/// The per-kind lookup table, one entry per `VehicleKind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindTable {
    pub car: KindSpec,
    pub truck: KindSpec,
}

impl KindTable {
    pub fn get(&self, kind: VehicleKind) -> &KindSpec {
        match kind {
            VehicleKind::Car => &self.car,
            VehicleKind::Truck => &self.truck,
        }
    }
}

impl Default for KindTable {
    fn default() -> Self {
        Self {
            // quick and agile
            car: KindSpec {
                max_speed: 200.0,
                acceleration: 150.0,
                braking_power: 400.0,
                runs_yellow_light: false,
                body: Vector2::new(20.0, 10.0),
                color: Color::BLUE,
            },
            // slow and heavy
            truck: KindSpec {
                max_speed: 125.0,
                acceleration: 100.0,
                braking_power: 200.0,
                runs_yellow_light: true,
                body: Vector2::new(40.0, 15.0),
                color: Color::RED,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoppingConfig {
    /// Distance before the stop line within which a red (or yellow) light applies.
    pub approach_distance: f32,
    /// Minimum gap to the spawn-order leader.
    pub safety_gap: f32,
    /// Enables the forward-sensor rule against every other vehicle.
    pub sensors: bool,
    /// Length of the sensor rectangle ahead of the vehicle's front bumper.
    pub sensor_length: f32,
}

impl Default for StoppingConfig {
    fn default() -> Self {
        Self {
            approach_distance: APPROACH_DISTANCE,
            safety_gap: SAFETY_GAP,
            sensors: false,
            sensor_length: SENSOR_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub interval: f32,
    /// Distance past the spawn point the newest vehicle must reach first.
    pub rear_clearance: f32,
    /// Fixed RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            interval: SPAWN_INTERVAL,
            rear_clearance: REAR_CLEARANCE,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Sleep between two physics ticks, never taken while holding the lock.
    pub sleep_ms: u64,
    /// Feed this dt every tick instead of the measured wall-clock time.
    pub fixed_dt: Option<f32>,
}

impl PhysicsConfig {
    pub fn sleep(&self) -> Duration {
        Duration::from_millis(self.sleep_ms)
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            sleep_ms: PHYSICS_SLEEP_MS,
            fixed_dt: None,
        }
    }
}

impl SimConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(SimError::ConfigIo)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Rejects configurations that would produce nonsensical motion.
    pub fn validate(&self) -> Result<()> {
        let track = &self.track;
        finite("track.exit_x", track.exit_x)?;
        finite("track.spawn_point.x", track.spawn_point.x)?;
        finite("track.spawn_point.y", track.spawn_point.y)?;
        finite("track.light_position.x", track.light_position.x)?;
        finite("track.light_position.y", track.light_position.y)?;
        if track.spawn_point.x >= track.exit_x {
            return Err(SimError::invalid(
                "track.spawn_point.x",
                format!("must lie before the exit bound {}", track.exit_x),
            ));
        }

        match self.light {
            LightConfig::ThreePhase { red, green, yellow } => {
                positive("light.red", red)?;
                positive("light.green", green)?;
                positive("light.yellow", yellow)?;
            }
            LightConfig::TwoPhase { period } => positive("light.period", period)?,
        }

        for (name, spec) in [("kinds.car", &self.kinds.car), ("kinds.truck", &self.kinds.truck)] {
            spec.validate(name)?;
        }

        non_negative("stopping.approach_distance", self.stopping.approach_distance)?;
        non_negative("stopping.safety_gap", self.stopping.safety_gap)?;
        non_negative("stopping.sensor_length", self.stopping.sensor_length)?;

        positive("spawn.interval", self.spawn.interval)?;
        non_negative("spawn.rear_clearance", self.spawn.rear_clearance)?;

        if let Some(dt) = self.physics.fixed_dt {
            positive("physics.fixed_dt", dt)?;
        }
        Ok(())
    }
}

impl KindSpec {
    fn validate(&self, prefix: &str) -> Result<()> {
        positive(&format!("{}.max_speed", prefix), self.max_speed)?;
        non_negative(&format!("{}.acceleration", prefix), self.acceleration)?;
        non_negative(&format!("{}.braking_power", prefix), self.braking_power)?;
        positive(&format!("{}.body.x", prefix), self.body.x)?;
        positive(&format!("{}.body.y", prefix), self.body.y)
    }
}

fn finite(field: &str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::invalid(field, format!("{} is not finite", value)))
    }
}

fn positive(field: &str, value: f32) -> Result<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid(field, format!("{} must be > 0", value)))
    }
}

fn non_negative(field: &str, value: f32) -> Result<()> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid(field, format!("{} must be >= 0", value)))
    }
}
