// src/shared_data.rs

use crate::control_system::traffic_light::LightState;
use crate::models::geometry::Rect;
use crate::models::vehicle::VehicleKind;
use cgmath::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// An opaque RGB color handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const BACKGROUND: Color = Color::rgb(50, 50, 50);
    pub const ROAD: Color = Color::rgb(30, 30, 30);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Light data needed to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LightSnapshot {
    pub state: LightState,
    pub position: Point2<f32>,
    pub radius: f32,
    pub color: Color,
}

/// Per-vehicle draw data, copied out under the lock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VehicleSnapshot {
    pub kind: VehicleKind,
    pub position: Point2<f32>,
    pub size: Vector2<f32>,
    pub color: Color,
    pub velocity: f32,
    /// Present only when forward sensors are enabled.
    pub sensor: Option<Rect>,
}

/// A consistent view of the simulation after some number of complete ticks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    /// Number of ticks fully applied so far.
    pub tick: u64,
    /// Simulated seconds accumulated over those ticks.
    pub sim_time: f64,
    pub light: LightSnapshot,
    /// Vehicles in fleet order, leader first.
    pub vehicles: Vec<VehicleSnapshot>,
    /// Drawing area the track is laid out in.
    pub canvas: Vector2<f32>,
    pub background: Color,
    /// Road strip geometry: top edge, height and width.
    pub road: Rect,
    pub road_color: Color,
}
