use crate::control_system::traffic_light::LightState;
use crate::models::vehicle::VehicleKind;
use crate::shared_data::FrameSnapshot;

/// Output format of the console renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// One character strip per frame.
    Strip,
    /// One JSON object per frame.
    Json,
}

/// Draws frames as text. Works purely on copied snapshots and never touches
/// the simulation lock.
#[derive(Debug, Clone)]
pub struct ConsoleRenderer {
    mode: RenderMode,
    columns: usize,
    x_min: f32,
    x_max: f32,
}

impl ConsoleRenderer {
    /// `x_min..x_max` is the slice of the track mapped onto `columns` characters.
    pub fn new(mode: RenderMode, columns: usize, x_min: f32, x_max: f32) -> Self {
        Self {
            mode,
            columns: columns.max(1),
            x_min,
            x_max,
        }
    }

    pub fn render(&self, frame: &FrameSnapshot) -> String {
        match self.mode {
            RenderMode::Strip => self.render_strip(frame),
            RenderMode::Json => serde_json::to_string(frame)
                .unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e)),
        }
    }

    fn column(&self, x: f32) -> Option<usize> {
        let span = self.x_max - self.x_min;
        if span <= 0.0 || x < self.x_min || x >= self.x_max {
            return None;
        }
        let col = ((x - self.x_min) / span * self.columns as f32) as usize;
        Some(col.min(self.columns - 1))
    }

    fn render_strip(&self, frame: &FrameSnapshot) -> String {
        let mut strip = vec!['.'; self.columns];

        for vehicle in &frame.vehicles {
            if let Some(col) = self.column(vehicle.position.x) {
                strip[col] = match vehicle.kind {
                    VehicleKind::Car => 'c',
                    VehicleKind::Truck => 'T',
                };
            }
        }

        // Light on top.
        if let Some(col) = self.column(frame.light.position.x) {
            strip[col] = match frame.light.state {
                LightState::Red => 'R',
                LightState::Green => 'G',
                LightState::Yellow => 'Y',
            };
        }

        format!(
            "[{}] t={:7.2}s tick={:<8} light={:<6} vehicles={}",
            strip.into_iter().collect::<String>(),
            frame.sim_time,
            frame.tick,
            format!("{:?}", frame.light.state),
            frame.vehicles.len()
        )
    }
}
