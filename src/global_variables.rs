// Display
pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;
pub const FRAME_RATE: u32 = 60;
pub const TIME_STEP: f32 = 1.0 / FRAME_RATE as f32;

// Track
pub const TRACK_EXIT_X: f32 = 800.0;
pub const SPAWN_X: f32 = -100.0;
pub const SPAWN_Y: f32 = 300.0;
pub const ROAD_Y: f32 = 260.0;
pub const ROAD_HEIGHT: f32 = 100.0;

// Traffic light
pub const LIGHT_X: f32 = 600.0;
pub const LIGHT_Y: f32 = 250.0;
pub const LIGHT_RADIUS: f32 = 15.0;
pub const RED_DURATION: f32 = 5.0;
pub const GREEN_DURATION: f32 = 8.0;
pub const YELLOW_DURATION: f32 = 2.5;

// Stopping
pub const APPROACH_DISTANCE: f32 = 150.0;
pub const SAFETY_GAP: f32 = 100.0;
pub const SENSOR_LENGTH: f32 = 30.0;

// Spawning
pub const SPAWN_INTERVAL: f32 = 2.0;
pub const REAR_CLEARANCE: f32 = 200.0;

// Physics loop
pub const PHYSICS_SLEEP_MS: u64 = 1;
