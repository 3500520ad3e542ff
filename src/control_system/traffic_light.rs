use crate::config::LightConfig;
use crate::shared_data::{Color, LightSnapshot};
use cgmath::Point2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightState {
    Red,
    Green,
    Yellow,
}

impl LightState {
    pub fn color(self) -> Color {
        match self {
            LightState::Red => Color::RED,
            LightState::Green => Color::GREEN,
            LightState::Yellow => Color::YELLOW,
        }
    }
}

/// A cyclically timed traffic light standing at the stop line.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficLight {
    state: LightState,
    /// Seconds since the last transition. Never negative.
    timer: f32,
    pub position: Point2<f32>,
    pub radius: f32,
    timing: LightConfig,
}

impl TrafficLight {
    /// Creates a light in the RED state with its timer at zero.
    pub fn new(position: Point2<f32>, radius: f32, timing: LightConfig) -> Self {
        Self {
            state: LightState::Red,
            timer: 0.0,
            position,
            radius,
            timing,
        }
    }

    pub fn state(&self) -> LightState {
        self.state
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Puts the light into `state` with `timer` seconds already elapsed.
    #[cfg(test)]
    pub(crate) fn force_phase(&mut self, state: LightState, timer: f32) {
        self.state = state;
        self.timer = timer;
    }

    /// The x-coordinate vehicles must stop before.
    pub fn stop_line_x(&self) -> f32 {
        self.position.x
    }

    /// How long the current state lasts before the next transition.
    pub fn current_duration(&self) -> f32 {
        match (self.timing, self.state) {
            (LightConfig::ThreePhase { red, .. }, LightState::Red) => red,
            (LightConfig::ThreePhase { green, .. }, LightState::Green) => green,
            (LightConfig::ThreePhase { yellow, .. }, LightState::Yellow) => yellow,
            (LightConfig::TwoPhase { period }, _) => period,
        }
    }

    fn next_state(&self) -> LightState {
        match (self.timing, self.state) {
            (LightConfig::ThreePhase { .. }, LightState::Red) => LightState::Green,
            (LightConfig::ThreePhase { .. }, LightState::Green) => LightState::Yellow,
            (LightConfig::ThreePhase { .. }, LightState::Yellow) => LightState::Red,
            (LightConfig::TwoPhase { .. }, LightState::Red) => LightState::Green,
            (LightConfig::TwoPhase { .. }, _) => LightState::Red,
        }
    }

    /// Advances the timer by `dt` and fires at most one transition.
    ///
    /// A large `dt` never skips states: the light moves to the next state
    /// and the timer restarts at zero, discarding any overshoot.
    pub fn update(&mut self, dt: f32) {
        self.timer += dt;
        // `>=`: a timer summing to exactly the duration must transition.
        if self.timer >= self.current_duration() {
            let next = self.next_state();
            log::debug!("Traffic light {:?} -> {:?}", self.state, next);
            self.state = next;
            self.timer = 0.0;
        }
    }

    pub fn snapshot(&self) -> LightSnapshot {
        LightSnapshot {
            state: self.state,
            position: self.position,
            radius: self.radius,
            color: self.state.color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_light() -> TrafficLight {
        TrafficLight::new(Point2::new(600.0, 250.0), 15.0, LightConfig::default())
    }

    #[test]
    fn red_turns_green_after_exactly_five_seconds() {
        let mut light = default_light();
        for _ in 0..9 {
            light.update(0.5);
            assert_eq!(light.state(), LightState::Red);
        }
        light.update(0.5);
        assert_eq!(light.state(), LightState::Green);
        assert_eq!(light.timer(), 0.0);
    }

    #[test]
    fn just_short_of_duration_does_not_transition() {
        let mut light = default_light();
        light.update(4.5);
        light.update(0.49);
        assert_eq!(light.state(), LightState::Red);
        assert!(light.timer() > 4.98);
    }

    #[test]
    fn full_three_phase_cycle() {
        let mut light = default_light();
        light.update(5.0);
        assert_eq!(light.state(), LightState::Green);
        light.update(8.0);
        assert_eq!(light.state(), LightState::Yellow);
        light.update(2.5);
        assert_eq!(light.state(), LightState::Red);
        assert_eq!(light.state().color(), Color::RED);
    }

    #[test]
    fn large_dt_fires_a_single_transition() {
        let mut light = default_light();
        light.update(100.0);
        assert_eq!(light.state(), LightState::Green);
        assert_eq!(light.timer(), 0.0);
    }

    #[test]
    fn two_phase_skips_yellow() {
        let mut light = TrafficLight::new(
            Point2::new(600.0, 250.0),
            15.0,
            LightConfig::TwoPhase { period: 3.0 },
        );
        light.update(3.0);
        assert_eq!(light.state(), LightState::Green);
        light.update(2.0);
        assert_eq!(light.state(), LightState::Green);
        light.update(1.0);
        assert_eq!(light.state(), LightState::Red);
    }

    #[test]
    fn snapshot_carries_state_color() {
        let mut light = default_light();
        light.update(5.0);
        let snap = light.snapshot();
        assert_eq!(snap.state, LightState::Green);
        assert_eq!(snap.color, Color::GREEN);
        assert_eq!(snap.position, Point2::new(600.0, 250.0));
    }
}
