use crate::config::{KindSpec, KindTable};
use crate::models::geometry::Rect;
use crate::shared_data::VehicleSnapshot;
use cgmath::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Different kinds of vehicles on the track.
///
/// The set is closed; all per-kind behaviour comes from the `KindTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    Car,
    Truck,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 2] = [VehicleKind::Car, VehicleKind::Truck];
}

/// A single vehicle travelling along the track in +x.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub kind: VehicleKind,
    /// Top-left corner of the body.
    pub position: Point2<f32>,
    /// Current speed, always within `[0, max_speed]` of the kind.
    pub velocity: f32,
    /// Forward rectangle starting at the front bumper.
    pub sensor: Rect,
}

impl Vehicle {
    /// Creates a stationary vehicle at `position`.
    pub fn new(
        kind: VehicleKind,
        position: Point2<f32>,
        spec: &KindSpec,
        sensor_length: f32,
    ) -> Self {
        let sensor = Rect::new(
            sensor_origin(position, spec),
            Vector2::new(sensor_length, spec.body.y),
        );
        Self {
            kind,
            position,
            velocity: 0.0,
            sensor,
        }
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn body(&self, spec: &KindSpec) -> Rect {
        Rect::new(self.position, spec.body)
    }

    /// Advances the vehicle by `dt` seconds.
    ///
    /// When `permitted_to_move` is false the vehicle brakes, but it keeps
    /// rolling forward until its velocity reaches zero.
    pub fn update(&mut self, dt: f32, permitted_to_move: bool, spec: &KindSpec) {
        self.velocity = if permitted_to_move {
            (self.velocity + spec.acceleration * dt).min(spec.max_speed)
        } else {
            (self.velocity - spec.braking_power * dt).max(0.0)
        };

        self.position.x += self.velocity * dt;
        self.sensor.origin = sensor_origin(self.position, spec);
    }

    pub fn snapshot(&self, kinds: &KindTable, with_sensor: bool) -> VehicleSnapshot {
        let spec = kinds.get(self.kind);
        VehicleSnapshot {
            kind: self.kind,
            position: self.position,
            size: spec.body,
            color: spec.color,
            velocity: self.velocity,
            sensor: with_sensor.then_some(self.sensor),
        }
    }
}

fn sensor_origin(position: Point2<f32>, spec: &KindSpec) -> Point2<f32> {
    Point2::new(position.x + spec.body.x, position.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn spawn(kind: VehicleKind) -> (Vehicle, KindSpec) {
        let kinds = KindTable::default();
        let spec = *kinds.get(kind);
        (Vehicle::new(kind, Point2::new(0.0, 300.0), &spec, 30.0), spec)
    }

    #[test]
    fn accelerates_up_to_max_speed() {
        let (mut car, spec) = spawn(VehicleKind::Car);
        car.update(0.5, true, &spec);
        assert_approx_eq!(car.velocity, 75.0);
        assert_approx_eq!(car.x(), 37.5);

        for _ in 0..100 {
            car.update(0.1, true, &spec);
        }
        assert_eq!(car.velocity, spec.max_speed);
    }

    #[test]
    fn braking_never_reverses() {
        let (mut truck, spec) = spawn(VehicleKind::Truck);
        truck.velocity = 50.0;
        truck.update(0.1, false, &spec);
        assert_approx_eq!(truck.velocity, 30.0);
        assert_approx_eq!(truck.x(), 3.0);

        let x = truck.x();
        truck.update(1.0, false, &spec);
        assert_eq!(truck.velocity, 0.0);
        assert_eq!(truck.x(), x);
    }

    #[test]
    fn velocity_stays_within_bounds() {
        for kind in VehicleKind::ALL {
            let (mut vehicle, spec) = spawn(kind);
            for i in 0..500 {
                let dt = 0.001 * (i % 40) as f32;
                vehicle.update(dt, i % 7 < 4, &spec);
                assert!(vehicle.velocity >= 0.0 && vehicle.velocity <= spec.max_speed);
            }
        }
    }

    #[test]
    fn sensor_follows_front_bumper() {
        let (mut truck, spec) = spawn(VehicleKind::Truck);
        assert_eq!(truck.sensor.left(), 40.0);
        assert_eq!(truck.sensor.size, Vector2::new(30.0, 15.0));

        truck.update(1.0, true, &spec);
        assert_approx_eq!(truck.sensor.left(), truck.x() + spec.body.x);
        assert_eq!(truck.sensor.top(), truck.position.y);
    }

    #[test]
    fn snapshot_hides_sensor_unless_requested() {
        let kinds = KindTable::default();
        let (car, _) = spawn(VehicleKind::Car);
        let snap = car.snapshot(&kinds, false);
        assert_eq!(snap.size, Vector2::new(20.0, 10.0));
        assert_eq!(snap.sensor, None);
        assert_eq!(car.snapshot(&kinds, true).sensor, Some(car.sensor));
    }
}
