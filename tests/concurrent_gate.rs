//! Readers running against a live physics thread only ever see complete ticks.

use signal_sim::config::PhysicsConfig;
use signal_sim::shared_data::FrameSnapshot;
use signal_sim::{PhysicsScheduler, SimConfig, SimulationState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const DT: f32 = 1.0 / 30.0;

fn deterministic_config(sensors: bool) -> SimConfig {
    let mut config = SimConfig::default();
    config.spawn.seed = Some(2024);
    config.stopping.sensors = sensors;
    config.physics = PhysicsConfig {
        sleep_ms: 0,
        fixed_dt: Some(DT),
    };
    config
}

/// Collects snapshots from several reader threads while physics runs.
fn observe(config: SimConfig, readers: usize, run_for: Duration) -> Vec<FrameSnapshot> {
    let scheduler = PhysicsScheduler::start(SimulationState::new(config).unwrap()).unwrap();
    let done = Arc::new(AtomicBool::new(false));

    let handles: Vec<_> = (0..readers)
        .map(|_| {
            let gate = scheduler.gate();
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut seen = Vec::new();
                while !done.load(Ordering::Acquire) {
                    seen.push(gate.snapshot().unwrap());
                    thread::sleep(Duration::from_micros(200));
                }
                seen
            })
        })
        .collect();

    thread::sleep(run_for);
    done.store(true, Ordering::Release);
    let mut snapshots: Vec<FrameSnapshot> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    scheduler.stop().unwrap();

    snapshots.sort_by_key(|s| s.tick);
    snapshots
}

fn assert_matches_replay(config: SimConfig, snapshots: &[FrameSnapshot]) {
    let mut reference = SimulationState::new(config).unwrap();
    for observed in snapshots {
        while reference.tick_count() < observed.tick {
            reference.tick(DT);
        }
        assert_eq!(
            &reference.snapshot(),
            observed,
            "snapshot at tick {} differs from a complete replay",
            observed.tick
        );
    }
}

#[test]
fn readers_only_observe_complete_ticks() {
    let config = deterministic_config(false);
    let snapshots = observe(config.clone(), 3, Duration::from_millis(150));
    assert!(!snapshots.is_empty());
    assert!(snapshots.last().map_or(0, |s| s.tick) > 0);
    assert_matches_replay(config, &snapshots);
}

#[test]
fn readers_only_observe_complete_ticks_with_sensors() {
    let config = deterministic_config(true);
    let snapshots = observe(config.clone(), 2, Duration::from_millis(150));
    assert!(snapshots.iter().all(|s| s.vehicles.iter().all(|v| v.sensor.is_some())));
    assert_matches_replay(config, &snapshots);
}

#[test]
fn observed_velocities_stay_in_range() {
    let config = deterministic_config(false);
    let kinds = config.kinds.clone();
    for snapshot in observe(config, 2, Duration::from_millis(100)) {
        for vehicle in &snapshot.vehicles {
            let max = kinds.get(vehicle.kind).max_speed;
            assert!(vehicle.velocity >= 0.0 && vehicle.velocity <= max);
        }
    }
}
