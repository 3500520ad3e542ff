// benches/bench_simulation_tick.rs
use cgmath::Point2;
use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, BatchSize, BenchmarkId, Criterion,
    PlotConfiguration,
};
use signal_sim::global_variables::TIME_STEP;
use signal_sim::{SimConfig, SimulationState};

// A long track with tight spawning so the fleet can grow to `size`.
fn populated_state(size: usize, sensors: bool) -> SimulationState {
    let mut config = SimConfig::default();
    config.spawn.seed = Some(1);
    config.spawn.interval = 0.05;
    config.spawn.rear_clearance = 30.0;
    config.track.exit_x = 1_000_000.0;
    config.track.light_position = Point2::new(900_000.0, 250.0);
    config.stopping.sensors = sensors;

    let mut state = SimulationState::new(config).expect("valid bench config");
    while state.fleet().len() < size {
        state.tick(TIME_STEP);
    }
    state
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_tick");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Linear));

    for &size in &[10, 50, 200] {
        for sensors in [false, true] {
            let state = populated_state(size, sensors);
            let label = if sensors { "sensors" } else { "no_sensors" };
            group.bench_with_input(BenchmarkId::new(label, size), &state, |b, state| {
                b.iter_batched(
                    || state.clone(),
                    |mut state| {
                        state.tick(black_box(TIME_STEP));
                        state
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
