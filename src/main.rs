// Single-threaded variant: one physics tick per rendered frame, no lock.
use signal_sim::global_variables::TIME_STEP;
use signal_sim::monitoring::run_options::RunOptions;
use signal_sim::SimulationState;
use std::error::Error;
use std::time::{Duration, Instant};
use std::{env, thread};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let options = RunOptions::from_args(env::args().skip(1))?;
    let renderer = options.renderer();
    let mut state = SimulationState::new(options.config.clone())?;
    let frame_budget = Duration::from_secs_f32(TIME_STEP);

    log::info!("Running single-threaded simulation");
    let started = Instant::now();
    let mut last = started;
    while options.duration.map_or(true, |d| started.elapsed() < d) {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last).as_secs_f32();
        last = frame_start;

        state.tick(dt);
        println!("{}", renderer.render(&state.snapshot()));

        thread::sleep(frame_budget.saturating_sub(frame_start.elapsed()));
    }

    log::info!(
        "Simulation finished after {} ticks, {} vehicles on track",
        state.tick_count(),
        state.fleet().len()
    );
    Ok(())
}
