// simulation_main.rs
// Concurrent variant: physics on its own thread, rendering on the tokio runtime.
use signal_sim::global_variables::TIME_STEP;
use signal_sim::monitoring::run_options::RunOptions;
use signal_sim::{PhysicsScheduler, SimulationState};
use std::env;
use std::error::Error;
use std::future;
use tokio::time::{self, Duration, MissedTickBehavior};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let options = RunOptions::from_args(env::args().skip(1))?;
    let renderer = options.renderer();
    let scheduler = PhysicsScheduler::start(SimulationState::new(options.config.clone())?)?;
    let gate = scheduler.gate();

    let mut frames = time::interval(Duration::from_secs_f32(TIME_STEP));
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let deadline = async {
        match options.duration {
            Some(duration) => time::sleep(duration).await,
            None => future::pending::<()>().await,
        }
    };
    tokio::pin!(deadline);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = frames.tick() => {
                // The snapshot is owned; the lock is already released here.
                let frame = gate.snapshot()?;
                println!("{}", renderer.render(&frame));
                if !scheduler.is_running() {
                    log::error!("Physics loop exited unexpectedly");
                    break;
                }
            }
            result = &mut ctrl_c => {
                if let Err(e) = result {
                    log::warn!("Failed to listen for Ctrl-C: {}", e);
                }
                log::info!("Shutdown requested");
                break;
            }
            _ = &mut deadline => {
                log::info!("Run duration elapsed");
                break;
            }
        }
    }

    scheduler.stop()?;
    Ok(())
}
