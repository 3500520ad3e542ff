// monitoring/mod.rs
pub mod console_renderer;
pub mod run_options;
