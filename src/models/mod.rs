// models/mod.rs
pub mod geometry;
pub mod vehicle;
