//! Library entry for Podcast Explorer exposing the pipeline and runtime for the binary and
//! integration tests.

pub mod app;
pub mod args;
pub mod config;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod ui;
pub mod util;
