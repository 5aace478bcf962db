pub mod app;
pub mod cli;
pub mod commands;
pub mod core;
pub mod errors;
pub mod logging;
