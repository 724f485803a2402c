pub mod cli;
pub mod config;
pub mod ping;
pub mod report;
pub mod telemetry;
pub mod transport;
