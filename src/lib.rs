pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod lint;
pub mod loader;
pub mod report;
pub mod telemetry;
pub mod twin;
pub mod types;
