pub mod client;
pub mod configuration;
pub mod domain;
pub mod scenario;
pub mod telemetry;
