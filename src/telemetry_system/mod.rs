pub mod autopilot_log;
pub mod telemetry;
pub mod trajectory_file;
