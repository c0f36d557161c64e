pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::autopilot::{
    Autopilot, AutopilotCommand, AutopilotGains, AutopilotSample, DiagnosticSink, NullSink,
};
pub use control::environment::Planet;
pub use control::lander::{Lander, LanderState, SimulationParameters};
pub use control::scenario::Scenario;
pub use control::vehicle::{LanderProperties, ParachuteStatus};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::forces::{ForceBreakdown, ForceModel};
pub use trajectory_system::integrator::{
    AccelerationModel, IntegratorPhase, VelocityUpdate, VerletIntegrator,
};
pub use trajectory_system::spring::{SpringSimulation, Trajectory};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::autopilot_log::AutopilotLog;
pub use telemetry_system::telemetry::Telemetry;
pub use telemetry_system::trajectory_file::write_trajectory;

// Re-export commonly used utilities
pub use utils::vector3d::Vector3D;
