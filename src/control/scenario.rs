use crate::constants::{EXOSPHERE, LANDER_SIZE, MARS_RADIUS, TIME_STEP};
use crate::control::lander::{LanderState, SimulationParameters};
use crate::control::vehicle::ParachuteStatus;
use crate::errors::SimulationError;
use crate::trajectory_system::integrator::VelocityUpdate;
use crate::utils::vector3d::Vector3D;

/// Initial conditions for one simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub description: String,
    pub position: Vector3D,
    pub velocity: Vector3D,
    pub orientation: Vector3D,
    pub delta_t: f64,
    pub fuel: f64,
    pub parachute_status: ParachuteStatus,
    pub stabilized_attitude: bool,
    pub autopilot_enabled: bool,
    pub velocity_update: VelocityUpdate,
}

impl Scenario {
    pub const COUNT: usize = 6;

    pub fn new(
        description: &str,
        position: Vector3D,
        velocity: Vector3D,
        orientation: Vector3D,
    ) -> Self {
        Scenario {
            description: description.to_string(),
            position,
            velocity,
            orientation,
            delta_t: TIME_STEP,
            fuel: 1.0,
            parachute_status: ParachuteStatus::NotDeployed,
            stabilized_attitude: false,
            autopilot_enabled: false,
            velocity_update: VelocityUpdate::FromPositions,
        }
    }

    /// Canned scenario by index.
    pub fn from_index(index: usize) -> Result<Self, SimulationError> {
        let scenario = match index {
            0 => Scenario::new(
                "circular orbit",
                Vector3D::new(1.2 * MARS_RADIUS, 0.0, 0.0),
                Vector3D::new(0.0, -3247.087385863725, 0.0),
                Vector3D::new(0.0, 90.0, 0.0),
            ),
            1 => Scenario::new(
                "descent from 10km",
                Vector3D::new(0.0, -(MARS_RADIUS + 10_000.0), 0.0),
                Vector3D::ZERO,
                Vector3D::new(0.0, 0.0, 90.0),
            )
            .with_stabilized_attitude(true),
            2 => Scenario::new(
                "elliptical orbit, thrust changes orbital plane",
                Vector3D::new(0.0, 0.0, 1.2 * MARS_RADIUS),
                Vector3D::new(3500.0, 0.0, 0.0),
                Vector3D::new(0.0, 0.0, 90.0),
            ),
            3 => Scenario::new(
                "polar launch at escape velocity (but drag prevents escape)",
                Vector3D::new(0.0, 0.0, MARS_RADIUS + LANDER_SIZE / 2.0),
                Vector3D::new(0.0, 0.0, 5027.0),
                Vector3D::ZERO,
            ),
            4 => Scenario::new(
                "elliptical orbit that clips the atmosphere and decays",
                Vector3D::new(0.0, 0.0, MARS_RADIUS + 100_000.0),
                Vector3D::new(4000.0, 0.0, 0.0),
                Vector3D::new(0.0, 90.0, 0.0),
            ),
            5 => Scenario::new(
                "descent from 200km",
                Vector3D::new(0.0, -(MARS_RADIUS + EXOSPHERE), 0.0),
                Vector3D::ZERO,
                Vector3D::new(0.0, 0.0, 90.0),
            )
            .with_stabilized_attitude(true),
            _ => return Err(SimulationError::InvalidScenario(index)),
        };
        Ok(scenario)
    }

    pub fn catalog() -> Vec<Scenario> {
        (0..Self::COUNT)
            .filter_map(|index| Self::from_index(index).ok())
            .collect()
    }

    pub fn with_autopilot(mut self, enabled: bool) -> Self {
        self.autopilot_enabled = enabled;
        self
    }

    pub fn with_stabilized_attitude(mut self, enabled: bool) -> Self {
        self.stabilized_attitude = enabled;
        self
    }

    pub fn with_velocity_update(mut self, velocity_update: VelocityUpdate) -> Self {
        self.velocity_update = velocity_update;
        self
    }

    pub fn with_time_step(mut self, delta_t: f64) -> Self {
        self.delta_t = delta_t;
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn initial_state(&self) -> LanderState {
        LanderState {
            position: self.position,
            velocity: self.velocity,
            orientation: self.orientation,
            fuel: self.fuel,
            throttle: 0.0,
            parachute_status: self.parachute_status,
        }
    }

    pub fn parameters(&self) -> SimulationParameters {
        SimulationParameters {
            delta_t: self.delta_t,
            autopilot_enabled: self.autopilot_enabled,
            stabilized_attitude: self.stabilized_attitude,
            velocity_update: self.velocity_update,
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        self.parameters().validate()?;
        let finite = self.position.is_finite()
            && self.velocity.is_finite()
            && self.orientation.is_finite();
        if !finite {
            return Err(SimulationError::InvalidParameter(format!(
                "non-finite initial state in scenario '{}'",
                self.description
            )));
        }
        if !(0.0..=1.0).contains(&self.fuel) {
            return Err(SimulationError::InvalidParameter(format!(
                "fuel fraction must be in [0, 1], got {}",
                self.fuel
            )));
        }
        Ok(())
    }
}
