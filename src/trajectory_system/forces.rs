use crate::control::{
    attitude::thrust_direction,
    environment::Planet,
    lander::LanderState,
    vehicle::{LanderProperties, ParachuteStatus},
};
use crate::errors::SimulationError;
use crate::utils::vector3d::Vector3D;

/// Breakdown of the forces acting on the lander, in newtons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceBreakdown {
    pub gravity: Vector3D,
    pub body_drag: Vector3D,
    pub parachute_drag: Vector3D,
    pub thrust: Vector3D,
}

impl ForceBreakdown {
    pub fn total(&self) -> Vector3D {
        self.gravity + self.body_drag + self.parachute_drag + self.thrust
    }
}

#[derive(Debug, Clone, Default)]
pub struct ForceModel {
    pub planet: Planet,
    pub properties: LanderProperties,
}

impl ForceModel {
    pub fn new(planet: Planet, properties: LanderProperties) -> Self {
        ForceModel { planet, properties }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        self.planet.validate()?;
        self.properties.validate()
    }

    pub fn mass(&self, state: &LanderState) -> f64 {
        self.properties.mass(state.fuel)
    }

    /// Net force on the lander.
    pub fn calculate_force(&self, state: &LanderState) -> Vector3D {
        self.breakdown(state).total()
    }

    pub fn breakdown(&self, state: &LanderState) -> ForceBreakdown {
        let parachute_drag = if state.parachute_status == ParachuteStatus::Deployed {
            self.parachute_drag(state)
        } else {
            Vector3D::ZERO
        };

        ForceBreakdown {
            gravity: self.gravity(state),
            body_drag: self.body_drag(state),
            parachute_drag,
            thrust: self.thrust(state),
        }
    }

    pub fn gravity(&self, state: &LanderState) -> Vector3D {
        let r = state.position.abs();
        -self.planet.mu() * self.mass(state) / (r * r * r) * state.position
    }

    pub fn body_drag(&self, state: &LanderState) -> Vector3D {
        self.quadratic_drag(
            state,
            self.properties.drag_coefficient * self.properties.body_area(),
        )
    }

    pub fn parachute_drag(&self, state: &LanderState) -> Vector3D {
        self.quadratic_drag(
            state,
            self.properties.parachute_drag_coefficient * self.properties.parachute_area(),
        )
    }

    pub fn thrust(&self, state: &LanderState) -> Vector3D {
        state.throttle * self.properties.max_thrust * thrust_direction(&state.orientation)
    }

    // -0.5·ρ·(Cd·A)·|v|·v
    fn quadratic_drag(&self, state: &LanderState, drag_area: f64) -> Vector3D {
        let rho = self.planet.atmospheric_density(&state.position);
        -0.5 * rho * drag_area * state.velocity.abs() * state.velocity
    }
}
