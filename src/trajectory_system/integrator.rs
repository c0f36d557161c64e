use crate::control::lander::LanderState;
use crate::trajectory_system::forces::ForceModel;
use crate::utils::vector3d::Vector3D;

/// Anything that can report the lander's acceleration for a given state.
pub trait AccelerationModel {
    fn acceleration(&self, state: &LanderState) -> Vector3D;
}

impl AccelerationModel for ForceModel {
    fn acceleration(&self, state: &LanderState) -> Vector3D {
        self.calculate_force(state) / self.mass(state)
    }
}

/// How velocity is maintained alongside the position-only scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VelocityUpdate {
    /// Backward difference of the two most recent positions after every
    /// Verlet step. The bootstrap step reproduces the current velocity.
    #[default]
    FromPositions,
    /// Never touch velocity; it stays at whatever the scenario set.
    Frozen,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntegratorPhase {
    Uninitialized,
    Bootstrapped { previous: Vector3D },
    Running { previous: Vector3D },
}

/// Position-Verlet integrator with an explicit Euler bootstrap step.
#[derive(Debug, Clone)]
pub struct VerletIntegrator {
    phase: IntegratorPhase,
}

impl Default for VerletIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl VerletIntegrator {
    pub fn new() -> Self {
        VerletIntegrator {
            phase: IntegratorPhase::Uninitialized,
        }
    }

    /// Forget the previous position so the next step bootstraps again.
    pub fn reset(&mut self) {
        self.phase = IntegratorPhase::Uninitialized;
    }

    pub fn phase(&self) -> IntegratorPhase {
        self.phase
    }

    pub fn previous_position(&self) -> Option<Vector3D> {
        match self.phase {
            IntegratorPhase::Uninitialized => None,
            IntegratorPhase::Bootstrapped { previous } | IntegratorPhase::Running { previous } => {
                Some(previous)
            }
        }
    }

    /// Advance `state.position` by one step of `dt`.
    pub fn step<M: AccelerationModel>(
        &mut self,
        state: &mut LanderState,
        model: &M,
        dt: f64,
        velocity_update: VelocityUpdate,
    ) {
        let current = state.position;

        match self.phase {
            IntegratorPhase::Uninitialized => {
                state.position = current + dt * state.velocity;
                self.phase = IntegratorPhase::Bootstrapped { previous: current };
            }
            IntegratorPhase::Bootstrapped { previous } | IntegratorPhase::Running { previous } => {
                let acceleration = model.acceleration(state);
                let next = 2.0 * current - previous + dt * dt * acceleration;
                state.position = next;
                self.phase = IntegratorPhase::Running { previous: current };

                if velocity_update == VelocityUpdate::FromPositions {
                    state.velocity = (next - current) / dt;
                }
            }
        }
    }
}
