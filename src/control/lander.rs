use crate::{
    control::{
        attitude::stabilized_orientation,
        autopilot::{Autopilot, AutopilotCommand, DiagnosticSink},
        scenario::Scenario,
        vehicle::ParachuteStatus,
    },
    errors::SimulationError,
    trajectory_system::{
        forces::ForceModel,
        integrator::{IntegratorPhase, VelocityUpdate, VerletIntegrator},
    },
    utils::vector3d::Vector3D,
};

/// Mutable state of the lander, advanced in place every step.
#[derive(Debug, Clone, PartialEq)]
pub struct LanderState {
    pub position: Vector3D,
    pub velocity: Vector3D,
    pub orientation: Vector3D, // xyz Euler angles, degrees
    pub fuel: f64,             // fraction of capacity
    pub throttle: f64,         // fraction of max thrust
    pub parachute_status: ParachuteStatus,
}

impl Default for LanderState {
    fn default() -> Self {
        LanderState {
            position: Vector3D::ZERO,
            velocity: Vector3D::ZERO,
            orientation: Vector3D::ZERO,
            fuel: 1.0,
            throttle: 0.0,
            parachute_status: ParachuteStatus::NotDeployed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    pub delta_t: f64,
    pub autopilot_enabled: bool,
    pub stabilized_attitude: bool,
    pub velocity_update: VelocityUpdate,
}

impl SimulationParameters {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.delta_t.is_finite() && self.delta_t > 0.0) {
            return Err(SimulationError::InvalidParameter(format!(
                "time step must be positive, got {}",
                self.delta_t
            )));
        }
        Ok(())
    }
}

/// A single simulation run: one live state, its parameters and the
/// integrator memory that belongs to it. Parameters and the force model are
/// fixed for the run; only `load_scenario` replaces them.
pub struct Lander {
    pub state: LanderState,
    pub autopilot: Autopilot,
    pub last_command: Option<AutopilotCommand>,
    parameters: SimulationParameters,
    forces: ForceModel,
    integrator: VerletIntegrator,
    steps: usize,
}

impl Lander {
    pub fn new(scenario: &Scenario) -> Result<Self, SimulationError> {
        Self::with_models(scenario, ForceModel::default(), Autopilot::default())
    }

    pub fn with_models(
        scenario: &Scenario,
        forces: ForceModel,
        autopilot: Autopilot,
    ) -> Result<Self, SimulationError> {
        scenario.validate()?;
        forces.validate()?;
        Ok(Lander {
            state: scenario.initial_state(),
            parameters: scenario.parameters(),
            forces,
            autopilot,
            last_command: None,
            integrator: VerletIntegrator::new(),
            steps: 0,
        })
    }

    /// Replace the live state with a new scenario. Integrator memory is
    /// always cleared along with it.
    pub fn load_scenario(&mut self, scenario: &Scenario) -> Result<(), SimulationError> {
        scenario.validate()?;
        self.state = scenario.initial_state();
        self.parameters = scenario.parameters();
        self.last_command = None;
        self.integrator.reset();
        self.steps = 0;
        Ok(())
    }

    /// One atomic simulation step: integrate, then autopilot, then attitude.
    pub fn update<S: DiagnosticSink>(&mut self, sink: &mut S) {
        self.integrator.step(
            &mut self.state,
            &self.forces,
            self.parameters.delta_t,
            self.parameters.velocity_update,
        );

        if self.parameters.autopilot_enabled {
            self.apply_autopilot(sink);
        }

        if self.parameters.stabilized_attitude {
            self.state.orientation = stabilized_orientation(&self.state.position);
        }

        self.steps += 1;
    }

    fn apply_autopilot<S: DiagnosticSink>(&mut self, sink: &mut S) {
        let command = self.autopilot.compute(
            &self.forces.planet,
            &self.state.position,
            &self.state.velocity,
        );
        self.state.throttle = command.throttle;
        sink.record(&command.sample);
        self.last_command = Some(command);
    }

    /// Step until the lander reaches the surface or `max_steps` have run.
    /// Returns the number of steps taken.
    pub fn run_until_landed<S: DiagnosticSink>(
        &mut self,
        max_steps: usize,
        sink: &mut S,
    ) -> usize {
        let mut taken = 0;
        while taken < max_steps && !self.has_landed() {
            self.update(sink);
            taken += 1;
        }
        taken
    }

    pub fn deploy_parachute(&mut self) {
        if self.state.parachute_status == ParachuteStatus::NotDeployed {
            self.state.parachute_status = ParachuteStatus::Deployed;
        }
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    pub fn forces(&self) -> &ForceModel {
        &self.forces
    }

    pub fn altitude(&self) -> f64 {
        self.forces.planet.altitude(&self.state.position)
    }

    pub fn speed(&self) -> f64 {
        self.state.velocity.abs()
    }

    pub fn closing_rate(&self) -> f64 {
        Autopilot::closing_rate(&self.state.position, &self.state.velocity)
    }

    pub fn mass(&self) -> f64 {
        self.forces.mass(&self.state)
    }

    pub fn has_landed(&self) -> bool {
        self.altitude() <= 0.0
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn elapsed_time(&self) -> f64 {
        self.steps as f64 * self.parameters.delta_t
    }

    pub fn integrator_phase(&self) -> IntegratorPhase {
        self.integrator.phase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::autopilot::{AutopilotSample, NullSink};
    use crate::control::environment::Planet;
    use crate::control::vehicle::LanderProperties;
    use approx::assert_relative_eq;

    fn descent() -> Lander {
        Lander::new(&Scenario::from_index(1).unwrap()).unwrap()
    }

    #[test]
    fn test_new_lander_starts_uninitialized() {
        let lander = descent();
        assert_eq!(lander.integrator_phase(), IntegratorPhase::Uninitialized);
        assert_eq!(lander.steps(), 0);
        assert_relative_eq!(lander.altitude(), 10_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_load_scenario_resets_integrator() {
        let mut lander = descent();
        lander.update(&mut NullSink);
        lander.update(&mut NullSink);
        assert!(matches!(
            lander.integrator_phase(),
            IntegratorPhase::Running { .. }
        ));

        let orbit = Scenario::from_index(0).unwrap();
        lander.load_scenario(&orbit).unwrap();
        assert_eq!(lander.integrator_phase(), IntegratorPhase::Uninitialized);
        assert_eq!(lander.state, orbit.initial_state());

        // First step after loading is a clean Euler bootstrap.
        let start = lander.state.position;
        lander.update(&mut NullSink);
        assert_eq!(
            lander.state.position,
            start + orbit.delta_t * orbit.velocity
        );
    }

    #[test]
    fn test_autopilot_writes_throttle_and_diagnostics() {
        let scenario = Scenario::from_index(1).unwrap().with_autopilot(true);
        let mut lander = Lander::new(&scenario).unwrap();
        let mut samples: Vec<AutopilotSample> = Vec::new();

        for _ in 0..50 {
            lander.update(&mut samples);
        }

        assert_eq!(samples.len(), 50);
        let command = lander.last_command.unwrap();
        assert_eq!(lander.state.throttle, command.throttle);
        assert_eq!(samples.last().unwrap(), &command.sample);
    }

    #[test]
    fn test_autopilot_disabled_leaves_throttle() {
        let mut lander = descent();
        let mut samples: Vec<AutopilotSample> = Vec::new();
        for _ in 0..20 {
            lander.update(&mut samples);
        }
        assert!(samples.is_empty());
        assert_eq!(lander.state.throttle, 0.0);
        assert!(lander.last_command.is_none());
    }

    #[test]
    fn test_stabilized_attitude_points_up() {
        let mut lander = descent();
        lander.update(&mut NullSink);
        let up = crate::control::attitude::thrust_direction(&lander.state.orientation);
        let radial = lander.state.position.norm();
        assert_relative_eq!(up.dot(&radial), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_deploy_parachute_only_from_stowed() {
        let mut lander = descent();
        lander.deploy_parachute();
        assert_eq!(lander.state.parachute_status, ParachuteStatus::Deployed);

        lander.state.parachute_status = ParachuteStatus::Lost;
        lander.deploy_parachute();
        assert_eq!(lander.state.parachute_status, ParachuteStatus::Lost);
    }

    #[test]
    fn test_invalid_time_step_rejected() {
        let mut scenario = Scenario::from_index(1).unwrap();
        scenario.delta_t = 0.0;
        assert!(matches!(
            Lander::new(&scenario),
            Err(SimulationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_run_until_landed_respects_step_bound() {
        let mut lander = descent();
        assert_eq!(lander.run_until_landed(10, &mut NullSink), 10);
        assert!(!lander.has_landed());

        let taken = lander.run_until_landed(100_000, &mut NullSink);
        assert!(lander.has_landed());
        assert_eq!(lander.steps(), 10 + taken);
        assert_eq!(lander.run_until_landed(100, &mut NullSink), 0);
    }

    #[test]
    fn test_elapsed_time_tracks_steps() {
        let mut lander = descent();
        for _ in 0..25 {
            lander.update(&mut NullSink);
        }
        assert_eq!(lander.steps(), 25);
        assert_relative_eq!(lander.elapsed_time(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_parameters_fixed_for_the_run() {
        let scenario = Scenario::from_index(1).unwrap();
        let mut lander = Lander::new(&scenario).unwrap();
        for _ in 0..3 {
            lander.update(&mut NullSink);
            assert_eq!(lander.parameters(), &scenario.parameters());
            assert!(lander.state.velocity.is_finite());
        }

        let faster = Scenario::from_index(3).unwrap().with_time_step(0.05);
        lander.load_scenario(&faster).unwrap();
        assert_eq!(lander.parameters().delta_t, 0.05);
    }

    #[test]
    fn test_rejected_load_keeps_current_run() {
        let mut lander = descent();
        lander.update(&mut NullSink);
        let before = lander.state.clone();

        let mut bad = Scenario::from_index(0).unwrap();
        bad.delta_t = 0.0;
        assert!(lander.load_scenario(&bad).is_err());
        assert_eq!(lander.parameters().delta_t, 0.1);
        assert_eq!(lander.state, before);

        lander.update(&mut NullSink);
        assert!(lander.state.position.is_finite());
        assert!(lander.state.velocity.is_finite());
    }

    #[test]
    fn test_non_physical_models_rejected() {
        let scenario = Scenario::from_index(1).unwrap();

        let mut planet = Planet::mars();
        planet.radius = 0.0;
        let forces = ForceModel::new(planet, LanderProperties::default());
        assert!(matches!(
            Lander::with_models(&scenario, forces, Autopilot::default()),
            Err(SimulationError::InvalidParameter(_))
        ));

        let mut properties = LanderProperties::default();
        properties.unloaded_mass = -1.0;
        let forces = ForceModel::new(Planet::mars(), properties);
        assert!(Lander::with_models(&scenario, forces, Autopilot::default()).is_err());
    }
}
