//! Single degree of freedom mass on a spring, integrated with the same
//! Euler-bootstrapped position-Verlet scheme as the lander. Used as a
//! reference case with a known analytic solution.

use crate::constants::MAX_SIMULATION_STEPS;
use crate::errors::SimulationError;

/// Sampled trajectory: one `(t, x, v)` triple per sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    pub time: Vec<f64>,
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn samples(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.time
            .iter()
            .zip(&self.position)
            .zip(&self.velocity)
            .map(|((t, x), v)| (*t, *x, *v))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpringSimulation {
    pub mass: f64,
    pub stiffness: f64,
    pub initial_position: f64,
    pub initial_velocity: f64,
    pub dt: f64,
    pub t_max: f64,
}

impl Default for SpringSimulation {
    fn default() -> Self {
        SpringSimulation {
            mass: 1.0,
            stiffness: 1.0,
            initial_position: 0.0,
            initial_velocity: 1.0,
            dt: 0.1,
            t_max: 100.0,
        }
    }
}

impl SpringSimulation {
    pub fn validate(&self) -> Result<(), SimulationError> {
        for (name, value) in [
            ("mass", self.mass),
            ("stiffness", self.stiffness),
            ("dt", self.dt),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimulationError::InvalidParameter(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if !(self.t_max.is_finite() && self.t_max >= self.dt) {
            return Err(SimulationError::InvalidParameter(format!(
                "t_max must cover at least one step, got {}",
                self.t_max
            )));
        }
        let steps = self.t_max / self.dt;
        if steps > MAX_SIMULATION_STEPS as f64 {
            return Err(SimulationError::InvalidParameter(format!(
                "t_max / dt gives {:.3e} steps, limit is {}",
                steps, MAX_SIMULATION_STEPS
            )));
        }
        Ok(())
    }

    fn step_count(&self) -> usize {
        (self.t_max / self.dt).round() as usize
    }

    fn acceleration(&self, x: f64) -> f64 {
        -self.stiffness * x / self.mass
    }

    fn times(&self, steps: usize) -> Vec<f64> {
        (0..=steps).map(|i| i as f64 * self.dt).collect()
    }

    /// Verlet with an Euler first step. Interior velocities are central
    /// differences, the final one a backward difference.
    pub fn run_verlet(&self) -> Result<Trajectory, SimulationError> {
        self.validate()?;
        let steps = self.step_count();
        let dt = self.dt;

        let mut position = Vec::with_capacity(steps + 1);
        position.push(self.initial_position);
        position.push(self.initial_position + dt * self.initial_velocity);
        for i in 1..steps {
            let next =
                2.0 * position[i] - position[i - 1] + dt * dt * self.acceleration(position[i]);
            position.push(next);
        }

        let mut velocity = Vec::with_capacity(steps + 1);
        velocity.push(self.initial_velocity);
        for i in 1..steps {
            velocity.push((position[i + 1] - position[i - 1]) / (2.0 * dt));
        }
        velocity.push((position[steps] - position[steps - 1]) / dt);

        Ok(Trajectory {
            time: self.times(steps),
            position,
            velocity,
        })
    }

    /// Explicit Euler, for comparison.
    pub fn run_euler(&self) -> Result<Trajectory, SimulationError> {
        self.validate()?;
        let steps = self.step_count();
        let dt = self.dt;

        let mut position = Vec::with_capacity(steps + 1);
        let mut velocity = Vec::with_capacity(steps + 1);
        let (mut x, mut v) = (self.initial_position, self.initial_velocity);
        position.push(x);
        velocity.push(v);
        for _ in 0..steps {
            let a = self.acceleration(x);
            x += dt * v;
            v += dt * a;
            position.push(x);
            velocity.push(v);
        }

        Ok(Trajectory {
            time: self.times(steps),
            position,
            velocity,
        })
    }

    /// Total mechanical energy at a sample.
    pub fn energy(&self, x: f64, v: f64) -> f64 {
        0.5 * self.mass * v * v + 0.5 * self.stiffness * x * x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_columns_have_equal_length() {
        let sim = SpringSimulation::default();
        let trajectory = sim.run_verlet().unwrap();
        assert_eq!(trajectory.len(), 1001);
        assert_eq!(trajectory.position.len(), trajectory.len());
        assert_eq!(trajectory.velocity.len(), trajectory.len());
        assert_abs_diff_eq!(trajectory.time[1000], 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_first_step_is_euler() {
        let sim = SpringSimulation::default();
        let trajectory = sim.run_verlet().unwrap();
        assert_eq!(trajectory.position[1], sim.initial_position + sim.dt * sim.initial_velocity);
    }

    #[test]
    fn test_verlet_tracks_analytic_solution() {
        let sim = SpringSimulation {
            dt: 0.001,
            t_max: 10.0,
            ..SpringSimulation::default()
        };
        let trajectory = sim.run_verlet().unwrap();
        for (t, x, v) in trajectory.samples().step_by(100) {
            assert_abs_diff_eq!(x, t.sin(), epsilon = 1e-2);
            assert_abs_diff_eq!(v, t.cos(), epsilon = 1e-2);
        }
    }

    #[test]
    fn test_verlet_energy_bounded_where_euler_grows() {
        let sim = SpringSimulation::default();
        let verlet = sim.run_verlet().unwrap();
        let euler = sim.run_euler().unwrap();
        let initial = sim.energy(sim.initial_position, sim.initial_velocity);

        let max_verlet_x = verlet.position.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
        assert!(max_verlet_x < 1.1, "Verlet amplitude drifted to {}", max_verlet_x);

        let last = euler.len() - 1;
        let final_euler = sim.energy(euler.position[last], euler.velocity[last]);
        assert!(final_euler > 10.0 * initial, "Euler energy should grow, got {}", final_euler);
    }

    #[test]
    fn test_invalid_parameters() {
        let sim = SpringSimulation {
            dt: 0.0,
            ..SpringSimulation::default()
        };
        assert!(matches!(
            sim.run_verlet(),
            Err(SimulationError::InvalidParameter(_))
        ));

        let sim = SpringSimulation {
            mass: -1.0,
            ..SpringSimulation::default()
        };
        assert!(sim.run_euler().is_err());
    }

    #[test]
    fn test_step_count_is_bounded() {
        let sim = SpringSimulation {
            dt: 1e-300,
            t_max: 1e300,
            ..SpringSimulation::default()
        };
        assert!(matches!(
            sim.validate(),
            Err(SimulationError::InvalidParameter(_))
        ));
        assert!(sim.run_euler().is_err());
        assert!(sim.run_verlet().is_err());

        let at_limit = SpringSimulation {
            dt: 1.0,
            t_max: MAX_SIMULATION_STEPS as f64,
            ..SpringSimulation::default()
        };
        assert!(at_limit.validate().is_ok());
    }
}
