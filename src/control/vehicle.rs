use crate::constants::{
    DRAG_COEF_CHUTE, DRAG_COEF_LANDER, FUEL_CAPACITY, FUEL_DENSITY, LANDER_SIZE, MAX_THRUST,
    PARACHUTE_PANELS, UNLOADED_LANDER_MASS,
};
use crate::errors::SimulationError;

#[derive(PartialEq, Debug, Clone, Copy, Default)]
pub enum ParachuteStatus {
    #[default]
    NotDeployed,
    Deployed,
    Lost,
}

/// Fixed properties of the lander airframe and engine.
#[derive(Debug, Clone, PartialEq)]
pub struct LanderProperties {
    pub size: f64,
    pub unloaded_mass: f64,
    pub fuel_capacity: f64,
    pub fuel_density: f64,
    pub drag_coefficient: f64,
    pub parachute_drag_coefficient: f64,
    pub max_thrust: f64,
}

impl LanderProperties {
    pub fn new(
        size: f64,
        unloaded_mass: f64,
        fuel_capacity: f64,
        fuel_density: f64,
        drag_coefficient: f64,
        parachute_drag_coefficient: f64,
        max_thrust: f64,
    ) -> Self {
        LanderProperties {
            size,
            unloaded_mass,
            fuel_capacity,
            fuel_density,
            drag_coefficient,
            parachute_drag_coefficient,
            max_thrust,
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        for (name, value) in [
            ("size", self.size),
            ("unloaded mass", self.unloaded_mass),
            ("fuel capacity", self.fuel_capacity),
            ("fuel density", self.fuel_density),
            ("drag coefficient", self.drag_coefficient),
            ("parachute drag coefficient", self.parachute_drag_coefficient),
            ("max thrust", self.max_thrust),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimulationError::InvalidParameter(format!(
                    "lander {} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Total mass for a fuel fraction in [0, 1].
    pub fn mass(&self, fuel: f64) -> f64 {
        self.unloaded_mass + fuel * self.fuel_capacity * self.fuel_density
    }

    /// Frontal area of the lander body.
    pub fn body_area(&self) -> f64 {
        std::f64::consts::PI * self.size.powi(2)
    }

    /// Combined area of the parachute panels, each a square of side 2·size.
    pub fn parachute_area(&self) -> f64 {
        PARACHUTE_PANELS * (2.0 * self.size).powi(2)
    }
}

impl Default for LanderProperties {
    fn default() -> Self {
        LanderProperties::new(
            LANDER_SIZE,
            UNLOADED_LANDER_MASS,
            FUEL_CAPACITY,
            FUEL_DENSITY,
            DRAG_COEF_LANDER,
            DRAG_COEF_CHUTE,
            MAX_THRUST,
        )
    }
}
