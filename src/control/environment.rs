use crate::constants::{
    ATMOSPHERE_SCALE_HEIGHT, EXOSPHERE, GRAVITATIONAL_CONSTANT, MARS_MASS, MARS_RADIUS,
    SURFACE_DENSITY,
};
use crate::errors::SimulationError;
use crate::utils::vector3d::Vector3D;

/// Planet centred at the origin of the simulation frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Planet {
    pub name: String,
    pub mass: f64,
    pub radius: f64,
    pub exosphere: f64,
    pub surface_density: f64,
    pub scale_height: f64,
    pub gravitational_constant: f64,
}

impl Planet {
    pub fn new(
        name: String,
        mass: f64,
        radius: f64,
        exosphere: f64,
        surface_density: f64,
        scale_height: f64,
    ) -> Self {
        Planet {
            name,
            mass,
            radius,
            exosphere,
            surface_density,
            scale_height,
            gravitational_constant: GRAVITATIONAL_CONSTANT,
        }
    }

    pub fn mars() -> Self {
        Planet::new(
            "Mars".to_string(),
            MARS_MASS,
            MARS_RADIUS,
            EXOSPHERE,
            SURFACE_DENSITY,
            ATMOSPHERE_SCALE_HEIGHT,
        )
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        for (name, value) in [
            ("mass", self.mass),
            ("radius", self.radius),
            ("exosphere", self.exosphere),
            ("surface density", self.surface_density),
            ("scale height", self.scale_height),
            ("gravitational constant", self.gravitational_constant),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimulationError::InvalidParameter(format!(
                    "planet {} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// G·M of the planet.
    pub fn mu(&self) -> f64 {
        self.gravitational_constant * self.mass
    }

    pub fn altitude(&self, position: &Vector3D) -> f64 {
        position.abs() - self.radius
    }

    /// Acceleration due to gravity at `position`, pointing at the planet centre.
    ///
    /// Not defined at the origin: the result there is non-finite.
    pub fn gravitational_acceleration(&self, position: &Vector3D) -> Vector3D {
        let r = position.abs();
        -self.mu() / (r * r * r) * *position
    }

    /// Atmospheric density at `position` in kg/m³.
    ///
    /// Exponential profile shifted so it reaches exactly zero at the exosphere,
    /// which keeps the density continuous there. Below the surface the surface
    /// value is returned.
    pub fn atmospheric_density(&self, position: &Vector3D) -> f64 {
        let altitude = self.altitude(position);
        if altitude >= self.exosphere {
            return 0.0;
        }
        let altitude = altitude.max(0.0);
        let floor = (-self.exosphere / self.scale_height).exp();
        (self.surface_density * ((-altitude / self.scale_height).exp() - floor)).max(0.0)
    }

    pub fn is_in_atmosphere(&self, position: &Vector3D) -> bool {
        self.altitude(position) < self.exosphere
    }

    pub fn surface_gravity(&self) -> f64 {
        self.mu() / self.radius.powi(2)
    }

    pub fn gravity_at_altitude(&self, altitude: f64) -> f64 {
        let distance = self.radius + altitude;
        self.mu() / distance.powi(2)
    }

    pub fn escape_velocity(&self, altitude: f64) -> f64 {
        let distance = self.radius + altitude;
        (2.0 * self.mu() / distance).sqrt()
    }

    pub fn circular_orbit_speed(&self, distance: f64) -> f64 {
        (self.mu() / distance).sqrt()
    }
}

impl Default for Planet {
    fn default() -> Self {
        Planet::mars()
    }
}
