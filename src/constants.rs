// Physical Constants
pub const GRAVITATIONAL_CONSTANT: f64 = 6.673e-11; // N⋅m²/kg²
pub const MARS_MASS: f64 = 6.42e23; // kg
pub const MARS_RADIUS: f64 = 3_386_000.0; // meters
pub const EXOSPHERE: f64 = 200_000.0; // meters above the surface

// Atmosphere Constants
pub const SURFACE_DENSITY: f64 = 0.017; // kg/m³
pub const ATMOSPHERE_SCALE_HEIGHT: f64 = 11_100.0; // m

// Lander Constants
pub const LANDER_SIZE: f64 = 1.0; // m, radius of the lander body
pub const UNLOADED_LANDER_MASS: f64 = 100.0; // kg
pub const FUEL_CAPACITY: f64 = 100.0; // l
pub const FUEL_DENSITY: f64 = 1.0; // kg/l
pub const DRAG_COEF_LANDER: f64 = 1.0;
pub const DRAG_COEF_CHUTE: f64 = 2.0;
pub const PARACHUTE_PANELS: f64 = 5.0;

// Engine sized to 1.5x the fully fuelled surface weight
pub const MAX_THRUST: f64 = 1.5
    * (FUEL_DENSITY * FUEL_CAPACITY + UNLOADED_LANDER_MASS)
    * (GRAVITATIONAL_CONSTANT * MARS_MASS / (MARS_RADIUS * MARS_RADIUS)); // N

// Autopilot Constants
pub const AUTOPILOT_KH: f64 = 0.0189; // 1/s, altitude weight
pub const AUTOPILOT_KP: f64 = 0.7; // s/m, proportional gain
pub const AUTOPILOT_DELTA: f64 = 0.18; // throttle offset
pub const AUTOPILOT_TARGET_RATE: f64 = 0.5; // m/s, descent rate at touchdown

// Simulation Parameters
pub const TIME_STEP: f64 = 0.1; // s
pub const MAX_SIMULATION_STEPS: usize = 200_000;
pub const TELEMETRY_LOG_INTERVAL: usize = 1_000; // steps between telemetry log entries

// Output files
pub const AUTOPILOT_LOG_FILE: &str = "autopilot.txt";
pub const TRAJECTORY_FILE: &str = "trajectories.txt";
