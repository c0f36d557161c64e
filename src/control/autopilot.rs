use crate::constants::{AUTOPILOT_DELTA, AUTOPILOT_KH, AUTOPILOT_KP, AUTOPILOT_TARGET_RATE};
use crate::control::environment::Planet;
use crate::utils::vector3d::Vector3D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutopilotGains {
    pub kh: f64, // Altitude weight
    pub kp: f64, // Proportional gain
    pub delta: f64, // Throttle offset at zero error
}

impl Default for AutopilotGains {
    fn default() -> Self {
        AutopilotGains {
            kh: AUTOPILOT_KH,
            kp: AUTOPILOT_KP,
            delta: AUTOPILOT_DELTA,
        }
    }
}

/// One diagnostic record per autopilot invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutopilotSample {
    pub closing_rate: f64,
    /// `-(0.5 + Kh·altitude)`, the descent rate the controller is aiming for.
    pub target_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutopilotCommand {
    pub throttle: f64,
    pub raw_output: f64,
    pub error: f64,
    pub sample: AutopilotSample,
}

/// Receives autopilot diagnostics in step order.
pub trait DiagnosticSink {
    fn record(&mut self, sample: &AutopilotSample);
}

impl DiagnosticSink for Vec<AutopilotSample> {
    fn record(&mut self, sample: &AutopilotSample) {
        self.push(*sample);
    }
}

/// Sink that discards every sample.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _sample: &AutopilotSample) {}
}

/// Proportional throttle controller tracking a descent rate that shrinks
/// linearly with altitude.
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    pub gains: AutopilotGains,
}

impl Autopilot {
    pub fn new(gains: AutopilotGains) -> Self {
        Autopilot { gains }
    }

    /// Closing rate: velocity along the outward radial direction.
    pub fn closing_rate(position: &Vector3D, velocity: &Vector3D) -> f64 {
        velocity.dot(&position.norm())
    }

    /// Throttle command for the current state. Altitude is taken from
    /// `position` relative to `planet`.
    pub fn compute(
        &self,
        planet: &Planet,
        position: &Vector3D,
        velocity: &Vector3D,
    ) -> AutopilotCommand {
        let altitude = planet.altitude(position);
        let closing_rate = Self::closing_rate(position, velocity);
        let target_rate = -(AUTOPILOT_TARGET_RATE + self.gains.kh * altitude);
        let error = target_rate - closing_rate;
        let raw_output = self.gains.kp * error;

        AutopilotCommand {
            throttle: self.throttle_from_output(raw_output),
            raw_output,
            error,
            sample: AutopilotSample {
                closing_rate,
                target_rate,
            },
        }
    }

    /// Maps controller output to a throttle fraction, cut off at or below
    /// `-delta` and saturated at or above `1 - delta`.
    pub fn throttle_from_output(&self, raw_output: f64) -> f64 {
        let delta = self.gains.delta;
        if raw_output <= -delta {
            0.0
        } else if raw_output >= 1.0 - delta {
            1.0
        } else {
            delta + raw_output
        }
    }
}
