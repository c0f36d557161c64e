use crate::control::lander::Lander;
use crate::control::vehicle::ParachuteStatus;
use crate::utils::vector3d::Vector3D;

pub struct Telemetry {
    pub log: Vec<String>,
    log_interval: usize,
    samples: usize,
    max_speed: f64,
    max_altitude: Option<f64>,
    min_altitude: Option<f64>,
    max_throttle: f64,
    parachute_times: Vec<(ParachuteStatus, f64)>,
    landing_time: Option<f64>,
    simulation_time: f64,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl Telemetry {
    /// Collector that keeps a log entry for every sample.
    pub fn new() -> Self {
        Self::with_log_interval(1)
    }

    /// Collector that keeps a log entry for the first sample, every
    /// `interval`-th sample after it and the sample at surface contact.
    /// Extremes are still tracked on every sample.
    pub fn with_log_interval(interval: usize) -> Self {
        Telemetry {
            log: Vec::new(),
            log_interval: interval.max(1),
            samples: 0,
            max_speed: 0.0,
            max_altitude: None,
            min_altitude: None,
            max_throttle: 0.0,
            parachute_times: Vec::new(),
            landing_time: None,
            simulation_time: 0.0,
        }
    }

    fn format_vector3d(vec: &Vector3D, precision: usize) -> String {
        format!(
            "x = {:.precision$} m, y = {:.precision$} m, z = {:.precision$} m",
            vec.x,
            vec.y,
            vec.z,
            precision = precision
        )
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 3600.0 {
            let hours = (elapsed_time / 3600.0).floor();
            let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
        } else if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude.abs() >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    fn format_extreme(altitude: Option<f64>) -> String {
        altitude.map_or_else(|| "n/a".to_string(), Self::format_altitude)
    }

    pub fn collect_data(&mut self, lander: &Lander, delta_time: f64) {
        self.simulation_time += delta_time;
        self.samples += 1;
        let speed = lander.speed();
        let altitude = lander.altitude();
        let throttle = lander.state.throttle;

        self.max_speed = self.max_speed.max(speed);
        self.max_altitude = Some(self.max_altitude.map_or(altitude, |a| a.max(altitude)));
        self.min_altitude = Some(self.min_altitude.map_or(altitude, |a| a.min(altitude)));
        self.max_throttle = self.max_throttle.max(throttle);

        let touched_down = self.landing_time.is_none() && lander.has_landed();
        if touched_down {
            self.landing_time = Some(self.simulation_time);
        }

        let status = lander.state.parachute_status;
        if self.parachute_times.last().map(|(s, _)| *s) != Some(status) {
            self.parachute_times.push((status, self.simulation_time));
        }

        if (self.samples - 1) % self.log_interval != 0 && !touched_down {
            return;
        }

        let formatted_time = Self::format_time(self.simulation_time);
        let data = format!(
            "Time: {}\n\
                 Position: {}\n\
                 Velocity: {} (Magnitude: {:.2} m/s)\n\
                 Altitude: {}\n\
                 Closing Rate: {:.2} m/s\n\
                 Throttle: {:.3}\n\
                 Mass: {:.2} kg\n\
                 Air Density: {:.6} kg/m³\n\
                 Parachute: {:?}\n",
            formatted_time,
            Self::format_vector3d(&lander.state.position, 2),
            Self::format_vector3d(&lander.state.velocity, 2),
            speed,
            Self::format_altitude(altitude),
            lander.closing_rate(),
            throttle,
            lander.mass(),
            lander.forces().planet.atmospheric_density(&lander.state.position),
            lander.state.parachute_status,
        );
        self.log.push(data);
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn max_altitude(&self) -> Option<f64> {
        self.max_altitude
    }

    pub fn min_altitude(&self) -> Option<f64> {
        self.min_altitude
    }

    pub fn max_throttle(&self) -> f64 {
        self.max_throttle
    }

    pub fn landing_time(&self) -> Option<f64> {
        self.landing_time
    }

    pub fn display_summary(&self) {
        println!("\n--- Simulation Summary ---");
        println!("Simulated Time: {}", Self::format_time(self.simulation_time));
        println!("Max Speed: {:.2} m/s", self.max_speed);
        println!("Max Altitude: {}", Self::format_extreme(self.max_altitude));
        println!("Min Altitude: {}", Self::format_extreme(self.min_altitude));
        println!("Max Throttle: {:.3}", self.max_throttle);
        match self.landing_time {
            Some(t) => println!("Surface contact at: {}", Self::format_time(t)),
            None => println!("No surface contact"),
        }

        println!("\n--- Parachute Transitions ---");
        for (status, time) in &self.parachute_times {
            println!("{:?} at: {}", status, Self::format_time(*time));
        }
    }

    pub fn display_data(&self) {
        println!("--- Telemetry Data ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Telemetry ---");
        self.display_summary();
    }
}
