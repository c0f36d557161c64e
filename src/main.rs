use lander_simulation::*;

fn usage() {
    println!("Usage: main [SCENARIO] [MAX_STEPS] [--autopilot] [--parachute]");
    println!("       main spring");
    println!("\nScenarios:");
    for (index, scenario) in Scenario::catalog().iter().enumerate() {
        println!("  {}: {}", index, scenario.description());
    }
}

fn run_spring() -> Result<(), Box<dyn std::error::Error>> {
    let simulation = SpringSimulation::default();
    let trajectory = simulation.run_verlet()?;
    if write_trajectory(TRAJECTORY_FILE, &trajectory) {
        println!(
            "Wrote {} samples of the mass-spring trajectory to {}",
            trajectory.len(),
            TRAJECTORY_FILE
        );
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        usage();
        return Ok(());
    }
    if args.first().map(String::as_str) == Some("spring") {
        return run_spring();
    }

    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();
    let index = match positional.first() {
        Some(arg) => arg.parse::<usize>()?,
        None => 1,
    };
    let max_steps = match positional.get(1) {
        Some(arg) => arg.parse::<usize>()?,
        None => MAX_SIMULATION_STEPS,
    };
    let autopilot = args.iter().any(|a| a == "--autopilot");
    let parachute = args.iter().any(|a| a == "--parachute");

    let scenario = Scenario::from_index(index)?.with_autopilot(autopilot);
    println!("Scenario {}: {}", index, scenario.description());

    let mut lander = Lander::new(&scenario)?;
    if parachute {
        lander.deploy_parachute();
    }

    let mut autopilot_log = AutopilotLog::create(AUTOPILOT_LOG_FILE);
    let mut telemetry = Telemetry::with_log_interval(TELEMETRY_LOG_INTERVAL);

    while lander.steps() < max_steps {
        lander.update(&mut autopilot_log);
        telemetry.collect_data(&lander, lander.parameters().delta_t);

        if lander.has_landed() {
            println!(
                "Surface contact after {:.1}s at {:.2} m/s",
                lander.elapsed_time(),
                lander.speed()
            );
            break;
        }
    }

    autopilot_log.flush();
    if autopilot_log.lines_written() > 0 {
        println!(
            "Wrote {} autopilot samples to {}",
            autopilot_log.lines_written(),
            autopilot_log.path().display()
        );
    }

    telemetry.display_data();

    Ok(())
}
