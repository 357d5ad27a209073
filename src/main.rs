use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use drone_sim::io::csv;
use drone_sim::sim::simulate;
use drone_sim::types::DroneConfig;

#[derive(Parser, Debug)]
#[command(version, about = "Two-motor differential-thrust drone simulation")]
struct Args {
    /// TOML configuration file; nominal bench values are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the full trajectory to a CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print every record instead of a sampled table
    #[arg(long)]
    full: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => DroneConfig::load(path)?,
        None => DroneConfig::default(),
    };
    cfg.validate()?;
    info!(
        h = cfg.sim.step_size,
        end = cfg.sim.end_time,
        right_v = cfg.sim.right_voltage,
        left_v = cfg.sim.left_voltage,
        "configuration loaded"
    );

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let trajectory = simulate(&cfg)?;
    let last = trajectory
        .last()
        .expect("trajectory always holds the initial record");

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  DRONE DIFFERENTIAL-THRUST SIMULATION");
    println!("====================================================================");
    println!();
    println!("  Motor Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Inductance:   {:>10.2e} H    Resistance:   {:>10.2e} Ohm",
        cfg.motor.inductance, cfg.motor.resistance
    );
    println!(
        "  Torque const: {:>10.2e} Nm/A Inertia:      {:>10.2e} kg m^2",
        cfg.motor.torque_constant, cfg.motor.inertia
    );
    println!(
        "  Prop drag:    {:>10.2e}      Damping:      {:>10.2e} Nm s",
        cfg.motor.drag_coefficient, cfg.motor.damping
    );
    println!();
    println!("  Airframe / Run");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Thrust coeff: {:>10.2e}      Arm length:   {:>10.3} m",
        cfg.airframe.thrust_coefficient, cfg.airframe.arm_length
    );
    println!(
        "  Drone inertia:{:>10.2e}      Voltages R/L: {:.2} / {:.2} V",
        cfg.airframe.inertia, cfg.sim.right_voltage, cfg.sim.left_voltage
    );
    println!(
        "  Step size:    {:>10.1e} s    End time:     {:>10.3} s",
        cfg.sim.step_size, cfg.sim.end_time
    );
    println!();

    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>9}  {:>9}  {:>9}  {:>9}  {:>9}  {:>10}  {:>10}",
        "t (s)", "i_R (A)", "i_L (A)", "w_R (RPM)", "w_L (RPM)", "q (rad/s)", "theta(rad)"
    );
    println!("  {}", "─".repeat(76));

    let sample_interval = if args.full {
        1
    } else {
        (trajectory.len() / 25).max(1)
    };
    for (i, rec) in trajectory.iter().enumerate() {
        if i % sample_interval != 0 && i != trajectory.len() - 1 {
            continue;
        }
        println!(
            "  {:>9.4}  {:>9.4}  {:>9.4}  {:>9.1}  {:>9.1}  {:>10.6}  {:>10.6}",
            rec.time,
            rec.right_current,
            rec.left_current,
            rec.right_rpm,
            rec.left_rpm,
            rec.rate,
            rec.attitude,
        );
    }

    println!();
    println!(
        "  Final state: q={:.6} rad/s  theta={:.6} rad  ({} records, h={} s)",
        last.rate,
        last.attitude,
        trajectory.len(),
        cfg.sim.step_size
    );
    println!("====================================================================");
    println!();

    if let Some(path) = &args.output {
        csv::write_trajectory_file(path.to_string_lossy().as_ref(), &trajectory)?;
        info!(path = %path.display(), records = trajectory.len(), "trajectory written");
    }

    Ok(())
}
