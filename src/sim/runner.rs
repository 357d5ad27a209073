use crate::config::{ConfigError, DroneConfig};
use crate::dynamics::{self, AttitudeAux, CurrentAux, RateAux, SpinAux};
use crate::dynamics::state::{Motor, SimState, StepRecord};
use crate::io::Reporter;

use super::integrator::rk4_step;

// ---------------------------------------------------------------------------
// One step: snapshot in, next state out
// ---------------------------------------------------------------------------

/// Advance the whole system by one step of size `cfg.sim.step_size`.
///
/// `prev` is the frozen snapshot for the step: all six RK4 integrations read
/// their coupling inputs from it, never from values already advanced within
/// this step. Integrating each scalar independently against the snapshot
/// (instead of one joint 6-dimensional RK4) is the intended stepping
/// semantics; the two approaches produce different trajectories.
pub fn step(cfg: &DroneConfig, prev: &SimState) -> SimState {
    let h = cfg.sim.step_size;
    let t = prev.time;
    let mut next = prev.clone();

    for m in Motor::BOTH {
        let snap = *prev.motor(m);
        next.motor_mut(m).current = rk4_step(
            |i, t, aux: &CurrentAux| dynamics::current_dot(&cfg.motor, i, t, aux),
            snap.current,
            t,
            h,
            &CurrentAux {
                angular_velocity: snap.angular_velocity,
                voltage: snap.voltage,
            },
        );
        next.motor_mut(m).angular_velocity = rk4_step(
            |w, t, aux: &SpinAux| dynamics::angular_velocity_dot(&cfg.motor, w, t, aux),
            snap.angular_velocity,
            t,
            h,
            &SpinAux { current: snap.current },
        );
    }

    next.drone.rate = rk4_step(
        |q, t, aux: &RateAux| dynamics::rate_dot(&cfg.airframe, q, t, aux),
        prev.drone.rate,
        t,
        h,
        &RateAux {
            right_angular_velocity: prev.motor(Motor::Right).angular_velocity,
            left_angular_velocity: prev.motor(Motor::Left).angular_velocity,
        },
    );
    next.drone.attitude = rk4_step(
        dynamics::attitude_dot,
        prev.drone.attitude,
        t,
        h,
        &AttitudeAux { rate: prev.drone.rate },
    );

    next.time = t + h;
    next
}

// ---------------------------------------------------------------------------
// Full run
// ---------------------------------------------------------------------------

/// Run the simulation to completion, streaming every record (including the
/// initial state) to `reporter`. Rejects an invalid configuration before
/// touching any state.
pub fn simulate_with(cfg: &DroneConfig, reporter: &mut dyn Reporter) -> Result<(), ConfigError> {
    cfg.validate()?;

    let mut state = SimState::initial(cfg);
    reporter.record(&state.record());

    while state.time < cfg.sim.end_time {
        state = step(cfg, &state);
        reporter.record(&state.record());
    }
    Ok(())
}

/// Run the simulation and collect the full trajectory.
pub fn simulate(cfg: &DroneConfig) -> Result<Vec<StepRecord>, ConfigError> {
    cfg.validate()?;
    let capacity = (cfg.sim.end_time / cfg.sim.step_size) as usize + 2;
    let mut trajectory: Vec<StepRecord> = Vec::with_capacity(capacity.min(10_000_000));
    simulate_with(cfg, &mut trajectory)?;
    Ok(trajectory)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
