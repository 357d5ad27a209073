use crate::config::DroneConfig;

// ---------------------------------------------------------------------------
// Unit conversion
// ---------------------------------------------------------------------------

/// rad/s -> RPM
pub const RADPS_TO_RPM: f64 = 60.0 / (2.0 * std::f64::consts::PI);

// ---------------------------------------------------------------------------
// Motor identity
// ---------------------------------------------------------------------------

/// The two rotors. The domain is fixed at exactly two; this is deliberately
/// an enum rather than a collection index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motor {
    Right,
    Left,
}

impl Motor {
    pub const BOTH: [Motor; 2] = [Motor::Right, Motor::Left];

    fn idx(self) -> usize {
        match self {
            Motor::Right => 0,
            Motor::Left => 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Simulation state
// ---------------------------------------------------------------------------

/// Electrical + mechanical state of one motor.
#[derive(Debug, Clone, Copy)]
pub struct MotorState {
    pub current: f64,          // A
    pub angular_velocity: f64, // rad/s
    pub voltage: f64,          // V, constant after init (open loop)
}

/// Rotational state of the airframe about its single axis.
#[derive(Debug, Clone, Copy)]
pub struct DroneState {
    pub rate: f64,     // q, rad/s
    pub attitude: f64, // theta, rad
}

/// Complete state of the system at one instant.
///
/// A step clones this value as its frozen snapshot and builds the next state
/// from it, so there are no separate previous-value fields to keep in sync.
#[derive(Debug, Clone)]
pub struct SimState {
    pub time: f64,
    motors: [MotorState; 2],
    pub drone: DroneState,
}

impl SimState {
    /// Rest state: zero currents, velocities, rate and attitude, with the
    /// configured per-motor voltages applied.
    pub fn initial(cfg: &DroneConfig) -> Self {
        let at_rest = |voltage: f64| MotorState {
            current: 0.0,
            angular_velocity: 0.0,
            voltage,
        };
        Self {
            time: 0.0,
            motors: [at_rest(cfg.sim.right_voltage), at_rest(cfg.sim.left_voltage)],
            drone: DroneState {
                rate: 0.0,
                attitude: 0.0,
            },
        }
    }

    pub fn motor(&self, m: Motor) -> &MotorState {
        &self.motors[m.idx()]
    }

    pub fn motor_mut(&mut self, m: Motor) -> &mut MotorState {
        &mut self.motors[m.idx()]
    }

    /// The per-step emission tuple, motor speeds converted to RPM.
    pub fn record(&self) -> StepRecord {
        StepRecord {
            time: self.time,
            right_current: self.motor(Motor::Right).current,
            left_current: self.motor(Motor::Left).current,
            right_rpm: self.motor(Motor::Right).angular_velocity * RADPS_TO_RPM,
            left_rpm: self.motor(Motor::Left).angular_velocity * RADPS_TO_RPM,
            rate: self.drone.rate,
            attitude: self.drone.attitude,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-step emission record
// ---------------------------------------------------------------------------

/// One output row: what the simulation reports after every step (and once
/// for the initial state).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecord {
    pub time: f64,          // s
    pub right_current: f64, // A
    pub left_current: f64,  // A
    pub right_rpm: f64,
    pub left_rpm: f64,
    pub rate: f64,     // rad/s
    pub attitude: f64, // rad
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
