pub mod config;
pub mod dynamics;
pub mod io;
pub mod sim;

pub use sim::integrator::rk4_step;
pub use sim::runner::{simulate, simulate_with};

// Flat re-exports for the common entry points
pub mod types {
    pub use crate::config::{AirframeParams, ConfigError, DroneConfig, MotorParams, SimParams};
    pub use crate::dynamics::state::{
        DroneState, Motor, MotorState, SimState, StepRecord, RADPS_TO_RPM,
    };
}
