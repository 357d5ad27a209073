pub mod state;

use crate::config::{AirframeParams, MotorParams};

// ---------------------------------------------------------------------------
// Derivative functions
// ---------------------------------------------------------------------------
//
// Each equation takes the scalar being integrated, the time, and a typed aux
// struct naming exactly the coupling values it needs. Aux values are frozen
// over a whole RK4 step (they come from the step's snapshot), which decouples
// the six mutually-coupled scalars into six independent integrations per
// step. This is a deliberate approximation, not an oversight.

/// Coupling inputs for the electrical equation.
#[derive(Debug, Clone, Copy)]
pub struct CurrentAux {
    pub angular_velocity: f64, // rad/s, this motor's own speed (back-EMF)
    pub voltage: f64,          // V
}

/// Motor electrical equation: L di/dt + R i + K omega = u
pub fn current_dot(p: &MotorParams, current: f64, _t: f64, aux: &CurrentAux) -> f64 {
    (aux.voltage - p.resistance * current - p.torque_constant * aux.angular_velocity)
        / p.inductance
}

/// Coupling inputs for the motor mechanical equation.
#[derive(Debug, Clone, Copy)]
pub struct SpinAux {
    pub current: f64, // A, this motor's own current
}

/// Motor mechanical equation: J domega/dt + D omega + Cq omega^2 = K i
/// (propeller load torque is quadratic in speed)
pub fn angular_velocity_dot(p: &MotorParams, omega: f64, _t: f64, aux: &SpinAux) -> f64 {
    let load = p.drag_coefficient * omega * omega;
    (p.torque_constant * aux.current - p.damping * omega - load) / p.inertia
}

/// Coupling inputs for the airframe rate equation.
#[derive(Debug, Clone, Copy)]
pub struct RateAux {
    pub right_angular_velocity: f64, // rad/s
    pub left_angular_velocity: f64,  // rad/s
}

/// Airframe rate equation: J_drone dq/dt = (T_R - T_L) * l, T = Ct omega^2.
/// Differential thrust across the arm produces the net torque.
pub fn rate_dot(p: &AirframeParams, _q: f64, _t: f64, aux: &RateAux) -> f64 {
    let thrust_right = p.thrust_coefficient * aux.right_angular_velocity.powi(2);
    let thrust_left = p.thrust_coefficient * aux.left_angular_velocity.powi(2);
    (thrust_right - thrust_left) * p.arm_length / p.inertia
}

/// Coupling input for the attitude equation.
#[derive(Debug, Clone, Copy)]
pub struct AttitudeAux {
    pub rate: f64, // q, rad/s
}

/// Attitude equation: dtheta/dt = q
pub fn attitude_dot(_theta: f64, _t: f64, aux: &AttitudeAux) -> f64 {
    aux.rate
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
