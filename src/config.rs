use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("failed to read config file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ---------------------------------------------------------------------------
// Physical parameters
// ---------------------------------------------------------------------------

/// Electrical and mechanical constants of one motor + propeller.
/// Both motors share these; only the applied voltage differs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MotorParams {
    pub inductance: f64,       // H
    pub resistance: f64,       // Ohm
    pub torque_constant: f64,  // Nm/A (also back-EMF constant, V s/rad)
    pub inertia: f64,          // kg m^2, rotor + propeller
    pub drag_coefficient: f64, // Nm s^2, propeller load torque = Cq * omega^2
    pub damping: f64,          // Nm s, viscous
}

impl Default for MotorParams {
    fn default() -> Self {
        Self {
            inductance: 3.7e-4,
            resistance: 1.2e-1,
            torque_constant: 3.3e-3,
            inertia: 8.1e-6,
            drag_coefficient: 3.0e-8,
            damping: 0.0,
        }
    }
}

/// Airframe constants for the single rotational axis.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AirframeParams {
    pub thrust_coefficient: f64, // N s^2, thrust = Ct * omega^2
    pub arm_length: f64,         // m, rotor axis to center of rotation
    pub inertia: f64,            // kg m^2, about the rotation axis
}

impl Default for AirframeParams {
    fn default() -> Self {
        Self {
            thrust_coefficient: 3.5e-6,
            arm_length: 0.09,
            inertia: 6.0e-3,
        }
    }
}

/// Run parameters: open-loop voltages and the time axis.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimParams {
    pub right_voltage: f64, // V, constant for the whole run
    pub left_voltage: f64,  // V
    pub step_size: f64,     // s
    pub end_time: f64,      // s
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            right_voltage: 7.5,
            left_voltage: 7.4,
            step_size: 1.0e-4,
            end_time: 0.5,
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Full simulation configuration. Read-only for the simulation's lifetime.
///
/// Defaults are the nominal bench values; a TOML file may override any
/// subset of fields section by section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DroneConfig {
    pub motor: MotorParams,
    pub airframe: AirframeParams,
    pub sim: SimParams,
}

impl DroneConfig {
    /// Reject values that would make the ODEs meaningless: non-positive
    /// step/end time, and non-positive constants that appear as divisors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("sim.step_size", self.sim.step_size),
            ("sim.end_time", self.sim.end_time),
            ("motor.inductance", self.motor.inductance),
            ("motor.inertia", self.motor.inertia),
            ("airframe.inertia", self.airframe.inertia),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        Ok(())
    }

    /// Load a TOML config file. Missing sections fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = DroneConfig::default();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_step_size_rejected() {
        let mut cfg = DroneConfig::default();
        cfg.sim.step_size = 0.0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("step_size"), "got: {err}");
    }

    #[test]
    fn negative_inductance_rejected() {
        let mut cfg = DroneConfig::default();
        cfg.motor.inductance = -1.0e-4;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_drone_inertia_rejected() {
        let mut cfg = DroneConfig::default();
        cfg.airframe.inertia = 0.0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("airframe.inertia"), "got: {err}");
    }

    #[test]
    fn partial_toml_overrides_one_section() {
        let cfg: DroneConfig = toml::from_str(
            r#"
            [sim]
            right_voltage = 8.0
            left_voltage = 8.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.sim.right_voltage, 8.0);
        assert_eq!(cfg.sim.left_voltage, 8.0);
        // untouched sections keep their defaults
        assert_eq!(cfg.sim.step_size, 1.0e-4);
        assert_eq!(cfg.motor.resistance, 1.2e-1);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let cfg: DroneConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.sim.end_time, 0.5);
        assert_eq!(cfg.airframe.arm_length, 0.09);
        assert!(cfg.validate().is_ok());
    }
}
