//! Physical constants fixed for the lifetime of a run
//!
//! Units are astronomical units, years and solar masses. In that system the
//! gravitational constant is 4π², which keeps every quantity the integrator
//! touches far away from the subnormal range that SI units (G ≈ 6.67e-11)
//! would push it into.

use crate::error::{Result, SimulationError};
use crate::physics::math::Scalar;

/// Gravitational constant in AU³ · M☉⁻¹ · yr⁻²
pub const GRAVITATIONAL_CONSTANT: Scalar = 4.0 * std::f64::consts::PI * std::f64::consts::PI;

/// Default integration step in years
pub const DEFAULT_TIME_STEP: Scalar = 0.0005;

/// Default softening length in AU, added to pair distances
pub const DEFAULT_SOFTENING: Scalar = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConstants {
    pub gravitational_constant: Scalar,
    pub time_step: Scalar,
    pub softening: Scalar,
}

impl Default for SimulationConstants {
    fn default() -> Self {
        Self {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            time_step: DEFAULT_TIME_STEP,
            softening: DEFAULT_SOFTENING,
        }
    }
}

impl SimulationConstants {
    pub fn new(
        gravitational_constant: Scalar,
        time_step: Scalar,
        softening: Scalar,
    ) -> Result<Self> {
        let constants = Self {
            gravitational_constant,
            time_step,
            softening,
        };
        constants.validate()?;
        Ok(constants)
    }

    pub fn with_time_step(mut self, time_step: Scalar) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_gravitational_constant(mut self, gravitational_constant: Scalar) -> Self {
        self.gravitational_constant = gravitational_constant;
        self
    }

    pub fn with_softening(mut self, softening: Scalar) -> Self {
        self.softening = softening;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.gravitational_constant.is_finite() || self.gravitational_constant <= 0.0 {
            return Err(SimulationError::InvalidConstant {
                name: "gravitational_constant",
                value: self.gravitational_constant,
            });
        }

        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(SimulationError::InvalidConstant {
                name: "time_step",
                value: self.time_step,
            });
        }

        if !self.softening.is_finite() || self.softening <= 0.0 {
            return Err(SimulationError::InvalidConstant {
                name: "softening",
                value: self.softening,
            });
        }

        Ok(())
    }
}
