// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Simulation constants
//!
//! [`Params`] is read at the start of every tick and never changed by the
//! engine itself. Hosts may tweak it between ticks through
//! [`World::params_mut`](crate::World::params_mut).

use crate::error::ParamsError;

/// Standard gravitational constant in SI units (m³/(kg⋅s²))
///
/// CODATA 2018 recommended value: 6.67430(15) × 10⁻¹¹ m³/(kg⋅s²)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.6743e-11;

/// Simulation configuration
///
/// # Example
///
/// ```
/// use sphere_physics::Params;
///
/// let params = Params::default()
///     .with_gravity(false)
///     .with_restitution(1.0)
///     .with_collision_iterations(4);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Params {
    /// Gravitational constant
    pub g: f64,
    /// Coefficient of restitution in [0, 1]
    pub restitution: f64,
    /// Overlap tolerated before position correction kicks in (m)
    pub penetration_slop: f64,
    /// Fraction of the remaining overlap removed per resolved pair, in (0, 1]
    pub position_correction_percent: f64,
    /// Number of sequential-impulse passes per tick
    pub collision_iterations: u32,
    /// Toggle for the pairwise gravity pass
    pub enable_gravity: bool,
    /// Toggle for collision detection and resolution
    pub enable_collisions: bool,
}

impl Params {
    /// Builder: set the gravitational constant
    pub fn with_g(mut self, g: f64) -> Self {
        self.g = g;
        self
    }

    /// Builder: set the coefficient of restitution
    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution;
        self
    }

    /// Builder: set the penetration slop
    pub fn with_penetration_slop(mut self, slop: f64) -> Self {
        self.penetration_slop = slop;
        self
    }

    /// Builder: set the position correction percent
    pub fn with_position_correction_percent(mut self, percent: f64) -> Self {
        self.position_correction_percent = percent;
        self
    }

    /// Builder: set the number of collision passes per tick
    pub fn with_collision_iterations(mut self, iterations: u32) -> Self {
        self.collision_iterations = iterations;
        self
    }

    /// Builder: enable or disable gravity
    pub fn with_gravity(mut self, enabled: bool) -> Self {
        self.enable_gravity = enabled;
        self
    }

    /// Builder: enable or disable collisions
    pub fn with_collisions(mut self, enabled: bool) -> Self {
        self.enable_collisions = enabled;
        self
    }

    /// Check the parameter ranges
    ///
    /// The engine does not call this on its own hot path; out-of-range values
    /// simply produce out-of-range physics.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.g >= 0.0 && self.g.is_finite()) {
            return Err(ParamsError::InvalidGravitationalConstant(self.g));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ParamsError::RestitutionOutOfRange(self.restitution));
        }
        if !(self.penetration_slop >= 0.0 && self.penetration_slop.is_finite()) {
            return Err(ParamsError::InvalidPenetrationSlop(self.penetration_slop));
        }
        if !(self.position_correction_percent > 0.0 && self.position_correction_percent <= 1.0) {
            return Err(ParamsError::CorrectionPercentOutOfRange(
                self.position_correction_percent,
            ));
        }
        Ok(())
    }
}

impl Default for Params {
    fn default() -> Self {
        Params {
            g: GRAVITATIONAL_CONSTANT,
            restitution: 0.5,
            penetration_slop: 1e-4,
            position_correction_percent: 0.8,
            collision_iterations: 1,
            enable_gravity: true,
            enable_collisions: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravitational_constant() {
        assert!(GRAVITATIONAL_CONSTANT > 6.6e-11);
        assert!(GRAVITATIONAL_CONSTANT < 6.7e-11);
    }

    #[test]
    fn test_defaults() {
        let params = Params::default();
        assert_eq!(params.g, GRAVITATIONAL_CONSTANT);
        assert_eq!(params.restitution, 0.5);
        assert_eq!(params.penetration_slop, 1e-4);
        assert_eq!(params.position_correction_percent, 0.8);
        assert_eq!(params.collision_iterations, 1);
        assert!(params.enable_gravity);
        assert!(params.enable_collisions);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let params = Params::default()
            .with_g(1.0)
            .with_restitution(0.0)
            .with_penetration_slop(0.0)
            .with_position_correction_percent(1.0)
            .with_collision_iterations(0)
            .with_gravity(false)
            .with_collisions(false);

        assert_eq!(params.g, 1.0);
        assert_eq!(params.restitution, 0.0);
        assert_eq!(params.penetration_slop, 0.0);
        assert_eq!(params.position_correction_percent, 1.0);
        assert_eq!(params.collision_iterations, 0);
        assert!(!params.enable_gravity);
        assert!(!params.enable_collisions);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_out_of_range() {
        assert_eq!(
            Params::default().with_g(-1.0).validate(),
            Err(ParamsError::InvalidGravitationalConstant(-1.0))
        );
        assert_eq!(
            Params::default().with_restitution(1.5).validate(),
            Err(ParamsError::RestitutionOutOfRange(1.5))
        );
        assert_eq!(
            Params::default().with_penetration_slop(-0.1).validate(),
            Err(ParamsError::InvalidPenetrationSlop(-0.1))
        );
        assert_eq!(
            Params::default().with_position_correction_percent(0.0).validate(),
            Err(ParamsError::CorrectionPercentOutOfRange(0.0))
        );
        assert!(Params::default().with_restitution(f64::NAN).validate().is_err());
    }
}
