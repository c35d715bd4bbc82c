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
//! Simulated sphere

use crate::error::BodyError;
use crate::vector::Vec3;

/// A spherical point mass
///
/// Mass is stored as its inverse so that `inv_mass == 0.0` can stand for an
/// immovable body (infinite mass) without special cases in the solver.
///
/// # Examples
///
/// ```
/// use sphere_physics::{Body, Vec3};
///
/// let ball = Body::with_mass(2.0)
///     .at(Vec3::new(10.0, 0.0, 0.0))
///     .moving(Vec3::new(-1.0, 0.0, 0.0));
/// assert_eq!(ball.inv_mass, 0.5);
///
/// let wall = Body::immovable().with_radius(5.0);
/// assert!(wall.is_immovable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    /// Centre of the sphere in meters
    pub position: Vec3,
    /// Velocity in meters per second
    pub velocity: Vec3,
    /// Inverse mass in 1/kg (0 for immovable bodies)
    pub inv_mass: f64,
    /// Sphere radius in meters
    pub radius: f64,
    /// Position at the start of the most recent tick
    ///
    /// Written by the driver for render interpolation. The engine never
    /// reads or writes it.
    pub prev_position: Vec3,
}

impl Body {
    /// Radius given to bodies unless set otherwise
    pub const DEFAULT_RADIUS: f64 = 1.0;

    /// Create a 1 kg dynamic body at rest at the origin
    pub fn new() -> Self {
        Body {
            position: Vec3::zero(),
            velocity: Vec3::zero(),
            inv_mass: 1.0,
            radius: Self::DEFAULT_RADIUS,
            prev_position: Vec3::zero(),
        }
    }

    /// Create an immovable body (treated as infinite mass)
    pub fn immovable() -> Self {
        Body {
            inv_mass: 0.0,
            ..Body::new()
        }
    }

    /// Create a dynamic body with the given mass in kilograms
    ///
    /// # Panics
    ///
    /// Panics if the mass is not positive and finite. Use [`Body::immovable`]
    /// for static bodies.
    pub fn with_mass(mass: f64) -> Self {
        assert!(mass > 0.0 && mass.is_finite(), "Mass must be positive and finite");
        Body {
            inv_mass: 1.0 / mass,
            ..Body::new()
        }
    }

    /// Builder: set position (also resets `prev_position`)
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self.prev_position = position;
        self
    }

    /// Builder: set velocity
    pub fn moving(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Builder: set radius
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Builder: set inverse mass directly
    pub fn with_inv_mass(mut self, inv_mass: f64) -> Self {
        self.inv_mass = inv_mass;
        self
    }

    /// Check if this body is immovable (`inv_mass == 0`)
    #[inline]
    pub fn is_immovable(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// Mass in kilograms, `f64::INFINITY` for immovable bodies
    pub fn mass(&self) -> f64 {
        if self.is_immovable() {
            f64::INFINITY
        } else {
            1.0 / self.inv_mass
        }
    }

    /// Position blended between the last two ticks
    ///
    /// `alpha` is the fraction of a tick left over in the driver's
    /// accumulator, see [`FixedTimestep::alpha`](crate::FixedTimestep::alpha).
    pub fn interpolated_position(&self, alpha: f64) -> Vec3 {
        self.prev_position + (self.position - self.prev_position) * alpha
    }

    /// Check the invariants the solver assumes
    pub fn validate(&self) -> Result<(), BodyError> {
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(BodyError::NonPositiveRadius(self.radius));
        }
        if !(self.inv_mass >= 0.0 && self.inv_mass.is_finite()) {
            return Err(BodyError::InvalidInverseMass(self.inv_mass));
        }
        if !self.position.is_valid() || !self.velocity.is_valid() {
            return Err(BodyError::NonFiniteState);
        }
        Ok(())
    }
}

impl Default for Body {
    fn default() -> Self {
        Body::new()
    }
}
