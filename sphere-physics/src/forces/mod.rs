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
//! Force accumulation
//!
//! Forces are gathered into a [`ForceBuffer`]: one vector per body, addressed
//! by the body's index in the world. The buffer is scratch. It is resized
//! when the body count changes and zeroed before every force pass, so its
//! contents only mean something between the force pass and integration of
//! the same tick.
//!
//! Gravity is currently the only force source, see [`gravity`].

use crate::vector::Vec3;
use crate::world::Body;

pub mod gravity;

/// Scale applied to the sum of two radii to get the pair epsilon
pub const EPSILON_SCALE: f64 = 1e-6;

/// Small length used for a pair of bodies
///
/// Serves as the gravity softening length and as the distance below which the
/// collision normal is considered undefined. It scales with the bodies so it
/// stays meaningful for both millimetre and planet-sized spheres.
#[inline]
pub fn pair_epsilon(a: &Body, b: &Body) -> f64 {
    (a.radius + b.radius) * EPSILON_SCALE
}

/// Per-body net force for the current tick
///
/// # Example
///
/// ```
/// use sphere_physics::forces::ForceBuffer;
/// use sphere_physics::Vec3;
///
/// let mut forces = ForceBuffer::new();
/// forces.sync(2);
/// forces.add(0, Vec3::new(1.0, 0.0, 0.0));
/// assert_eq!(forces.get(0), Vec3::new(1.0, 0.0, 0.0));
///
/// forces.reset();
/// assert_eq!(forces.get(0), Vec3::zero());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ForceBuffer {
    forces: Vec<Vec3>,
}

impl ForceBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        ForceBuffer { forces: Vec::new() }
    }

    /// Match the buffer length to the body count
    ///
    /// Returns true if the buffer had to be resized.
    pub fn sync(&mut self, body_count: usize) -> bool {
        if self.forces.len() == body_count {
            return false;
        }
        log::debug!(
            "resizing force buffer from {} to {} bodies",
            self.forces.len(),
            body_count
        );
        self.forces.resize(body_count, Vec3::zero());
        true
    }

    /// Zero every accumulated force
    pub fn reset(&mut self) {
        self.forces.fill(Vec3::zero());
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.forces.clear();
    }

    /// Add a force to the body at `index`
    #[inline]
    pub fn add(&mut self, index: usize, force: Vec3) {
        self.forces[index] += force;
    }

    /// Subtract a force from the body at `index`
    #[inline]
    pub fn sub(&mut self, index: usize, force: Vec3) {
        self.forces[index] -= force;
    }

    /// Net force on the body at `index`
    #[inline]
    pub fn get(&self, index: usize) -> Vec3 {
        self.forces[index]
    }

    /// All forces, index-aligned with the world's bodies
    pub fn as_slice(&self) -> &[Vec3] {
        &self.forces
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.forces.len()
    }

    /// Check if the buffer has no entries
    pub fn is_empty(&self) -> bool {
        self.forces.is_empty()
    }
}
