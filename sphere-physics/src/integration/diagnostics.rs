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
//! Energy and momentum measurements
//!
//! Immovable bodies have infinite mass, so they are left out of every sum
//! here. Their (dead) velocity would otherwise make the totals infinite.

use crate::vector::Vec3;
use crate::world::Body;

/// Calculate kinetic energy for a single body
///
/// KE = 0.5 * m * v²
pub fn kinetic_energy(body: &Body) -> f64 {
    if body.is_immovable() {
        return 0.0;
    }
    0.5 * body.mass() * body.velocity.magnitude_squared()
}

/// Calculate total kinetic energy of a set of bodies
pub fn total_kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(kinetic_energy).sum()
}

/// Total linear momentum of the dynamic bodies
pub fn total_momentum(bodies: &[Body]) -> Vec3 {
    bodies
        .iter()
        .filter(|b| !b.is_immovable())
        .fold(Vec3::zero(), |p, b| p + b.velocity * b.mass())
}

/// Mass-weighted centre of the dynamic bodies
///
/// Returns `None` if there are no dynamic bodies.
pub fn center_of_mass(bodies: &[Body]) -> Option<Vec3> {
    let mut total_mass = 0.0;
    let mut weighted = Vec3::zero();

    for body in bodies.iter().filter(|b| !b.is_immovable()) {
        let m = body.mass();
        total_mass += m;
        weighted += body.position * m;
    }

    if total_mass > 0.0 {
        Some(weighted / total_mass)
    } else {
        None
    }
}
