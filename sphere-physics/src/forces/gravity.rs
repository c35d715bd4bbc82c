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
//! Pairwise Newtonian gravity
//!
//! Every point mass attracts every other point mass with a force proportional
//! to the product of their masses and inversely proportional to the square of
//! the distance between them:
//!
//! **F = G * (m₁ * m₂) / r²**
//!
//! # Softening
//!
//! To keep the force finite when two centres coincide, a softening length ε is
//! added to the squared distance:
//!
//! **F = G * (m₁ * m₂) / (r² + ε²)**
//!
//! Here ε is [`pair_epsilon`](super::pair_epsilon), a millionth of the sum of
//! the two radii. It is far below any separation two non-overlapping spheres
//! can have, so it only matters for deeply interpenetrating pairs.
//!
//! # Static bodies
//!
//! A pair in which either body is immovable contributes nothing to either
//! body. Static bodies neither attract nor are attracted.
//!
//! # References
//!
//! - Newton, I. (1687). "Philosophiæ Naturalis Principia Mathematica"
//! - Dehnen, W. (2001). "Towards optimal softening in three-dimensional N-body codes"

use super::{pair_epsilon, ForceBuffer};
use crate::vector::Vec3;
use crate::world::Body;

/// Gravitational force exerted on `a` by `b`
///
/// Returns `None` when either body is immovable. The force on `b` is the exact
/// negation of the returned vector.
pub fn pairwise_force(a: &Body, b: &Body, g: f64) -> Option<Vec3> {
    if a.is_immovable() || b.is_immovable() {
        return None;
    }

    let d = b.position - a.position;
    let r_squared = d.dot(d);

    let eps = pair_epsilon(a, b);
    let softened_r_squared = r_squared + eps * eps;

    let m1 = 1.0 / a.inv_mass;
    let m2 = 1.0 / b.inv_mass;

    // F_vec = G*m1*m2 * d / (r²+ε²)^(3/2); one sqrt, no second division
    let inv_r = 1.0 / softened_r_squared.sqrt();
    let inv_r3 = inv_r * inv_r * inv_r;

    Some(d * (g * m1 * m2 * inv_r3))
}

/// Accumulate gravity over every unique pair of bodies
///
/// `forces` must already be synced to `bodies.len()`. Returns the number of
/// pairs that contributed a force.
pub fn accumulate(bodies: &[Body], g: f64, forces: &mut ForceBuffer) -> usize {
    debug_assert_eq!(bodies.len(), forces.len());

    let mut pairs = 0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if let Some(f) = pairwise_force(&bodies[i], &bodies[j], g) {
                forces.add(i, f);
                forces.sub(j, f);
                pairs += 1;
            }
        }
    }
    pairs
}
