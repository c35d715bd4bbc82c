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
//! Numerical integration
//!
//! Bodies are advanced with semi-implicit (symplectic) Euler:
//!
//! ```text
//! a = F * inv_mass
//! v(t + dt) = v(t) + a * dt
//! x(t + dt) = x(t) + v(t + dt) * dt
//! ```
//!
//! The velocity is updated first and the *new* velocity moves the position.
//! This ordering is what makes the scheme symplectic: orbital and oscillatory
//! motion keeps a bounded energy error instead of spiralling outwards as it
//! does with explicit Euler.
//!
//! # Timestep Guidelines
//!
//! - The engine does not validate `dt`; non-positive or non-finite values
//!   propagate into body state
//! - Recommended: dt = 1/60 (60 Hz), driven by [`FixedTimestep`](crate::FixedTimestep)
//! - Fast or tightly bound systems need smaller timesteps; there is no
//!   continuous collision detection, so spheres may tunnel if they travel more
//!   than a radius per tick
//!
//! The [`diagnostics`] submodule measures energy and momentum for tests and
//! demos.

use crate::forces::ForceBuffer;
use crate::world::Body;

pub mod diagnostics;

pub use diagnostics::{
    center_of_mass, kinetic_energy, total_kinetic_energy, total_momentum,
};

/// Advance every dynamic body by `dt` using the accumulated forces
///
/// Immovable bodies are skipped entirely: neither their velocity nor their
/// position changes, even if a velocity was assigned to them. Returns the
/// number of bodies updated.
///
/// `forces` must be index-aligned with `bodies`.
pub fn semi_implicit_euler(bodies: &mut [Body], forces: &ForceBuffer, dt: f64) -> usize {
    debug_assert_eq!(bodies.len(), forces.len());

    let mut updated = 0;
    for (body, force) in bodies.iter_mut().zip(forces.as_slice()) {
        if body.is_immovable() {
            continue;
        }
        let acceleration = *force * body.inv_mass;
        body.velocity += acceleration * dt;
        body.position += body.velocity * dt;
        updated += 1;
    }
    updated
}
