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
//! Contact response: position correction and normal impulse

use super::detection::{contact, Contact};
use crate::world::{Body, Params};

/// Resolve a single pair in place
///
/// Returns true if the pair was overlapping and at least one body is
/// dynamic, i.e. if anything was resolved. Position correction is applied for
/// every resolved pair; the impulse only when the bodies approach each other
/// along the normal.
pub fn solve_pair(a: &mut Body, b: &mut Body, params: &Params) -> bool {
    let inv_mass_sum = a.inv_mass + b.inv_mass;
    if inv_mass_sum == 0.0 {
        return false; // Both static
    }

    let Some(contact) = contact(a, b) else {
        return false;
    };

    correct_positions(a, b, &contact, inv_mass_sum, params);
    apply_impulse(a, b, &contact, inv_mass_sum, params.restitution);

    log::trace!(
        "resolved contact: normal={:?} penetration={:.3e}",
        contact.normal,
        contact.penetration
    );
    true
}

/// Push the pair apart along the normal (Baumgarte-style bias)
///
/// Only the overlap beyond the slop is corrected, and only a fraction of it,
/// shared in proportion to inverse mass: the lighter body moves more, an
/// immovable one not at all.
fn correct_positions(
    a: &mut Body,
    b: &mut Body,
    contact: &Contact,
    inv_mass_sum: f64,
    params: &Params,
) {
    let correction = (contact.penetration - params.penetration_slop).max(0.0)
        * params.position_correction_percent;

    a.position -= contact.normal * (correction * a.inv_mass / inv_mass_sum);
    b.position += contact.normal * (correction * b.inv_mass / inv_mass_sum);
}

/// Exchange a normal impulse if the bodies are approaching
fn apply_impulse(
    a: &mut Body,
    b: &mut Body,
    contact: &Contact,
    inv_mass_sum: f64,
    restitution: f64,
) {
    // Speed of b relative to a along the normal
    let vn = (b.velocity - a.velocity).dot(contact.normal);
    if vn >= 0.0 {
        return; // Already separating
    }

    let j = -(1.0 + restitution) * vn / inv_mass_sum;
    let impulse = contact.normal * j;

    a.velocity -= impulse * a.inv_mass;
    b.velocity += impulse * b.inv_mass;
}
