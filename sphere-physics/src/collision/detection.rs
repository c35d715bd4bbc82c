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
//! Sphere-sphere narrow phase

use crate::forces::pair_epsilon;
use crate::vector::Vec3;
use crate::world::Body;

/// Geometry of an overlapping pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from the first body towards the second
    pub normal: Vec3,
    /// Overlap depth in meters (sum of radii minus centre distance)
    pub penetration: f64,
}

/// Check whether two spheres touch or overlap
///
/// Touching spheres (distance exactly equal to the sum of radii) count as
/// colliding. Compares squared lengths, no square root.
#[inline]
pub fn is_colliding(a: &Body, b: &Body) -> bool {
    let d = b.position - a.position;
    let min_distance = a.radius + b.radius;
    d.dot(d) <= min_distance * min_distance
}

/// Compute the contact between two spheres, if they collide
///
/// When the centres (nearly) coincide the direction between them is
/// meaningless; the normal then falls back to +X so the pair still separates
/// along a stable axis.
pub fn contact(a: &Body, b: &Body) -> Option<Contact> {
    if !is_colliding(a, b) {
        return None;
    }

    let d = b.position - a.position;
    let dist = d.magnitude();

    let normal = if dist < pair_epsilon(a, b) {
        Vec3::x_axis()
    } else {
        d / dist
    };

    Some(Contact {
        normal,
        penetration: (a.radius + b.radius) - dist,
    })
}
