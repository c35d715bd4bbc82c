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
//! Collision detection and resolution
//!
//! Contacts are resolved with sequential impulses: a fixed number of global
//! passes, each scanning every unique pair in index order and fixing any
//! overlapping pair in place. Resolving pair (i, j) moves both bodies, and a
//! later pair sharing one of them sees the updated state within the same
//! pass. That is what lets stacks and clusters of contacts converge over a
//! few cheap passes instead of needing a simultaneous solve.
//!
//! # Algorithm
//!
//! For each overlapping pair with at least one dynamic body:
//!
//! 1. Contact normal `n` from A to B (+X if the centres coincide)
//! 2. Penetration `pen = rA + rB - |d|`
//! 3. Position correction `max(0, pen - slop) * percent`, split by inverse mass
//! 4. If approaching (`vn < 0`), normal impulse `j = -(1 + e) * vn / (wA + wB)`
//!
//! There is no broad phase: every pass is O(n²). The engine targets small
//! body counts.

mod detection;
mod response;

pub use detection::{contact, is_colliding, Contact};
pub use response::solve_pair;

use crate::world::{Body, Params};

/// Run `params.collision_iterations` resolution passes over all pairs
///
/// Returns the total number of pair resolutions performed, summed over all
/// passes. Does not check `params.enable_collisions`; the caller decides
/// whether to run the pass at all.
pub fn resolve(bodies: &mut [Body], params: &Params) -> usize {
    let mut resolved = 0;
    for _ in 0..params.collision_iterations {
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (a, b) = pair_mut(bodies, i, j);
                if solve_pair(a, b, params) {
                    resolved += 1;
                }
            }
        }
    }
    resolved
}

/// Borrow two distinct bodies mutably, `i < j`
#[inline]
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
