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
//! Simulation world
//!
//! The [`World`] owns the bodies, the simulation constants and the per-tick
//! force scratch buffer. One call to [`World::step`] runs the whole pipeline:
//!
//! ```text
//! sync scratch -> reset forces -> gravity -> integrate -> collisions (N passes)
//! ```
//!
//! Bodies live in a flat `Vec` and are addressed by index; the force buffer is
//! a parallel sequence of the same length. Index order is the iteration order
//! of every pairwise pass, so keeping it stable keeps runs reproducible.

mod body;
mod params;

pub use body::Body;
pub use params::{Params, GRAVITATIONAL_CONSTANT};

use crate::collision;
use crate::error::Result;
use crate::forces::{gravity, ForceBuffer};
use crate::integration;
use crate::vector::Vec3;

/// The main simulation container
///
/// # Example
///
/// ```
/// use sphere_physics::{Body, Params, Vec3, World};
///
/// let mut world = World::with_params(Params::default().with_gravity(false));
/// world.add_body(Body::immovable());
/// world.add_body(
///     Body::new()
///         .at(Vec3::new(10.0, 0.0, 0.0))
///         .moving(Vec3::new(-1.0, 0.0, 0.0)),
/// );
///
/// world.step(1.0 / 60.0);
/// assert!(world.bodies()[1].position.x < 10.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct World {
    params: Params,
    bodies: Vec<Body>,
    forces: ForceBuffer,
    ticks: u64,
    elapsed: f64,
    last_contact_count: usize,
}

impl World {
    /// Create an empty world with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty world with the given parameters
    pub fn with_params(params: Params) -> Self {
        Self::from_parts(Vec::new(), params)
    }

    /// Create a world from an initial body list with default parameters
    pub fn with_bodies(bodies: Vec<Body>) -> Self {
        Self::from_parts(bodies, Params::default())
    }

    /// Create a world from an initial body list and parameters
    ///
    /// Parameters are not rejected if out of range; a warning is logged.
    pub fn from_parts(bodies: Vec<Body>, params: Params) -> Self {
        if let Err(e) = params.validate() {
            log::warn!("world created with suspicious parameters: {}", e);
        }
        World {
            params,
            bodies,
            ..Self::default()
        }
    }

    /// Advance the simulation by exactly `dt` seconds
    ///
    /// `dt` should be positive and finite. It is not checked; other values
    /// produce meaningless (possibly NaN) state rather than an error.
    pub fn step(&mut self, dt: f64) {
        log::trace!("tick {}: {} bodies, dt={}", self.ticks, self.bodies.len(), dt);

        self.forces.sync(self.bodies.len());
        self.forces.reset();
        self.compute_forces();
        integration::semi_implicit_euler(&mut self.bodies, &self.forces, dt);
        self.last_contact_count = self.collide();

        self.ticks += 1;
        self.elapsed += dt;
    }

    fn compute_forces(&mut self) {
        if self.params.enable_gravity {
            gravity::accumulate(&self.bodies, self.params.g, &mut self.forces);
        }
    }

    fn collide(&mut self) -> usize {
        if !self.params.enable_collisions {
            return 0;
        }
        collision::resolve(&mut self.bodies, &self.params)
    }

    /// Append a body
    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
        log::debug!("added body #{} ({} total)", self.bodies.len() - 1, self.bodies.len());
    }

    /// Append a body after checking its invariants
    pub fn try_add_body(&mut self, body: Body) -> Result<()> {
        body.validate()?;
        self.add_body(body);
        Ok(())
    }

    /// Remove every body
    ///
    /// The tick counter and elapsed time are kept.
    pub fn clear(&mut self) {
        log::debug!("clearing {} bodies", self.bodies.len());
        self.bodies.clear();
        self.forces.clear();
        self.last_contact_count = 0;
    }

    /// The body collection
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// The live body collection
    ///
    /// Bodies may be edited, pushed or removed between ticks; the force
    /// buffer follows the length on the next step.
    pub fn bodies_mut(&mut self) -> &mut Vec<Body> {
        &mut self.bodies
    }

    /// Simulation parameters
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Mutable simulation parameters, read at the next step
    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    /// Forces accumulated during the last tick, index-aligned with bodies
    ///
    /// Scratch data: only meaningful right after a step and before the body
    /// list changes.
    pub fn forces(&self) -> &[Vec3] {
        self.forces.as_slice()
    }

    /// Number of steps taken
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated time in seconds, the sum of every `dt` stepped
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Pair resolutions performed during the last tick
    pub fn last_contact_count(&self) -> usize {
        self.last_contact_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BodyError, Error};

    #[test]
    fn test_world_creation() {
        let world = World::new();
        assert!(world.bodies().is_empty());
        assert_eq!(*world.params(), Params::default());
        assert_eq!(world.ticks(), 0);
    }

    #[test]
    fn test_constructors() {
        let params = Params::default().with_restitution(1.0);
        let bodies = vec![Body::new(), Body::immovable()];

        assert_eq!(World::with_params(params).params().restitution, 1.0);
        assert_eq!(World::with_bodies(bodies.clone()).bodies().len(), 2);

        let world = World::from_parts(bodies, params);
        assert_eq!(world.bodies().len(), 2);
        assert_eq!(world.params().restitution, 1.0);
    }

    #[test]
    fn test_force_buffer_follows_body_count() {
        let mut world = World::new();
        world.add_body(Body::new());
        world.step(0.01);
        assert_eq!(world.forces().len(), 1);

        world.bodies_mut().push(Body::new().at(Vec3::new(5.0, 0.0, 0.0)));
        world.step(0.01);
        assert_eq!(world.forces().len(), 2);

        world.bodies_mut().truncate(1);
        world.step(0.01);
        assert_eq!(world.forces().len(), 1);
    }

    #[test]
    fn test_forces_reset_each_tick() {
        let mut world = World::with_params(Params::default().with_g(1.0).with_collisions(false));
        world.add_body(Body::new());
        world.add_body(Body::new().at(Vec3::new(10.0, 0.0, 0.0)));

        world.step(0.01);
        let first = world.forces()[0];

        world.params_mut().enable_gravity = false;
        world.step(0.01);

        assert!(first.x > 0.0);
        assert_eq!(world.forces()[0], Vec3::zero());
    }

    #[test]
    fn test_clear() {
        let mut world = World::with_bodies(vec![Body::new(), Body::new()]);
        world.step(0.5);
        world.clear();

        assert!(world.bodies().is_empty());
        assert!(world.forces().is_empty());
        assert_eq!(world.ticks(), 1);

        // Stepping an empty world is fine
        world.step(0.5);
        assert_eq!(world.ticks(), 2);
        assert_eq!(world.elapsed(), 1.0);
    }

    #[test]
    fn test_try_add_body_validates() {
        let mut world = World::new();
        assert!(world.try_add_body(Body::new()).is_ok());
        assert_eq!(
            world.try_add_body(Body::new().with_radius(-1.0)),
            Err(Error::Body(BodyError::NonPositiveRadius(-1.0)))
        );
        assert_eq!(world.bodies().len(), 1);
    }

    #[test]
    fn test_contact_count_recorded() {
        let mut world = World::with_params(Params::default().with_gravity(false));
        world.add_body(Body::new());
        world.add_body(Body::new().at(Vec3::new(1.5, 0.0, 0.0)));

        world.step(0.01);
        assert_eq!(world.last_contact_count(), 1);

        world.params_mut().enable_collisions = false;
        world.step(0.01);
        assert_eq!(world.last_contact_count(), 0);
    }

    #[test]
    fn test_prev_position_not_touched() {
        let mut world = World::with_params(Params::default().with_gravity(false));
        world.add_body(Body::new().moving(Vec3::new(1.0, 0.0, 0.0)));
        world.bodies_mut()[0].prev_position = Vec3::new(-7.0, 0.0, 0.0);

        world.step(1.0);

        assert_eq!(world.bodies()[0].position, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(world.bodies()[0].prev_position, Vec3::new(-7.0, 0.0, 0.0));
    }
}
