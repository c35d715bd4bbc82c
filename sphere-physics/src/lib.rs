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
//! # Sphere Physics
//!
//! A fixed-timestep engine for spherical point masses under mutual gravity
//! and pairwise collisions.
//!
//! ## Features
//!
//! - **Newtonian Gravity**: Softened O(n²) pairwise attraction with exact
//!   action/reaction symmetry
//! - **Symplectic Integration**: Semi-implicit Euler on a fixed timestep
//! - **Sequential Impulses**: Iterative collision resolution with restitution
//!   and Baumgarte-style position correction
//! - **Fixed-Timestep Driver**: Accumulator with catch-up clamp and render
//!   interpolation
//! - **Parallelization**: Optional Rayon integration for stepping many
//!   independent worlds
//!
//! Each tick is deterministic: the same bodies and parameters always produce
//! the same result.
//!
//! ## Example
//!
//! ```rust
//! use sphere_physics::{Body, Params, Vec3, World};
//!
//! let params = Params::default().with_gravity(false);
//! let mut world = World::with_params(params);
//!
//! world.add_body(Body::immovable());
//! world.add_body(
//!     Body::new()
//!         .at(Vec3::new(10.0, 0.0, 0.0))
//!         .moving(Vec3::new(-1.0, 0.0, 0.0)),
//! );
//!
//! for _ in 0..600 {
//!     world.step(1.0 / 60.0);
//! }
//!
//! // The ball bounced off the static sphere and is heading back out
//! assert!(world.bodies()[1].velocity.x > 0.0);
//! ```

#![warn(missing_docs)]

/// 3D vector type
pub mod vector;

/// Bodies, parameters and the simulation world
pub mod world;

/// Force accumulation
pub mod forces;

/// Numerical integration and diagnostics
pub mod integration;

/// Collision detection and resolution
pub mod collision;

/// Fixed-timestep driver
pub mod timestep;

/// Stepping many independent worlds
pub mod batch;

/// Validation errors
pub mod error;

pub use error::{BodyError, Error, ParamsError, Result};
pub use timestep::FixedTimestep;
pub use vector::Vec3;
pub use world::{Body, Params, World, GRAVITATIONAL_CONSTANT};
