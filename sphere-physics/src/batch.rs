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
//! Stepping many independent worlds
//!
//! A single [`World`] is always stepped on one thread: its passes depend on
//! in-place, index-ordered updates. Parameter sweeps and ensembles, however,
//! are made of worlds that never interact, so those can run side by side.
//! With the `parallel` feature each world becomes one Rayon task; without it
//! they are stepped in sequence. Results are bit-identical either way.

use crate::world::World;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Advance every world by `ticks` steps of `dt`
///
/// Returns the number of worlds stepped.
///
/// # Example
///
/// ```
/// use sphere_physics::{batch, Body, Params, Vec3, World};
///
/// let mut worlds: Vec<World> = [0.0, 0.5, 1.0]
///     .iter()
///     .map(|&e| {
///         let mut world = World::with_params(Params::default().with_restitution(e));
///         world.add_body(Body::new().moving(Vec3::new(1.0, 0.0, 0.0)));
///         world
///     })
///     .collect();
///
/// assert_eq!(batch::step_all(&mut worlds, 1.0 / 60.0, 60), 3);
/// assert!(worlds.iter().all(|w| w.ticks() == 60));
/// ```
pub fn step_all(worlds: &mut [World], dt: f64, ticks: u64) -> usize {
    log::debug!("stepping {} worlds for {} ticks", worlds.len(), ticks);

    #[cfg(feature = "parallel")]
    {
        step_all_parallel(worlds, dt, ticks)
    }

    #[cfg(not(feature = "parallel"))]
    {
        step_all_sequential(worlds, dt, ticks)
    }
}

#[cfg(feature = "parallel")]
fn step_all_parallel(worlds: &mut [World], dt: f64, ticks: u64) -> usize {
    worlds.par_iter_mut().for_each(|world| run(world, dt, ticks));
    worlds.len()
}

#[cfg(not(feature = "parallel"))]
fn step_all_sequential(worlds: &mut [World], dt: f64, ticks: u64) -> usize {
    for world in worlds.iter_mut() {
        run(world, dt, ticks);
    }
    worlds.len()
}

fn run(world: &mut World, dt: f64, ticks: u64) {
    for _ in 0..ticks {
        world.step(dt);
    }
}
