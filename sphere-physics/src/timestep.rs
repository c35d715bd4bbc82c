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
//! Fixed-timestep driver
//!
//! Render loops run at whatever rate the display allows, while the physics
//! must always advance by the same `dt`. [`FixedTimestep`] bridges the two with
//! an accumulator: real frame time goes in, whole ticks come out, and the
//! leftover fraction is exposed as [`FixedTimestep::alpha`] for interpolating
//! between each body's `prev_position` and `position`.
//!
//! After a stall (debugger, window drag, slow frame) the accumulator may hold
//! many ticks. Running them all would make the next frame even slower, so the
//! number of catch-up ticks per frame is capped and any excess whole ticks are
//! dropped.

use crate::world::World;

/// Default cap on ticks run by a single [`FixedTimestep::advance`] call
pub const DEFAULT_MAX_STEPS_PER_FRAME: u32 = 8;

/// Accumulator-based fixed-rate stepping
///
/// # Example
///
/// ```
/// use sphere_physics::{FixedTimestep, World};
///
/// let mut world = World::new();
/// let mut clock = FixedTimestep::new(1.0 / 60.0);
///
/// // A 25 ms frame holds one whole 16.7 ms tick
/// assert_eq!(clock.advance(&mut world, 0.025), 1);
/// assert!(clock.alpha() > 0.0 && clock.alpha() < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    timestep: f64,
    accumulator: f64,
    max_steps_per_frame: u32,
}

impl FixedTimestep {
    /// Create a driver with the given tick length in seconds
    ///
    /// # Panics
    ///
    /// Panics if timestep is non-positive, NaN, or infinite
    pub fn new(timestep: f64) -> Self {
        assert!(
            timestep > 0.0 && timestep.is_finite(),
            "Timestep must be positive and finite"
        );
        FixedTimestep {
            timestep,
            accumulator: 0.0,
            max_steps_per_frame: DEFAULT_MAX_STEPS_PER_FRAME,
        }
    }

    /// Builder: cap the number of ticks per [`advance`](Self::advance) call
    ///
    /// # Panics
    ///
    /// Panics if `max_steps` is zero
    pub fn with_max_steps_per_frame(mut self, max_steps: u32) -> Self {
        assert!(max_steps > 0, "At least one step per frame is required");
        self.max_steps_per_frame = max_steps;
        self
    }

    /// Tick length in seconds
    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Cap on ticks per frame
    pub fn max_steps_per_frame(&self) -> u32 {
        self.max_steps_per_frame
    }

    /// Unsimulated time carried over to the next frame, in seconds
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Fraction of a tick waiting in the accumulator, in [0, 1)
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.timestep
    }

    /// Feed one frame's worth of real time and run the ticks it covers
    ///
    /// Before each tick every body's `prev_position` is set to its current
    /// position. Returns the number of ticks run.
    pub fn advance(&mut self, world: &mut World, frame_time: f64) -> u32 {
        if !(frame_time >= 0.0 && frame_time.is_finite()) {
            log::warn!("ignoring invalid frame time {}", frame_time);
            return 0;
        }

        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= self.timestep && steps < self.max_steps_per_frame {
            Self::tick(world, self.timestep);
            self.accumulator -= self.timestep;
            steps += 1;
        }

        if self.accumulator >= self.timestep {
            let dropped = (self.accumulator / self.timestep).floor();
            log::warn!(
                "physics fell behind: dropping {} ticks after running {}",
                dropped,
                steps
            );
            // Exact remainder, never negative
            self.accumulator = self.accumulator.rem_euclid(self.timestep);
        }

        steps
    }

    /// Run a fixed duration headlessly, without the per-frame cap
    ///
    /// Steps `round(duration / timestep)` ticks and returns that count. The
    /// accumulator is left untouched. A non-finite duration runs nothing.
    pub fn run_for(&self, world: &mut World, duration: f64) -> u64 {
        if !duration.is_finite() {
            log::warn!("ignoring invalid run duration {}", duration);
            return 0;
        }
        let ticks = (duration / self.timestep).round().max(0.0) as u64;
        for _ in 0..ticks {
            Self::tick(world, self.timestep);
        }
        ticks
    }

    fn tick(world: &mut World, dt: f64) {
        for body in world.bodies_mut().iter_mut() {
            body.prev_position = body.position;
        }
        world.step(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vec3;
    use crate::world::{Body, Params};

    fn moving_world() -> World {
        let mut world = World::with_params(Params::default().with_gravity(false));
        world.add_body(Body::new().moving(Vec3::new(1.0, 0.0, 0.0)));
        world
    }

    #[test]
    #[should_panic(expected = "Timestep must be positive and finite")]
    fn test_zero_timestep_panics() {
        FixedTimestep::new(0.0);
    }

    #[test]
    #[should_panic(expected = "Timestep must be positive and finite")]
    fn test_nan_timestep_panics() {
        FixedTimestep::new(f64::NAN);
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut world = moving_world();
        let mut clock = FixedTimestep::new(0.1);

        assert_eq!(clock.advance(&mut world, 0.04), 0);
        assert_eq!(clock.advance(&mut world, 0.04), 0);
        assert_eq!(clock.advance(&mut world, 0.04), 1);
        assert_eq!(world.ticks(), 1);
        assert!((clock.alpha() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_seeds_prev_position_before_each_tick() {
        let mut world = moving_world();
        let mut clock = FixedTimestep::new(0.5);

        assert_eq!(clock.advance(&mut world, 1.0), 2);

        let body = world.bodies()[0];
        assert_eq!(body.prev_position, Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(body.position, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_catch_up_is_clamped() {
        let mut world = moving_world();
        let mut clock = FixedTimestep::new(0.01).with_max_steps_per_frame(4);

        // A 1 s stall would need 100 ticks
        assert_eq!(clock.advance(&mut world, 1.0 + 0.005), 4);
        assert_eq!(world.ticks(), 4);
        assert!(clock.accumulator() < clock.timestep());
        assert!(clock.accumulator() >= 0.0);

        // Next frame proceeds normally
        assert_eq!(clock.advance(&mut world, 0.01), 1);
    }

    #[test]
    fn test_dropped_backlog_keeps_alpha_in_range() {
        let mut world = moving_world();
        let mut clock = FixedTimestep::new(1.0 / 60.0).with_max_steps_per_frame(2);

        // Long stall whose leftover rounds to just below a whole tick count
        assert_eq!(clock.advance(&mut world, 98.43333333333332), 2);
        assert!(clock.accumulator() >= 0.0);
        assert!((0.0..1.0).contains(&clock.alpha()));

        let mut stall = 0.5;
        for _ in 0..200 {
            stall += 0.123;
            clock.advance(&mut world, stall);
            assert!((0.0..1.0).contains(&clock.alpha()), "alpha = {}", clock.alpha());
        }
    }

    #[test]
    fn test_invalid_frame_time_ignored() {
        let mut world = moving_world();
        let mut clock = FixedTimestep::new(0.1);

        assert_eq!(clock.advance(&mut world, -1.0), 0);
        assert_eq!(clock.advance(&mut world, f64::NAN), 0);
        assert_eq!(clock.accumulator(), 0.0);
    }

    #[test]
    fn test_run_for() {
        let mut world = moving_world();
        let clock = FixedTimestep::new(1.0 / 60.0);

        assert_eq!(clock.run_for(&mut world, 10.0), 600);
        assert_eq!(world.ticks(), 600);
        assert!((world.bodies()[0].position.x - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_run_for_non_finite_duration_runs_nothing() {
        let mut world = moving_world();
        let clock = FixedTimestep::new(1.0 / 60.0);

        assert_eq!(clock.run_for(&mut world, f64::INFINITY), 0);
        assert_eq!(clock.run_for(&mut world, f64::NAN), 0);
        assert_eq!(world.ticks(), 0);
    }
}
