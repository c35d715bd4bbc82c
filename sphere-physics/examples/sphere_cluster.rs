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
//! Sphere Cluster Example
//!
//! A cloud of randomly placed spheres collapses under scaled gravity onto a
//! static anchor. The world is driven by [`FixedTimestep`] from a fixed
//! sequence of uneven frame times, the way a render loop would drive it.
//!
//! # Running
//!
//! ```bash
//! cargo run --example sphere_cluster --release
//!
//! # More spheres, another seed, debug logging
//! cargo run --example sphere_cluster --release -- --spheres 200 --seed 7 --verbose
//! ```

use simplelog::{Config, LevelFilter, SimpleLogger};
use sphere_physics::integration::{center_of_mass, total_kinetic_energy, total_momentum};
use sphere_physics::{Body, FixedTimestep, Params, Vec3, World};
use std::time::Instant;

/// Simple pseudo-random number generator for deterministic scenes
///
/// Linear congruential generator with Knuth's MMIX parameters.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // Upper 53 bits into [0, 1)
        (self.state >> 11) as f64 / 9007199254740992.0
    }

    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }
}

/// Simulation configuration
struct ClusterConfig {
    spheres: usize,
    seed: u64,
    frames: usize,
    verbose: bool,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        ClusterConfig {
            spheres: 64,
            seed: 12345,
            frames: 600,
            verbose: false,
        }
    }
}

fn build_cluster(config: &ClusterConfig) -> World {
    let mut rng = SimpleRng::new(config.seed);
    let params = Params::default().with_g(5.0).with_collision_iterations(4);
    let mut world = World::with_params(params);

    world.add_body(Body::immovable().with_radius(3.0));
    for _ in 0..config.spheres {
        let position = Vec3::new(rng.range(-20.0, 20.0), rng.range(-20.0, 20.0), rng.range(-20.0, 20.0));
        let velocity = Vec3::new(rng.range(-0.5, 0.5), rng.range(-0.5, 0.5), rng.range(-0.5, 0.5));
        let body = Body::with_mass(rng.range(1.0, 10.0))
            .at(position)
            .moving(velocity)
            .with_radius(rng.range(0.5, 1.5));

        if let Err(e) = world.try_add_body(body) {
            eprintln!("Warning: Skipping sphere: {}", e);
        }
    }
    world
}

/// Total overlap depth across all pairs
fn total_penetration(bodies: &[Body]) -> f64 {
    let mut total = 0.0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let distance = (bodies[j].position - bodies[i].position).magnitude();
            total += (bodies[i].radius + bodies[j].radius - distance).max(0.0);
        }
    }
    total
}

fn print_state(world: &World, frame: usize) {
    let bodies = world.bodies();
    let cm = center_of_mass(bodies).unwrap_or_default();
    let p = total_momentum(bodies);

    println!("\nFrame {} (tick {}, {:.2} s)", frame, world.ticks(), world.elapsed());
    println!("  Kinetic Energy: {:.3} J", total_kinetic_energy(bodies));
    println!("  Momentum:       ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
    println!("  Center of Mass: ({:.2}, {:.2}, {:.2}) m", cm.x, cm.y, cm.z);
    println!("  Contacts:       {}", world.last_contact_count());
    println!("  Overlap:        {:.4} m", total_penetration(bodies));
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut config = ClusterConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--spheres" if i + 1 < args.len() => {
                match args[i + 1].parse::<usize>() {
                    Ok(value) => config.spheres = value,
                    Err(_) => eprintln!("Warning: Invalid spheres '{}', using {}", args[i + 1], config.spheres),
                }
                i += 2;
            }
            "--seed" if i + 1 < args.len() => {
                match args[i + 1].parse::<u64>() {
                    Ok(value) => config.seed = value,
                    Err(_) => eprintln!("Warning: Invalid seed '{}', using {}", args[i + 1], config.seed),
                }
                i += 2;
            }
            "--frames" if i + 1 < args.len() => {
                match args[i + 1].parse::<usize>() {
                    Ok(value) => config.frames = value,
                    Err(_) => eprintln!("Warning: Invalid frames '{}', using {}", args[i + 1], config.frames),
                }
                i += 2;
            }
            "--verbose" => {
                config.verbose = true;
                i += 1;
            }
            _ => {
                i += 1;
            }
        }
    }

    let level = if config.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let _ = SimpleLogger::init(level, Config::default());

    println!("Sphere Cluster");
    println!("  Spheres: {}", config.spheres);
    println!("  Seed: {}", config.seed);
    println!("  Frames: {}", config.frames);

    let mut world = build_cluster(&config);
    let mut clock = FixedTimestep::new(1.0 / 60.0);

    // Uneven frame times, including one stall the driver has to clamp
    let frame_times = [0.016, 0.017, 0.015, 0.033, 0.008, 0.016, 0.25];

    print_state(&world, 0);
    let start = Instant::now();
    for frame in 1..=config.frames {
        clock.advance(&mut world, frame_times[frame % frame_times.len()]);

        if frame % 100 == 0 {
            print_state(&world, frame);
        }
    }
    let wall = start.elapsed();

    println!();
    println!("Simulated {} ticks in {:.2?}", world.ticks(), wall);
    println!("Render interpolation alpha: {:.3}", clock.alpha());
}
