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
//! Binary Orbit Example
//!
//! Two dynamic spheres on a circular mutual orbit with a scaled
//! gravitational constant. Prints the separation, kinetic energy and total
//! momentum once per simulated second so drift is easy to spot.
//!
//! # Running
//!
//! ```bash
//! cargo run --example binary_orbit --release
//!
//! # Longer run with a coarser timestep
//! cargo run --example binary_orbit --release -- --duration 120 --timestep 0.05
//! ```

use simplelog::{Config, LevelFilter, SimpleLogger};
use sphere_physics::integration::{center_of_mass, total_kinetic_energy, total_momentum};
use sphere_physics::{Body, FixedTimestep, Params, Vec3, World};

/// Orbit configuration
struct OrbitConfig {
    g: f64,
    primary_mass: f64,
    secondary_mass: f64,
    separation: f64, // meters
    timestep: f64,   // seconds
    duration: f64,   // seconds
}

impl Default for OrbitConfig {
    fn default() -> Self {
        OrbitConfig {
            g: 1.0,
            primary_mass: 30.0,
            secondary_mass: 10.0,
            separation: 20.0,
            timestep: 1.0 / 60.0,
            duration: 60.0,
        }
    }
}

fn parse_f64(args: &[String], i: usize, name: &str, current: f64) -> f64 {
    match args.get(i + 1).map(|s| s.parse::<f64>()) {
        Some(Ok(value)) if value.is_finite() && value > 0.0 => value,
        _ => {
            eprintln!("Warning: Invalid {}, using {}", name, current);
            current
        }
    }
}

fn build_world(config: &OrbitConfig) -> World {
    let params = Params::default().with_g(config.g).with_collisions(false);
    let mut world = World::with_params(params);

    let total = config.primary_mass + config.secondary_mass;
    // Place the barycentre at the origin
    let r1 = config.separation * config.secondary_mass / total;
    let r2 = config.separation * config.primary_mass / total;
    let relative_speed = (config.g * total / config.separation).sqrt();
    let v1 = relative_speed * config.secondary_mass / total;
    let v2 = relative_speed * config.primary_mass / total;

    world.add_body(
        Body::with_mass(config.primary_mass)
            .at(Vec3::new(-r1, 0.0, 0.0))
            .moving(Vec3::new(0.0, -v1, 0.0))
            .with_radius(2.0),
    );
    world.add_body(
        Body::with_mass(config.secondary_mass)
            .at(Vec3::new(r2, 0.0, 0.0))
            .moving(Vec3::new(0.0, v2, 0.0)),
    );
    world
}

fn main() {
    let _ = SimpleLogger::init(LevelFilter::Info, Config::default());

    let args: Vec<String> = std::env::args().collect();
    let mut config = OrbitConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--duration" => {
                config.duration = parse_f64(&args, i, "duration", config.duration);
                i += 2;
            }
            "--timestep" => {
                config.timestep = parse_f64(&args, i, "timestep", config.timestep);
                i += 2;
            }
            "--separation" => {
                config.separation = parse_f64(&args, i, "separation", config.separation);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    println!("Binary Orbit");
    println!("  G: {}", config.g);
    println!("  Masses: {} kg, {} kg", config.primary_mass, config.secondary_mass);
    println!("  Separation: {} m", config.separation);
    println!("  Timestep: {:.4} s", config.timestep);
    println!("  Duration: {:.1} s", config.duration);
    println!();

    let mut world = build_world(&config);
    let clock = FixedTimestep::new(config.timestep);
    let initial_energy = total_kinetic_energy(world.bodies());
    let initial_momentum = total_momentum(world.bodies());

    let seconds = config.duration.floor() as u64;
    for second in 1..=seconds {
        clock.run_for(&mut world, 1.0);

        let bodies = world.bodies();
        let separation = (bodies[1].position - bodies[0].position).magnitude();
        let energy = total_kinetic_energy(bodies);
        let drift = (total_momentum(bodies) - initial_momentum).magnitude();
        let barycentre = center_of_mass(bodies).unwrap_or_default();

        println!(
            "t={:>4} s  separation={:8.4} m  KE={:9.4} J ({:+.2e})  |dp|={:.2e}  cm=({:.2e}, {:.2e})",
            second,
            separation,
            energy,
            (energy - initial_energy) / initial_energy,
            drift,
            barycentre.x,
            barycentre.y
        );
    }
}
