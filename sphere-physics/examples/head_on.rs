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
//! Head-On Bounce Example
//!
//! A unit sphere travels towards a static sphere at the origin, bounces off
//! it with the default restitution and heads back out. Gravity is on but has
//! no effect since it skips any pair involving a static body.
//!
//! With `--original` it instead runs the two-body scene the engine was first
//! exercised with: two dynamic spheres ten meters apart under the real
//! gravitational constant, one drifting sideways. They never touch, and the
//! attraction is far too weak to bend the drift visibly in ten seconds.
//!
//! # Running
//!
//! ```bash
//! cargo run --example head_on
//!
//! # Perfectly elastic bounce, printed every 30 ticks
//! cargo run --example head_on -- --restitution 1.0 --every 30
//!
//! # Two dynamic spheres, default parameters
//! cargo run --example head_on -- --original
//! ```

use simplelog::{Config, LevelFilter, SimpleLogger};
use sphere_physics::{Body, Params, Vec3, World};

const TICKS: u32 = 600;
const DT: f64 = 1.0 / 60.0;

fn main() {
    let _ = SimpleLogger::init(LevelFilter::Info, Config::default());

    let args: Vec<String> = std::env::args().collect();
    let mut restitution = Params::default().restitution;
    let mut every = 60u32;
    let mut original = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--restitution" if i + 1 < args.len() => {
                match args[i + 1].parse::<f64>() {
                    Ok(value) => restitution = value,
                    Err(_) => eprintln!("Warning: Invalid restitution '{}', using {}", args[i + 1], restitution),
                }
                i += 2;
            }
            "--every" if i + 1 < args.len() => {
                match args[i + 1].parse::<u32>() {
                    Ok(value) if value > 0 => every = value,
                    _ => eprintln!("Warning: Invalid interval '{}', using {}", args[i + 1], every),
                }
                i += 2;
            }
            "--original" => {
                original = true;
                i += 1;
            }
            other => {
                eprintln!("Warning: Ignoring argument '{}'", other);
                i += 1;
            }
        }
    }

    let params = Params::default().with_restitution(restitution);
    if let Err(e) = params.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let mut world = World::with_params(params);
    if original {
        world.add_body(Body::new());
        world.add_body(
            Body::new()
                .at(Vec3::new(10.0, 0.0, 0.0))
                .moving(Vec3::new(0.0, 1.0, 0.0))
                .with_inv_mass(2.0)
                .with_radius(2.0),
        );
    } else {
        world.add_body(Body::immovable());
        world.add_body(
            Body::new()
                .at(Vec3::new(10.0, 0.0, 0.0))
                .moving(Vec3::new(-1.0, 0.0, 0.0)),
        );
    }

    println!("tick,time_s,x_m,vx_m_s,contacts");
    for tick in 1..=TICKS {
        world.step(DT);

        if tick % every == 0 || world.last_contact_count() > 0 {
            let ball = world.bodies()[1];
            println!(
                "{},{:.3},{:.4},{:.4},{}",
                tick,
                world.elapsed(),
                ball.position.x,
                ball.velocity.x,
                world.last_contact_count()
            );
        }
    }

    let ball = world.bodies()[1];
    println!();
    println!("Final position: ({:.3}, {:.3}, {:.3}) m", ball.position.x, ball.position.y, ball.position.z);
    println!("Final velocity: ({:.3}, {:.3}, {:.3}) m/s", ball.velocity.x, ball.velocity.y, ball.velocity.z);
}
