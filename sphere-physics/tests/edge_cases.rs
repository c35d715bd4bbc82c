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
//! Edge case tests for the world step
//!
//! Tests degenerate body sets, static bodies and unusual parameters

use sphere_physics::{Body, Params, Vec3, World};

const DT: f64 = 1.0 / 60.0;

#[test]
fn test_empty_world_steps() {
    let mut world = World::new();
    for _ in 0..10 {
        world.step(DT);
    }
    assert_eq!(world.ticks(), 10);
    assert!(world.forces().is_empty());
    assert_eq!(world.last_contact_count(), 0);
}

#[test]
fn test_single_body_moves_freely() {
    let mut world = World::with_params(Params::default().with_g(1.0));
    world.add_body(Body::new().moving(Vec3::new(0.0, 0.0, 2.0)));

    for _ in 0..60 {
        world.step(DT);
    }

    let body = world.bodies()[0];
    assert_eq!(world.forces()[0], Vec3::zero());
    assert_eq!(body.velocity, Vec3::new(0.0, 0.0, 2.0));
    assert!((body.position.z - 2.0).abs() < 1e-9);
}

#[test]
fn test_all_static_world_is_inert() {
    let mut world = World::with_params(Params::default().with_g(1.0));
    world.add_body(Body::immovable());
    world.add_body(Body::immovable().at(Vec3::new(0.5, 0.0, 0.0)));
    world.add_body(Body::immovable().at(Vec3::new(0.0, 0.5, 0.0)));
    let before = world.bodies().to_vec();

    for _ in 0..10 {
        world.step(DT);
    }

    assert_eq!(world.bodies(), &before[..]);
    assert_eq!(world.last_contact_count(), 0);
}

#[test]
fn test_static_body_neither_attracts_nor_is_attracted() {
    let params = Params::default().with_g(1e6).with_collisions(false);
    let mut world = World::with_params(params);
    world.add_body(Body::immovable());
    world.add_body(Body::with_mass(1000.0).at(Vec3::new(5.0, 0.0, 0.0)));

    for _ in 0..100 {
        world.step(DT);
    }

    assert_eq!(world.forces()[0], Vec3::zero());
    assert_eq!(world.forces()[1], Vec3::zero());
    assert_eq!(world.bodies()[0].position, Vec3::zero());
    assert_eq!(world.bodies()[1].position, Vec3::new(5.0, 0.0, 0.0));
    assert_eq!(world.bodies()[1].velocity, Vec3::zero());
}

#[test]
fn test_static_body_velocity_is_never_integrated() {
    let mut world = World::new();
    world.add_body(Body::immovable().moving(Vec3::new(10.0, -3.0, 1.0)));

    for _ in 0..100 {
        world.step(DT);
    }

    let body = world.bodies()[0];
    assert_eq!(body.position, Vec3::zero());
    assert_eq!(body.velocity, Vec3::new(10.0, -3.0, 1.0));
}

#[test]
fn test_dynamic_pair_attracts() {
    let params = Params::default().with_g(1.0).with_collisions(false);
    let mut world = World::with_params(params);
    world.add_body(Body::with_mass(10.0));
    world.add_body(Body::with_mass(10.0).at(Vec3::new(10.0, 0.0, 0.0)));

    for _ in 0..60 {
        world.step(DT);
    }

    let separation = world.bodies()[1].position.x - world.bodies()[0].position.x;
    assert!(separation < 10.0);
    assert!(world.bodies()[0].velocity.x > 0.0);
    assert!(world.bodies()[1].velocity.x < 0.0);
}

#[test]
fn test_gravity_toggle() {
    let params = Params::default()
        .with_g(1.0)
        .with_gravity(false)
        .with_collisions(false);
    let mut world = World::with_params(params);
    world.add_body(Body::new());
    world.add_body(Body::new().at(Vec3::new(3.0, 0.0, 0.0)));

    world.step(DT);
    assert_eq!(world.bodies()[0].velocity, Vec3::zero());

    // Takes effect on the next step
    world.params_mut().enable_gravity = true;
    world.step(DT);
    assert!(world.bodies()[0].velocity.x > 0.0);
}

#[test]
fn test_zero_collision_iterations_skip_resolution() {
    let params = Params::default()
        .with_gravity(false)
        .with_collision_iterations(0);
    let mut world = World::with_params(params);
    world.add_body(Body::new().moving(Vec3::new(1.0, 0.0, 0.0)));
    world.add_body(Body::new().at(Vec3::new(1.0, 0.0, 0.0)));

    world.step(DT);

    assert_eq!(world.last_contact_count(), 0);
    assert_eq!(world.bodies()[0].velocity.x, 1.0);
    assert_eq!(world.bodies()[1].position.x, 1.0);
}

#[test]
fn test_bodies_added_mid_run() {
    let params = Params::default().with_g(1.0).with_collisions(false);
    let mut world = World::with_params(params);
    world.add_body(Body::new());
    world.step(DT);

    world.add_body(Body::new().at(Vec3::new(4.0, 0.0, 0.0)));
    world.step(DT);

    assert_eq!(world.forces().len(), 2);
    assert_eq!(world.forces()[0], -world.forces()[1]);
}

#[test]
fn test_clear_then_reuse() {
    let mut world = World::with_bodies(vec![Body::new(), Body::new().at(Vec3::new(1.0, 0.0, 0.0))]);
    world.step(DT);
    world.clear();
    assert!(world.bodies().is_empty());

    world.add_body(Body::new().moving(Vec3::new(1.0, 0.0, 0.0)));
    world.step(DT);
    assert_eq!(world.bodies().len(), 1);
    assert_eq!(world.forces().len(), 1);
}

#[test]
fn test_nan_timestep_does_not_panic() {
    // Not validated: NaN propagates into dynamic bodies only
    let mut world = World::new();
    world.add_body(Body::immovable());
    world.add_body(Body::new().at(Vec3::new(5.0, 0.0, 0.0)));

    world.step(f64::NAN);

    assert!(world.bodies()[0].position.is_valid());
    assert!(!world.bodies()[1].position.is_valid());
}

#[test]
fn test_huge_mass_ratio() {
    let params = Params::default().with_gravity(false);
    let mut world = World::with_params(params);
    world.add_body(Body::with_mass(1e12));
    world.add_body(
        Body::with_mass(1e-3)
            .at(Vec3::new(2.5, 0.0, 0.0))
            .moving(Vec3::new(-5.0, 0.0, 0.0)),
    );

    for _ in 0..60 {
        world.step(DT);
    }

    let (heavy, light) = (world.bodies()[0], world.bodies()[1]);
    assert!(heavy.position.magnitude() < 1e-9);
    assert!(light.velocity.x > 0.0);
    assert!(light.position.is_valid() && light.velocity.is_valid());
}
