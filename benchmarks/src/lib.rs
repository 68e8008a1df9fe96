//! Shared scene builders for the benchmarks.

use anyhow::Result;
use glam::{Vec2, Vec3};
use kinetic2d::{
    Aabb3, BoxShape, Circle, Octree, Plane, Polygon, RigidBody, Scene, SceneConfig, Shape,
};

/// Grid of unit circles suspended above a ground plane.
pub fn setup_ball_pit(n: usize) -> Result<Scene> {
    let mut scene = Scene::new(SceneConfig::default());
    scene.add_plane(Plane::new(Vec2::Y, 0.0)?);
    let columns = (n as f32).sqrt().ceil() as usize;
    for i in 0..n {
        let x = (i % columns) as f32 * 2.1 - columns as f32;
        let y = (i / columns) as f32 * 2.1 + 2.0;
        scene.add_body(RigidBody::new(
            Shape::Circle(Circle::new(1.0)?),
            Vec2::new(x, y),
            1.0,
        )?);
    }
    Ok(scene)
}

/// Alternating circles, boxes, and triangles in a loose grid.
pub fn setup_mixed_scene(n: usize) -> Result<Scene> {
    let mut scene = Scene::new(SceneConfig::default());
    scene.add_plane(Plane::new(Vec2::Y, 0.0)?);
    let columns = (n as f32).sqrt().ceil() as usize;
    for i in 0..n {
        let position = Vec2::new(
            (i % columns) as f32 * 3.0 - columns as f32,
            (i / columns) as f32 * 3.0 + 2.0,
        );
        let shape = match i % 3 {
            0 => Shape::Circle(Circle::new(1.0)?),
            1 => Shape::Box(BoxShape::new(Vec2::new(1.0, 0.8))?),
            _ => Shape::Polygon(Polygon::new(vec![
                Vec2::new(-1.0, -0.8),
                Vec2::new(1.0, -0.8),
                Vec2::new(0.0, 1.0),
            ])?),
        };
        scene.add_body(RigidBody::new(shape, position, 1.0)?);
    }
    Ok(scene)
}

/// Bodies spread far enough apart that almost no pair collides.
pub fn setup_sparse_scene(n: usize) -> Result<Scene> {
    let mut scene = Scene::new(SceneConfig::default());
    for i in 0..n {
        scene.add_body(RigidBody::new(
            Shape::Circle(Circle::new(1.0)?),
            Vec2::new(i as f32 * 50.0, 100.0),
            1.0,
        )?);
    }
    Ok(scene)
}

/// Octree populated with `n` unit cubes scattered through a 100-unit
/// world.
pub fn setup_octree(n: usize) -> (Octree<usize>, Vec<Aabb3>) {
    let world = Aabb3::new(Vec3::splat(-50.0), Vec3::splat(50.0));
    let mut tree = Octree::new(world, 8);
    let mut volumes = Vec::with_capacity(n);
    // deterministic pseudo-random spread
    let mut state: u32 = 0x2545_f491;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state as f32 / u32::MAX as f32) * 90.0 - 45.0
    };
    for i in 0..n {
        let center = Vec3::new(next(), next(), next());
        let bounds = Aabb3::from_center_half_extents(center, Vec3::splat(1.0));
        tree.insert(bounds, i);
        volumes.push(bounds);
    }
    (tree, volumes)
}
