use bevy::prelude::*;

use super::components::PoolSlot;
use super::pool::{Bounds, ProjectilePool};
use crate::config::GameConfig;

const PROJECTILE_COLOR: Color = Color::srgb(0.95, 0.85, 0.25);
const PROJECTILE_SIZE: Vec2 = Vec2::new(12.0, 4.0);
const Z_PROJECTILES: f32 = 3.0;

/// Startup: build the fixed-capacity pool from config.
pub fn init_pool(mut commands: Commands, config: Res<GameConfig>) {
    commands.insert_resource(ProjectilePool::new(
        config.projectile.capacity,
        config.projectile.speed,
    ));
    info!("Projectiles: pool of {} ready", config.projectile.capacity);
}

/// Startup: one hidden sprite per pool slot, reused for the whole run.
/// Runs after `init_pool`.
pub fn spawn_pool_sprites(mut commands: Commands, pool: Res<ProjectilePool>) {
    for index in 0..pool.capacity() {
        commands.spawn((
            Sprite::from_color(PROJECTILE_COLOR, PROJECTILE_SIZE),
            Transform::from_translation(Vec3::new(0.0, 0.0, Z_PROJECTILES)),
            Visibility::Hidden,
            PoolSlot(index),
        ));
    }
}

/// Advances active projectiles and retires any that left the screen.
/// The retirement check ignores the frame delta on purpose.
pub fn step_projectiles(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut pool: ResMut<ProjectilePool>,
) {
    pool.integrate(time.delta_secs());
    pool.retire_out_of_bounds(Bounds {
        width: config.screen.width,
        height: config.screen.height,
    });
}

/// Mirrors pool slot state onto the pre-spawned sprite entities.
pub fn sync_pool_sprites(
    config: Res<GameConfig>,
    pool: Res<ProjectilePool>,
    mut sprites: Query<(&PoolSlot, &mut Transform, &mut Visibility)>,
) {
    for (slot, mut transform, mut visibility) in &mut sprites {
        let projectile = pool.slot(slot.0);
        transform.translation = config.screen.to_world(projectile.pos, Z_PROJECTILES);
        *visibility = if projectile.visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}
