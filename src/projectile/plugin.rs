use bevy::prelude::*;

use super::systems::{init_pool, spawn_pool_sprites, step_projectiles, sync_pool_sprites};
use crate::state::GameState;

pub struct ProjectilePlugin;

impl Plugin for ProjectilePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (init_pool, spawn_pool_sprites).chain())
            .add_systems(
                Update,
                (
                    step_projectiles.run_if(in_state(GameState::Running)),
                    sync_pool_sprites.after(step_projectiles),
                ),
            );
    }
}
