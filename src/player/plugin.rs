use bevy::prelude::*;

use super::systems::{fire_input, init_fire_cooldown, move_player, spawn_player};
use crate::state::GameState;

/// Caller-side throttle on fire requests; the pool itself never
/// rate-limits.
#[derive(Resource)]
pub struct FireCooldown(pub Timer);

impl FireCooldown {
    pub fn new(seconds: f32) -> Self {
        let mut timer = Timer::from_seconds(seconds, TimerMode::Once);
        // Start expired so the first shot is not delayed.
        let duration = timer.duration();
        timer.tick(duration);
        Self(timer)
    }
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, init_fire_cooldown)
            // PostStartup: the base platform exists by then.
            .add_systems(PostStartup, spawn_player)
            .add_systems(
                Update,
                (
                    move_player.run_if(in_state(GameState::Running)),
                    fire_input.after(move_player).run_if(in_state(GameState::Running)),
                ),
            );
    }
}
