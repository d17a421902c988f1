use bevy::prelude::*;

use super::systems::spawn_platforms;

/// Seed for layout generation; changing it reshuffles the level.
#[derive(Resource, Clone, Copy, Debug)]
pub struct LayoutSeed(pub u64);

impl Default for LayoutSeed {
    fn default() -> Self {
        Self(1337)
    }
}

pub struct PlatformsPlugin;

impl Plugin for PlatformsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LayoutSeed>()
            .add_systems(Startup, spawn_platforms);
    }
}
