use bevy::prelude::*;

/// Ties a pre-spawned sprite entity to its pool slot index.
#[derive(Component)]
pub struct PoolSlot(pub usize);
