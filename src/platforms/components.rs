use bevy::prelude::*;

use super::layout::PlacedRegion;

/// A placed platform; keeps its generation-time footprint for queries.
#[derive(Component)]
pub struct Platform {
    pub region: PlacedRegion,
}

/// Marks the fixed anchor platform at the bottom of the screen.
#[derive(Component)]
pub struct BasePlatform;
