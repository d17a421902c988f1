use bevy::prelude::*;

use crate::projectile::pool::Direction;

/// The controllable fighter.
#[derive(Component)]
pub struct Player {
    /// Screen-space position (top-left origin, y down).
    pub pos: Vec2,
    pub vel_y: f32,
    pub facing: Direction,
    pub on_ground: bool,
    /// Screen-space y the feet rest on (top edge of the base platform).
    pub ground_row: f32,
}
