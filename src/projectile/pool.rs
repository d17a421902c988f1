// src/projectile/pool.rs
//! Fixed-capacity projectile pool (engine-free).
//!
//! Slots only ever cycle between active and inactive; nothing is
//! allocated or dropped after construction.

use bevy::prelude::*;

/// Horizontal firing direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// One reusable projectile slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    /// Screen-space position (top-left origin, y down).
    pub pos: Vec2,
    pub vel_x: f32,
    pub active: bool,
    pub visible: bool,
}

impl Projectile {
    fn idle() -> Self {
        Self { pos: Vec2::ZERO, vel_x: 0.0, active: false, visible: false }
    }
}

/// Play-area bounds for retirement checks.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

/// True once `pos` has left the play area on any axis. Positions
/// exactly on an edge still count as inside.
pub fn out_of_bounds(pos: Vec2, bounds: Bounds) -> bool {
    pos.x < 0.0 || pos.x > bounds.width || pos.y < 0.0 || pos.y > bounds.height
}

#[derive(Resource, Debug)]
pub struct ProjectilePool {
    slots: Vec<Projectile>,
    speed: f32,
}

impl ProjectilePool {
    /// Eagerly builds `capacity` inactive, invisible slots. The pool
    /// never grows or shrinks afterwards.
    pub fn new(capacity: usize, speed: f32) -> Self {
        Self { slots: vec![Projectile::idle(); capacity], speed }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    pub fn slot(&self, index: usize) -> &Projectile {
        &self.slots[index]
    }

    /// First-fit dispatch: activates the lowest-index inactive slot,
    /// clearing its stale state. Returns `None` when every slot is
    /// live; the shot is silently dropped, never queued.
    pub fn fire(&mut self, x: f32, y: f32, direction: Direction) -> Option<usize> {
        let index = self.slots.iter().position(|s| !s.active)?;
        let slot = &mut self.slots[index];

        slot.pos = Vec2::new(x, y);
        slot.vel_x = match direction {
            Direction::Left => -self.speed,
            Direction::Right => self.speed,
        };
        slot.active = true;
        slot.visible = true;
        Some(index)
    }

    /// Advances active slots by their horizontal velocity. Inactive
    /// slots hold still.
    pub fn integrate(&mut self, dt: f32) {
        for slot in self.slots.iter_mut().filter(|s| s.active) {
            slot.pos.x += slot.vel_x * dt;
        }
    }

    /// Deactivates and hides every active slot outside `bounds`. This
    /// is the only path back to inactive.
    pub fn retire_out_of_bounds(&mut self, bounds: Bounds) {
        for slot in self.slots.iter_mut().filter(|s| s.active) {
            if out_of_bounds(slot.pos, bounds) {
                slot.active = false;
                slot.visible = false;
            }
        }
    }
}
