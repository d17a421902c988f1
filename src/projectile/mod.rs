// src/projectile/mod.rs

// pool is the engine-free core; the rest mirrors it onto sprites
pub mod pool;

mod components;
mod plugin;
mod systems;

pub use plugin::ProjectilePlugin;
