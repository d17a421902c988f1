// src/player/mod.rs

mod components;
mod plugin;
mod systems;

pub use plugin::PlayerPlugin;
