// src/platforms/mod.rs

// layout is the engine-free core; the rest is spawn glue
pub mod layout;

mod components;
mod plugin;
mod systems;

pub use components::{BasePlatform, Platform};
pub use plugin::{LayoutSeed, PlatformsPlugin};
