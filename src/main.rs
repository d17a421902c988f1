use bevy::prelude::*;
use bevy::window::WindowResolution;

mod actions;
mod config;
mod input;
mod platforms;
mod player;
mod projectile;
mod setup;
mod state;
mod ui;

// re-export the bits we actually need in main
use actions::ActionState;
use config::{ConfigError, GameConfig};
use input::{input_mapping_system, pause_toggle_system};
use platforms::PlatformsPlugin;
use player::PlayerPlugin;
use projectile::ProjectilePlugin;
use state::GameState;
use ui::{despawn_pause_overlay, spawn_pause_overlay};

fn main() {
    let config = match GameConfig::load(GameConfig::DEFAULT_PATH) {
        Ok(config) => config,
        // No file on disk is fine; the defaults match the shipped tuning.
        Err(ConfigError::Io(_)) => GameConfig::default(),
        Err(e) => panic!("invalid game config: {e}"),
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "gunfall".into(),
                resolution: WindowResolution::new(config.screen.width, config.screen.height),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.16, 0.2, 0.32)))
        .insert_resource(config)
        // domain plugins
        .add_plugins(PlatformsPlugin)
        .add_plugins(ProjectilePlugin)
        .add_plugins(PlayerPlugin)
        // init resources & game-state
        .init_resource::<ActionState>()
        .init_state::<GameState>()
        // camera
        .add_systems(Startup, setup::setup)
        // pause-menu UI
        .add_systems(OnEnter(GameState::Paused), spawn_pause_overlay)
        .add_systems(OnExit(GameState::Paused), despawn_pause_overlay)
        // input + pause toggle each frame
        .add_systems(Update, pause_toggle_system)
        .add_systems(
            Update,
            input_mapping_system.run_if(in_state(GameState::Running)),
        )
        .run();
}
