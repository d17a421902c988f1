use bevy::prelude::*;
use bevy::input::{keyboard::KeyCode, ButtonInput};

use crate::actions::{ActionState, PlayerAction};
use crate::state::GameState;

pub fn input_mapping_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut action_state: ResMut<ActionState>,
) {
    action_state.set(
        PlayerAction::MoveLeft,
        keys.pressed(KeyCode::ArrowLeft) || keys.pressed(KeyCode::KeyA),
    );
    action_state.set(
        PlayerAction::MoveRight,
        keys.pressed(KeyCode::ArrowRight) || keys.pressed(KeyCode::KeyD),
    );
    action_state.set(
        PlayerAction::Jump,
        keys.pressed(KeyCode::ArrowUp) || keys.pressed(KeyCode::KeyW),
    );
    action_state.set(PlayerAction::Fire, keys.pressed(KeyCode::Space));
}

pub fn pause_toggle_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
    current_state: Res<State<GameState>>,
) {
    if !keys.just_pressed(KeyCode::Escape) {
        return;
    }
    match current_state.get() {
        GameState::Running => {
            next_state.set(GameState::Paused);
            info!("Paused game");
        }
        GameState::Paused => {
            next_state.set(GameState::Running);
            info!("Resumed game");
        }
    }
}
