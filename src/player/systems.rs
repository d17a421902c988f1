use bevy::prelude::*;

use super::components::Player;
use super::plugin::FireCooldown;
use crate::actions::{ActionState, PlayerAction};
use crate::config::GameConfig;
use crate::platforms::{BasePlatform, Platform};
use crate::projectile::pool::{Direction, ProjectilePool};

const PLAYER_COLOR: Color = Color::srgb(0.85, 0.3, 0.25);
const PLAYER_SIZE: Vec2 = Vec2::new(32.0, 48.0);
const Z_PLAYER: f32 = 2.0;

pub fn init_fire_cooldown(mut commands: Commands, config: Res<GameConfig>) {
    commands.insert_resource(FireCooldown::new(config.player.fire_cooldown_secs));
}

/// PostStartup: put the fighter on top of the base platform.
pub fn spawn_player(
    mut commands: Commands,
    config: Res<GameConfig>,
    base: Query<&Platform, With<BasePlatform>>,
) {
    let Ok(base) = base.single() else {
        warn!("Player: no base platform to stand on");
        return;
    };

    let ground_row = base.region.y - base.region.height / 2.0;
    let pos = Vec2::new(config.screen.width * 0.25, ground_row - PLAYER_SIZE.y / 2.0);

    commands.spawn((
        Sprite::from_color(PLAYER_COLOR, PLAYER_SIZE),
        Transform::from_translation(config.screen.to_world(pos, Z_PLAYER)),
        Player {
            pos,
            vel_y: 0.0,
            facing: Direction::Right,
            on_ground: true,
            ground_row,
        },
    ));
}

/// Horizontal run, jump, and gravity. The player only ever lands back
/// on the base platform row; mid-air platforms are decoration as far
/// as movement is concerned.
pub fn move_player(
    time: Res<Time>,
    actions: Res<ActionState>,
    config: Res<GameConfig>,
    mut players: Query<(&mut Player, &mut Transform)>,
) {
    let dt = time.delta_secs();
    let Ok((mut player, mut transform)) = players.single_mut() else {
        return;
    };

    let mut dir_x = 0.0;
    if actions.pressed(PlayerAction::MoveLeft) {
        dir_x -= 1.0;
        player.facing = Direction::Left;
    }
    if actions.pressed(PlayerAction::MoveRight) {
        dir_x += 1.0;
        player.facing = Direction::Right;
    }
    player.pos.x = (player.pos.x + dir_x * config.player.move_speed * dt)
        .clamp(PLAYER_SIZE.x / 2.0, config.screen.width - PLAYER_SIZE.x / 2.0);

    if actions.pressed(PlayerAction::Jump) && player.on_ground {
        player.vel_y = -config.player.jump_speed;
        player.on_ground = false;
    }

    // Screen space is y-down, so gravity is positive.
    player.vel_y += config.player.gravity * dt;
    player.pos.y += player.vel_y * dt;

    let floor = player.ground_row - PLAYER_SIZE.y / 2.0;
    if player.pos.y >= floor {
        player.pos.y = floor;
        player.vel_y = 0.0;
        player.on_ground = true;
    }

    transform.translation = config.screen.to_world(player.pos, Z_PLAYER);
}

/// Fires from the facing-side edge of the player, gated by the
/// cooldown timer. The timer only rearms when the pool actually hands
/// a slot out.
pub fn fire_input(
    time: Res<Time>,
    actions: Res<ActionState>,
    mut cooldown: ResMut<FireCooldown>,
    mut pool: ResMut<ProjectilePool>,
    players: Query<&Player>,
) {
    cooldown.0.tick(time.delta());
    if !actions.pressed(PlayerAction::Fire) || !cooldown.0.finished() {
        return;
    }
    let Ok(player) = players.single() else {
        return;
    };

    let muzzle_x = match player.facing {
        Direction::Left => player.pos.x - PLAYER_SIZE.x / 2.0,
        Direction::Right => player.pos.x + PLAYER_SIZE.x / 2.0,
    };

    match pool.fire(muzzle_x, player.pos.y, player.facing) {
        Some(_) => cooldown.0.reset(),
        None => debug!(
            "Projectiles: pool saturated ({} active), shot dropped",
            pool.active_count()
        ),
    }
}
