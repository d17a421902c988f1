use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::components::{BasePlatform, Platform};
use super::layout;
use super::plugin::LayoutSeed;
use crate::config::GameConfig;

const PLATFORM_COLOR: Color = Color::srgb(0.36, 0.62, 0.29);
const Z_PLATFORMS: f32 = 1.0;

/// Startup: run the layout generator once and spawn a sprite per
/// placed region. Generation finishes before the first update tick.
pub fn spawn_platforms(mut commands: Commands, config: Res<GameConfig>, seed: Res<LayoutSeed>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.0);
    let regions = layout::generate(
        &config.layout,
        config.screen.width,
        config.screen.height,
        &mut rng,
    );

    info!(
        "Platforms: placed {} of {} requested (seed={})",
        regions.len() - 1,
        config.layout.max_platforms,
        seed.0
    );

    for region in regions {
        let mut platform = commands.spawn((
            Sprite::from_color(PLATFORM_COLOR, region.size()),
            Transform::from_translation(config.screen.to_world(region.center(), Z_PLATFORMS)),
            Platform { region },
        ));
        if region.is_base {
            platform.insert(BasePlatform);
        }
    }
}
