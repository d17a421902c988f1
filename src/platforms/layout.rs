// src/platforms/layout.rs
//! Constrained random platform layout (deterministic, engine-free).

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Scale applied to the anchor platform's footprint.
pub const BASE_SCALE: f32 = 2.0;

/// Platforms never spawn above this row (screen space, y down).
pub const TOP_MARGIN: f32 = 100.0;

/// Extra vertical clearance demanded by the anchor platform.
const BASE_VERTICAL_FACTOR: f32 = 1.5;

/// Occupied footprint of one placed platform: center plus full size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// The anchor platform gets a wider vertical clearance rule; tagged
    /// here rather than compared by identity.
    pub is_base: bool,
}

impl PlacedRegion {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Tunables for one generation run. Every value must be positive and
/// `min_scale <= max_scale`; `GameConfig::validate` enforces this once
/// at startup.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// How many platforms to attempt beyond the anchor.
    pub max_platforms: u32,
    /// Minimum horizontal clearance between platform edges (pixels).
    pub min_horizontal_gap: f32,
    /// Minimum vertical clearance between platform edges (pixels).
    pub min_vertical_gap: f32,
    /// Unscaled sprite footprint.
    pub platform_width: f32,
    pub platform_height: f32,
    /// Distance of the anchor platform's center from the screen bottom.
    pub base_height_offset: f32,
    /// Uniform scale range applied per placement.
    pub min_scale: f32,
    pub max_scale: f32,
    /// Anchor center x; defaults to the horizontal screen center.
    #[serde(default)]
    pub base_x: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_platforms: 5,
            min_horizontal_gap: 100.0,
            min_vertical_gap: 150.0,
            platform_width: 150.0,
            platform_height: 32.0,
            base_height_offset: 100.0,
            min_scale: 1.0,
            max_scale: 2.0,
            base_x: None,
        }
    }
}

/// The fixed anchor platform every run starts from. Always the first
/// entry of the placed sequence.
pub fn place_base(cfg: &LayoutConfig, screen_w: f32, screen_h: f32) -> PlacedRegion {
    PlacedRegion {
        x: cfg.base_x.unwrap_or(screen_w / 2.0),
        y: screen_h - cfg.base_height_offset,
        width: cfg.platform_width * BASE_SCALE,
        height: cfg.platform_height * BASE_SCALE,
        is_base: true,
    }
}

/// Two regions are too close iff they are close on BOTH axes; a
/// candidate far away on one axis passes even when the other axis is
/// near. Looser than rectangle overlap with margin, and kept that way
/// on purpose.
pub fn in_conflict(candidate: &PlacedRegion, placed: &PlacedRegion, cfg: &LayoutConfig) -> bool {
    let min_horizontal = (candidate.width + placed.width) / 2.0 + cfg.min_horizontal_gap;

    let vertical_gap = if placed.is_base {
        cfg.min_vertical_gap * BASE_VERTICAL_FACTOR
    } else {
        cfg.min_vertical_gap
    };
    let min_vertical = (candidate.height + placed.height) / 2.0 + vertical_gap;

    (candidate.x - placed.x).abs() < min_horizontal
        && (candidate.y - placed.y).abs() < min_vertical
}

/// A candidate is valid only when it conflicts with none of the
/// already-placed regions.
pub fn is_valid(candidate: &PlacedRegion, placed: &[PlacedRegion], cfg: &LayoutConfig) -> bool {
    placed.iter().all(|p| !in_conflict(candidate, p, cfg))
}

/// Places the anchor plus up to `max_platforms` random platforms.
///
/// Bounded retry: the attempt budget is `2 * max_platforms`, so
/// crowded screens end with an under-filled layout instead of an
/// error or an endless loop. Deterministic for a given RNG state.
pub fn generate(
    cfg: &LayoutConfig,
    screen_w: f32,
    screen_h: f32,
    rng: &mut impl Rng,
) -> Vec<PlacedRegion> {
    let mut placed = vec![place_base(cfg, screen_w, screen_h)];

    let base_y = screen_h - cfg.base_height_offset;
    let mut attempts_remaining = cfg.max_platforms * 2;
    let mut created = 0u32;

    while attempts_remaining > 0 && created < cfg.max_platforms {
        attempts_remaining -= 1;

        let scale = rng.random_range(cfg.min_scale..=cfg.max_scale);
        let width = cfg.platform_width * scale;
        let height = cfg.platform_height * scale;

        // Candidate centers keep the footprint on-screen and strictly
        // between the top margin and the anchor row. A footprint too
        // big for either interval just spends its attempt.
        let (min_x, max_x) = (width / 2.0, screen_w - width / 2.0);
        let (min_y, max_y) = (TOP_MARGIN, base_y - height);
        if min_x > max_x || min_y > max_y {
            continue;
        }

        let candidate = PlacedRegion {
            x: rng.random_range(min_x..=max_x),
            y: rng.random_range(min_y..=max_y),
            width,
            height,
            is_base: false,
        };

        if is_valid(&candidate, &placed, cfg) {
            placed.push(candidate);
            created += 1;
        }
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    const SCREEN_W: f32 = 1024.0;
    const SCREEN_H: f32 = 768.0;

    fn assert_no_pair_conflicts(regions: &[PlacedRegion], cfg: &LayoutConfig) {
        for (i, a) in regions.iter().enumerate() {
            for (j, b) in regions.iter().enumerate() {
                if i != j {
                    assert!(
                        !in_conflict(a, b, cfg),
                        "regions {i} and {j} are too close: {a:?} vs {b:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn base_platform_anchors_to_bottom() {
        let cfg = LayoutConfig::default();
        let base = place_base(&cfg, SCREEN_W, SCREEN_H);

        assert_eq!(base.x, SCREEN_W / 2.0);
        assert_eq!(base.y, SCREEN_H - cfg.base_height_offset);
        assert_eq!(base.width, cfg.platform_width * BASE_SCALE);
        assert_eq!(base.height, cfg.platform_height * BASE_SCALE);
        assert!(base.is_base);
    }

    #[test]
    fn base_x_override_is_honored() {
        let cfg = LayoutConfig { base_x: Some(200.0), ..LayoutConfig::default() };
        assert_eq!(place_base(&cfg, SCREEN_W, SCREEN_H).x, 200.0);
    }

    #[test]
    fn conflict_needs_both_axes_close() {
        let cfg = LayoutConfig::default();
        let a = PlacedRegion { x: 0.0, y: 0.0, width: 100.0, height: 30.0, is_base: false };

        // Close on both axes: conflict.
        let b = PlacedRegion { x: 50.0, y: 20.0, ..a };
        assert!(in_conflict(&a, &b, &cfg));

        // Far horizontally, close vertically: no conflict.
        let c = PlacedRegion { x: 500.0, y: 20.0, ..a };
        assert!(!in_conflict(&a, &c, &cfg));

        // Close horizontally, far vertically: no conflict.
        let d = PlacedRegion { x: 50.0, y: 600.0, ..a };
        assert!(!in_conflict(&a, &d, &cfg));
    }

    #[test]
    fn base_platform_gets_wider_vertical_gap() {
        let cfg = LayoutConfig {
            min_horizontal_gap: 10.0,
            min_vertical_gap: 100.0,
            ..LayoutConfig::default()
        };
        let candidate =
            PlacedRegion { x: 0.0, y: 0.0, width: 50.0, height: 20.0, is_base: false };

        // Vertical distance 130 clears a plain neighbor
        // (20/2 + 20/2 + 100 = 120) but not the anchor (20 + 150 = 170).
        let mut other = PlacedRegion { x: 10.0, y: 130.0, width: 50.0, height: 20.0, is_base: false };
        assert!(!in_conflict(&candidate, &other, &cfg));

        other.is_base = true;
        assert!(in_conflict(&candidate, &other, &cfg));
    }

    #[test]
    fn generated_layouts_never_conflict() {
        let cfg = LayoutConfig::default();
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let regions = generate(&cfg, SCREEN_W, SCREEN_H, &mut rng);
            assert!(regions[0].is_base);
            assert!(regions.len() as u32 <= cfg.max_platforms + 1);
            assert_no_pair_conflicts(&regions, &cfg);
        }
    }

    #[test]
    fn same_seed_reproduces_the_layout() {
        let cfg = LayoutConfig::default();
        let a = generate(&cfg, SCREEN_W, SCREEN_H, &mut ChaCha8Rng::seed_from_u64(7));
        let b = generate(&cfg, SCREEN_W, SCREEN_H, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn oversized_gaps_under_fill_without_hanging() {
        let cfg = LayoutConfig {
            min_horizontal_gap: 10_000.0,
            min_vertical_gap: 10_000.0,
            ..LayoutConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let regions = generate(&cfg, SCREEN_W, SCREEN_H, &mut rng);
        // Every candidate collides with the anchor at these gaps.
        assert_eq!(regions.len(), 1);
    }

    #[test]
    fn footprint_larger_than_screen_yields_only_the_base() {
        let cfg = LayoutConfig {
            platform_width: 5000.0,
            min_scale: 1.0,
            max_scale: 1.0,
            ..LayoutConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let regions = generate(&cfg, SCREEN_W, SCREEN_H, &mut rng);
        assert_eq!(regions.len(), 1);
    }

    /// RNG wrapper that counts value draws. Each candidate evaluation
    /// needs at most three draws (scale, x, y), so total draws bound
    /// the number of attempts from above.
    struct CountingRng {
        inner: ChaCha8Rng,
        draws: u32,
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.draws += 1;
            self.inner.fill_bytes(dest)
        }
    }

    #[test]
    fn attempt_budget_is_twice_max_platforms() {
        // Unsatisfiable gaps force the generator to burn its whole
        // budget, which is where the bound matters.
        let cfg = LayoutConfig {
            min_horizontal_gap: 10_000.0,
            min_vertical_gap: 10_000.0,
            ..LayoutConfig::default()
        };
        let mut rng = CountingRng { inner: ChaCha8Rng::seed_from_u64(5), draws: 0 };
        generate(&cfg, SCREEN_W, SCREEN_H, &mut rng);
        assert!(rng.draws <= 3 * 2 * cfg.max_platforms);
    }

    #[test]
    fn equal_min_and_max_scale_is_legal() {
        let cfg = LayoutConfig { min_scale: 1.5, max_scale: 1.5, ..LayoutConfig::default() };
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let regions = generate(&cfg, SCREEN_W, SCREEN_H, &mut rng);
        for region in regions.iter().skip(1) {
            assert_eq!(region.width, cfg.platform_width * 1.5);
            assert_eq!(region.height, cfg.platform_height * 1.5);
        }
    }

    #[test]
    fn spec_sized_arena_end_to_end() {
        // 1024x768, four platforms, gaps 100/200, anchor at (512, 368)
        // sized 300x64.
        let cfg = LayoutConfig {
            max_platforms: 4,
            min_horizontal_gap: 100.0,
            min_vertical_gap: 200.0,
            platform_width: 150.0,
            platform_height: 32.0,
            base_height_offset: 400.0,
            min_scale: 1.0,
            max_scale: 2.0,
            base_x: None,
        };

        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let regions = generate(&cfg, SCREEN_W, SCREEN_H, &mut rng);

            let base = regions[0];
            assert_eq!((base.x, base.y), (512.0, 368.0));
            assert_eq!((base.width, base.height), (300.0, 64.0));

            assert!(!regions.is_empty() && regions.len() <= 5);
            assert_no_pair_conflicts(&regions, &cfg);
        }
    }

    proptest! {
        #[test]
        fn separation_invariant_holds_for_any_config(
            seed in 0u64..1000,
            h_gap in 1.0f32..300.0,
            v_gap in 1.0f32..300.0,
            max_platforms in 1u32..8,
            min_scale in 0.5f32..1.5,
            scale_span in 0.0f32..1.0,
        ) {
            let cfg = LayoutConfig {
                max_platforms,
                min_horizontal_gap: h_gap,
                min_vertical_gap: v_gap,
                min_scale,
                max_scale: min_scale + scale_span,
                ..LayoutConfig::default()
            };
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let regions = generate(&cfg, SCREEN_W, SCREEN_H, &mut rng);

            prop_assert!(regions.len() as u32 <= max_platforms + 1);
            for (i, a) in regions.iter().enumerate() {
                for (j, b) in regions.iter().enumerate() {
                    if i != j {
                        prop_assert!(!in_conflict(a, b, &cfg));
                    }
                }
            }
        }
    }
}
