use rand::Rng;

use feebas_locator::markers::{MarkerKind, MarkerLayout};
use feebas_locator::resolver::{FeebasResolver, TileList};
use feebas_locator::tiles::TileRect;
use feebas_locator::version::GameFamily;

const FAMILIES: [GameFamily; 2] = [GameFamily::Gen3, GameFamily::Gen4];

fn random_seeds(family: GameFamily, count: usize) -> Vec<u32> {
    let max: u32 = family.seed_width().max_value();
    let mut rng = rand::rng();
    (0..count).map(|_| rng.random_range(0..=max)).collect()
}

#[test]
fn resolve_is_deterministic() {
    for family in FAMILIES {
        let resolver: &dyn FeebasResolver = family.resolver();
        for seed in random_seeds(family, 500) {
            assert_eq!(resolver.resolve(seed), resolver.resolve(seed), "seed {seed:#X}");
        }
    }
}

#[test]
fn resolved_tiles_are_on_the_map() {
    for family in FAMILIES {
        let resolver: &dyn FeebasResolver = family.resolver();
        for seed in random_seeds(family, 2000) {
            for tile in resolver.resolve(seed) {
                assert!(
                    resolver.lookup(tile).is_some(),
                    "{family}: seed {seed:#X} gave tile {tile} outside the table"
                );
            }
        }
    }
}

#[test]
fn every_gen4_tile_is_reachable_from_some_seed() {
    let resolver: &dyn FeebasResolver = GameFamily::Gen4.resolver();
    let mut seen: Vec<bool> = vec![false; 528];
    for seed in 0..20_000u32 {
        for tile in resolver.resolve(seed.wrapping_mul(0x9E37_79B9)) {
            seen[usize::from(tile)] = true;
        }
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn boundary_seeds() {
    for family in FAMILIES {
        let resolver: &dyn FeebasResolver = family.resolver();
        let max: u32 = family.seed_width().max_value();
        for seed in [0, max] {
            let tiles: TileList = resolver.resolve(seed);
            assert!(!tiles.is_empty() && tiles.len() <= 6);
        }
    }
}

#[test]
fn gen3_seed_zero_markers_are_15x15() {
    let resolver: &dyn FeebasResolver = GameFamily::Gen3.resolver();
    let tiles: TileList = resolver.resolve(0);
    assert_eq!(tiles, vec![447, 149, 291, 351, 369, 78]);
    for tile in tiles {
        let rect: TileRect = resolver.lookup(tile).expect("tile on the map");
        assert_eq!((rect.width, rect.height), (15, 15));
    }
}

#[test]
fn gen4_seed_zero_accessibility() {
    let resolver: &dyn FeebasResolver = GameFamily::Gen4.resolver();
    let tiles: TileList = resolver.resolve(0);
    assert_eq!(tiles, vec![0, 380, 516, 501]);
    let accessible: Vec<bool> = tiles.iter().map(|t| resolver.is_accessible(*t)).collect();
    assert_eq!(accessible, vec![false, true, true, true]);
}

#[test]
fn flipping_a_seed_bit_changes_the_tiles() {
    for family in FAMILIES {
        let resolver: &dyn FeebasResolver = family.resolver();
        let bits: usize = family.seed_width().bytes() * 8;
        for bit in 0..bits {
            let seed: u32 = 0x5A5A_5A5A & family.seed_width().max_value();
            let flipped: u32 = seed ^ (1u32 << bit);
            assert_ne!(
                resolver.resolve(seed),
                resolver.resolve(flipped),
                "{family}: bit {bit}"
            );
        }
    }
}

#[test]
fn under_bridge_overlay_does_not_depend_on_the_seed() {
    let resolver: &dyn FeebasResolver = GameFamily::Gen3.resolver();
    let mut overlays: Vec<Vec<TileRect>> = Vec::new();

    for seed in 0..=u32::from(u16::MAX) {
        let tiles: TileList = resolver.resolve(seed);
        let layout: MarkerLayout = MarkerLayout::new(GameFamily::Gen3, seed);
        let overlay: Vec<TileRect> = layout.under_bridge_markers().map(|m| m.rect).collect();

        if tiles.iter().any(|t| resolver.is_under_bridge(*t)) {
            assert_eq!(overlay.len(), 10, "seed {seed:#X}");
            overlays.push(overlay);
        } else {
            assert!(overlay.is_empty(), "seed {seed:#X}");
        }
    }

    assert!(!overlays.is_empty());
    assert!(overlays.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn gen4_has_no_under_bridge_markers() {
    for seed in random_seeds(GameFamily::Gen4, 500) {
        let layout: MarkerLayout = MarkerLayout::new(GameFamily::Gen4, seed);
        assert!(layout.markers.iter().all(|m| m.kind == MarkerKind::Tile));
        assert_eq!(layout.markers.len(), 4);
    }
}
