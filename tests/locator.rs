use std::path::PathBuf;

use feebas_locator::locator::FeebasLocator;
use feebas_locator::saver::region::SaverRegion;
use feebas_locator::seed::{self, SeedError, SeedWidth};
use feebas_locator::version::{GameFamily, GameVersion};

const VERSIONS: [GameVersion; 8] = [
    GameVersion::Ruby,
    GameVersion::Sapphire,
    GameVersion::RubySapphire,
    GameVersion::Emerald,
    GameVersion::Diamond,
    GameVersion::Pearl,
    GameVersion::DiamondPearl,
    GameVersion::Platinum,
];

/// Save region large enough for every version, filled with a recognizable pattern.
fn region() -> Vec<u8> {
    (0..0x6000usize).map(|i| (i % 251) as u8).collect()
}

#[test]
fn read_then_write_leaves_the_region_unchanged() {
    for version in VERSIONS {
        let original: Vec<u8> = region();
        let mut buffer: Vec<u8> = original.clone();
        let location = version.seed_location();

        let value: u32 = seed::read_seed(&buffer, location.offset, location.width).unwrap();
        seed::write_seed(&mut buffer, location.offset, location.width, value).unwrap();
        assert_eq!(buffer, original, "{version}");

        let locator: FeebasLocator = FeebasLocator::from_region(version, &buffer).unwrap();
        locator.commit(&mut buffer).unwrap();
        assert_eq!(buffer, original, "{version}");
    }
}

#[test]
fn commit_writes_the_seed_width_at_the_version_offset() {
    let mut buffer: Vec<u8> = vec![0xEE; 0x6000];
    let mut locator: FeebasLocator = FeebasLocator::new(GameVersion::Emerald);
    locator.set_seed_text("beef");
    locator.commit(&mut buffer).unwrap();

    assert_eq!(&buffer[0x2E6A..0x2E6C], &[0xEF, 0xBE]);
    assert!(buffer[..0x2E6A].iter().all(|b| *b == 0xEE));
    assert!(buffer[0x2E6C..].iter().all(|b| *b == 0xEE));

    let mut buffer: Vec<u8> = vec![0xEE; 0x6000];
    let mut locator: FeebasLocator = FeebasLocator::new(GameVersion::Platinum);
    locator.set_seed(0x1234_5678);
    locator.commit(&mut buffer).unwrap();
    assert_eq!(&buffer[0x5664..0x5668], &[0x78, 0x56, 0x34, 0x12]);
    assert_eq!(buffer.iter().filter(|b| **b != 0xEE).count(), 4);
}

#[test]
fn short_region_is_an_error() {
    let buffer: Vec<u8> = vec![0; 0x2DD7];
    let err: SeedError = FeebasLocator::from_region(GameVersion::Ruby, &buffer).unwrap_err();
    assert_eq!(
        err,
        SeedError::OutOfBounds {
            offset: 0x2DD6,
            width: SeedWidth::Bits16,
            len: 0x2DD7
        }
    );

    let mut buffer: Vec<u8> = vec![0; 0x5666];
    let locator: FeebasLocator = FeebasLocator::new(GameVersion::Platinum);
    assert!(locator.commit(&mut buffer).is_err());
    assert!(buffer.iter().all(|b| *b == 0));
}

#[test]
fn seed_text_edits() {
    let mut locator: FeebasLocator = FeebasLocator::new(GameVersion::Diamond);
    assert_eq!(locator.family(), GameFamily::Gen4);
    assert_eq!(locator.seed_text_max_len(), 8);

    assert_eq!(locator.set_seed_text("1234abcd"), 0x1234_ABCD);
    assert_eq!(locator.seed_text(), "1234ABCD");

    // Invalid text is seed 0, which still resolves
    assert_eq!(locator.set_seed_text("not a seed!"), 0xAEED);
    assert_eq!(locator.set_seed_text("xyz"), 0);
    assert_eq!(locator.tiles(), vec![0, 380, 516, 501]);

    let mut locator: FeebasLocator = FeebasLocator::new(GameVersion::Sapphire);
    assert_eq!(locator.seed_text_max_len(), 4);
    locator.set_seed(0xDEAD_BEEF);
    assert_eq!(locator.seed(), 0xBEEF);
}

#[test]
fn layout_follows_the_seed() {
    let mut locator: FeebasLocator = FeebasLocator::new(GameVersion::Emerald);
    locator.set_seed_text("FFFF");
    let layout = locator.layout();
    assert_eq!(layout.seed, 0xFFFF);
    assert_eq!(layout.tiles, locator.tiles());
    assert_eq!(layout.under_bridge_markers().count(), 10);
}

#[test]
fn region_file_round_trip() {
    let mut path: PathBuf = std::env::temp_dir();
    path.push(format!("feebas-locator-test-{}.bin", std::process::id()));
    let saver: SaverRegion = SaverRegion::new(path.clone());

    let mut buffer: Vec<u8> = region();
    saver.save(&buffer).unwrap();

    let mut locator: FeebasLocator =
        FeebasLocator::from_region(GameVersion::Pearl, &saver.load().unwrap()).unwrap();
    locator.set_seed_text("CAFE0001");
    locator.commit(&mut buffer).unwrap();
    saver.save(&buffer).unwrap();

    let reloaded: FeebasLocator =
        FeebasLocator::from_region(GameVersion::Pearl, &saver.load().unwrap()).unwrap();
    assert_eq!(reloaded.seed(), 0xCAFE_0001);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_region_file_is_an_error() {
    let saver: SaverRegion = SaverRegion::new(PathBuf::from("/nonexistent/feebas/region.bin"));
    assert!(saver.load().is_err());
}
