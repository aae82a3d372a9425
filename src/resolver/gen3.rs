/*
gen3.rs

Copyright 2025 Hervé Quatremain

This file is part of Feebas Locator.

Feebas Locator is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Feebas Locator is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Feebas Locator. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Feebas tiles on Route 119 (Ruby, Sapphire, and Emerald).
//!
//! The water tiles of the route are numbered from 1 to [`NUM_FISHING_SPOTS`], row by row.
//! The game seeds its Feebas generator with the 16-bit seed and draws
//! [`NUM_FEEBAS_TILES`] spots.
//! A draw of `0` stands for the last spot, and spots 1 to 3, at the top of the route, are out
//! of reach and drawn again.
//!
//! Water tiles that sit under the northern bridge are not counted when the game numbers the
//! tiles, and the game reports all of them as tile [`UNDER_BRIDGE_TILE`].
//! When that tile is drawn, Feebas can be fished on all of them.

use log::{Level, debug, log_enabled};

use super::{FeebasResolver, TileList, lcrng_next, lcrng_value};
use crate::version::GameFamily;

/// Number of fishing spots on Route 119.
pub const NUM_FISHING_SPOTS: u16 = 447;

/// Number of Feebas tiles.
pub const NUM_FEEBAS_TILES: usize = 6;

/// First spot that the game keeps.
const FIRST_REACHABLE_SPOT: u16 = 4;

/// Tile number that the game gives to the water under the northern bridge.
pub const UNDER_BRIDGE_TILE: u16 = 132;

/// Tiles that cannot be fished, because of rocks or because they are under the bridge.
const INACCESSIBLE_TILES: [u16; 4] = [105, 119, UNDER_BRIDGE_TILE, 133];

/// Resolver for Generation 3.
#[derive(Debug, Default, Copy, Clone)]
pub struct Feebas3;

impl Feebas3 {
    /// Return the Feebas tiles for the 16-bit seed.
    pub fn tiles(seed: u16) -> TileList {
        let mut state: u32 = u32::from(seed);
        let mut tiles: TileList = Vec::with_capacity(NUM_FEEBAS_TILES);

        while tiles.len() < NUM_FEEBAS_TILES {
            state = lcrng_next(state);
            let tile: u16 = match lcrng_value(state) % NUM_FISHING_SPOTS {
                0 => NUM_FISHING_SPOTS,
                t => t,
            };
            if tile < FIRST_REACHABLE_SPOT {
                debug!("Spot {tile} is out of reach, drawing again");
                continue;
            }
            tiles.push(tile);
        }

        if log_enabled!(Level::Debug) {
            debug!("Seed {seed:#06X}: tiles {tiles:?}");
        }
        tiles
    }

    /// Whether the player can fish on the tile.
    pub fn accessible(tile: u16) -> bool {
        (FIRST_REACHABLE_SPOT..=NUM_FISHING_SPOTS).contains(&tile)
            && !INACCESSIBLE_TILES.contains(&tile)
    }

    /// Whether the tile stands for the water under the northern bridge.
    pub fn under_bridge(tile: u16) -> bool {
        tile == UNDER_BRIDGE_TILE
    }
}

impl FeebasResolver for Feebas3 {
    fn family(&self) -> GameFamily {
        GameFamily::Gen3
    }

    fn resolve(&self, seed: u32) -> TileList {
        Self::tiles(seed as u16)
    }

    fn is_accessible(&self, tile: u16) -> bool {
        Self::accessible(tile)
    }

    fn is_under_bridge(&self, tile: u16) -> bool {
        Self::under_bridge(tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::route119;

    #[test]
    fn seed_zero() {
        assert_eq!(Feebas3::tiles(0), vec![447, 149, 291, 351, 369, 78]);
    }

    #[test]
    fn known_seeds() {
        assert_eq!(Feebas3::tiles(0x0001), vec![299, 84, 279, 219, 345, 400]);
        assert_eq!(Feebas3::tiles(0xFFFF), vec![109, 132, 61, 106, 386, 99]);
        assert_eq!(Feebas3::tiles(0x1234), vec![247, 306, 425, 132, 230, 377]);
    }

    #[test]
    fn every_seed_gives_six_reachable_spots() {
        for seed in 0..=u16::MAX {
            let tiles: TileList = Feebas3::tiles(seed);
            assert_eq!(tiles.len(), NUM_FEEBAS_TILES);
            for tile in tiles {
                assert!(
                    (FIRST_REACHABLE_SPOT..=NUM_FISHING_SPOTS).contains(&tile),
                    "seed {seed:#X} gave tile {tile}"
                );
                assert!(route119::lookup(tile).is_some());
            }
        }
    }

    #[test]
    fn accessibility() {
        assert!(Feebas3::accessible(4));
        assert!(Feebas3::accessible(447));
        assert!(!Feebas3::accessible(105));
        assert!(!Feebas3::accessible(119));
        assert!(!Feebas3::accessible(132));
        assert!(!Feebas3::accessible(133));
        assert!(!Feebas3::accessible(3));
        assert!(!Feebas3::accessible(448));
    }

    #[test]
    fn resolve_ignores_the_high_bits() {
        assert_eq!(Feebas3.resolve(0xABCD_0000), Feebas3::tiles(0));
        assert!(Feebas3.is_under_bridge(132));
        assert!(!Feebas3.is_under_bridge(133));
    }
}
