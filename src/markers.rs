/*
markers.rs

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

//! Place the markers of the Feebas tiles on the reference map.
//!
//! A [`MarkerLayout`] is everything a front-end needs to draw the result of a resolution:
//! the map to display, and one [`Marker`] per Feebas tile.
//! Markers of tiles that cannot be fished are kept in the layout but hidden.
//!
//! When a Route 119 tile stands for the water under the northern bridge, the layout also
//! contains one [`MarkerKind::UnderBridge`] marker for each of the ten surface tiles under
//! the bridge.
//! These markers are added once, even when the tile is drawn several times.

use log::debug;
use serde::Serialize;

use crate::resolver::{FeebasResolver, TileList};
use crate::tiles::{TileRect, mt_coronet, route119};
use crate::version::GameFamily;

/// Maximum number of tile markers in a layout.
pub const MAX_MARKERS: usize = 6;

/// Reference map of a game generation.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct MapInfo {
    /// Name of the location where Feebas lives.
    pub location: &'static str,

    /// Name of the map image resource.
    pub image: &'static str,

    /// Image width in pixels.
    pub width: u16,

    /// Image height in pixels.
    pub height: u16,
}

impl MapInfo {
    /// Return the map for the game generation.
    pub fn for_family(family: GameFamily) -> Self {
        match family {
            GameFamily::Gen3 => Self {
                location: "Route 119",
                image: "route119",
                width: route119::MAP_SIZE.0,
                height: route119::MAP_SIZE.1,
            },
            GameFamily::Gen4 => Self {
                location: "Mt. Coronet",
                image: "mtcoronet",
                width: mt_coronet::MAP_SIZE.0,
                height: mt_coronet::MAP_SIZE.1,
            },
        }
    }
}

/// Type of marker.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// Marker of a Feebas tile.
    Tile,

    /// Marker of a surface tile under the bridge of Route 119.
    UnderBridge,
}

/// Marker on the map.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Widget name, such as `Marker0` or `MarkerUnderBridge3`.
    pub name: String,

    /// Feebas tile that the marker represents.
    pub tile: u16,

    /// Type of marker.
    pub kind: MarkerKind,

    /// Position and size of the marker.
    pub rect: TileRect,

    /// Whether the marker must be drawn.
    pub visible: bool,
}

/// Result of a resolution, ready to be drawn.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MarkerLayout {
    /// Game generation.
    pub family: GameFamily,

    /// Map to draw the markers on.
    pub map: MapInfo,

    /// Seed used for the resolution.
    pub seed: u32,

    /// Feebas tiles in the order the game draws them.
    pub tiles: TileList,

    /// Markers, tile markers first.
    pub markers: Vec<Marker>,
}

impl MarkerLayout {
    /// Resolve the seed and place the markers.
    pub fn new(family: GameFamily, seed: u32) -> Self {
        let resolver: &dyn FeebasResolver = family.resolver();
        let seed: u32 = family.seed_width().mask(seed);
        let tiles: TileList = resolver.resolve(seed);
        let mut markers: Vec<Marker> = Vec::with_capacity(MAX_MARKERS);
        let mut under_bridge: Option<u16> = None;

        for (i, &tile) in tiles.iter().take(MAX_MARKERS).enumerate() {
            let Some(rect) = resolver.lookup(tile) else {
                debug!("Tile {tile} is not on the {family} map, no marker");
                continue;
            };
            markers.push(Marker {
                name: format!("Marker{i}"),
                tile,
                kind: MarkerKind::Tile,
                rect,
                visible: resolver.is_accessible(tile),
            });
            if resolver.is_under_bridge(tile) {
                under_bridge = Some(tile);
            }
        }

        if let Some(tile) = under_bridge {
            debug!("Tile {tile} is under the bridge, marking the surface tiles");
            markers.extend(
                route119::under_bridge()
                    .enumerate()
                    .map(|(i, rect)| Marker {
                        name: format!("MarkerUnderBridge{i}"),
                        tile,
                        kind: MarkerKind::UnderBridge,
                        rect,
                        visible: true,
                    }),
            );
        }

        Self {
            family,
            map: MapInfo::for_family(family),
            seed,
            tiles,
            markers,
        }
    }

    /// Markers that must be drawn.
    pub fn visible_markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(|m| m.visible)
    }

    /// Markers for the water under the bridge.
    pub fn under_bridge_markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers
            .iter()
            .filter(|m| m.kind == MarkerKind::UnderBridge)
    }
}
