/*
tiles.rs

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

//! Marker coordinates of the fishing tiles on the reference map images.
//!
//! Each game generation comes with its own map and its own tile numbering:
//!
//! * [`route119`] for Ruby, Sapphire, and Emerald.
//!   Tile numbers start at 4 and all the markers are 15x15 pixels.
//! * [`mt_coronet`] for Diamond, Pearl, and Platinum.
//!   Tile numbers are direct indexes and each marker has its own size.
//!
//! The tables are static data; [`lookup`] never fails for a tile that a resolver returns,
//! and returns `None` for anything else.

pub mod mt_coronet;
pub mod route119;

use serde::{Deserialize, Serialize};

use crate::version::GameFamily;

/// Marker position and size on a reference map image, in pixels.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TileRect {
    /// Left side of the marker.
    pub x: u16,

    /// Top side of the marker.
    pub y: u16,

    /// Marker width.
    pub width: u16,

    /// Marker height.
    pub height: u16,
}

impl TileRect {
    /// Create a [`TileRect`] object.
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Return the marker rectangle of the tile for the given game generation.
pub fn lookup(family: GameFamily, tile: u16) -> Option<TileRect> {
    match family {
        GameFamily::Gen3 => route119::lookup(tile),
        GameFamily::Gen4 => mt_coronet::lookup(tile),
    }
}
