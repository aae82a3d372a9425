/*
mt_coronet.rs

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

//! Fishing spots of the Mt. Coronet underground lake on the Diamond, Pearl, and Platinum
//! map image.
//!
//! The lake is drawn as a grid of slightly irregular cells, so every entry carries its own
//! width and height.
//! Tile numbers are direct indexes in [`TILE_COORDINATES`].

use super::TileRect;

/// Size of the reference map image (width, height).
pub const MAP_SIZE: (u16, u16) = (425, 386);

/// Marker rectangles as `(x, y, width, height)`, indexed by tile number.
#[rustfmt::skip]
pub const TILE_COORDINATES: [(u16, u16, u16, u16); 528] = [
    (119, 35, 14, 9), (134, 35, 13, 9), (148, 35, 12, 9), (161, 35, 11, 9), (173, 35, 12, 9),
    (186, 35, 12, 9), (199, 35, 13, 9), (213, 35, 14, 9), (228, 35, 12, 9), (241, 35, 11, 9),
    (253, 35, 13, 9), (267, 35, 13, 9), (281, 35, 11, 9), (293, 35, 11, 9), (305, 35, 12, 9),
    (318, 35, 14, 9), (333, 35, 13, 9), (347, 35, 13, 9), (119, 45, 14, 9), (134, 45, 13, 9),
    (148, 45, 12, 9), (161, 45, 11, 9), (173, 45, 12, 9), (186, 45, 12, 9), (199, 45, 13, 9),
    (213, 45, 14, 9), (228, 45, 12, 9), (241, 45, 11, 9), (253, 45, 13, 9), (267, 45, 13, 9),
    (281, 45, 11, 9), (293, 45, 11, 9), (305, 45, 12, 9), (318, 45, 14, 9), (333, 45, 13, 9),
    (347, 45, 13, 9), (119, 55, 14, 8), (134, 55, 13, 8), (148, 55, 12, 8), (161, 55, 11, 8),
    (173, 55, 12, 8), (186, 55, 12, 8), (199, 55, 13, 8), (213, 55, 14, 8), (228, 55, 12, 8),
    (241, 55, 11, 8), (253, 55, 13, 8), (267, 55, 13, 8), (281, 55, 11, 8), (293, 55, 11, 8),
    (305, 55, 12, 8), (333, 55, 13, 8), (347, 55, 13, 8), (119, 64, 14, 9), (134, 64, 13, 9),
    (148, 64, 12, 9), (173, 64, 12, 9), (186, 64, 12, 9), (199, 64, 13, 9), (213, 64, 14, 9),
    (228, 64, 12, 9), (241, 64, 11, 9), (253, 64, 13, 9), (267, 64, 13, 9), (281, 64, 11, 9),
    (293, 64, 11, 9), (305, 64, 12, 9), (318, 64, 14, 9), (333, 64, 13, 9), (347, 64, 13, 9),
    (119, 74, 14, 9), (134, 74, 13, 9), (148, 74, 12, 9), (161, 74, 11, 9), (173, 74, 12, 9),
    (186, 74, 12, 9), (199, 74, 13, 9), (213, 74, 14, 9), (228, 74, 12, 9), (241, 74, 11, 9),
    (253, 74, 13, 9), (267, 74, 13, 9), (281, 74, 11, 9), (293, 74, 11, 9), (305, 74, 12, 9),
    (318, 74, 14, 9), (333, 74, 13, 9), (347, 74, 13, 9), (119, 84, 14, 9), (134, 84, 13, 9),
    (148, 84, 12, 9), (161, 84, 11, 9), (173, 84, 12, 9), (186, 84, 12, 9), (199, 84, 13, 9),
    (213, 84, 14, 9), (228, 84, 12, 9), (241, 84, 11, 9), (253, 84, 13, 9), (267, 84, 13, 9),
    (281, 84, 11, 9), (293, 84, 11, 9), (305, 84, 12, 9), (318, 84, 14, 9), (333, 84, 13, 9),
    (347, 84, 13, 9), (119, 94, 14, 9), (134, 94, 13, 9), (148, 94, 12, 9), (161, 94, 11, 9),
    (173, 94, 12, 9), (186, 94, 12, 9), (199, 94, 13, 9), (213, 94, 14, 9), (228, 94, 12, 9),
    (241, 94, 11, 9), (253, 94, 13, 9), (267, 94, 13, 9), (281, 94, 11, 9), (293, 94, 11, 9),
    (305, 94, 12, 9), (318, 94, 14, 9), (333, 94, 13, 9), (347, 94, 13, 9), (119, 104, 14, 10),
    (134, 104, 13, 10), (148, 104, 12, 10), (161, 104, 11, 10), (173, 104, 12, 10),
    (186, 104, 12, 10), (199, 104, 13, 10), (213, 104, 14, 10), (228, 104, 12, 10),
    (241, 104, 11, 10), (253, 104, 13, 10), (267, 104, 13, 10), (281, 104, 11, 10),
    (293, 104, 11, 10), (305, 104, 12, 10), (318, 104, 14, 10), (333, 104, 13, 10),
    (347, 104, 13, 10), (119, 115, 14, 10), (134, 115, 13, 10), (148, 115, 12, 10),
    (161, 115, 11, 10), (173, 115, 12, 10), (186, 115, 12, 10), (199, 115, 13, 10),
    (213, 115, 14, 10), (228, 115, 12, 10), (241, 115, 11, 10), (253, 115, 13, 10),
    (267, 115, 13, 10), (281, 115, 11, 10), (293, 115, 11, 10), (305, 115, 12, 10),
    (318, 115, 14, 10), (333, 115, 13, 10), (347, 115, 13, 10), (119, 126, 14, 9),
    (134, 126, 13, 9), (148, 126, 12, 9), (161, 126, 11, 9), (173, 126, 12, 9), (186, 126, 12, 9),
    (213, 126, 14, 9), (228, 126, 12, 9), (241, 126, 11, 9), (253, 126, 13, 9), (267, 126, 13, 9),
    (281, 126, 11, 9), (293, 126, 11, 9), (305, 126, 12, 9), (318, 126, 14, 9), (333, 126, 13, 9),
    (347, 126, 13, 9), (119, 136, 14, 9), (134, 136, 13, 9), (148, 136, 12, 9), (161, 136, 11, 9),
    (173, 136, 12, 9), (186, 136, 12, 9), (199, 136, 13, 9), (213, 136, 14, 9), (228, 136, 12, 9),
    (241, 136, 11, 9), (253, 136, 13, 9), (267, 136, 13, 9), (281, 136, 11, 9), (293, 136, 11, 9),
    (305, 136, 12, 9), (318, 136, 14, 9), (333, 136, 13, 9), (347, 136, 13, 9), (119, 146, 14, 9),
    (134, 146, 13, 9), (148, 146, 12, 9), (161, 146, 11, 9), (173, 146, 12, 9), (186, 146, 12, 9),
    (199, 146, 13, 9), (213, 146, 14, 9), (318, 146, 14, 9), (333, 146, 13, 9), (347, 146, 13, 9),
    (119, 156, 14, 10), (134, 156, 13, 10), (148, 156, 12, 10), (161, 156, 11, 10),
    (173, 156, 12, 10), (186, 156, 12, 10), (199, 156, 13, 10), (213, 156, 14, 10),
    (318, 156, 14, 10), (333, 156, 13, 10), (347, 156, 13, 10), (119, 167, 14, 9),
    (134, 167, 13, 9), (148, 167, 12, 9), (161, 167, 11, 9), (173, 167, 12, 9), (186, 167, 12, 9),
    (199, 167, 13, 9), (213, 167, 14, 9), (318, 167, 14, 9), (333, 167, 13, 9), (347, 167, 13, 9),
    (119, 177, 14, 9), (134, 177, 13, 9), (173, 177, 12, 9), (186, 177, 12, 9), (199, 177, 13, 9),
    (213, 177, 14, 9), (318, 177, 14, 9), (333, 177, 13, 9), (347, 177, 13, 9), (119, 187, 14, 10),
    (134, 187, 13, 10), (173, 187, 12, 10), (186, 187, 12, 10), (199, 187, 13, 10),
    (213, 187, 14, 10), (318, 187, 14, 10), (333, 187, 13, 10), (347, 187, 13, 10),
    (119, 198, 14, 10), (134, 198, 13, 10), (148, 198, 12, 10), (161, 198, 11, 10),
    (173, 198, 12, 10), (186, 198, 12, 10), (199, 198, 13, 10), (213, 198, 14, 10),
    (318, 198, 14, 10), (333, 198, 13, 10), (347, 198, 13, 10), (119, 209, 14, 10),
    (134, 209, 13, 10), (148, 209, 12, 10), (161, 209, 11, 10), (173, 209, 12, 10),
    (186, 209, 12, 10), (199, 209, 13, 10), (213, 209, 14, 10), (318, 209, 14, 10),
    (333, 209, 13, 10), (347, 209, 13, 10), (119, 220, 14, 9), (134, 220, 13, 9), (148, 220, 12, 9),
    (161, 220, 11, 9), (173, 220, 12, 9), (186, 220, 12, 9), (199, 220, 13, 9), (213, 220, 14, 9),
    (228, 220, 12, 9), (241, 220, 11, 9), (253, 220, 13, 9), (267, 220, 13, 9), (305, 220, 12, 9),
    (318, 220, 14, 9), (333, 220, 13, 9), (347, 220, 13, 9), (119, 230, 14, 10), (134, 230, 13, 10),
    (148, 230, 12, 10), (161, 230, 11, 10), (173, 230, 12, 10), (186, 230, 12, 10),
    (199, 230, 13, 10), (213, 230, 14, 10), (228, 230, 12, 10), (241, 230, 11, 10),
    (253, 230, 13, 10), (267, 230, 13, 10), (305, 230, 12, 10), (318, 230, 14, 10),
    (333, 230, 13, 10), (347, 230, 13, 10), (119, 241, 14, 9), (134, 241, 13, 9), (148, 241, 12, 9),
    (161, 241, 11, 9), (173, 241, 12, 9), (186, 241, 12, 9), (199, 241, 13, 9), (213, 241, 14, 9),
    (228, 241, 12, 9), (241, 241, 11, 9), (253, 241, 13, 9), (267, 241, 13, 9), (281, 241, 11, 9),
    (293, 241, 11, 9), (305, 241, 12, 9), (318, 241, 14, 9), (333, 241, 13, 9), (347, 241, 13, 9),
    (119, 251, 14, 8), (134, 251, 13, 8), (148, 251, 12, 8), (161, 251, 11, 8), (173, 251, 12, 8),
    (186, 251, 12, 8), (199, 251, 13, 8), (213, 251, 14, 8), (228, 251, 12, 8), (241, 251, 11, 8),
    (253, 251, 13, 8), (267, 251, 13, 8), (281, 251, 11, 8), (293, 251, 11, 8), (305, 251, 12, 8),
    (318, 251, 14, 8), (333, 251, 13, 8), (347, 251, 13, 8), (119, 260, 14, 9), (134, 260, 13, 9),
    (148, 260, 12, 9), (161, 260, 11, 9), (173, 260, 12, 9), (186, 260, 12, 9), (199, 260, 13, 9),
    (213, 260, 14, 9), (228, 260, 12, 9), (241, 260, 11, 9), (253, 260, 13, 9), (267, 260, 13, 9),
    (281, 260, 11, 9), (333, 260, 13, 9), (347, 260, 13, 9), (119, 270, 14, 9), (134, 270, 13, 9),
    (148, 270, 12, 9), (161, 270, 11, 9), (173, 270, 12, 9), (186, 270, 12, 9), (199, 270, 13, 9),
    (213, 270, 14, 9), (228, 270, 12, 9), (241, 270, 11, 9), (253, 270, 13, 9), (267, 270, 13, 9),
    (281, 270, 11, 9), (333, 270, 13, 9), (347, 270, 13, 9), (119, 280, 14, 9), (134, 280, 13, 9),
    (148, 280, 12, 9), (161, 280, 11, 9), (173, 280, 12, 9), (186, 280, 12, 9), (199, 280, 13, 9),
    (213, 280, 14, 9), (228, 280, 12, 9), (241, 280, 11, 9), (253, 280, 13, 9), (267, 280, 13, 9),
    (281, 280, 11, 9), (333, 280, 13, 9), (347, 280, 13, 9), (119, 290, 14, 9), (134, 290, 13, 9),
    (148, 290, 12, 9), (161, 290, 11, 9), (173, 290, 12, 9), (186, 290, 12, 9), (199, 290, 13, 9),
    (213, 290, 14, 9), (228, 290, 12, 9), (241, 290, 11, 9), (253, 290, 13, 9), (267, 290, 13, 9),
    (281, 290, 11, 9), (293, 290, 11, 9), (305, 290, 12, 9), (318, 290, 14, 9), (333, 290, 13, 9),
    (347, 290, 13, 9), (119, 300, 14, 10), (134, 300, 13, 10), (148, 300, 12, 10),
    (161, 300, 11, 10), (173, 300, 12, 10), (186, 300, 12, 10), (199, 300, 13, 10),
    (213, 300, 14, 10), (228, 300, 12, 10), (241, 300, 11, 10), (267, 300, 13, 10),
    (281, 300, 11, 10), (293, 300, 11, 10), (305, 300, 12, 10), (318, 300, 14, 10),
    (333, 300, 13, 10), (347, 300, 13, 10), (119, 311, 14, 9), (134, 311, 13, 9), (148, 311, 12, 9),
    (199, 311, 13, 9), (213, 311, 14, 9), (228, 311, 12, 9), (241, 311, 11, 9), (253, 311, 13, 9),
    (267, 311, 13, 9), (281, 311, 11, 9), (293, 311, 11, 9), (305, 311, 12, 9), (318, 311, 14, 9),
    (333, 311, 13, 9), (347, 311, 13, 9), (119, 321, 14, 10), (134, 321, 13, 10),
    (148, 321, 12, 10), (199, 321, 13, 10), (213, 321, 14, 10), (228, 321, 12, 10),
    (241, 321, 11, 10), (253, 321, 13, 10), (267, 321, 13, 10), (281, 321, 11, 10),
    (293, 321, 11, 10), (305, 321, 12, 10), (318, 321, 14, 10), (333, 321, 13, 10),
    (347, 321, 13, 10), (119, 332, 14, 9), (134, 332, 13, 9), (148, 332, 12, 9), (199, 332, 13, 9),
    (213, 332, 14, 9), (228, 332, 12, 9), (241, 332, 11, 9), (253, 332, 13, 9), (267, 332, 13, 9),
    (305, 332, 12, 9), (318, 332, 14, 9), (333, 332, 13, 9), (347, 332, 13, 9), (119, 342, 14, 9),
    (134, 342, 13, 9), (148, 342, 12, 9), (161, 342, 11, 9), (173, 342, 12, 9), (186, 342, 12, 9),
    (199, 342, 13, 9), (213, 342, 14, 9), (228, 342, 12, 9), (241, 342, 11, 9), (253, 342, 13, 9),
    (267, 342, 13, 9), (305, 342, 12, 9), (318, 342, 14, 9), (333, 342, 13, 9), (347, 342, 13, 9),
    (119, 352, 14, 9), (134, 352, 13, 9), (161, 352, 11, 9), (173, 352, 12, 9), (186, 352, 12, 9),
    (199, 352, 13, 9), (213, 352, 14, 9), (228, 352, 12, 9), (241, 352, 11, 9), (253, 352, 13, 9),
    (267, 352, 13, 9), (281, 352, 11, 9), (293, 352, 11, 9), (305, 352, 12, 9), (318, 352, 14, 9),
    (333, 352, 13, 9), (347, 352, 13, 9), (119, 362, 14, 9), (134, 362, 13, 9), (148, 362, 12, 9),
    (161, 362, 11, 9), (173, 362, 12, 9), (186, 362, 12, 9), (199, 362, 13, 9), (213, 362, 14, 9),
    (228, 362, 12, 9), (241, 362, 11, 9), (253, 362, 13, 9), (267, 362, 13, 9), (281, 362, 11, 9),
    (293, 362, 11, 9), (305, 362, 12, 9), (318, 362, 14, 9), (333, 362, 13, 9), (347, 362, 13, 9),
    (119, 372, 14, 10), (134, 372, 13, 10), (148, 372, 12, 10), (161, 372, 11, 10),
    (173, 372, 12, 10), (186, 372, 12, 10), (199, 372, 13, 10), (213, 372, 14, 10),
    (228, 372, 12, 10), (241, 372, 11, 10), (253, 372, 13, 10), (267, 372, 13, 10),
    (281, 372, 11, 10), (293, 372, 11, 10), (305, 372, 12, 10), (318, 372, 14, 10),
    (333, 372, 13, 10), (347, 372, 13, 10),
];

/// Return the marker rectangle for the given tile, or `None` when the tile is not on the map.
pub fn lookup(tile: u16) -> Option<TileRect> {
    TILE_COORDINATES
        .get(usize::from(tile))
        .map(|&(x, y, width, height)| TileRect::new(x, y, width, height))
}
