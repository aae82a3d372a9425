/*
route119.rs

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

//! Fishing spots of Route 119 on the Ruby, Sapphire, and Emerald map image.
//!
//! The game numbers the water tiles of the route from 1 to 447.
//! Spots 1 to 3 are never selected, so the table starts at spot [`FIRST_TILE`].
//! Every marker is [`TILE_SIZE`] pixels wide and high.

use super::TileRect;

/// Tile number of the first entry in [`TILE_COORDINATES`].
pub const FIRST_TILE: u16 = 4;

/// Width and height of the markers.
pub const TILE_SIZE: u16 = 15;

/// Size of the reference map image (width, height).
pub const MAP_SIZE: (u16, u16) = (641, 1553);

/// Surface tiles under the northern bridge.
///
/// The game cannot tell these tiles apart and reports all of them as the same tile number.
#[rustfmt::skip]
pub const UNDER_BRIDGE_COORDINATES: [(u16, u16); 10] = [
    (257, 257), (273, 257), (289, 257), (305, 257), (321, 257),
    (257, 273), (273, 273), (289, 273), (305, 273), (321, 273),
];

/// Top left corner of the tiles, indexed by `tile - FIRST_TILE`.
#[rustfmt::skip]
pub const TILE_COORDINATES: [(u16, u16); 444] = [
    (289, 17), (289, 33), (305, 33), (257, 49), (273, 49), (289, 49), (305, 49), (273, 65),
    (289, 65), (305, 65), (273, 81), (289, 81), (305, 81), (273, 97), (289, 97), (305, 97),
    (273, 113), (289, 113), (305, 113), (273, 193), (289, 193), (305, 193), (273, 209), (289, 209),
    (305, 209), (257, 225), (273, 225), (289, 225), (305, 225), (321, 225), (257, 241), (273, 241),
    (289, 241), (305, 241), (321, 241), (257, 289), (273, 289), (289, 289), (305, 289), (321, 289),
    (257, 305), (273, 305), (289, 305), (305, 305), (321, 305), (257, 321), (273, 321), (289, 321),
    (305, 321), (321, 321), (257, 337), (273, 337), (289, 337), (305, 337), (321, 337), (337, 337),
    (353, 337), (257, 353), (273, 353), (289, 353), (305, 353), (321, 353), (337, 353), (353, 353),
    (257, 369), (273, 369), (289, 369), (305, 369), (321, 369), (337, 369), (353, 369), (257, 385),
    (273, 385), (289, 385), (305, 385), (321, 385), (337, 385), (353, 385), (257, 401), (273, 401),
    (289, 401), (305, 401), (321, 401), (337, 401), (353, 401), (369, 401), (257, 417), (273, 417),
    (289, 417), (305, 417), (321, 417), (337, 417), (353, 417), (369, 417), (385, 417), (401, 417),
    (417, 417), (433, 417), (449, 417), (465, 417), (481, 417), (305, 433), (321, 433), (337, 433),
    (353, 433), (369, 433), (385, 433), (401, 433), (417, 433), (433, 433), (449, 433), (465, 433),
    (481, 433), (497, 433), (513, 433), (321, 449), (337, 449), (353, 449), (369, 449), (385, 449),
    (401, 449), (417, 449), (433, 449), (449, 449), (465, 449), (481, 449), (497, 449), (513, 449),
    (369, 465), (385, 465), (401, 465), (417, 465), (433, 465), (449, 465), (465, 465), (481, 465),
    (497, 465), (513, 465), (529, 465), (545, 465), (433, 481), (449, 481), (465, 481), (481, 481),
    (497, 481), (513, 481), (529, 481), (545, 481), (481, 497), (497, 497), (513, 497), (529, 497),
    (545, 497), (497, 513), (513, 513), (529, 513), (545, 513), (561, 513), (497, 529), (513, 529),
    (529, 529), (497, 545), (513, 545), (529, 545), (497, 561), (513, 561), (529, 561), (545, 561),
    (561, 561), (497, 577), (513, 577), (529, 577), (545, 577), (561, 577), (529, 593), (545, 593),
    (561, 593), (529, 609), (545, 609), (561, 609), (497, 625), (513, 625), (529, 625), (545, 625),
    (561, 625), (497, 641), (513, 641), (529, 641), (545, 641), (561, 641), (481, 657), (497, 657),
    (513, 657), (529, 657), (545, 657), (561, 657), (433, 673), (449, 673), (465, 673), (481, 673),
    (497, 673), (513, 673), (529, 673), (545, 673), (417, 689), (433, 689), (449, 689), (465, 689),
    (481, 689), (497, 689), (513, 689), (529, 689), (417, 705), (433, 705), (449, 705), (465, 705),
    (481, 705), (497, 705), (417, 721), (433, 721), (449, 721), (465, 721), (481, 721), (497, 721),
    (417, 737), (433, 737), (449, 737), (465, 737), (481, 737), (497, 737), (513, 737), (385, 753),
    (401, 753), (417, 753), (433, 753), (449, 753), (465, 753), (385, 769), (401, 769), (417, 769),
    (433, 769), (449, 769), (353, 785), (369, 785), (385, 785), (401, 785), (417, 785), (433, 785),
    (449, 785), (353, 801), (369, 801), (385, 801), (401, 801), (417, 801), (433, 801), (449, 801),
    (353, 817), (369, 817), (385, 817), (401, 817), (417, 817), (321, 833), (337, 833), (353, 833),
    (369, 833), (385, 833), (401, 833), (417, 833), (321, 849), (337, 849), (353, 849), (369, 849),
    (385, 849), (401, 849), (321, 865), (337, 865), (353, 865), (369, 865), (385, 865), (401, 865),
    (321, 881), (337, 881), (353, 881), (369, 881), (385, 881), (401, 881), (321, 897), (337, 897),
    (353, 897), (369, 897), (337, 913), (337, 929), (337, 1057), (353, 1057), (369, 1057),
    (225, 1297), (225, 1313), (225, 1329), (241, 1329), (257, 1329), (305, 1329), (321, 1329),
    (369, 1329), (385, 1329), (225, 1345), (241, 1345), (257, 1345), (273, 1345), (289, 1345),
    (305, 1345), (321, 1345), (337, 1345), (353, 1345), (369, 1345), (385, 1345), (225, 1361),
    (241, 1361), (257, 1361), (273, 1361), (289, 1361), (305, 1361), (321, 1361), (337, 1361),
    (353, 1361), (369, 1361), (385, 1361), (225, 1377), (241, 1377), (257, 1377), (273, 1377),
    (289, 1377), (305, 1377), (321, 1377), (337, 1377), (353, 1377), (369, 1377), (385, 1377),
    (225, 1393), (241, 1393), (257, 1393), (273, 1393), (289, 1393), (305, 1393), (321, 1393),
    (337, 1393), (353, 1393), (369, 1393), (385, 1393), (401, 1393), (225, 1409), (241, 1409),
    (257, 1409), (273, 1409), (289, 1409), (305, 1409), (321, 1409), (337, 1409), (353, 1409),
    (369, 1409), (385, 1409), (401, 1409), (145, 1425), (161, 1425), (177, 1425), (193, 1425),
    (209, 1425), (225, 1425), (241, 1425), (257, 1425), (273, 1425), (289, 1425), (305, 1425),
    (321, 1425), (369, 1425), (385, 1425), (401, 1425), (113, 1441), (129, 1441), (145, 1441),
    (161, 1441), (177, 1441), (193, 1441), (209, 1441), (225, 1441), (241, 1441), (257, 1441),
    (273, 1441), (289, 1441), (305, 1441), (321, 1441), (369, 1441), (385, 1441), (401, 1441),
    (145, 1457), (161, 1457), (177, 1457), (193, 1457), (209, 1457), (225, 1457), (241, 1457),
    (257, 1457), (273, 1457), (289, 1457), (305, 1457), (321, 1457), (337, 1457), (353, 1457),
    (369, 1457), (385, 1457), (401, 1457), (145, 1473), (161, 1473), (177, 1473), (193, 1473),
    (209, 1473), (225, 1473), (241, 1473), (257, 1473), (273, 1473), (289, 1473), (305, 1473),
    (321, 1473), (337, 1473), (353, 1473), (369, 1473), (129, 1489), (145, 1489), (161, 1489),
    (177, 1489), (193, 1489), (209, 1489), (225, 1489), (241, 1489), (257, 1489), (273, 1489),
    (289, 1489), (305, 1489), (129, 1505), (145, 1505), (161, 1505), (177, 1505), (193, 1505),
    (113, 1521), (129, 1521),
];

/// Return the marker rectangle for the given tile, or `None` when the tile is not on the map.
pub fn lookup(tile: u16) -> Option<TileRect> {
    let index: usize = usize::from(tile.checked_sub(FIRST_TILE)?);
    TILE_COORDINATES
        .get(index)
        .map(|&(x, y)| TileRect::new(x, y, TILE_SIZE, TILE_SIZE))
}

/// Return the marker rectangles of the tiles under the northern bridge.
pub fn under_bridge() -> impl Iterator<Item = TileRect> {
    UNDER_BRIDGE_COORDINATES
        .iter()
        .map(|&(x, y)| TileRect::new(x, y, TILE_SIZE, TILE_SIZE))
}
