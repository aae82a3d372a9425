/*
lib.rs

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

//! Locate the Feebas fishing tiles from the seed stored in a Pokémon save file.
//!
//! Feebas can only be fished on a handful of water tiles, which the game derives from a
//! seed stored in the save file:
//!
//! * In Ruby, Sapphire, and Emerald, a 16-bit seed selects six of the 447 fishing spots of
//!   Route 119.
//! * In Diamond, Pearl, and Platinum, a 32-bit seed selects four of the 528 fishing spots of
//!   the Mt. Coronet underground lake.
//!
//! The [`version::GameVersion`] of the save file gives the location of the seed and the
//! [`version::GameFamily`], which provides the [`resolver::FeebasResolver`] for the
//! generation.
//! The resolver turns the seed into a [`resolver::TileList`], and [`tiles`] gives the
//! position of each tile on the reference map image.
//! [`markers::MarkerLayout`] combines both into the list of markers to draw, and
//! [`locator::FeebasLocator`] keeps the state of a session on a save region.
//!
//! # Examples
//!
//! ```
//! use feebas_locator::locator::FeebasLocator;
//! use feebas_locator::version::GameVersion;
//!
//! let mut locator = FeebasLocator::new(GameVersion::Emerald);
//! locator.set_seed_text("0");
//! assert_eq!(locator.tiles(), vec![447, 149, 291, 351, 369, 78]);
//! ```

pub mod locator;
pub mod markers;
pub mod resolver;
pub mod saver;
pub mod seed;
pub mod tiles;
pub mod version;
