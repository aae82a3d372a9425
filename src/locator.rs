/*
locator.rs

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

//! Manage the state of a locator session.
//!
//! A [`FeebasLocator`] is created once for a save file, when the game version is known.
//! It reads the seed from the save region, follows the edits of the seed text, computes the
//! markers, and writes the seed back to the save region when the user commits.

use log::debug;

use crate::markers::MarkerLayout;
use crate::resolver::TileList;
use crate::seed::{self, SeedError};
use crate::version::{GameFamily, GameVersion, SeedLocation};

/// State of a locator session.
#[derive(Debug, Clone)]
pub struct FeebasLocator {
    /// Game version of the save file.
    version: GameVersion,

    /// Location of the seed in the save region.
    location: SeedLocation,

    /// Current seed.
    seed: u32,
}

impl FeebasLocator {
    /// Create a [`FeebasLocator`] object with seed `0`.
    pub fn new(version: GameVersion) -> Self {
        Self {
            version,
            location: version.seed_location(),
            seed: 0,
        }
    }

    /// Create a [`FeebasLocator`] object with the seed stored in the save region.
    ///
    /// # Errors
    ///
    /// The function returns an error when the save region is too short to contain the seed.
    pub fn from_region(version: GameVersion, region: &[u8]) -> Result<Self, SeedError> {
        let mut locator: FeebasLocator = Self::new(version);
        locator.seed = seed::read_seed(region, locator.location.offset, locator.location.width)?;
        debug!(
            "{version}: seed {} read from the save region",
            locator.seed_text()
        );
        Ok(locator)
    }

    /// Game version.
    pub fn version(&self) -> GameVersion {
        self.version
    }

    /// Game generation.
    pub fn family(&self) -> GameFamily {
        self.version.family()
    }

    /// Location of the seed in the save region.
    pub fn location(&self) -> SeedLocation {
        self.location
    }

    /// Current seed.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Current seed as displayed in the seed text box.
    pub fn seed_text(&self) -> String {
        seed::format_seed(self.seed)
    }

    /// Maximum number of characters in the seed text box.
    pub fn seed_text_max_len(&self) -> usize {
        self.location.width.max_text_len()
    }

    /// Replace the seed. The bits that do not fit in the seed width are dropped.
    pub fn set_seed(&mut self, seed: u32) {
        self.seed = self.location.width.mask(seed);
    }

    /// Replace the seed from the content of the seed text box, and return the new seed.
    ///
    /// Invalid text gives seed `0`.
    pub fn set_seed_text(&mut self, text: &str) -> u32 {
        self.seed = seed::parse_seed_text(text, self.location.width);
        debug!("Seed text {text:?} parsed as {:#X}", self.seed);
        self.seed
    }

    /// Feebas tiles for the current seed.
    pub fn tiles(&self) -> TileList {
        self.family().resolver().resolve(self.seed)
    }

    /// Markers for the current seed.
    pub fn layout(&self) -> MarkerLayout {
        MarkerLayout::new(self.family(), self.seed)
    }

    /// Write the current seed to the save region.
    ///
    /// # Errors
    ///
    /// The function returns an error when the save region is too short to contain the seed.
    /// In that case the region is not modified.
    pub fn commit(&self, region: &mut [u8]) -> Result<(), SeedError> {
        seed::write_seed(
            region,
            self.location.offset,
            self.location.width,
            self.seed,
        )?;
        debug!("{}: seed {} saved", self.version, self.seed_text());
        Ok(())
    }
}
