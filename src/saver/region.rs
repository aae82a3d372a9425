/*
region.rs

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

//! Load and store a raw save region.
//!
//! A save region is the block of the save file that contains the Feebas seed, already
//! extracted by a save editor: the large block of a Generation 3 save, or the general block
//! of a Generation 4 save.
//! The file is read and written as is, without any checksum verification.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Object to load and store a save region file.
pub struct SaverRegion {
    /// Path to the save region file.
    region_file: PathBuf,
}

impl SaverRegion {
    /// Create a [`SaverRegion`] object.
    pub fn new(region_file: PathBuf) -> Self {
        debug!("Save region file: {region_file:?}");
        Self { region_file }
    }

    /// Path to the save region file.
    pub fn path(&self) -> &Path {
        &self.region_file
    }

    /// Return the content of the save region file.
    pub fn load(&self) -> Result<Vec<u8>, Box<dyn Error>> {
        let file: File = File::open(&self.region_file)?;
        let mut reader: BufReader<File> = BufReader::new(file);
        let mut region: Vec<u8> = Vec::new();

        reader.read_to_end(&mut region)?;
        debug!("Loaded {} bytes", region.len());
        Ok(region)
    }

    /// Replace the content of the save region file.
    pub fn save(&self, region: &[u8]) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.region_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        writer.write_all(region)?;
        writer.flush()?;
        debug!("Saved {} bytes", region.len());
        Ok(())
    }
}
