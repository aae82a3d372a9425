/*
cli_options.rs

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

//! Process command-line options.
//!
//! The command line replaces the save editor that hosts the locator: the game version is
//! given with `--game`, and the seed either comes from a raw save region file (`--region`)
//! or from the `--seed` option.
//!
//! # Examples
//!
//! List the supported games:
//!
//! ```
//! $ feebas-locator --ls
//! Generation 3 - Route 119
//!   ruby            Ruby             offset 0x2DD6  16 bits
//!   ...
//! ```
//!
//! Show the Feebas tiles for an Emerald seed:
//!
//! ```
//! $ feebas-locator -g emerald -s 0
//! Emerald (Generation 3) - Route 119
//! Seed: 0
//!   Tile 447  (129, 1521)  15x15
//!   Tile 149  (513, 481)  15x15
//!   ...
//! ```
//!
//! Change the seed stored in a Platinum general block:
//!
//! ```
//! $ feebas-locator -g platinum -r general.bin -s 1234ABCD -w
//! ```

use clap::{Parser, ValueEnum};
use log::debug;
use rand::Rng;
use std::env;
use std::path::PathBuf;

use feebas_locator::locator::FeebasLocator;
use feebas_locator::markers::{MapInfo, MarkerKind, MarkerLayout};
use feebas_locator::saver::region::SaverRegion;
use feebas_locator::tiles::TileRect;
use feebas_locator::version::{GameFamily, GameVersion, SeedLocation};

/// Locate the Feebas fishing tiles.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// List the supported game versions
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Game version of the save file
    #[arg(value_enum, short, long, required_unless_present = "ls")]
    game: Option<GameVersion>,

    /// Feebas seed, in hexadecimal
    #[arg(short, long, conflicts_with = "random")]
    seed: Option<String>,

    /// Use a random seed
    #[arg(long, default_value_t = false)]
    random: bool,

    /// Raw save region file to read the seed from
    #[arg(short, long)]
    region: Option<PathBuf>,

    /// Write the seed to the save region file
    #[arg(short, long, default_value_t = false, requires = "region")]
    write: bool,

    /// Print the markers in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the game versions
    //
    if args.ls {
        list_versions();
        return 0;
    }

    let Some(version) = args.game else {
        eprintln!("Missing game version. Use --ls to list the available versions.");
        return 1;
    };

    //
    // Load the save region and create the locator
    //
    let saver: Option<SaverRegion> = args.region.map(SaverRegion::new);
    let mut region: Option<Vec<u8>> = None;
    if let Some(s) = &saver {
        match s.load() {
            Ok(r) => region = Some(r),
            Err(e) => {
                eprintln!("Error: cannot read {}: {e}", s.path().display());
                return 1;
            }
        }
    }

    let mut locator: FeebasLocator = match &region {
        Some(r) => match FeebasLocator::from_region(version, r) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        },
        None => FeebasLocator::new(version),
    };

    if let Some(text) = &args.seed {
        locator.set_seed_text(text);
    } else if args.random {
        let max: u32 = locator.location().width.max_value();
        locator.set_seed(rand::rng().random_range(0..=max));
        debug!("Random seed {}", locator.seed_text());
    }

    //
    // Print the markers
    //
    let layout: MarkerLayout = locator.layout();
    if args.json {
        match serde_json::to_string_pretty(&layout) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
    } else {
        print_layout(version, &layout);
    }

    //
    // Save the seed
    //
    if args.write
        && let (Some(s), Some(r)) = (&saver, region.as_mut())
    {
        if let Err(e) = locator.commit(r) {
            eprintln!("Error: {e}");
            return 1;
        }
        if let Err(e) = s.save(r) {
            eprintln!("Error: cannot write {}: {e}", s.path().display());
            return 1;
        }
        if !args.json {
            println!(
                "Seed {} saved to {}",
                locator.seed_text(),
                s.path().display()
            );
        }
    }
    0
}

/// Print the game versions, grouped by generation.
fn list_versions() {
    for family in (0..=u8::MAX).filter_map(GameFamily::from_generation) {
        println!("{family} - {}", MapInfo::for_family(family).location);
        for version in family.versions() {
            let name: String = version
                .to_possible_value()
                .map(|v| v.get_name().to_string())
                .unwrap_or_default();
            let location: SeedLocation = version.seed_location();
            println!(
                "  {name:<15} {:<16} offset {:#06X}  {} bits",
                version.to_string(),
                location.offset,
                location.width.bytes() * 8
            );
        }
    }
}

/// Print the markers in text format.
fn print_layout(version: GameVersion, layout: &MarkerLayout) {
    println!("{version} ({}) - {}", layout.family, layout.map.location);
    println!("Seed: {:X}", layout.seed);

    for marker in layout.markers.iter().filter(|m| m.kind == MarkerKind::Tile) {
        let r: TileRect = marker.rect;
        let mut notes: Vec<&str> = Vec::new();
        if !marker.visible {
            notes.push("not accessible");
        }
        if layout
            .markers
            .iter()
            .any(|m| m.kind == MarkerKind::UnderBridge && m.tile == marker.tile)
        {
            notes.push("under the bridge");
        }
        let line: String = format!(
            "  Tile {:<4} ({}, {})  {}x{}  {}",
            marker.tile,
            r.x,
            r.y,
            r.width,
            r.height,
            notes.join(", ")
        );
        println!("{}", line.trim_end());
    }

    let bridge: Vec<String> = layout
        .under_bridge_markers()
        .map(|m| format!("({}, {})", m.rect.x, m.rect.y))
        .collect();
    if !bridge.is_empty() {
        println!("  Under the bridge: {}", bridge.join(" "));
    }
}
