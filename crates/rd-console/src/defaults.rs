//! Built-in demo strips and asset catalog
//!
//! Five reels of extraction-shooter loadout prizes: a map, a weapon, an
//! operator, a helmet and a body armor per draw.

use rd_board::StaticCatalog;
use rd_core::RdResult;
use rd_reel::ReelStrip;

const MAPS: &[&str] = &[
    "Space Center",
    "Zero Dam",
    "Longbow Valley",
    "Brakkesh City",
    "Layali Grove",
];

const WEAPONS: &[&str] = &[
    "AKM", "M4A1", "K416", "AUG", "SCAR-H", "P90", "MP5", "SVD", "AWM", "M870",
];

const OPERATORS: &[&str] = &[
    "Gale", "Nameless", "Shepherd", "Luna", "Uluru", "Deep Blue", "Red Wolf", "Stinger",
];

const HELMETS: &[&str] = &[
    "Old Steel Helmet",
    "Security Helmet",
    "Boonie Hat",
    "D6 Tactical Helmet",
    "GN Heavy Helmet",
    "Riot Helmet",
];

const ARMOR: &[&str] = &[
    "Moto Vest",
    "Nylon Vest",
    "HT Tactical Vest",
    "Hvk-2 Plate Carrier",
    "FS Composite Armor",
    "Elite Ballistic Vest",
];

/// The five demo reels, in machine order.
pub fn default_strips() -> RdResult<Vec<ReelStrip>> {
    let sets: [&[&str]; 5] = [MAPS, WEAPONS, OPERATORS, HELMETS, ARMOR];
    sets.iter()
        .enumerate()
        .map(|(i, items)| ReelStrip::new(i as u8, items.to_vec()))
        .collect()
}

/// Catalog mapping every demo item to its asset path.
pub fn default_catalog() -> StaticCatalog {
    let mut catalog = StaticCatalog::new();
    for (category, items) in [
        ("maps", MAPS),
        ("weapons", WEAPONS),
        ("operators", OPERATORS),
        ("helmets", HELMETS),
        ("armor", ARMOR),
    ] {
        for item in items {
            catalog.insert(*item, format!("assets/{category}/{}.png", slug(item)));
        }
    }
    catalog
}

fn slug(name: &str) -> String {
    name.to_lowercase().replace([' ', '-'], "_")
}
