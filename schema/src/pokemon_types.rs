use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Genderless,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Genderless => "Genderless",
        };
        write!(f, "{}", display_name)
    }
}

/// Held items and evolution stones the rule engine can test against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    // Evolution stones
    FireStone,
    WaterStone,
    ThunderStone,
    LeafStone,
    MoonStone,
    SunStone,
    DawnStone,
    DuskStone,
    ShinyStone,
    // Held items consumed by trade or level-up evolutions
    MetalCoat,
    DragonScale,
    KingsRock,
    RazorFang,
    RazorClaw,
    OvalStone,
    Everstone,
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Item::FireStone => "Fire Stone",
            Item::WaterStone => "Water Stone",
            Item::ThunderStone => "Thunder Stone",
            Item::LeafStone => "Leaf Stone",
            Item::MoonStone => "Moon Stone",
            Item::SunStone => "Sun Stone",
            Item::DawnStone => "Dawn Stone",
            Item::DuskStone => "Dusk Stone",
            Item::ShinyStone => "Shiny Stone",
            Item::MetalCoat => "Metal Coat",
            Item::DragonScale => "Dragon Scale",
            Item::KingsRock => "King's Rock",
            Item::RazorFang => "Razor Fang",
            Item::RazorClaw => "Razor Claw",
            Item::OvalStone => "Oval Stone",
            Item::Everstone => "Everstone",
        };
        write!(f, "{}", display_name)
    }
}

/// The handful of moves that gate a known-move evolution, plus common
/// filler moves used by movesets in tests and the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rollout,
    AncientPower,
    Mimic,
    Tackle,
    Harden,
    StringShot,
    Scratch,
    Pound,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Move::Rollout => "Rollout",
            Move::AncientPower => "Ancient Power",
            Move::Mimic => "Mimic",
            Move::Tackle => "Tackle",
            Move::Harden => "Harden",
            Move::StringShot => "String Shot",
            Move::Scratch => "Scratch",
            Move::Pound => "Pound",
        };
        write!(f, "{}", display_name)
    }
}
