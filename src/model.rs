use serde::{Deserialize, Serialize};

/// Catch difficulty class of a species, fixed at load time.
///
/// The numeric tiers 1-3 from the data file map onto the three variants;
/// anything else is rejected by the loader.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    UltraRare,
}

impl Rarity {
    pub fn from_tier(tier: u32) -> Option<Rarity> {
        match tier {
            1 => Some(Rarity::Common),
            2 => Some(Rarity::Uncommon),
            3 => Some(Rarity::UltraRare),
            _ => None,
        }
    }

    pub fn tier(self) -> u32 {
        match self {
            Rarity::Common => 1,
            Rarity::Uncommon => 2,
            Rarity::UltraRare => 3,
        }
    }

    /// Catch probability in percentage points out of 100.
    pub fn catch_chance(self) -> u32 {
        match self {
            Rarity::Common => 45,
            Rarity::Uncommon => 25,
            Rarity::UltraRare => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::UltraRare => "Ultra Rare",
        }
    }
}

/// A single creature instance.
///
/// Catalog entries hold the species maximum CP and never change after load.
/// Team members are independent copies whose `cp` moves with training,
/// catch attenuation, and battle losses.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CreatureRecord {
    /// 1-based species number; `catalog[i].species_number == i + 1`.
    pub species_number: u32,
    pub name: String,
    pub cp: u32,
    pub rarity: Rarity,
}

impl CreatureRecord {
    pub fn new(species_number: u32, name: impl Into<String>, cp: u32, rarity: Rarity) -> Self {
        Self {
            species_number,
            name: name.into(),
            cp,
            rarity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_tier_roundtrip() {
        for tier in 1..=3 {
            let rarity = Rarity::from_tier(tier).expect("tiers 1-3 are valid");
            assert_eq!(rarity.tier(), tier);
        }
        assert_eq!(Rarity::from_tier(0), None);
        assert_eq!(Rarity::from_tier(4), None);
    }

    #[test]
    fn labels_match_menu_wording() {
        assert_eq!(Rarity::Common.label(), "Common");
        assert_eq!(Rarity::Uncommon.label(), "Uncommon");
        assert_eq!(Rarity::UltraRare.label(), "Ultra Rare");
    }

    #[test]
    fn catch_chances_match_config() {
        assert_eq!(Rarity::Common.catch_chance(), 45);
        assert_eq!(Rarity::Uncommon.catch_chance(), 25);
        assert_eq!(Rarity::UltraRare.catch_chance(), 1);
    }
}
