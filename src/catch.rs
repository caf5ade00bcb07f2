use crate::model::{CreatureRecord, Rarity};
use crate::pokedex::Pokedex;
use rand::Rng;

/// Inclusive bounds of the CP attenuation roll applied to a fresh catch.
pub const ATTENUATION_MIN: u32 = 30;
pub const ATTENUATION_MAX: u32 = 50;

/// CP after attenuating a species maximum by `reduction_pct` percent,
/// rounding down. Widened intermediate so large species maxima cannot
/// overflow the multiply.
pub fn attenuated_cp(max_cp: u32, reduction_pct: u32) -> u32 {
    (max_cp as u64 * (100 - reduction_pct) as u64 / 100) as u32
}

/// Try to catch a creature of the given rarity.
///
/// A roll in `[0, 100)` must land under the rarity's catch chance; on
/// success one species of that rarity is picked uniformly and returned as a
/// fresh copy with attenuated CP. A rarity with no catalog entries is an
/// automatic failure rather than an out-of-range draw.
pub fn attempt_catch(
    rarity: Rarity,
    dex: &Pokedex,
    rng: &mut impl Rng,
) -> Option<CreatureRecord> {
    if rng.gen_range(0..100) >= rarity.catch_chance() {
        return None;
    }
    let count = dex.count_rarity(rarity);
    if count == 0 {
        return None;
    }
    let pick = rng.gen_range(0..count);
    let species = dex.nth_of_rarity(rarity, pick)?;
    let reduction = rng.gen_range(ATTENUATION_MIN..=ATTENUATION_MAX);
    let mut caught = species.clone();
    caught.cp = attenuated_cp(species.cp, reduction);
    Some(caught)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn attenuation_uses_floor_division() {
        assert_eq!(attenuated_cp(1000, 40), 600);
        assert_eq!(attenuated_cp(999, 30), 699);
        assert_eq!(attenuated_cp(0, 50), 0);
    }

    #[test]
    fn attenuation_handles_large_species_max() {
        assert_eq!(attenuated_cp(100_000_000, 40), 60_000_000);
        assert_eq!(attenuated_cp(u32::MAX, 30), (u32::MAX as u64 * 70 / 100) as u32);
    }

    #[test]
    fn catching_a_large_max_cp_species_does_not_overflow() {
        let dex = Pokedex::parse("1 Whale 100000000 1");
        let mut rng = SmallRng::seed_from_u64(11);
        let caught = std::iter::repeat_with(|| attempt_catch(Rarity::Common, &dex, &mut rng))
            .take(200)
            .flatten()
            .next()
            .expect("45% catch rate should succeed within 200 tries");
        assert!(caught.cp >= attenuated_cp(100_000_000, ATTENUATION_MAX));
        assert!(caught.cp <= attenuated_cp(100_000_000, ATTENUATION_MIN));
    }

    #[test]
    fn empty_rarity_is_an_automatic_failure() {
        let dex = Pokedex::parse("1 Rattata 500 1");
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..200 {
            assert!(attempt_catch(Rarity::UltraRare, &dex, &mut rng).is_none());
        }
    }

    #[test]
    fn empty_pokedex_never_panics() {
        let dex = Pokedex::default();
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..200 {
            assert!(attempt_catch(Rarity::Common, &dex, &mut rng).is_none());
        }
    }

    #[test]
    fn successful_catch_is_attenuated_copy() {
        let dex = Pokedex::parse("1 Rattata 500 1 2 Mewtwo 4000 3");
        let mut rng = SmallRng::seed_from_u64(7);
        let caught = std::iter::repeat_with(|| attempt_catch(Rarity::Common, &dex, &mut rng))
            .take(200)
            .flatten()
            .next()
            .expect("45% catch rate should succeed within 200 tries");
        assert_eq!(caught.name, "Rattata");
        assert_eq!(caught.species_number, 1);
        assert_eq!(caught.rarity, Rarity::Common);
        // r in [30, 50] keeps the copy inside 50-70% of the species max.
        assert!(caught.cp >= attenuated_cp(500, ATTENUATION_MAX));
        assert!(caught.cp <= attenuated_cp(500, ATTENUATION_MIN));
        // The catalog entry itself is untouched.
        assert_eq!(dex.get(0).unwrap().cp, 500);
    }

    #[test]
    fn selection_covers_all_species_of_the_rarity() {
        let dex = Pokedex::parse("1 Rattata 500 1 2 Pidgey 700 1 3 Mewtwo 4000 3");
        let mut rng = SmallRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            if let Some(caught) = attempt_catch(Rarity::Common, &dex, &mut rng) {
                seen.insert(caught.name);
            }
        }
        assert!(seen.contains("Rattata") && seen.contains("Pidgey"));
        assert!(!seen.contains("Mewtwo"));
    }
}
