use crate::model::CreatureRecord;
use rand::Rng;

/// Train a team member toward its species maximum.
///
/// The increase is uniform in `[0, max_cp - cp]` inclusive and is returned
/// so the caller can report it. A member already at (or somehow above) the
/// maximum saturates to a zero-width range instead of crashing.
pub fn train(member: &mut CreatureRecord, max_cp: u32, rng: &mut impl Rng) -> u32 {
    let headroom = max_cp.saturating_sub(member.cp);
    let increase = rng.gen_range(0..=headroom);
    member.cp += increase;
    increase
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rarity;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn member(cp: u32) -> CreatureRecord {
        CreatureRecord::new(1, "Rattata", cp, Rarity::Common)
    }

    #[test]
    fn training_stays_within_bounds() {
        let mut rng = SmallRng::seed_from_u64(3);
        for seed_round in 0..100 {
            let mut record = member(200 + seed_round);
            let before = record.cp;
            let gained = train(&mut record, 500, &mut rng);
            assert_eq!(record.cp, before + gained);
            assert!(record.cp >= before);
            assert!(record.cp <= 500);
        }
    }

    #[test]
    fn training_at_max_is_a_no_op() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut record = member(500);
        assert_eq!(train(&mut record, 500, &mut rng), 0);
        assert_eq!(record.cp, 500);
    }

    #[test]
    fn training_above_max_does_not_panic() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut record = member(600);
        assert_eq!(train(&mut record, 500, &mut rng), 0);
        assert_eq!(record.cp, 600);
    }
}
