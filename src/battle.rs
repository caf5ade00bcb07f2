use crate::model::CreatureRecord;
use crate::pokedex::Pokedex;
use rand::Rng;

/// Flat CP bonus added to the top of the opponent roll range.
pub const ENEMY_BONUS: u32 = 200;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BattleOutcome {
    Win,
    Loss,
}

/// A randomly generated wild opponent.
#[derive(Clone, Debug)]
pub struct Opponent {
    pub species_number: u32,
    pub name: String,
    pub cp: u32,
}

/// Roll a wild opponent: a uniform catalog pick whose CP lands anywhere in
/// `[0, species max + ENEMY_BONUS]` inclusive. An empty catalog yields no
/// opponent.
pub fn generate_opponent(dex: &Pokedex, rng: &mut impl Rng) -> Option<Opponent> {
    if dex.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..dex.len());
    let species = dex.get(index)?;
    // Saturating keeps the roll range valid for species maxima near u32::MAX.
    let cp = rng.gen_range(0..=species.cp.saturating_add(ENEMY_BONUS));
    Some(Opponent {
        species_number: species.species_number,
        name: species.name.clone(),
        cp,
    })
}

/// Ties go to the team member.
pub fn resolve(member_cp: u32, opponent_cp: u32) -> BattleOutcome {
    if member_cp >= opponent_cp {
        BattleOutcome::Win
    } else {
        BattleOutcome::Loss
    }
}

/// Resolve a battle and apply the fainting rule: a loss zeroes the member's
/// CP but leaves it in its slot.
pub fn fight(member: &mut CreatureRecord, opponent_cp: u32) -> BattleOutcome {
    let outcome = resolve(member.cp, opponent_cp);
    if outcome == BattleOutcome::Loss {
        member.cp = 0;
    }
    outcome
}
