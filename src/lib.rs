//! Rule engine for a single-player creature-collecting console game.
//!
//! A fixed catalog ([`pokedex::Pokedex`]) is loaded once from a flat text
//! file; the player catches creatures through rarity-gated random draws,
//! keeps them on a capped [`team::Team`], trains them toward their species
//! maximum, and pits them against randomly generated opponents. Every
//! random decision flows through a caller-supplied [`rand::Rng`], so the
//! console binary owns a single seeded `SmallRng` and tests inject their
//! own.

pub mod battle;
pub mod catch;
pub mod model;
pub mod pokedex;
pub mod team;
pub mod training;

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::battle::{fight, generate_opponent, BattleOutcome, Opponent, ENEMY_BONUS};
    pub use crate::catch::{attempt_catch, attenuated_cp};
    pub use crate::model::{CreatureRecord, Rarity};
    pub use crate::pokedex::Pokedex;
    pub use crate::team::{AddOutcome, Team, TEAM_SIZE};
    pub use crate::training::train;
}
