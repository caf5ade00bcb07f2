use crate::model::{CreatureRecord, Rarity};
use anyhow::{Context, Result};
use std::path::Path;

/// Read-only catalog of every known species, ordered by species number.
///
/// The CP stored on each entry is the species maximum; caught copies start
/// below it and train back up toward it.
#[derive(Clone, Debug, Default)]
pub struct Pokedex {
    entries: Vec<CreatureRecord>,
}

impl Pokedex {
    pub fn new(entries: Vec<CreatureRecord>) -> Self {
        Self { entries }
    }

    /// Parse whitespace-delimited quadruples `<num> <name> <max_cp> <tier>`.
    ///
    /// Parsing stops at the first token that does not fit the expected
    /// field, matching stream-extraction semantics; whatever was read up to
    /// that point is kept, so partial catalogs are accepted.
    pub fn parse(text: &str) -> Pokedex {
        let mut entries = Vec::new();
        let mut tokens = text.split_whitespace();
        loop {
            let Some(num) = tokens.next().and_then(|t| t.parse::<u32>().ok()) else {
                break;
            };
            let Some(name) = tokens.next() else { break };
            let Some(cp) = tokens.next().and_then(|t| t.parse::<u32>().ok()) else {
                break;
            };
            let rarity = tokens
                .next()
                .and_then(|t| t.parse::<u32>().ok())
                .and_then(Rarity::from_tier);
            let Some(rarity) = rarity else { break };
            entries.push(CreatureRecord::new(num, name, cp, rarity));
        }
        Pokedex { entries }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Pokedex> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pokedex file at {}", path.display()))?;
        Ok(Pokedex::parse(&raw))
    }

    /// Load the catalog, degrading to an empty one if the source is
    /// unreadable. The game keeps running; every engine tolerates an empty
    /// catalog.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Pokedex {
        match Pokedex::load(path) {
            Ok(dex) => dex,
            Err(err) => {
                eprintln!("{err:#}");
                Pokedex::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CreatureRecord> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CreatureRecord> {
        self.entries.iter()
    }

    /// Species maximum CP looked up by 1-based species number.
    pub fn max_cp(&self, species_number: u32) -> Option<u32> {
        let index = species_number.checked_sub(1)? as usize;
        self.entries.get(index).map(|entry| entry.cp)
    }

    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    pub fn count_rarity(&self, rarity: Rarity) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.rarity == rarity)
            .count()
    }

    /// The `n`-th entry (zero-based) among those of the given rarity, in
    /// catalog order.
    pub fn nth_of_rarity(&self, rarity: Rarity, n: usize) -> Option<&CreatureRecord> {
        self.entries
            .iter()
            .filter(|entry| entry.rarity == rarity)
            .nth(n)
    }
}
