use crate::model::CreatureRecord;

/// Default roster capacity.
pub const TEAM_SIZE: usize = 5;

/// Outcome of submitting a freshly caught creature to the roster.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddOutcome {
    /// Placed into the first empty slot.
    Inserted(usize),
    /// Displaced a strictly weaker member from a full roster.
    Replaced {
        slot: usize,
        removed: CreatureRecord,
    },
    /// Roster full and nobody weaker to displace.
    Rejected,
}

/// Fixed-capacity roster of caught creatures.
///
/// Slots are explicit `Option`s rather than sentinel records, so emptiness
/// is visible in the type. `size() <= capacity()` holds after every
/// mutation.
#[derive(Clone, Debug)]
pub struct Team {
    slots: Vec<Option<CreatureRecord>>,
}

impl Team {
    pub fn new() -> Self {
        Self::with_capacity(TEAM_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn size(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    pub fn get(&self, slot: usize) -> Option<&CreatureRecord> {
        self.slots.get(slot).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut CreatureRecord> {
        self.slots.get_mut(slot).and_then(|slot| slot.as_mut())
    }

    /// Occupied slots in index order, with their positions.
    pub fn members(&self) -> impl Iterator<Item = (usize, &CreatureRecord)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|member| (idx, member)))
    }

    /// Slot allocation policy, evaluated in index order, first match wins:
    /// first empty slot, else (at full capacity) the first member with CP
    /// strictly below the newcomer's, else rejection.
    pub fn add_or_replace(&mut self, record: CreatureRecord) -> AddOutcome {
        if let Some(slot) = self.slots.iter().position(|slot| slot.is_none()) {
            self.slots[slot] = Some(record);
            return AddOutcome::Inserted(slot);
        }
        let weaker = self.slots.iter().position(|slot| {
            slot.as_ref()
                .map(|member| member.cp < record.cp)
                .unwrap_or(false)
        });
        match weaker {
            Some(slot) => {
                let removed = self.slots[slot]
                    .replace(record)
                    .expect("slot was occupied");
                AddOutcome::Replaced { slot, removed }
            }
            None => AddOutcome::Rejected,
        }
    }
}

impl Default for Team {
    fn default() -> Self {
        Self::new()
    }
}
