// crates/kadsybil-core/src/top.rs
//
// Bounded, sorted list of the best placements seen so far.
// Order: score descending, KL ascending among equal scores; an incoming
// placement that ties on both goes after the ones already held.
//
// An empty slot is the "no candidate" placeholder and is worth a score of 0,
// so placements scoring <= 0 never rank.

use crate::placement::Placement;

#[derive(Clone, Debug)]
pub struct TopK {
    capacity: usize,
    entries: Vec<Placement>,
}

impl TopK {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert in rank order, evicting the last entry of a full list.
    /// Returns whether the placement was kept.
    pub fn offer(&mut self, placement: Placement) -> bool {
        if !(placement.score > 0.0) {
            return false;
        }

        let pos = self
            .entries
            .iter()
            .position(|held| outranks(&placement, held))
            .unwrap_or(self.entries.len());
        if pos >= self.capacity {
            return false;
        }

        if self.entries.len() == self.capacity {
            self.entries.pop();
        }
        self.entries.insert(pos, placement);
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Placement> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Placement] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<Placement> {
        self.entries
    }
}

pub fn outranks(a: &Placement, b: &Placement) -> bool {
    a.score > b.score || (a.score == b.score && a.kl < b.kl)
}
