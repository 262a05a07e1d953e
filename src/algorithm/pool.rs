//! Unordered pixel set supporting O(1) removal and uniform random choice

use rand::Rng;

const ABSENT: usize = usize::MAX;

/// Set of canvas indices not yet claimed by a finished flood-fill region
///
/// Members live in a dense vector so a uniformly random member can be drawn in
/// constant time; `slots` maps each canvas index to its position in `members`.
#[derive(Clone, Debug)]
pub struct PixelPool {
    members: Vec<usize>,
    slots: Vec<usize>,
}

impl PixelPool {
    /// Create a pool containing every index in `0..len`
    pub fn full(len: usize) -> Self {
        Self {
            members: (0..len).collect(),
            slots: (0..len).collect(),
        }
    }

    /// Number of indices still in the pool
    pub const fn len(&self) -> usize {
        self.members.len()
    }

    /// Test if the pool has been exhausted
    pub const fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Test pool membership
    pub fn contains(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|&slot| slot != ABSENT)
    }

    /// Remove an index, returning whether it was present
    pub fn remove(&mut self, index: usize) -> bool {
        let Some(slot) = self.slots.get(index).copied().filter(|&s| s != ABSENT) else {
            return false;
        };

        self.members.swap_remove(slot);
        // The former last member now occupies the vacated slot
        if let Some(&moved) = self.members.get(slot) {
            if let Some(moved_slot) = self.slots.get_mut(moved) {
                *moved_slot = slot;
            }
        }
        if let Some(removed_slot) = self.slots.get_mut(index) {
            *removed_slot = ABSENT;
        }
        true
    }

    /// Draw a uniformly random member without removing it
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.members.is_empty() {
            return None;
        }
        self.members
            .get(rng.random_range(0..self.members.len()))
            .copied()
    }
}
