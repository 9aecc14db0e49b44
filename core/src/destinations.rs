use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::Coord2;

/// Set of landing cells currently on offer, at most one per compass direction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Destinations(SmallVec<[Coord2; 8]>);

impl Destinations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(coords: Coord2) -> Self {
        let mut set = Self::new();
        set.insert(coords);
        set
    }

    /// Adds `coords` unless already present, returns whether it was added.
    pub fn insert(&mut self, coords: Coord2) -> bool {
        if self.contains(coords) {
            return false;
        }
        self.0.push(coords);
        true
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.0.contains(&coords)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Coord2] {
        &self.0
    }
}

impl FromIterator<Coord2> for Destinations {
    fn from_iter<I: IntoIterator<Item = Coord2>>(iter: I) -> Self {
        let mut set = Self::new();
        for coords in iter {
            set.insert(coords);
        }
        set
    }
}
