//! Gas lifetime registry
//!
//! Sparse map from lattice position to the ticks a gas cell has left.
//! An entry exists exactly where a gas cell exists: it is created with the
//! cell, follows the cell when it moves and is dropped when the countdown
//! runs out.

use std::collections::HashMap;

use rand::Rng;

use crate::domain::config::LifetimeRange;
use crate::elements::{Cell, Kind};
use crate::spatial::Lattice;

pub type Pos = (i32, i32);

pub struct GasLifetimes {
    ticks: HashMap<Pos, u32>,
    dark: LifetimeRange,
    light: LifetimeRange,
}

impl GasLifetimes {
    pub fn new(dark: LifetimeRange, light: LifetimeRange) -> Self {
        Self { ticks: HashMap::new(), dark, light }
    }

    fn range_for(&self, kind: Kind) -> Option<LifetimeRange> {
        match kind {
            Kind::GasDark => Some(self.dark),
            Kind::GasLight => Some(self.light),
            _ => None,
        }
    }

    /// Fresh countdown for a new gas cell, replacing any previous entry.
    /// Non-gas kinds get no entry.
    pub fn spawn<R: Rng + ?Sized>(&mut self, pos: Pos, kind: Kind, rng: &mut R) -> Option<u32> {
        let range = self.range_for(kind)?;
        let ticks = range.sample(rng);
        self.ticks.insert(pos, ticks);
        Some(ticks)
    }

    /// Carry the entry along with a moving gas cell. A cell that had no
    /// entry gets a fresh one at its destination.
    pub fn relocate<R: Rng + ?Sized>(&mut self, from: Pos, to: Pos, kind: Kind, rng: &mut R) {
        match self.ticks.remove(&from) {
            Some(ticks) => {
                self.ticks.insert(to, ticks);
            }
            None => {
                self.spawn(to, kind, rng);
            }
        }
    }

    pub fn remove(&mut self, pos: Pos) -> Option<u32> {
        self.ticks.remove(&pos)
    }

    pub fn get(&self, pos: Pos) -> Option<u32> {
        self.ticks.get(&pos).copied()
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn clear(&mut self) {
        self.ticks.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, u32)> + '_ {
        self.ticks.iter().map(|(&pos, &ticks)| (pos, ticks))
    }

    /// End-of-tick pass: count every entry down by one and retire the ones
    /// that hit zero, clearing their cell if it still holds gas.
    /// Returns the number of gas cells removed from the lattice.
    pub fn sweep(&mut self, lattice: &mut Lattice) -> u32 {
        let mut expired = 0;
        self.ticks.retain(|&(x, y), ticks| {
            *ticks = ticks.saturating_sub(1);
            if *ticks > 0 {
                return true;
            }
            if lattice.get(x, y).map_or(false, |c| c.is_gas()) {
                lattice.set(x, y, Cell::Empty);
                expired += 1;
            }
            false
        });
        expired
    }
}

impl Default for GasLifetimes {
    fn default() -> Self {
        Self::new(LifetimeRange::DARK, LifetimeRange::LIGHT)
    }
}
