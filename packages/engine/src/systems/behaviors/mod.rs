//! Behaviors - one transition rule per material
//!
//! Every rule reads the pre-tick state (`current`) for context, checks
//! occupancy against `scratch` and writes only to `scratch`. Because the
//! tick engine visits cells in a shuffled order, the first rule to claim a
//! scratch cell wins it for the rest of the tick.

mod balloon;
mod common;
mod energy;
mod gas;
mod liquid;
mod powder;
mod wood;

pub use balloon::BalloonBehavior;
pub use common::*;
pub use energy::FireBehavior;
pub use gas::GasBehavior;
pub use liquid::LiquidBehavior;
pub use powder::PowderBehavior;
pub use wood::WoodBehavior;

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::domain::config::FluidBounds;
use crate::elements::{Cell, Kind};
use crate::spatial::Lattice;
use crate::systems::lifetimes::GasLifetimes;

/// Update context passed to behaviors
pub struct UpdateContext<'a> {
    pub lattice: &'a mut Lattice,
    pub lifetimes: &'a mut GasLifetimes,
    pub rng: &'a mut dyn RngCore,
    pub fluid: FluidBounds,
    pub x: i32,
    pub y: i32,
    /// The cell as it was at the start of the tick.
    pub cell: Cell,
}

impl<'a> UpdateContext<'a> {
    #[inline]
    pub fn pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    #[inline]
    pub fn at(&self, (dx, dy): Dir) -> (i32, i32) {
        (self.x + dx, self.y + dy)
    }

    /// Pre-tick cell at an offset, `None` outside the lattice.
    #[inline]
    pub fn before(&self, dir: Dir) -> Option<Cell> {
        let (x, y) = self.at(dir);
        self.lattice.get(x, y)
    }

    /// In-progress cell at an offset, `None` outside the lattice.
    #[inline]
    pub fn pending(&self, dir: Dir) -> Option<Cell> {
        let (x, y) = self.at(dir);
        self.lattice.scratch(x, y)
    }

    #[inline]
    pub fn is_free(&self, dir: Dir) -> bool {
        let (x, y) = self.at(dir);
        self.lattice.is_empty_in_scratch(x, y)
    }

    /// First direction whose target is still free.
    pub fn first_free(&self, dirs: &[Dir]) -> Option<Dir> {
        dirs.iter().copied().find(|&d| self.is_free(d))
    }

    pub fn shuffled<const N: usize>(&mut self, mut dirs: [Dir; N]) -> [Dir; N] {
        dirs.shuffle(&mut *self.rng);
        dirs
    }

    #[inline]
    pub fn write(&mut self, dir: Dir, cell: Cell) {
        let (x, y) = self.at(dir);
        self.lattice.set_scratch(x, y, cell);
    }

    #[inline]
    pub fn write_self(&mut self, cell: Cell) {
        self.lattice.set_scratch(self.x, self.y, cell);
    }

    /// Move `cell` from this position to the neighbour at `dir`.
    #[inline]
    pub fn move_to(&mut self, dir: Dir, cell: Cell) {
        let to = self.at(dir);
        self.lattice.move_in_scratch(self.pos(), to, cell);
    }

    /// Turn this cell into gas with a fresh countdown.
    pub fn become_gas(&mut self, kind: Kind) {
        debug_assert!(kind.is_gas());
        self.write_self(Cell::of_kind(kind, self.fluid.max));
        let pos = self.pos();
        self.lifetimes.spawn(pos, kind, &mut *self.rng);
    }
}

/// Behavior trait - each material implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}

/// Behavior registry - dispatch by kind
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    wood: WoodBehavior,
    fire: FireBehavior,
    gas: GasBehavior,
    liquid: LiquidBehavior,
    balloon: BalloonBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior,
            wood: WoodBehavior,
            fire: FireBehavior,
            gas: GasBehavior,
            liquid: LiquidBehavior,
            balloon: BalloonBehavior,
        }
    }

    pub fn update(&self, kind: Kind, ctx: &mut UpdateContext) {
        match kind {
            Kind::GranularSolid => self.powder.update(ctx),
            Kind::CombustibleSolid => self.wood.update(ctx),
            Kind::Combustion => self.fire.update(ctx),
            Kind::GasDark | Kind::GasLight => self.gas.update(ctx),
            Kind::Fluid => self.liquid.update(ctx),
            Kind::BuoyantBody => self.balloon.update(ctx),
            Kind::Empty | Kind::Wall => {}
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    /// Lattice plus registry for driving a single rule by hand.
    pub struct Bench {
        pub lattice: Lattice,
        pub lifetimes: GasLifetimes,
        pub rng: ChaCha8Rng,
    }

    impl Bench {
        /// Parse rows: `#` wall, `.` empty, `s` sand, `w` wood, `f` fire,
        /// `d`/`l` dark/light gas, `b` balloon, `~` full fluid.
        pub fn new(rows: &[&str], seed: u64) -> Self {
            let h = rows.len() as u32;
            let w = rows[0].len() as u32;
            let mut lattice = Lattice::new(w, h).unwrap();
            for (y, row) in rows.iter().enumerate() {
                for (x, ch) in row.chars().enumerate() {
                    let cell = match ch {
                        '#' => Cell::Wall,
                        's' => Cell::GranularSolid,
                        'w' => Cell::CombustibleSolid,
                        'f' => Cell::Combustion,
                        'd' => Cell::GasDark,
                        'l' => Cell::GasLight,
                        'b' => Cell::BuoyantBody,
                        '~' => Cell::Fluid(crate::elements::FLUID_MAX),
                        _ => Cell::Empty,
                    };
                    lattice.set(x as i32, y as i32, cell);
                }
            }
            lattice.begin_tick().unwrap();
            Self { lattice, lifetimes: GasLifetimes::default(), rng: ChaCha8Rng::seed_from_u64(seed) }
        }

        /// Run the rule for the cell at (x, y) against the current scratch.
        pub fn run(&mut self, x: i32, y: i32) {
            let cell = self.lattice.get(x, y).unwrap();
            let mut ctx = UpdateContext {
                lattice: &mut self.lattice,
                lifetimes: &mut self.lifetimes,
                rng: &mut self.rng,
                fluid: FluidBounds::default(),
                x,
                y,
                cell,
            };
            BehaviorRegistry::new().update(cell.kind(), &mut ctx);
        }

        /// Overwrite a cell in both buffers, as if it had been there pre-tick.
        pub fn put(&mut self, x: i32, y: i32, cell: Cell) {
            self.lattice.set(x, y, cell);
            self.lattice.set_scratch(x, y, cell);
        }

        pub fn set_scratch(&mut self, x: i32, y: i32, cell: Cell) {
            self.lattice.set_scratch(x, y, cell);
        }

        pub fn scratch(&self, x: i32, y: i32) -> Cell {
            self.lattice.scratch(x, y).unwrap()
        }
    }
}
