//! FireBehavior - combustion
//!
//! Fire burns downward: wood directly below (pre-tick) catches fire and the
//! burnt cell turns into dark smoke. Fire with nothing to burn drops into a
//! free cell below or diagonally below, picked in random order. Fire that can
//! neither burn nor fall dies out as light smoke.

use super::{Behavior, UpdateContext, DOWN, FALL};
use crate::elements::{Cell, Kind};

pub struct FireBehavior;

impl FireBehavior {
    /// Ignite wood below, leaving dark smoke behind. Reads the pre-tick
    /// buffer, which is frozen for the whole tick.
    fn try_ignite_below(&self, ctx: &mut UpdateContext) -> bool {
        if ctx.before(DOWN) != Some(Cell::CombustibleSolid) {
            return false;
        }
        ctx.write(DOWN, Cell::Combustion);
        ctx.become_gas(Kind::GasDark);
        true
    }
}

impl Behavior for FireBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if self.try_ignite_below(ctx) {
            return;
        }

        let dirs = ctx.shuffled(FALL);
        if let Some(dir) = ctx.first_free(&dirs) {
            ctx.move_to(dir, Cell::Combustion);
            return;
        }

        ctx.become_gas(Kind::GasLight);
    }
}
