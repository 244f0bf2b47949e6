//! LiquidBehavior - conserved fluid
//!
//! Each fluid cell carries an amount in `[fluid.min, fluid.max]`. Amounts are
//! read from scratch at dispatch time, so transfers made earlier in the tick
//! are visible. Rules, first match wins:
//! 1. fall into a free cell below, carrying the whole amount
//! 2. top up fluid below that is not full
//! 3. spill into free side cells when the excess over the minimum is large
//! 4. level out with fluid on either side
//! 5. stay

use super::{Behavior, UpdateContext, DOWN, SIDEWAYS};
use crate::elements::{Cell, FLUID_SPREAD_THRESHOLD};

pub struct LiquidBehavior;

impl LiquidBehavior {
    /// Current amount of this cell, clamped to the minimum (with a warning)
    /// if it ever leaves bounds.
    fn own_amount(&self, ctx: &mut UpdateContext) -> Option<f32> {
        let amount = ctx.pending((0, 0)).and_then(|c| c.amount())?;
        if ctx.fluid.contains(amount) {
            return Some(amount);
        }
        tracing::warn!(x = ctx.x, y = ctx.y, amount, "fluid amount out of bounds, clamping");
        ctx.write_self(Cell::Fluid(ctx.fluid.min));
        None
    }

    fn fill_below(&self, ctx: &mut UpdateContext, amount: f32) -> bool {
        let Some(Cell::Fluid(below)) = ctx.pending(DOWN) else {
            return false;
        };
        if below >= ctx.fluid.max {
            return false;
        }

        let bounds = ctx.fluid;
        let room = bounds.max - below;
        if amount <= room {
            ctx.write(DOWN, Cell::Fluid(bounds.clamp(below + amount)));
            ctx.write_self(Cell::Empty);
            return true;
        }

        let transfer = (amount - bounds.min).min(room);
        if transfer <= 0.0 {
            return false;
        }
        ctx.write(DOWN, Cell::Fluid(bounds.clamp(below + transfer)));
        ctx.write_self(Cell::Fluid(bounds.clamp(amount - transfer)));
        true
    }

    fn spill_sideways(&self, ctx: &mut UpdateContext, amount: f32) -> bool {
        let excess = amount - ctx.fluid.min;
        if excess <= FLUID_SPREAD_THRESHOLD {
            return false;
        }

        let mut free = [SIDEWAYS[0]; 2];
        let mut n = 0;
        for dir in SIDEWAYS {
            if ctx.is_free(dir) {
                free[n] = dir;
                n += 1;
            }
        }
        if n == 0 {
            return false;
        }

        let share = Cell::Fluid(ctx.fluid.clamp(ctx.fluid.min + excess / (n + 1) as f32));
        ctx.write_self(share);
        for &dir in &free[..n] {
            ctx.write(dir, share);
        }
        true
    }

    fn level_out(&self, ctx: &mut UpdateContext, amount: f32) -> bool {
        let mut total = amount;
        let mut sides = [SIDEWAYS[0]; 2];
        let mut n = 0;
        for dir in SIDEWAYS {
            if let Some(Cell::Fluid(side)) = ctx.pending(dir) {
                total += side;
                sides[n] = dir;
                n += 1;
            }
        }
        if n == 0 {
            return false;
        }

        let level = Cell::Fluid(ctx.fluid.clamp(total / (n + 1) as f32));
        ctx.write_self(level);
        for &dir in &sides[..n] {
            ctx.write(dir, level);
        }
        true
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let Some(amount) = self.own_amount(ctx) else {
            return;
        };

        if ctx.is_free(DOWN) {
            ctx.move_to(DOWN, Cell::Fluid(amount));
            return;
        }

        if self.fill_below(ctx, amount) {
            return;
        }
        if self.spill_sideways(ctx, amount) {
            return;
        }
        self.level_out(ctx, amount);
    }
}
