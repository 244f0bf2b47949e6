//! GasBehavior - dark and light smoke
//!
//! Rises into the first free cell among up, up-left and up-right (random
//! order); if all three are taken, drifts left or right (random order).
//! Blocked gas stays put. The lifetime entry travels with the cell.

use super::{Behavior, UpdateContext, RISE, SIDEWAYS};

pub struct GasBehavior;

impl Behavior for GasBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let kind = ctx.cell.kind();

        let up = ctx.shuffled(RISE);
        let target = match ctx.first_free(&up) {
            Some(dir) => Some(dir),
            None => {
                let side = ctx.shuffled(SIDEWAYS);
                ctx.first_free(&side)
            }
        };

        let Some(dir) = target else {
            return;
        };

        let from = ctx.pos();
        let to = ctx.at(dir);
        let cell = ctx.cell;
        ctx.move_to(dir, cell);
        ctx.lifetimes.relocate(from, to, kind, &mut *ctx.rng);
    }
}
