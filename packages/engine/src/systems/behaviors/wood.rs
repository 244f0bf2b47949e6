//! WoodBehavior - combustible solids
//!
//! Drops one cell when the cell below is free and does nothing else. Wood
//! only burns when fire sits directly on top of it (see `FireBehavior`).

use super::{Behavior, UpdateContext, DOWN};
use crate::elements::Cell;

pub struct WoodBehavior;

impl Behavior for WoodBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if ctx.is_free(DOWN) {
            ctx.move_to(DOWN, Cell::CombustibleSolid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Bench;
    use crate::elements::Cell;

    #[test]
    fn drops_one_cell() {
        let mut bench = Bench::new(&["#####", "#.w.#", "#...#", "#...#", "#####"], 1);
        bench.run(2, 1);
        assert_eq!(bench.scratch(2, 1), Cell::Empty);
        assert_eq!(bench.scratch(2, 2), Cell::CombustibleSolid);
        assert_eq!(bench.scratch(2, 3), Cell::Empty);
    }

    #[test]
    fn never_slides_or_ignites_next_to_fire() {
        let mut bench = Bench::new(&["#####", "#fwf#", "#.s.#", "#####"], 1);
        bench.run(2, 1);
        assert_eq!(bench.scratch(2, 1), Cell::CombustibleSolid);
        assert_eq!(bench.scratch(1, 2), Cell::Empty);
        assert_eq!(bench.scratch(3, 2), Cell::Empty);
    }
}
