//! PowderBehavior - granular solids (sand)
//!
//! Falls straight down when it can, otherwise slides into a free
//! diagonal-below cell picked at random. Never moves sideways.

use rand::seq::SliceRandom;

use super::{Behavior, UpdateContext, DOWN, DOWN_LEFT, DOWN_RIGHT};
use crate::elements::Cell;

pub struct PowderBehavior;

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if ctx.is_free(DOWN) {
            ctx.move_to(DOWN, Cell::GranularSolid);
            return;
        }

        let mut options = [DOWN; 2];
        let mut n = 0;
        for dir in [DOWN_LEFT, DOWN_RIGHT] {
            if ctx.is_free(dir) {
                options[n] = dir;
                n += 1;
            }
        }

        if let Some(&dir) = options[..n].choose(&mut *ctx.rng) {
            ctx.move_to(dir, Cell::GranularSolid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Bench;
    use crate::elements::Cell;

    #[test]
    fn falls_straight_down_first() {
        let mut bench = Bench::new(&["#####", "#.s.#", "#...#", "#####"], 1);
        bench.run(2, 1);
        assert_eq!(bench.scratch(2, 1), Cell::Empty);
        assert_eq!(bench.scratch(2, 2), Cell::GranularSolid);
    }

    #[test]
    fn slides_to_the_only_free_diagonal() {
        for seed in 0..16 {
            let mut bench = Bench::new(&["#####", "#.s.#", "#ws.#", "#####"], seed);
            bench.run(2, 1);
            assert_eq!(bench.scratch(3, 2), Cell::GranularSolid);
            assert_eq!(bench.scratch(2, 1), Cell::Empty);
        }
    }

    #[test]
    fn picks_both_diagonals_over_many_seeds() {
        let (mut left, mut right) = (0, 0);
        for seed in 0..64 {
            let mut bench = Bench::new(&["#####", "#.s.#", "#.s.#", "#####"], seed);
            bench.run(2, 1);
            if bench.scratch(1, 2) == Cell::GranularSolid {
                left += 1;
            }
            if bench.scratch(3, 2) == Cell::GranularSolid {
                right += 1;
            }
        }
        assert_eq!(left + right, 64);
        assert!(left > 0 && right > 0);
    }

    #[test]
    fn stays_when_fully_blocked_and_never_moves_sideways() {
        let mut bench = Bench::new(&["#####", "#.s.#", "#sss#", "#####"], 1);
        bench.run(2, 1);
        assert_eq!(bench.scratch(2, 1), Cell::GranularSolid);
        assert_eq!(bench.scratch(1, 1), Cell::Empty);
        assert_eq!(bench.scratch(3, 1), Cell::Empty);
    }

    #[test]
    fn respects_claims_made_earlier_in_the_tick() {
        let mut bench = Bench::new(&["#####", "#.s.#", "#...#", "#####"], 1);
        bench.set_scratch(2, 2, Cell::CombustibleSolid);
        bench.set_scratch(1, 2, Cell::CombustibleSolid);
        bench.run(2, 1);
        assert_eq!(bench.scratch(3, 2), Cell::GranularSolid);
    }
}
