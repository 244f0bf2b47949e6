//! BalloonBehavior - buoyant bodies
//!
//! Samples exactly one of up, up-left and up-right. Rises there if it is
//! free; otherwise the balloon pops and the cell becomes empty.

use rand::Rng;

use super::{Behavior, UpdateContext, RISE};
use crate::elements::Cell;

pub struct BalloonBehavior;

impl Behavior for BalloonBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let dir = RISE[ctx.rng.gen_range(0..RISE.len())];
        if ctx.is_free(dir) {
            ctx.move_to(dir, Cell::BuoyantBody);
        } else {
            ctx.write_self(Cell::Empty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Bench;
    use crate::elements::Cell;

    #[test]
    fn rises_into_open_space() {
        for seed in 0..16 {
            let mut bench = Bench::new(&["#####", "#...#", "#.b.#", "#####"], seed);
            bench.run(2, 2);
            assert_eq!(bench.scratch(2, 2), Cell::Empty);
            let risen = (1..=3).filter(|&x| bench.scratch(x, 1) == Cell::BuoyantBody).count();
            assert_eq!(risen, 1);
        }
    }

    #[test]
    fn pops_when_boxed_in() {
        let mut bench = Bench::new(&["#####", "#sws#", "#.b.#", "#####"], 1);
        bench.run(2, 2);
        assert_eq!(bench.scratch(2, 2), Cell::Empty);
        assert_eq!(bench.scratch(2, 1), Cell::CombustibleSolid);
    }

    #[test]
    fn one_shot_sampling_can_pop_beside_an_opening() {
        let (mut rose, mut popped) = (0, 0);
        for seed in 0..64 {
            let mut bench = Bench::new(&["#####", "#s.s#", "#.b.#", "#####"], seed);
            bench.run(2, 2);
            assert_eq!(bench.scratch(2, 2), Cell::Empty);
            if bench.scratch(2, 1) == Cell::BuoyantBody {
                rose += 1;
            } else {
                popped += 1;
            }
        }
        assert!(rose > 0 && popped > 0);
    }
}
