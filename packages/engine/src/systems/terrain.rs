//! Terrain generator - cave layout from a binary neighbour-counting automaton
//!
//! Seeding: border cells are wall, interior cells are wall with probability
//! `fill_ratio`. Smoothing: every interior cell counts its 8 Moore
//! neighbours that are wall in a frozen snapshot and
//! - empty becomes wall with 6 or more wall neighbours,
//! - wall becomes empty with fewer than 2,
//! - anything else keeps its state.
//!
//! With the `parallel` feature each smoothing pass fills rows in parallel.
//! Rows only read the previous snapshot, so the result is identical to the
//! sequential pass.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::config::{DEFAULT_FILL_RATIO, DEFAULT_ITERATIONS};
use crate::elements::Cell;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

const BIRTH_MIN_NEIGHBOURS: u8 = 6;
const SURVIVAL_MIN_NEIGHBOURS: u8 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainParams {
    pub fill_ratio: f64,
    pub iterations: u32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self { fill_ratio: DEFAULT_FILL_RATIO, iterations: DEFAULT_ITERATIONS }
    }
}

/// Produce a wall/empty layout for a `width x height` lattice.
///
/// Any `fill_ratio` is accepted: values <= 0 seed no interior walls,
/// values >= 1 fill the interior.
pub fn generate<R: Rng + ?Sized>(width: u32, height: u32, params: TerrainParams, rng: &mut R) -> Vec<Cell> {
    let mut walls = seed(width, height, params.fill_ratio, rng);
    let mut next = walls.clone();

    for _ in 0..params.iterations {
        smooth_into(&walls, &mut next, width as usize, height as usize);
        std::mem::swap(&mut walls, &mut next);
    }

    let wall_count = walls.iter().filter(|&&w| w).count();
    tracing::debug!(
        width,
        height,
        fill_ratio = params.fill_ratio,
        iterations = params.iterations,
        wall_count,
        "terrain generated"
    );

    walls
        .into_iter()
        .map(|w| if w { Cell::Wall } else { Cell::Empty })
        .collect()
}

/// Random initial layout with a solid border.
pub fn seed<R: Rng + ?Sized>(width: u32, height: u32, fill_ratio: f64, rng: &mut R) -> Vec<bool> {
    let (w, h) = (width as usize, height as usize);
    let mut walls = vec![false; w * h];
    for y in 0..h {
        for x in 0..w {
            walls[y * w + x] = if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                true
            } else {
                rng.gen::<f64>() < fill_ratio
            };
        }
    }
    walls
}

/// One smoothing pass over a frozen snapshot.
pub fn smooth_step(walls: &[bool], width: u32, height: u32) -> Vec<bool> {
    let mut next = walls.to_vec();
    smooth_into(walls, &mut next, width as usize, height as usize);
    next
}

fn smooth_into(src: &[bool], dst: &mut [bool], w: usize, h: usize) {
    debug_assert_eq!(src.len(), w * h);
    debug_assert_eq!(dst.len(), w * h);

    #[cfg(feature = "parallel")]
    dst.par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| smooth_row(src, row, w, h, y));

    #[cfg(not(feature = "parallel"))]
    dst.chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| smooth_row(src, row, w, h, y));
}

fn smooth_row(src: &[bool], row: &mut [bool], w: usize, h: usize, y: usize) {
    for (x, out) in row.iter_mut().enumerate() {
        let was_wall = src[y * w + x];
        if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
            *out = was_wall;
            continue;
        }
        let n = wall_neighbours(src, w, x, y);
        *out = if was_wall {
            n >= SURVIVAL_MIN_NEIGHBOURS
        } else {
            n >= BIRTH_MIN_NEIGHBOURS
        };
    }
}

/// Moore-neighbourhood wall count of an interior cell.
#[inline]
fn wall_neighbours(src: &[bool], w: usize, x: usize, y: usize) -> u8 {
    let mut count = 0;
    for ny in y - 1..=y + 1 {
        for nx in x - 1..=x + 1 {
            if (nx != x || ny != y) && src[ny * w + nx] {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn grid(rows: &[&str]) -> (Vec<bool>, u32, u32) {
        let h = rows.len() as u32;
        let w = rows[0].len() as u32;
        let walls = rows.iter().flat_map(|r| r.chars().map(|c| c == '#')).collect();
        (walls, w, h)
    }

    #[test]
    fn border_is_always_wall() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for (w, h) in [(3, 3), (4, 7), (20, 11), (1, 5), (2, 2)] {
            let cells = generate(w, h, TerrainParams { fill_ratio: 0.0, iterations: 4 }, &mut rng);
            for y in 0..h as usize {
                for x in 0..w as usize {
                    let border = x == 0 || y == 0 || x == w as usize - 1 || y == h as usize - 1;
                    if border {
                        assert_eq!(cells[y * w as usize + x], Cell::Wall, "({x},{y}) in {w}x{h}");
                    }
                }
            }
        }
    }

    #[test]
    fn fill_ratio_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let empty = seed(8, 8, 0.0, &mut rng);
        assert_eq!(empty.iter().filter(|&&w| w).count(), 8 * 4 - 4);
        let full = seed(8, 8, 1.0, &mut rng);
        assert!(full.iter().all(|&w| w));
        let nan = seed(8, 8, f64::NAN, &mut rng);
        assert_eq!(nan, empty);
    }

    #[test]
    fn lonely_wall_dies_and_crowded_hole_fills() {
        let (walls, w, h) = grid(&[
            "#######",
            "#.....#",
            "#.#...#",
            "#.....#",
            "#...###",
            "#...#.#",
            "#######",
        ]);
        let next = smooth_step(&walls, w, h);
        // (2,2) has no wall neighbours: dies.
        assert!(!next[2 * 7 + 2]);
        // (5,5) is surrounded: born.
        assert!(next[5 * 7 + 5]);
        // (4,4) has exactly 2 wall neighbours: survives.
        assert!(next[4 * 7 + 4]);
    }

    #[test]
    fn pass_reads_a_frozen_snapshot() {
        // Births in row 2 must not feed the count for row 3 in the same pass.
        let (walls, w, h) = grid(&[
            "######",
            "######",
            "#.##.#",
            "#....#",
            "######",
        ]);
        let next = smooth_step(&walls, w, h);
        assert!(next[2 * 6 + 1]);
        assert!(next[2 * 6 + 4]);
        assert!(next[3 * 6 + 1]);
        // 5 walls in the snapshot; in-place updates would have counted 7.
        assert!(!next[3 * 6 + 2]);
    }

    #[test]
    fn zero_iterations_returns_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(9);
        let mut b = ChaCha8Rng::seed_from_u64(9);
        let cells = generate(12, 9, TerrainParams { fill_ratio: 0.45, iterations: 0 }, &mut a);
        let walls = seed(12, 9, 0.45, &mut b);
        let expected: Vec<Cell> = walls.into_iter().map(|w| if w { Cell::Wall } else { Cell::Empty }).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn same_seed_same_cave() {
        let params = TerrainParams::default();
        let a = generate(40, 30, params, &mut ChaCha8Rng::seed_from_u64(42));
        let b = generate(40, 30, params, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
