//! Lattice - double-buffered cell storage
//!
//! `current` is the state everyone reads during a tick, `scratch` is the
//! state being written. Rules check occupancy against `scratch`, so the
//! first writer into a cell wins for the rest of the tick.
//!
//! Coordinates are signed so rules can probe neighbours with plain offsets.
//! Anything outside `[0, width) x [0, height)` reads as occupied and ignores
//! writes.

use crate::elements::Cell;
use crate::error::{EngineError, Result};

pub struct Lattice {
    width: u32,
    height: u32,
    size: usize,
    current: Vec<Cell>,
    scratch: Vec<Cell>,
}

impl Lattice {
    /// All-empty lattice. Fails on a zero-sized or overflowing shape.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let size = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n > 0 && width <= i32::MAX as u32 && height <= i32::MAX as u32)
            .ok_or(EngineError::InvalidDimensions { width, height })?;

        let lattice = Self {
            width,
            height,
            size,
            current: vec![Cell::Empty; size],
            scratch: vec![Cell::Empty; size],
        };
        lattice.check_shape()?;
        Ok(lattice)
    }

    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    #[inline]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (i32, i32) {
        let w = self.width as usize;
        ((idx % w) as i32, (idx / w) as i32)
    }

    #[inline]
    pub fn is_border(&self, x: i32, y: i32) -> bool {
        x == 0 || y == 0 || x == self.width as i32 - 1 || y == self.height as i32 - 1
    }

    /// Both buffers must match the declared shape.
    pub fn check_shape(&self) -> Result<()> {
        if self.current.len() != self.size || self.scratch.len() != self.size {
            return Err(EngineError::DimensionMismatch {
                expected: self.size,
                current: self.current.len(),
                scratch: self.scratch.len(),
            });
        }
        Ok(())
    }

    // === current ===

    /// Read `current`. `None` outside the lattice.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.current[i])
    }

    /// Write `current` directly (mutation interface, terrain).
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.current[i] = cell;
        }
    }

    /// Read-only row-major view of `current`.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.current
    }

    // === scratch ===

    #[inline]
    pub fn scratch(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.scratch[i])
    }

    /// True iff in range and the scratch cell is empty.
    #[inline]
    pub fn is_empty_in_scratch(&self, x: i32, y: i32) -> bool {
        matches!(self.scratch(x, y), Some(Cell::Empty))
    }

    #[inline]
    pub fn set_scratch(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.scratch[i] = cell;
        }
    }

    /// Move whatever sits at `from` in scratch to `to`, leaving `from` empty.
    #[inline]
    pub fn move_in_scratch(&mut self, from: (i32, i32), to: (i32, i32), cell: Cell) {
        self.set_scratch(from.0, from.1, Cell::Empty);
        self.set_scratch(to.0, to.1, cell);
    }

    // === tick lifecycle ===

    /// Seed scratch with a verbatim copy of current.
    pub fn begin_tick(&mut self) -> Result<()> {
        self.check_shape()?;
        self.scratch.copy_from_slice(&self.current);
        Ok(())
    }

    /// Publish scratch as the new current.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.scratch);
    }

    /// Replace `current` wholesale (terrain output) and mirror it into scratch.
    pub fn load(&mut self, cells: Vec<Cell>) -> Result<()> {
        if cells.len() != self.size {
            return Err(EngineError::DimensionMismatch {
                expected: self.size,
                current: cells.len(),
                scratch: self.scratch.len(),
            });
        }
        self.current = cells;
        self.scratch.copy_from_slice(&self.current);
        Ok(())
    }

    /// Zero both buffers.
    pub fn clear(&mut self) {
        self.current.fill(Cell::Empty);
        self.scratch.fill(Cell::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_shapes() {
        assert!(matches!(Lattice::new(0, 10), Err(EngineError::InvalidDimensions { .. })));
        assert!(matches!(Lattice::new(10, 0), Err(EngineError::InvalidDimensions { .. })));
    }

    #[test]
    fn out_of_bounds_reads_as_occupied_and_ignores_writes() {
        let mut lattice = Lattice::new(4, 3).unwrap();
        assert!(!lattice.is_empty_in_scratch(-1, 0));
        assert!(!lattice.is_empty_in_scratch(4, 0));
        assert!(!lattice.is_empty_in_scratch(0, 3));
        assert!(lattice.is_empty_in_scratch(3, 2));
        assert_eq!(lattice.get(-1, -1), None);

        lattice.set(9, 9, Cell::Wall);
        lattice.set_scratch(-3, 1, Cell::Wall);
        assert!(lattice.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn scratch_writes_become_visible_after_swap() {
        let mut lattice = Lattice::new(3, 3).unwrap();
        lattice.set(1, 0, Cell::GranularSolid);
        lattice.begin_tick().unwrap();
        assert_eq!(lattice.scratch(1, 0), Some(Cell::GranularSolid));

        lattice.move_in_scratch((1, 0), (1, 1), Cell::GranularSolid);
        assert_eq!(lattice.get(1, 0), Some(Cell::GranularSolid));
        assert!(!lattice.is_empty_in_scratch(1, 1));

        lattice.swap();
        assert_eq!(lattice.get(1, 0), Some(Cell::Empty));
        assert_eq!(lattice.get(1, 1), Some(Cell::GranularSolid));
    }

    #[test]
    fn coords_invert_index() {
        let lattice = Lattice::new(7, 5).unwrap();
        for idx in 0..lattice.size() {
            let (x, y) = lattice.coords(idx);
            assert_eq!(lattice.index(x, y), Some(idx));
        }
    }

    #[test]
    fn load_rejects_wrong_length() {
        let mut lattice = Lattice::new(3, 3).unwrap();
        assert!(lattice.load(vec![Cell::Wall; 4]).is_err());
        assert!(lattice.load(vec![Cell::Wall; 9]).is_ok());
        assert_eq!(lattice.scratch(2, 2), Some(Cell::Wall));
    }
}
