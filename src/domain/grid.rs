use super::{Cell, error::GridError, rules::Rule};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// Bounded D-dimensional cell storage with a double-buffered transition.
///
/// `cells` holds the current generation and `next_generation` is the scratch
/// buffer the engine writes into; `commit` copies scratch over current. Both
/// buffers are flat row-major arrays of `size.iter().product()` cells and
/// keep that length for the grid's lifetime.
#[derive(Clone, Debug)]
pub struct Grid<const D: usize> {
    size: [usize; D],
    cells: Vec<Cell>,
    next_generation: Vec<Cell>,
}

impl<const D: usize> Grid<D> {
    /// Create a grid with every cell set by an independent fair coin flip.
    ///
    /// Fails with `InvalidSize` if any axis length is below 1.
    pub fn new(size: [usize; D]) -> Result<Self, GridError> {
        let mut grid = Self::dead(size)?;
        grid.reseed(&mut rand::rng());
        Ok(grid)
    }

    /// Like `new`, but seeding a deterministic generator so the initial
    /// state is reproducible.
    pub fn with_seed(size: [usize; D], seed: u64) -> Result<Self, GridError> {
        let mut grid = Self::dead(size)?;
        grid.reseed(&mut ChaCha8Rng::seed_from_u64(seed));
        Ok(grid)
    }

    fn dead(size: [usize; D]) -> Result<Self, GridError> {
        if size.iter().any(|&axis| axis < 1) {
            return Err(GridError::InvalidSize);
        }
        let len = size.iter().product();
        Ok(Self {
            size,
            cells: vec![Cell::Dead; len],
            next_generation: vec![Cell::Dead; len],
        })
    }

    /// Re-randomize the current generation in place and clear the scratch
    /// buffer.
    pub(crate) fn reseed<R: Rng>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = Cell::from(rng.random_bool(0.5));
        }
        self.next_generation.fill(Cell::Dead);
    }

    /// Per-axis lengths
    pub const fn size(&self) -> [usize; D] {
        self.size
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Current generation as a flat row-major slice
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, pos: [usize; D]) -> Option<Cell> {
        self.in_bounds(pos).then(|| self.cells[self.index(pos)])
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = ([usize; D], Cell)> + '_ {
        (0..self.cells.len()).map(|idx| (self.position(idx), self.cells[idx]))
    }

    fn in_bounds(&self, pos: [usize; D]) -> bool {
        pos.iter().zip(&self.size).all(|(&p, &s)| p < s)
    }

    /// Convert a position to its flat row-major index
    fn index(&self, pos: [usize; D]) -> usize {
        pos.iter()
            .zip(&self.size)
            .fold(0, |acc, (&p, &s)| acc * s + p)
    }

    /// Convert a flat index back to its position
    fn position(&self, mut idx: usize) -> [usize; D] {
        let mut pos = [0; D];
        for axis in (0..D).rev() {
            pos[axis] = idx % self.size[axis];
            idx /= self.size[axis];
        }
        pos
    }

    /// Count live cells within Chebyshev distance 1 of `pos`, excluding
    /// `pos` itself. The scan box is clamped to the grid bounds on every
    /// axis, so boundary cells simply have fewer candidates; nothing wraps.
    pub(crate) fn living_neighbors(&self, pos: [usize; D]) -> usize {
        let mut lo = [0; D];
        let mut hi = [0; D];
        for axis in 0..D {
            lo[axis] = pos[axis].saturating_sub(1);
            hi[axis] = (pos[axis] + 1).min(self.size[axis] - 1);
        }

        let mut total = 0;
        let mut cursor = lo;
        'scan: loop {
            if cursor != pos && self.cells[self.index(cursor)].is_alive() {
                total += 1;
            }
            for axis in (0..D).rev() {
                if cursor[axis] < hi[axis] {
                    cursor[axis] += 1;
                    continue 'scan;
                }
                cursor[axis] = lo[axis];
            }
            break;
        }
        total
    }

    /// Evaluate `rule` at every position into the scratch buffer.
    /// Returns true if any cell would change state on commit.
    pub(crate) fn step(&mut self, rule: &Rule) -> bool {
        for idx in 0..self.cells.len() {
            let neighbors = self.living_neighbors(self.position(idx));
            self.next_generation[idx] = rule.evolve(self.cells[idx], neighbors);
        }
        self.next_generation != self.cells
    }

    /// Parallel version of `step` for large grids
    pub(crate) fn step_parallel(&mut self, rule: &Rule) -> bool {
        let next: Vec<Cell> = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| {
                let neighbors = self.living_neighbors(self.position(idx));
                rule.evolve(self.cells[idx], neighbors)
            })
            .collect();
        self.next_generation = next;
        self.next_generation != self.cells
    }

    /// Copy the scratch buffer over the current generation, making the
    /// computed next state current. No validation; the caller must have
    /// fully populated the scratch buffer first.
    pub fn commit(&mut self) {
        self.cells.copy_from_slice(&self.next_generation);
    }
}

impl Grid<2> {
    /// Overwrite the whole grid from nested rows of booleans.
    ///
    /// The outer slice must match axis 0 and every row must match axis 1;
    /// any deviation (including ragged rows) fails with `ShapeMismatch`
    /// before a single cell is written. On success the values are staged
    /// into the scratch buffer and committed at once. This is a direct
    /// state override: no rule evaluation, no generation bookkeeping.
    pub fn set_living(&mut self, values: &[Vec<bool>]) -> Result<(), GridError> {
        let [rows, cols] = self.size;
        if values.len() != rows {
            return Err(GridError::ShapeMismatch {
                axis: 0,
                expected: rows,
                got: values.len(),
            });
        }
        for row in values {
            if row.len() != cols {
                return Err(GridError::ShapeMismatch {
                    axis: 1,
                    expected: cols,
                    got: row.len(),
                });
            }
        }

        for (x, row) in values.iter().enumerate() {
            for (y, &alive) in row.iter().enumerate() {
                let idx = self.index([x, y]);
                self.next_generation[idx] = Cell::from(alive);
            }
        }
        self.commit();
        Ok(())
    }
}

impl Grid<3> {
    /// Overwrite the whole grid from nested layers of booleans.
    /// Same contract as the 2D variant, one axis deeper.
    pub fn set_living(&mut self, values: &[Vec<Vec<bool>>]) -> Result<(), GridError> {
        let [layers, rows, cols] = self.size;
        if values.len() != layers {
            return Err(GridError::ShapeMismatch {
                axis: 0,
                expected: layers,
                got: values.len(),
            });
        }
        for layer in values {
            if layer.len() != rows {
                return Err(GridError::ShapeMismatch {
                    axis: 1,
                    expected: rows,
                    got: layer.len(),
                });
            }
            for row in layer {
                if row.len() != cols {
                    return Err(GridError::ShapeMismatch {
                        axis: 2,
                        expected: cols,
                        got: row.len(),
                    });
                }
            }
        }

        for (x, layer) in values.iter().enumerate() {
            for (y, row) in layer.iter().enumerate() {
                for (z, &alive) in row.iter().enumerate() {
                    let idx = self.index([x, y, z]);
                    self.next_generation[idx] = Cell::from(alive);
                }
            }
        }
        self.commit();
        Ok(())
    }
}
