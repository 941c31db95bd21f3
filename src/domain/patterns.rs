/// A named 2D seed pattern, stored as relative coordinates of live cells.
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: Vec<[usize; 2]>,
}

impl Pattern {
    pub fn new(name: &'static str, description: &'static str, cells: Vec<[usize; 2]>) -> Self {
        Self {
            name,
            description,
            cells,
        }
    }

    /// Expand the pattern into whole-grid injection values for a grid of
    /// the given size, with the pattern origin placed at `at`. Cells that
    /// fall outside the grid are dropped.
    pub fn values(&self, size: [usize; 2], at: [usize; 2]) -> Vec<Vec<bool>> {
        let mut values = vec![vec![false; size[1]]; size[0]];
        for &[dx, dy] in &self.cells {
            let x = at[0] + dx;
            let y = at[1] + dy;
            if x < size[0] && y < size[1] {
                values[x][y] = true;
            }
        }
        values
    }
}

/// Classic Game of Life seed patterns
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![[1, 0], [2, 1], [0, 2], [1, 2], [2, 2]],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![[0, 1], [1, 1], [2, 1]],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![[1, 0], [2, 0], [3, 0], [0, 1], [1, 1], [2, 1]],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![[0, 0], [1, 0], [0, 1], [1, 1]])
    }
}
