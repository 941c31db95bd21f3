use super::{error::GridError, grid::Grid, rules::Rule};
use log::debug;

/// Game drives the simulation: it owns the grid, applies the threshold
/// rule once per tick, and tracks generation count and quiescence.
#[derive(Clone, Debug)]
pub struct Game<const D: usize> {
    grid: Grid<D>,
    rule: Rule,
    generation: u64,
    stable: bool,
}

impl<const D: usize> Game<D> {
    /// Create an engine over a freshly randomized grid, using the default
    /// rule for this dimensionality.
    pub fn new(size: [usize; D]) -> Result<Self, GridError> {
        Self::with_rule(size, Rule::default_for(D))
    }

    /// Create an engine with explicit thresholds.
    pub fn with_rule(size: [usize; D], rule: Rule) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::new(size)?, rule))
    }

    /// Create an engine over a reproducibly seeded grid.
    pub fn with_seed(size: [usize; D], seed: u64) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::with_seed(size, seed)?, Rule::default_for(D)))
    }

    fn from_grid(grid: Grid<D>, rule: Rule) -> Self {
        Self {
            grid,
            rule,
            generation: 1,
            // Not yet evaluated; the first tick overwrites this
            stable: false,
        }
    }

    /// Advance the simulation by one generation.
    ///
    /// Every cell's next state is computed from its live-neighbor count and
    /// the current thresholds. If at least one cell changes, the new state
    /// is committed and the generation counter moves; if nothing changes,
    /// the grid is left untouched and the engine reports stable. A
    /// stabilized grid therefore stays byte-for-byte identical until
    /// someone injects state or swaps the rule.
    pub fn tick(&mut self) {
        let changed = self.grid.step(&self.rule);
        self.advance(changed);
    }

    /// Parallel version of `tick` for large grids
    pub fn tick_parallel(&mut self) {
        let changed = self.grid.step_parallel(&self.rule);
        self.advance(changed);
    }

    fn advance(&mut self, changed: bool) {
        if changed {
            self.grid.commit();
            self.generation += 1;
        } else if !self.stable {
            debug!("grid quiesced at generation {}", self.generation);
        }
        self.stable = !changed;
    }

    /// Advance the simulation by `ticks` generations.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Throw away the current state and start over on a fresh random grid
    /// of the same size.
    pub fn reset(&mut self) {
        self.grid.reseed(&mut rand::rng());
        self.generation = 1;
        self.stable = false;
        debug!("engine reset to a fresh random grid");
    }

    /// Read-only view of the owned grid
    pub const fn grid(&self) -> &Grid<D> {
        &self.grid
    }

    /// Current generation, counted from 1. Only ticks that change at least
    /// one cell advance it.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// True once a tick has produced no state change
    pub const fn is_stable(&self) -> bool {
        self.stable
    }

    /// Current thresholds
    pub const fn rule(&self) -> Rule {
        self.rule
    }

    /// Swap thresholds between ticks. Takes effect on the next tick;
    /// already-committed state is never touched.
    pub fn set_rule(&mut self, rule: Rule) {
        self.rule = rule;
    }
}

impl Game<2> {
    /// Override the whole grid state. Validates shape exactly like
    /// `Grid::set_living`; does not evaluate rules and does not touch the
    /// generation counter.
    pub fn set_living(&mut self, values: &[Vec<bool>]) -> Result<(), GridError> {
        self.grid.set_living(values)
    }
}

impl Game<3> {
    /// 3D variant of `set_living`, same contract.
    pub fn set_living(&mut self, values: &[Vec<Vec<bool>>]) -> Result<(), GridError> {
        self.grid.set_living(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, presets};

    fn dead_2d(size: [usize; 2]) -> Vec<Vec<bool>> {
        vec![vec![false; size[1]]; size[0]]
    }

    /// Center of a 3x3 grid plus the given extra live cells
    fn center_with(extra: &[[usize; 2]]) -> Vec<Vec<bool>> {
        let mut values = dead_2d([3, 3]);
        values[1][1] = true;
        for &[x, y] in extra {
            values[x][y] = true;
        }
        values
    }

    #[test]
    fn test_generation_starts_at_one() {
        let game = Game::new([3, 3]).unwrap();
        assert_eq!(game.generation(), 1);
    }

    #[test]
    fn test_default_rules_per_dimension() {
        assert_eq!(Game::new([3, 3]).unwrap().rule(), Rule::conway());
        assert_eq!(Game::new([3, 3, 3]).unwrap().rule(), Rule::cubic());
    }

    #[test]
    fn test_invalid_size_is_rejected() {
        assert_eq!(Game::new([0, 3]).unwrap_err(), GridError::InvalidSize);
        assert_eq!(Game::new([3, 3, 0]).unwrap_err(), GridError::InvalidSize);
    }

    #[test]
    fn test_tick_increments_generation_when_cells_change() {
        let mut game = Game::new([1, 1]).unwrap();
        game.set_living(&[vec![true]]).unwrap();

        // The lone cell has zero neighbors and dies
        game.tick();
        assert_eq!(game.generation(), 2);
        assert!(!game.is_stable());
        assert_eq!(game.grid().get([0, 0]), Some(Cell::Dead));
    }

    #[test]
    fn test_all_dead_grid_is_immediately_stable() {
        let mut game = Game::new([3, 3]).unwrap();
        game.set_living(&dead_2d([3, 3])).unwrap();

        game.tick();
        assert!(game.is_stable());
        assert_eq!(game.generation(), 1);
        assert!(game.grid().cells().iter().all(|c| !c.is_alive()));
    }

    #[test]
    fn test_lone_center_cell_dies_of_underpopulation() {
        let mut game = Game::new([3, 3]).unwrap();
        game.set_living(&center_with(&[])).unwrap();

        game.tick();
        assert_eq!(game.grid().get([1, 1]), Some(Cell::Dead));
        assert_eq!(game.generation(), 2);
        assert!(!game.is_stable());
    }

    #[test]
    fn test_center_with_two_neighbors_survives() {
        let mut game = Game::new([3, 3]).unwrap();
        game.set_living(&center_with(&[[0, 0], [1, 0]])).unwrap();

        game.tick();
        assert_eq!(game.grid().get([1, 1]), Some(Cell::Alive));
    }

    #[test]
    fn test_dead_center_with_three_neighbors_is_born() {
        let mut game = Game::new([3, 3]).unwrap();
        let mut values = dead_2d([3, 3]);
        values[0][0] = true;
        values[1][0] = true;
        values[1][2] = true;
        game.set_living(&values).unwrap();

        game.tick();
        assert_eq!(game.grid().get([1, 1]), Some(Cell::Alive));
    }

    #[test]
    fn test_cubic_center_with_nine_neighbors_survives() {
        let mut game = Game::new([3, 3, 3]).unwrap();

        // Whole x = 0 layer alive (9 cells, all neighbors of the center)
        // plus the center itself
        let mut values = vec![vec![vec![false; 3]; 3]; 3];
        values[0] = vec![vec![true; 3]; 3];
        values[1][1][1] = true;
        game.set_living(&values).unwrap();

        game.tick();
        assert_eq!(game.grid().get([1, 1, 1]), Some(Cell::Alive));
    }

    #[test]
    fn test_stability_is_idempotent() {
        let mut game = Game::new([3, 3]).unwrap();
        game.set_living(&dead_2d([3, 3])).unwrap();

        game.tick();
        assert!(game.is_stable());
        let generation = game.generation();

        game.tick();
        assert!(game.is_stable());
        assert_eq!(game.generation(), generation);
    }

    #[test]
    fn test_generation_frozen_while_stable() {
        let mut game = Game::new([4, 4]).unwrap();
        game.set_living(&dead_2d([4, 4])).unwrap();

        game.run(10);
        assert!(game.is_stable());
        assert_eq!(game.generation(), 1);
    }

    #[test]
    fn test_set_living_does_not_change_generation() {
        let mut game = Game::new([4, 4]).unwrap();
        let values = vec![vec![true; 4]; 4];
        game.set_living(&values).unwrap();
        assert_eq!(game.generation(), 1);
        assert!(game.grid().cells().iter().all(|c| c.is_alive()));
    }

    #[test]
    fn test_set_living_revives_a_stable_engine() {
        let mut game = Game::new([5, 5]).unwrap();
        game.set_living(&dead_2d([5, 5])).unwrap();
        game.tick();
        assert!(game.is_stable());

        game.set_living(&presets::blinker().values([5, 5], [1, 1]))
            .unwrap();
        game.tick();
        assert!(!game.is_stable());
        assert_eq!(game.generation(), 2);
    }

    #[test]
    fn test_set_rule_takes_effect_on_next_tick() {
        let mut game = Game::new([2, 2]).unwrap();
        game.set_living(&dead_2d([2, 2])).unwrap();
        game.tick();
        assert!(game.is_stable());

        // Birth band covering zero neighbors revives every cell
        game.set_rule(Rule::new(0, 8, 0, 8));
        game.tick();
        assert!(!game.is_stable());
        assert_eq!(game.generation(), 2);
        assert!(game.grid().cells().iter().all(|c| c.is_alive()));
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut game = Game::new([5, 5]).unwrap();
        let start = presets::blinker().values([5, 5], [1, 1]);
        game.set_living(&start).unwrap();

        game.tick();
        let flipped: Vec<Cell> = game.grid().cells().to_vec();
        game.tick();

        // Period 2: back to the seed orientation, two generations on
        assert!(!game.is_stable());
        assert_eq!(game.generation(), 3);
        let expected: Vec<Cell> = start
            .iter()
            .flatten()
            .map(|&alive| Cell::from(alive))
            .collect();
        assert_eq!(game.grid().cells(), &expected[..]);
        assert_ne!(game.grid().cells(), &flipped[..]);
    }

    #[test]
    fn test_block_is_a_still_life() {
        let mut game = Game::new([4, 4]).unwrap();
        game.set_living(&presets::block().values([4, 4], [1, 1]))
            .unwrap();

        game.tick();
        assert!(game.is_stable());
        assert_eq!(game.generation(), 1);
    }

    #[test]
    fn test_run_advances_multiple_generations() {
        let mut game = Game::new([5, 5]).unwrap();
        game.set_living(&presets::blinker().values([5, 5], [1, 1]))
            .unwrap();

        game.run(4);
        assert_eq!(game.generation(), 5);
    }

    #[test]
    fn test_reset_starts_over() {
        let mut game = Game::with_seed([8, 8], 42).unwrap();
        game.run(3);

        game.reset();
        assert_eq!(game.generation(), 1);
        assert!(!game.is_stable());
        assert_eq!(game.grid().size(), [8, 8]);
    }

    #[test]
    fn test_tick_parallel_matches_tick() {
        let mut serial = Game::with_seed([12, 12], 7).unwrap();
        let mut parallel = Game::with_seed([12, 12], 7).unwrap();

        for _ in 0..6 {
            serial.tick();
            parallel.tick_parallel();
            assert_eq!(serial.grid().cells(), parallel.grid().cells());
            assert_eq!(serial.generation(), parallel.generation());
            assert_eq!(serial.is_stable(), parallel.is_stable());
        }
    }
}
