mod cell;
mod error;
mod game;
mod grid;
mod patterns;
mod rules;

pub use cell::Cell;
pub use error::GridError;
pub use game::Game;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use rules::Rule;

/// Convenience aliases for the supported dimensionalities
pub type Grid2 = Grid<2>;
pub type Grid3 = Grid<3>;
pub type Game2 = Game<2>;
pub type Game3 = Game<3>;
