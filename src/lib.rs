// Domain layer - core simulation logic
pub mod domain;

// Re-exports for convenience
pub use domain::{Cell, Game, Game2, Game3, Grid, Grid2, Grid3, GridError, Pattern, Rule, presets};
