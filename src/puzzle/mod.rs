//! Connect-the-dots puzzle generation.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`options`] | Difficulty, start position, working resolution, TOML config |
//! | [`placement`] | Difficulty-driven simplification and dot spacing |
//! | [`numbering`] | Start selection and 1..N numbering |
//! | [`pipeline`] | Orchestrator, progress, batch runs |

pub mod numbering;
pub mod options;
pub mod pipeline;
pub mod placement;

pub use numbering::{assign_numbers, NumberedPoint};
pub use options::{PuzzleOptions, StartPosition};
pub use pipeline::{
    generate_batch, generate_puzzle, generate_puzzle_with_progress, ImageSize, PuzzleResult,
};
pub use placement::{place_points, PlacedPoint};
