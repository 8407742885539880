//! Conway's Game of Life on a sparse, `i64`-bounded plane.

pub mod enc;
pub mod engine;
pub mod pos;

pub use enc::{Codec, FormatError, Life106};
pub use engine::{Board, GameOfLife, run, run_parallel, step, step_parallel};
pub use pos::Pos2;
