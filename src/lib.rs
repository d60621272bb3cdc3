#![warn(missing_docs)]

//! # Word hunt
//!
//! The core of a word-search puzzle: generating a letter grid with hidden
//! words, resolving straight-line selections, and tracking a play session's
//! found words through to completion.
//!
//! Rendering and input plumbing are left to the caller. The library deals
//! only in plain data: letter grids, coordinates, and match verdicts.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use word_hunt::{Puzzle, PuzzleConfig, Session};
//!
//! let words = vec![String::from("garden"), String::from("love")];
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let puzzle = Puzzle::generate(
//!     &PuzzleConfig {
//!         num_rows: 15,
//!         num_columns: 15,
//!         words: &words,
//!         max_attempts: 1000,
//!     },
//!     &mut rng,
//! )
//! .unwrap();
//!
//! let session = Session::new(puzzle);
//! assert!(!session.is_complete());
//! ```

pub mod puzzle;
pub mod selection;
pub mod session;

pub use puzzle::{Direction, GenerateError, Placement, Puzzle, PuzzleConfig};
pub use selection::{check_match, resolve_line, MatchResult, SelectionError};
pub use session::{GestureOutcome, GestureState, Session};

/// A grid coordinate as a `(row, column)` pair.
pub type Coord = (usize, usize);
