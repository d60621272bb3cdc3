//! Straight-line selection resolution and word matching.
//!
//! These functions are pure: they read the grid and the word sets and return
//! verdicts. Updating session state on a match belongs to
//! [`Session`](crate::Session).

use std::collections::HashSet;
use std::fmt::Display;

use array2d::Array2D;

use crate::Coord;

/// An error caused by handing the selection routines a coordinate that does
/// not address a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionError {
    /// The coordinate lies outside the grid.
    InvalidCoordinate {
        /// The offending coordinate.
        coord: Coord,

        /// The number of rows in the grid.
        num_rows: usize,

        /// The number of columns in the grid.
        num_columns: usize,
    },
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionError::InvalidCoordinate {
                coord,
                num_rows,
                num_columns,
            } => {
                write!(
                    f,
                    "Coordinate ({}, {}) is outside the {} x {} grid",
                    coord.0, coord.1, num_rows, num_columns
                )
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// The verdict for one completed selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchResult {
    /// The selected letters spell this word, read forward or backward, and
    /// it had not been found yet.
    Matched(String),

    /// The selection spells no unfound word.
    NoMatch,
}

pub(crate) fn ensure_in_bounds(coord: Coord, grid: &Array2D<char>) -> Result<(), SelectionError> {
    if coord.0 < grid.num_rows() && coord.1 < grid.num_columns() {
        Ok(())
    } else {
        Err(SelectionError::InvalidCoordinate {
            coord,
            num_rows: grid.num_rows(),
            num_columns: grid.num_columns(),
        })
    }
}

/// Returns the cells on the straight line from `start` to `end`, both ends
/// inclusive, in selection order.
///
/// The endpoints form a line only if they share a row, share a column, or
/// sit on an exact diagonal; any other pair yields an empty vector, the
/// normal outcome for a drag that wanders off axis. `start == end` is a
/// valid single-cell line.
///
/// # Errors
///
/// Returns [`SelectionError::InvalidCoordinate`] if either endpoint is
/// outside the grid.
pub fn resolve_line(
    start: Coord,
    end: Coord,
    grid: &Array2D<char>,
) -> Result<Vec<Coord>, SelectionError> {
    ensure_in_bounds(start, grid)?;
    ensure_in_bounds(end, grid)?;

    let delta_row = end.0 as isize - start.0 as isize;
    let delta_column = end.1 as isize - start.1 as isize;

    if delta_row != 0 && delta_column != 0 && delta_row.abs() != delta_column.abs() {
        return Ok(Vec::new());
    }

    let step = (delta_row.signum(), delta_column.signum());
    let len = delta_row.abs().max(delta_column.abs()) as usize + 1;

    let mut cells = Vec::with_capacity(len);
    let mut row = start.0 as isize;
    let mut column = start.1 as isize;

    for _ in 0..len {
        cells.push((row as usize, column as usize));
        row += step.0;
        column += step.1;
    }

    Ok(cells)
}

/// Checks whether the letters at `cells` spell a word that has not been
/// found yet.
///
/// The concatenated letters are compared against `words` both as read and
/// reversed, so a word can be selected starting from either end. Words
/// already in `found` no longer match. The check has no side effects;
/// inserting a matched word into the found set is the caller's job.
///
/// # Errors
///
/// Returns [`SelectionError::InvalidCoordinate`] if any cell is outside the
/// grid.
pub fn check_match(
    cells: &[Coord],
    grid: &Array2D<char>,
    words: &[String],
    found: &HashSet<String>,
) -> Result<MatchResult, SelectionError> {
    let mut candidate = String::with_capacity(cells.len());
    for &cell in cells {
        ensure_in_bounds(cell, grid)?;
        candidate.push(grid[cell]);
    }

    let reversed: String = candidate.chars().rev().collect();

    for word in [candidate, reversed] {
        if words.contains(&word) && !found.contains(&word) {
            return Ok(MatchResult::Matched(word));
        }
    }

    Ok(MatchResult::NoMatch)
}
