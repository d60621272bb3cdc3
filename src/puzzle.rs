//! Puzzle generation: randomized placement of words into a letter grid.

use std::fmt::Display;
use std::ops::Index;

use array2d::Array2D;
use rand::Rng;

use crate::Coord;

/// An error that happened when generating the puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// The word list given to [`Puzzle::generate`] was empty, so there is no
    /// puzzle to build.
    EmptyWordList,
}

impl Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::EmptyWordList => {
                write!(f, "Cannot generate a puzzle from an empty word list")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// The direction a word runs in inside the puzzle grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The word goes up from its origin.
    Up,

    /// The word goes down from its origin.
    Down,

    /// The word goes left from its origin.
    Left,

    /// The word goes right from its origin.
    Right,

    /// The word goes diagonally up and left from its origin.
    UpLeft,

    /// The word goes diagonally up and right from its origin.
    UpRight,

    /// The word goes diagonally down and left from its origin.
    DownLeft,

    /// The word goes diagonally down and right from its origin.
    DownRight,
}

impl Direction {
    /// All eight directions a word may run in.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Returns the `(row, column)` unit step taken between consecutive
    /// letters of a word running in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }
}

/// Describes where a word's letters sit in the grid: the cell holding its
/// first letter and the direction the rest of it runs in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    word: String,
    origin: Coord,
    direction: Direction,
}

impl Placement {
    /// The word this placement embeds in the grid.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The grid cell holding the word's first letter.
    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// The direction the word runs in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the cells the word occupies, in letter order.
    ///
    /// Placements are only constructed for spans that fit the grid, so every
    /// returned coordinate is in bounds.
    pub fn cells(&self) -> Vec<Coord> {
        let (delta_row, delta_column) = self.direction.delta();
        let mut row = self.origin.0 as isize;
        let mut column = self.origin.1 as isize;

        let len = self.word.chars().count();
        let mut cells = Vec::with_capacity(len);

        for _ in 0..len {
            cells.push((row as usize, column as usize));
            row += delta_row;
            column += delta_column;
        }

        cells
    }
}

/// The configuration for puzzle generation. See [`Puzzle::generate`] for
/// details.
#[derive(Debug)]
pub struct PuzzleConfig<'a> {
    /// The number of rows.
    pub num_rows: usize,

    /// The number of columns.
    pub num_columns: usize,

    /// The words to hide in the grid. Words are uppercased before placement,
    /// so the list may be given in any case.
    pub words: &'a [String],

    /// How many random origin and direction samples to try per word before
    /// giving up on it.
    pub max_attempts: usize,
}

/// The default number of placement attempts per word.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// A generated word-search puzzle: the letter grid, the word list, and where
/// each successfully placed word ended up.
#[derive(Debug)]
pub struct Puzzle {
    grid: Array2D<char>,
    words: Vec<String>,
    placements: Vec<Placement>,
    unplaced: Vec<String>,
}

impl Puzzle {
    /// Generates a puzzle from the given configuration.
    ///
    /// Each word is tried at up to `config.max_attempts` uniformly random
    /// origin and direction samples. A sample is rejected if the word would
    /// run off the grid, or if any of its cells already holds a different
    /// letter than the word needs there. Same-letter overlap is accepted,
    /// which is what lets words cross each other. On success all of the
    /// word's letters are committed at once; a rejected sample leaves the
    /// grid untouched.
    ///
    /// A word that exhausts its attempts is skipped and reported through
    /// [`Puzzle::unplaced`] rather than failing generation; in particular, a
    /// word longer than both grid dimensions can never place. Once every
    /// word has been attempted, each still-empty cell is filled with a
    /// uniformly random letter from A to Z.
    ///
    /// The output is a pure function of the RNG stream, so generating twice
    /// with the same seed produces identical puzzles.
    pub fn generate<R: Rng>(
        config: &PuzzleConfig<'_>,
        rng: &mut R,
    ) -> Result<Self, GenerateError> {
        if config.words.is_empty() {
            return Err(GenerateError::EmptyWordList);
        }

        let words: Vec<String> = config
            .words
            .iter()
            .map(|word| word.to_ascii_uppercase())
            .collect();

        let mut slots: Array2D<Option<char>> =
            Array2D::filled_with(None, config.num_rows, config.num_columns);

        let mut placements = Vec::with_capacity(words.len());
        let mut unplaced = Vec::new();

        for word in &words {
            match place_word(&mut slots, word, config.max_attempts, rng) {
                Some(placement) => {
                    log::debug!(
                        "placed {:?} at {:?} running {:?}",
                        placement.word,
                        placement.origin,
                        placement.direction
                    );
                    placements.push(placement);
                }
                None => {
                    log::warn!(
                        "could not place {:?} after {} attempts; it will not be findable",
                        word,
                        config.max_attempts
                    );
                    unplaced.push(word.clone());
                }
            }
        }

        let letters: Vec<char> = ('A'..='Z').collect();

        let mut grid = Array2D::filled_with(' ', config.num_rows, config.num_columns);
        for row in 0..config.num_rows {
            for column in 0..config.num_columns {
                grid[(row, column)] = match slots[(row, column)] {
                    Some(letter) => letter,
                    None => letters[rng.gen_range(0..letters.len())],
                };
            }
        }

        Ok(Self {
            grid,
            words,
            placements,
            unplaced,
        })
    }

    /// The number of rows in the puzzle grid.
    pub fn num_rows(&self) -> usize {
        self.grid.num_rows()
    }

    /// The number of columns in the puzzle grid.
    pub fn num_columns(&self) -> usize {
        self.grid.num_columns()
    }

    /// Provides a reference to the inner letter grid.
    pub fn grid(&self) -> &Array2D<char> {
        &self.grid
    }

    /// Gets the letter at the specified coordinate, returning
    /// [`Option::None`] if the coordinate is out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        self.grid.get(row, column).copied()
    }

    /// The full word list in input order, uppercased. Includes words that
    /// failed to place.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Where each successfully placed word sits in the grid.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The words that exhausted their placement attempts and are absent from
    /// the grid. Callers may warn or regenerate; a puzzle with unplaced
    /// words can never be completed.
    pub fn unplaced(&self) -> &[String] {
        &self.unplaced
    }
}

impl Index<Coord> for Puzzle {
    type Output = char;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut words_iter = self.words.iter();

        for row in self.grid.rows_iter() {
            for &letter in row {
                f.write_fmt(format_args!("{} ", letter))?;
            }

            match words_iter.next() {
                Some(word) => f.write_fmt(format_args!("| {}\n", word))?,
                None => f.write_str("|\n")?,
            }
        }

        Ok(())
    }
}

/// Computes the cells `len` letters occupy from `origin` along `direction`,
/// or `None` if any of them falls outside the grid.
fn span_cells(
    origin: Coord,
    direction: Direction,
    len: usize,
    num_rows: usize,
    num_columns: usize,
) -> Option<Vec<Coord>> {
    let (delta_row, delta_column) = direction.delta();
    let mut row = origin.0 as isize;
    let mut column = origin.1 as isize;

    let mut cells = Vec::with_capacity(len);

    for _ in 0..len {
        if row < 0 || column < 0 || row >= num_rows as isize || column >= num_columns as isize {
            return None;
        }

        cells.push((row as usize, column as usize));
        row += delta_row;
        column += delta_column;
    }

    Some(cells)
}

/// Writes `word` into the grid at `origin` along `direction` if every cell
/// it needs is empty or already holds the matching letter. The grid is left
/// untouched when the placement is rejected.
fn try_place_at(
    slots: &mut Array2D<Option<char>>,
    word: &str,
    origin: Coord,
    direction: Direction,
) -> bool {
    let letters: Vec<char> = word.chars().collect();

    let Some(span) = span_cells(
        origin,
        direction,
        letters.len(),
        slots.num_rows(),
        slots.num_columns(),
    ) else {
        return false;
    };

    let fits = span
        .iter()
        .zip(&letters)
        .all(|(&cell, &letter)| match slots[cell] {
            None => true,
            Some(existing) => existing == letter,
        });

    if !fits {
        return false;
    }

    for (&cell, &letter) in span.iter().zip(&letters) {
        slots[cell] = Some(letter);
    }

    true
}

/// Repeatedly samples a random origin and direction for `word` until it
/// places or the attempts run out.
fn place_word<R: Rng>(
    slots: &mut Array2D<Option<char>>,
    word: &str,
    max_attempts: usize,
    rng: &mut R,
) -> Option<Placement> {
    for _ in 0..max_attempts {
        let origin = (
            rng.gen_range(0..slots.num_rows()),
            rng.gen_range(0..slots.num_columns()),
        );
        let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];

        if try_place_at(slots, word, origin, direction) {
            return Some(Placement {
                word: word.to_string(),
                origin,
                direction,
            });
        }
    }

    None
}
