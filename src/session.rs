//! Session state: the found-word set, the gesture state machine, and the
//! one-shot win signal.

use std::collections::HashSet;

use rand::Rng;

use crate::puzzle::{GenerateError, Puzzle, PuzzleConfig};
use crate::selection::{check_match, ensure_in_bounds, resolve_line, MatchResult};
use crate::{Coord, SelectionError};

/// Where a session is within one selection gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    /// No selection in progress.
    Idle,

    /// A selection is in progress from the recorded start cell.
    Selecting {
        /// The cell the gesture started on.
        start: Coord,
    },
}

/// What one completed gesture amounted to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The gesture ended while no selection was in progress, e.g. a release
    /// event with no matching press. Nothing happened.
    Ignored,

    /// The endpoints were not collinear, so no cells were selected.
    NoLine,

    /// The selected cells spell no unfound word.
    NoMatch {
        /// The cells that were selected.
        cells: Vec<Coord>,
    },

    /// A word was found.
    Matched {
        /// The word that was found.
        word: String,

        /// The cells spelling it, in selection order.
        cells: Vec<Coord>,
    },

    /// The last word was found. Reported exactly once per puzzle.
    Won {
        /// The word that completed the puzzle.
        word: String,

        /// The cells spelling it, in selection order.
        cells: Vec<Coord>,
    },
}

/// A single-player play-through of one puzzle.
///
/// The session owns the puzzle and the set of found words, and it is the
/// only writer of that set. Gestures are strictly serial: starting a new
/// selection while one is in progress restarts the gesture rather than
/// corrupting it, and ending a gesture always returns the session to idle.
#[derive(Debug)]
pub struct Session {
    puzzle: Puzzle,
    found: HashSet<String>,
    gesture: GestureState,
    win_reported: bool,
}

impl Session {
    /// Creates a session for the given puzzle with nothing found yet.
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            found: HashSet::new(),
            gesture: GestureState::Idle,
            win_reported: false,
        }
    }

    /// The puzzle being played.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The words found so far.
    pub fn found_words(&self) -> &HashSet<String> {
        &self.found
    }

    /// Where the session is within the current gesture.
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Whether every word in the list has been found.
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.puzzle.words().len()
    }

    /// Starts a selection gesture at `start`.
    ///
    /// Starting while a gesture is already in progress abandons the old one
    /// and begins fresh from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvalidCoordinate`] if `start` is outside
    /// the grid; the gesture state is left unchanged.
    pub fn begin_gesture(&mut self, start: Coord) -> Result<(), SelectionError> {
        ensure_in_bounds(start, self.puzzle.grid())?;
        self.gesture = GestureState::Selecting { start };
        Ok(())
    }

    /// The cells the current drag spans, for the caller to highlight.
    ///
    /// Empty when no gesture is in progress, and also when `current` is not
    /// collinear with the gesture's start, in which case only the start cell
    /// is worth highlighting.
    pub fn preview(&self, current: Coord) -> Result<Vec<Coord>, SelectionError> {
        match self.gesture {
            GestureState::Idle => Ok(Vec::new()),
            GestureState::Selecting { start } => resolve_line(start, current, self.puzzle.grid()),
        }
    }

    /// Ends the current gesture at `end` and reports what it amounted to.
    ///
    /// The session returns to idle regardless of the outcome. On a match the
    /// word joins the found set, and the match that completes the word list
    /// is reported as [`GestureOutcome::Won`] exactly once per puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvalidCoordinate`] if `end` is outside the
    /// grid. The gesture still ends.
    pub fn end_gesture(&mut self, end: Coord) -> Result<GestureOutcome, SelectionError> {
        let GestureState::Selecting { start } = self.gesture else {
            return Ok(GestureOutcome::Ignored);
        };
        self.gesture = GestureState::Idle;

        let cells = resolve_line(start, end, self.puzzle.grid())?;
        if cells.is_empty() {
            return Ok(GestureOutcome::NoLine);
        }

        match check_match(&cells, self.puzzle.grid(), self.puzzle.words(), &self.found)? {
            MatchResult::NoMatch => Ok(GestureOutcome::NoMatch { cells }),
            MatchResult::Matched(word) => {
                self.found.insert(word.clone());
                log::debug!(
                    "found {:?} ({} of {})",
                    word,
                    self.found.len(),
                    self.puzzle.words().len()
                );

                if self.is_complete() && !self.win_reported {
                    self.win_reported = true;
                    Ok(GestureOutcome::Won { word, cells })
                } else {
                    Ok(GestureOutcome::Matched { word, cells })
                }
            }
        }
    }

    /// Replaces the puzzle with a freshly generated one and clears all
    /// session state: the found set, the gesture state, and the win guard.
    pub fn reset<R: Rng>(
        &mut self,
        config: &PuzzleConfig<'_>,
        rng: &mut R,
    ) -> Result<(), GenerateError> {
        self.puzzle = Puzzle::generate(config, rng)?;
        self.found.clear();
        self.gesture = GestureState::Idle;
        self.win_reported = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::DEFAULT_MAX_ATTEMPTS;
    use rand::{rngs::StdRng, SeedableRng};

    fn sample_session(seed: u64) -> Session {
        let words = vec![
            String::from("garden"),
            String::from("loyal"),
            String::from("mother"),
        ];

        let puzzle = Puzzle::generate(
            &PuzzleConfig {
                num_rows: 15,
                num_columns: 15,
                words: &words,
                max_attempts: DEFAULT_MAX_ATTEMPTS,
            },
            &mut StdRng::seed_from_u64(seed),
        )
        .unwrap();

        // Three short words in a 15x15 grid always place within the retry bound
        assert!(puzzle.unplaced().is_empty());

        Session::new(puzzle)
    }

    fn select(session: &mut Session, cells: &[Coord]) -> GestureOutcome {
        let start = cells[0];
        let end = *cells.last().unwrap();
        session.begin_gesture(start).unwrap();
        session.end_gesture(end).unwrap()
    }

    #[test]
    fn gesture_moves_between_idle_and_selecting() {
        let mut session = sample_session(1);
        assert_eq!(session.gesture(), GestureState::Idle);

        session.begin_gesture((2, 2)).unwrap();
        assert_eq!(session.gesture(), GestureState::Selecting { start: (2, 2) });

        // Non-collinear end: the gesture still resolves and returns to idle
        assert_eq!(session.end_gesture((5, 6)).unwrap(), GestureOutcome::NoLine);
        assert_eq!(session.gesture(), GestureState::Idle);
    }

    #[test]
    fn ending_without_a_gesture_is_ignored() {
        let mut session = sample_session(1);
        assert_eq!(session.end_gesture((0, 0)).unwrap(), GestureOutcome::Ignored);
    }

    #[test]
    fn restarting_a_gesture_replaces_its_start() {
        let mut session = sample_session(1);
        session.begin_gesture((0, 0)).unwrap();
        session.begin_gesture((4, 4)).unwrap();
        assert_eq!(session.gesture(), GestureState::Selecting { start: (4, 4) });
    }

    #[test]
    fn out_of_grid_start_is_rejected() {
        let mut session = sample_session(1);
        assert!(session.begin_gesture((15, 0)).is_err());
        assert_eq!(session.gesture(), GestureState::Idle);
    }

    #[test]
    fn preview_follows_the_drag() {
        let mut session = sample_session(1);
        assert!(session.preview((3, 3)).unwrap().is_empty());

        session.begin_gesture((2, 2)).unwrap();
        assert_eq!(
            session.preview((2, 4)).unwrap(),
            vec![(2, 2), (2, 3), (2, 4)]
        );
        assert!(session.preview((5, 6)).unwrap().is_empty());
    }

    #[test]
    fn finding_every_word_wins_exactly_once() {
        let mut session = sample_session(9);
        let placements: Vec<_> = session.puzzle().placements().to_vec();

        for (i, placement) in placements.iter().enumerate() {
            let outcome = select(&mut session, &placement.cells());

            if i + 1 == placements.len() {
                assert!(matches!(outcome, GestureOutcome::Won { ref word, .. }
                    if word == placement.word()));
            } else {
                assert!(matches!(outcome, GestureOutcome::Matched { ref word, .. }
                    if word == placement.word()));
            }
        }

        assert!(session.is_complete());

        // Re-selecting a found word neither matches nor re-fires the win
        let outcome = select(&mut session, &placements[0].cells());
        assert!(matches!(outcome, GestureOutcome::NoMatch { .. }));
    }

    #[test]
    fn found_words_cannot_be_counted_twice() {
        let mut session = sample_session(5);
        let placement = session.puzzle().placements()[0].clone();

        let first = select(&mut session, &placement.cells());
        assert!(matches!(first, GestureOutcome::Matched { .. }));
        assert_eq!(session.found_words().len(), 1);

        let second = select(&mut session, &placement.cells());
        assert!(matches!(second, GestureOutcome::NoMatch { .. }));
        assert_eq!(session.found_words().len(), 1);
    }

    #[test]
    fn reset_clears_the_session() {
        let mut session = sample_session(9);
        let placements: Vec<_> = session.puzzle().placements().to_vec();
        for placement in &placements {
            select(&mut session, &placement.cells());
        }
        assert!(session.is_complete());

        let words = vec![String::from("friendship"), String::from("baba")];
        session
            .reset(
                &PuzzleConfig {
                    num_rows: 15,
                    num_columns: 15,
                    words: &words,
                    max_attempts: DEFAULT_MAX_ATTEMPTS,
                },
                &mut StdRng::seed_from_u64(21),
            )
            .unwrap();

        assert!(session.found_words().is_empty());
        assert!(!session.is_complete());
        assert_eq!(session.gesture(), GestureState::Idle);
        assert_eq!(session.puzzle().words(), ["FRIENDSHIP", "BABA"]);
    }
}
