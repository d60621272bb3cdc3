use rand::{rngs::StdRng, SeedableRng};
use word_hunt::puzzle::DEFAULT_MAX_ATTEMPTS;
use word_hunt::{GestureOutcome, Puzzle, PuzzleConfig, Session};

fn word_list() -> Vec<String> {
    ["mother", "love", "lawyer", "garden", "loyal", "family"]
        .iter()
        .map(|word| word.to_string())
        .collect()
}

#[test]
fn generate_play_and_win() {
    let words = word_list();
    let config = PuzzleConfig {
        num_rows: 15,
        num_columns: 15,
        words: &words,
        max_attempts: DEFAULT_MAX_ATTEMPTS,
    };

    let puzzle = Puzzle::generate(&config, &mut StdRng::seed_from_u64(2024)).unwrap();
    assert!(puzzle.unplaced().is_empty());

    let mut session = Session::new(puzzle);
    let placements: Vec<_> = session.puzzle().placements().to_vec();
    assert_eq!(placements.len(), words.len());

    let mut wins = 0;
    for placement in &placements {
        let cells = placement.cells();
        session.begin_gesture(cells[0]).unwrap();
        let outcome = session.end_gesture(*cells.last().unwrap()).unwrap();

        match outcome {
            GestureOutcome::Matched { word, .. } => assert_eq!(word, placement.word()),
            GestureOutcome::Won { word, .. } => {
                assert_eq!(word, placement.word());
                wins += 1;
            }
            other => panic!("expected a match for {:?}, got {other:?}", placement.word()),
        }
    }

    assert_eq!(wins, 1);
    assert!(session.is_complete());
    assert_eq!(session.found_words().len(), words.len());
}

#[test]
fn reset_regenerates_and_clears_progress() {
    let words = word_list();
    let config = PuzzleConfig {
        num_rows: 15,
        num_columns: 15,
        words: &words,
        max_attempts: DEFAULT_MAX_ATTEMPTS,
    };

    let puzzle = Puzzle::generate(&config, &mut StdRng::seed_from_u64(8)).unwrap();
    let mut session = Session::new(puzzle);

    let placement = session.puzzle().placements()[0].clone();
    let cells = placement.cells();
    session.begin_gesture(cells[0]).unwrap();
    session.end_gesture(*cells.last().unwrap()).unwrap();
    assert_eq!(session.found_words().len(), 1);

    session
        .reset(&config, &mut StdRng::seed_from_u64(9))
        .unwrap();

    assert!(session.found_words().is_empty());
    assert!(!session.is_complete());
}
