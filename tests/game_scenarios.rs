//! End-to-end behaviour through the public API

use hardword::core::{FeedbackRow, LetterFeedback, MAX_TURNS, Word, evaluate};
use hardword::game::{
    Dictionary, Game, GameEvent, GameStatus, GuessError, OpenDictionary, SavedGame, WordList,
};
use hardword::solver::{Constraints, HardModeViolation, HintEngine};
use hardword::wordlists::{WORDS, loader::words_from_slice};
use std::cell::RefCell;
use std::rc::Rc;

use LetterFeedback::{Absent, Correct, Present};

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn corpus() -> Vec<Word> {
    words_from_slice(WORDS)
}

#[test]
fn react_against_crane() {
    let row = evaluate(&word("react"), &word("crane"));
    assert_eq!(row.count_correct(), 1);
    assert_eq!(row.at(2), Correct);
    assert_eq!(row.count_present(), 3);
    assert_eq!(row.count_absent(), 1);
}

#[test]
fn level_against_hello() {
    // the second L is the one without a partner in the secret
    let row = evaluate(&word("level"), &word("hello"));
    assert_eq!(row.cells(), &[Present, Correct, Absent, Absent, Present]);
}

#[test]
fn hard_mode_slate_stare_scenario() {
    let corpus = corpus();
    let dict = WordList::new(corpus.clone()).unwrap();
    let mut game = Game::with_secret(dict, &corpus, word("stare"));
    game.set_hard_mode(true);

    let row = game.submit_guess("slate").unwrap();
    assert_eq!(row.cells(), &[Correct, Absent, Correct, Present, Correct]);

    let err = game.submit_guess("sored").unwrap_err();
    assert_eq!(
        err,
        GuessError::HardMode(HardModeViolation::PositionMismatch {
            position: 2,
            required: b'a',
        })
    );
    assert_eq!(game.turn(), 1);

    assert!(game.submit_guess("state").is_ok());
    assert_eq!(game.turn(), 2);
}

#[test]
fn hit_counts_never_exceed_secret_counts() {
    let corpus = corpus();
    for guess in corpus.iter().step_by(7) {
        for secret in corpus.iter().step_by(11) {
            let row = evaluate(guess, secret);
            for letter in b'a'..=b'z' {
                let hits = guess
                    .chars()
                    .iter()
                    .zip(row.cells())
                    .filter(|&(&c, outcome)| c == letter && outcome.is_hit())
                    .count();
                assert!(hits <= usize::from(secret.count_of(letter)));
            }
        }
    }
}

#[test]
fn evaluate_is_reflexive_and_case_insensitive() {
    for text in WORDS.iter().take(50) {
        let lower = word(text);
        let upper = word(&text.to_uppercase());
        assert!(evaluate(&lower, &lower).is_perfect());
        assert_eq!(evaluate(&lower, &upper), evaluate(&upper, &upper));
    }
}

#[test]
fn six_misses_lose_and_lock_the_game() {
    let corpus = words_from_slice(&["crane", "bingo", "mouth", "fifty", "jazzy", "quack", "thorn"]);
    let dict = WordList::new(corpus.clone()).unwrap();
    let mut game = Game::with_secret(dict, &corpus, word("crane"));

    for guess in ["bingo", "mouth", "fifty", "jazzy", "quack", "thorn"] {
        game.submit_guess(guess).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.turn(), MAX_TURNS);

    let err = game.submit_guess("crane").unwrap_err();
    assert_eq!(err, GuessError::NotInProgress(GameStatus::Lost));
    assert_eq!(game.turn(), MAX_TURNS);

    game.reset(Some(word("bingo")));
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.history().is_empty());
}

#[test]
fn hard_mode_keeps_revealed_greens() {
    let corpus = corpus();
    let dict = WordList::new(corpus.clone()).unwrap();

    for secret in corpus.iter().step_by(13) {
        let mut game = Game::with_secret(&dict, &corpus, secret.clone());
        game.set_hard_mode(true);

        // try every corpus word in order; only accepted ones enter the history
        for guess in corpus.iter().step_by(3) {
            if game.status().is_over() {
                break;
            }
            let greens: Vec<(usize, u8)> = game.constraints().required_positions().collect();
            if game.submit_guess(guess.text()).is_ok() {
                for (position, letter) in greens {
                    assert_eq!(guess.char_at(position), letter);
                }
            }
        }
    }
}

#[test]
fn hints_exclude_history_and_respect_k() {
    let corpus = corpus();
    let engine = HintEngine::new(&corpus);
    let secret = word("crane");
    let history: Vec<(Word, FeedbackRow)> = ["slate", "irate"]
        .iter()
        .map(|g| {
            let guess = word(g);
            let row = evaluate(&guess, &secret);
            (guess, row)
        })
        .collect();

    for k in [0, 1, 3, 10] {
        let hints = engine.suggest(&history, k);
        assert!(hints.len() <= k);
        for hint in &hints {
            assert!(history.iter().all(|(guess, _)| guess != *hint));
        }
    }

    let constraints = Constraints::derive(&history);
    for candidate in engine.candidates(&history) {
        assert!(constraints.admits(candidate));
    }
    assert!(engine.candidates(&history).contains(&&secret));
}

#[test]
fn hints_empty_when_nothing_fits() {
    let corpus = words_from_slice(&["crane", "slate"]);
    let engine = HintEngine::new(&corpus);
    let history = vec![(word("fifty"), FeedbackRow::PERFECT)];
    assert!(engine.suggest(&history, 5).is_empty());
    assert_eq!(engine.count_candidates(&history), 0);
}

#[test]
fn replay_reproduces_rows_and_status() {
    let corpus = corpus();
    let dict = WordList::new(corpus.clone()).unwrap();
    let mut original = Game::with_secret(&dict, &corpus, word("stare"));
    original.submit_guess("crane").unwrap();
    original.submit_guess("slate").unwrap();
    original.submit_guess("stare").unwrap();

    // the stored status is not trusted
    let saved = SavedGame {
        status: GameStatus::InProgress,
        ..original.snapshot()
    };
    let restored = Game::restore(&dict, &corpus, &saved).unwrap();

    assert_eq!(restored.history(), original.history());
    assert_eq!(restored.status(), GameStatus::Won);
    assert_eq!(restored.keyboard(), original.keyboard());
}

#[test]
fn open_dictionary_accepts_unlisted_words() {
    let corpus = words_from_slice(&["crane"]);
    let dict = OpenDictionary::new(WordList::new(corpus.clone()).unwrap());
    assert!(dict.is_valid_word(&word("qxzvj")));

    let mut game = Game::new(dict, &corpus);
    assert_eq!(game.secret().text(), "crane");
    assert!(game.submit_guess("qxzvj").is_ok());
}

#[test]
fn subscribers_only_see_successful_mutations() {
    let corpus = corpus();
    let dict = WordList::new(corpus.clone()).unwrap();
    let mut game = Game::with_secret(dict, &corpus, word("crane"));

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    game.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    assert!(game.submit_guess("zz").is_err());
    assert!(game.submit_guess("crane").is_ok());
    game.reset(None);

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[0],
        GameEvent::GuessAccepted {
            turn: 1,
            status: GameStatus::Won,
            ..
        }
    ));
    assert_eq!(events[1], GameEvent::Reset);
}
