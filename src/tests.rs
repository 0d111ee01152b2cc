//! Crate-level tests for `hifz_drill`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical blanks, options and session id |
//! | Blank selection | Count matches difficulty for every ayah and level; indices distinct and in range |
//! | Options | Exactly one correct entry; `min(6, words)` entries for ayahs without repeated words |
//! | Quiz state | Correct picks are terminal; completion fires once in any answer order |
//! | Progression | Increase / advance / surah-complete decisions and the stored record |
//! | Full surah | A scripted learner walks Al-Ikhlas from difficulty 0 to completion |

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::memorization_engine::{
    generate_options, on_verse_complete, select_blanks, Ayah, Difficulty, Library, NextAction,
    ProgressRecord, ProgressStore, QuizSession, Resolution, SessionRequest, Trainer, Word,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

fn all_ayahs(lib: &Library) -> Vec<(&str, &Ayah)> {
    lib.surahs()
        .iter()
        .flat_map(|s| s.ayahs.iter().map(move |a| (s.id.as_str(), a)))
        .collect()
}

fn has_repeated_words(ayah: &Ayah) -> bool {
    let unique: HashSet<&str> = ayah.words.iter().map(|w| w.arabic.as_str()).collect();
    unique.len() != ayah.words.len()
}

/// Pick the right option for the open blank.
fn answer_correctly(session: &mut QuizSession, rng: &mut StdRng, index: usize) -> bool {
    let answer = session.ayah().words[index].arabic.clone();
    let options = session.select_blank_position(rng, index).unwrap().to_vec();
    let right = options.iter().find(|o| o.word == answer).unwrap();
    session.submit_option(right).unwrap().completes_verse
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_session() {
    let lib = Library::builtin();
    for (surah, ayah) in all_ayahs(&lib) {
        let make = || {
            let mut rng = StdRng::seed_from_u64(12345);
            let mut s = QuizSession::new(&mut rng, surah, ayah.clone(), Difficulty::new(7));
            let blank = s.words().iter().find(|w| w.is_blank).map(|w| w.index);
            let options = blank
                .and_then(|i| s.select_blank_position(&mut rng, i).map(|o| o.to_vec()))
                .unwrap_or_default();
            (s.id().to_string(), s.words().to_vec(), options)
        };
        assert_eq!(make(), make(), "session mismatch for {surah}:{}", ayah.id);
    }
}

#[test]
fn different_seeds_produce_varied_blanks() {
    let lib = Library::builtin();
    let ayah = lib.ayah("1", 6).unwrap();
    let picks: HashSet<Vec<usize>> = (0..40u64)
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            select_blanks(&mut rng, ayah, Difficulty::new(3)).into_iter().collect()
        })
        .collect();
    assert!(picks.len() > 10, "only {} distinct blank sets", picks.len());
}

#[test]
fn entropy_seed_starts_a_valid_trainer() {
    let lib = Library::builtin();
    let mut store = ProgressStore::new();
    let t = Trainer::start(&lib, &mut store, SessionRequest {
        difficulty: Difficulty::new(5),
        ..SessionRequest::new("1")
    }).unwrap();
    assert_eq!(t.progress().total_blanks, 2); // 4 words at 5/10
}

// ── blank selection ──────────────────────────────────────────────────────────

#[test]
fn blank_count_matches_difficulty_everywhere() {
    let lib = Library::builtin();
    for (_, ayah) in all_ayahs(&lib) {
        let n = ayah.words.len();
        for level in 0..=10u8 {
            for seed in SEEDS {
                let mut rng = StdRng::seed_from_u64(seed);
                let blanks = select_blanks(&mut rng, ayah, Difficulty::new(level));
                let expected = ((level as usize * n) as f64 / 10.0).round() as usize;
                assert_eq!(blanks.len(), expected, "ayah {} level {level}", ayah.id);
                assert!(blanks.iter().all(|&i| i < n));
            }
        }
    }
}

// ── options ──────────────────────────────────────────────────────────────────

#[test]
fn options_contain_exactly_one_correct_word() {
    let lib = Library::builtin();
    for (_, ayah) in all_ayahs(&lib) {
        for index in 0..ayah.words.len() {
            for seed in SEEDS {
                let mut rng = StdRng::seed_from_u64(seed);
                let opts = generate_options(&mut rng, ayah, index);
                let target = &ayah.words[index].arabic;
                assert_eq!(opts.iter().filter(|o| &o.word == target).count(), 1);
                if !has_repeated_words(ayah) {
                    assert_eq!(opts.len(), ayah.words.len().min(6));
                }
                for o in &opts {
                    assert_eq!(ayah.words[o.source_index].arabic, o.word);
                    assert_eq!(ayah.words[o.source_index].english, o.translation);
                }
            }
        }
    }
}

// ── quiz state ───────────────────────────────────────────────────────────────

#[test]
fn four_word_verse_completes_once_in_any_order() {
    let ayah = Ayah {
        id: 1,
        arabic: "a b c d".into(),
        english: "A B C D".into(),
        words: ["a", "b", "c", "d"].iter().map(|w| Word::new(*w, w.to_uppercase())).collect(),
    };
    let orders: [[usize; 4]; 3] = [[0, 1, 2, 3], [3, 2, 1, 0], [2, 0, 3, 1]];
    for (seed, order) in orders.iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let mut s = QuizSession::new(&mut rng, "t", ayah.clone(), Difficulty::MAX);
        assert!(s.words().iter().all(|w| w.is_blank));
        assert!(!s.take_completion());

        let mut fired = 0;
        for &index in order {
            if answer_correctly(&mut s, &mut rng, index) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert!(s.is_complete());
        assert!(s.take_completion());
        assert!(!s.take_completion());
        assert!(s.words().iter().all(|w| w.resolution == Resolution::Correct));
    }
}

#[test]
fn correct_position_is_terminal() {
    let lib = Library::builtin();
    let mut rng = StdRng::seed_from_u64(3);
    let mut s = QuizSession::new(&mut rng, "1", lib.ayah("1", 1).unwrap().clone(), Difficulty::MAX);
    answer_correctly(&mut s, &mut rng, 2);
    let before = s.words().to_vec();
    assert!(s.select_blank_position(&mut rng, 2).is_none());
    assert_eq!(s.words(), &before[..]);
    assert_eq!(s.progress().completed_count, 1);
}

#[test]
fn zero_difficulty_session_is_complete_immediately() {
    let lib = Library::builtin();
    for (surah, ayah) in all_ayahs(&lib) {
        let mut rng = StdRng::seed_from_u64(0);
        let mut s = QuizSession::new(&mut rng, surah, ayah.clone(), Difficulty::MIN);
        assert!(select_blanks(&mut rng, ayah, Difficulty::MIN).is_empty());
        assert!(s.is_complete());
        assert!(s.take_completion());
        assert!(!s.take_completion());
    }
}

// ── progression ──────────────────────────────────────────────────────────────

#[test]
fn progression_examples() {
    let mut store = ProgressStore::new();
    store.select_surah("1");
    assert_eq!(
        on_verse_complete(&mut store, "1", 0, Difficulty::new(5), 7).unwrap(),
        NextAction::IncreaseDifficulty { new_difficulty: Difficulty::new(6) }
    );
    assert_eq!(
        on_verse_complete(&mut store, "1", 0, Difficulty::MAX, 7).unwrap(),
        NextAction::AdvanceVerse { next_index: 1, reset_difficulty: Difficulty::MIN }
    );
    assert_eq!(
        on_verse_complete(&mut store, "1", 6, Difficulty::MAX, 7).unwrap(),
        NextAction::SurahComplete
    );
    assert_eq!(store.read_progress("1"), ProgressRecord {
        current_ayah: 7,
        difficulty: Difficulty::MAX,
        completed: true,
    });
}

// ── full surah ───────────────────────────────────────────────────────────────

#[test]
fn scripted_learner_finishes_al_ikhlas() {
    let lib = Library::builtin();
    let mut store = ProgressStore::new();
    let mut t = Trainer::start(&lib, &mut store, SessionRequest {
        rng_seed: Some(2024),
        ..SessionRequest::new("112")
    }).unwrap();

    let mut rounds = 0;
    while !t.is_finished() {
        let open: Vec<usize> = t.session().words().iter()
            .filter(|w| w.is_open())
            .map(|w| w.index)
            .collect();
        for index in open {
            let answer = t.session().ayah().words[index].arabic.clone();
            let options = t.tap(index).unwrap().to_vec();
            let choice = options.iter().position(|o| o.word == answer).unwrap();
            t.choose(&mut store, choice).unwrap();
        }
        assert!(t.pending_action().is_some(), "round {rounds} did not complete");
        t.continue_round(&mut store).unwrap();
        rounds += 1;
        assert!(rounds <= 44, "progression did not terminate");
    }

    // 4 ayahs × difficulties 0..=10.
    assert_eq!(rounds, 44);
    assert_eq!(store.read_progress("112"), ProgressRecord {
        current_ayah: 4,
        difficulty: Difficulty::MAX,
        completed: true,
    });
    assert_eq!(store.overall_percent(lib.surah("112").unwrap()), 100);
}
