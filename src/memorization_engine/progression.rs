use log::info;

use crate::error::{DrillError, Result};
use crate::memorization_engine::{
    models::{Difficulty, NextAction, ProgressRecord},
    progress::ProgressStore,
};

/// Decide what follows a completed verse. Pure; does not touch any store.
///
/// Below the top difficulty the same verse is repeated one step harder.
/// At the top the learner moves to the next verse at difficulty 0, or
/// finishes the surah on its last verse.
pub fn next_action(verse_index: usize, difficulty: Difficulty, surah_length: usize) -> NextAction {
    if !difficulty.is_max() {
        NextAction::IncreaseDifficulty { new_difficulty: difficulty.next() }
    } else if verse_index + 1 < surah_length {
        NextAction::AdvanceVerse { next_index: verse_index + 1, reset_difficulty: Difficulty::MIN }
    } else {
        NextAction::SurahComplete
    }
}

/// Record a completed verse in `store` and return the follow-up action.
///
/// The record is written before the action is returned, whatever the
/// action is. The surah must have been selected in `store` first.
pub fn on_verse_complete(
    store: &mut ProgressStore,
    surah_id: &str,
    verse_index: usize,
    difficulty: Difficulty,
    surah_length: usize,
) -> Result<NextAction> {
    if !store.contains(surah_id) {
        return Err(DrillError::SurahNotFound { id: surah_id.to_string() });
    }
    if verse_index >= surah_length {
        return Err(DrillError::VerseOutOfRange { index: verse_index, len: surah_length });
    }

    let is_last = verse_index + 1 == surah_length;
    store.write_progress(surah_id, ProgressRecord {
        current_ayah: verse_index + 1,
        difficulty,
        completed: is_last && difficulty.is_max(),
    });

    let action = next_action(verse_index, difficulty, surah_length);
    info!("surah {surah_id} ayah {}: {action}", verse_index + 1);
    Ok(action)
}
