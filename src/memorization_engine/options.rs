use std::collections::HashSet;

use rand::{seq::SliceRandom, Rng};

use crate::memorization_engine::models::{Ayah, WordOption};

/// Most options a picker shows: the answer plus five distractors.
pub const MAX_OPTIONS: usize = 6;

/// Build the multiple-choice picker for the blank at `correct_index`.
///
/// Distractors are other words of the same ayah drawn without replacement.
/// Words sharing the answer's Arabic form (or an already picked distractor's)
/// are skipped, so exactly one option is correct. The final order is
/// shuffled. Returns an empty list for an index outside the ayah.
pub fn generate_options<R: Rng>(rng: &mut R, ayah: &Ayah, correct_index: usize) -> Vec<WordOption> {
    let Some(correct) = ayah.words.get(correct_index) else {
        return Vec::new();
    };

    let mut others: Vec<usize> = (0..ayah.words.len()).filter(|&i| i != correct_index).collect();
    others.shuffle(rng);

    let mut seen: HashSet<&str> = HashSet::from([correct.arabic.as_str()]);
    let mut options: Vec<WordOption> = others
        .into_iter()
        .filter(|&i| seen.insert(ayah.words[i].arabic.as_str()))
        .take(MAX_OPTIONS - 1)
        .map(|i| option(ayah, i))
        .collect();

    options.push(option(ayah, correct_index));
    options.shuffle(rng);
    options
}

fn option(ayah: &Ayah, index: usize) -> WordOption {
    let word = &ayah.words[index];
    WordOption {
        word: word.arabic.clone(),
        translation: word.english.clone(),
        source_index: index,
    }
}
