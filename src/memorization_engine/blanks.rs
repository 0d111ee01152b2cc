use std::collections::BTreeSet;

use rand::{seq::index, Rng};

use crate::memorization_engine::models::{Ayah, Difficulty};

/// Choose which word positions of `ayah` are hidden at `difficulty`.
///
/// Exactly `difficulty.blank_count(words)` distinct indices are drawn
/// uniformly in one pass; difficulty 0 yields an empty set and 10 blanks
/// every word.
pub fn select_blanks<R: Rng>(rng: &mut R, ayah: &Ayah, difficulty: Difficulty) -> BTreeSet<usize> {
    let total = ayah.words.len();
    let count = difficulty.blank_count(total);
    index::sample(rng, total, count.min(total)).into_iter().collect()
}
