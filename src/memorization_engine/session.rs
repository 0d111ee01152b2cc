//! Per-verse quiz state machine.
//!
//! A [`QuizSession`] is created for one ayah at one difficulty and thrown away
//! when either changes. Word positions move through:
//!
//! ```text
//! Visible                      (never blanked, terminal)
//! Unresolved ──pick──► Correct (terminal)
//!      │                 ▲
//!      └──pick──► Incorrect ──pick──┘   (an incorrect blank stays tappable)
//! ```
//!
//! Completion is a latch armed by the transition that resolves the last
//! blank (or at creation when there are no blanks) and consumed once through
//! [`QuizSession::take_completion`].

use log::debug;
use rand::{Rng, RngCore};

use crate::memorization_engine::{
    blanks::select_blanks,
    models::{
        AnswerFeedback, AnswerStats, Ayah, Difficulty, DisplayFormat, QuizProgress, RenderHint,
        Resolution, WordOption, WordState,
    },
    options::generate_options,
};

#[derive(Debug, Clone)]
pub struct QuizSession {
    id: String,
    ayah: Ayah,
    difficulty: Difficulty,
    words: Vec<WordState>,
    total_blanks: usize,
    completed: usize,
    selected: Option<usize>,
    options: Vec<WordOption>,
    completion_pending: bool,
    stats: AnswerStats,
}

fn make_session_id(surah_id: &str, ayah: &Ayah, difficulty: Difficulty, rng: &mut impl RngCore) -> String {
    format!("{}-{}-D{}-{:08X}", surah_id, ayah.id, difficulty.level(), rng.next_u32())
}

impl QuizSession {
    /// Blank `ayah` at `difficulty` and start a fresh round.
    pub fn new<R: Rng>(rng: &mut R, surah_id: &str, ayah: Ayah, difficulty: Difficulty) -> Self {
        let id = make_session_id(surah_id, &ayah, difficulty, rng);
        let blanks = select_blanks(rng, &ayah, difficulty);
        let words: Vec<WordState> = (0..ayah.words.len())
            .map(|index| WordState {
                index,
                is_blank: blanks.contains(&index),
                is_selected: false,
                resolution: Resolution::Unresolved,
            })
            .collect();

        debug!("session {id}: {} of {} words blanked", blanks.len(), words.len());

        QuizSession {
            id,
            ayah,
            difficulty,
            words,
            total_blanks: blanks.len(),
            completed: 0,
            selected: None,
            options: Vec::new(),
            // Nothing to answer: the round is complete as soon as it starts.
            completion_pending: blanks.is_empty(),
            stats: AnswerStats::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn ayah(&self) -> &Ayah {
        &self.ayah
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn words(&self) -> &[WordState] {
        &self.words
    }

    pub fn stats(&self) -> AnswerStats {
        self.stats
    }

    /// Blank whose picker is open, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Options of the open picker; empty when closed.
    pub fn options(&self) -> &[WordOption] {
        &self.options
    }

    /// Open the picker for the blank at `index`.
    ///
    /// Taps on visible words, already correct blanks, or out-of-range
    /// positions are ignored and return `None`.
    pub fn select_blank_position<R: Rng>(&mut self, rng: &mut R, index: usize) -> Option<&[WordOption]> {
        if !self.words.get(index).is_some_and(WordState::is_open) {
            debug!("session {}: ignoring tap on {index}", self.id);
            return None;
        }
        if let Some(prev) = self.selected.take() {
            self.words[prev].is_selected = false;
        }
        self.words[index].is_selected = true;
        self.selected = Some(index);
        self.options = generate_options(rng, &self.ayah, index);
        Some(&self.options)
    }

    /// Dismiss the picker without answering.
    pub fn close_picker(&mut self) {
        if let Some(index) = self.selected.take() {
            self.words[index].is_selected = false;
        }
        self.options.clear();
    }

    /// Answer the open blank with `option`. Returns `None` when no picker is
    /// open. The picker is closed whatever the outcome.
    pub fn submit_option(&mut self, option: &WordOption) -> Option<AnswerFeedback> {
        let Some(index) = self.selected else {
            debug!("session {}: no picker open", self.id);
            return None;
        };
        let is_correct = option.word == self.ayah.words[index].arabic;

        let state = &mut self.words[index];
        state.resolution = if is_correct { Resolution::Correct } else { Resolution::Incorrect };
        self.close_picker();

        let mut completes_verse = false;
        if is_correct {
            self.stats.correct += 1;
            self.completed += 1;
            if self.completed == self.total_blanks {
                completes_verse = true;
                self.completion_pending = true;
                debug!("session {}: all {} blanks answered", self.id, self.total_blanks);
            }
        } else {
            self.stats.incorrect += 1;
        }
        debug!("session {}: position {index} answered {}", self.id,
            if is_correct { "correctly" } else { "incorrectly" });

        Some(AnswerFeedback { index, is_correct, completes_verse })
    }

    /// Answer with the `choice`-th entry of the open picker.
    pub fn choose(&mut self, choice: usize) -> Option<AnswerFeedback> {
        let option = self.options.get(choice)?.clone();
        self.submit_option(&option)
    }

    /// English gloss of the open blank. Counted in the round's statistics.
    pub fn hint(&mut self) -> Option<&str> {
        let index = self.selected?;
        self.stats.hints += 1;
        Some(self.ayah.words[index].english.as_str())
    }

    pub fn is_complete(&self) -> bool {
        self.completed == self.total_blanks
    }

    /// Returns `true` exactly once, after the round became complete.
    pub fn take_completion(&mut self) -> bool {
        std::mem::take(&mut self.completion_pending)
    }

    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            completed_count: self.completed,
            total_blanks: self.total_blanks,
            is_complete: self.is_complete(),
        }
    }

    /// One hint per word; hidden blanks carry no text.
    pub fn render(&self, format: DisplayFormat) -> Vec<RenderHint> {
        self.words
            .iter()
            .map(|w| {
                let revealed = !w.is_blank || w.resolution == Resolution::Correct;
                RenderHint {
                    text: revealed.then(|| self.ayah.words[w.index].text(format).to_string()),
                    is_blank: w.is_blank,
                    resolution: w.resolution,
                }
            })
            .collect()
    }
}
