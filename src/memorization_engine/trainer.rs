//! Framework-free driver for one learning round over a surah.
//!
//! A [`Trainer`] ties the pieces together the way a learning screen would:
//! it owns the RNG and the current [`QuizSession`], forwards taps and picks,
//! reports completed verses to the progression rules, and holds the resulting
//! [`NextAction`] until the presentation layer confirms it with
//! [`Trainer::continue_round`]. The progress store stays owned by the caller
//! and is passed in wherever a verse might complete.
//!
//! Once [`NextAction::SurahComplete`] has been applied the trainer is
//! finished and every further action is a no-op.

use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::error::Result;
use crate::memorization_engine::{
    content::Library,
    models::{
        AnswerFeedback, Difficulty, DisplayFormat, NextAction, QuizProgress, RenderHint,
        ProgressRecord, SessionRequest, Surah, WordOption,
    },
    progress::ProgressStore,
    progression::{next_action, on_verse_complete},
    session::QuizSession,
};

/// Where a resumed trainer starts: the round after the last recorded one.
/// A surah that was only selected starts at its default record.
fn resume_point(store: &ProgressStore, surah: &Surah, record: ProgressRecord) -> (usize, Difficulty) {
    let len = surah.ayahs.len();
    let index = record.current_ayah.saturating_sub(1).min(len - 1);
    if !store.has_recorded(&surah.id) {
        return (index, record.difficulty);
    }
    match next_action(index, record.difficulty, len) {
        NextAction::IncreaseDifficulty { new_difficulty } => (index, new_difficulty),
        NextAction::AdvanceVerse { next_index, reset_difficulty } => (next_index, reset_difficulty),
        // Nothing left to learn; replay the last verse.
        NextAction::SurahComplete => (index, record.difficulty),
    }
}

#[derive(Debug)]
pub struct Trainer {
    surah: Surah,
    verse_index: usize,
    difficulty: Difficulty,
    display_format: DisplayFormat,
    rng: StdRng,
    session: QuizSession,
    pending: Option<NextAction>,
    finished: bool,
}

impl Trainer {
    /// Select the requested surah in `store` and open its first round.
    ///
    /// Fails with `SurahNotFound` for an id missing from `library`. A round
    /// with no blanks completes immediately, so a [`NextAction`] may already
    /// be pending on return.
    pub fn start(library: &Library, store: &mut ProgressStore, request: SessionRequest) -> Result<Self> {
        let surah = library.surah(&request.surah_id)?.clone();
        let record = store.select_surah(&surah.id);

        let (verse_index, difficulty) = if request.resume {
            resume_point(store, &surah, record)
        } else {
            (0, request.difficulty)
        };

        let mut rng = match request.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let session = QuizSession::new(&mut rng, &surah.id, surah.ayahs[verse_index].clone(), difficulty);

        info!("learning {surah} from ayah {} at difficulty {difficulty}", verse_index + 1);

        let mut trainer = Trainer {
            surah,
            verse_index,
            difficulty,
            display_format: request.display_format,
            rng,
            session,
            pending: None,
            finished: false,
        };
        trainer.check_completion(store)?;
        Ok(trainer)
    }

    pub fn surah(&self) -> &Surah {
        &self.surah
    }

    /// 0-based index of the ayah being quizzed.
    pub fn verse_index(&self) -> usize {
        self.verse_index
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn display_format(&self) -> DisplayFormat {
        self.display_format
    }

    pub fn set_display_format(&mut self, format: DisplayFormat) {
        self.display_format = format;
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Action awaiting confirmation after a completed verse.
    pub fn pending_action(&self) -> Option<NextAction> {
        self.pending
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn render(&self) -> Vec<RenderHint> {
        self.session.render(self.display_format)
    }

    pub fn progress(&self) -> QuizProgress {
        self.session.progress()
    }

    pub fn tap(&mut self, index: usize) -> Option<&[WordOption]> {
        if self.finished {
            return None;
        }
        self.session.select_blank_position(&mut self.rng, index)
    }

    pub fn close_picker(&mut self) {
        self.session.close_picker();
    }

    pub fn hint(&mut self) -> Option<&str> {
        if self.finished {
            return None;
        }
        self.session.hint()
    }

    pub fn submit_option(&mut self, store: &mut ProgressStore, option: &WordOption) -> Result<Option<AnswerFeedback>> {
        if self.finished {
            return Ok(None);
        }
        let feedback = self.session.submit_option(option);
        self.check_completion(store)?;
        Ok(feedback)
    }

    /// Answer with the `choice`-th entry of the open picker.
    pub fn choose(&mut self, store: &mut ProgressStore, choice: usize) -> Result<Option<AnswerFeedback>> {
        if self.finished {
            return Ok(None);
        }
        let feedback = self.session.choose(choice);
        self.check_completion(store)?;
        Ok(feedback)
    }

    /// Change difficulty by hand. Restarts the current ayah and drops any
    /// pending action.
    pub fn set_difficulty(&mut self, store: &mut ProgressStore, difficulty: Difficulty) -> Result<()> {
        if self.finished {
            debug!("{} is finished; difficulty stays {}", self.surah, self.difficulty);
            return Ok(());
        }
        debug!("difficulty set to {difficulty}");
        self.difficulty = difficulty;
        self.pending = None;
        self.rebuild();
        self.check_completion(store)
    }

    /// Apply the pending action and return it; `None` when nothing is pending.
    pub fn continue_round(&mut self, store: &mut ProgressStore) -> Result<Option<NextAction>> {
        let Some(action) = self.pending.take() else {
            return Ok(None);
        };
        match action {
            NextAction::IncreaseDifficulty { new_difficulty } => {
                self.difficulty = new_difficulty;
                self.rebuild();
            }
            NextAction::AdvanceVerse { next_index, reset_difficulty } => {
                self.verse_index = next_index;
                self.difficulty = reset_difficulty;
                self.rebuild();
            }
            NextAction::SurahComplete => {
                info!("finished {}", self.surah);
                self.finished = true;
                return Ok(Some(action));
            }
        }
        self.check_completion(store)?;
        Ok(Some(action))
    }

    fn rebuild(&mut self) {
        let ayah = self.surah.ayahs[self.verse_index].clone();
        self.session = QuizSession::new(&mut self.rng, &self.surah.id, ayah, self.difficulty);
    }

    fn check_completion(&mut self, store: &mut ProgressStore) -> Result<()> {
        if self.session.take_completion() {
            let action = on_verse_complete(
                store,
                &self.surah.id,
                self.verse_index,
                self.difficulty,
                self.surah.ayahs.len(),
            )?;
            self.pending = Some(action);
        }
        Ok(())
    }
}
