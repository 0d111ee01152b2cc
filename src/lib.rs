//! # hifz_drill
//!
//! Verse memorization drills: words of a Quranic ayah are progressively
//! blanked out and the learner restores each one from a multiple-choice
//! picker built from the same ayah.
//!
//! ## How it works
//!
//! 1. Load a [`Library`] of surahs (bundled, or from JSON) and create a
//!    [`ProgressStore`] that you own for as long as progress should live.
//! 2. Call [`Trainer::start`] with a [`SessionRequest`]: surah id, difficulty
//!    (0–10), display format, optional RNG seed.
//! 3. Forward taps with [`Trainer::tap`] and picks with [`Trainer::choose`].
//!    When every blank is answered the trainer records progress and holds a
//!    [`NextAction`] (harder round, next ayah, or surah complete) until the
//!    presentation layer calls [`Trainer::continue_round`].
//!
//! Rendering is left to the caller; [`view_adapter`] turns trainer state into
//! plain JSON for any UI.
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces blanks, option
//!   order and session ids.
//! - **Scaled difficulty**: difficulty `d` hides `round(d / 10 * words)`
//!   distinct positions, drawn in a single pass.
//! - **One-shot completion**: each round reports completion exactly once,
//!   including rounds with nothing blanked.
//!
//! ## Quick start
//!
//! ```rust
//! use hifz_drill::{Difficulty, Library, ProgressStore, SessionRequest, Trainer};
//!
//! let library = Library::builtin();
//! let mut store = ProgressStore::new();
//! let mut trainer = Trainer::start(&library, &mut store, SessionRequest {
//!     difficulty: Difficulty::new(10),
//!     rng_seed: Some(42),
//!     ..SessionRequest::new("112")
//! }).unwrap();
//!
//! // Every word is blank at difficulty 10; open the first one.
//! let options = trainer.tap(0).unwrap();
//! println!("{} options", options.len());
//! trainer.choose(&mut store, 0).unwrap();
//! println!("{:?}", trainer.progress());
//! ```

pub mod error;
pub mod memorization_engine;
pub mod view_adapter;

pub use error::{DrillError, Result};
pub use memorization_engine::{
    generate_options, next_action, on_verse_complete, select_blanks, AnswerFeedback,
    AnswerStats, Ayah, AyahStatus, Difficulty, DisplayFormat, Library, NextAction,
    ProgressRecord, ProgressStore, QuizProgress, QuizSession, RenderHint, Resolution,
    SessionRequest, Surah, Trainer, Word, WordOption, WordState,
};
pub use view_adapter::{session_view, surah_list_view, surah_progress_view, trainer_view};

#[cfg(test)]
mod tests;
