//! Core memorization engine: content, blanking, option pickers, quiz state
//! and progression.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: words, ayahs, surahs, difficulty, word state, progress records |
//! | `content`     | Immutable surah [`Library`](content::Library), bundled or loaded from JSON |
//! | `blanks`      | Which word positions a verse hides at a given difficulty |
//! | `options`     | Multiple-choice picker: the answer plus distractors from the same verse |
//! | `session`     | Per-verse quiz state machine with a one-shot completion latch |
//! | `progress`    | Caller-owned in-memory progress store |
//! | `progression` | What follows a completed verse |
//! | `trainer`     | Driver binding all of the above for a presentation layer |

pub mod blanks;
pub mod content;
pub mod models;
pub mod options;
pub mod progress;
pub mod progression;
pub mod session;
pub mod trainer;

pub use blanks::select_blanks;
pub use content::Library;
pub use models::{
    AnswerFeedback, AnswerStats, Ayah, AyahStatus, Difficulty, DisplayFormat, NextAction,
    ProgressRecord, QuizProgress, RenderHint, Resolution, SessionRequest, Surah, Word,
    WordOption, WordState,
};
pub use options::generate_options;
pub use progress::ProgressStore;
pub use progression::{next_action, on_verse_complete};
pub use session::QuizSession;
pub use trainer::Trainer;
